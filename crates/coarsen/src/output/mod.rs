//! Output writing for generalized tables.

mod writer;

pub use writer::{OutputFormat, Writer};

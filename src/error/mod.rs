//! Unified error types for the reader

pub mod formatting;
mod types;

pub use types::{ErrorKind, ReadError, ReadResult};

//! Shared functionality
//!
//! This crate supplies the input buffer and the error types that are used by the
//! docss css3 scanner and parser.
//!

pub mod byte_stream;
pub mod errors;

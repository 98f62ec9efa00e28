//! Error types and error handling for the lexer.
//!
//! This module defines the errors a scan can fail with. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for each failure kind
//! - Error formatting and helpful suggestions

pub mod errors;

#[cfg(test)]
mod tests;

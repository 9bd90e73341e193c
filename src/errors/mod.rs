//! Error types and error handling for the parser.
//!
//! This module defines the errors recorded while parsing. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for each kind of grammar violation
//! - Error names and suggestions used when rendering diagnostics

pub mod errors;

//! Diagnostics shared by every phase.
//!
//! This module defines:
//!
//! - Error structures anchored to a source span
//! - Specific error variants, grouped into SyntaxError, ReferenceError and
//!   ModuleNotFoundError kinds
//! - Rendering of the offending source line with a caret underline

pub mod errors;

#[cfg(test)]
mod tests;

//! Core definitions (error types and argument checks), relied upon by the seqview crate.

pub mod error;
pub mod result;

pub use result::Result;

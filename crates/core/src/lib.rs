//! Domain vocabulary shared by the storage and HTTP layers.
//!
//! Nothing in this crate performs I/O.

pub mod error;
pub mod pagination;
pub mod patch;
pub mod types;

//! Marshaling between host buffers and the solver input contract.
//!
//! This module provides:
//! - Layout conversion from the host's column-major storage to the
//!   solver's row-major contract
//! - Population of function-descriptor sequences from host records, with
//!   scalar-broadcast-or-per-element field resolution
//! - Extraction of solver settings from an optional parameter record

pub mod functions;
pub mod layout;
pub mod params;

pub use functions::{populate, FunctionKind, FunctionObj};
pub use layout::col_to_row_major;
pub use params::{extract_settings, Settings};

//! Host-side data model.
//!
//! This module mirrors what a dynamically-typed, column-major host hands
//! across the boundary:
//! - [`HostArray`]: a dense 2-D buffer whose element representation is
//!   identified by a class tag
//! - [`HostRecord`]: a struct-like container of named fields

pub mod array;
pub mod record;

pub use array::{ClassId, HostArray, HostData};
pub use record::HostRecord;

//! demodel-core: byte-range source editing for demodel
//!
//! Provides the `Edit` primitive produced by the rewrite rules and the
//! machinery to apply a batch of edits to a source string.

pub mod edit;

pub use edit::{apply_edits, Edit, EditError};

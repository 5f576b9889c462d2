//! Boundary schema validation.
//!
//! Turns untyped JSON field bags into validated scene objects. Every check reports the path of
//! the offending field; the first failure aborts construction.

pub(crate) mod base;
pub(crate) mod dispatch;
pub(crate) mod fields;
pub(crate) mod music;
pub(crate) mod variants;
pub(crate) mod vocab;

//! Validated scene model: content objects, the composition container and parameter descriptors.

pub(crate) mod composition;
pub(crate) mod music;
pub(crate) mod object;
pub(crate) mod params;

//! Output generation.
//!
//! # Submodules
//!
//! - [`json`]: writes section datasets as JSON arrays for the front-end

pub mod json;

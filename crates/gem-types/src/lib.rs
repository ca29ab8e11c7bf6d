//! Shared data model for decoded gem faceting designs.
//!
//! Everything here is plain data: the decoder in `gem-format` produces a
//! [`GeometryModel`], and consumers such as `gem-preview` read it.

pub mod facet;
pub mod metadata;
pub mod model;
pub mod vector;

pub use facet::*;
pub use metadata::*;
pub use model::*;
pub use vector::*;

//! Widget overlap resolver for dynamic-geometry constructions.
//!
//! This crate loads `.ggb` archives (or bare `geogebra.xml` files), moves
//! screen-anchored sliders and buttons so they stop overlapping on a screen of
//! a different size, and writes the result back with everything else intact.
//!
//! The binary `adjustscreen` runs the pass over files and prints a JSON
//! report of every widget it moved.

pub mod adjust;
pub mod config;
pub mod file;
pub mod generator;
pub mod geometry;
pub mod model;
pub mod parser;

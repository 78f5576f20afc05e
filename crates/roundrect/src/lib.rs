//! Rounded rectangle drawing crate.
//!
//! This crate owns the rounded-rectangle geometry and the surface abstraction it
//! draws through, plus two surfaces: a recording [`scene::DrawList`] and a CPU
//! [`raster::Canvas`].

pub mod coords;
pub mod logging;
pub mod paint;
pub mod path;
pub mod raster;
pub mod round_rect;
pub mod scene;
pub mod surface;

pub use round_rect::{add_round_rect, corner_diameter, draw_round_rect, fill_round_rect};

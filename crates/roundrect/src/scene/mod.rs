//! Recording surface.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands in call order
//! - remember the page unit that was active for each command
//!
//! `DrawList` implements [`Surface`](crate::surface::Surface), so any drawing
//! helper can target it and the result can be inspected or replayed later.

mod cmd;
mod list;

pub use cmd::{DrawCmd, FillCmd, StrokeCmd};
pub use list::{DrawItem, DrawList};

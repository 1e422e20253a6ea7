//! Rendering contract
//!
//! The simulation never draws. Hosts implement [`Canvas`] for their backend
//! and call [`draw`] once per frame after ticking.

pub mod canvas;
pub mod scene;

pub use canvas::{Canvas, Color, DrawCommand, RecordingCanvas, colors};
pub use scene::draw;

//! Rendering hand-off
//!
//! The simulation produces a [`Frame`] per tick; drawing it is up to a
//! [`FrameSink`] implementation (a wgpu pipeline using [`Vertex::desc`]).

pub mod frame;
pub mod vertex;

pub use frame::{DrawCall, Frame, FrameSink, FrameStats};
pub use vertex::{DrawUniforms, Vertex};

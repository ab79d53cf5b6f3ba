//! Ember engine crate.
//!
//! Immediate-mode 2D drawing over wgpu: a run-length batched vertex
//! accumulator, primitive emitters, and a renderer that submits the whole
//! accumulated list in one pass per frame.

pub mod coords;
pub mod device;
pub mod draw;
pub mod input;
pub mod logging;
pub mod paint;
pub mod render;
pub mod text;

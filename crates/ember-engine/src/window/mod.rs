//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, and wires them to the GPU layer.

mod runtime;
mod size;

pub use runtime::{Runtime, RuntimeConfig};
pub use size::default_window_size;

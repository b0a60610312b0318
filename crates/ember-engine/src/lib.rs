//! Ember engine crate.
//!
//! Opens a window and brings up a GPU adapter/device/surface for it. The
//! interesting part is [`adapter::select_adapter`]; the rest is setup glue
//! over `winit` and `wgpu`.

pub mod adapter;
pub mod core;
pub mod device;
pub mod logging;
pub mod window;

//! GPU device + surface management.
//!
//! This module is responsible for:
//! - selecting the adapter and creating the wgpu Device/Queue
//! - creating & configuring the Surface
//! - keeping the surface in sync with the window size

mod error;
mod gpu;
mod init;
pub mod pipeline;
mod surface;

pub use error::InitError;
pub use gpu::Gpu;
pub use init::GpuInit;

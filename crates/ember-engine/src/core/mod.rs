//! Core engine-facing contracts.
//!
//! This module defines the interface between the runtime (platform loop) and
//! the application built on top of it.

mod app;

pub use app::{App, AppControl};

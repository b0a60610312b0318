use winit::event::WindowEvent;

use crate::device::{Gpu, InitError};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
///
/// Every callback has a default, so an empty `impl App for T {}` is a valid
/// app that just keeps the window open until it is closed.
pub trait App {
    /// Called once, when the GPU context for the window is ready.
    fn on_ready(&mut self, gpu: &mut Gpu) -> AppControl {
        let _ = gpu;
        AppControl::Continue
    }

    /// Called once if initialization fails. The runtime exits afterwards.
    fn on_init_failed(&mut self, err: InitError) {
        let _ = err;
    }

    /// Called for window events, before the runtime's own handling.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called once per redraw after initialization succeeded.
    fn on_frame(&mut self, gpu: &mut Gpu) -> AppControl {
        let _ = gpu;
        AppControl::Continue
    }
}

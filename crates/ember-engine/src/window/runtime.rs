use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowAttributes, WindowId};

use crate::core::{App, AppControl};
use crate::device::{Gpu, GpuInit, InitError};
use crate::logging::Logger;

#[cfg(not(target_arch = "wasm32"))]
use super::size::default_window_size;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,

    /// Physical window size. `None` picks a size from the primary monitor
    /// natively, and keeps the canvas size in the browser.
    pub initial_size: Option<PhysicalSize<u32>>,

    /// CSS selector of the canvas to render into.
    #[cfg(target_arch = "wasm32")]
    pub canvas_selector: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "ember".to_string(),
            initial_size: None,
            #[cfg(target_arch = "wasm32")]
            canvas_selector: "#canvas".to_string(),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window, initializes the GPU and runs the event loop until
    /// the window is closed or the app asks to exit.
    ///
    /// Returns the initialization error if setup did not complete.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, logger: Logger, app: A) -> Result<(), InitError>
    where
        A: 'static + App,
    {
        let event_loop = create_event_loop(&logger)?;
        let mut state = AppState::new(config, gpu_init, logger, app);

        if let Err(e) = event_loop.run_app(&mut state) {
            state
                .logger
                .error(format!("[ember] event loop terminated with error: {e}"));
            return Err(InitError::WindowingInit);
        }

        match state.failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Hands the runtime to the browser event loop and returns immediately.
    ///
    /// Initialization completes later; failures reach the app through
    /// [`App::on_init_failed`] and the logger. Errors creating the event loop
    /// itself are returned directly.
    #[cfg(target_arch = "wasm32")]
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, logger: Logger, app: A) -> Result<(), InitError>
    where
        A: 'static + App,
    {
        use winit::platform::web::EventLoopExtWebSys;

        let event_loop = create_event_loop(&logger)?;
        event_loop.spawn_app(AppState::new(config, gpu_init, logger, app));
        Ok(())
    }
}

fn create_event_loop(logger: &Logger) -> Result<EventLoop<()>, InitError> {
    EventLoop::new().map_err(|e| {
        logger.error(format!("[ember] failed to initialize windowing system: {e}"));
        InitError::WindowingInit
    })
}

/// Init result handed from the (possibly deferred) pipeline back to the loop.
type PendingGpu = Rc<RefCell<Option<Result<Gpu, InitError>>>>;

struct AppState<A>
where
    A: App + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    logger: Logger,
    app: A,

    window: Option<Arc<Window>>,
    pending: PendingGpu,
    gpu: Option<Gpu>,

    failure: Option<InitError>,
    exit_requested: bool,
}

impl<A> AppState<A>
where
    A: App + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, logger: Logger, app: A) -> Self {
        Self {
            config,
            gpu_init,
            logger,
            app,
            window: None,
            pending: Rc::new(RefCell::new(None)),
            gpu: None,
            failure: None,
            exit_requested: false,
        }
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        event_loop.exit();
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: InitError) {
        self.logger
            .error(format!("[ember] initialization failed: {err}"));
        self.failure = Some(err);
        self.window = None;
        self.app.on_init_failed(err);
        self.request_exit(event_loop);
    }

    fn create_window(&self, event_loop: &ActiveEventLoop) -> Result<Arc<Window>, InitError> {
        let attrs = self.window_attributes(event_loop)?;

        event_loop.create_window(attrs).map(Arc::new).map_err(|e| {
            self.logger
                .error(format!("[ember] failed to create window: {e}"));
            InitError::WindowCreation
        })
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn window_attributes(&self, event_loop: &ActiveEventLoop) -> Result<WindowAttributes, InitError> {
        let size = self.config.initial_size.unwrap_or_else(|| {
            default_window_size(event_loop.primary_monitor().map(|m| m.size()))
        });

        Ok(Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(size))
    }

    #[cfg(target_arch = "wasm32")]
    fn window_attributes(&self, _event_loop: &ActiveEventLoop) -> Result<WindowAttributes, InitError> {
        use winit::platform::web::WindowAttributesExtWebSys;

        let Some(canvas) = find_canvas(&self.config.canvas_selector) else {
            self.logger.error(format!(
                "[ember] no canvas matches '{}'",
                self.config.canvas_selector
            ));
            return Err(InitError::WindowCreation);
        };

        let mut attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_canvas(Some(canvas));
        if let Some(size) = self.config.initial_size {
            attrs = attrs.with_inner_size(size);
        }
        Ok(attrs)
    }

    /// Runs the init pipeline to completion on this thread.
    #[cfg(not(target_arch = "wasm32"))]
    fn start_gpu_init(&self, window: Arc<Window>) {
        let result = pollster::block_on(Gpu::new(
            window,
            self.gpu_init.clone(),
            self.logger.clone(),
        ));
        *self.pending.borrow_mut() = Some(result);
    }

    /// Spawns the init pipeline on the browser event loop; the result is
    /// picked up by `collect_pending` on a later callback.
    #[cfg(target_arch = "wasm32")]
    fn start_gpu_init(&self, window: Arc<Window>) {
        let gpu_init = self.gpu_init.clone();
        let logger = self.logger.clone();
        let pending = Rc::clone(&self.pending);

        wasm_bindgen_futures::spawn_local(async move {
            let result = Gpu::new(Arc::clone(&window), gpu_init, logger).await;
            *pending.borrow_mut() = Some(result);
            window.request_redraw();
        });
    }

    fn collect_pending(&mut self, event_loop: &ActiveEventLoop) {
        let Some(result) = self.pending.borrow_mut().take() else {
            return;
        };

        match result {
            Ok(mut gpu) => {
                let control = self.app.on_ready(&mut gpu);
                gpu.window().request_redraw();
                self.gpu = Some(gpu);

                if control == AppControl::Exit {
                    self.request_exit(event_loop);
                }
            }
            Err(err) => self.fail(event_loop, err),
        }
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.exit_requested {
            return;
        }

        let window = match self.create_window(event_loop) {
            Ok(window) => window,
            Err(err) => {
                self.fail(event_loop, err);
                return;
            }
        };

        self.window = Some(Arc::clone(&window));
        self.start_gpu_init(window);
        self.collect_pending(event_loop);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.collect_pending(event_loop);

        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw.
        if let Some(gpu) = &self.gpu {
            gpu.window().request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        self.collect_pending(event_loop);

        if self.exit_requested {
            event_loop.exit();
            return;
        }

        if self.app.on_window_event(&event) == AppControl::Exit {
            self.request_exit(event_loop);
            return;
        }

        let mut control = AppControl::Continue;

        match event {
            WindowEvent::CloseRequested => control = AppControl::Exit,

            WindowEvent::Resized(new_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize_surface(new_size.width, new_size.height);
                    gpu.window().request_redraw();
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(gpu) = &mut self.gpu {
                    let new_size = gpu.window().inner_size();
                    gpu.resize_surface(new_size.width, new_size.height);
                    gpu.window().request_redraw();
                }
            }

            WindowEvent::RedrawRequested => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.process_events();
                    control = self.app.on_frame(gpu);
                }
            }

            _ => {}
        }

        if control == AppControl::Exit {
            self.request_exit(event_loop);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn find_canvas(selector: &str) -> Option<web_sys::HtmlCanvasElement> {
    use wasm_bindgen::JsCast;

    web_sys::window()?
        .document()?
        .query_selector(selector)
        .ok()??
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .ok()
}

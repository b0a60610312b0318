use std::sync::Arc;

use winit::dpi::PhysicalSize;
use winit::window::Window;

use crate::logging::Logger;

use super::pipeline;
use super::surface;
use super::{GpuInit, InitError};

/// The initialized window + GPU bundle.
///
/// Owns the window handle together with the wgpu Instance/Adapter/Device/Queue
/// and the configured Surface. Produced once by [`Gpu::new`] and then kept by
/// the runtime for the lifetime of the window.
pub struct Gpu {
    window: Arc<Window>,

    /// Kept alive for the surface and for adapter/device bookkeeping.
    instance: wgpu::Instance,

    surface: wgpu::Surface<'static>,
    adapter: wgpu::Adapter,
    device: wgpu::Device,
    queue: wgpu::Queue,

    /// Active surface configuration.
    config: wgpu::SurfaceConfiguration,

    /// Current drawable size in physical pixels.
    size: PhysicalSize<u32>,

    logger: Logger,
}

impl Gpu {
    /// Runs the initialization pipeline for `window`.
    ///
    /// Stages, in order: adapter selection, device creation, surface
    /// configuration. The first failing stage decides the error.
    pub async fn new(window: Arc<Window>, init: GpuInit, logger: Logger) -> Result<Self, InitError> {
        // A minimized or not-yet-laid-out window reports 0x0.
        let size = surface::clamped_size(window.inner_size());

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: init.adapter_preference.backends_mask(),
            ..Default::default()
        });

        let adapter = pipeline::request_adapter(
            &instance,
            &init.adapter_preference,
            init.power_preference,
            &logger,
        )
        .await?;
        let (device, queue) = pipeline::request_device(&adapter, &init, &logger).await?;
        let (surface, config) = pipeline::configure_surface(
            &instance,
            Arc::clone(&window),
            &adapter,
            &device,
            &init,
            size,
            &logger,
        )?;

        logger.info(format!(
            "[ember] gpu ready: {}x{} {:?}",
            config.width, config.height, config.format
        ));

        Ok(Self {
            window,
            instance,
            surface,
            adapter,
            device,
            queue,
            config,
            size,
            logger,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn instance(&self) -> &wgpu::Instance {
        &self.instance
    }

    pub fn adapter(&self) -> &wgpu::Adapter {
        &self.adapter
    }

    /// Returns a reference to the logical device.
    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    /// Returns a reference to the command queue.
    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    pub fn surface(&self) -> &wgpu::Surface<'static> {
        &self.surface
    }

    /// Returns the active surface format.
    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Returns the current drawable size (physical pixels).
    pub fn size(&self) -> PhysicalSize<u32> {
        self.size
    }

    /// Reconfigures the surface for a new drawable size.
    ///
    /// Never fails; a size wgpu cannot configure is logged and ignored, and the
    /// previous configuration stays active.
    pub fn resize_surface(&mut self, width: u32, height: u32) {
        let applied = surface::apply_resize(
            &self.surface,
            &self.device,
            &mut self.config,
            &mut self.size,
            PhysicalSize::new(width, height),
        );

        if !applied {
            self.logger.warning(format!(
                "[ember] ignoring surface resize to {width}x{height}; keeping {}x{}",
                self.config.width, self.config.height
            ));
        }
    }

    /// Lets the device run pending callbacks without blocking.
    pub fn process_events(&self) {
        if let Err(e) = self.device.poll(wgpu::PollType::Poll) {
            self.logger.error(format!("[ember] device poll failed: {e}"));
        }
    }
}

//! The staged initialization sequence.
//!
//! request adapter -> request device -> configure surface. Each stage runs
//! exactly once and either hands its output to the next stage or ends the
//! sequence with an [`InitError`]. Nothing is retried.
//!
//! The stages are `async` only because the graphics runtime is. Natively the
//! whole sequence is driven to completion with `pollster::block_on`; in the
//! browser it is spawned on the JS event loop. In both cases it is a single
//! sequential chain with no cancellation and no timeout: once started it runs
//! until it produces a device or an error.

use std::sync::Arc;

use winit::dpi::PhysicalSize;
use winit::window::Window;

use crate::adapter::{AdapterPreference, select_adapter};
use crate::logging::Logger;

use super::surface;
use super::{GpuInit, InitError};

/// Collects candidate adapters on the preferred backends and selects one.
pub async fn request_adapter(
    instance: &wgpu::Instance,
    preference: &AdapterPreference,
    power_preference: wgpu::PowerPreference,
    logger: &Logger,
) -> Result<wgpu::Adapter, InitError> {
    let adapters = candidate_adapters(instance, preference, power_preference, logger).await;

    for adapter in &adapters {
        let info = adapter.get_info();
        logger.info(format!(
            "[ember] found adapter '{}' ({:?}, {:?})",
            info.name, info.device_type, info.backend
        ));
    }

    let Some(adapter) = select_adapter(&adapters, preference) else {
        logger.error(format!(
            "[ember] no suitable adapter among {} candidate(s); wanted {:?} on {:?}",
            adapters.len(),
            preference.device_types(),
            preference.backends()
        ));
        return Err(InitError::NoSuitableAdapter);
    };

    let info = adapter.get_info();
    logger.info(format!(
        "[ember] selected adapter '{}' ({:?}, {:?})",
        info.name, info.device_type, info.backend
    ));

    Ok(adapter.clone())
}

/// Every adapter on the preferred backends.
#[cfg(not(target_arch = "wasm32"))]
async fn candidate_adapters(
    instance: &wgpu::Instance,
    preference: &AdapterPreference,
    _power_preference: wgpu::PowerPreference,
    _logger: &Logger,
) -> Vec<wgpu::Adapter> {
    instance.enumerate_adapters(preference.backends_mask()).await
}

/// The browser hands out one adapter, picked by the power hint.
#[cfg(target_arch = "wasm32")]
async fn candidate_adapters(
    instance: &wgpu::Instance,
    _preference: &AdapterPreference,
    power_preference: wgpu::PowerPreference,
    logger: &Logger,
) -> Vec<wgpu::Adapter> {
    let requested = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference,
            compatible_surface: None,
            force_fallback_adapter: false,
        })
        .await;

    match requested {
        Ok(adapter) => vec![adapter],
        Err(e) => {
            logger.warning(format!("[ember] browser adapter request failed: {e}"));
            Vec::new()
        }
    }
}

/// Creates the logical device and its queue, and routes device errors to `logger`.
pub async fn request_device(
    adapter: &wgpu::Adapter,
    init: &GpuInit,
    logger: &Logger,
) -> Result<(wgpu::Device, wgpu::Queue), InitError> {
    let (device, queue) = adapter
        .request_device(&wgpu::DeviceDescriptor {
            label: Some("ember-engine device"),
            required_features: init.required_features,
            required_limits: init.required_limits.clone(),
            experimental_features: wgpu::ExperimentalFeatures::disabled(),
            memory_hints: wgpu::MemoryHints::Performance,
            trace: wgpu::Trace::Off,
        })
        .await
        .map_err(|e| {
            logger.error(format!("[ember] failed to request device: {e}"));
            InitError::DeviceCreation
        })?;

    install_device_callbacks(&device, logger);

    Ok((device, queue))
}

/// Creates the window surface and configures it for `device`.
pub fn configure_surface(
    instance: &wgpu::Instance,
    window: Arc<Window>,
    adapter: &wgpu::Adapter,
    device: &wgpu::Device,
    init: &GpuInit,
    size: PhysicalSize<u32>,
    logger: &Logger,
) -> Result<(wgpu::Surface<'static>, wgpu::SurfaceConfiguration), InitError> {
    let surface = instance.create_surface(window).map_err(|e| {
        logger.error(format!("[ember] failed to create surface: {e}"));
        InitError::SurfaceCreation
    })?;

    let caps = surface.get_capabilities(adapter);
    let Some(format) = surface::choose_surface_format(&caps.formats, init.preferred_format) else {
        logger.error("[ember] surface is not compatible with the selected adapter");
        return Err(InitError::SurfaceCreation);
    };

    if format != init.preferred_format {
        logger.warning(format!(
            "[ember] surface does not support {:?}, using {format:?}",
            init.preferred_format
        ));
    }

    let size = surface::clamped_size(size);
    let config = wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format,
        width: size.width,
        height: size.height,
        present_mode: init.present_mode,
        alpha_mode: surface::choose_alpha_mode(&caps.alpha_modes, init.alpha_mode),
        view_formats: vec![],
        desired_maximum_frame_latency: init.desired_maximum_frame_latency,
    };

    surface.configure(device, &config);

    Ok((surface, config))
}

fn install_device_callbacks(device: &wgpu::Device, logger: &Logger) {
    let lost = logger.clone();
    device.set_device_lost_callback(move |reason, message| {
        let reason = match reason {
            wgpu::DeviceLostReason::Destroyed => "Destroyed",
            _ => "Unknown",
        };
        lost.error(format!("[ember] device lost - {reason} - {message}"));
    });

    let errors = logger.clone();
    device.on_uncaptured_error(Arc::new(move |error: wgpu::Error| {
        let kind = match &error {
            wgpu::Error::OutOfMemory { .. } => "OutOfMemory",
            wgpu::Error::Validation { .. } => "Validation",
            _ => "Internal",
        };
        errors.error(format!("[ember] device error - {kind} - {error}"));
    }));
}

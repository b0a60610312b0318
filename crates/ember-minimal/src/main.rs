use anyhow::Context;

use ember_engine::core::{App, AppControl};
use ember_engine::device::{Gpu, GpuInit};
use ember_engine::logging::{init_logging, Logger, LoggingConfig};
use ember_engine::window::{Runtime, RuntimeConfig};

/// Brings the GPU up and keeps the window open until it is closed.
struct Minimal;

impl App for Minimal {
    fn on_ready(&mut self, gpu: &mut Gpu) -> AppControl {
        let size = gpu.size();
        log::info!(
            "ready: {}x{} {:?} on '{}'",
            size.width,
            size.height,
            gpu.surface_format(),
            gpu.adapter().get_info().name
        );
        AppControl::Continue
    }
}

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "ember minimal".to_string(),
        ..Default::default()
    };

    Runtime::run(config, GpuInit::default(), Logger::log_facade(), Minimal)
        .context("failed to create app")?;

    Ok(())
}

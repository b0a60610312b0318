use crate::adapter::AdapterPreference;

/// Initialization parameters for the GPU layer.
///
/// Keep this structure stable and minimal. Add configuration flags only when a
/// concrete platform or backend requirement exists.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Device type and backend ranking used to pick the adapter.
    pub adapter_preference: AdapterPreference,

    /// Power hint for the browser's adapter request.
    ///
    /// Browsers expose a single adapter chosen by this hint. Native builds
    /// rank every enumerated adapter by `adapter_preference` instead.
    pub power_preference: wgpu::PowerPreference,

    /// Surface format to use when the surface supports it.
    ///
    /// Otherwise the surface's first reported format is used.
    pub preferred_format: wgpu::TextureFormat,

    /// Present mode (swap behavior).
    ///
    /// FIFO is the only mode every surface is required to support.
    pub present_mode: wgpu::PresentMode,

    /// Optional alpha mode preference for the surface.
    ///
    /// If provided but unsupported on the current surface, a supported mode is selected.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Required wgpu features.
    ///
    /// Favor an empty set for portability unless a feature is strictly necessary.
    pub required_features: wgpu::Features,

    /// Limits requested from the adapter/device.
    pub required_limits: wgpu::Limits,

    /// Desired maximum frame latency for the surface.
    ///
    /// This value is a hint; support depends on platform/backend.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            adapter_preference: AdapterPreference::default(),
            power_preference: wgpu::PowerPreference::HighPerformance,
            preferred_format: wgpu::TextureFormat::Bgra8Unorm,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let init = GpuInit::default();
        assert_eq!(init.power_preference, wgpu::PowerPreference::HighPerformance);
        assert_eq!(init.preferred_format, wgpu::TextureFormat::Bgra8Unorm);
        assert_eq!(init.present_mode, wgpu::PresentMode::Fifo);
        assert_eq!(init.alpha_mode, None);
        assert_eq!(init.desired_maximum_frame_latency, 2);
        assert_eq!(init.adapter_preference, AdapterPreference::platform_default());
    }
}

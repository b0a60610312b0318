use wgpu::{Backend, Backends, DeviceType};

/// Device types in descending order of preference.
pub const DEFAULT_DEVICE_TYPES: [DeviceType; 3] = [
    DeviceType::DiscreteGpu,
    DeviceType::IntegratedGpu,
    DeviceType::Cpu,
];

/// Device types accepted in the browser.
///
/// The browser's WebGPU implementation does not expose the physical device
/// type, so its single adapter always reports [`DeviceType::Other`]. It is
/// ranked last so a runtime that does report a type still gets the usual order.
pub const BROWSER_DEVICE_TYPES: [DeviceType; 4] = [
    DeviceType::DiscreteGpu,
    DeviceType::IntegratedGpu,
    DeviceType::Cpu,
    DeviceType::Other,
];

/// Device types in descending order of preference for the current target.
pub fn platform_device_types() -> &'static [DeviceType] {
    #[cfg(target_arch = "wasm32")]
    {
        &BROWSER_DEVICE_TYPES
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        &DEFAULT_DEVICE_TYPES
    }
}

/// Backends in descending order of preference for the current target.
///
/// The platform-native API comes first, Vulkan last. Browser builds only ever
/// see the browser's WebGPU implementation.
pub fn platform_backends() -> &'static [Backend] {
    #[cfg(target_arch = "wasm32")]
    {
        &[Backend::BrowserWebGpu]
    }
    #[cfg(all(not(target_arch = "wasm32"), target_os = "windows"))]
    {
        &[Backend::Dx12, Backend::Vulkan]
    }
    #[cfg(all(
        not(target_arch = "wasm32"),
        any(target_os = "macos", target_os = "ios")
    ))]
    {
        &[Backend::Metal, Backend::Vulkan]
    }
    #[cfg(not(any(
        target_arch = "wasm32",
        target_os = "windows",
        target_os = "macos",
        target_os = "ios"
    )))]
    {
        &[Backend::Vulkan]
    }
}

/// Ordered preference lists used by [`select_adapter`](super::select_adapter).
///
/// Device type is the outer key: any adapter of a more preferred type wins
/// over every adapter of a less preferred type, whatever their backends.
///
/// The backend list differs between platforms and deployments (for example,
/// whether GL is acceptable as a last resort), so it is configuration rather
/// than a constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterPreference {
    device_types: Vec<DeviceType>,
    backends: Vec<Backend>,
}

impl AdapterPreference {
    pub fn new(
        device_types: impl IntoIterator<Item = DeviceType>,
        backends: impl IntoIterator<Item = Backend>,
    ) -> Self {
        Self {
            device_types: device_types.into_iter().collect(),
            backends: backends.into_iter().collect(),
        }
    }

    /// [`platform_device_types`] with [`platform_backends`].
    pub fn platform_default() -> Self {
        Self::new(
            platform_device_types().iter().copied(),
            platform_backends().iter().copied(),
        )
    }

    /// What a browser build uses: [`BROWSER_DEVICE_TYPES`] on WebGPU only.
    pub fn browser() -> Self {
        Self::new(BROWSER_DEVICE_TYPES, [Backend::BrowserWebGpu])
    }

    /// Replaces the backend list.
    pub fn with_backends(mut self, backends: impl IntoIterator<Item = Backend>) -> Self {
        self.backends = backends.into_iter().collect();
        self
    }

    /// Appends `backend` as the least preferred backend, unless already listed.
    pub fn with_fallback_backend(mut self, backend: Backend) -> Self {
        if !self.backends.contains(&backend) {
            self.backends.push(backend);
        }
        self
    }

    pub fn device_types(&self) -> &[DeviceType] {
        &self.device_types
    }

    pub fn backends(&self) -> &[Backend] {
        &self.backends
    }

    /// Backends the instance should be created with.
    ///
    /// Enumerating anything outside this mask is wasted work since no such
    /// adapter can ever be selected.
    pub fn backends_mask(&self) -> Backends {
        self.backends
            .iter()
            .fold(Backends::empty(), |mask, backend| mask | backend_bit(*backend))
    }
}

impl Default for AdapterPreference {
    fn default() -> Self {
        Self::platform_default()
    }
}

fn backend_bit(backend: Backend) -> Backends {
    match backend {
        Backend::Vulkan => Backends::VULKAN,
        Backend::Metal => Backends::METAL,
        Backend::Dx12 => Backends::DX12,
        Backend::Gl => Backends::GL,
        Backend::BrowserWebGpu => Backends::BROWSER_WEBGPU,
        _ => Backends::empty(),
    }
}

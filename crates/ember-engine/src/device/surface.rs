use winit::dpi::PhysicalSize;

/// Picks the surface format: `preferred` when supported, else the first
/// supported format. `None` if the surface reports no formats at all.
pub(crate) fn choose_surface_format(
    formats: &[wgpu::TextureFormat],
    preferred: wgpu::TextureFormat,
) -> Option<wgpu::TextureFormat> {
    if formats.contains(&preferred) {
        return Some(preferred);
    }

    formats.first().copied()
}

pub(crate) fn choose_alpha_mode(
    modes: &[wgpu::CompositeAlphaMode],
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| modes.contains(m))
        .or_else(|| modes.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// Smallest size wgpu will configure: each dimension is at least 1.
pub(crate) fn clamped_size(size: PhysicalSize<u32>) -> PhysicalSize<u32> {
    PhysicalSize::new(size.width.max(1), size.height.max(1))
}

/// Applies `new_size` to the surface configuration and reconfigures.
///
/// wgpu rejects 0x0 configurations; in that case nothing is touched and
/// `false` is returned so the caller can report it.
pub(crate) fn apply_resize(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &mut wgpu::SurfaceConfiguration,
    size: &mut PhysicalSize<u32>,
    new_size: PhysicalSize<u32>,
) -> bool {
    if new_size.width == 0 || new_size.height == 0 {
        return false;
    }

    *size = new_size;
    config.width = new_size.width;
    config.height = new_size.height;

    surface.configure(device, config);
    true
}

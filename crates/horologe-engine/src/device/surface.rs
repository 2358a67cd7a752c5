//! Surface decisions, kept free of live wgpu objects so they can be tested.

use winit::dpi::PhysicalSize;

use super::SurfaceErrorAction;

/// Formats the presenter can write an RGBA8 frame to without conversion,
/// sRGB variants first.
const SRGB_FORMATS: [wgpu::TextureFormat; 2] =
    [wgpu::TextureFormat::Rgba8UnormSrgb, wgpu::TextureFormat::Bgra8UnormSrgb];
const LINEAR_FORMATS: [wgpu::TextureFormat; 2] =
    [wgpu::TextureFormat::Rgba8Unorm, wgpu::TextureFormat::Bgra8Unorm];

/// Picks the swapchain format. 8-bit formats win over whatever the surface
/// lists first; `prefer_srgb` decides which family is tried first.
pub(crate) fn choose_surface_format(
    caps: &wgpu::SurfaceCapabilities,
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    let (first, second) = if prefer_srgb {
        (SRGB_FORMATS, LINEAR_FORMATS)
    } else {
        (LINEAR_FORMATS, SRGB_FORMATS)
    };

    first
        .iter()
        .chain(second.iter())
        .copied()
        .find(|f| caps.formats.contains(f))
        .or_else(|| caps.formats.first().copied())
}

pub(crate) fn choose_alpha_mode(
    caps: &wgpu::SurfaceCapabilities,
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| caps.alpha_modes.contains(m))
        .or_else(|| caps.alpha_modes.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// Copies `new_size` into `config`. Returns `false` for a 0x0 (minimized)
/// size, which must not be applied to the surface.
pub(crate) fn resize_config(config: &mut wgpu::SurfaceConfiguration, new_size: PhysicalSize<u32>) -> bool {
    if new_size.width == 0 || new_size.height == 0 {
        return false;
    }
    config.width = new_size.width;
    config.height = new_size.height;
    true
}

/// How to react to a failed texture acquisition.
pub(crate) fn surface_error_action(err: &wgpu::SurfaceError) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => SurfaceErrorAction::Reconfigured,
        wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        wgpu::SurfaceError::Timeout | wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}

/// Initialization parameters for the GPU layer.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Pick an sRGB surface format when the surface offers one.
    ///
    /// Frames are uploaded as sRGB-encoded bytes, so an sRGB target keeps
    /// colors unchanged on the way to the screen.
    pub prefer_srgb: bool,

    /// Swap behavior. FIFO is available everywhere and paces at vsync.
    pub present_mode: wgpu::PresentMode,

    /// Alpha mode preference; ignored when the surface does not support it.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Prefer a low-power adapter. A once-per-second redraw needs no discrete GPU.
    pub low_power: bool,

    /// Frame latency hint passed to the surface.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            low_power: true,
            desired_maximum_frame_latency: 2,
        }
    }
}

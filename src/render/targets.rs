use super::helpers::OffscreenTex;

/// Offscreen color targets for the render pipeline.
///
/// - `hdr` and `depth` carry the room pass in Rgba16Float.
/// - `bloom_a`/`bloom_b` are half-res ping-pong buffers for bright-pass and
///   blur.
/// - `ldr` receives the tonemapped composite; it is also the frame copied
///   into `prev` each frame, so the motion trail is exactly one frame deep.
/// - `blend` receives the motion mix and is what the swapchain shows.
pub(crate) struct RenderTargets {
    pub(crate) hdr: OffscreenTex,
    pub(crate) depth: OffscreenTex,
    pub(crate) bloom_a: OffscreenTex,
    pub(crate) bloom_b: OffscreenTex,
    pub(crate) ldr: OffscreenTex,
    pub(crate) blend: OffscreenTex,
    pub(crate) prev: OffscreenTex,
}

impl RenderTargets {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let hdr_format = wgpu::TextureFormat::Rgba16Float;
        let ldr_format = wgpu::TextureFormat::Rgba8Unorm;
        let none = wgpu::TextureUsages::empty();
        let bw = (width.max(1) / 2).max(1);
        let bh = (height.max(1) / 2).max(1);
        Self {
            hdr: OffscreenTex::color(device, "hdr_tex", width, height, hdr_format, none),
            depth: OffscreenTex::depth(device, "depth_tex", width, height),
            bloom_a: OffscreenTex::color(device, "bloom_a", bw, bh, hdr_format, none),
            bloom_b: OffscreenTex::color(device, "bloom_b", bw, bh, hdr_format, none),
            ldr: OffscreenTex::color(
                device,
                "ldr_tex",
                width,
                height,
                ldr_format,
                wgpu::TextureUsages::COPY_SRC,
            ),
            blend: OffscreenTex::color(device, "blend_tex", width, height, ldr_format, none),
            prev: OffscreenTex::color(
                device,
                "prev_tex",
                width,
                height,
                ldr_format,
                wgpu::TextureUsages::COPY_DST,
            ),
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        *self = Self::new(device, width, height);
    }
}

use crate::constants::SCREEN_TARGET_WIDTH;
use crate::core::screen::ScreenSnapshot;

use super::helpers;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ScreenUniforms {
    bg: [f32; 4],   // rgb background, w boot progress
    anim: [f32; 4], // login / spinner / desktop scales, spinner angle
    misc: [f32; 4], // phase, aspect, time, unused
}

/// Offscreen render target plus pipeline for the virtual screen UI. Sized
/// once from the located mesh aspect; never touched by canvas resizes.
pub(crate) struct ScreenResources {
    pub(crate) target: helpers::OffscreenTex,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    pipeline: wgpu::RenderPipeline,
}

impl ScreenResources {
    pub(crate) fn new(device: &wgpu::Device, aspect: f32) -> Self {
        let width = SCREEN_TARGET_WIDTH;
        let height = ((width as f32 / aspect.max(0.1)).round() as u32).max(1);
        let format = wgpu::TextureFormat::Rgba8Unorm;
        let target = helpers::OffscreenTex::color(
            device,
            "screen_tex",
            width,
            height,
            format,
            wgpu::TextureUsages::empty(),
        );

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("screen_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::SCREEN_WGSL.into()),
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("screen_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("screen_uniforms"),
            size: std::mem::size_of::<ScreenUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("screen_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("screen_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let pipeline =
            helpers::fullscreen_pipeline(device, &layout, &shader, "fs_screen", format, None);

        Self {
            target,
            uniform_buffer,
            bind_group,
            pipeline,
        }
    }

    pub(crate) fn draw(
        &self,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        snap: &ScreenSnapshot,
        aspect: f32,
        time: f32,
    ) {
        let u = ScreenUniforms {
            bg: [snap.bg[0], snap.bg[1], snap.bg[2], snap.boot_progress],
            anim: [
                snap.login_scale,
                snap.spinner_scale,
                snap.desktop_scale,
                snap.spinner_angle,
            ],
            misc: [snap.phase as f32, aspect, time, 0.0],
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));

        let mut r = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("screen_pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &self.target.view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        r.set_pipeline(&self.pipeline);
        r.set_bind_group(0, &self.bind_group, &[]);
        r.draw(0..3, 0..1);
    }
}

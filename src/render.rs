use glam::{Mat4, Vec3};
use web_sys as web;

use crate::core::scene::SceneDoc;
use crate::core::screen::ScreenSnapshot;

mod helpers;
mod post;
mod screen;
mod targets;

use targets::RenderTargets;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PostUniforms {
    resolution: [f32; 2],
    blur_dir: [f32; 2],
    bloom_strength: f32,
    threshold: f32,
    motion_strength: f32,
    _pad: f32,
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    eye_time: [f32; 4],
    lamp: [f32; 4],
    screen_glow: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct BoxInstance {
    center: [f32; 4], // xyz center, w flags the screen surface
    size: [f32; 4],   // xyz size, w emissive
    color: [f32; 4],
}

/// Everything the frame loop feeds the renderer each tick.
pub struct FrameInputs {
    pub view_proj: Mat4,
    pub eye: Vec3,
    pub bloom_strength: f32,
    pub motion_strength: f32,
    pub screen: ScreenSnapshot,
    pub screen_aspect: f32,
    pub screen_glow: f32,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    scene_pipeline: wgpu::RenderPipeline,
    scene_uniforms: wgpu::Buffer,
    scene_bg: wgpu::BindGroup,
    screen_face_bg: wgpu::BindGroup,
    screen_face_bgl: wgpu::BindGroupLayout,
    box_count: u32,

    screen: screen::ScreenResources,

    targets: RenderTargets,
    linear_sampler: wgpu::Sampler,
    post: post::PostResources,
    bg_hdr: wgpu::BindGroup,
    bg_from_bloom_a: wgpu::BindGroup,
    bg_from_bloom_b: wgpu::BindGroup,
    bg_bloom_a_only: wgpu::BindGroup,
    bg_ldr: wgpu::BindGroup,
    bg_prev_only: wgpu::BindGroup,
    bg_blend: wgpu::BindGroup,

    width: u32,
    height: u32,
    time_accum: f32,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        scene: &SceneDoc,
        screen_index: Option<usize>,
        screen_aspect: f32,
    ) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let hdr_format = wgpu::TextureFormat::Rgba16Float;
        let ldr_format = wgpu::TextureFormat::Rgba8Unorm;
        let targets = RenderTargets::new(&device, width, height);

        let screen = screen::ScreenResources::new(&device, screen_aspect);

        // Room pass: box instances in a storage buffer, cube expanded in the
        // vertex stage.
        let scene_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
        });
        let boxes = pack_boxes(scene, screen_index);
        let box_count = boxes.len() as u32;
        let box_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("box_instances"),
            size: (std::mem::size_of::<BoxInstance>() * boxes.len().max(1)) as u64,
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        queue.write_buffer(&box_buffer, 0, bytemuck::cast_slice(&boxes));
        let scene_uniforms = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let scene_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Storage { read_only: true },
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });
        let screen_face_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("screen_face_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let linear_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let scene_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &scene_bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: scene_uniforms.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: box_buffer.as_entire_binding(),
                },
            ],
        });
        let screen_face_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("screen_face_bg"),
            layout: &screen_face_bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&screen.target.view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&linear_sampler),
                },
            ],
        });
        let scene_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&scene_bgl, &screen_face_bgl],
            push_constant_ranges: &[],
        });
        let scene_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("scene_pipeline"),
            layout: Some(&scene_pl),
            vertex: wgpu::VertexState {
                module: &scene_shader,
                entry_point: Some("vs_mesh"),
                buffers: &[],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: wgpu::TextureFormat::Depth32Float,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &scene_shader,
                entry_point: Some("fs_mesh"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: hdr_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        let post_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::POST_WGSL.into()),
        });
        let post = post::create_post_resources(&device, &post_shader, hdr_format, ldr_format, format);

        let (bg_hdr, bg_from_bloom_a, bg_from_bloom_b, bg_bloom_a_only, bg_ldr, bg_prev_only, bg_blend) =
            build_post_bind_groups(&device, &post, &linear_sampler, &targets);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            scene_pipeline,
            scene_uniforms,
            scene_bg,
            screen_face_bg,
            screen_face_bgl,
            box_count,
            screen,
            targets,
            linear_sampler,
            post,
            bg_hdr,
            bg_from_bloom_a,
            bg_from_bloom_b,
            bg_bloom_a_only,
            bg_ldr,
            bg_prev_only,
            bg_blend,
            width,
            height,
            time_accum: 0.0,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);

            // Every canvas-sized target dies with the old size, including the
            // previous-frame feedback buffer. The screen target keeps its
            // mesh-derived size.
            self.targets.recreate(&self.device, width, height);
            let (bg_hdr, bg_from_a, bg_from_b, bg_a_only, bg_ldr, bg_prev, bg_blend) =
                build_post_bind_groups(&self.device, &self.post, &self.linear_sampler, &self.targets);
            self.bg_hdr = bg_hdr;
            self.bg_from_bloom_a = bg_from_a;
            self.bg_from_bloom_b = bg_from_b;
            self.bg_bloom_a_only = bg_a_only;
            self.bg_ldr = bg_ldr;
            self.bg_prev_only = bg_prev;
            self.bg_blend = bg_blend;

            self.screen_face_bg = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("screen_face_bg"),
                layout: &self.screen_face_bgl,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(&self.screen.target.view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::Sampler(&self.linear_sampler),
                    },
                ],
            });
        }
    }

    pub fn render(&mut self, dt_sec: f32, inputs: &FrameInputs) -> Result<(), wgpu::SurfaceError> {
        self.time_accum += dt_sec.max(0.0);
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        // Pass 1: virtual screen UI into its offscreen target.
        self.screen.draw(
            &self.queue,
            &mut encoder,
            &inputs.screen,
            inputs.screen_aspect,
            self.time_accum,
        );

        // Pass 2: room into HDR.
        let u = SceneUniforms {
            view_proj: inputs.view_proj.to_cols_array_2d(),
            eye_time: [inputs.eye.x, inputs.eye.y, inputs.eye.z, self.time_accum],
            lamp: [1.6, 1.9, -5.3, 1.4],
            screen_glow: [inputs.screen_glow, 0.0, 0.0, 0.0],
        };
        self.queue
            .write_buffer(&self.scene_uniforms, 0, bytemuck::bytes_of(&u));
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.hdr.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.015,
                            g: 0.02,
                            b: 0.035,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.scene_pipeline);
            rpass.set_bind_group(0, &self.scene_bg, &[]);
            rpass.set_bind_group(1, &self.screen_face_bg, &[]);
            rpass.draw(0..36, 0..self.box_count);
        }

        let half_res = [self.width as f32 / 2.0, self.height as f32 / 2.0];
        let full_res = [self.width as f32, self.height as f32];

        // Pass 3: bright extract -> bloom_a.
        self.write_post_uniforms(half_res, [0.0, 0.0], inputs);
        post::blit(
            &mut encoder,
            "bright_pass",
            &self.targets.bloom_a.view,
            wgpu::Color::BLACK,
            &self.post.bright_pipeline,
            &self.bg_hdr,
            None,
        );

        // Pass 4: blur horizontal bloom_a -> bloom_b.
        self.write_post_uniforms(half_res, [1.0, 0.0], inputs);
        post::blit(
            &mut encoder,
            "blur_h",
            &self.targets.bloom_b.view,
            wgpu::Color::BLACK,
            &self.post.blur_pipeline,
            &self.bg_from_bloom_a,
            None,
        );

        // Pass 5: blur vertical bloom_b -> bloom_a.
        self.write_post_uniforms(half_res, [0.0, 1.0], inputs);
        post::blit(
            &mut encoder,
            "blur_v",
            &self.targets.bloom_a.view,
            wgpu::Color::BLACK,
            &self.post.blur_pipeline,
            &self.bg_from_bloom_b,
            None,
        );

        // Pass 6: composite HDR + bloom -> LDR.
        self.write_post_uniforms(full_res, [0.0, 0.0], inputs);
        post::blit(
            &mut encoder,
            "composite",
            &self.targets.ldr.view,
            wgpu::Color::BLACK,
            &self.post.composite_pipeline,
            &self.bg_hdr,
            Some(&self.bg_bloom_a_only),
        );

        // Pass 7: blend the composite with last frame's composite, then
        // publish. History is refreshed from the composite itself, not the
        // blend output, so each frame trails exactly one frame behind.
        post::blit(
            &mut encoder,
            "motion_blend",
            &self.targets.blend.view,
            wgpu::Color::BLACK,
            &self.post.motion_pipeline,
            &self.bg_ldr,
            Some(&self.bg_prev_only),
        );
        post::blit(
            &mut encoder,
            "present_copy",
            &view,
            wgpu::Color::BLACK,
            &self.post.copy_pipeline,
            &self.bg_blend,
            None,
        );
        encoder.copy_texture_to_texture(
            self.targets.ldr.tex.as_image_copy(),
            self.targets.prev.tex.as_image_copy(),
            wgpu::Extent3d {
                width: self.width,
                height: self.height,
                depth_or_array_layers: 1,
            },
        );

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    fn write_post_uniforms(&self, resolution: [f32; 2], blur_dir: [f32; 2], inputs: &FrameInputs) {
        let u = PostUniforms {
            resolution,
            blur_dir,
            bloom_strength: inputs.bloom_strength,
            threshold: crate::constants::BLOOM_THRESHOLD,
            motion_strength: inputs.motion_strength,
            _pad: 0.0,
        };
        self.queue
            .write_buffer(&self.post.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }
}

fn pack_boxes(scene: &SceneDoc, screen_index: Option<usize>) -> Vec<BoxInstance> {
    scene
        .meshes
        .iter()
        .enumerate()
        .map(|(i, m)| BoxInstance {
            center: [
                m.center[0],
                m.center[1],
                m.center[2],
                if Some(i) == screen_index { 1.0 } else { 0.0 },
            ],
            size: [m.size[0], m.size[1], m.size[2], m.emissive],
            color: [m.color[0], m.color[1], m.color[2], 1.0],
        })
        .collect()
}

type PostBindGroups = (
    wgpu::BindGroup,
    wgpu::BindGroup,
    wgpu::BindGroup,
    wgpu::BindGroup,
    wgpu::BindGroup,
    wgpu::BindGroup,
    wgpu::BindGroup,
);

fn build_post_bind_groups(
    device: &wgpu::Device,
    post: &post::PostResources,
    sampler: &wgpu::Sampler,
    targets: &RenderTargets,
) -> PostBindGroups {
    (
        post::bind_group0(device, post, "bg_hdr", &targets.hdr.view, sampler),
        post::bind_group0(device, post, "bg_from_bloom_a", &targets.bloom_a.view, sampler),
        post::bind_group0(device, post, "bg_from_bloom_b", &targets.bloom_b.view, sampler),
        post::bind_group1(device, post, "bg_bloom_a_only", &targets.bloom_a.view, sampler),
        post::bind_group0(device, post, "bg_ldr", &targets.ldr.view, sampler),
        post::bind_group1(device, post, "bg_prev_only", &targets.prev.view, sampler),
        post::bind_group0(device, post, "bg_blend", &targets.blend.view, sampler),
    )
}

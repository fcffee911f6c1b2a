use crate::camera::{light_view_proj, Camera};
use crate::constants::*;
use crate::core::{
    box_mesh, hex_to_linear, plane_mesh, srgb_vec_to_linear, GeometryBackend, MaterialKind,
    PanelKind, SceneAssembler,
};
use crate::viewer::FrameParams;
use glam::{Mat4, Vec3};
use smallvec::SmallVec;
use web_sys as web;

mod helpers;
mod mesh;
mod shadow;
mod targets;

pub use mesh::GpuMesh;
use mesh::MeshUniforms;
use shadow::{create_shadow_resources, ShadowResources};
use targets::DepthTarget;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Globals {
    view_proj: [[f32; 4]; 4],
    light_view_proj: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    sun_dir: [f32; 4],
    point_pos: [f32; 4],
    point_color: [f32; 4],
    ambient: [f32; 4],
    specular: [f32; 4],
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,
    mesh_bgl: wgpu::BindGroupLayout,
    shadow: ShadowResources,
    depth: DepthTarget,
    ground: GpuMesh,
    light_view_proj: Mat4,
    clear_color: wgpu::Color,
    width: u32,
    height: u32,
    live_meshes: usize,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

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
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
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
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("[gpu] surface {}x{} format={:?}", width, height, format);

        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let mesh_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("mesh_bgl"),
            entries: &[helpers::uniform_layout_entry(
                0,
                wgpu::ShaderStages::VERTEX_FRAGMENT,
            )],
        });
        let shadow = create_shadow_resources(&device, &globals_buffer, &mesh_bgl);

        let globals_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[
                helpers::uniform_layout_entry(0, wgpu::ShaderStages::VERTEX_FRAGMENT),
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Depth,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Comparison),
                    count: None,
                },
            ],
        });
        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: globals_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&shadow.view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&shadow.sampler),
                },
            ],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&globals_bgl, &mesh_bgl],
            push_constant_ranges: &[],
        });
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("scene_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[helpers::vertex_layout()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            // panels are thin slabs; the ground is viewed from both sides
            primitive: wgpu::PrimitiveState {
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: helpers::DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        let ground = GpuMesh::new(
            &device,
            &mesh_bgl,
            &plane_mesh(GROUND_SIZE, GROUND_SIZE),
            "ground",
        );
        let depth = DepthTarget::new(&device, width, height);
        let bg = hex_to_linear(BACKGROUND_HEX);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            globals_buffer,
            globals_bind_group,
            mesh_bgl,
            shadow,
            depth,
            ground,
            light_view_proj: light_view_proj(
                Vec3::from(SUN_POSITION),
                SHADOW_HALF_EXTENT,
                SHADOW_NEAR,
                SHADOW_FAR,
            ),
            clear_color: wgpu::Color {
                r: bg.x as f64,
                g: bg.y as f64,
                b: bg.z as f64,
                a: 1.0,
            },
            width,
            height,
            live_meshes: 0,
        })
    }

    pub fn live_meshes(&self) -> usize {
        self.live_meshes
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
            self.depth.recreate(&self.device, width, height);
        }
    }

    fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    fn write_globals(&self, camera: &Camera) {
        let sun = Vec3::from(SUN_POSITION).normalize();
        let point = hex_to_linear(POINT_HEX) * POINT_INTENSITY;
        let ambient = Vec3::ONE * AMBIENT_INTENSITY;
        let specular = hex_to_linear(SPECULAR_HEX);
        let globals = Globals {
            view_proj: camera.view_proj().to_cols_array_2d(),
            light_view_proj: self.light_view_proj.to_cols_array_2d(),
            camera_pos: camera.eye.extend(1.0).to_array(),
            sun_dir: sun.extend(SUN_INTENSITY).to_array(),
            point_pos: Vec3::from(POINT_POSITION).extend(POINT_RANGE).to_array(),
            point_color: point.extend(1.0).to_array(),
            ambient: ambient.extend(1.0).to_array(),
            specular: specular.extend(SHININESS).to_array(),
        };
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));
    }

    /// Draw the shadow pass and the lit scene for one frame.
    pub fn render(
        &mut self,
        scene: &SceneAssembler<GpuMesh>,
        params: &FrameParams,
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.reconfigure();
                self.surface.get_current_texture()?
            }
            Err(e) => return Err(e),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let camera = Camera::orbit(params.zoom, self.width, self.height);
        self.write_globals(&camera);

        let body = srgb_vec_to_linear(params.body_color);
        let lid = srgb_vec_to_linear(params.lid_color);
        let mut panels: SmallVec<[&GpuMesh; PanelKind::COUNT]> = SmallVec::new();
        for (mesh, model, material) in scene.meshes() {
            let color = match material {
                MaterialKind::Body => body,
                MaterialKind::Lid => lid,
            };
            mesh.write_uniforms(
                &self.queue,
                &MeshUniforms {
                    model: model.to_cols_array_2d(),
                    color: color.extend(1.0).to_array(),
                    params: [1.0, 0.0, 0.0, 0.0],
                },
            );
            panels.push(mesh);
        }
        self.ground.write_uniforms(
            &self.queue,
            &MeshUniforms {
                model: Mat4::from_translation(Vec3::new(0.0, GROUND_Y, 0.0)).to_cols_array_2d(),
                color: hex_to_linear(GROUND_HEX).extend(1.0).to_array(),
                params: [0.0; 4],
            },
        );

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        // Pass 1: panels into the light's depth map (the ground only receives)
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("shadow_pass"),
                color_attachments: &[],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.shadow.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.shadow.pipeline);
            rpass.set_bind_group(0, &self.shadow.globals_bind_group, &[]);
            for mesh in &panels {
                mesh.draw(&mut rpass);
            }
        }

        // Pass 2: lit scene to the swapchain
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.globals_bind_group, &[]);
            self.ground.draw(&mut rpass);
            for mesh in &panels {
                mesh.draw(&mut rpass);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

impl<'a> GeometryBackend for GpuState<'a> {
    type Geometry = GpuMesh;

    fn create_box(&mut self, kind: PanelKind, size: Vec3) -> GpuMesh {
        self.live_meshes += 1;
        GpuMesh::new(&self.device, &self.mesh_bgl, &box_mesh(size), kind.label())
    }

    fn dispose(&mut self, geometry: GpuMesh) {
        self.live_meshes = self.live_meshes.saturating_sub(1);
        geometry.destroy();
    }
}

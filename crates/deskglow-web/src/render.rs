use crate::constants::{AMBIENT_LEVEL, CLEAR_COLOR, WALL_DIM_ALPHA};
use bytemuck::Zeroable;
use deskglow_core::desk::{desk_boxes, ground_box, wall_box, DESK_RGB, GROUND_RGB, WALL_RGB};
use deskglow_core::scene::{AreaEmitterSpec, MarkerShape, MarkerSpec, RenderScene, SpotEmitterSpec};
use fnv::FnvHashMap;
use glam::{Mat4, Quat, Vec3};
use web_sys as web;
use wgpu::util::DeviceExt;

const MAX_LIGHTS: usize = 16;
const CYLINDER_SEGMENTS: u16 = 16;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Vertex {
    position: [f32; 3],
    normal: [f32; 3],
}

impl Vertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct InstanceRaw {
    model: [[f32; 4]; 4],
    color: [f32; 4],
    flags: [f32; 4],
}

impl InstanceRaw {
    const ATTRIBS: [wgpu::VertexAttribute; 6] = wgpu::vertex_attr_array![
        2 => Float32x4, 3 => Float32x4, 4 => Float32x4, 5 => Float32x4,
        6 => Float32x4, 7 => Float32x4
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceRaw>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBS,
        }
    }

    fn new(model: Mat4, rgb: [f32; 3], alpha: f32, lit: bool) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color: [rgb[0], rgb[1], rgb[2], alpha],
            flags: [if lit { 1.0 } else { 0.0 }, 0.0, 0.0, 0.0],
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct LightRaw {
    pos: [f32; 4],
    dir: [f32; 4],
    color: [f32; 4],
    params: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    ambient: [f32; 4],
    lights: [LightRaw; MAX_LIGHTS],
}

enum EmitterData {
    Rect {
        position: Vec3,
        direction: Vec3,
        area: f32,
        intensity: f32,
    },
    Spot {
        position: Vec3,
        direction: Vec3,
        cos_inner: f32,
        cos_outer: f32,
        intensity: f32,
    },
}

struct EmitterEntry {
    data: EmitterData,
    visible: bool,
    color: [f32; 3],
}

struct MarkerEntry {
    model: Mat4,
    cylinder: bool,
    visible: bool,
    color: [f32; 3],
}

pub struct EmitterHandle(u32);
pub struct MarkerHandle(u32);

/// WebGPU implementation of the core's render-scene handle: one forward
/// pass drawing instanced boxes and cylinders, with the materialized
/// emitters packed into a light uniform array each frame.
pub struct GpuScene {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    opaque_pipeline: wgpu::RenderPipeline,
    translucent_pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    depth_view: wgpu::TextureView,

    cube_vertices: wgpu::Buffer,
    cube_indices: wgpu::Buffer,
    cube_index_count: u32,
    cylinder_vertices: wgpu::Buffer,
    cylinder_indices: wgpu::Buffer,
    cylinder_index_count: u32,

    instance_buffer: wgpu::Buffer,
    instance_capacity: usize,

    // static scenery shares the instanced path with the fixture markers
    scenery: Vec<InstanceRaw>,
    wall_model: Mat4,
    wall_z: f32,
    wall_dimmed: bool,

    next_handle: u32,
    emitters: FnvHashMap<u32, EmitterEntry>,
    markers: FnvHashMap<u32, MarkerEntry>,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl GpuScene {
    pub async fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
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
                    // Default limits keep older WebGPU implementations happy
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

        let depth_view = create_depth_view(&device, width, height);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(deskglow_core::SCENE_WGSL.into()),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });

        let make_pipeline = |label: &str, blend: Option<wgpu::BlendState>, depth_write: bool| {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[Vertex::layout(), InstanceRaw::layout()],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                },
                primitive: wgpu::PrimitiveState {
                    cull_mode: None, // thin boards are seen from both sides
                    ..Default::default()
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: wgpu::TextureFormat::Depth24Plus,
                    depth_write_enabled: depth_write,
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
                        blend,
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                }),
                cache: None,
                multiview: None,
            })
        };
        let opaque_pipeline = make_pipeline("scene_opaque", None, true);
        let translucent_pipeline =
            make_pipeline("scene_translucent", Some(wgpu::BlendState::ALPHA_BLENDING), false);

        let (cube_verts, cube_idx) = cube_mesh();
        let cube_vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cube_vb"),
            contents: bytemuck::cast_slice(&cube_verts),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let cube_indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cube_ib"),
            contents: bytemuck::cast_slice(&cube_idx),
            usage: wgpu::BufferUsages::INDEX,
        });
        let (cyl_verts, cyl_idx) = cylinder_mesh();
        let cylinder_vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cylinder_vb"),
            contents: bytemuck::cast_slice(&cyl_verts),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let cylinder_indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cylinder_ib"),
            contents: bytemuck::cast_slice(&cyl_idx),
            usage: wgpu::BufferUsages::INDEX,
        });

        let instance_capacity = 64;
        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("instances"),
            size: (instance_capacity * std::mem::size_of::<InstanceRaw>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        // furniture and ground are fixed for the session
        let mut scenery = Vec::new();
        for b in desk_boxes() {
            let model = Mat4::from_scale_rotation_translation(b.size, Quat::IDENTITY, b.position);
            scenery.push(InstanceRaw::new(model, DESK_RGB, 1.0, true));
        }
        let ground = ground_box();
        scenery.push(InstanceRaw::new(
            Mat4::from_scale_rotation_translation(ground.size, Quat::IDENTITY, ground.position),
            GROUND_RGB,
            1.0,
            true,
        ));
        let wall = wall_box();
        let wall_model =
            Mat4::from_scale_rotation_translation(wall.size, Quat::IDENTITY, wall.position);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            opaque_pipeline,
            translucent_pipeline,
            uniform_buffer,
            bind_group,
            depth_view,
            cube_vertices,
            cube_indices,
            cube_index_count: cube_idx.len() as u32,
            cylinder_vertices,
            cylinder_indices,
            cylinder_index_count: cyl_idx.len() as u32,
            instance_buffer,
            instance_capacity,
            scenery,
            wall_model,
            wall_z: wall.position.z,
            wall_dimmed: false,
            next_handle: 0,
            emitters: FnvHashMap::default(),
            markers: FnvHashMap::default(),
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: 1.0,
            },
        })
    }

    pub fn wall_z(&self) -> f32 {
        self.wall_z
    }

    /// Dim the backdrop wall while the camera orbits behind it.
    pub fn set_wall_dimmed(&mut self, dimmed: bool) {
        self.wall_dimmed = dimmed;
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
            self.depth_view = create_depth_view(&self.device, width, height);
        }
    }

    pub fn render(&mut self, view_proj: Mat4, eye: Vec3) -> Result<(), wgpu::SurfaceError> {
        // Batch layout in the shared instance buffer:
        // [scenery + visible box markers][visible cylinder markers][wall]
        let mut instances: Vec<InstanceRaw> = self.scenery.clone();
        for m in self.markers.values() {
            if m.visible && !m.cylinder {
                instances.push(InstanceRaw::new(m.model, m.color, 1.0, false));
            }
        }
        if !self.wall_dimmed {
            instances.push(InstanceRaw::new(self.wall_model, WALL_RGB, 1.0, true));
        }
        let box_count = instances.len() as u32;
        for m in self.markers.values() {
            if m.visible && m.cylinder {
                instances.push(InstanceRaw::new(m.model, m.color, 1.0, false));
            }
        }
        let cylinder_count = instances.len() as u32 - box_count;
        let wall_index = instances.len() as u32;
        if self.wall_dimmed {
            instances.push(InstanceRaw::new(self.wall_model, WALL_RGB, WALL_DIM_ALPHA, true));
        }
        self.upload_instances(&instances);

        let mut uniforms = SceneUniforms {
            view_proj: view_proj.to_cols_array_2d(),
            camera_pos: [eye.x, eye.y, eye.z, 1.0],
            ambient: [AMBIENT_LEVEL, AMBIENT_LEVEL, AMBIENT_LEVEL, 0.0],
            lights: [LightRaw::zeroed(); MAX_LIGHTS],
        };
        let mut count = 0usize;
        for e in self.emitters.values() {
            if !e.visible {
                continue;
            }
            if count == MAX_LIGHTS {
                log::warn!("more than {MAX_LIGHTS} active emitters, extras skipped");
                break;
            }
            uniforms.lights[count] = pack_light(e);
            count += 1;
        }
        uniforms.ambient[3] = count as f32;
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
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
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.opaque_pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(1, self.instance_buffer.slice(..));

            rpass.set_vertex_buffer(0, self.cube_vertices.slice(..));
            rpass.set_index_buffer(self.cube_indices.slice(..), wgpu::IndexFormat::Uint16);
            rpass.draw_indexed(0..self.cube_index_count, 0, 0..box_count);

            if cylinder_count > 0 {
                rpass.set_vertex_buffer(0, self.cylinder_vertices.slice(..));
                rpass.set_index_buffer(self.cylinder_indices.slice(..), wgpu::IndexFormat::Uint16);
                rpass.draw_indexed(
                    0..self.cylinder_index_count,
                    0,
                    box_count..box_count + cylinder_count,
                );
            }

            if self.wall_dimmed {
                // drawn last without depth writes so the desk stays visible
                rpass.set_pipeline(&self.translucent_pipeline);
                rpass.set_vertex_buffer(0, self.cube_vertices.slice(..));
                rpass.set_index_buffer(self.cube_indices.slice(..), wgpu::IndexFormat::Uint16);
                rpass.draw_indexed(0..self.cube_index_count, 0, wall_index..wall_index + 1);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    fn upload_instances(&mut self, instances: &[InstanceRaw]) {
        if instances.len() > self.instance_capacity {
            self.instance_capacity = instances.len().next_power_of_two();
            self.instance_buffer = self.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("instances"),
                size: (self.instance_capacity * std::mem::size_of::<InstanceRaw>()) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
        }
        self.queue
            .write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(instances));
    }

    fn fresh_handle(&mut self) -> u32 {
        self.next_handle += 1;
        self.next_handle
    }
}

impl RenderScene for GpuScene {
    type Emitter = EmitterHandle;
    type Marker = MarkerHandle;

    fn add_area_emitter(&mut self, spec: &AreaEmitterSpec) -> EmitterHandle {
        let h = self.fresh_handle();
        self.emitters.insert(
            h,
            EmitterEntry {
                data: EmitterData::Rect {
                    position: spec.position,
                    direction: spec.orientation * Vec3::Z,
                    area: spec.width * spec.height,
                    intensity: spec.intensity,
                },
                visible: false,
                color: [1.0; 3],
            },
        );
        EmitterHandle(h)
    }

    fn add_spot_emitter(&mut self, spec: &SpotEmitterSpec) -> EmitterHandle {
        let h = self.fresh_handle();
        let inner = (spec.cone_angle * (1.0 - spec.penumbra)).cos();
        let outer = spec.cone_angle.cos();
        self.emitters.insert(
            h,
            EmitterEntry {
                data: EmitterData::Spot {
                    position: spec.position,
                    direction: (spec.target - spec.position).normalize_or_zero(),
                    cos_inner: inner,
                    cos_outer: outer,
                    intensity: spec.intensity,
                },
                visible: false,
                color: [1.0; 3],
            },
        );
        EmitterHandle(h)
    }

    fn add_marker(&mut self, spec: &MarkerSpec) -> MarkerHandle {
        let h = self.fresh_handle();
        let (scale, cylinder) = match spec.shape {
            MarkerShape::Box { size } => (size, false),
            MarkerShape::Cylinder { radius, height } => {
                (Vec3::new(radius * 2.0, height, radius * 2.0), true)
            }
        };
        self.markers.insert(
            h,
            MarkerEntry {
                model: Mat4::from_scale_rotation_translation(scale, spec.orientation, spec.position),
                cylinder,
                visible: false,
                color: [1.0; 3],
            },
        );
        MarkerHandle(h)
    }

    fn remove_emitter(&mut self, emitter: EmitterHandle) {
        self.emitters.remove(&emitter.0);
    }

    fn remove_marker(&mut self, marker: MarkerHandle) {
        self.markers.remove(&marker.0);
    }

    fn update_emitter(&mut self, emitter: &EmitterHandle, visible: bool, color: [f32; 3]) {
        if let Some(e) = self.emitters.get_mut(&emitter.0) {
            e.visible = visible;
            e.color = color;
        }
    }

    fn update_marker(&mut self, marker: &MarkerHandle, visible: bool, color: [f32; 3]) {
        if let Some(m) = self.markers.get_mut(&marker.0) {
            m.visible = visible;
            m.color = color;
        }
    }
}

fn pack_light(e: &EmitterEntry) -> LightRaw {
    match e.data {
        EmitterData::Rect {
            position,
            direction,
            area,
            intensity,
        } => LightRaw {
            pos: [position.x, position.y, position.z, 0.0],
            dir: [direction.x, direction.y, direction.z, intensity],
            color: [e.color[0], e.color[1], e.color[2], area],
            params: [0.0; 4],
        },
        EmitterData::Spot {
            position,
            direction,
            cos_inner,
            cos_outer,
            intensity,
        } => LightRaw {
            pos: [position.x, position.y, position.z, 1.0],
            dir: [direction.x, direction.y, direction.z, intensity],
            color: [e.color[0], e.color[1], e.color[2], 1.0],
            params: [cos_inner, cos_outer, 0.0, 0.0],
        },
    }
}

fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let tex = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("depth"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Depth24Plus,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    tex.create_view(&wgpu::TextureViewDescriptor::default())
}

/// Unit cube centered at the origin, four vertices per face.
fn cube_mesh() -> (Vec<Vertex>, Vec<u16>) {
    let faces: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]),
        ([-1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, -1.0]),
        ([0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]),
        ([0.0, -1.0, 0.0], [0.0, 0.0, -1.0], [1.0, 0.0, 0.0]),
        ([0.0, 0.0, 1.0], [0.0, 1.0, 0.0], [-1.0, 0.0, 0.0]),
        ([0.0, 0.0, -1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]),
    ];
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (n, u, v) in faces {
        let n3 = Vec3::from(n);
        let u3 = Vec3::from(u);
        let v3 = Vec3::from(v);
        let base = vertices.len() as u16;
        for (su, sv) in [(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)] {
            let p = n3 * 0.5 + u3 * su + v3 * sv;
            vertices.push(Vertex {
                position: p.to_array(),
                normal: n,
            });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    (vertices, indices)
}

/// Unit cylinder: radius 0.5, height 1, axis along y, centered.
fn cylinder_mesh() -> (Vec<Vertex>, Vec<u16>) {
    let segs = CYLINDER_SEGMENTS;
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    // side
    let side_base = vertices.len() as u16;
    for i in 0..segs {
        let a = std::f32::consts::TAU * i as f32 / segs as f32;
        let (s, c) = a.sin_cos();
        for y in [-0.5f32, 0.5] {
            vertices.push(Vertex {
                position: [c * 0.5, y, s * 0.5],
                normal: [c, 0.0, s],
            });
        }
    }
    for i in 0..segs {
        let a = side_base + i * 2;
        let b = side_base + ((i + 1) % segs) * 2;
        indices.extend_from_slice(&[a, a + 1, b, b, a + 1, b + 1]);
    }

    // caps
    for (y, ny) in [(0.5f32, 1.0f32), (-0.5, -1.0)] {
        let center = vertices.len() as u16;
        vertices.push(Vertex {
            position: [0.0, y, 0.0],
            normal: [0.0, ny, 0.0],
        });
        let ring = vertices.len() as u16;
        for i in 0..segs {
            let a = std::f32::consts::TAU * i as f32 / segs as f32;
            let (s, c) = a.sin_cos();
            vertices.push(Vertex {
                position: [c * 0.5, y, s * 0.5],
                normal: [0.0, ny, 0.0],
            });
        }
        for i in 0..segs {
            let a = ring + i;
            let b = ring + (i + 1) % segs;
            if ny > 0.0 {
                indices.extend_from_slice(&[center, b, a]);
            } else {
                indices.extend_from_slice(&[center, a, b]);
            }
        }
    }
    (vertices, indices)
}

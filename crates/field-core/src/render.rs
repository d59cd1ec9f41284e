use crate::field::ParticleField;
use crate::state::Camera;
use glam::Mat4;
use wgpu::util::DeviceExt;

/// GPU copy of [`FrameUniforms`](crate::FrameUniforms) plus the matrices the
/// vertex stage needs. Layout matches `FieldUniforms` in `particles.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FieldUniformsGpu {
    pub projection: [[f32; 4]; 4],
    pub model_view: [[f32; 4]; 4],
    pub color: [f32; 4],
    pub active_color: [f32; 4],
    pub pointer: [f32; 2],
    pub resolution: [f32; 2],
    pub time: f32,
    pub repulsion_radius: f32,
    pub repulsion_strength: f32,
    pub _pad: f32,
}

impl FieldUniformsGpu {
    pub fn pack(field: &ParticleField, camera: &Camera, model: Mat4) -> Self {
        let u = field.uniforms();
        let [r, g, b] = u.color;
        let [ar, ag, ab] = u.active_color;
        Self {
            projection: camera.projection_matrix().to_cols_array_2d(),
            model_view: (camera.view_matrix() * model).to_cols_array_2d(),
            color: [r, g, b, 1.0],
            active_color: [ar, ag, ab, 1.0],
            pointer: u.pointer.to_array(),
            resolution: u.resolution.to_array(),
            time: u.time,
            repulsion_radius: u.repulsion_radius,
            repulsion_strength: u.repulsion_strength,
            _pad: 0.0,
        }
    }
}

/// `src * srcAlpha + dst`: overlapping sprites brighten instead of occluding.
pub const ADDITIVE_BLENDING: wgpu::BlendState = wgpu::BlendState {
    color: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::SrcAlpha,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
    alpha: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::SrcAlpha,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
};

const QUAD_VERTICES: u32 = 6;

struct InstanceBuffers {
    positions: wgpu::Buffer,
    initial_positions: wgpu::Buffer,
    phases: wgpu::Buffer,
}

/// Pipeline, uniform buffer and per-particle instance buffers for drawing a
/// [`ParticleField`]. Instance data is uploaded once at creation.
pub struct ParticlePass {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    instances: Option<InstanceBuffers>,
    count: u32,
}

impl ParticlePass {
    pub fn new(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        field: &ParticleField,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("particles_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::PARTICLES_WGSL.into()),
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("particles_bgl"),
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
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("particles_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let vertex_buffers = [
            wgpu::VertexBufferLayout {
                array_stride: (3 * std::mem::size_of::<f32>()) as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &wgpu::vertex_attr_array![0 => Float32x3],
            },
            wgpu::VertexBufferLayout {
                array_stride: (3 * std::mem::size_of::<f32>()) as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &wgpu::vertex_attr_array![1 => Float32x3],
            },
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<f32>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &wgpu::vertex_attr_array![2 => Float32],
            },
        ];
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("particles_pipeline"),
            layout: Some(&pl),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &vertex_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            // No depth attachment: sprites never write or test depth.
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: color_format,
                    blend: Some(ADDITIVE_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("particles_uniforms"),
            size: std::mem::size_of::<FieldUniformsGpu>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("particles_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        // Zero-length vertex buffers cannot be bound, so an empty field keeps none.
        let instances = (!field.is_empty()).then(|| InstanceBuffers {
            positions: instance_buffer(device, "particles_position", field.positions()),
            initial_positions: instance_buffer(
                device,
                "particles_initial_position",
                field.initial_positions(),
            ),
            phases: instance_buffer(device, "particles_phase", field.phases()),
        });

        Self {
            pipeline,
            uniform_buffer,
            bind_group,
            instances,
            count: field.len() as u32,
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn write_uniforms(
        &self,
        queue: &wgpu::Queue,
        field: &ParticleField,
        camera: &Camera,
        model: Mat4,
    ) {
        let packed = FieldUniformsGpu::pack(field, camera, model);
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&packed));
    }

    pub fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        let Some(inst) = &self.instances else {
            return;
        };
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, inst.positions.slice(..));
        rpass.set_vertex_buffer(1, inst.initial_positions.slice(..));
        rpass.set_vertex_buffer(2, inst.phases.slice(..));
        rpass.draw(0..QUAD_VERTICES, 0..self.count);
    }
}

fn instance_buffer(device: &wgpu::Device, label: &str, data: &[f32]) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(data),
        usage: wgpu::BufferUsages::VERTEX,
    })
}

/// Clear the target to `clear` and draw the particle pass into it.
pub fn encode_frame(
    encoder: &mut wgpu::CommandEncoder,
    target: &wgpu::TextureView,
    clear: wgpu::Color,
    pass: &ParticlePass,
) {
    let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some("particles_pass"),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: target,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(clear),
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    });
    pass.draw(&mut rpass);
}

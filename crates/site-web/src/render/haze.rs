use super::helpers;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct HazeUniforms {
    pub(crate) resolution: [f32; 2],
    pub(crate) time: f32,
    pub(crate) opacity: f32,
}

pub(crate) struct HazeResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

pub(crate) fn create_haze_resources(
    device: &wgpu::Device,
    format: wgpu::TextureFormat,
) -> HazeResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("haze_shader"),
        source: wgpu::ShaderSource::Wgsl(site_core::HAZE_WGSL.into()),
    });
    let (uniform_buffer, bgl, bind_group) = helpers::uniform_binding(
        device,
        "haze_uniforms",
        std::mem::size_of::<HazeUniforms>() as u64,
        wgpu::ShaderStages::FRAGMENT,
    );
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("haze_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let pipeline = helpers::make_pipeline(
        device,
        "haze_pipeline",
        &pl,
        &shader,
        ("vs_fullscreen", "fs_haze"),
        &[],
        format,
        wgpu::BlendState::ALPHA_BLENDING,
    );
    HazeResources {
        pipeline,
        uniform_buffer,
        bind_group,
    }
}

use crate::constants::MAX_FRAME_DT_MS;
use crate::render;
use crate::timers::AnimationLoop;
use glam::Vec2;
use instant::Instant;
use site_core::{
    ParticleField, ParticleInstance, PageState, Viewport, CAMERA_FOV_DEG, CAMERA_Z,
    HERO_PARTICLE_INTENSITY, HERO_SECTION_ID, PAGE_PARTICLE_INTENSITY, PARTICLE_SIZE_PX,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use web_sys as web;

pub struct FrameContext<'a> {
    pub field: ParticleField,
    pub gpu: render::GpuState<'a>,
    pub canvas: web::HtmlCanvasElement,
    pub pointer: Rc<Cell<Vec2>>,
    pub page: Rc<RefCell<PageState>>,
    pub instances: Vec<ParticleInstance>,
    pub last_instant: Instant,
    pub started: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        gpu: render::GpuState<'a>,
        canvas: web::HtmlCanvasElement,
        pointer: Rc<Cell<Vec2>>,
        page: Rc<RefCell<PageState>>,
        seed: u64,
    ) -> Self {
        let field = ParticleField::new(Default::default(), canvas_viewport(&canvas), seed);
        let now = Instant::now();
        Self {
            instances: Vec::with_capacity(field.len()),
            field,
            gpu,
            canvas,
            pointer,
            page,
            last_instant: now,
            started: now,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        // a backgrounded tab resumes with one long frame
        let dt = (now - self.last_instant).min(Duration::from_millis(MAX_FRAME_DT_MS));
        self.last_instant = now;

        let hero_active = self.page.borrow().scroll().active == HERO_SECTION_ID;
        self.field.params.intensity = if hero_active {
            HERO_PARTICLE_INTENSITY
        } else {
            PAGE_PARTICLE_INTENSITY
        };
        self.field.set_viewport(canvas_viewport(&self.canvas));
        self.field.set_pointer(self.pointer.get());
        self.field.step(dt);
        self.field.write_instances(&mut self.instances);

        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());
        let time = (now - self.started).as_secs_f32();
        match self.gpu.render(&self.instances, time) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::debug!("[gpu] surface lost; reconfiguring");
                self.gpu.reconfigure();
            }
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

fn canvas_viewport(canvas: &web::HtmlCanvasElement) -> Viewport {
    let aspect = canvas.width() as f32 / canvas.height().max(1) as f32;
    Viewport::from_camera(CAMERA_FOV_DEG, CAMERA_Z, aspect)
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, PARTICLE_SIZE_PX).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) -> AnimationLoop {
    AnimationLoop::start(move || frame_ctx.borrow_mut().frame())
}

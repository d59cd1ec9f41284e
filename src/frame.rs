use crate::input;
use crate::render;
use field_core::{Camera, ParticleField, SceneMotion};
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub field: ParticleField,
    pub motion: SceneMotion,
    pub camera: Camera,

    pub canvas: web::HtmlCanvasElement,
    pub pointer: Rc<RefCell<input::PointerState>>,

    pub gpu: Option<render::GpuState<'a>>,
    pub started: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let elapsed = self.started.elapsed().as_secs_f32();
        let pointer_ndc = Vec2::from_array(self.pointer.borrow().ndc);

        let w = self.canvas.width();
        let h = self.canvas.height();
        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(w, h);
        }
        self.camera.set_surface_size(w, h);
        self.field.resize(w, h);

        self.field.update(elapsed, pointer_ndc, self.camera.viewport());
        self.motion.step(elapsed, pointer_ndc);

        if let Some(g) = &mut self.gpu {
            if let Err(e) = g.render(&self.field, &self.camera, self.motion.model_matrix()) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    field: &ParticleField,
    clear_color: wgpu::Color,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, field, clear_color).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

#![cfg(target_arch = "wasm32")]
use field_core::{Camera, FieldConfig, NavState, Palette, ParticleField, SceneMotion};
use instant::Instant;
use rand::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn wire_overlay(document: &web::Document) {
    let nav = Rc::new(RefCell::new(NavState::default()));
    overlay::show_section(document, nav.borrow().current());
    overlay::render_intro(document);
    overlay::wire_image_fallbacks(document);
    events::wire_nav_handlers(document, nav);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("field-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    // Listeners and the frame loop are registered once per page
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    // Overlay navigation works even when WebGPU is unavailable
    wire_overlay(&document);

    let palette = Palette::from_tokens()?;
    let mut rng = StdRng::from_entropy();
    let config = FieldConfig::default().with_color(palette.particles);
    let mut field = ParticleField::new(config, &mut rng);
    let motion = SceneMotion::new(&mut rng);
    let mut camera = Camera::default();
    camera.set_surface_size(canvas.width(), canvas.height());
    field.resize(canvas.width(), canvas.height());
    log::info!(
        "[field] particles={} radius={:.2} strength={:.2}",
        field.len(),
        field.config().repulsion_radius,
        field.config().repulsion_strength
    );

    let gpu = frame::init_gpu(&canvas, &field, palette.background.to_linear().to_wgpu()).await;

    let pointer = Rc::new(RefCell::new(input::PointerState::default()));
    events::wire_pointer_handlers(canvas.clone(), pointer.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        field,
        motion,
        camera,
        canvas,
        pointer,
        gpu,
        started: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}

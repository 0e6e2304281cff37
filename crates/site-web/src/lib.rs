#![cfg(target_arch = "wasm32")]
mod app;
mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod render;
mod timers;
mod views;

use app::App;
use constants::*;
use glam::Vec2;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Handles that must live until the page goes away.
#[derive(Default)]
struct Running {
    logic: Option<timers::Interval>,
    frames: Option<timers::AnimationLoop>,
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let root = document
        .get_element_by_id(APP_ROOT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{APP_ROOT_ID}"))?;
    root.set_inner_html(&views::markup::page_html());

    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let (inner_width, _) = dom::inner_size(&window);
    let sound = audio::create_sound_manager();
    let app = App::new(document.clone(), inner_width, seed, sound.clone());
    app.render_all();

    audio::wire_gesture_unlock(&document, sound.clone());
    audio::wire_mute_button(&document, sound.clone());
    events::wire_ui(&app);
    events::wire_global_keydown(&app);
    events::wire_cells(&app);
    events::wire_scroll(&window, &app);

    let running = Rc::new(RefCell::new(Running::default()));
    {
        let app = app.clone();
        let mut last = Instant::now();
        let logic = timers::Interval::new(LOGIC_TICK_MS, move || {
            let now = Instant::now();
            app.tick(now - last);
            last = now;
        })?;
        running.borrow_mut().logic = Some(logic);
    }
    wire_shutdown(&window, running.clone(), app.clone());

    let pointer = Rc::new(Cell::new(Vec2::ZERO));
    events::wire_particle_pointer(&window, pointer.clone());

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CANVAS_ID}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    // Avoid grabbing a 2D context here to allow WebGPU to acquire the canvas
    wire_canvas_resize(&window, &canvas);

    // The page stays usable without WebGPU; only the particles are lost.
    let Some(gpu) = frame::init_gpu(&canvas).await else {
        log::warn!("[gpu] particle field disabled");
        return Ok(());
    };
    let ctx = frame::FrameContext::new(gpu, canvas, pointer, app.page.clone(), seed);
    running.borrow_mut().frames = Some(frame::start_loop(Rc::new(RefCell::new(ctx))));
    log::info!("site-web ready");
    Ok(())
}

// Maintain canvas internal pixel size to match CSS size * devicePixelRatio
fn wire_canvas_resize(window: &web::Window, canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas = canvas.clone();
    dom::add_listener(window.as_ref(), "resize", move |_: web::Event| {
        dom::sync_canvas_backing_size(&canvas);
    });
}

fn wire_shutdown(window: &web::Window, running: Rc<RefCell<Running>>, app: App) {
    dom::add_listener(window.as_ref(), "pagehide", move |_: web::Event| {
        let mut r = running.borrow_mut();
        r.frames.take();
        r.logic.take();
        app.sound.borrow_mut().shutdown();
        log::info!("site-web stopped");
    });
}

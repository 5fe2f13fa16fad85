#![cfg(target_arch = "wasm32")]
use deskglow_core::catalog::default_catalog;
use deskglow_core::scheme::{default_schemes, DEFAULT_SCHEME};
use deskglow_core::{LightState, PresetController, SceneSync};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;

use frame::App;

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

/// Build the scheme menu and the two override switches from the catalogs.
fn build_controls(document: &web::Document, app: &Rc<RefCell<App>>) -> anyhow::Result<()> {
    let container = document
        .get_element_by_id("light-controls")
        .ok_or_else(|| anyhow::anyhow!("missing #light-controls"))?;

    let entries: Vec<(&'static str, &'static str)> = app
        .borrow()
        .controller
        .schemes()
        .iter()
        .map(|(key, scheme)| (key, scheme.name))
        .collect();
    for (key, name) in entries {
        let btn_id = format!("scheme-{key}");
        dom::append_control_button(document, &container, &btn_id, name);
        let app_btn = app.clone();
        dom::add_click_listener(document, &btn_id, move || {
            events::select_and_highlight(&app_btn, key);
        });
    }

    dom::append_control_button(document, &container, "override-strips", "Strips");
    let app_strips = app.clone();
    dom::add_click_listener(document, "override-strips", move || {
        if let Some(on) = app_strips.borrow_mut().toggle_strips() {
            events::highlight_override("override-strips", on);
        }
    });

    dom::append_control_button(document, &container, "override-spot", "Spotlight");
    let app_spot = app.clone();
    dom::add_click_listener(document, "override-spot", move || {
        let on = app_spot.borrow_mut().toggle_spot();
        events::highlight_override("override-spot", on);
    });

    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("deskglow-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Keep the canvas backing store in sync with CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let gpu = render::GpuScene::new(&canvas).await?;
    let catalog = default_catalog();
    log::info!("catalog: {} fixtures", catalog.len());

    let mut app = App {
        gpu,
        catalog,
        state: LightState::new(),
        sync: SceneSync::new(),
        controller: PresetController::new(default_schemes()),
        camera: camera::OrbitCamera::new(),
        pointer: input::PointerState::default(),
        canvas: canvas.clone(),
        started: Instant::now(),
        last_instant: Instant::now(),
    };
    // Materialize the default scheme before the first frame
    app.select_scheme(DEFAULT_SCHEME);

    let app = Rc::new(RefCell::new(app));
    build_controls(&document, &app)?;
    dom::set_active_control(&document, &format!("scheme-{DEFAULT_SCHEME}"));
    events::wire_orbit_controls(&app);
    events::wire_keyboard(&app);

    frame::start_loop(app);
    Ok(())
}

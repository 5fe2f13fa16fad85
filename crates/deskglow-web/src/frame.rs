use crate::camera::OrbitCamera;
use crate::input::PointerState;
use crate::render::GpuScene;
use deskglow_core::{FixtureCatalog, LightState, PresetController, SceneSync};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the session owns: the engine pieces from the core crate, the
/// GPU backend, and the interaction state. Click and key handlers share it
/// through `Rc<RefCell<..>>` with the frame loop; handlers run between
/// frames, so the borrows never overlap.
pub struct App {
    pub gpu: GpuScene,
    pub catalog: FixtureCatalog,
    pub state: LightState,
    pub sync: SceneSync<GpuScene>,
    pub controller: PresetController,
    pub camera: OrbitCamera,
    pub pointer: PointerState,
    pub canvas: web::HtmlCanvasElement,
    pub started: Instant,
    pub last_instant: Instant,
}

impl App {
    pub fn select_scheme(&mut self, key: &str) -> bool {
        self.controller.select(
            key,
            &mut self.gpu,
            &self.catalog,
            &mut self.state,
            &mut self.sync,
        )
    }

    pub fn toggle_strips(&mut self) -> Option<bool> {
        self.controller.toggle_strips(&self.catalog, &mut self.state)
    }

    pub fn toggle_spot(&mut self) -> bool {
        self.controller.toggle_spot(&mut self.state)
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        self.camera.update(dt_sec);
        let elapsed = self.started.elapsed().as_secs_f32();
        self.sync.frame(&mut self.gpu, self.state.view(), elapsed);

        let eye = self.camera.eye();
        self.gpu.set_wall_dimmed(eye.z < self.gpu.wall_z());

        let w = self.canvas.width();
        let h = self.canvas.height();
        self.gpu.resize_if_needed(w, h);
        let aspect = w as f32 / h.max(1) as f32;
        let view_proj = self.camera.view_proj(aspect);
        if let Err(e) = self.gpu.render(view_proj, eye) {
            log::error!("render error: {:?}", e);
        }
    }
}

/// Drive `App::frame` from requestAnimationFrame.
pub fn start_loop(app: Rc<RefCell<App>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let app_tick = app.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        app_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

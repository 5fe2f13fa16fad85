use crate::dom;
use crate::frame::App;
use crate::input::pointer_canvas_px;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer drag orbits the camera, the wheel dollies.
pub fn wire_orbit_controls(app: &Rc<RefCell<App>>) {
    let canvas = app.borrow().canvas.clone();

    {
        let app = app.clone();
        let canvas_ev = canvas.clone();
        let down = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let px = pointer_canvas_px(&ev, &canvas_ev);
            let mut a = app.borrow_mut();
            a.pointer.down = true;
            a.pointer.x = px.x;
            a.pointer.y = px.y;
        }) as Box<dyn FnMut(_)>);
        let _ = canvas
            .add_event_listener_with_callback("pointerdown", down.as_ref().unchecked_ref());
        down.forget();
    }

    {
        let app = app.clone();
        let canvas_ev = canvas.clone();
        let mv = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let px = pointer_canvas_px(&ev, &canvas_ev);
            let mut a = app.borrow_mut();
            if a.pointer.down {
                let dx = px.x - a.pointer.x;
                let dy = px.y - a.pointer.y;
                a.camera.drag(dx, dy);
            }
            a.pointer.x = px.x;
            a.pointer.y = px.y;
        }) as Box<dyn FnMut(_)>);
        let _ = canvas.add_event_listener_with_callback("pointermove", mv.as_ref().unchecked_ref());
        mv.forget();
    }

    for release in ["pointerup", "pointerleave"] {
        let app = app.clone();
        let up = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            app.borrow_mut().pointer.down = false;
        }) as Box<dyn FnMut(_)>);
        let _ = canvas.add_event_listener_with_callback(release, up.as_ref().unchecked_ref());
        up.forget();
    }

    {
        let app = app.clone();
        let wheel = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
            ev.prevent_default();
            app.borrow_mut().camera.zoom(ev.delta_y() as f32);
        }) as Box<dyn FnMut(_)>);
        let _ = canvas.add_event_listener_with_callback("wheel", wheel.as_ref().unchecked_ref());
        wheel.forget();
    }
}

/// Digit keys select schemes by menu position; 'a' flips the current
/// scheme's strips, 's' flips the spotlight.
pub fn wire_keyboard(app: &Rc<RefCell<App>>) {
    let app = app.clone();
    let keydown = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        let key = ev.key();
        if let Ok(n) = key.parse::<usize>() {
            if n >= 1 {
                let scheme_key = app
                    .borrow()
                    .controller
                    .schemes()
                    .iter()
                    .nth(n - 1)
                    .map(|(k, _)| k);
                if let Some(k) = scheme_key {
                    select_and_highlight(&app, k);
                }
            }
            return;
        }
        match key.as_str() {
            "a" | "A" => {
                if let Some(on) = app.borrow_mut().toggle_strips() {
                    highlight_override("override-strips", on);
                }
            }
            "s" | "S" => {
                let on = app.borrow_mut().toggle_spot();
                highlight_override("override-spot", on);
            }
            _ => {}
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(w) = web::window() {
        let _ = w.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
    }
    keydown.forget();
}

pub fn select_and_highlight(app: &Rc<RefCell<App>>, key: &str) {
    if app.borrow_mut().select_scheme(key) {
        if let Some(doc) = dom::window_document() {
            dom::set_active_control(&doc, &format!("scheme-{key}"));
        }
    }
}

/// An override action always steals the highlight from the scheme buttons;
/// it only keeps it for itself while its target set ended up on.
pub fn highlight_override(element_id: &str, on: bool) {
    if let Some(doc) = dom::window_document() {
        dom::set_active_control(&doc, element_id);
        if !on {
            dom::clear_active_control(&doc, element_id);
        }
    }
}

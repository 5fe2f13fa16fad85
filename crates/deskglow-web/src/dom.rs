use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Append a `.light-btn` button to the controls container. Buttons get
/// stable element ids so the active highlight can be moved later.
pub fn append_control_button(
    document: &web::Document,
    container: &web::Element,
    element_id: &str,
    label: &str,
) {
    let Ok(el) = document.create_element("button") else {
        return;
    };
    el.set_id(element_id);
    el.set_class_name("light-btn");
    el.set_text_content(Some(label));
    let _ = container.append_child(&el);
}

/// Move the single `active` highlight to the given control. Scheme buttons
/// and override switches share the highlight pool: activating one clears
/// the others.
pub fn set_active_control(document: &web::Document, element_id: &str) {
    if let Ok(buttons) = document.query_selector_all(".light-btn") {
        for i in 0..buttons.length() {
            if let Some(node) = buttons.item(i) {
                if let Some(el) = node.dyn_ref::<web::Element>() {
                    el.class_list().remove_1("active").ok();
                }
            }
        }
    }
    if let Some(el) = document.get_element_by_id(element_id) {
        el.class_list().add_1("active").ok();
    }
}

/// Drop the highlight from a control without giving it to another, used
/// when an override toggles back off.
pub fn clear_active_control(document: &web::Document, element_id: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.class_list().remove_1("active").ok();
    }
}

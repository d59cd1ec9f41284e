use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer over the canvas in NDC. Listens on the window because
/// the overlay sits above the canvas.
pub fn wire_pointer_handlers(
    canvas: web::HtmlCanvasElement,
    pointer: Rc<RefCell<input::PointerState>>,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let rect = canvas.get_bounding_client_rect();
        let x_css = ev.client_x() as f32 - rect.left() as f32;
        let y_css = ev.client_y() as f32 - rect.top() as f32;
        pointer
            .borrow_mut()
            .set_from_css(x_css, y_css, rect.width() as f32, rect.height() as f32);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

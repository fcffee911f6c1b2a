use crate::core::Axis;
use crate::dom;
use crate::readouts;
use crate::session::Session;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Each slider updates its own axis and rebuilds both views before the
/// handler returns.
pub fn wire_sliders(
    document: &web::Document,
    sliders: [web::HtmlInputElement; 3],
    session: Rc<RefCell<Session>>,
) {
    for (axis, input) in Axis::ALL.into_iter().zip(sliders) {
        let document = document.clone();
        let session = session.clone();
        let input_for_listener = input.clone();

        let closure = Closure::wrap(Box::new(move || {
            let Some(raw) = dom::slider_value(&input) else {
                log::warn!("[input] unreadable value on #{}", axis.slider_id());
                return;
            };
            let stored = session.borrow_mut().set_dimension(axis, raw);
            readouts::set(&document, axis, stored);
            readouts::sync_slider(&input, stored);
        }) as Box<dyn FnMut()>);
        _ = input_for_listener
            .add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Keep both canvases at CSS size * devicePixelRatio and repaint the net.
/// The 3D surface picks up its new size on the next frame.
pub fn wire_resize(
    box_canvas: &web::HtmlCanvasElement,
    session: Rc<RefCell<Session>>,
) {
    let box_canvas = box_canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&box_canvas);
        let mut s = session.borrow_mut();
        dom::sync_canvas_backing_size(s.net.canvas());
        s.redraw_net();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

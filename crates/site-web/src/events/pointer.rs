use crate::app::App;
use crate::constants::DATA_CELL;
use crate::dom;
use glam::Vec2;
use site_core::{pointer_ndc, to_percent, CellRect, PageAction};
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

/// Track the pointer for the particle field, in NDC.
pub fn wire_particle_pointer(window: &web::Window, pointer: Rc<Cell<Vec2>>) {
    let target: &web::EventTarget = window.as_ref();
    {
        let window = window.clone();
        let pointer = pointer.clone();
        dom::add_listener(target, "pointermove", move |ev: web::PointerEvent| {
            let (w, h) = dom::inner_size(&window);
            pointer.set(pointer_ndc(ev.client_x() as f64, ev.client_y() as f64, w, h));
        });
    }
    {
        let window = window.clone();
        dom::add_listener(target, "touchmove", move |ev: web::TouchEvent| {
            if let Some(t) = ev.touches().get(0) {
                let (w, h) = dom::inner_size(&window);
                pointer.set(pointer_ndc(t.client_x() as f64, t.client_y() as f64, w, h));
            }
        });
    }
}

/// Record taps and clicks on each interaction cell.
pub fn wire_cells(app: &App) {
    for (el, value) in dom::elements_with_attr(&app.document, DATA_CELL) {
        let Ok(experience) = value.parse::<usize>() else {
            log::warn!("[cells] bad {DATA_CELL} value `{value}`");
            continue;
        };
        let app = app.clone();
        let cell = el.clone();
        dom::add_listener(el.as_ref(), "pointerdown", move |ev: web::PointerEvent| {
            let r = cell.get_bounding_client_rect();
            let rect = CellRect {
                left: r.left(),
                top: r.top(),
                width: r.width(),
                height: r.height(),
            };
            let (x, y) = to_percent(ev.client_x() as f64, ev.client_y() as f64, rect);
            app.dispatch(PageAction::Interacted { experience, x, y });
        });
    }
}

use crate::app::App;
use crate::dom;
use site_core::{PageAction, SectionBounds};
use web_sys as web;

/// Read every section's position and feed it to the tracker.
pub fn measure_and_dispatch(app: &App) {
    let Some(window) = web::window() else {
        return;
    };
    let bounds: Vec<Option<SectionBounds>> = {
        let page = app.page.borrow();
        page.section_ids()
            .iter()
            .map(|id| {
                app.document.get_element_by_id(id).map(|el| {
                    let r = el.get_bounding_client_rect();
                    SectionBounds {
                        top: r.top(),
                        bottom: r.bottom(),
                    }
                })
            })
            .collect()
    };
    let (_, viewport_height) = dom::inner_size(&window);
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let scroll_height = app
        .document
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    app.dispatch(PageAction::Scrolled {
        bounds,
        viewport_height,
        scroll_y,
        scroll_height,
    });
}

pub fn wire_scroll(window: &web::Window, app: &App) {
    let target: &web::EventTarget = window.as_ref();
    {
        let app = app.clone();
        dom::add_listener(target, "scroll", move |_: web::Event| {
            measure_and_dispatch(&app);
        });
    }
    {
        let app = app.clone();
        let window = window.clone();
        dom::add_listener(target, "resize", move |_: web::Event| {
            let (inner_width, _) = dom::inner_size(&window);
            app.dispatch(PageAction::Resized { inner_width });
            measure_and_dispatch(&app);
        });
    }
    measure_and_dispatch(app);
}

use crate::app::App;
use crate::dom;
use site_core::PageAction;
use web_sys as web;

pub fn wire_global_keydown(app: &App) {
    let app = app.clone();
    let target: web::EventTarget = app.document.clone().into();
    dom::add_listener(&target, "keydown", move |ev: web::KeyboardEvent| {
        if ev.key() == "Escape" {
            app.dispatch(PageAction::Escape);
        }
    });
}

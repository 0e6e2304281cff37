use super::{markup, style};
use site_core::InteractionHistory;
use web_sys as web;

/// Redraw one cell's feedback layer. Returns whether anything is still
/// animating, so the caller knows to keep redrawing it.
pub fn render(document: &web::Document, index: usize, history: &InteractionHistory) -> bool {
    let shape = history.kind().feedback_shape();
    let feedbacks = history.feedbacks();
    let links = history.constellation_links();
    if let Ok(Some(layer)) = document.query_selector(&markup::cell_selector(index)) {
        layer.set_inner_html(&style::cell_fx_html(shape, &feedbacks, &links));
    }
    !feedbacks.is_empty()
}

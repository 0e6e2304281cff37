// Inline styles for the animated parts of the page, computed from progress
// values owned by the page state.

use site_core::{Feedback, FeedbackShape, Link};
use std::fmt::Write;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translate_y_px: f32,
    pub scale: f32,
    pub rotate_deg: f32,
    pub opacity: f32,
}

/// Where one feedback mark is in its animation. `progress` runs 0 to 1.
pub fn feedback_transform(shape: FeedbackShape, progress: f32) -> Transform {
    let t = progress.clamp(0.0, 1.0);
    match shape {
        FeedbackShape::RisingBurst => Transform {
            translate_y_px: -50.0 * t,
            scale: 3.0 * t,
            rotate_deg: 0.0,
            opacity: 1.0 - t,
        },
        FeedbackShape::ExpandingRing => Transform {
            translate_y_px: 0.0,
            scale: t,
            rotate_deg: 0.0,
            opacity: 1.0 - t,
        },
        FeedbackShape::SpinningTrophy => Transform {
            translate_y_px: -20.0 * t,
            scale: t,
            rotate_deg: 360.0 * t,
            opacity: 1.0,
        },
        // grows to 1.5 at the midpoint, then shrinks away
        FeedbackShape::PopBubble => Transform {
            translate_y_px: 0.0,
            scale: 1.5 * (1.0 - (2.0 * t - 1.0).abs()),
            rotate_deg: 0.0,
            opacity: 1.0,
        },
        FeedbackShape::RotatingStar => Transform {
            translate_y_px: 0.0,
            scale: t,
            rotate_deg: 180.0 * t,
            opacity: 1.0,
        },
    }
}

pub fn shape_class(shape: FeedbackShape) -> &'static str {
    match shape {
        FeedbackShape::RisingBurst => "fx-burst",
        FeedbackShape::ExpandingRing => "fx-ring",
        FeedbackShape::SpinningTrophy => "fx-trophy",
        FeedbackShape::PopBubble => "fx-bubble",
        FeedbackShape::RotatingStar => "fx-star",
    }
}

fn glyph(shape: FeedbackShape) -> &'static str {
    match shape {
        FeedbackShape::SpinningTrophy => "🏆",
        FeedbackShape::RotatingStar => "⭐",
        _ => "",
    }
}

pub fn feedback_style(feedback: &Feedback, shape: FeedbackShape) -> String {
    let tr = feedback_transform(shape, feedback.progress);
    format!(
        "left: {:.2}%; top: {:.2}%; transform: translate(-50%, -50%) translateY({:.1}px) scale({:.3}) rotate({:.1}deg); opacity: {:.3}",
        feedback.point.x, feedback.point.y, tr.translate_y_px, tr.scale, tr.rotate_deg, tr.opacity
    )
}

/// Feedback marks plus constellation lines for one cell.
pub fn cell_fx_html(shape: FeedbackShape, feedbacks: &[Feedback], links: &[Link]) -> String {
    let mut html = String::new();
    if !links.is_empty() {
        html.push_str(r#"<svg class="links" viewBox="0 0 100 100" preserveAspectRatio="none">"#);
        for l in links {
            _ = write!(
                html,
                r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" />"#,
                l.from.x, l.from.y, l.to.x, l.to.y
            );
        }
        html.push_str("</svg>");
    }
    for f in feedbacks {
        _ = write!(
            html,
            r#"<span class="fx {}" data-id="{}" style="{}">{}</span>"#,
            shape_class(shape),
            f.point.id,
            feedback_style(f, shape),
            glyph(shape)
        );
    }
    html
}

#[inline]
pub fn progress_width(fill: f32) -> String {
    format!("{:.2}%", fill.clamp(0.0, 1.0) * 100.0)
}

#[inline]
pub fn opacity_value(opacity: f32) -> String {
    format!("{:.2}", opacity.clamp(0.0, 1.0))
}

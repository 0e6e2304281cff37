// Host-side tests for inline animation styles.

#![allow(dead_code)]
mod style {
    include!("../src/views/style.rs");
}

use site_core::{Feedback, FeedbackShape, InteractionPoint, Link};
use style::*;

fn point(x: f32, y: f32, id: u64) -> InteractionPoint {
    InteractionPoint { x, y, id }
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn burst_rises_grows_and_fades() {
    let start = feedback_transform(FeedbackShape::RisingBurst, 0.0);
    let end = feedback_transform(FeedbackShape::RisingBurst, 1.0);
    assert!(approx(start.opacity, 1.0) && approx(start.scale, 0.0));
    assert!(approx(end.translate_y_px, -50.0));
    assert!(approx(end.scale, 3.0));
    assert!(approx(end.opacity, 0.0));
}

#[test]
fn trophy_spins_a_full_turn() {
    let end = feedback_transform(FeedbackShape::SpinningTrophy, 1.0);
    assert!(approx(end.rotate_deg, 360.0));
    assert!(approx(end.translate_y_px, -20.0));
    let half = feedback_transform(FeedbackShape::RotatingStar, 1.0);
    assert!(approx(half.rotate_deg, 180.0));
}

#[test]
fn bubble_peaks_at_midpoint() {
    let mid = feedback_transform(FeedbackShape::PopBubble, 0.5);
    assert!(approx(mid.scale, 1.5));
    assert!(approx(feedback_transform(FeedbackShape::PopBubble, 0.0).scale, 0.0));
    assert!(approx(feedback_transform(FeedbackShape::PopBubble, 1.0).scale, 0.0));
}

#[test]
fn progress_is_clamped() {
    let over = feedback_transform(FeedbackShape::ExpandingRing, 2.0);
    assert!(approx(over.scale, 1.0));
    assert!(approx(over.opacity, 0.0));
    assert_eq!(progress_width(-0.5), "0.00%");
    assert_eq!(progress_width(0.25), "25.00%");
    assert_eq!(progress_width(3.0), "100.00%");
    assert_eq!(opacity_value(0.3), "0.30");
}

#[test]
fn feedback_style_places_mark_at_point() {
    let f = Feedback {
        point: point(25.0, 75.5, 1),
        progress: 0.0,
    };
    let css = feedback_style(&f, FeedbackShape::ExpandingRing);
    assert!(css.starts_with("left: 25.00%; top: 75.50%;"));
}

#[test]
fn links_are_drawn_only_when_present() {
    let feedbacks = [Feedback {
        point: point(10.0, 10.0, 0),
        progress: 0.5,
    }];
    let plain = cell_fx_html(FeedbackShape::RotatingStar, &feedbacks, &[]);
    assert!(!plain.contains("<svg"));
    assert_eq!(plain.matches("<span").count(), 1);

    let links = [Link {
        from: point(10.0, 10.0, 0),
        to: point(20.0, 30.0, 1),
    }];
    let linked = cell_fx_html(FeedbackShape::RotatingStar, &feedbacks, &links);
    assert!(linked.contains(r#"<line x1="10.00" y1="10.00" x2="20.00" y2="30.00" />"#));
}

#[test]
fn each_shape_has_a_distinct_class() {
    let shapes = [
        FeedbackShape::RisingBurst,
        FeedbackShape::ExpandingRing,
        FeedbackShape::SpinningTrophy,
        FeedbackShape::PopBubble,
        FeedbackShape::RotatingStar,
    ];
    let mut classes: Vec<_> = shapes.iter().map(|s| shape_class(*s)).collect();
    classes.sort();
    classes.dedup();
    assert_eq!(classes.len(), shapes.len());
}

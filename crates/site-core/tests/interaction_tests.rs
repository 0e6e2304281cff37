// Host-side tests for interaction histories.

use rand::rngs::StdRng;
use rand::SeedableRng;
use site_core::*;
use std::time::Duration;

#[test]
fn history_never_exceeds_retention() {
    for kind in InteractionKind::ALL {
        let mut h = InteractionHistory::new(kind);
        for i in 0..57 {
            h.push(i as f32, 0.0);
            assert!(h.len() <= INTERACTION_RETENTION);
        }
        assert_eq!(h.len(), INTERACTION_RETENTION);
        // oldest evicted first
        let xs: Vec<f32> = h.points().map(|p| p.x).collect();
        assert_eq!(xs.first().copied(), Some(47.0));
        assert_eq!(xs.last().copied(), Some(56.0));
    }
}

#[test]
fn ids_are_monotonic() {
    let mut h = InteractionHistory::new(InteractionKind::Maze);
    let ids: Vec<u64> = (0..15).map(|_| h.push(1.0, 1.0).id).collect();
    assert!(ids.windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn record_converts_to_cell_percentages() {
    let mut h = InteractionHistory::new(InteractionKind::Flames);
    let rect = CellRect {
        left: 100.0,
        top: 50.0,
        width: 400.0,
        height: 200.0,
    };
    let p = h.record(300.0, 100.0, rect);
    assert!((p.x - 50.0).abs() < 1e-4);
    assert!((p.y - 25.0).abs() < 1e-4);
    let degenerate = CellRect {
        width: 0.0,
        ..rect
    };
    assert_eq!(to_percent(10.0, 10.0, degenerate), (50.0, 50.0));
}

#[test]
fn feedback_fades_after_theme_lifetime() {
    let mut h = InteractionHistory::new(InteractionKind::Bubbles);
    h.push(10.0, 10.0);
    assert_eq!(h.feedbacks().len(), 1);
    assert_eq!(h.feedbacks()[0].progress, 0.0);
    h.tick(Duration::from_millis(300));
    let f = h.feedbacks();
    assert!((f[0].progress - 0.5).abs() < 1e-3);
    h.tick(Duration::from_millis(300));
    assert!(h.feedbacks().is_empty());
    // still retained in history even though its animation is over
    assert_eq!(h.len(), 1);
}

#[test]
fn theme_lifetimes_and_shapes_are_distinct_per_variant() {
    assert_eq!(
        InteractionKind::Flames.feedback_lifetime(),
        Duration::from_millis(1500)
    );
    assert_eq!(
        InteractionKind::Bubbles.feedback_lifetime(),
        Duration::from_millis(600)
    );
    let shapes: Vec<_> = InteractionKind::ALL.iter().map(|k| k.feedback_shape()).collect();
    for (i, a) in shapes.iter().enumerate() {
        for b in &shapes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn constellation_links_join_last_three_points() {
    let mut stars = InteractionHistory::new(InteractionKind::Stars);
    stars.push(0.0, 0.0);
    assert!(stars.constellation_links().is_empty());
    for i in 1..6 {
        stars.push(i as f32, i as f32);
    }
    let links = stars.constellation_links();
    assert_eq!(links.len(), 2);
    assert_eq!(links[0].from.x, 3.0);
    assert_eq!(links[0].to.x, 4.0);
    assert_eq!(links[1].to.x, 5.0);

    let mut maze = InteractionHistory::new(InteractionKind::Maze);
    maze.push(0.0, 0.0);
    maze.push(1.0, 1.0);
    assert!(maze.constellation_links().is_empty());
}

#[test]
fn quips_come_from_the_authored_list() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut said = 0;
    for _ in 0..500 {
        if let Some(q) = maybe_quip(&mut rng) {
            assert!(GEMINI_QUIPS.contains(&q));
            said += 1;
        }
    }
    // roughly 30% of interactions
    assert!(said > 100 && said < 200, "unexpected quip count {said}");
}

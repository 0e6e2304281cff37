// Host-side tests for the ignite button sequence.

use site_core::*;
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn burst_then_sound_then_scroll() {
    let mut seq = IgniteSequence::new("inferno");
    let mut out = Vec::new();
    assert!(seq.trigger(&mut out));
    assert_eq!(out, vec![IgniteEvent::BurstStarted]);
    assert!(seq.is_bursting());
    out.clear();

    seq.tick(ms(1199), &mut out);
    assert!(out.is_empty());
    seq.tick(ms(1), &mut out);
    assert_eq!(out, vec![IgniteEvent::BurstEnded, IgniteEvent::PlayIgnite]);
    assert!(!seq.is_bursting());
    assert!(seq.is_running());
    out.clear();

    seq.tick(ms(499), &mut out);
    assert!(out.is_empty());
    seq.tick(ms(1), &mut out);
    assert_eq!(out, vec![IgniteEvent::ScrollTo("inferno")]);
    assert!(!seq.is_running());
}

#[test]
fn retrigger_while_running_is_ignored() {
    let mut seq = IgniteSequence::new("inferno");
    let mut out = Vec::new();
    seq.trigger(&mut out);
    seq.tick(ms(600), &mut out);
    assert!(!seq.trigger(&mut out));
    assert_eq!(out, vec![IgniteEvent::BurstStarted]);
}

#[test]
fn one_long_tick_runs_the_whole_sequence() {
    let mut seq = IgniteSequence::new("x");
    let mut out = Vec::new();
    seq.trigger(&mut out);
    seq.tick(ms(5000), &mut out);
    assert_eq!(
        out,
        vec![
            IgniteEvent::BurstStarted,
            IgniteEvent::BurstEnded,
            IgniteEvent::PlayIgnite,
            IgniteEvent::ScrollTo("x"),
        ]
    );
    // can be fired again afterwards
    assert!(seq.trigger(&mut out));
}

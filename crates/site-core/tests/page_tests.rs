// Host-side tests for the page reducer: actions in, effects out.

use site_core::*;
use std::time::Duration;

const SECTION_HEIGHT: f64 = 1000.0;
const VIEWPORT: f64 = 800.0;

fn page() -> PageState {
    PageState::new(1280.0, 1)
}

/// Sections stacked one after another, each one viewport-and-a-bit tall.
fn scrolled(page: &PageState, scroll_y: f64) -> PageAction {
    let n = page.section_ids().len();
    let bounds = (0..n)
        .map(|i| {
            let top = i as f64 * SECTION_HEIGHT - scroll_y;
            Some(SectionBounds {
                top,
                bottom: top + SECTION_HEIGHT,
            })
        })
        .collect();
    PageAction::Scrolled {
        bounds,
        viewport_height: VIEWPORT,
        scroll_y,
        scroll_height: n as f64 * SECTION_HEIGHT,
    }
}

#[test]
fn page_sections_in_order() {
    let p = page();
    let ids = p.section_ids();
    assert_eq!(ids.len(), 9);
    assert_eq!(ids[0], "hero");
    assert_eq!(ids[1], EXPERIENCES[0].id);
    assert_eq!(&ids[6..], &["tech", "personal", "cta"]);
    assert_eq!(p.scroll().active, "hero");
}

#[test]
fn scrolling_updates_section_progress_and_reveals() {
    let mut p = page();
    let fx = p.dispatch(scrolled(&p, 1000.0));
    let total = 9.0 * SECTION_HEIGHT - VIEWPORT;
    assert_eq!(fx[0], Effect::Progress((1000.0 / total) as f32));
    assert!(fx.contains(&Effect::ActiveSection("inferno")));
    assert!(fx.contains(&Effect::Nav));
    assert!(fx.contains(&Effect::RevealSection("inferno")));
    assert!(!fx.contains(&Effect::RevealSection("labyrinth")));
    assert!(fx.contains(&Effect::SectionOpacity("tech", DIMMED_SECTION_OPACITY)));
    assert_eq!(p.scroll().active, "inferno");

    // same position again: nothing new to reveal or highlight
    let fx = p.dispatch(scrolled(&p, 1000.0));
    assert!(!fx.iter().any(|e| matches!(e, Effect::RevealSection(_))));
    assert!(!fx.iter().any(|e| matches!(e, Effect::ActiveSection(_))));

    // the tech section lights up once it is on screen
    let fx = p.dispatch(scrolled(&p, 6000.0));
    assert!(fx.contains(&Effect::SectionOpacity("tech", 1.0)));
    assert!(fx.contains(&Effect::ActiveSection("tech")));
}

#[test]
fn closing_sections_fade_in_on_the_way_down() {
    let mut p = page();
    let bottom = 9.0 * SECTION_HEIGHT - VIEWPORT;
    let mut revealed = Vec::new();
    let mut y = 0.0;
    while y <= bottom {
        for e in p.dispatch(scrolled(&p, y)) {
            if let Effect::RevealSection(id) = e {
                revealed.push(id);
            }
        }
        y += 100.0;
    }
    for id in ["personal", "cta"] {
        assert_eq!(revealed.iter().filter(|r| **r == id).count(), 1, "{id}");
    }
    for exp in &EXPERIENCES {
        assert!(revealed.contains(&exp.id));
    }
    assert!(!revealed.contains(&"hero"));
    assert!(!revealed.contains(&"tech"));
}

#[test]
fn nav_selection_scrolls_and_unknown_is_ignored() {
    let mut p = page();
    assert_eq!(
        p.dispatch(PageAction::NavSelected("tech".into())),
        vec![Effect::ScrollTo("tech"), Effect::Nav]
    );
    assert!(p.dispatch(PageAction::NavSelected("nowhere".into())).is_empty());
}

#[test]
fn resize_switches_nav_layout() {
    let mut p = page();
    assert_eq!(p.nav_view().layout, NavLayout::Desktop);
    assert_eq!(
        p.dispatch(PageAction::Resized { inner_width: 500.0 }),
        vec![Effect::Nav]
    );
    assert_eq!(p.nav_view().layout, NavLayout::Mobile);
    p.dispatch(PageAction::ToggleMenu);
    assert!(p.nav_view().menu_open);
}

#[test]
fn ignite_click_runs_burst_sound_and_scroll() {
    let mut p = page();
    assert_eq!(
        p.dispatch(PageAction::IgniteClicked),
        vec![Effect::IgniteBurst(true)]
    );
    assert!(p.is_bursting());
    assert!(p.dispatch(PageAction::IgniteClicked).is_empty());

    let ignite_only = |fx: Vec<Effect>| -> Vec<Effect> {
        fx.into_iter()
            .filter(|e| {
                matches!(
                    e,
                    Effect::IgniteBurst(_) | Effect::Play(..) | Effect::ScrollTo(_)
                )
            })
            .collect()
    };
    let fx = ignite_only(p.tick(Duration::from_millis(1200)));
    assert_eq!(
        fx,
        vec![
            Effect::IgniteBurst(false),
            Effect::Play(Clip::Ignite, Some(IGNITE_VOLUME)),
        ]
    );
    let fx = ignite_only(p.tick(Duration::from_millis(500)));
    assert_eq!(fx, vec![Effect::ScrollTo("inferno")]);
}

#[test]
fn contact_flow_from_open_to_submit() {
    let mut p = page();
    assert_eq!(p.dispatch(PageAction::OpenContact), vec![Effect::ContactChanged]);
    p.dispatch(PageAction::ContactTab(ContactTab::Message));
    assert_eq!(p.contact.tab(), ContactTab::Message);
    for (field, value) in [
        (ContactField::Name, "Sam"),
        (ContactField::Email, "sam@example.com"),
        (ContactField::Message, "Hello"),
    ] {
        assert!(p
            .dispatch(PageAction::ContactInput(field, value.into()))
            .is_empty());
    }
    let fx = p.dispatch(PageAction::ContactSubmit);
    assert!(!p.contact.is_open());
    match &fx[..] {
        [Effect::Submitted(draft), Effect::ContactChanged] => {
            assert_eq!(draft.name, "Sam");
            assert_eq!(draft.message, "Hello");
        }
        other => panic!("unexpected effects {other:?}"),
    }
}

#[test]
fn backdrop_closes_dialogs_through_close_actions() {
    let mut p = page();
    p.dispatch(PageAction::OpenContact);
    assert_eq!(p.dispatch(PageAction::CloseContact), vec![Effect::ContactChanged]);
    assert!(!p.contact.is_open());

    p.dispatch(PageAction::OpenExperience("labyrinth".into()));
    assert_eq!(
        p.dispatch(PageAction::CloseExperience),
        vec![Effect::ExperienceChanged]
    );
    assert!(p.selected_experience().is_none());
}

#[test]
fn escape_closes_open_dialogs() {
    let mut p = page();
    assert!(p.dispatch(PageAction::Escape).is_empty());

    p.dispatch(PageAction::OpenExperience("constellation".into()));
    assert_eq!(p.selected_experience().map(|e| e.id), Some("constellation"));
    assert_eq!(p.dispatch(PageAction::Escape), vec![Effect::ExperienceChanged]);
    assert!(p.selected_experience().is_none());

    assert!(p
        .dispatch(PageAction::OpenExperience("bogus".into()))
        .is_empty());
    assert!(!p.experience.is_open());
}

#[test]
fn interactions_are_recorded_per_experience() {
    let mut p = page();
    let fx = p.dispatch(PageAction::Interacted {
        experience: 2,
        x: 25.0,
        y: 75.0,
    });
    match &fx[..] {
        [Effect::Interaction(2, point)] => assert_eq!((point.x, point.y), (25.0, 75.0)),
        other => panic!("unexpected effects {other:?}"),
    }
    assert_eq!(p.history(2).map(|h| h.len()), Some(1));
    assert_eq!(p.history(0).map(|h| h.len()), Some(0));
    assert!(p
        .dispatch(PageAction::Interacted {
            experience: 99,
            x: 0.0,
            y: 0.0
        })
        .is_empty());
}

#[test]
fn hero_types_then_reveals_once() {
    let mut p = page();
    let mut reveals = 0;
    let mut text_updates = 0;
    for _ in 0..(10_000 / 16) {
        for e in p.tick(Duration::from_millis(16)) {
            match e {
                Effect::HeroRevealed => reveals += 1,
                Effect::HeroText => text_updates += 1,
                _ => {}
            }
        }
    }
    assert_eq!(reveals, 1);
    assert!(text_updates > 0);
    assert!(p.hero.elements_shown());
    assert!(p.hero.typing.is_complete());
    assert_eq!(p.hero.typing.display_text(), HERO_QUESTION);
}

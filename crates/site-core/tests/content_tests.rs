// Host-side tests for the authored page content.

use site_core::*;

#[test]
fn five_experiences_with_distinct_visuals() {
    assert_eq!(EXPERIENCES.len(), 5);
    let kinds: Vec<_> = EXPERIENCES.iter().map(|e| e.kind).collect();
    assert_eq!(kinds, InteractionKind::ALL.to_vec());
    for e in &EXPERIENCES {
        assert!(e.color.starts_with('#') && e.color.len() == 7, "{}", e.id);
        assert!(!e.full_concept.is_empty());
    }
}

#[test]
fn nav_labels_use_last_word_of_name() {
    let s = sections();
    assert_eq!(s.len(), EXPERIENCES.len() + 4);
    assert_eq!(s[0].name, "Home");
    assert_eq!(s[2].name, "Labyrinth");
    assert_eq!(s[2].color, EXPERIENCES[1].color);
    assert_eq!(s.last().map(|c| c.id), Some(CTA_SECTION_ID));
}

#[test]
fn experience_lookup() {
    assert_eq!(experience_index("spark-index"), Ok(2));
    assert_eq!(
        experience_index("nope"),
        Err(SiteError::UnknownExperience("nope".into()))
    );
    assert_eq!(experience("constellation").map(|e| e.kind), Some(InteractionKind::Stars));
    assert_eq!("maze".parse::<InteractionKind>(), Ok(InteractionKind::Maze));
}

#[test]
fn hero_question_contains_flicker_word() {
    assert!(HERO_QUESTION.contains(HERO_FLICKER_WORD));
}

#[test]
fn shaders_declare_their_entry_points() {
    for entry in ["vs_particle", "fs_particle"] {
        assert!(PARTICLES_WGSL.contains(entry));
    }
    for entry in ["vs_fullscreen", "fs_haze"] {
        assert!(HAZE_WGSL.contains(entry));
    }
}

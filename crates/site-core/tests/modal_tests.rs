// Host-side tests for the contact and experience dialogs.

use site_core::*;

#[test]
fn contact_starts_closed_on_booking_tab() {
    let m = ContactModal::default();
    assert!(!m.is_open());
    assert_eq!(m.state(), ModalState::Closed);
    assert_eq!(m.tab(), ContactTab::Booking);
    assert_eq!(m.draft(), &ContactDraft::default());
}

#[test]
fn close_shuts_contact_and_keeps_tab() {
    let mut m = ContactModal::default();
    m.open();
    m.select_tab(ContactTab::Direct);
    assert!(m.is_open());
    m.close();
    assert!(!m.is_open());
    assert_eq!(m.tab(), ContactTab::Direct);
}

#[test]
fn message_form_submission_closes_and_reports_draft() {
    let mut m = ContactModal::default();
    m.open();
    m.select_tab(ContactTab::Message);
    m.set_field(ContactField::Name, "Avery");
    m.set_field(ContactField::Email, "avery@example.com");
    m.set_field(ContactField::Message, "Let's talk.");
    let draft = m.submit();
    assert!(!m.is_open());
    assert_eq!(draft.name, "Avery");
    assert_eq!(draft.field(ContactField::Email), "avery@example.com");
    assert_eq!(draft.company, "");
    // the typed values survive a reopen
    m.open();
    assert_eq!(m.draft().message, "Let's talk.");
}

#[test]
fn tabs_and_fields_parse_from_dom_names() {
    assert_eq!("calendar".parse::<ContactTab>(), Ok(ContactTab::Booking));
    assert_eq!("contact".parse::<ContactTab>(), Ok(ContactTab::Direct));
    assert!("fax".parse::<ContactTab>().is_err());
    for f in ContactField::ALL {
        assert_eq!(f.as_str().parse::<ContactField>(), Ok(f));
    }
    assert_eq!(
        "address".parse::<ContactField>(),
        Err(SiteError::UnknownField("address".into()))
    );
}

#[test]
fn only_name_email_message_are_required() {
    let required: Vec<_> = ContactField::ALL
        .into_iter()
        .filter(|f| f.is_required())
        .collect();
    assert_eq!(
        required,
        vec![ContactField::Name, ContactField::Email, ContactField::Message]
    );
}

#[test]
fn experience_modal_renders_nothing_when_closed() {
    let mut m = ExperienceModal::default();
    assert!(m.view().is_none());
    m.open(&EXPERIENCES[3]);
    assert!(m.is_open());
    assert_eq!(m.view().map(|e| e.id), Some("firestarter"));
    m.close();
    assert!(!m.is_open());
    assert!(m.view().is_none());
    // download with nothing selected is a quiet no-op
    m.download();
}

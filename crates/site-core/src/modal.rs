//! Contact and experience-detail dialogs.
//!
//! Both dialogs are closed/open toggles. Their actions are stubs that log;
//! no network is involved.

use crate::content::ExperienceDescriptor;
use crate::error::SiteError;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContactTab {
    #[default]
    Booking,
    Message,
    Direct,
}

impl ContactTab {
    pub const ALL: [ContactTab; 3] = [ContactTab::Booking, ContactTab::Message, ContactTab::Direct];

    pub fn as_str(self) -> &'static str {
        match self {
            ContactTab::Booking => "calendar",
            ContactTab::Message => "message",
            ContactTab::Direct => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactTab::Booking => "Book a Call",
            ContactTab::Message => "Send Message",
            ContactTab::Direct => "Direct Contact",
        }
    }
}

impl FromStr for ContactTab {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContactTab::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| SiteError::UnknownTab(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Company,
    Message,
    Phone,
}

impl ContactField {
    pub const ALL: [ContactField; 5] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Company,
        ContactField::Message,
        ContactField::Phone,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Company => "company",
            ContactField::Message => "message",
            ContactField::Phone => "phone",
        }
    }

    /// Marked `required` in the form. Nothing here enforces it.
    pub fn is_required(self) -> bool {
        matches!(self, ContactField::Name | ContactField::Email | ContactField::Message)
    }
}

impl FromStr for ContactField {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContactField::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| SiteError::UnknownField(s.to_string()))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
    pub phone: String,
}

impl ContactDraft {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Company => &self.company,
            ContactField::Message => &self.message,
            ContactField::Phone => &self.phone,
        }
    }

    fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Company => &mut self.company,
            ContactField::Message => &mut self.message,
            ContactField::Phone => &mut self.phone,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ContactModal {
    state: ModalState,
    tab: ContactTab,
    draft: ContactDraft,
}

impl ContactModal {
    pub fn open(&mut self) {
        self.state = ModalState::Open;
    }

    pub fn close(&mut self) {
        self.state = ModalState::Closed;
    }

    pub fn is_open(&self) -> bool {
        self.state == ModalState::Open
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn select_tab(&mut self, tab: ContactTab) {
        self.tab = tab;
    }

    pub fn tab(&self) -> ContactTab {
        self.tab
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        *self.draft.field_mut(field) = value.into();
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    /// Submission always succeeds locally: the draft is logged and the
    /// dialog closes. The draft is kept as typed.
    pub fn submit(&mut self) -> ContactDraft {
        log::info!("[contact] form submitted: {:?}", self.draft);
        self.close();
        self.draft.clone()
    }

    pub fn book_call(&self) {
        log::info!("[contact] opening calendar booking...");
    }

    pub fn download_concept(&self) {
        log::info!("[contact] downloading complete concept PDF...");
    }
}

#[derive(Clone, Debug, Default)]
pub struct ExperienceModal {
    state: ModalState,
    selected: Option<&'static ExperienceDescriptor>,
}

impl ExperienceModal {
    pub fn open(&mut self, experience: &'static ExperienceDescriptor) {
        self.selected = Some(experience);
        self.state = ModalState::Open;
    }

    pub fn close(&mut self) {
        self.state = ModalState::Closed;
        self.selected = None;
    }

    pub fn is_open(&self) -> bool {
        self.state == ModalState::Open
    }

    /// What to render; `None` renders nothing.
    pub fn view(&self) -> Option<&'static ExperienceDescriptor> {
        match self.state {
            ModalState::Open => self.selected,
            ModalState::Closed => None,
        }
    }

    pub fn download(&self) {
        if let Some(exp) = self.selected {
            log::info!("[experience] downloading PDF for {}", exp.name);
        }
    }
}

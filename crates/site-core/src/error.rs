use thiserror::Error;

/// Failures when resolving page entities from their string names.
///
/// None of these are fatal to the page; callers log and carry on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SiteError {
    #[error("unknown section `{0}`")]
    UnknownSection(String),
    #[error("unknown experience `{0}`")]
    UnknownExperience(String),
    #[error("unknown sound clip `{0}`")]
    UnknownClip(String),
    #[error("unknown contact field `{0}`")]
    UnknownField(String),
    #[error("unknown contact tab `{0}`")]
    UnknownTab(String),
}

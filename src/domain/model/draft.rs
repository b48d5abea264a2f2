//! The in-progress issue draft and its edit operations.

use serde::{Deserialize, Serialize};

use super::{IssueCategory, IssuePriority};

/// Reference to a file staged as evidence. Staging records metadata only;
/// no bytes are read or uploaded before submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentRef {
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

/// The in-progress, not-yet-submitted issue report.
///
/// Owned exclusively by the wizard; mutated only through its operations.
/// A partial draft is never sent to the persistence collaborator — see
/// [`IssueReport::assemble`](crate::submit::IssueReport::assemble).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IssueDraft {
    pub title: String,
    pub description: String,
    /// Free-typed, or auto-filled as `"<lat>, <lon>"` with six decimals.
    pub location: String,
    pub category: Option<IssueCategory>,
    pub priority: Option<IssuePriority>,
    pub attachment: Option<AttachmentRef>,
}

impl IssueDraft {
    /// Apply a single field edit. Always succeeds, in any step.
    pub fn apply(&mut self, edit: FieldEdit) {
        match edit {
            FieldEdit::Title(value) => self.title = value,
            FieldEdit::Description(value) => self.description = value,
            FieldEdit::Location(value) => self.location = value,
            FieldEdit::Category(value) => self.category = Some(value),
            FieldEdit::Priority(value) => self.priority = Some(value),
        }
    }
}

/// A single edit to a named draft field.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldEdit {
    Title(String),
    Description(String),
    Location(String),
    Category(IssueCategory),
    Priority(IssuePriority),
}

impl FieldEdit {
    /// The field this edit touches.
    pub fn field(&self) -> DraftField {
        match self {
            FieldEdit::Title(_) => DraftField::Title,
            FieldEdit::Description(_) => DraftField::Description,
            FieldEdit::Location(_) => DraftField::Location,
            FieldEdit::Category(_) => DraftField::Category,
            FieldEdit::Priority(_) => DraftField::Priority,
        }
    }
}

/// Names of the required draft fields, used in validation diagnostics and
/// wizard events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftField {
    Title,
    Description,
    Location,
    Category,
    Priority,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_overwrites_only_the_named_field() {
        let mut draft = IssueDraft::default();
        draft.apply(FieldEdit::Title("Broken light".into()));
        draft.apply(FieldEdit::Category(IssueCategory::Streetlight));
        assert_eq!(draft.title, "Broken light");
        assert_eq!(draft.category, Some(IssueCategory::Streetlight));
        assert!(draft.description.is_empty());
        assert_eq!(draft.priority, None);
    }

    #[test]
    fn default_draft_is_empty() {
        let draft = IssueDraft::default();
        assert!(draft.title.is_empty());
        assert!(draft.location.is_empty());
        assert_eq!(draft.category, None);
        assert_eq!(draft.attachment, None);
    }
}

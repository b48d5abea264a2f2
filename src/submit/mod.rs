//! Submission dispatch — assembling the completed draft and sending it to
//! the persistence collaborator.
//!
//! Transport, auth, and storage format are entirely the collaborator's
//! concern; the dispatcher makes exactly one call per user-initiated
//! submit and performs no retries.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::core::validation::first_incomplete_step;
use crate::domain::model::{AttachmentRef, IssueCategory, IssueDraft, IssuePriority};
use crate::error::SubmitError;

/// A complete, well-formed report ready for the persistence collaborator.
///
/// Unlike the draft, category and priority are no longer optional: a report
/// can only be assembled from a draft that validates on every step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IssueReport {
    /// Client-side reference stamped per submission attempt.
    pub client_ref: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,
    pub category: IssueCategory,
    pub priority: IssuePriority,
    pub attachment: Option<AttachmentRef>,
}

impl IssueReport {
    /// Assemble a report from a draft, trimming text fields.
    ///
    /// Returns `None` while any required field is empty or unselected —
    /// partial drafts never leave the wizard.
    pub fn assemble(draft: &IssueDraft) -> Option<IssueReport> {
        if first_incomplete_step(draft).is_some() {
            return None;
        }
        Some(IssueReport {
            client_ref: Uuid::new_v4(),
            title: draft.title.trim().to_string(),
            description: draft.description.trim().to_string(),
            location: draft.location.trim().to_string(),
            category: draft.category?,
            priority: draft.priority?,
            attachment: draft.attachment.clone(),
        })
    }
}

/// Acknowledgement from the persistence collaborator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IssueAck {
    pub issue_id: String,
    pub received_at: DateTime<Utc>,
}

/// The persistence collaborator boundary.
#[async_trait]
pub trait IssueStore: Send + Sync {
    async fn create_issue(&self, report: IssueReport) -> Result<IssueAck, SubmitError>;
}

/// Sends assembled reports to the issue store.
pub struct SubmissionDispatcher {
    store: Arc<dyn IssueStore>,
}

impl SubmissionDispatcher {
    pub fn new(store: Arc<dyn IssueStore>) -> Self {
        SubmissionDispatcher { store }
    }

    /// One call, no retries — a retry is a user-initiated re-dispatch of
    /// the intact draft.
    pub async fn dispatch(&self, report: IssueReport) -> Result<IssueAck, SubmitError> {
        let client_ref = report.client_ref;
        match self.store.create_issue(report).await {
            Ok(ack) => {
                tracing::debug!(%client_ref, issue_id = %ack.issue_id, "issue accepted");
                Ok(ack)
            }
            Err(err) => {
                tracing::warn!(%client_ref, error = %err, "issue store refused submission");
                Err(err)
            }
        }
    }
}

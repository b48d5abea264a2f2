//! Closed classification sets for issue reports.
//!
//! Both sets are deliberately closed enums rather than open strings so the
//! validator and the submission contract can be checked exhaustively.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Issue category — the closed set offered by the reporting form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueCategory {
    /// Roads & infrastructure.
    Road,
    /// Street lighting.
    Streetlight,
    /// Waste management.
    Sanitation,
    /// Water & drainage.
    Water,
    /// Public safety.
    Safety,
    /// Traffic & transport.
    Transport,
    /// Anything that does not fit the categories above.
    Other,
}

impl IssueCategory {
    /// Every selectable category, in form display order.
    pub const ALL: [IssueCategory; 7] = [
        IssueCategory::Road,
        IssueCategory::Streetlight,
        IssueCategory::Sanitation,
        IssueCategory::Water,
        IssueCategory::Safety,
        IssueCategory::Transport,
        IssueCategory::Other,
    ];

    /// Stable wire name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCategory::Road => "road",
            IssueCategory::Streetlight => "streetlight",
            IssueCategory::Sanitation => "sanitation",
            IssueCategory::Water => "water",
            IssueCategory::Safety => "safety",
            IssueCategory::Transport => "transport",
            IssueCategory::Other => "other",
        }
    }

    /// Parse a form option value back into a category.
    pub fn from_form_value(value: &str) -> Option<IssueCategory> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Issue priority — selected on the final wizard step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssuePriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl IssuePriority {
    pub const ALL: [IssuePriority; 4] = [
        IssuePriority::Low,
        IssuePriority::Medium,
        IssuePriority::High,
        IssuePriority::Urgent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IssuePriority::Low => "low",
            IssuePriority::Medium => "medium",
            IssuePriority::High => "high",
            IssuePriority::Urgent => "urgent",
        }
    }
}

impl fmt::Display for IssuePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trips_through_form_values() {
        for category in IssueCategory::ALL {
            assert_eq!(IssueCategory::from_form_value(category.as_str()), Some(category));
        }
        assert_eq!(IssueCategory::from_form_value("pothole"), None);
    }

    #[test]
    fn serde_names_match_as_str() {
        let json = serde_json::to_string(&IssueCategory::Streetlight).unwrap();
        assert_eq!(json, "\"streetlight\"");
        let json = serde_json::to_string(&IssuePriority::Urgent).unwrap();
        assert_eq!(json, "\"urgent\"");
    }

    #[test]
    fn priority_orders_by_severity() {
        assert!(IssuePriority::Low < IssuePriority::Urgent);
    }
}

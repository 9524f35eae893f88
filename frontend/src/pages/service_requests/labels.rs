use serde_json::Value;

use crate::components::status_badge::{IconKind, StatusLabel, StatusTone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceStatus {
    UnderReview,
    Approved,
    Completed,
    Rejected,
}

impl ServiceStatus {
    pub fn from_code(code: Option<i64>) -> Self {
        match code {
            Some(0) => ServiceStatus::UnderReview,
            Some(1) => ServiceStatus::Approved,
            Some(2) => ServiceStatus::Completed,
            _ => ServiceStatus::Rejected,
        }
    }

    pub fn from_value(value: Option<&Value>) -> Self {
        Self::from_code(value.and_then(Value::as_i64))
    }

    pub fn status_label(self) -> StatusLabel {
        match self {
            ServiceStatus::UnderReview => StatusLabel {
                text: "Under Review",
                icon: IconKind::CircleExclamation,
                tone: StatusTone::Info,
            },
            ServiceStatus::Approved => StatusLabel {
                text: "Approved",
                icon: IconKind::ThumbsUp,
                tone: StatusTone::Pending,
            },
            ServiceStatus::Completed => StatusLabel {
                text: "Completed",
                icon: IconKind::CircleCheck,
                tone: StatusTone::Success,
            },
            ServiceStatus::Rejected => StatusLabel {
                text: "Rejected",
                icon: IconKind::Xmark,
                tone: StatusTone::Danger,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueType {
    Malfunction,
    Repair,
    Installation,
    Unknown,
}

impl IssueType {
    pub const SELECTABLE: [IssueType; 3] =
        [IssueType::Malfunction, IssueType::Repair, IssueType::Installation];

    pub fn from_code(code: Option<i64>) -> Self {
        match code {
            Some(1) => IssueType::Malfunction,
            Some(2) => IssueType::Repair,
            Some(3) => IssueType::Installation,
            _ => IssueType::Unknown,
        }
    }

    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Number(n)) => Self::from_code(n.as_i64()),
            Some(Value::String(s)) => Self::from_code(s.trim().parse::<i64>().ok()),
            _ => IssueType::Unknown,
        }
    }

    pub fn code(self) -> Option<i64> {
        match self {
            IssueType::Malfunction => Some(1),
            IssueType::Repair => Some(2),
            IssueType::Installation => Some(3),
            IssueType::Unknown => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            IssueType::Malfunction => "Malfunction",
            IssueType::Repair => "Repair",
            IssueType::Installation => "Installation",
            IssueType::Unknown => "Unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn service_status_maps_known_codes() {
        assert_eq!(ServiceStatus::from_code(Some(0)), ServiceStatus::UnderReview);
        assert_eq!(ServiceStatus::from_code(Some(1)), ServiceStatus::Approved);
        assert_eq!(ServiceStatus::from_code(Some(2)), ServiceStatus::Completed);
        assert_eq!(
            ServiceStatus::UnderReview.status_label().text,
            "Under Review"
        );
    }

    #[test]
    fn service_status_falls_back_to_rejected() {
        for code in [Some(3), Some(-1), None] {
            assert_eq!(ServiceStatus::from_code(code), ServiceStatus::Rejected);
        }
        assert_eq!(
            ServiceStatus::from_value(Some(&json!("UnderReview"))),
            ServiceStatus::Rejected
        );
        assert_eq!(ServiceStatus::Rejected.status_label().icon, IconKind::Xmark);
    }

    #[test]
    fn issue_type_round_trips_codes() {
        for issue in IssueType::SELECTABLE {
            assert_eq!(IssueType::from_code(issue.code()), issue);
        }
        assert_eq!(IssueType::from_value(Some(&json!(2))).label(), "Repair");
    }

    #[test]
    fn issue_type_falls_back_to_unknown() {
        assert_eq!(IssueType::from_code(Some(0)), IssueType::Unknown);
        assert_eq!(IssueType::from_code(Some(4)), IssueType::Unknown);
        assert_eq!(IssueType::from_value(None), IssueType::Unknown);
        assert_eq!(IssueType::Unknown.code(), None);
    }

    #[test]
    fn issue_type_accepts_numeric_strings() {
        assert_eq!(IssueType::from_value(Some(&json!("2"))), IssueType::Repair);
        assert_eq!(IssueType::from_value(Some(&json!(" 3 "))), IssueType::Installation);
        assert_eq!(IssueType::from_value(Some(&json!("Repair"))), IssueType::Unknown);
    }
}

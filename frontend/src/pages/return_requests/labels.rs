use serde_json::Value;

use crate::components::status_badge::{IconKind, StatusLabel, StatusTone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnStatus {
    Sent,
    Approved,
    Returned,
    Rejected,
}

impl ReturnStatus {
    /// Total over every input: anything outside 0..=2 is `Rejected`.
    pub fn from_code(code: Option<i64>) -> Self {
        match code {
            Some(0) => ReturnStatus::Sent,
            Some(1) => ReturnStatus::Approved,
            Some(2) => ReturnStatus::Returned,
            _ => ReturnStatus::Rejected,
        }
    }

    pub fn from_value(value: Option<&Value>) -> Self {
        Self::from_code(value.and_then(Value::as_i64))
    }

    pub fn status_label(self) -> StatusLabel {
        match self {
            ReturnStatus::Sent => StatusLabel {
                text: "Sent",
                icon: IconKind::PaperPlane,
                tone: StatusTone::Info,
            },
            ReturnStatus::Approved => StatusLabel {
                text: "Approved",
                icon: IconKind::ThumbsUp,
                tone: StatusTone::Pending,
            },
            ReturnStatus::Returned => StatusLabel {
                text: "Returned",
                icon: IconKind::CircleCheck,
                tone: StatusTone::Success,
            },
            ReturnStatus::Rejected => StatusLabel {
                text: "Rejected",
                icon: IconKind::CircleXmark,
                tone: StatusTone::Danger,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCondition {
    Working,
    Damaged,
    Broken,
    Unknown,
}

impl AssetCondition {
    /// Options offered by the return form, in display order.
    pub const SELECTABLE: [AssetCondition; 3] = [
        AssetCondition::Working,
        AssetCondition::Damaged,
        AssetCondition::Broken,
    ];

    pub fn from_code(code: Option<i64>) -> Self {
        match code {
            Some(0) => AssetCondition::Working,
            Some(1) => AssetCondition::Damaged,
            Some(2) => AssetCondition::Broken,
            _ => AssetCondition::Unknown,
        }
    }

    pub fn from_label(label: &str) -> Self {
        Self::SELECTABLE
            .into_iter()
            .find(|condition| condition.label().eq_ignore_ascii_case(label.trim()))
            .unwrap_or(AssetCondition::Unknown)
    }

    /// Rows store either the numeric code or the label that the form posted.
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Number(n)) => Self::from_code(n.as_i64()),
            Some(Value::String(s)) => match s.trim().parse::<i64>() {
                Ok(code) => Self::from_code(Some(code)),
                Err(_) => Self::from_label(s),
            },
            _ => AssetCondition::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AssetCondition::Working => "Working",
            AssetCondition::Damaged => "Damaged",
            AssetCondition::Broken => "Broken",
            AssetCondition::Unknown => "Unknown",
        }
    }
}

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    PaperPlane,
    ThumbsUp,
    CircleCheck,
    CircleExclamation,
    CircleXmark,
    Xmark,
}

impl IconKind {
    pub fn css_class(self) -> &'static str {
        match self {
            IconKind::PaperPlane => "fas fa-paper-plane",
            IconKind::ThumbsUp => "fas fa-thumbs-up",
            IconKind::CircleCheck => "fas fa-circle-check",
            IconKind::CircleExclamation => "fas fa-circle-exclamation",
            IconKind::CircleXmark => "fas fa-circle-xmark",
            IconKind::Xmark => "fas fa-xmark",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Info,
    Pending,
    Success,
    Danger,
}

impl StatusTone {
    pub fn css_class(self) -> &'static str {
        match self {
            StatusTone::Info => "text-blue-600 font-semibold",
            StatusTone::Pending => "text-yellow-500 font-semibold",
            StatusTone::Success => "text-green-500 font-semibold",
            StatusTone::Danger => "text-red-600 font-semibold",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLabel {
    pub text: &'static str,
    pub icon: IconKind,
    pub tone: StatusTone,
}

#[component]
pub fn StatusBadge(label: StatusLabel) -> impl IntoView {
    view! {
        <span class=label.tone.css_class()>
            <i class=label.icon.css_class() aria-hidden="true"></i>
            " "
            {label.text}
        </span>
    }
}

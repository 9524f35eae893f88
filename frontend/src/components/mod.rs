pub mod common;
pub mod empty_state;
pub mod error;
pub mod layout;
pub mod modal;
pub mod pagination;
pub mod status_badge;

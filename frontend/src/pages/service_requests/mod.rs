pub mod components;
pub mod labels;
pub mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

pub use panel::ServiceRequestsPage;

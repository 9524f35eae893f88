pub mod register;
pub mod return_requests;
pub mod service_requests;

pub use register::RegisterPage;
pub use return_requests::ReturnRequestsPage;
pub use service_requests::ServiceRequestsPage;

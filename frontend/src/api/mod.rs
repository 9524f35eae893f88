mod allocations;
pub mod auth;
pub mod client;
pub mod envelope;
mod return_requests;
mod service_requests;
pub mod types;

pub use client::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;

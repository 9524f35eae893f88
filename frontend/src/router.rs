use leptos::*;
use leptos_router::*;

use crate::pages::{RegisterPage, ReturnRequestsPage, ServiceRequestsPage};

pub const HOME_REDIRECT: &str = "/ReturnRequest";

pub const ROUTE_PATHS: &[&str] = &["/", "/ReturnRequest", "/ServiceRequest", "/register"];

/// Pages that read the `token` cookie before loading anything.
pub const SESSION_ROUTE_PATHS: &[&str] = &["/ReturnRequest", "/ServiceRequest"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    view! {
        <Router>
            <Routes>
                <Route path="/" view=HomeRedirect/>
                <Route path="/ReturnRequest" view=ReturnRequestsPage/>
                <Route path="/ServiceRequest" view=ServiceRequestsPage/>
                <Route path="/register" view=RegisterPage/>
            </Routes>
        </Router>
    }
}

#[component]
fn HomeRedirect() -> impl IntoView {
    view! { <Redirect path=HOME_REDIRECT/> }
}

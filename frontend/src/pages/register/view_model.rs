use crate::api::{ApiClient, ApiError, RegisterRequest};
use crate::components::layout::flash_toast;
use crate::pages::register::{repository::RegisterRepository, utils::RegisterFormState};
use leptos::*;

pub const REGISTER_SUCCESS_MESSAGE: &str = "Registration Successful!";
pub const SIGN_IN_PATH: &str = "/signin";
/// Gives the success toast a moment on screen before the page unloads.
const REDIRECT_DELAY_MS: u32 = 1200;

#[derive(Clone, Copy)]
pub struct RegisterViewModel {
    pub form: RegisterFormState,
    pub error: RwSignal<Option<ApiError>>,
    pub toast: RwSignal<Option<String>>,
    pub redirect: RwSignal<Option<&'static str>>,
    pub register_action: Action<RegisterRequest, Result<(), ApiError>>,
}

fn apply_register_result(
    result: Option<Result<(), ApiError>>,
    form: RegisterFormState,
    error: RwSignal<Option<ApiError>>,
    toast: RwSignal<Option<String>>,
    redirect: RwSignal<Option<&'static str>>,
) {
    let Some(result) = result else {
        return;
    };
    match result {
        Ok(()) => {
            error.set(None);
            form.reset();
            flash_toast(toast, REGISTER_SUCCESS_MESSAGE);
            redirect.set(Some(SIGN_IN_PATH));
            navigate_later(SIGN_IN_PATH);
        }
        Err(err) => error.set(Some(err)),
    }
}

fn navigate_later(path: &'static str) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::callback::Timeout::new(REDIRECT_DELAY_MS, move || {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    })
    .forget();
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (path, REDIRECT_DELAY_MS);
}

impl RegisterViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(RegisterRepository::new(api));
        let form = RegisterFormState::default();
        let error = create_rw_signal(None::<ApiError>);
        let toast = create_rw_signal(None::<String>);
        let redirect = create_rw_signal(None::<&'static str>);

        let register_action = create_action(move |request: &RegisterRequest| {
            let repo = repository.get_value();
            let request = request.clone();
            async move { repo.register(request).await }
        });

        create_effect(move |_| {
            apply_register_result(register_action.value().get(), form, error, toast, redirect);
        });

        Self {
            form,
            error,
            toast,
            redirect,
            register_action,
        }
    }

    pub fn pending(&self) -> Signal<bool> {
        self.register_action.pending().into()
    }

    pub fn submit(&self) {
        if self.register_action.pending().get_untracked() {
            return;
        }
        self.error.set(None);
        self.register_action.dispatch(self.form.to_request());
    }

    pub fn apply_register_result(&self, result: Option<Result<(), ApiError>>) {
        apply_register_result(result, self.form, self.error, self.toast, self.redirect);
    }
}

impl Default for RegisterViewModel {
    fn default() -> Self {
        Self::new()
    }
}

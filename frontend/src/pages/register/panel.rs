use crate::components::{common::Button, error::InlineErrorMessage, layout::SuccessToast};
use crate::pages::register::{utils::RegisterField, view_model::RegisterViewModel};
use leptos::*;

const INPUT_CLASS: &str =
    "text-gray-900 bg-white w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-cyan-500";

#[component]
pub fn RegisterPage() -> impl IntoView {
    let vm = RegisterViewModel::new();
    view! { <RegisterView vm=vm /> }
}

#[component]
pub fn RegisterView(vm: RegisterViewModel) -> impl IntoView {
    let pending = vm.pending();
    view! {
        <div class="min-h-screen flex bg-white">
            <div class="hidden lg:flex lg:w-1/2 bg-cover bg-center bg-slate-800"></div>
            <div class="w-full lg:w-1/2 flex flex-col justify-center px-4 sm:px-6 lg:px-8">
                <div class="w-full max-w-md mx-auto">
                    <h2 class="mt-6 text-center text-2xl font-extrabold text-indigo-950">
                        "Register"
                    </h2>
                    <div class="mt-8 bg-white py-8 px-4 shadow sm:rounded-lg sm:px-10">
                        <form
                            class="space-y-4"
                            on:submit=move |ev| {
                                ev.prevent_default();
                                vm.submit();
                            }
                        >
                            {RegisterField::ALL
                                .into_iter()
                                .map(|field| {
                                    let value = vm.form.signal(field);
                                    view! {
                                        <input
                                            class=INPUT_CLASS
                                            type=field.input_type()
                                            name=field.name()
                                            placeholder=field.placeholder()
                                            prop:value=move || value.get()
                                            on:input=move |ev| value.set(event_target_value(&ev))
                                        />
                                    }
                                })
                                .collect_view()}
                            <InlineErrorMessage error=vm.error.into() />
                            <Button button_type="submit" loading=pending>
                                "Register"
                            </Button>
                        </form>
                    </div>
                </div>
            </div>
            <SuccessToast message=vm.toast.into() />
        </div>
    }
}

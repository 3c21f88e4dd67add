use leptos::*;
use leptos_router::use_navigate;

use crate::api::{ApiClient, AuthState};
use crate::pages::auth::{AuthCard, AuthField, AuthFormState, SubmitButton};

#[component]
pub fn Login() -> impl IntoView {
    let auth_state = expect_context::<AuthState>();
    let navigate = use_navigate();
    let form = AuthFormState::new();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match form.values().login_request() {
            Ok(request) => form.submit(
                ApiClient::login(request),
                "Invalid email or password.",
                auth_state.clone(),
                navigate.clone(),
            ),
            Err(message) => form.error.set(Some(message)),
        }
    };

    view! {
        <AuthCard
            title="Welcome Back"
            subtitle="Sign in to manage draws and results"
            error=form.error
            footer_prompt="Don't have an account? "
            footer_href="/signup"
            footer_link="Sign up"
        >
            <form on:submit=on_submit>
                <AuthField
                    label="Email"
                    id="email"
                    input_type="email"
                    value=form.email
                    placeholder="you@example.com"
                    required=true
                />
                <AuthField
                    label="Password"
                    id="password"
                    input_type="password"
                    value=form.password
                    placeholder="Enter your password"
                    required=true
                />
                <SubmitButton loading=form.loading label="Sign In" busy_label="Signing in..." />
            </form>
        </AuthCard>
    }
}

use leptos::*;
use leptos_router::use_navigate;

use crate::api::{ApiClient, AuthState};
use crate::pages::auth::{AuthCard, AuthField, AuthFormState, SubmitButton};

#[component]
pub fn Signup() -> impl IntoView {
    let auth_state = expect_context::<AuthState>();
    let navigate = use_navigate();
    let form = AuthFormState::new();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match form.values().signup_request() {
            Ok(request) => form.submit(
                ApiClient::signup(request),
                "Could not create account.",
                auth_state.clone(),
                navigate.clone(),
            ),
            Err(message) => form.error.set(Some(message)),
        }
    };

    view! {
        <AuthCard
            title="Create Account"
            subtitle="Join to publish draw results"
            error=form.error
            footer_prompt="Already have an account? "
            footer_href="/login"
            footer_link="Sign in"
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
                <AuthField label="Phone (optional)" id="phone" input_type="tel" value=form.phone />
                <AuthField
                    label="Password"
                    id="password"
                    input_type="password"
                    value=form.password
                    required=true
                />
                <AuthField
                    label="Confirm Password"
                    id="confirm-password"
                    input_type="password"
                    value=form.confirm_password
                    required=true
                />
                <SubmitButton
                    loading=form.loading
                    label="Sign Up"
                    busy_label="Creating account..."
                />
            </form>
        </AuthCard>
    }
}

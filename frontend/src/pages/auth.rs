//! Form model, submit flow and markup shared by the login and signup screens.

use std::future::Future;

use leptos::*;
use leptos_router::NavigateOptions;
use shared::{AuthToken, ClientError, LoginRequest, SignupRequest};

use crate::api::AuthState;
use crate::utils::non_empty;

/// Where a successful sign-in or sign-up lands.
pub const AFTER_LOGIN: &str = "/admin/games";

const MIN_PASSWORD_LEN: usize = 8;

/// Raw values typed into an auth form. Login ignores the signup-only fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: String,
}

impl AuthForm {
    fn email(&self) -> Result<String, String> {
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err("Enter a valid email address.".to_string());
        }
        Ok(email.to_string())
    }

    pub fn login_request(&self) -> Result<LoginRequest, String> {
        let email = self.email()?;
        if self.password.is_empty() {
            return Err("Enter your password.".to_string());
        }
        Ok(LoginRequest {
            email,
            password: self.password.clone(),
        })
    }

    pub fn signup_request(&self) -> Result<SignupRequest, String> {
        let email = self.email()?;
        if self.password != self.confirm_password {
            return Err("Passwords do not match".to_string());
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            ));
        }
        Ok(SignupRequest {
            email,
            password: self.password.clone(),
            phone: non_empty(self.phone.clone()),
        })
    }
}

/// Signals behind one auth form.
#[derive(Clone, Copy)]
pub struct AuthFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub confirm_password: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
}

impl AuthFormState {
    pub fn new() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            confirm_password: create_rw_signal(String::new()),
            phone: create_rw_signal(String::new()),
            error: create_rw_signal(None),
            loading: create_rw_signal(false),
        }
    }

    pub fn values(&self) -> AuthForm {
        AuthForm {
            email: self.email.get_untracked(),
            password: self.password.get_untracked(),
            confirm_password: self.confirm_password.get_untracked(),
            phone: self.phone.get_untracked(),
        }
    }

    /// Await an auth call. On success the token is stored and the admin area
    /// opens; on failure the form shows the backend detail or `fallback`.
    pub fn submit<Fut, N>(&self, call: Fut, fallback: &'static str, auth: AuthState, navigate: N)
    where
        Fut: Future<Output = Result<AuthToken, ClientError>> + 'static,
        N: Fn(&str, NavigateOptions) + 'static,
    {
        let error = self.error;
        let loading = self.loading;

        loading.set(true);
        error.set(None);

        wasm_bindgen_futures::spawn_local(async move {
            match call.await {
                Ok(token) => {
                    log::info!("authenticated");
                    auth.set_auth(token);
                    navigate(AFTER_LOGIN, Default::default());
                }
                Err(e) => {
                    log::warn!("authentication failed: {}", e);
                    error.set(Some(e.user_message(fallback)));
                    loading.set(false);
                }
            }
        });
    }
}

#[component]
pub fn AuthCard(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    error: RwSignal<Option<String>>,
    #[prop(into)] footer_prompt: String,
    #[prop(into)] footer_href: String,
    #[prop(into)] footer_link: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="auth-container">
            <div class="auth-card card">
                <div class="auth-header">
                    <h1 class="auth-title">{title}</h1>
                    <p class="auth-subtitle">{subtitle}</p>
                </div>

                {move || error.get().map(|e| view! {
                    <div class="alert alert-error">{e}</div>
                })}

                {children()}

                <p style="text-align: center; margin-top: 1rem; color: var(--text-muted);">
                    {footer_prompt}
                    <a href=footer_href style="color: var(--primary-color);">{footer_link}</a>
                </p>
            </div>
        </div>
    }
}

#[component]
pub fn AuthField(
    #[prop(into)] label: String,
    #[prop(into)] id: String,
    #[prop(into)] input_type: String,
    value: RwSignal<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label class="form-label" for=id.clone()>{label}</label>
            <input
                type=input_type
                id=id
                class="form-input"
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn SubmitButton(
    loading: RwSignal<bool>,
    #[prop(into)] label: String,
    #[prop(into)] busy_label: String,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class="btn btn-primary"
            style="width: 100%; margin-top: 1rem;"
            disabled=move || loading.get()
        >
            {move || if loading.get() { busy_label.clone() } else { label.clone() }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(email: &str, password: &str, confirm: &str) -> AuthForm {
        AuthForm {
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
            phone: String::new(),
        }
    }

    #[test]
    fn test_login_request_trims_email() {
        let request = form("  admin@rand.example ", "secret", "").login_request().unwrap();
        assert_eq!(request.email, "admin@rand.example");
        assert_eq!(request.password, "secret");
    }

    #[test]
    fn test_login_requires_email_and_password() {
        assert_eq!(
            form("admin", "secret", "").login_request().unwrap_err(),
            "Enter a valid email address."
        );
        assert_eq!(
            form("admin@rand.example", "", "").login_request().unwrap_err(),
            "Enter your password."
        );
    }

    #[test]
    fn test_signup_password_mismatch() {
        assert_eq!(
            form("a@b.c", "secret123", "secret124").signup_request().unwrap_err(),
            "Passwords do not match"
        );
    }

    #[test]
    fn test_signup_password_too_short() {
        assert_eq!(
            form("a@b.c", "short", "short").signup_request().unwrap_err(),
            "Password must be at least 8 characters"
        );
    }

    #[test]
    fn test_signup_blank_phone_is_omitted() {
        let request = form("a@b.c", "longenough", "longenough").signup_request().unwrap();
        assert_eq!(request.phone, None);

        let mut with_phone = form("a@b.c", "longenough", "longenough");
        with_phone.phone = " +233 20 000 0000 ".to_string();
        assert_eq!(
            with_phone.signup_request().unwrap().phone.as_deref(),
            Some("+233 20 000 0000")
        );
    }

    #[test]
    fn test_login_lands_on_admin() {
        assert!(AFTER_LOGIN.starts_with("/admin/"));
    }
}

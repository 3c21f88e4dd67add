use std::fmt;

use gloo_net::http::{Request, RequestBuilder};
use gloo_storage::{LocalStorage, Storage};
use leptos::*;
use serde::{de::DeserializeOwned, Serialize};
use shared::{
    ApiResult, AuthToken, ClientError, CreateDrawRequest, CreateGameRequest, CreateResultRequest,
    Draw, Game, GoogleLoginRequest, LoginRequest, ReviewResultRequest, SignupRequest,
};

use crate::config::Config;

/// Exchanges a Google ID token; must not carry our own token.
const GOOGLE_AUTH_PATH: &str = "/auth/google";

#[derive(Clone)]
pub struct AuthState {
    pub token: RwSignal<Option<String>>,
}

impl AuthState {
    pub fn new() -> Self {
        let stored_token: Option<String> = LocalStorage::get(token_key()).ok();

        Self {
            token: create_rw_signal(stored_token),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.get().is_some()
    }

    pub fn set_auth(&self, response: AuthToken) {
        LocalStorage::set(token_key(), &response.access_token).ok();
        self.token.set(Some(response.access_token));
    }

    pub fn logout(&self) {
        LocalStorage::delete(token_key());
        self.token.set(None);
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}

fn token_key() -> String {
    Config::from_env().token_key
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

pub(crate) fn should_attach_token(path: &str) -> bool {
    !path.starts_with(GOOGLE_AUTH_PATH)
}

/// Decode a success body. An empty body (204) decodes as JSON `null`.
pub(crate) fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T, ClientError> {
    let text = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str(text).map_err(|e| ClientError::Decode(e.to_string()))
}

pub struct ApiClient;

impl ApiClient {
    fn get_token() -> Option<String> {
        LocalStorage::get(token_key()).ok()
    }

    fn builder(method: HttpMethod, url: &str) -> RequestBuilder {
        match method {
            HttpMethod::Get => Request::get(url),
            HttpMethod::Post => Request::post(url),
            HttpMethod::Patch => Request::patch(url),
            HttpMethod::Delete => Request::delete(url),
        }
    }

    async fn request<T: DeserializeOwned>(
        method: HttpMethod,
        path: &str,
        body: Option<impl Serialize>,
    ) -> Result<T, ClientError> {
        let url = format!("{}{}", Config::from_env().api_base, path);

        let mut request = Self::builder(method, &url).header("Content-Type", "application/json");

        if should_attach_token(path) {
            if let Some(token) = Self::get_token() {
                request = request.header("Authorization", &format!("Bearer {}", token));
            }
        }

        log::debug!("{} {}", method, path);

        let sent = if let Some(body) = body {
            request
                .json(&body)
                .map_err(|e| ClientError::Encode(e.to_string()))?
                .send()
                .await
        } else {
            request.send().await
        };
        let response = sent.map_err(|e| {
            log::warn!("{} {} failed: {}", method, path, e);
            ClientError::Network(e.to_string())
        })?;

        let text = response
            .text()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if !response.ok() {
            let error = ClientError::from_response(response.status(), &response.status_text(), &text);
            log::warn!("{} {} returned {}: {}", method, path, response.status(), error);
            return Err(error);
        }

        decode_body(&text)
    }

    // Game endpoints
    pub async fn get_games() -> Result<Vec<Game>, ClientError> {
        Self::request::<Vec<Game>>(HttpMethod::Get, "/games/", None::<()>).await
    }

    pub async fn create_game(request: CreateGameRequest) -> Result<Game, ClientError> {
        Self::request(HttpMethod::Post, "/games/", Some(request)).await
    }

    pub async fn delete_game(game_id: i64) -> Result<(), ClientError> {
        Self::request::<()>(HttpMethod::Delete, &format!("/games/{}", game_id), None::<()>).await
    }

    // Draw endpoints
    pub async fn get_draws() -> Result<Vec<Draw>, ClientError> {
        Self::request::<Vec<Draw>>(HttpMethod::Get, "/draws", None::<()>).await
    }

    pub async fn create_draw(request: CreateDrawRequest) -> Result<Draw, ClientError> {
        Self::request(HttpMethod::Post, "/draws", Some(request)).await
    }

    // Result endpoints
    pub async fn get_results() -> Result<Vec<ApiResult>, ClientError> {
        Self::request::<Vec<ApiResult>>(HttpMethod::Get, "/results", None::<()>).await
    }

    pub async fn create_result(request: CreateResultRequest) -> Result<ApiResult, ClientError> {
        Self::request(HttpMethod::Post, "/results", Some(request)).await
    }

    pub async fn review_result(
        result_id: i64,
        request: ReviewResultRequest,
    ) -> Result<ApiResult, ClientError> {
        Self::request(
            HttpMethod::Patch,
            &format!("/results/{}/verify", result_id),
            Some(request),
        )
        .await
    }

    // Auth endpoints
    pub async fn signup(request: SignupRequest) -> Result<AuthToken, ClientError> {
        Self::request(HttpMethod::Post, "/auth/signup", Some(request)).await
    }

    pub async fn login(request: LoginRequest) -> Result<AuthToken, ClientError> {
        Self::request(HttpMethod::Post, "/auth/login", Some(request)).await
    }

    pub async fn google_login(request: GoogleLoginRequest) -> Result<AuthToken, ClientError> {
        Self::request(HttpMethod::Post, GOOGLE_AUTH_PATH, Some(request)).await
    }
}

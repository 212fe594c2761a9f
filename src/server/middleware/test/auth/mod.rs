use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::AuthGuard,
    model::user::{Role, User},
    service::auth::token::TokenService,
};
use test_utils::{builder::TestBuilder, factory};

mod require;

fn tokens() -> TokenService {
    TokenService::new("guard-test-secret".to_string(), 3600)
}

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
    );
    headers
}

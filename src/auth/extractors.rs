use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;
use uuid::Uuid;

use crate::{auth::session::SESSION_COOKIE, error::ApiError, state::AppState, users::repo::User};

/// Resolves the session cookie to its owning user.
///
/// Missing, unparsable and unknown tokens all reject with the same 401 so a
/// caller cannot tell which case it hit. Read-only, safe on every request.
pub struct CurrentUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(SESSION_COOKIE)
            .and_then(|c| c.value().parse::<Uuid>().ok())
            .ok_or(ApiError::Unauthenticated)?;

        let user = User::find_by_session(&state.db, token)
            .await?
            .ok_or(ApiError::Unauthenticated)?;

        Ok(CurrentUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, Request};

    fn parts_with_cookie(cookie: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/meals");
        if let Some(c) = cookie {
            builder = builder.header(header::COOKIE, c);
        }
        let (parts, ()) = builder.body(()).unwrap().into_parts();
        parts
    }

    #[tokio::test]
    async fn rejects_request_without_cookie_before_any_query() {
        let state = AppState::fake();
        let mut parts = parts_with_cookie(None);
        let err = CurrentUser::from_request_parts(&mut parts, &state)
            .await
            .err()
            .expect("must reject");
        assert!(matches!(err, ApiError::Unauthenticated));
    }

    #[tokio::test]
    async fn rejects_malformed_token_before_any_query() {
        let state = AppState::fake();
        let mut parts = parts_with_cookie(Some("sessionId=not-a-uuid"));
        let err = CurrentUser::from_request_parts(&mut parts, &state)
            .await
            .err()
            .expect("must reject");
        assert!(matches!(err, ApiError::Unauthenticated));
    }

    #[tokio::test]
    async fn ignores_unrelated_cookies() {
        let state = AppState::fake();
        let mut parts = parts_with_cookie(Some("theme=dark; other=1"));
        let err = CurrentUser::from_request_parts(&mut parts, &state)
            .await
            .err()
            .expect("must reject");
        assert!(matches!(err, ApiError::Unauthenticated));
    }
}

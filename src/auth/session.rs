use axum_extra::extract::cookie::Cookie;
use time::Duration;
use uuid::Uuid;

/// Cookie carrying the session token, the sole credential for meal routes.
pub const SESSION_COOKIE: &str = "sessionId";

const SESSION_TTL: Duration = Duration::days(7);

/// Build the session cookie set on registration: path `/`, 7-day max-age.
pub fn session_cookie(token: Uuid) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token.to_string()))
        .path("/")
        .max_age(SESSION_TTL)
        .build()
}

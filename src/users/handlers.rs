use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use axum_extra::extract::{cookie::CookieJar, WithRejection};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::{session_cookie, SESSION_COOKIE},
    error::{ApiError, ApiResult},
    state::AppState,
    users::{
        dto::{CreateUserBody, UpdateUserBody, UserResponse, UsersResponse},
        repo::User,
    },
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route(
            "/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
}

/// Registration issues the session cookie when the request carries none. An
/// existing token is reused, so a browser can register a second profile
/// under the same session.
#[instrument(skip(state, jar, body))]
pub async fn create_user(
    State(state): State<AppState>,
    jar: CookieJar,
    WithRejection(Json(body), _): WithRejection<Json<CreateUserBody>, ApiError>,
) -> ApiResult<(CookieJar, StatusCode)> {
    let existing = jar
        .get(SESSION_COOKIE)
        .and_then(|c| c.value().parse::<Uuid>().ok());

    let (session_id, jar) = match existing {
        Some(token) => (token, jar),
        None => {
            let token = Uuid::new_v4();
            (token, jar.add(session_cookie(token)))
        }
    };

    let user = User::create(&state.db, &body.name, &body.email, &body.password, session_id)
        .await?;
    info!(user_id = %user.id, "user registered");

    Ok((jar, StatusCode::CREATED))
}

#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<UsersResponse>> {
    let users = User::list(&state.db).await?;
    Ok(Json(UsersResponse { users }))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<Uuid>, ApiError>,
) -> ApiResult<Json<UserResponse>> {
    let user = User::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("User"))?;
    Ok(Json(UserResponse { user }))
}

#[instrument(skip(state, body))]
pub async fn update_user(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<Uuid>, ApiError>,
    WithRejection(Json(body), _): WithRejection<Json<UpdateUserBody>, ApiError>,
) -> ApiResult<StatusCode> {
    let affected = User::update(&state.db, id, &body.name, &body.email, &body.password).await?;
    if affected == 0 {
        return Err(ApiError::NotFound("User"));
    }
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<Uuid>, ApiError>,
) -> ApiResult<StatusCode> {
    let affected = User::delete(&state.db, id).await?;
    if affected == 0 {
        return Err(ApiError::NotFound("User"));
    }
    info!(user_id = %id, "user deleted");
    Ok(StatusCode::NO_CONTENT)
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use axum_extra::extract::WithRejection;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::CurrentUser,
    error::{ApiError, ApiResult},
    meals::{
        dto::{CreateMealBody, MealResponse, MealsResponse, MetricsResponse, UpdateMealBody},
        repo::Meal,
    },
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_meals).post(create_meal))
        .route("/metrics", get(get_metrics))
        .route(
            "/:meal_id",
            get(get_meal).put(update_meal).delete(delete_meal),
        )
}

#[instrument(skip(state, user, body), fields(user_id = %user.0.id))]
pub async fn create_meal(
    State(state): State<AppState>,
    user: CurrentUser,
    WithRejection(Json(body), _): WithRejection<Json<CreateMealBody>, ApiError>,
) -> ApiResult<StatusCode> {
    let meal = Meal::create(
        &state.db,
        user.0.id,
        &body.name,
        &body.description,
        body.is_on_diet,
    )
    .await?;
    info!(meal_id = %meal.id, "meal created");
    Ok(StatusCode::CREATED)
}

#[instrument(skip(state, user), fields(user_id = %user.0.id))]
pub async fn list_meals(
    State(state): State<AppState>,
    user: CurrentUser,
) -> ApiResult<Json<MealsResponse>> {
    let meals = Meal::list_by_user(&state.db, user.0.id).await?;
    Ok(Json(MealsResponse { meals }))
}

#[instrument(skip(state, user), fields(user_id = %user.0.id))]
pub async fn get_meal(
    State(state): State<AppState>,
    user: CurrentUser,
    WithRejection(Path(meal_id), _): WithRejection<Path<Uuid>, ApiError>,
) -> ApiResult<Json<MealResponse>> {
    let meal = Meal::find_by_id(&state.db, user.0.id, meal_id)
        .await?
        .ok_or(ApiError::NotFound("Meal"))?;
    Ok(Json(MealResponse { meal }))
}

#[instrument(skip(state, user, body), fields(user_id = %user.0.id))]
pub async fn update_meal(
    State(state): State<AppState>,
    user: CurrentUser,
    WithRejection(Path(meal_id), _): WithRejection<Path<Uuid>, ApiError>,
    WithRejection(Json(body), _): WithRejection<Json<UpdateMealBody>, ApiError>,
) -> ApiResult<StatusCode> {
    let affected = Meal::update(
        &state.db,
        user.0.id,
        meal_id,
        &body.name,
        &body.description,
        body.is_on_diet,
    )
    .await?;
    if affected == 0 {
        return Err(ApiError::NotFound("Meal"));
    }
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state, user), fields(user_id = %user.0.id))]
pub async fn delete_meal(
    State(state): State<AppState>,
    user: CurrentUser,
    WithRejection(Path(meal_id), _): WithRejection<Path<Uuid>, ApiError>,
) -> ApiResult<StatusCode> {
    let affected = Meal::delete(&state.db, user.0.id, meal_id).await?;
    if affected == 0 {
        return Err(ApiError::NotFound("Meal"));
    }
    info!(meal_id = %meal_id, "meal deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state, user), fields(user_id = %user.0.id))]
pub async fn get_metrics(
    State(state): State<AppState>,
    user: CurrentUser,
) -> ApiResult<Json<MetricsResponse>> {
    let metrics = Meal::metrics(&state.db, user.0.id).await?;
    Ok(Json(metrics.into()))
}

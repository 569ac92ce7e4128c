use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_token::create_token;
use super::handlers::create_workout::create_workout;
use super::handlers::delete_workout::delete_workout;
use super::handlers::get_workout::get_workout;
use super::handlers::health::health;
use super::handlers::list_workouts::list_my_workouts;
use super::handlers::list_workouts::list_workouts;
use super::handlers::register_user::register_user;
use super::handlers::revoke_tokens::revoke_tokens;
use super::handlers::update_profile::update_profile;
use super::handlers::update_workout::update_workout;
use super::middleware::authenticate;
use super::middleware::require_user;
use crate::domain::token::ports::TokenServicePort;
use crate::domain::user::ports::UserServicePort;
use crate::domain::workout::ports::WorkoutServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub token_service: Arc<dyn TokenServicePort>,
    pub workout_service: Arc<dyn WorkoutServicePort>,
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    token_service: Arc<dyn TokenServicePort>,
    workout_service: Arc<dyn WorkoutServicePort>,
) -> Router {
    let state = AppState {
        user_service,
        token_service,
        workout_service,
    };

    let public_routes = Router::new()
        .route("/health", get(health))
        .route("/users", post(register_user))
        .route("/tokens/authentication", post(create_token))
        .route("/workouts", get(list_workouts))
        .route("/workouts/:id", get(get_workout));

    let protected_routes = Router::new()
        .route("/users/me", patch(update_profile))
        .route("/tokens/authentication", delete(revoke_tokens))
        .route("/workouts/mine", get(list_my_workouts))
        .route("/workouts", post(create_workout))
        .route("/workouts/:id", put(update_workout))
        .route("/workouts/:id", delete(delete_workout))
        .route_layer(middleware::from_fn(require_user));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            // Headers are left out: they carry bearer tokens.
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(middleware::from_fn_with_state(state.clone(), authenticate))
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

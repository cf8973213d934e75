use axum::{
    body::Body,
    extract::Request,
    http::{header::{AUTHORIZATION, CONTENT_TYPE}, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{amenity, auth, health, place, review, user};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tower_cookies::CookieManagerLayer;
use tracing::{info_span, Span, error, info, warn};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.config.cors_allowed_origins);

    Router::new()
        .route("/health", get(health::health_check))

        // Auth
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/logout", post(auth::logout))
        .route("/api/v1/auth/protected", get(auth::protected))

        // Users
        .route("/api/v1/users", get(user::list_users).post(user::create_user))
        .route("/api/v1/users/{user_id}", get(user::get_user).put(user::update_user).delete(user::delete_user))

        // Amenities
        .route("/api/v1/amenities", get(amenity::list_amenities).post(amenity::create_amenity))
        .route("/api/v1/amenities/{amenity_id}", get(amenity::get_amenity).put(amenity::update_amenity).delete(amenity::delete_amenity))

        // Places
        .route("/api/v1/places", get(place::list_places).post(place::create_place))
        .route("/api/v1/places/{place_id}", get(place::get_place).put(place::update_place).delete(place::delete_place))
        .route("/api/v1/places/{place_id}/reviews", get(place::list_place_reviews))

        // Reviews
        .route("/api/v1/reviews", get(review::list_reviews).post(review::create_review))
        .route("/api/v1/reviews/{review_id}", get(review::get_review).put(review::update_review).delete(review::delete_review))
        .route("/api/v1/reviews/places/{place_id}/reviews", get(place::list_place_reviews))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CookieManagerLayer::new())
        .layer(cors)
        .with_state(state)
}

/// An empty origin list allows any origin, without credentials.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .max_age(Duration::from_secs(60 * 60));

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    if parsed.is_empty() {
        base.allow_origin(AllowOrigin::any())
    } else {
        base.allow_origin(AllowOrigin::list(parsed)).allow_credentials(true)
    }
}

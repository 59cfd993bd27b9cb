mod members;
mod trainers;
mod classes;
mod attendance;

#[cfg(test)]
pub(crate) mod test_helpers;

use crate::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Every REST endpoint of the service
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Members
        .route("/members", get(members::list_members).post(members::create_member))
        .route("/members/active", get(members::list_active_members))
        .route(
            "/members/:member_id",
            get(members::get_member)
                .patch(members::update_member)
                .delete(members::delete_member),
        )
        // Trainers
        .route("/trainers", get(trainers::list_trainers).post(trainers::create_trainer))
        .route(
            "/trainers/:trainer_id",
            get(trainers::get_trainer)
                .patch(trainers::update_trainer)
                .delete(trainers::delete_trainer),
        )
        .route(
            "/trainers/:trainer_id/classes/:class_id/members",
            get(attendance::trainer_class_member_count),
        )
        // Classes
        .route("/classes", get(classes::list_classes).post(classes::create_class))
        .route("/classes/date", get(classes::most_popular_day))
        .route(
            "/classes/:class_id",
            get(classes::get_class)
                .patch(classes::update_class)
                .delete(classes::delete_class),
        )
        .route("/classes/:class_id/trainer", post(classes::assign_trainer))
        .route("/classes/:class_id/:trainer_id", delete(classes::delete_class_trainer))
        // Attendance
        .route(
            "/classes/:class_id/members",
            get(attendance::list_class_members).post(attendance::add_member_to_class),
        )
        .route(
            "/classes/:class_id/members/:member_id",
            delete(attendance::remove_member_from_class),
        )
        .route("/classes/:class_id/memberslength", get(attendance::class_member_count))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

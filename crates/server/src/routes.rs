pub mod teachers;
pub mod courses;
pub mod students;

use axum::{
    routing::{get, put},
    Json, Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use serde::Deserialize;
use service::pagination::Pagination;

use crate::{openapi::ApiDoc, state::AppState};

/// `skip`/`limit` query string shared by every list endpoint.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Rows to skip, default 0
    pub skip: Option<u64>,
    /// Page size, default 10
    pub limit: Option<u64>,
}

impl From<ListQuery> for Pagination {
    fn from(q: ListQuery) -> Self {
        let d = Pagination::default();
        Pagination::new(q.skip.unwrap_or(d.skip), q.limit.unwrap_or(d.limit))
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router. Collection routes answer both with and
/// without the trailing slash.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let teachers = Router::new()
        .route("/teachers/", get(teachers::list).post(teachers::create))
        .route("/teachers", get(teachers::list).post(teachers::create))
        .route(
            "/teachers/:id",
            get(teachers::get).put(teachers::update).delete(teachers::delete),
        )
        .route("/teachers/:id/courses/", get(teachers::list_courses).post(teachers::create_course))
        .route("/teachers/:id/courses", get(teachers::list_courses).post(teachers::create_course));

    let courses = Router::new()
        .route("/courses/", get(courses::list).post(courses::create))
        .route("/courses", get(courses::list).post(courses::create))
        .route(
            "/courses/:id",
            get(courses::get).put(courses::update).delete(courses::delete),
        )
        .route("/courses/:id/teacher", get(courses::read_teacher))
        .route("/courses/:id/students", get(courses::read_students))
        .route(
            "/courses/:id/:student_id",
            put(courses::add_student).delete(courses::remove_student),
        );

    let students = Router::new()
        .route("/students/", get(students::list).post(students::create))
        .route("/students", get(students::list).post(students::create))
        .route(
            "/students/:id",
            get(students::get).put(students::update).delete(students::delete),
        )
        .route("/students/:id/courses", get(students::read_courses));

    Router::new()
        .route("/health", get(health))
        .merge(teachers)
        .merge(courses)
        .merge(students)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        // one INFO span per request
                        .make_span_with(
                            DefaultMakeSpan::new()
                                .level(Level::INFO)
                                .include_headers(false),
                        )
                        .on_request(DefaultOnRequest::new().level(Level::INFO))
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .include_headers(false),
                        )
                        // 5xx
                        .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
                )
                .layer(cors),
        )
}

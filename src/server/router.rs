use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{analysis, api, auth, invitation, lesson, seat},
    server::{config::Config, controller, state::AppState},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        controller::auth::register,
        controller::auth::login,
        controller::auth::logout,
        controller::auth::me,
        controller::lesson::create_lesson,
        controller::lesson::get_lessons,
        controller::lesson::get_lesson,
        controller::invitation::create_invitation,
        controller::invitation::get_invitation,
        controller::invitation::claim_invitation,
        controller::seat::get_identity_form,
        controller::seat::update_identity_form,
        controller::seat::confirm_seat,
        controller::analysis::record_analysis,
        controller::analysis::get_analysis,
        controller::analysis::get_student_analyses,
    ),
    components(schemas(
        api::ErrorDto,
        api::DomainErrorDto,
        api::FieldErrorDto,
        api::ValidationErrorDto,
        auth::RegisterDto,
        auth::LoginDto,
        auth::InstructorDto,
        lesson::CreateLessonDto,
        lesson::LessonDto,
        lesson::LessonListItemDto,
        seat::SeatDto,
        seat::IdentityFormDto,
        seat::UpdateIdentityFormDto,
        invitation::CreateInvitationDto,
        invitation::InvitationDto,
        invitation::ClaimDto,
        invitation::ClaimResultDto,
        analysis::RecordAnalysisDto,
        analysis::AnalysisDto,
    )),
    tags(
        (name = "auth", description = "Instructor accounts and sessions"),
        (name = "lesson", description = "Lessons and their seats"),
        (name = "invitation", description = "Seat invitations and claims"),
        (name = "seat", description = "Identity forms and confirmation"),
        (name = "analysis", description = "Lesson analyses and record sharing"),
    )
)]
struct ApiDoc;

/// Builds the API route table.
///
/// The public claim endpoint sits behind a per-client-IP rate limit so a
/// misbehaving client cannot brute-force codes or hammer the claim
/// transaction; everything else shares the plain router. Swagger UI is
/// mounted under /swagger-ui.
pub fn router(config: &Config) -> Router<AppState> {
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(config.claim_rate_limit_per_second)
            .burst_size(config.claim_rate_limit_burst)
            .finish()
            .expect("invalid claim rate limit configuration"),
    );

    let claim_routes = Router::new()
        .route(
            "/api/invitations/claim",
            post(controller::invitation::claim_invitation),
        )
        .layer(GovernorLayer::new(governor_config));

    Router::new()
        .route("/api/auth/register", post(controller::auth::register))
        .route("/api/auth/login", post(controller::auth::login))
        .route("/api/auth/logout", post(controller::auth::logout))
        .route("/api/auth/me", get(controller::auth::me))
        .route(
            "/api/lessons",
            post(controller::lesson::create_lesson).get(controller::lesson::get_lessons),
        )
        .route("/api/lessons/{lesson_id}", get(controller::lesson::get_lesson))
        .route(
            "/api/seats/{seat_id}/invitations",
            post(controller::invitation::create_invitation),
        )
        .route(
            "/api/invitations/{code}",
            get(controller::invitation::get_invitation),
        )
        .route(
            "/api/seats/{seat_id}/identity-form",
            get(controller::seat::get_identity_form)
                .patch(controller::seat::update_identity_form),
        )
        .route(
            "/api/seats/{seat_id}/confirm",
            post(controller::seat::confirm_seat),
        )
        .route(
            "/api/seats/{seat_id}/analysis",
            post(controller::analysis::record_analysis).get(controller::analysis::get_analysis),
        )
        .route(
            "/api/students/{student_id}/analyses",
            get(controller::analysis::get_student_analyses),
        )
        .merge(claim_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

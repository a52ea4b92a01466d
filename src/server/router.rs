use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, UpdatedCountDto},
        assistant::{AssistantIntroDto, AssistantMessageDto, AssistantReplyDto, AssistantTopicDto},
        auth::LoginDto,
        country::{CountryDto, CountryListDto},
        notification::{NotificationDto, NotificationKind, NotificationTone, UnreadCountDto},
        payment::{CreatePaymentDto, PaymentDto, PaymentStatus, UpdatePaymentStatusDto},
        site::{
            AssignAgentDto, CreateSiteDto, ResearcherSummaryDto, SiteActivityDto, SiteDto,
            SiteStatus, UpdateSiteStatusDto,
        },
        stats::{AdminSummaryDto, HealthDto, StatsDto},
        user::{
            CreateUserDto, RegisterVisitorDto, UpdateUserStatusDto, UserDto, UserRole, UserStatus,
        },
    },
    server::{
        controller::{
            assistant, auth, country, health, notification, payment, researcher, site, stats,
            user,
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Visit Portal API",
        version = "0.1.0",
        description = "Tourism portal backend for sites, guides, visitors and payments"
    ),
    tags(
        (name = "auth", description = "Session login and logout"),
        (name = "user", description = "User management and visitor registration"),
        (name = "site", description = "Site catalogue, submissions and approvals"),
        (name = "researcher", description = "Researcher dashboard"),
        (name = "notification", description = "Dashboard notifications"),
        (name = "payment", description = "Visit payments"),
        (name = "stats", description = "Public counters and admin summary"),
        (name = "country", description = "Dial codes for the phone input"),
        (name = "assistant", description = "Scripted visitor assistant"),
        (name = "health", description = "Liveness probe")
    ),
    paths(
        auth::login,
        auth::logout,
        auth::get_user,
        user::create_user,
        user::get_users,
        user::get_user_by_id,
        user::update_user_status,
        user::delete_user,
        user::register,
        site::get_sites,
        site::get_site,
        site::create_site,
        site::get_site_requests,
        site::get_all_sites,
        site::update_site_status,
        site::assign_site_agent,
        site::delete_site,
        site::submit_site,
        site::get_my_sites,
        researcher::get_summary,
        researcher::get_user_summary,
        notification::get_admin_notifications,
        notification::get_notifications,
        notification::mark_notification_read,
        notification::mark_all_notifications_read,
        notification::get_unread_count,
        payment::create_payment,
        payment::get_my_payments,
        payment::get_payments,
        payment::update_payment_status,
        stats::get_stats,
        stats::get_admin_summary,
        country::get_countries,
        assistant::get_topics,
        assistant::send_message,
        health::health,
    ),
    components(schemas(
        ErrorDto,
        UpdatedCountDto,
        LoginDto,
        UserDto,
        UserRole,
        UserStatus,
        CreateUserDto,
        RegisterVisitorDto,
        UpdateUserStatusDto,
        SiteDto,
        SiteStatus,
        CreateSiteDto,
        UpdateSiteStatusDto,
        AssignAgentDto,
        SiteActivityDto,
        ResearcherSummaryDto,
        NotificationDto,
        NotificationKind,
        NotificationTone,
        UnreadCountDto,
        PaymentDto,
        PaymentStatus,
        CreatePaymentDto,
        UpdatePaymentStatusDto,
        StatsDto,
        AdminSummaryDto,
        HealthDto,
        CountryDto,
        CountryListDto,
        AssistantIntroDto,
        AssistantTopicDto,
        AssistantMessageDto,
        AssistantReplyDto,
    ))
)]
pub struct ApiDoc;

/// Builds the API router with Swagger UI at `/api-docs`.
///
/// The session layer is added by the caller so tests can supply their own store.
pub fn router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/api/health", get(health::health))
        .route("/api/stats", get(stats::get_stats))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route("/api/users/register", post(user::register))
        .route(
            "/api/admin/users",
            get(user::get_users).post(user::create_user),
        )
        .route(
            "/api/admin/users/{user_id}",
            get(user::get_user_by_id).delete(user::delete_user),
        )
        .route(
            "/api/admin/users/{user_id}/status",
            put(user::update_user_status),
        )
        .route("/api/sites", get(site::get_sites))
        .route("/api/sites/{site_id}", get(site::get_site))
        .route(
            "/api/admin/sites",
            get(site::get_all_sites).post(site::create_site),
        )
        .route("/api/admin/sites/{site_id}", delete(site::delete_site))
        .route(
            "/api/admin/sites/{site_id}/status",
            put(site::update_site_status),
        )
        .route(
            "/api/admin/sites/{site_id}/agent",
            put(site::assign_site_agent),
        )
        .route("/api/admin/requests", get(site::get_site_requests))
        .route("/api/admin/summary", get(stats::get_admin_summary))
        .route(
            "/api/admin/notifications",
            get(notification::get_admin_notifications),
        )
        .route("/api/admin/payments", get(payment::get_payments))
        .route(
            "/api/admin/payments/{payment_id}/status",
            put(payment::update_payment_status),
        )
        .route(
            "/api/researcher/sites",
            get(site::get_my_sites).post(site::submit_site),
        )
        .route("/api/researcher/summary", get(researcher::get_summary))
        .route(
            "/api/researcher/{user_id}/summary",
            get(researcher::get_user_summary),
        )
        .route("/api/notifications", get(notification::get_notifications))
        .route(
            "/api/notifications/read-all",
            put(notification::mark_all_notifications_read),
        )
        .route(
            "/api/notifications/unread-count",
            get(notification::get_unread_count),
        )
        .route(
            "/api/notifications/{notification_id}/read",
            put(notification::mark_notification_read),
        )
        .route(
            "/api/payments",
            get(payment::get_my_payments).post(payment::create_payment),
        )
        .route("/api/countries", get(country::get_countries))
        .route("/api/assistant/topics", get(assistant::get_topics))
        .route("/api/assistant/messages", post(assistant::send_message))
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

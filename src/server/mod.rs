pub mod access;
pub mod admin;
pub mod error;
pub mod login;
pub mod mentor;
pub mod profile;
pub mod request;
pub mod session;

use crate::server::error::WebError;
use actix_session::config::PersistentSession;
use actix_session::storage::CookieSessionStore;
use actix_session::SessionMiddleware;
use actix_web::cookie::time::Duration;
use actix_web::cookie::{Key, SameSite};
use actix_web::http::header;
use actix_web::{web, HttpResponse};
use chrono::{DateTime, NaiveDateTime, Utc};

/// Session identity travels in a signed, HTTP-only cookie kept for a week.
pub fn session_middleware(key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .session_lifecycle(PersistentSession::default().session_ttl(Duration::days(7)))
        .cookie_same_site(SameSite::Lax)
        .cookie_path("/".into())
        .cookie_name(String::from("mentorship-session"))
        .cookie_content_security(actix_session::config::CookieContentSecurity::Private)
        .cookie_http_only(true)
        .build()
}

/// All routes; shared between main and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/auth/login", web::post().to(login::login))
        .route("/auth/register", web::post().to(login::register))
        .route("/auth/logout", web::post().to(login::logout))
        .route("/dashboard", web::get().to(profile::dashboard))
        .route("/profile", web::get().to(profile::profile))
        .route("/profile/edit", web::get().to(profile::profile))
        .route("/profile/edit", web::post().to(profile::profile_edit))
        .route("/mentors", web::get().to(mentor::mentor_list))
        .route("/mentors", web::post().to(mentor::request_mentorship))
        .route("/requests", web::get().to(request::request_list))
        .route("/requests", web::post().to(request::request_update))
        .route("/sessions", web::get().to(session::session_list))
        .route("/sessions", web::post().to(session::session_post))
        .route("/availability", web::get().to(session::availability_list))
        .route("/availability", web::post().to(session::availability_add))
        .route("/admin/users", web::get().to(admin::user_list))
        .route("/admin/users", web::post().to(admin::user_role_update))
        .route("/admin/matches", web::get().to(admin::match_list))
        .route("/admin/sessions", web::get().to(admin::session_list));
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Multi-valued form fields travel as one comma-separated string.
pub fn split_multi(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .map(|part| part.to_string())
        .collect()
}

/// Accepts RFC 3339 or the datetime-local form flavor.
pub fn parse_time(raw: &str) -> Result<DateTime<Utc>, WebError> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Ok(naive.and_utc());
        }
    }
    Err(WebError::Validation("Invalid input".to_string()))
}

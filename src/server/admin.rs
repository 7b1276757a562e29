use crate::data_model::mentorship_request::MentorshipRequest;
use crate::data_model::session::Session;
use crate::data_model::user::{Role, UserView};
use crate::server::access::require_role;
use crate::server::error::WebError;
use crate::state::state::State;
use actix_identity::Identity;
use actix_web::{web, HttpResponse};
use log::info;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct UsersPage {
    user: UserView,
    users: Vec<UserView>,
}

pub async fn user_list(
    user: Option<Identity>,
    data: web::Data<State>,
) -> Result<HttpResponse, WebError> {
    let srv = data.server.lock().await;
    let me = require_role(&srv, &user, &[Role::Admin]).await?;

    let users = srv.rw.get_users().await?;
    Ok(HttpResponse::Ok().json(UsersPage {
        user: me.view(),
        users: users.iter().map(|usr| usr.view()).collect(),
    }))
}

#[derive(Deserialize)]
pub struct RoleUpdateForm {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub role: String,
}

/// The only way a role changes after registration.
pub async fn user_role_update(
    user: Option<Identity>,
    data: web::Data<State>,
    form: web::Form<RoleUpdateForm>,
) -> Result<HttpResponse, WebError> {
    let mut srv = data.server.lock().await;
    require_role(&srv, &user, &[Role::Admin]).await?;

    let role = form
        .role
        .parse::<Role>()
        .map_err(|_| WebError::Validation("Invalid role".to_string()))?;
    let id = form
        .user_id
        .parse::<u64>()
        .map_err(|_| WebError::Validation("Invalid role".to_string()))?;

    let mut usr = srv
        .rw
        .get_user(id)
        .await?
        .ok_or(WebError::NotFound("User"))?;
    usr.role = role;
    srv.rw.put_user(&usr).await?;
    info!("User {} is now {}", id, role);
    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}

#[derive(Serialize)]
struct MatchesPage {
    user: UserView,
    matches: Vec<MentorshipRequest>,
}

/// A "match" is nothing more than an accepted mentorship request.
pub async fn match_list(
    user: Option<Identity>,
    data: web::Data<State>,
) -> Result<HttpResponse, WebError> {
    let srv = data.server.lock().await;
    let me = require_role(&srv, &user, &[Role::Admin]).await?;

    let matches = srv.rw.get_accepted_requests().await?;
    Ok(HttpResponse::Ok().json(MatchesPage {
        user: me.view(),
        matches,
    }))
}

#[derive(Serialize)]
struct AllSessionsPage {
    user: UserView,
    sessions: Vec<Session>,
}

pub async fn session_list(
    user: Option<Identity>,
    data: web::Data<State>,
) -> Result<HttpResponse, WebError> {
    let srv = data.server.lock().await;
    let me = require_role(&srv, &user, &[Role::Admin]).await?;

    let sessions = srv.rw.get_sessions().await?;
    Ok(HttpResponse::Ok().json(AllSessionsPage {
        user: me.view(),
        sessions,
    }))
}

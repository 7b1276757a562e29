use crate::data_model::mentorship_request::MentorshipRequest;
use crate::data_model::user::{Role, UserView};
use crate::server::access::require_role;
use crate::server::error::WebError;
use crate::server::split_multi;
use crate::state::state::State;
use actix_identity::Identity;
use actix_web::{web, HttpResponse};
use log::info;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct MentorQuery {
    #[serde(default)]
    pub skills: String,
}

#[derive(Serialize)]
struct MentorsPage {
    user: UserView,
    mentors: Vec<UserView>,
}

/// Mentor search: role equality plus skill-set membership, nothing more.
pub async fn mentor_list(
    user: Option<Identity>,
    data: web::Data<State>,
    query: web::Query<MentorQuery>,
) -> Result<HttpResponse, WebError> {
    let srv = data.server.lock().await;
    let me = require_role(&srv, &user, &[Role::Mentee]).await?;

    let skills = split_multi(&query.skills);
    let mentors = srv.rw.get_mentors_by_skills(&skills).await?;
    Ok(HttpResponse::Ok().json(MentorsPage {
        user: me.view(),
        mentors: mentors.iter().map(|usr| usr.view()).collect(),
    }))
}

#[derive(Deserialize)]
pub struct MentorshipForm {
    #[serde(default)]
    pub mentor_id: String,
}

pub async fn request_mentorship(
    user: Option<Identity>,
    data: web::Data<State>,
    form: web::Form<MentorshipForm>,
) -> Result<HttpResponse, WebError> {
    let mut srv = data.server.lock().await;
    let me = require_role(&srv, &user, &[Role::Mentee]).await?;

    let mentor_id = form.mentor_id.parse::<u64>().map_err(|_| {
        WebError::Validation("Mentee and mentor IDs are required".to_string())
    })?;

    let id = srv
        .rw
        .put_request(&MentorshipRequest::new(me.id, mentor_id))
        .await?;
    info!(
        "Mentee {} requested mentorship from {} (request {})",
        me.id, mentor_id, id
    );
    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true, "id": id })))
}

use crate::data_model::mentorship_request::{MentorshipRequest, RequestStatus};
use crate::data_model::user::{Role, UserView};
use crate::notif::email::send_email;
use crate::server::access::require_role;
use crate::server::error::WebError;
use crate::state::state::State;
use actix_identity::Identity;
use actix_web::{web, HttpResponse};
use log::info;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct RequestsPage {
    user: UserView,
    requests: Vec<MentorshipRequest>,
}

/// Mentees see requests they sent, mentors the ones addressed to them.
pub async fn request_list(
    user: Option<Identity>,
    data: web::Data<State>,
) -> Result<HttpResponse, WebError> {
    let srv = data.server.lock().await;
    let me = require_role(&srv, &user, &[Role::Mentee, Role::Mentor]).await?;

    let requests = match me.role {
        Role::Mentee => srv.rw.get_requests_by_mentee(me.id).await?,
        _ => srv.rw.get_requests_by_mentor(me.id).await?,
    };
    Ok(HttpResponse::Ok().json(RequestsPage {
        user: me.view(),
        requests,
    }))
}

#[derive(Deserialize)]
pub struct RequestUpdateForm {
    #[serde(default)]
    pub request_id: String,
    #[serde(default)]
    pub status: String,
}

pub async fn request_update(
    user: Option<Identity>,
    data: web::Data<State>,
    form: web::Form<RequestUpdateForm>,
) -> Result<HttpResponse, WebError> {
    let mut srv = data.server.lock().await;
    require_role(&srv, &user, &[Role::Mentor]).await?;

    let status = form
        .status
        .parse::<RequestStatus>()
        .ok()
        .filter(|st| *st != RequestStatus::Pending)
        .ok_or_else(|| WebError::Validation("Invalid status".to_string()))?;
    let id = form
        .request_id
        .parse::<u64>()
        .map_err(|_| WebError::Validation("Invalid status".to_string()))?;

    let mut req: MentorshipRequest = srv
        .rw
        .get_request(id)
        .await?
        .ok_or(WebError::NotFound("Request"))?;
    req.status = status;
    srv.rw.put_request(&req).await?;
    info!("Request {} moved to {}", id, status);

    if status == RequestStatus::Accepted {
        notify_mentee(&mut srv, &req).await;
    }
    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}

async fn notify_mentee(srv: &mut crate::state::data::Data, req: &MentorshipRequest) {
    let mentee = match srv.rw.get_user(req.mentee_id).await {
        Ok(Some(usr)) => usr,
        _ => return,
    };
    send_email(
        &srv.args,
        &mentee.email,
        "Your mentorship request was accepted",
        "A mentor accepted your mentorship request. Log in to book a session.",
    )
    .await;
}

use crate::data_model::availability::Availability;
use crate::data_model::session::{Feedback, Session};
use crate::data_model::user::{Role, User, UserView};
use crate::notif::email::send_email;
use crate::server::access::require_role;
use crate::server::error::WebError;
use crate::server::parse_time;
use crate::state::data::Data;
use crate::state::state::State;
use actix_identity::Identity;
use actix_web::{web, HttpResponse};
use log::info;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct SessionsPage {
    user: UserView,
    sessions: Vec<Session>,
}

pub async fn session_list(
    user: Option<Identity>,
    data: web::Data<State>,
) -> Result<HttpResponse, WebError> {
    let srv = data.server.lock().await;
    let me = require_role(&srv, &user, &[Role::Mentee, Role::Mentor]).await?;

    let sessions = match me.role {
        Role::Mentee => srv.rw.get_sessions_by_mentee(me.id).await?,
        _ => srv.rw.get_sessions_by_mentor(me.id).await?,
    };
    Ok(HttpResponse::Ok().json(SessionsPage {
        user: me.view(),
        sessions,
    }))
}

/// One form, two branches: `action=create` books a session, `action=feedback`
/// attaches the one-shot rating/comment.
#[derive(Deserialize)]
pub struct SessionForm {
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub mentor_id: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub comment: String,
}

pub async fn session_post(
    user: Option<Identity>,
    data: web::Data<State>,
    form: web::Form<SessionForm>,
) -> Result<HttpResponse, WebError> {
    let mut srv = data.server.lock().await;
    let me = require_role(&srv, &user, &[Role::Mentee]).await?;

    match form.action.as_str() {
        "create" => session_create(&mut srv, &me, &form).await,
        "feedback" => session_feedback(&mut srv, &form).await,
        _ => Err(WebError::Validation("Invalid input".to_string())),
    }
}

async fn session_create(
    srv: &mut Data,
    me: &User,
    form: &SessionForm,
) -> Result<HttpResponse, WebError> {
    let mentor_id = form
        .mentor_id
        .parse::<u64>()
        .map_err(|_| WebError::Validation("Invalid input".to_string()))?;
    let start_time = parse_time(&form.start_time)?;
    let end_time = parse_time(&form.end_time)?;

    // Existence of any availability row is all that is checked; the
    // requested window is not matched against it.
    if !srv.rw.has_availability(mentor_id).await? {
        return Err(WebError::Validation(
            "Mentor has no availability set".to_string(),
        ));
    }

    let id = srv
        .rw
        .put_session(&Session::new(mentor_id, me.id, start_time, end_time))
        .await?;
    info!("Mentee {} booked session {} with mentor {}", me.id, id, mentor_id);

    notify_mentor(srv, mentor_id).await;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true, "id": id })))
}

async fn session_feedback(srv: &mut Data, form: &SessionForm) -> Result<HttpResponse, WebError> {
    let rating = form
        .rating
        .parse::<u8>()
        .ok()
        .filter(|rt| (1..=5).contains(rt))
        .ok_or_else(|| WebError::Validation("Invalid rating".to_string()))?;
    let id = form
        .session_id
        .parse::<u64>()
        .map_err(|_| WebError::Validation("Invalid input".to_string()))?;

    let mut sess = srv
        .rw
        .get_session(id)
        .await?
        .ok_or(WebError::NotFound("Session"))?;
    if sess.feedback.is_some() {
        return Err(WebError::Validation(
            "Feedback already submitted".to_string(),
        ));
    }

    sess.feedback = Some(Feedback {
        rating,
        comment: form.comment.clone(),
    });
    srv.rw.put_session(&sess).await?;
    info!("Feedback for session {}: {} stars", id, rating);
    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}

async fn notify_mentor(srv: &mut Data, mentor_id: u64) {
    let mentor = match srv.rw.get_user(mentor_id).await {
        Ok(Some(usr)) => usr,
        _ => return,
    };
    send_email(
        &srv.args,
        &mentor.email,
        "New session booked",
        "A mentee booked a session with you. Log in to see the schedule.",
    )
    .await;
}

#[derive(Serialize)]
struct AvailabilityPage {
    user: UserView,
    availability: Vec<Availability>,
}

pub async fn availability_list(
    user: Option<Identity>,
    data: web::Data<State>,
) -> Result<HttpResponse, WebError> {
    let srv = data.server.lock().await;
    let me = require_role(&srv, &user, &[Role::Mentor]).await?;

    let availability = srv.rw.get_availability_by_mentor(me.id).await?;
    Ok(HttpResponse::Ok().json(AvailabilityPage {
        user: me.view(),
        availability,
    }))
}

#[derive(Deserialize)]
pub struct AvailabilityForm {
    #[serde(default)]
    pub day_of_week: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
}

pub async fn availability_add(
    user: Option<Identity>,
    data: web::Data<State>,
    form: web::Form<AvailabilityForm>,
) -> Result<HttpResponse, WebError> {
    let mut srv = data.server.lock().await;
    let me = require_role(&srv, &user, &[Role::Mentor]).await?;

    if form.day_of_week.is_empty() || form.start_time.is_empty() || form.end_time.is_empty() {
        return Err(WebError::Validation("All fields are required".to_string()));
    }

    let id = srv
        .rw
        .put_availability(&Availability::new(
            me.id,
            &form.day_of_week,
            &form.start_time,
            &form.end_time,
        ))
        .await?;
    info!("Mentor {} added availability {}", me.id, id);
    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true, "id": id })))
}

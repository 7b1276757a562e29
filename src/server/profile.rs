use crate::data_model::user::UserView;
use crate::server::access::require_user;
use crate::server::error::WebError;
use crate::server::{redirect, split_multi};
use crate::state::state::State;
use actix_identity::Identity;
use actix_web::{web, HttpResponse};
use log::info;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct ProfilePage {
    user: UserView,
}

pub async fn dashboard(
    user: Option<Identity>,
    data: web::Data<State>,
) -> Result<HttpResponse, WebError> {
    let srv = data.server.lock().await;
    let usr = require_user(&srv, &user).await?;
    Ok(HttpResponse::Ok().json(ProfilePage { user: usr.view() }))
}

pub async fn profile(
    user: Option<Identity>,
    data: web::Data<State>,
) -> Result<HttpResponse, WebError> {
    let srv = data.server.lock().await;
    let usr = require_user(&srv, &user).await?;
    Ok(HttpResponse::Ok().json(ProfilePage { user: usr.view() }))
}

#[derive(Deserialize)]
pub struct ProfileForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub goals: String,
}

pub async fn profile_edit(
    user: Option<Identity>,
    data: web::Data<State>,
    form: web::Form<ProfileForm>,
) -> Result<HttpResponse, WebError> {
    let mut srv = data.server.lock().await;
    let mut usr = require_user(&srv, &user).await?;

    if form.name.trim().chars().count() < 2 {
        return Err(WebError::Validation(
            "Name must be at least 2 characters".to_string(),
        ));
    }

    usr.name = form.name.trim().to_string();
    usr.bio = form.bio.clone();
    usr.skills = split_multi(&form.skills);
    usr.goals = split_multi(&form.goals);
    srv.rw.put_user(&usr).await?;
    info!("Updated profile of user {}", usr.id);

    Ok(redirect("/dashboard"))
}

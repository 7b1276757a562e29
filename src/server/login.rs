use crate::data_model::user::{Role, User};
use crate::server::access::require_role;
use crate::server::error::WebError;
use crate::server::redirect;
use crate::state::state::State;
use crate::util::crypto::{get_password_hash, verify_password};
use actix_identity::Identity;
use actix_web::{web, HttpMessage, HttpRequest, HttpResponse};
use log::{error, info};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

pub async fn login(
    _user: Option<Identity>,
    data: web::Data<State>,
    form: web::Form<LoginForm>,
    req: HttpRequest,
) -> Result<HttpResponse, WebError> {
    let srv = data.server.lock().await;
    let usr = srv
        .rw
        .get_user_by_email(&form.email)
        .await?
        .filter(|usr| verify_password(&form.password, &usr.password))
        .ok_or_else(|| WebError::Validation("Invalid credentials".to_string()))?;

    start_session(&req, usr.id)?;
    info!("Logged in as {}", usr.email);
    Ok(redirect("/dashboard"))
}

#[derive(Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub role: String,
}

/// Admin-only. The freshly created account is logged in and sent to the
/// profile editor, mirroring the signup flow.
pub async fn register(
    user: Option<Identity>,
    data: web::Data<State>,
    form: web::Form<RegisterForm>,
    req: HttpRequest,
) -> Result<HttpResponse, WebError> {
    let mut srv = data.server.lock().await;
    require_role(&srv, &user, &[Role::Admin]).await?;

    let role = form
        .role
        .parse::<Role>()
        .map_err(|_| WebError::Validation("Invalid input".to_string()))?;
    if form.email.is_empty() || form.password.is_empty() {
        return Err(WebError::Validation("Invalid input".to_string()));
    }
    if srv.rw.get_user_by_email(&form.email).await?.is_some() {
        return Err(WebError::Validation("Email already registered".to_string()));
    }

    let usr = User::new(&form.email, &get_password_hash(&form.password), role);
    let id = srv.rw.put_user(&usr).await?;
    info!("Registered {} with role {} as user {}", usr.email, role, id);

    start_session(&req, id)?;
    Ok(redirect("/profile/edit"))
}

pub async fn logout(user: Option<Identity>) -> Result<HttpResponse, WebError> {
    let user = user.ok_or(WebError::Unauthenticated)?;
    user.logout();
    info!("Logged out");
    Ok(redirect("/auth/login"))
}

fn start_session(req: &HttpRequest, id: u64) -> Result<(), WebError> {
    Identity::login(&req.extensions(), id.to_string()).map_err(|err| {
        error!("Could not establish session: {}", err);
        WebError::Validation("Login failed".to_string())
    })?;
    Ok(())
}

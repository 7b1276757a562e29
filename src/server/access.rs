use crate::data_model::user::{Role, User};
use crate::server::error::WebError;
use crate::state::data::Data;
use actix_identity::Identity;
use log::info;

/// Resolve the request's identity to a user record and enforce role
/// membership. The identity payload is the user id as a decimal string;
/// anything that does not resolve to a stored user is Unauthenticated,
/// a resolved user outside the accepted role set is Forbidden. Looked up
/// fresh on every call.
pub async fn require_role(
    srv: &Data,
    user: &Option<Identity>,
    roles: &[Role],
) -> Result<User, WebError> {
    let ident = user.as_ref().ok_or(WebError::Unauthenticated)?;
    let id = ident
        .id()
        .ok()
        .and_then(|raw| raw.parse::<u64>().ok())
        .ok_or(WebError::Unauthenticated)?;

    let usr = srv
        .rw
        .get_user(id)
        .await?
        .ok_or(WebError::Unauthenticated)?;

    if !role_allowed(&usr, roles) {
        info!("User {} has role {}, needs one of {:?}", id, usr.role, roles);
        return Err(WebError::Forbidden);
    }
    Ok(usr)
}

pub fn role_allowed(usr: &User, roles: &[Role]) -> bool {
    roles.contains(&usr.role)
}

/// Any authenticated user, regardless of role.
pub async fn require_user(srv: &Data, user: &Option<Identity>) -> Result<User, WebError> {
    require_role(srv, user, &[Role::Admin, Role::Mentor, Role::Mentee]).await
}

use crate::state::store::StoreError;
use actix_web::http::{header, StatusCode};
use actix_web::HttpResponse;
use log::error;
use serde::Serialize;
use thiserror::Error;

/// Request failure taxonomy. Unauthenticated callers are sent back to the
/// login page; everything else re-renders with an inline error string.
#[derive(Error, Debug)]
pub enum WebError {
    #[error("not logged in")]
    Unauthenticated,
    #[error("access denied")]
    Forbidden,
    #[error("{0}")]
    Validation(String),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl actix_web::ResponseError for WebError {
    fn status_code(&self) -> StatusCode {
        match self {
            WebError::Unauthenticated => StatusCode::SEE_OTHER,
            WebError::Forbidden => StatusCode::FORBIDDEN,
            WebError::Validation(_) | WebError::NotFound(_) => StatusCode::BAD_REQUEST,
            WebError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            WebError::Unauthenticated => HttpResponse::SeeOther()
                .insert_header((header::LOCATION, "/auth/login"))
                .finish(),
            WebError::Store(err) => {
                error!("Store failure: {}", err);
                HttpResponse::InternalServerError().json(ErrorBody {
                    error: "Internal error".to_string(),
                })
            }
            other => HttpResponse::build(self.status_code()).json(ErrorBody {
                error: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn unauthenticated_redirects_to_login() {
        let resp = WebError::Unauthenticated.error_response();
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/auth/login"
        );
    }

    #[test]
    fn validation_carries_the_message() {
        let resp = WebError::Validation("Invalid rating".to_string()).error_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn forbidden_is_403() {
        assert_eq!(WebError::Forbidden.status_code(), StatusCode::FORBIDDEN);
    }
}

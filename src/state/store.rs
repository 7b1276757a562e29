use crate::data_model::availability::Availability;
use crate::data_model::mentorship_request::MentorshipRequest;
use crate::data_model::session::Session;
use crate::data_model::user::User;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("store is not connected")]
    NotConnected,
}

/// Entity repositories over the document store. Every operation is one
/// direct read or write; put assigns the next free id when the record
/// carries the unset id and answers the effective id.
#[async_trait]
pub trait Store: Send {
    async fn connect(&mut self) -> Result<(), StoreError>;

    async fn get_user(&self, id: u64) -> Result<Option<User>, StoreError>;
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
    async fn get_users(&self) -> Result<Vec<User>, StoreError>;
    /// Mentors whose skill set intersects `skills`; all mentors when the
    /// filter is empty.
    async fn get_mentors_by_skills(&self, skills: &[String]) -> Result<Vec<User>, StoreError>;
    async fn put_user(&mut self, usr: &User) -> Result<u64, StoreError>;

    async fn get_request(&self, id: u64) -> Result<Option<MentorshipRequest>, StoreError>;
    async fn get_requests_by_mentee(
        &self,
        mentee_id: u64,
    ) -> Result<Vec<MentorshipRequest>, StoreError>;
    async fn get_requests_by_mentor(
        &self,
        mentor_id: u64,
    ) -> Result<Vec<MentorshipRequest>, StoreError>;
    /// Accepted requests only; this is what the admin "matches" page shows.
    async fn get_accepted_requests(&self) -> Result<Vec<MentorshipRequest>, StoreError>;
    async fn put_request(&mut self, req: &MentorshipRequest) -> Result<u64, StoreError>;

    async fn get_session(&self, id: u64) -> Result<Option<Session>, StoreError>;
    async fn get_sessions_by_mentor(&self, mentor_id: u64) -> Result<Vec<Session>, StoreError>;
    async fn get_sessions_by_mentee(&self, mentee_id: u64) -> Result<Vec<Session>, StoreError>;
    async fn get_sessions(&self) -> Result<Vec<Session>, StoreError>;
    async fn put_session(&mut self, sess: &Session) -> Result<u64, StoreError>;

    async fn get_availability_by_mentor(
        &self,
        mentor_id: u64,
    ) -> Result<Vec<Availability>, StoreError>;
    /// Whether any availability record exists for the mentor. Session
    /// booking checks only this, not the requested window.
    async fn has_availability(&self, mentor_id: u64) -> Result<bool, StoreError>;
    async fn put_availability(&mut self, slot: &Availability) -> Result<u64, StoreError>;
}

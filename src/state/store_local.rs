use crate::data_model::availability::Availability;
use crate::data_model::mentorship_request::{MentorshipRequest, RequestStatus};
use crate::data_model::session::Session;
use crate::data_model::user::{Role, User};
use crate::data_model::Entity;
use crate::state::collection::Collection;
use crate::state::store::{Store, StoreError};
use async_trait::async_trait;
use log::info;
use std::fs;

/// File-backed store used when no database URL is configured. Collections
/// live fully in memory and each write lands in the collection tree under
/// the data path.
#[derive(Debug, Clone)]
pub struct StoreLocal {
    path: String,
    users: Collection<User>,
    requests: Collection<MentorshipRequest>,
    sessions: Collection<Session>,
    availability: Collection<Availability>,
}

impl StoreLocal {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            users: Collection::new(User::COLLECTION),
            requests: Collection::new(MentorshipRequest::COLLECTION),
            sessions: Collection::new(Session::COLLECTION),
            availability: Collection::new(Availability::COLLECTION),
        }
    }
}

#[async_trait]
impl Store for StoreLocal {
    async fn connect(&mut self) -> Result<(), StoreError> {
        fs::create_dir_all(self.path.clone() + "/collection")?;
        self.users.read_fs(&self.path)?;
        self.requests.read_fs(&self.path)?;
        self.sessions.read_fs(&self.path)?;
        self.availability.read_fs(&self.path)?;
        info!("Local store at {} loaded", self.path);
        Ok(())
    }

    async fn get_user(&self, id: u64) -> Result<Option<User>, StoreError> {
        Ok(self.users.get(id))
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.filter(|usr| usr.email == email).into_iter().next())
    }

    async fn get_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.users.get_all())
    }

    async fn get_mentors_by_skills(&self, skills: &[String]) -> Result<Vec<User>, StoreError> {
        Ok(self.users.filter(|usr| {
            usr.role == Role::Mentor
                && (skills.is_empty() || usr.skills.iter().any(|sk| skills.contains(sk)))
        }))
    }

    async fn put_user(&mut self, usr: &User) -> Result<u64, StoreError> {
        let id = self.users.set(usr.clone());
        self.users.write_item(&self.path, id)?;
        Ok(id)
    }

    async fn get_request(&self, id: u64) -> Result<Option<MentorshipRequest>, StoreError> {
        Ok(self.requests.get(id))
    }

    async fn get_requests_by_mentee(
        &self,
        mentee_id: u64,
    ) -> Result<Vec<MentorshipRequest>, StoreError> {
        Ok(self.requests.filter(|req| req.mentee_id == mentee_id))
    }

    async fn get_requests_by_mentor(
        &self,
        mentor_id: u64,
    ) -> Result<Vec<MentorshipRequest>, StoreError> {
        Ok(self.requests.filter(|req| req.mentor_id == mentor_id))
    }

    async fn get_accepted_requests(&self) -> Result<Vec<MentorshipRequest>, StoreError> {
        Ok(self
            .requests
            .filter(|req| req.status == RequestStatus::Accepted))
    }

    async fn put_request(&mut self, req: &MentorshipRequest) -> Result<u64, StoreError> {
        let id = self.requests.set(req.clone());
        self.requests.write_item(&self.path, id)?;
        Ok(id)
    }

    async fn get_session(&self, id: u64) -> Result<Option<Session>, StoreError> {
        Ok(self.sessions.get(id))
    }

    async fn get_sessions_by_mentor(&self, mentor_id: u64) -> Result<Vec<Session>, StoreError> {
        Ok(self.sessions.filter(|sess| sess.mentor_id == mentor_id))
    }

    async fn get_sessions_by_mentee(&self, mentee_id: u64) -> Result<Vec<Session>, StoreError> {
        Ok(self.sessions.filter(|sess| sess.mentee_id == mentee_id))
    }

    async fn get_sessions(&self) -> Result<Vec<Session>, StoreError> {
        Ok(self.sessions.get_all())
    }

    async fn put_session(&mut self, sess: &Session) -> Result<u64, StoreError> {
        let id = self.sessions.set(sess.clone());
        self.sessions.write_item(&self.path, id)?;
        Ok(id)
    }

    async fn get_availability_by_mentor(
        &self,
        mentor_id: u64,
    ) -> Result<Vec<Availability>, StoreError> {
        Ok(self.availability.filter(|slot| slot.mentor_id == mentor_id))
    }

    async fn has_availability(&self, mentor_id: u64) -> Result<bool, StoreError> {
        Ok(!self
            .availability
            .filter(|slot| slot.mentor_id == mentor_id)
            .is_empty())
    }

    async fn put_availability(&mut self, slot: &Availability) -> Result<u64, StoreError> {
        let id = self.availability.set(slot.clone());
        self.availability.write_item(&self.path, id)?;
        Ok(id)
    }
}

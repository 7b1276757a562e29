use crate::data_model::{unset_id, Entity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Serialize, Clone, PartialEq)]
pub struct Feedback {
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
}

/// A booked mentor/mentee meeting. Feedback is attached at most once,
/// by the mentee, after the session exists.
#[derive(Deserialize, Debug, Serialize, Clone, PartialEq)]
pub struct Session {
    #[serde(default = "unset_id")]
    pub id: u64,
    pub mentor_id: u64,
    pub mentee_id: u64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub feedback: Option<Feedback>,
}

impl Session {
    pub fn new(
        mentor_id: u64,
        mentee_id: u64,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Self {
        Self {
            id: unset_id(),
            mentor_id,
            mentee_id,
            start_time,
            end_time,
            feedback: None,
        }
    }
}

impl Entity for Session {
    const COLLECTION: &'static str = "session";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

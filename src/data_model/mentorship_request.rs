use crate::data_model::{unset_id, Entity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Deserialize, Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    #[serde(rename = "PENDING")]
    Pending,
    #[serde(rename = "ACCEPTED")]
    Accepted,
    #[serde(rename = "REJECTED")]
    Rejected,
}

impl FromStr for RequestStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(RequestStatus::Pending),
            "ACCEPTED" => Ok(RequestStatus::Accepted),
            "REJECTED" => Ok(RequestStatus::Rejected),
            _ => Err(()),
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestStatus::Pending => write!(f, "PENDING"),
            RequestStatus::Accepted => write!(f, "ACCEPTED"),
            RequestStatus::Rejected => write!(f, "REJECTED"),
        }
    }
}

/// A mentee's proposal to a mentor. Always created Pending; a mentor moves
/// it to Accepted or Rejected later.
#[derive(Deserialize, Debug, Serialize, Clone, PartialEq)]
pub struct MentorshipRequest {
    #[serde(default = "unset_id")]
    pub id: u64,
    pub mentee_id: u64,
    pub mentor_id: u64,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
}

impl MentorshipRequest {
    pub fn new(mentee_id: u64, mentor_id: u64) -> Self {
        Self {
            id: unset_id(),
            mentee_id,
            mentor_id,
            status: RequestStatus::Pending,
            created_at: Utc::now(),
        }
    }
}

impl Entity for MentorshipRequest {
    const COLLECTION: &'static str = "mentorship_request";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

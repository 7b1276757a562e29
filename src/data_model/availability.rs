use crate::data_model::{unset_id, Entity};
use serde::{Deserialize, Serialize};

/// A mentor-declared recurring weekly time window. Day and times are kept
/// as the opaque strings the form submitted; overlap is not validated.
#[derive(Deserialize, Debug, Serialize, Clone, PartialEq)]
pub struct Availability {
    #[serde(default = "unset_id")]
    pub id: u64,
    pub mentor_id: u64,
    pub day_of_week: String,
    pub start_time: String,
    pub end_time: String,
}

impl Availability {
    pub fn new(mentor_id: u64, day_of_week: &str, start_time: &str, end_time: &str) -> Self {
        Self {
            id: unset_id(),
            mentor_id,
            day_of_week: day_of_week.to_string(),
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
        }
    }
}

impl Entity for Availability {
    const COLLECTION: &'static str = "availability";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

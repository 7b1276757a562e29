use crate::data_model::{unset_id, Entity};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed role set; anything else coming from a form is a validation error.
#[derive(Deserialize, Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    #[serde(rename = "ADMIN")]
    Admin,
    #[serde(rename = "MENTOR")]
    Mentor,
    #[serde(rename = "MENTEE")]
    Mentee,
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Role::Admin),
            "MENTOR" => Ok(Role::Mentor),
            "MENTEE" => Ok(Role::Mentee),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "ADMIN"),
            Role::Mentor => write!(f, "MENTOR"),
            Role::Mentee => write!(f, "MENTEE"),
        }
    }
}

#[derive(Deserialize, Debug, Serialize, Clone, PartialEq)]
pub struct User {
    #[serde(default = "unset_id")]
    pub id: u64,
    pub email: String,
    /// Argon2 PHC string, never the plain password.
    pub password: String,
    pub role: Role,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub goals: Vec<String>,
}

impl User {
    pub fn new(email: &str, password_hash: &str, role: Role) -> Self {
        Self {
            id: unset_id(),
            email: email.to_string(),
            password: password_hash.to_string(),
            role,
            name: String::new(),
            bio: String::new(),
            skills: Vec::new(),
            goals: Vec::new(),
        }
    }

    pub fn view(&self) -> UserView {
        UserView {
            id: self.id,
            email: self.email.clone(),
            role: self.role,
            name: self.name.clone(),
            bio: self.bio.clone(),
            skills: self.skills.clone(),
            goals: self.goals.clone(),
        }
    }
}

impl Entity for User {
    const COLLECTION: &'static str = "user";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

/// User record as rendered to pages; the password hash stays server-side.
#[derive(Deserialize, Debug, Serialize, Clone, PartialEq)]
pub struct UserView {
    pub id: u64,
    pub email: String,
    pub role: Role,
    pub name: String,
    pub bio: String,
    pub skills: Vec<String>,
    pub goals: Vec<String>,
}

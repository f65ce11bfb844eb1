//! # User Model
//!
//! The user record and the validated creation request.
//! Records are held in memory only; nothing survives a restart.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::{DirectoryError, DirectoryResult};

/// Required fields, in the order validation reports them
const REQUIRED_FIELDS: [&str; 5] = ["name", "surname", "email", "company", "jobTitle"];

/// A stored user record
///
/// All string fields are held trimmed of surrounding whitespace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique user identifier, assigned once at creation
    pub id: Uuid,

    /// First name
    pub name: String,

    /// Family name
    pub surname: String,

    /// Email address (unique across the store)
    pub email: String,

    /// Employer
    pub company: String,

    /// Role at the employer
    #[serde(rename = "jobTitle")]
    pub job_title: String,
}

/// User creation request body
///
/// Every field is optional at the wire level so that an absent field and an
/// empty field fail validation the same way.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    #[serde(rename = "jobTitle")]
    pub job_title: Option<String>,
}

impl CreateUserRequest {
    /// Validate the request and build a record with a fresh identifier.
    ///
    /// Fields are checked in the fixed order `name, surname, email, company,
    /// jobTitle`; the first absent or whitespace-only field fails the whole
    /// request. All fields are stored trimmed.
    pub fn into_user(self) -> DirectoryResult<User> {
        let fields = [
            &self.name,
            &self.surname,
            &self.email,
            &self.company,
            &self.job_title,
        ];

        for (value, wire_name) in fields.iter().zip(REQUIRED_FIELDS) {
            match value {
                Some(v) if !v.trim().is_empty() => {}
                _ => return Err(DirectoryError::MissingField(wire_name)),
            }
        }

        let trimmed = |v: Option<String>| v.unwrap_or_default().trim().to_string();

        Ok(User {
            id: Uuid::new_v4(),
            name: trimmed(self.name),
            surname: trimmed(self.surname),
            email: trimmed(self.email),
            company: trimmed(self.company),
            job_title: trimmed(self.job_title),
        })
    }

    /// The email exactly as the client submitted it, if present.
    ///
    /// Duplicate detection compares the submitted value verbatim, not the
    /// trimmed value that ends up stored.
    pub fn submitted_email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::user::errors::EmailError;
use crate::domain::user::errors::PasswordError;
use crate::domain::user::errors::UsernameError;

/// Registered user.
///
/// `password_hash` is a PHC string and never leaves the service.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub email: EmailAddress,
    pub password_hash: String,
    pub bio: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Identity attached to an in-flight request.
///
/// Anonymous is a kind of principal, not a missing one: requests without
/// credentials are normal and reach public routes as `Anonymous`.
#[derive(Debug, Clone, PartialEq)]
pub enum Principal {
    Authenticated(User),
    Anonymous,
}

impl Principal {
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Principal::Anonymous)
    }

    /// Authenticated user, if any.
    pub fn user(&self) -> Option<&User> {
        match self {
            Principal::Authenticated(user) => Some(user),
            Principal::Anonymous => None,
        }
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.user().map(|user| user.id)
    }
}

/// User identifier, assigned by the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Username value type
///
/// Ensures username is non-empty and at most 50 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    const MAX_LENGTH: usize = 50;

    /// Create a new valid username.
    ///
    /// # Errors
    /// * `Empty` - Username is empty
    /// * `TooLong` - Username longer than 50 characters
    pub fn new(username: String) -> Result<Self, UsernameError> {
        let length = username.chars().count();
        if username.trim().is_empty() {
            Err(UsernameError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(username))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Accepts `local@domain.tld`: RFC 5322 syntax plus a dotted domain whose last
/// label is at least two letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `Empty` - Email is empty
    /// * `InvalidFormat` - Email is not of the `local@domain.tld` shape
    pub fn new(email: String) -> Result<Self, EmailError> {
        if email.is_empty() {
            return Err(EmailError::Empty);
        }

        let parsed = email_address::EmailAddress::from_str(&email)
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))?;

        if !Self::has_top_level_domain(parsed.domain()) {
            return Err(EmailError::InvalidFormat(format!(
                "domain '{}' has no top-level domain",
                parsed.domain()
            )));
        }

        Ok(Self(email))
    }

    fn has_top_level_domain(domain: &str) -> bool {
        match domain.rsplit_once('.') {
            Some((host, tld)) => {
                !host.is_empty() && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
            }
            None => false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Plaintext password as received at registration.
///
/// Only lives long enough to be hashed.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// # Errors
    /// * `Empty` - Password is empty
    pub fn new(password: String) -> Result<Self, PasswordError> {
        if password.is_empty() {
            Err(PasswordError::Empty)
        } else {
            Ok(Self(password))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Command to register a new user with domain types
#[derive(Debug)]
pub struct CreateUserCommand {
    pub username: Username,
    pub email: EmailAddress,
    pub password: Password,
    pub bio: String,
}

/// Fields of a user row before the database has assigned an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: Username,
    pub email: EmailAddress,
    pub password_hash: String,
    pub bio: String,
}

/// Command to edit a user's profile.
///
/// Only provided fields are changed.
#[derive(Debug, Default)]
pub struct UpdateProfileCommand {
    pub username: Option<Username>,
    pub email: Option<EmailAddress>,
    pub bio: Option<String>,
}

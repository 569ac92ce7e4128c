//! Authentication primitives
//!
//! Provides the building blocks the service composes into its login and
//! request-authentication flows:
//! - Password hashing (Argon2id, fixed cost)
//! - Opaque bearer token issuance (OS random bytes, SHA-256 digest for storage)
//! - Login coordination
//!
//! Nothing here touches storage; persisting digests and resolving presented
//! tokens is the service's job.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! assert!(!hasher.verify("other_password", &hash).unwrap());
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use auth::{TokenIssuer, TokenScope};
//! use chrono::Duration;
//!
//! let token = TokenIssuer::new()
//!     .issue(1, Duration::hours(24), TokenScope::Authentication)
//!     .unwrap();
//!
//! // Only the digest is stored; a presented plaintext is re-hashed and compared.
//! assert_eq!(TokenIssuer::digest(&token.plaintext), token.digest);
//! ```

pub mod authenticator;
pub mod password;
pub mod token;

pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::IssuedToken;
pub use token::TokenError;
pub use token::TokenIssuer;
pub use token::TokenScope;

//! # folio-auth
//!
//! Admin authentication for Folio.
//!
//! ## Modules
//!
//! - `jwt`: access/refresh token issuance and verification
//! - `password`: Argon2id password hashing and policy enforcement
//! - `credentials`: the credential store over an [`AdminStore`](folio_database::AdminStore)
//! - `session`: the session gateway: login, refresh, guard, whoAmI, update

pub mod credentials;
pub mod jwt;
pub mod password;
pub mod session;

pub use credentials::{AdminUpdate, CredentialStore};
pub use jwt::{Claims, IssuedToken, TokenIssuer, TokenPair, TokenType, TokenVerifier};
pub use password::{PasswordHasher, PasswordValidator};
pub use session::{LoginOutcome, SessionGateway};

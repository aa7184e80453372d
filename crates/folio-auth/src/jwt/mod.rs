//! JWT token issuance, verification, and claims.

pub mod claims;
pub mod issuer;
pub mod verifier;

pub use claims::{Claims, TokenType};
pub use issuer::{IssuedToken, TokenIssuer, TokenPair};
pub use verifier::TokenVerifier;

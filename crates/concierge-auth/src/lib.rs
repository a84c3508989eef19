#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod token;
mod verifier;

pub use error::AuthError;
pub use token::extract_token;
pub use verifier::TokenVerifier;

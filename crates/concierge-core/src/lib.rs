#![allow(clippy::must_use_candidate)]

mod error;
mod http_client;
mod user;

pub use error::HttpError;
pub use http_client::http_client;
pub use user::VerifiedUser;

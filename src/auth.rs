//! API identity: the public key and the redacted signing secret.

pub mod credentials;
pub mod secret;

pub use credentials::*;
pub use secret::*;

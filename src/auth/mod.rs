//! Authentication module for the Buda API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - Monotonic nonce generation for replay attack prevention
//! - HMAC-SHA384 signature generation for authenticated requests

mod credentials;
mod nonce;
mod signature;

pub use credentials::{Credentials, CredentialsProvider, EnvCredentials, StaticCredentials};
pub use nonce::{MillisNonce, NonceProvider};
pub use signature::{
    API_KEY_HEADER, AuthHeaders, NONCE_HEADER, SIGNATURE_HEADER, canonical_message, sign_request,
};

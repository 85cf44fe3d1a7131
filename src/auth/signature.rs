//! HMAC-SHA384 signature generation for Buda API authentication.
//!
//! Buda private endpoints require a signature computed over a canonical
//! message:
//! ```text
//! {METHOD} {path} {base64(body)} {nonce}    (requests with a body)
//! {METHOD} {path} {nonce}                   (requests without a body)
//! ```
//!
//! The digest is HMAC-SHA384 keyed by the API secret, hex-encoded, and sent
//! in the `X-SBTC-SIGNATURE` header alongside the key and nonce headers.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use sha2::Sha384;

use crate::auth::Credentials;
use crate::error::BudaError;

type HmacSha384 = Hmac<Sha384>;

/// Header carrying the API key identifier.
pub const API_KEY_HEADER: &str = "X-SBTC-APIKEY";
/// Header carrying the request nonce.
pub const NONCE_HEADER: &str = "X-SBTC-NONCE";
/// Header carrying the request signature.
pub const SIGNATURE_HEADER: &str = "X-SBTC-SIGNATURE";

/// The three authentication headers attached to a signed request.
///
/// When merged into a request's header set these win for their own three
/// names only; all other caller-supplied headers are left untouched.
#[derive(Debug, Clone)]
pub struct AuthHeaders {
    /// Value for [`API_KEY_HEADER`].
    pub api_key: String,
    /// Value for [`NONCE_HEADER`].
    pub nonce: String,
    /// Value for [`SIGNATURE_HEADER`].
    pub signature: String,
}

/// Build the canonical message for a request.
///
/// The signature is valid only for this exact (method, path, body, nonce)
/// tuple; any mutation produces a different message and therefore a different
/// signature. The path includes the query string, and the method is always
/// uppercased.
pub fn canonical_message(method: &str, path: &str, body: Option<&[u8]>, nonce: &str) -> String {
    let method = method.to_uppercase();
    match body {
        Some(body) => format!("{method} {path} {} {nonce}", BASE64.encode(body)),
        None => format!("{method} {path} {nonce}"),
    }
}

/// Sign a request for Buda's private API.
///
/// Computes HMAC-SHA384 over the canonical message using the API secret as
/// the key and returns the three authentication headers. This is a pure
/// function of its inputs: the same (method, path, body, nonce, secret)
/// always yields the same signature.
///
/// # Arguments
///
/// * `credentials` - API credentials containing the key and secret
/// * `method` - The HTTP method (e.g. "GET", "post")
/// * `path` - The request path including any query string
/// * `body` - The raw JSON body, if the request has one
/// * `nonce` - The nonce issued for this request
pub fn sign_request(
    credentials: &Credentials,
    method: &str,
    path: &str,
    body: Option<&[u8]>,
    nonce: &str,
) -> Result<AuthHeaders, BudaError> {
    let message = canonical_message(method, path, body, nonce);

    let mut hmac = HmacSha384::new_from_slice(credentials.expose_secret().as_bytes())
        .map_err(|e| BudaError::Auth(format!("Invalid HMAC key: {e}")))?;
    hmac.update(message.as_bytes());
    let signature = hex::encode(hmac.finalize().into_bytes());

    Ok(AuthHeaders {
        api_key: credentials.api_key.clone(),
        nonce: nonce.to_string(),
        signature,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials::new("test_key", "test_secret")
    }

    #[test]
    fn test_canonical_message_without_body() {
        let message = canonical_message("get", "/api/v2/markets", None, "15287680623100000");
        assert_eq!(message, "GET /api/v2/markets 15287680623100000");
    }

    #[test]
    fn test_canonical_message_with_body() {
        let body = br#"{"order":{"type":"bid"}}"#;
        let message = canonical_message(
            "POST",
            "/api/v2/markets/btc-clp/orders",
            Some(body),
            "15287680623100000",
        );
        assert_eq!(
            message,
            format!(
                "POST /api/v2/markets/btc-clp/orders {} 15287680623100000",
                BASE64.encode(body)
            )
        );
    }

    #[test]
    fn test_signature_deterministic() {
        let headers1 =
            sign_request(&credentials(), "GET", "/api/v2/markets", None, "123400000").unwrap();
        let headers2 =
            sign_request(&credentials(), "GET", "/api/v2/markets", None, "123400000").unwrap();

        assert_eq!(headers1.signature, headers2.signature);
        // HMAC-SHA384 produces 48 bytes, hex encoded = 96 chars.
        assert_eq!(headers1.signature.len(), 96);
        assert_eq!(headers1.api_key, "test_key");
        assert_eq!(headers1.nonce, "123400000");
    }

    #[test]
    fn test_signature_changes_with_secret() {
        let other = Credentials::new("test_key", "other_secret");

        let sig1 = sign_request(&credentials(), "GET", "/api/v2/markets", None, "123400000")
            .unwrap()
            .signature;
        let sig2 = sign_request(&other, "GET", "/api/v2/markets", None, "123400000")
            .unwrap()
            .signature;

        assert_ne!(sig1, sig2);
    }

    #[test]
    fn test_signature_sensitive_to_each_input() {
        let creds = credentials();
        let base = sign_request(&creds, "GET", "/api/v2/balances", None, "10000")
            .unwrap()
            .signature;

        let changed_method = sign_request(&creds, "PUT", "/api/v2/balances", None, "10000")
            .unwrap()
            .signature;
        let changed_path = sign_request(&creds, "GET", "/api/v2/balances/btc", None, "10000")
            .unwrap()
            .signature;
        let changed_body = sign_request(&creds, "GET", "/api/v2/balances", Some(b"{}"), "10000")
            .unwrap()
            .signature;
        let changed_nonce = sign_request(&creds, "GET", "/api/v2/balances", None, "10001")
            .unwrap()
            .signature;

        assert_ne!(base, changed_method);
        assert_ne!(base, changed_path);
        assert_ne!(base, changed_body);
        assert_ne!(base, changed_nonce);
    }

    #[test]
    fn test_method_casing_is_normalized() {
        let creds = credentials();
        let upper = sign_request(&creds, "POST", "/api/v2/orders", None, "10000")
            .unwrap()
            .signature;
        let lower = sign_request(&creds, "post", "/api/v2/orders", None, "10000")
            .unwrap()
            .signature;

        assert_eq!(upper, lower);
    }
}

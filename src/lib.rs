/*
 * Copyright Stormpath, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Provides functions for calculating SAuthc1 signing keys and signatures,
//! and utilities for signing HTTP requests to the Stormpath identity API.
//!
//! Signing is a pure computation over the caller's credential, a timestamp,
//! a single-use nonce, and the request's method and URI. The result is a
//! set of [`SigningInstructions`](crate::http_request::SigningInstructions)
//! that the caller applies to the request in one step.
//!
//! # Example: Signing an HTTP request
//!
//! ```rust
//! use sauthc1::http_request::{sign, SignableRequest};
//! use sauthc1::{Credential, SigningParams};
//! use std::time::SystemTime;
//!
//! # fn main() -> Result<(), sauthc1::http_request::SigningError> {
//! let credential = Credential::new("MyId", "Shush!");
//! let params = SigningParams::builder()
//!     .credential(&credential)
//!     .time(SystemTime::now())
//!     .generate_nonce()
//!     .build()
//!     .expect("all required fields are set");
//!
//! let mut request = http::Request::builder()
//!     .uri("https://api.stormpath.com/v1/applications")
//!     .body(())
//!     .unwrap();
//!
//! // Sign and then apply the signature to the request
//! let (instructions, _signature) = sign(SignableRequest::from(&request), &params)?.into_parts();
//! instructions.apply_to_request(&mut request);
//! assert!(request.headers().contains_key("authorization"));
//! # Ok(())
//! # }
//! ```

#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

use std::borrow::Cow;
use std::time::SystemTime;

pub mod credential;
mod date_time;
pub mod http_request;
pub mod sign;

pub use credential::Credential;

/// Parameters to use when signing.
// `#[derive(Debug)]` is safe because `Credential` redacts the secret.
#[derive(Debug)]
#[non_exhaustive]
pub struct SigningParams<'a> {
    pub(crate) credential: &'a Credential,
    /// Timestamp to use in the signature (should be `SystemTime::now()` unless testing).
    pub(crate) time: SystemTime,
    /// Single-use token scoping the signature to one request.
    pub(crate) nonce: Cow<'a, str>,
}

impl<'a> SigningParams<'a> {
    /// Returns the credential that will sign the request.
    pub fn credential(&self) -> &Credential {
        self.credential
    }

    /// Returns the timestamp the signature is computed for.
    pub fn time(&self) -> SystemTime {
        self.time
    }

    /// Returns the nonce scoping this signature.
    pub fn nonce(&self) -> &str {
        &self.nonce
    }

    /// Returns a builder that can create new `SigningParams`.
    pub fn builder() -> signing_params::Builder<'a> {
        Default::default()
    }
}

/// Builder and error for creating [`SigningParams`]
pub mod signing_params {
    use super::{Credential, SigningParams};
    use std::borrow::Cow;
    use std::error::Error;
    use std::fmt;
    use std::time::SystemTime;
    use uuid::Uuid;

    /// [`SigningParams`] builder error
    #[derive(Debug)]
    pub struct BuildError {
        reason: &'static str,
    }
    impl BuildError {
        fn new(reason: &'static str) -> Self {
            Self { reason }
        }
    }

    impl fmt::Display for BuildError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.reason)
        }
    }

    impl Error for BuildError {}

    /// Builder that can create new [`SigningParams`]
    #[derive(Debug, Default)]
    pub struct Builder<'a> {
        credential: Option<&'a Credential>,
        time: Option<SystemTime>,
        nonce: Option<Cow<'a, str>>,
    }

    impl<'a> Builder<'a> {
        /// Sets the credential (required)
        pub fn credential(mut self, credential: &'a Credential) -> Self {
            self.credential = Some(credential);
            self
        }
        /// Sets the credential (required)
        pub fn set_credential(&mut self, credential: Option<&'a Credential>) {
            self.credential = credential;
        }

        /// Sets the time to be used in the signature (required)
        pub fn time(mut self, time: SystemTime) -> Self {
            self.time = Some(time);
            self
        }
        /// Sets the time to be used in the signature (required)
        pub fn set_time(&mut self, time: Option<SystemTime>) {
            self.time = time;
        }

        /// Sets the nonce (required unless generated)
        ///
        /// Nonces must never be reused across requests; reuse enables
        /// replay. Prefer [`generate_nonce`](Builder::generate_nonce)
        /// unless reproducing a recorded request.
        pub fn nonce(mut self, nonce: impl Into<Cow<'a, str>>) -> Self {
            self.nonce = Some(nonce.into());
            self
        }
        /// Sets the nonce (required unless generated)
        pub fn set_nonce(&mut self, nonce: Option<Cow<'a, str>>) {
            self.nonce = nonce;
        }

        /// Generates a fresh random UUID nonce for this request.
        pub fn generate_nonce(mut self) -> Self {
            self.nonce = Some(Cow::Owned(Uuid::new_v4().to_string()));
            self
        }

        /// Builds an instance of [`SigningParams`]. Will yield a [`BuildError`] if
        /// a required argument was not given.
        pub fn build(self) -> Result<SigningParams<'a>, BuildError> {
            Ok(SigningParams {
                credential: self
                    .credential
                    .ok_or_else(|| BuildError::new("a credential is required"))?,
                time: self
                    .time
                    .ok_or_else(|| BuildError::new("time is required"))?,
                nonce: self
                    .nonce
                    .ok_or_else(|| BuildError::new("a nonce is required"))?,
            })
        }
    }
}

/// Container for the signed output and the signature.
///
/// This is returned by signing functions; the signed output is the set of
/// instructions to apply to the pending request.
#[derive(Debug)]
pub struct SigningOutput<T> {
    output: T,
    signature: String,
}

impl<T> SigningOutput<T> {
    /// Creates a new [`SigningOutput`]
    pub fn new(output: T, signature: String) -> Self {
        Self { output, signature }
    }

    /// Returns the signed output
    pub fn output(&self) -> &T {
        &self.output
    }

    /// Returns the signature as a lowercase hex string
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Decomposes the `SigningOutput` into a tuple of the signed output and the signature
    pub fn into_parts(self) -> (T, String) {
        (self.output, self.signature)
    }
}

#[cfg(test)]
mod tests {
    use super::{Credential, SigningParams};
    use std::time::SystemTime;

    #[test]
    fn builder_requires_all_fields() {
        let credential = Credential::new("foo", "bar");

        let err = SigningParams::builder().build().expect_err("empty builder");
        assert_eq!("a credential is required", err.to_string());

        let err = SigningParams::builder()
            .credential(&credential)
            .nonce("n")
            .build()
            .expect_err("missing time");
        assert_eq!("time is required", err.to_string());

        let err = SigningParams::builder()
            .credential(&credential)
            .time(SystemTime::now())
            .build()
            .expect_err("missing nonce");
        assert_eq!("a nonce is required", err.to_string());
    }

    #[test]
    fn generated_nonces_are_unique() {
        let credential = Credential::new("foo", "bar");
        let make = || {
            SigningParams::builder()
                .credential(&credential)
                .time(SystemTime::now())
                .generate_nonce()
                .build()
                .unwrap()
        };
        assert_ne!(make().nonce(), make().nonce());
    }

    #[test]
    fn params_debug_does_not_leak_the_secret() {
        let credential = Credential::new("foo", "hunter2");
        let params = SigningParams::builder()
            .credential(&credential)
            .time(SystemTime::now())
            .nonce("n")
            .build()
            .unwrap();
        assert!(!format!("{:?}", params).contains("hunter2"));
    }
}

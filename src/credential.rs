/*
 * Copyright Stormpath, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! API key credential used to sign requests.

use std::env;
use std::error::Error;
use std::fmt;
use std::sync::Arc;
use zeroize::Zeroizing;

const ENV_ID: &str = "STORMPATH_API_KEY_ID";
const ENV_SECRET: &str = "STORMPATH_API_KEY_SECRET";

/// An API key pair identifying the caller.
///
/// The secret is held in zeroizing storage and never appears in `Debug`
/// output; only keyed-hash values derived from it leave this crate.
#[derive(Clone)]
pub struct Credential(Arc<Inner>);

struct Inner {
    id: String,
    secret: Zeroizing<String>,
}

impl Credential {
    /// Creates a credential from an API key id and secret.
    pub fn new(id: impl Into<String>, secret: impl Into<String>) -> Self {
        Self(Arc::new(Inner {
            id: id.into(),
            secret: Zeroizing::new(secret.into()),
        }))
    }

    /// Resolves a credential from the `STORMPATH_API_KEY_ID` and
    /// `STORMPATH_API_KEY_SECRET` environment variables.
    pub fn from_env() -> Result<Self, CredentialError> {
        let id = env::var(ENV_ID).map_err(|_| CredentialError::missing_env_var(ENV_ID))?;
        let secret =
            env::var(ENV_SECRET).map_err(|_| CredentialError::missing_env_var(ENV_SECRET))?;
        if id.is_empty() {
            return Err(CredentialError::empty_field(ENV_ID));
        }
        if secret.is_empty() {
            return Err(CredentialError::empty_field(ENV_SECRET));
        }
        Ok(Self::new(id, secret))
    }

    /// Returns the API key id.
    pub fn id(&self) -> &str {
        &self.0.id
    }

    pub(crate) fn secret(&self) -> &str {
        &self.0.secret
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("id", &self.0.id)
            .field("secret", &"** redacted **")
            .finish()
    }
}

#[derive(Debug)]
enum CredentialErrorKind {
    MissingEnvVar { name: &'static str },
    EmptyField { name: &'static str },
}

/// Error resolving a [`Credential`] from the environment.
#[derive(Debug)]
pub struct CredentialError {
    kind: CredentialErrorKind,
}

impl CredentialError {
    fn missing_env_var(name: &'static str) -> Self {
        Self {
            kind: CredentialErrorKind::MissingEnvVar { name },
        }
    }

    fn empty_field(name: &'static str) -> Self {
        Self {
            kind: CredentialErrorKind::EmptyField { name },
        }
    }
}

impl fmt::Display for CredentialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CredentialErrorKind::*;
        match self.kind {
            MissingEnvVar { name } => write!(f, "environment variable `{}` is not set", name),
            EmptyField { name } => write!(f, "environment variable `{}` is empty", name),
        }
    }
}

impl Error for CredentialError {}

#[cfg(test)]
mod tests {
    use super::Credential;

    #[test]
    fn debug_output_redacts_the_secret() {
        let credential = Credential::new("MyId", "Shush!");
        let debugged = format!("{:?}", credential);
        assert!(debugged.contains("MyId"));
        assert!(debugged.contains("** redacted **"));
        assert!(!debugged.contains("Shush!"));
    }

    #[test]
    fn from_env_reports_missing_variables() {
        std::env::remove_var(super::ENV_ID);
        std::env::remove_var(super::ENV_SECRET);
        let err = Credential::from_env().expect_err("no variables set");
        assert_eq!(
            "environment variable `STORMPATH_API_KEY_ID` is not set",
            err.to_string()
        );
    }
}

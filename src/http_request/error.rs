/*
 * Copyright Stormpath, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use http::header::InvalidHeaderValue;
use http::uri::InvalidUri;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
enum SigningErrorKind {
    InvalidRequestUri { source: CanonicalUriError },
    FailedToCreateCanonicalRequest { source: CanonicalRequestError },
}

/// Error signing a request.
#[derive(Debug)]
pub struct SigningError {
    kind: SigningErrorKind,
}

impl fmt::Display for SigningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use SigningErrorKind::*;
        match self.kind {
            InvalidRequestUri { .. } => {
                write!(f, "the request URI is not a signable absolute URI")
            }
            FailedToCreateCanonicalRequest { .. } => {
                write!(f, "failed to create canonical request")
            }
        }
    }
}

impl Error for SigningError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        use SigningErrorKind::*;
        match &self.kind {
            InvalidRequestUri { source } => Some(source),
            FailedToCreateCanonicalRequest { source } => Some(source),
        }
    }
}

impl From<CanonicalUriError> for SigningError {
    fn from(source: CanonicalUriError) -> Self {
        Self {
            kind: SigningErrorKind::InvalidRequestUri { source },
        }
    }
}

impl From<CanonicalRequestError> for SigningError {
    fn from(source: CanonicalRequestError) -> Self {
        Self {
            kind: SigningErrorKind::FailedToCreateCanonicalRequest { source },
        }
    }
}

#[derive(Debug)]
enum CanonicalUriErrorKind {
    MalformedUri { source: InvalidUri },
    MissingAuthority,
}

/// Error canonicalizing a request URI.
#[derive(Debug)]
pub struct CanonicalUriError {
    kind: CanonicalUriErrorKind,
}

impl CanonicalUriError {
    pub(crate) fn missing_authority() -> Self {
        Self {
            kind: CanonicalUriErrorKind::MissingAuthority,
        }
    }
}

impl fmt::Display for CanonicalUriError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CanonicalUriErrorKind::*;
        match self.kind {
            MalformedUri { .. } => write!(f, "malformed URI"),
            MissingAuthority => write!(f, "URI has no scheme or host"),
        }
    }
}

impl Error for CanonicalUriError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        use CanonicalUriErrorKind::*;
        match &self.kind {
            MalformedUri { source } => Some(source),
            MissingAuthority => None,
        }
    }
}

impl From<InvalidUri> for CanonicalUriError {
    fn from(source: InvalidUri) -> Self {
        Self {
            kind: CanonicalUriErrorKind::MalformedUri { source },
        }
    }
}

#[derive(Debug)]
enum CanonicalRequestErrorKind {
    InvalidHeaderValue { source: InvalidHeaderValue },
}

#[derive(Debug)]
pub(crate) struct CanonicalRequestError {
    kind: CanonicalRequestErrorKind,
}

impl fmt::Display for CanonicalRequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CanonicalRequestErrorKind::*;
        match self.kind {
            InvalidHeaderValue { .. } => write!(f, "invalid header value"),
        }
    }
}

impl Error for CanonicalRequestError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        use CanonicalRequestErrorKind::*;
        match &self.kind {
            InvalidHeaderValue { source } => Some(source),
        }
    }
}

impl From<InvalidHeaderValue> for CanonicalRequestError {
    fn from(source: InvalidHeaderValue) -> Self {
        Self {
            kind: CanonicalRequestErrorKind::InvalidHeaderValue { source },
        }
    }
}

/*
 * Copyright Stormpath, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::date_time::{format_date, format_date_time};
use crate::http_request::error::SigningError;
use crate::http_request::sign::SignableRequest;
use crate::http_request::url_escape::percent_encode_query;
use crate::http_request::CanonicalUriError;
use crate::sign::ID_TERMINATOR;
use crate::SigningParams;
use http::{Method, Uri};
use std::borrow::Cow;
use std::fmt;

pub(crate) mod header {
    pub(crate) const X_STORMPATH_DATE: &str = "x-stormpath-date";
}

pub(crate) const ALGORITHM: &str = "HMAC-SHA-256";

/// The signed-header set is fixed by the protocol: `host` and
/// `x-stormpath-date`, in that order, no matter what else is on the
/// request.
pub(crate) const SIGNED_HEADERS: &str = "host;x-stormpath-date";

/// Hex SHA-256 of the empty byte sequence. SAuthc1 never signs a body, so
/// every canonical request ends with this placeholder.
pub(crate) const EMPTY_PAYLOAD_HASH: &str =
    "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

#[derive(Debug, PartialEq)]
pub(crate) struct CanonicalRequest<'a> {
    pub(crate) method: &'a Method,
    pub(crate) path: &'a str,
    pub(crate) params: Option<String>,
    pub(crate) host: String,
    pub(crate) date_time: String,
}

impl<'a> CanonicalRequest<'a> {
    /// Constructs a canonical request from a signable request.
    ///
    /// The URI is validated first: a request without a resolvable
    /// authority fails here, before any header value is computed, so a
    /// signing failure never produces partial output.
    pub(crate) fn from(
        req: &SignableRequest<'a>,
        params: &SigningParams<'a>,
    ) -> Result<CanonicalRequest<'a>, SigningError> {
        let uri = req.uri();
        let host = host_header(uri).ok_or_else(CanonicalUriError::missing_authority)?;

        let path = match uri.path() {
            "" => "/",
            path => path,
        };

        Ok(CanonicalRequest {
            method: req.method(),
            path,
            params: Self::params(uri),
            host,
            date_time: format_date_time(params.time),
        })
    }

    fn params(uri: &Uri) -> Option<String> {
        let query = uri.query()?;
        let mut params: Vec<(Cow<'_, str>, Cow<'_, str>)> =
            form_urlencoded::parse(query.as_bytes()).collect();
        // Sort by param name, and then by param value, ordinal byte order.
        params.sort();
        let mut out = String::new();
        for (i, (key, value)) in params.iter().enumerate() {
            if i > 0 {
                out.push('&');
            }
            out.push_str(&percent_encode_query(key));
            out.push('=');
            out.push_str(&percent_encode_query(value));
        }
        Some(out)
    }
}

impl fmt::Display for CanonicalRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.method)?;
        writeln!(f, "{}", self.path)?;
        writeln!(f, "{}", self.params.as_deref().unwrap_or(""))?;
        // the canonical header block, host first, each line terminated
        writeln!(f, "host:{}", self.host)?;
        writeln!(f, "{}:{}", header::X_STORMPATH_DATE, self.date_time)?;
        writeln!(f)?;
        writeln!(f, "{}", SIGNED_HEADERS)?;
        write!(f, "{}", EMPTY_PAYLOAD_HASH)?;
        Ok(())
    }
}

fn host_header(uri: &Uri) -> Option<String> {
    let authority = uri.authority()?;
    uri.scheme_str()?;
    Some(match uri.port_u16() {
        Some(port) if !is_default_port(uri.scheme_str(), port) => {
            format!("{}:{}", authority.host(), port)
        }
        _ => authority.host().to_string(),
    })
}

fn is_default_port(scheme: Option<&str>, port: u16) -> bool {
    matches!((scheme, port), (Some("http"), 80) | (Some("https"), 443))
}

/// The credential scope: one key, one day, one nonce.
#[derive(Debug, PartialEq, Clone)]
pub(crate) struct Scope<'a> {
    pub(crate) id: &'a str,
    pub(crate) date: String,
    pub(crate) nonce: &'a str,
}

impl fmt::Display for Scope<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}/{}", self.id, self.date, self.nonce, ID_TERMINATOR)
    }
}

#[derive(Debug, PartialEq)]
pub(crate) struct StringToSign<'a> {
    pub(crate) scope: Scope<'a>,
    pub(crate) date_time: String,
    pub(crate) hashed_creq: &'a str,
}

impl<'a> StringToSign<'a> {
    pub(crate) fn new(
        time: std::time::SystemTime,
        id: &'a str,
        nonce: &'a str,
        hashed_creq: &'a str,
    ) -> Self {
        let scope = Scope {
            id,
            date: format_date(time),
            nonce,
        };
        Self {
            scope,
            date_time: format_date_time(time),
            hashed_creq,
        }
    }
}

impl fmt::Display for StringToSign<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n{}\n{}\n{}",
            ALGORITHM, self.date_time, self.scope, self.hashed_creq
        )
    }
}

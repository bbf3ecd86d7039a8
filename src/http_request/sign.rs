/*
 * Copyright Stormpath, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::http_request::canonical_request::{
    header, CanonicalRequest, StringToSign, SIGNED_HEADERS,
};
use crate::http_request::error::{CanonicalRequestError, SigningError};
use crate::sign::{
    calculate_signature, generate_signing_key, sha256_hex_string, AUTHENTICATION_SCHEME,
};
use crate::{SigningOutput, SigningParams};
use http::header::{HeaderName, HeaderValue, AUTHORIZATION, HOST};
use http::{Method, Uri};

/// A borrowed view of the parts of an HTTP request that participate in
/// signing. SAuthc1 signs only the method, the URI, and the two headers
/// the signer itself produces, so nothing else is captured.
#[derive(Debug)]
#[non_exhaustive]
pub struct SignableRequest<'a> {
    method: &'a Method,
    uri: &'a Uri,
}

impl<'a> SignableRequest<'a> {
    /// Creates a new `SignableRequest`. If you have an [`http::Request`],
    /// consider using [`SignableRequest::from`] instead of `new`.
    pub fn new(method: &'a Method, uri: &'a Uri) -> Self {
        Self { method, uri }
    }

    /// Returns the signable URI.
    pub fn uri(&self) -> &'a Uri {
        self.uri
    }

    /// Returns the signable HTTP method.
    pub fn method(&self) -> &'a Method {
        self.method
    }
}

impl<'a, B> From<&'a http::Request<B>> for SignableRequest<'a> {
    fn from(request: &'a http::Request<B>) -> SignableRequest<'a> {
        SignableRequest::new(request.method(), request.uri())
    }
}

/// Instructions for applying a computed signature to an HTTP request.
///
/// Signing itself never touches the request; all three headers (`Host`,
/// `X-Stormpath-Date`, `Authorization`) land in one atomic apply step, so
/// a failed signing call leaves the request exactly as it was.
#[derive(Debug)]
pub struct SigningInstructions {
    headers: Vec<(HeaderName, HeaderValue)>,
}

impl SigningInstructions {
    fn new(headers: Vec<(HeaderName, HeaderValue)>) -> Self {
        Self { headers }
    }

    /// Returns the headers that should be set on the request.
    pub fn headers(&self) -> &[(HeaderName, HeaderValue)] {
        &self.headers
    }

    /// Applies the instructions to the given `request`.
    pub fn apply_to_request<B>(self, request: &mut http::Request<B>) {
        for (name, value) in self.headers {
            request.headers_mut().insert(name, value);
        }
    }
}

/// Produces an SAuthc1 signature for the given `request` and returns
/// instructions that can be used to apply it.
pub fn sign<'a>(
    request: SignableRequest<'a>,
    params: &'a SigningParams<'a>,
) -> Result<SigningOutput<SigningInstructions>, SigningError> {
    tracing::trace!(request = ?request, "signing request");

    // URI validation happens inside the canonical request constructor,
    // before any header value exists.
    let creq = CanonicalRequest::from(&request, params)?;
    let encoded_creq = sha256_hex_string(creq.to_string().as_bytes());
    let sts = StringToSign::new(
        params.time,
        params.credential.id(),
        params.nonce(),
        &encoded_creq,
    );

    let signing_key = generate_signing_key(params.credential.secret(), params.time, params.nonce());
    let signature = calculate_signature(signing_key, sts.to_string().as_bytes());
    tracing::trace!(canonical_request = %creq, string_to_sign = %sts, "calculated signature");

    let date_header =
        HeaderValue::try_from(creq.date_time.as_str()).map_err(CanonicalRequestError::from)?;
    let host_header =
        HeaderValue::try_from(creq.host.as_str()).map_err(CanonicalRequestError::from)?;
    let mut authorization = HeaderValue::try_from(format!(
        "{} sauthc1Id={}, sauthc1SignedHeaders={}, sauthc1Signature={}",
        AUTHENTICATION_SCHEME, sts.scope, SIGNED_HEADERS, signature
    ))
    .map_err(CanonicalRequestError::from)?;
    authorization.set_sensitive(true);

    let headers = vec![
        (HOST, host_header),
        (
            HeaderName::from_static(header::X_STORMPATH_DATE),
            date_header,
        ),
        (AUTHORIZATION, authorization),
    ];

    Ok(SigningOutput::new(
        SigningInstructions::new(headers),
        signature,
    ))
}

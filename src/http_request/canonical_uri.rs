/*
 * Copyright Stormpath, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::http_request::error::CanonicalUriError;
use http::Uri;

/// Resolves a possibly relative `target` against `base`, producing one
/// absolute URI suitable for signing.
///
/// An absolute `target` (one carrying its own scheme) is returned
/// unchanged. A relative `target` is joined to `base` with exactly one
/// `/` between them, whether or not `target` has a leading slash.
pub fn canonicalize_uri(base: &Uri, target: &str) -> Result<Uri, CanonicalUriError> {
    if let Ok(uri) = target.parse::<Uri>() {
        if uri.scheme().is_some() {
            if uri.authority().is_none() {
                return Err(CanonicalUriError::missing_authority());
            }
            return Ok(uri);
        }
    }

    let base = base.to_string();
    let joined = format!("{}/{}", base.trim_end_matches('/'), target.trim_start_matches('/'));
    let uri: Uri = joined.parse()?;
    if uri.scheme().is_none() || uri.authority().is_none() {
        return Err(CanonicalUriError::missing_authority());
    }
    Ok(uri)
}

#[cfg(test)]
mod tests {
    use super::canonicalize_uri;
    use http::Uri;

    fn base() -> Uri {
        Uri::from_static("http://api.foo.bar")
    }

    #[test]
    fn relative_paths_are_fully_qualified() {
        let uri = canonicalize_uri(&base(), "path/to/resource").unwrap();
        assert_eq!("http://api.foo.bar/path/to/resource", uri.to_string());
    }

    #[test]
    fn relative_paths_with_leading_slash_are_fully_qualified() {
        let uri = canonicalize_uri(&base(), "/path/to/resource").unwrap();
        assert_eq!("http://api.foo.bar/path/to/resource", uri.to_string());
    }

    #[test]
    fn absolute_uris_are_returned_unchanged() {
        let uri = canonicalize_uri(&base(), "https://other.example.com/v1/accounts?limit=5").unwrap();
        assert_eq!(
            "https://other.example.com/v1/accounts?limit=5",
            uri.to_string()
        );
    }

    #[test]
    fn base_with_trailing_slash_joins_without_double_slash() {
        let base = Uri::from_static("http://api.foo.bar/v1/");
        let uri = canonicalize_uri(&base, "/accounts").unwrap();
        assert_eq!("http://api.foo.bar/v1/accounts", uri.to_string());
    }

    #[test]
    fn relative_base_is_rejected() {
        let base = Uri::from_static("/not-absolute");
        canonicalize_uri(&base, "path").expect_err("no host to resolve against");
    }

    #[test]
    fn query_strings_survive_joining() {
        let uri = canonicalize_uri(&base(), "directories?orderBy=name").unwrap();
        assert_eq!("http://api.foo.bar/directories?orderBy=name", uri.to_string());
    }
}

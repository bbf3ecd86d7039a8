/*
 * Copyright Stormpath, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Utilities to sign HTTP requests.

mod canonical_request;
mod canonical_uri;
mod error;
mod sign;
mod url_escape;

pub use canonical_uri::canonicalize_uri;
pub use error::{CanonicalUriError, SigningError};
pub use sign::{sign, SignableRequest, SigningInstructions};

/*
 * Copyright Stormpath, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters escaped in canonical query strings: every byte outside the
/// RFC-3986 §2.3 unreserved set. Uppercase hex, so encoding is stable
/// regardless of how the caller originally escaped the query.
const QUERY_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub(crate) fn percent_encode_query(value: &str) -> String {
    utf8_percent_encode(value, QUERY_SET).to_string()
}

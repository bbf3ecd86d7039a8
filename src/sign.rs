/*
 * Copyright Stormpath, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Functions to derive SAuthc1 signing keys and calculate signatures.

use crate::date_time::format_date;
use hmac::{digest::FixedOutput, Hmac, Mac};
use sha2::{Digest, Sha256};
use std::time::SystemTime;

/// The authentication scheme name. Seeds the signing-key ladder and
/// prefixes the `Authorization` header value.
pub(crate) const AUTHENTICATION_SCHEME: &str = "SAuthc1";

/// Terminator appended to the credential scope and used as the final
/// rung of the signing-key ladder.
pub(crate) const ID_TERMINATOR: &str = "sauthc1_request";

/// Lowercase(HexEncode(Hash(bytes)))
pub(crate) fn sha256_hex_string(bytes: impl AsRef<[u8]>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize_fixed())
}

/// Calculates an SAuthc1 signature: the lowercase hex HMAC-SHA256 of the
/// string to sign under the derived signing key.
pub fn calculate_signature(signing_key: impl AsRef<[u8]>, string_to_sign: &[u8]) -> String {
    let mut mac = Hmac::<Sha256>::new_from_slice(signing_key.as_ref())
        .expect("HMAC can take key of any size");
    mac.update(string_to_sign);
    hex::encode(mac.finalize_fixed())
}

/// Derives the per-request SAuthc1 signing key.
///
/// The raw secret is used exactly once, and every derived key is scoped
/// to the request's date stamp and nonce, so a leaked signing key cannot
/// sign requests for a different nonce or a different day.
pub fn generate_signing_key(secret: &str, time: SystemTime, nonce: &str) -> impl AsRef<[u8]> {
    // kSecret  = UTF8("SAuthc1" + secret)
    // kDate    = HMAC(kSecret, dateStamp)
    // kNonce   = HMAC(kDate, nonce)
    // kSigning = HMAC(kNonce, "sauthc1_request")

    let secret = format!("{}{}", AUTHENTICATION_SCHEME, secret);
    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret.as_ref()).expect("HMAC can take key of any size");
    mac.update(format_date(time).as_bytes());
    let tag = mac.finalize_fixed();

    // scope to the nonce
    let mut mac = Hmac::<Sha256>::new_from_slice(&tag).expect("HMAC can take key of any size");
    mac.update(nonce.as_bytes());
    let tag = mac.finalize_fixed();

    // scope to the request terminator
    let mut mac = Hmac::<Sha256>::new_from_slice(&tag).expect("HMAC can take key of any size");
    mac.update(ID_TERMINATOR.as_bytes());
    mac.finalize_fixed()
}

#[cfg(test)]
mod tests {
    use super::{calculate_signature, generate_signing_key, sha256_hex_string};
    use crate::date_time::test_parsers::parse_date_time;

    const NONCE: &str = "a43a9d25-ab06-421e-8605-33fd1e760825";

    #[test]
    fn test_signing_key_ladder() {
        let time = parse_date_time("20130701T000000Z").unwrap();
        let derived_key = generate_signing_key("Shush!", time, NONCE);
        assert_eq!(
            "c682128c1074b6262f7a2496264c2854e3cc6b66c687d4a6f3e3c291941d03fc",
            hex::encode(derived_key.as_ref())
        );
    }

    #[test]
    fn test_signature_calculation() {
        let time = parse_date_time("20130701T000000Z").unwrap();
        let string_to_sign = "HMAC-SHA-256\n\
            20130701T000000Z\n\
            MyId/20130701/a43a9d25-ab06-421e-8605-33fd1e760825/sauthc1_request\n\
            39f5bb9c5c77f9937c912fb0c850fe69cd82fcfd48d34adde35814b8aa2a498d";

        let derived_key = generate_signing_key("Shush!", time, NONCE);
        let signature = calculate_signature(derived_key, string_to_sign.as_bytes());

        let expected = "990a95aabbcbeb53e48fb721f73b75bd3ae025a2e86ad359d08558e1bbb9411c";
        assert_eq!(expected, &signature);
    }

    #[test]
    fn sign_payload_empty_string() {
        let expected = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
        let actual = sha256_hex_string([]);
        assert_eq!(expected, actual);
    }
}

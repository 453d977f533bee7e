// Copyright 2024 Adobe. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.

// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.

use crate::{
    decode_key,
    key::KeyMaterial,
    tests::{ENCRYPTED_PRIVATE_KEY_PEM, PASSPHRASE, PRIVATE_KEY_PEM, PUBLIC_KEY_PEM},
    Error,
};

#[test]
fn decodes_unencrypted_private_key() {
    let key = decode_key(PRIVATE_KEY_PEM, None).unwrap();

    assert!(key.is_private());
    let KeyMaterial::Private { modulus, .. } = &key else {
        panic!("expected private key material");
    };
    assert!(modulus.len() <= 257);
}

#[test]
fn decodes_public_key() {
    let key = decode_key(PUBLIC_KEY_PEM, None).unwrap();

    assert!(!key.is_private());
}

#[test]
fn key_pair_shares_a_modulus() {
    let private = decode_key(PRIVATE_KEY_PEM, None).unwrap();
    let public = decode_key(PUBLIC_KEY_PEM, None).unwrap();

    let KeyMaterial::Private { modulus: n_priv, .. } = private else {
        panic!("expected private key material");
    };
    let KeyMaterial::Public { modulus: n_pub, .. } = public else {
        panic!("expected public key material");
    };

    assert_eq!(n_priv, n_pub);
}

#[test]
fn decodes_encrypted_private_key() {
    let provider = || PASSPHRASE.to_vec();

    let decrypted = decode_key(ENCRYPTED_PRIVATE_KEY_PEM, Some(&provider)).unwrap();
    let plain = decode_key(PRIVATE_KEY_PEM, None).unwrap();

    assert_eq!(decrypted, plain);
}

#[test]
fn wrong_passphrase_fails() {
    let provider = || b"not the passphrase".to_vec();

    assert_eq!(
        decode_key(ENCRYPTED_PRIVATE_KEY_PEM, Some(&provider)).unwrap_err(),
        Error::KeyDecodeFailed
    );
}

#[test]
fn encrypted_key_requires_a_provider() {
    assert_eq!(
        decode_key(ENCRYPTED_PRIVATE_KEY_PEM, None).unwrap_err(),
        Error::PassphraseRequired
    );
}

#[test]
fn corrupt_ciphertext_fails() {
    // Damage the final ciphertext block by flipping the last base64 data
    // character; the garbled PKCS#7 padding makes the failure deterministic.
    let lines: Vec<&str> = ENCRYPTED_PRIVATE_KEY_PEM.trim().lines().collect();
    let last_data_line = lines[lines.len() - 2];

    let data_len = last_data_line.trim_end_matches('=').len();
    let target = &last_data_line[data_len - 1..data_len];
    let flipped = if target == "A" { "B" } else { "A" };

    let mut replacement = String::from(last_data_line);
    replacement.replace_range(data_len - 1..data_len, flipped);
    let corrupt = ENCRYPTED_PRIVATE_KEY_PEM.replacen(last_data_line, &replacement, 1);

    let provider = || PASSPHRASE.to_vec();

    assert_eq!(
        decode_key(&corrupt, Some(&provider)).unwrap_err(),
        Error::KeyDecodeFailed
    );
}

#[test]
fn provider_error_propagates() {
    struct FailingProvider;

    impl crate::PassphraseProvider for FailingProvider {
        fn passphrase(&self) -> Result<Vec<u8>, Error> {
            Err(Error::PassphraseRequired)
        }
    }

    assert_eq!(
        decode_key(ENCRYPTED_PRIVATE_KEY_PEM, Some(&FailingProvider)).unwrap_err(),
        Error::PassphraseRequired
    );
}

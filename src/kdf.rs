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

//! OpenSSL's legacy password-based key derivation (`EVP_BytesToKey` with
//! MD5 and an iteration count of 1), as used by traditional encrypted PEM
//! files.

use md5::{Digest, Md5};

/// Derive `key_len` bytes of symmetric key material from a passphrase and
/// salt.
///
/// Digest blocks are chained: `D_0 = MD5(pass || salt)` and
/// `D_j = MD5(D_{j-1} || pass || salt)`, concatenated until `key_len` bytes
/// are available and then truncated. Each block is a single MD5 cycle
/// (OpenSSL's default `count = 1`).
pub(crate) fn bytes_to_key(passphrase: &[u8], salt: &[u8; 8], key_len: usize) -> Vec<u8> {
    let mut seed = Vec::with_capacity(passphrase.len() + salt.len());
    seed.extend_from_slice(passphrase);
    seed.extend_from_slice(salt);

    let mut key_material = Vec::with_capacity(key_len);
    let mut previous_digest: Option<[u8; 16]> = None;

    while key_material.len() < key_len {
        let mut hasher = Md5::new();
        if let Some(previous) = previous_digest {
            hasher.update(previous);
        }
        hasher.update(&seed);

        let digest: [u8; 16] = hasher.finalize().into();
        key_material.extend_from_slice(&digest);
        previous_digest = Some(digest);
    }

    key_material.truncate(key_len);
    key_material
}

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

//! Decryption of the legacy `DES-EDE3-CBC` PEM key payload.

use cbc::cipher::{block_padding::Pkcs7, BlockDecryptMut, KeyIvInit};

use crate::Error;

type TdesEde3CbcDecryptor = cbc::Decryptor<des::TdesEde3>;

/// Decrypt an encrypted DER key payload with a derived 24-byte 3DES key.
///
/// The 8-byte salt from the PEM preamble doubles as the CBC initialization
/// vector; that reuse is an OpenSSL legacy convention, not a CBC
/// requirement.
///
/// A wrong passphrase rarely fails here: 3DES will happily produce garbage
/// plaintext whose PKCS#7 padding is only occasionally invalid. The
/// downstream DER parse is the practical detector for that case.
pub(crate) fn decrypt_des_ede3_cbc(
    ciphertext: &[u8],
    key: &[u8],
    salt: &[u8; 8],
) -> Result<Vec<u8>, Error> {
    let decryptor = TdesEde3CbcDecryptor::new_from_slices(key, salt)
        .map_err(|e| Error::CryptoLibraryError(e.to_string()))?;

    decryptor
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| Error::DecryptionFailed)
}

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

//! RSA key material and PEM key decoding.

use rsa::{BigUint, RsaPrivateKey, RsaPublicKey};

use crate::{
    asn1, cipher, kdf,
    pem::{self, PemBody},
    Error,
};

const DES_EDE3_KEY_LEN: usize = 24;

/// Raw RSA key material decoded from a PEM key.
///
/// All fields are big-endian unsigned integers with leading sign-padding
/// zeros stripped. Key material is derived fresh on every [`decode_key`]
/// call and is never cached.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum KeyMaterial {
    /// Public key components from an X.509 `SubjectPublicKeyInfo`.
    Public {
        /// RSA modulus (n).
        modulus: Vec<u8>,

        /// Public exponent (e).
        exponent: Vec<u8>,
    },

    /// Private key components from a PKCS#1 `RSAPrivateKey`.
    Private {
        /// RSA modulus (n).
        modulus: Vec<u8>,

        /// Public exponent (e).
        exponent: Vec<u8>,

        /// Private exponent (d).
        d: Vec<u8>,

        /// First prime factor (p).
        p: Vec<u8>,

        /// Second prime factor (q).
        q: Vec<u8>,

        /// First CRT exponent (d mod p-1).
        dp: Vec<u8>,

        /// Second CRT exponent (d mod q-1).
        dq: Vec<u8>,

        /// CRT coefficient (q^-1 mod p).
        q_inv: Vec<u8>,
    },
}

impl KeyMaterial {
    /// Return `true` if this is private key material.
    pub fn is_private(&self) -> bool {
        matches!(self, Self::Private { .. })
    }

    /// Build an `rsa` crate public key from these components.
    ///
    /// Private key material carries its public components, so this works
    /// for either variant.
    pub(crate) fn rsa_public_key(&self) -> Result<RsaPublicKey, Error> {
        let (modulus, exponent) = match self {
            Self::Public { modulus, exponent } => (modulus, exponent),
            Self::Private {
                modulus, exponent, ..
            } => (modulus, exponent),
        };

        RsaPublicKey::new(
            BigUint::from_bytes_be(modulus),
            BigUint::from_bytes_be(exponent),
        )
        .map_err(|_| Error::KeyDecodeFailed)
    }

    /// Build an `rsa` crate private key from these components.
    ///
    /// Fails with [`Error::InvalidArgument`] for public-only material.
    pub(crate) fn rsa_private_key(&self) -> Result<RsaPrivateKey, Error> {
        let Self::Private {
            modulus,
            exponent,
            d,
            p,
            q,
            ..
        } = self
        else {
            return Err(Error::InvalidArgument);
        };

        RsaPrivateKey::from_components(
            BigUint::from_bytes_be(modulus),
            BigUint::from_bytes_be(exponent),
            BigUint::from_bytes_be(d),
            vec![BigUint::from_bytes_be(p), BigUint::from_bytes_be(q)],
        )
        .map_err(|_| Error::KeyDecodeFailed)
    }
}

/// A capability for supplying the passphrase of an encrypted private key.
///
/// The crate never performs terminal I/O itself; a caller that wants to
/// prompt interactively implements this trait (or passes a closure) and
/// does the prompting on its side of the seam.
pub trait PassphraseProvider {
    /// Return the passphrase as raw bytes.
    fn passphrase(&self) -> Result<Vec<u8>, Error>;
}

impl<F> PassphraseProvider for F
where
    F: Fn() -> Vec<u8>,
{
    fn passphrase(&self) -> Result<Vec<u8>, Error> {
        Ok(self())
    }
}

/// Decode PEM key text into [`KeyMaterial`].
///
/// Unencrypted envelopes decode directly. Encrypted envelopes require a
/// [`PassphraseProvider`]; the passphrase feeds the legacy OpenSSL key
/// derivation and 3DES-CBC decryption before DER parsing.
///
/// For encrypted keys, any failure after decryption begins surfaces as
/// [`Error::KeyDecodeFailed`]. The legacy format has no integrity check, so
/// a wrong passphrase, corrupt ciphertext, and a non-RSA payload are
/// deliberately indistinguishable.
pub fn decode_key(
    pem_text: &str,
    passphrase_provider: Option<&dyn PassphraseProvider>,
) -> Result<KeyMaterial, Error> {
    let envelope = pem::parse(pem_text)?;

    match envelope.body {
        PemBody::Der(der) => decode_der(envelope.is_private, &der),

        PemBody::Encrypted { ciphertext, salt } => {
            let provider = passphrase_provider.ok_or(Error::PassphraseRequired)?;
            let passphrase = provider.passphrase()?;

            let des_key = kdf::bytes_to_key(&passphrase, &salt, DES_EDE3_KEY_LEN);

            cipher::decrypt_des_ede3_cbc(&ciphertext, &des_key, &salt)
                .and_then(|der| decode_der(envelope.is_private, &der))
                .map_err(|_| Error::KeyDecodeFailed)
        }
    }
}

fn decode_der(is_private: bool, der: &[u8]) -> Result<KeyMaterial, Error> {
    if is_private {
        asn1::decode_private_key(der)
    } else {
        asn1::decode_public_key(der)
    }
}

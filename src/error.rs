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

use thiserror::Error;

/// Describes errors that can be identified when decoding key material or
/// generating and verifying request signatures.
///
/// A signature that simply does not match is *not* an error: [`verify`]
/// reports that case as `Ok(false)`.
///
/// [`verify`]: crate::signature::verify
#[derive(Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The PEM envelope is not one of the two recognized header/footer pairs,
    /// or its body is neither valid base64 nor a well-formed OpenSSL
    /// encryption preamble.
    #[error("malformed PEM envelope")]
    MalformedPem,

    /// The PEM encryption preamble names an algorithm other than
    /// `DES-EDE3-CBC`.
    #[error("unsupported PEM encryption algorithm ({0})")]
    UnsupportedCipher(String),

    /// The 3DES-CBC decryption of the key payload failed at the cipher level.
    #[error("decryption of the encrypted key payload failed")]
    DecryptionFailed,

    /// An unexpected tag, length, or version was encountered while parsing
    /// the DER-encoded key, or the data ended prematurely.
    #[error("unexpected DER structure while parsing key")]
    Asn1Structure,

    /// The algorithm identifier in the public key is not rsaEncryption
    /// (1.2.840.113549.1.1.1).
    #[error("public key algorithm identifier is not rsaEncryption")]
    UnexpectedOid,

    /// The key could not be decoded after decryption. This covers a wrong
    /// passphrase and corrupt key material; the legacy format carries no
    /// integrity check that would let us tell those apart.
    #[error("could not decode key material (wrong passphrase or corrupt key)")]
    KeyDecodeFailed,

    /// The key is encrypted but no passphrase provider was supplied.
    #[error("key is encrypted and no passphrase provider was supplied")]
    PassphraseRequired,

    /// A signature type other than `SHA256` was requested.
    #[error("unsupported signature type ({0})")]
    UnsupportedAlgorithm(String),

    /// An argument does not fit the requested operation: a null payload was
    /// passed to canonicalization (canonical JSON of "nothing" is not
    /// defined), or public-only key material was passed to an operation
    /// that requires a private key.
    #[error("invalid argument for the requested operation")]
    InvalidArgument,

    /// The supplied signature is not valid base64.
    #[error("signature is not valid base64")]
    InvalidSignatureEncoding,

    /// An error was reported by the underlying cryptography implementation.
    ///
    /// NOTE: We do not directly capture the underlying error itself because
    /// it lacks an `Eq` implementation. Instead we capture the error
    /// description.
    #[error("an error was reported by the cryptography library: {0}")]
    CryptoLibraryError(String),
}

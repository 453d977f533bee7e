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

//! RSA-SHA256 signing and verification of canonical request strings.

use rsa::{
    pkcs1v15::{Signature, SigningKey, VerifyingKey},
    sha2::Sha256,
    signature::{SignatureEncoding, Signer, Verifier},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{base64, canonical_json::canonical_json, key::KeyMaterial, Error};

const SIGN_TYPE_SHA256: &str = "SHA256";

/// The fields of an API request that participate in its signature.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SignatureRequest {
    /// Structured request payload, if the request carries one. It enters the
    /// signing string as base64 of its canonical JSON form.
    #[serde(rename = "data")]
    pub payload: Option<Value>,

    /// HTTP method of the request.
    pub method: String,

    /// Random nonce string.
    #[serde(rename = "nonceStr")]
    pub nonce: String,

    /// Request URL. A blank (empty or whitespace-only) URL is excluded from
    /// the signing string, identically on the sign and verify paths.
    #[serde(rename = "requestUrl")]
    pub request_url: Option<String>,

    /// Signature type; only `SHA256` is accepted (case-insensitively).
    #[serde(rename = "signType")]
    pub sign_type: String,

    /// Request timestamp, as the string the caller will transmit.
    pub timestamp: String,
}

/// Sign a request with private key material.
///
/// Returns the RSA-SHA256 (PKCS#1 v1.5) signature over the UTF-8 canonical
/// signing string, as standard base64 with no line wrapping.
pub fn sign(key: &KeyMaterial, request: &SignatureRequest) -> Result<String, Error> {
    check_sign_type(request)?;

    let signing_string = signing_string(request)?;

    let signing_key = SigningKey::<Sha256>::new(key.rsa_private_key()?);
    let signature = signing_key
        .try_sign(signing_string.as_bytes())
        .map_err(|e| Error::CryptoLibraryError(e.to_string()))?;

    Ok(base64::encode(&signature.to_bytes()))
}

/// Verify a base64-encoded request signature against public key material.
///
/// The canonical signing string is rebuilt from `request` with the same
/// field order and inclusion rules as [`sign`]; a pre-encoded `data=` value
/// is never trusted. Returns `Ok(false)` only for a cryptographically
/// mismatched signature; malformed base64 and unusable key material are
/// errors, not `false`.
pub fn verify(
    key: &KeyMaterial,
    request: &SignatureRequest,
    signature: &str,
) -> Result<bool, Error> {
    check_sign_type(request)?;

    let signature_bytes =
        base64::decode(signature).map_err(|_| Error::InvalidSignatureEncoding)?;
    let signature = Signature::try_from(signature_bytes.as_slice())
        .map_err(|_| Error::InvalidSignatureEncoding)?;

    let signing_string = signing_string(request)?;

    let verifying_key = VerifyingKey::<Sha256>::new(key.rsa_public_key()?);

    Ok(verifying_key
        .verify(signing_string.as_bytes(), &signature)
        .is_ok())
}

fn check_sign_type(request: &SignatureRequest) -> Result<(), Error> {
    if !request.sign_type.eq_ignore_ascii_case(SIGN_TYPE_SHA256) {
        return Err(Error::UnsupportedAlgorithm(request.sign_type.clone()));
    }
    Ok(())
}

/// Assemble the canonical signing string.
///
/// Field order is fixed and fields are joined by `&` with no trailing `&`:
/// `data` (only if a payload is present), `method`, `nonceStr`,
/// `requestUrl` (only if non-blank), `signType`, `timestamp`. This byte
/// sequence is a wire contract with the remote verifier.
pub(crate) fn signing_string(request: &SignatureRequest) -> Result<String, Error> {
    let mut fields: Vec<String> = Vec::with_capacity(6);

    if let Some(payload) = &request.payload {
        let canonical = canonical_json(payload)?;
        fields.push(format!("data={}", base64::encode(canonical.as_bytes())));
    }

    fields.push(format!("method={}", request.method));
    fields.push(format!("nonceStr={}", request.nonce));

    if let Some(url) = request.request_url.as_deref() {
        if !url.trim().is_empty() {
            fields.push(format!("requestUrl={url}"));
        }
    }

    fields.push(format!("signType={}", request.sign_type));
    fields.push(format!("timestamp={}", request.timestamp));

    Ok(fields.join("&"))
}

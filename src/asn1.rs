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

//! Minimal DER parsing for the two RSA key encodings used by the payment
//! API: PKCS#1 private keys and X.509 `SubjectPublicKeyInfo` public keys.
//!
//! This is deliberately not a general ASN.1 library; it reads exactly the
//! structures those two encodings contain and nothing else.

use crate::{key::KeyMaterial, Error};

const TAG_INTEGER: u8 = 0x02;
const TAG_BIT_STRING: u8 = 0x03;
const TAG_SEQUENCE: u8 = 0x30;

/// DER-encoded AlgorithmIdentifier for rsaEncryption (1.2.840.113549.1.1.1)
/// with a NULL parameter.
const RSA_ENCRYPTION_ALGORITHM_ID: [u8; 15] = [
    0x30, 0x0D, 0x06, 0x09, 0x2A, 0x86, 0x48, 0x86, 0xF7, 0x0D, 0x01, 0x01, 0x01, 0x05, 0x00,
];

/// Position-tracked view over a DER byte slice.
///
/// Every read past the end of the slice is reported as
/// [`Error::Asn1Structure`]: truncated input is indistinguishable from a
/// structurally invalid key, and callers must not see it as an I/O fault.
struct DerReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> DerReader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn read_u8(&mut self) -> Result<u8, Error> {
        let byte = *self.bytes.get(self.pos).ok_or(Error::Asn1Structure)?;
        self.pos += 1;
        Ok(byte)
    }

    fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], Error> {
        let end = self.pos.checked_add(len).ok_or(Error::Asn1Structure)?;
        let bytes = self.bytes.get(self.pos..end).ok_or(Error::Asn1Structure)?;
        self.pos = end;
        Ok(bytes)
    }

    /// Undo the most recent single-byte read.
    fn step_back(&mut self) {
        self.pos = self.pos.saturating_sub(1);
    }

    /// Read one tag byte and fail unless it matches `expected`.
    fn expect_tag(&mut self, expected: u8) -> Result<(), Error> {
        if self.read_u8()? != expected {
            return Err(Error::Asn1Structure);
        }
        Ok(())
    }

    /// Read a length field following a tag.
    ///
    /// A first byte below 0x80 is the short-form length itself; `0x81` and
    /// `0x82` announce one or two big-endian length bytes. Longer forms
    /// never occur in the keys this crate accepts.
    fn read_length(&mut self) -> Result<usize, Error> {
        match self.read_u8()? {
            0x81 => Ok(self.read_u8()? as usize),
            0x82 => {
                let high = self.read_u8()? as usize;
                let low = self.read_u8()? as usize;
                Ok((high << 8) | low)
            }
            byte if byte < 0x80 => Ok(byte as usize),
            _ => Err(Error::Asn1Structure),
        }
    }

    /// Read an INTEGER field, stripping any leading zero (sign-padding)
    /// bytes from the value.
    fn read_integer(&mut self) -> Result<Vec<u8>, Error> {
        self.expect_tag(TAG_INTEGER)?;
        let mut len = self.read_length()?;

        while len > 0 && self.read_u8()? == 0x00 {
            len -= 1;
        }
        if len > 0 {
            // Last byte read was the first significant one; rewind to it.
            self.step_back();
        }

        Ok(self.read_bytes(len)?.to_vec())
    }
}

/// Decode a DER-encoded X.509 `SubjectPublicKeyInfo` into public key
/// material.
pub(crate) fn decode_public_key(der: &[u8]) -> Result<KeyMaterial, Error> {
    let mut reader = DerReader::new(der);

    reader.expect_tag(TAG_SEQUENCE)?;
    reader.read_length()?;

    if reader.read_bytes(RSA_ENCRYPTION_ALGORITHM_ID.len())? != RSA_ENCRYPTION_ALGORITHM_ID {
        return Err(Error::UnexpectedOid);
    }

    reader.expect_tag(TAG_BIT_STRING)?;
    reader.read_length()?;
    if reader.read_u8()? != 0x00 {
        // unused-bits count; always zero for RSA keys
        return Err(Error::Asn1Structure);
    }

    reader.expect_tag(TAG_SEQUENCE)?;
    reader.read_length()?;

    let modulus = reader.read_integer()?;
    let exponent = reader.read_integer()?;

    Ok(KeyMaterial::Public { modulus, exponent })
}

/// Decode a DER-encoded PKCS#1 `RSAPrivateKey` into private key material.
pub(crate) fn decode_private_key(der: &[u8]) -> Result<KeyMaterial, Error> {
    let mut reader = DerReader::new(der);

    reader.expect_tag(TAG_SEQUENCE)?;
    reader.read_length()?;

    // Version INTEGER must be two-prime (value 0, encoded 02 01 00).
    reader.expect_tag(TAG_INTEGER)?;
    if reader.read_u8()? != 0x01 || reader.read_u8()? != 0x00 {
        return Err(Error::Asn1Structure);
    }

    let modulus = reader.read_integer()?;
    let exponent = reader.read_integer()?;
    let d = reader.read_integer()?;
    let p = reader.read_integer()?;
    let q = reader.read_integer()?;
    let dp = reader.read_integer()?;
    let dq = reader.read_integer()?;
    let q_inv = reader.read_integer()?;

    Ok(KeyMaterial::Private {
        modulus,
        exponent,
        d,
        p,
        q,
        dp,
        dq,
        q_inv,
    })
}

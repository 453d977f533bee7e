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

#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![deny(warnings)]
#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg, doc_cfg_hide))]

pub(crate) mod asn1;
pub mod base64;
pub mod canonical_json;
pub(crate) mod cipher;
mod error;
pub(crate) mod kdf;
pub mod key;
pub(crate) mod pem;
pub mod signature;

pub use error::Error;
pub use key::{decode_key, KeyMaterial, PassphraseProvider};
pub use signature::{sign, verify, SignatureRequest};

#[cfg(test)]
pub(crate) mod tests;

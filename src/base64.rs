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

//! Base64 conversion utilities.
//!
//! All wire-format fields in this crate (the `data=` component of the
//! signing string and the signature itself) use standard base64 with padding
//! and no line wrapping.

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Given a byte slice, return it as a base64-encoded `String`.
pub fn encode(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Given a `&str` containing base64-encoded data, return the decoded bytes.
pub fn decode(data: &str) -> Result<Vec<u8>, base64::DecodeError> {
    STANDARD.decode(data)
}

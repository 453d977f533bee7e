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

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

mod key;
mod pem;

pub(crate) const PRIVATE_KEY_PEM: &str = include_str!("fixtures/private_key.pem");
pub(crate) const PUBLIC_KEY_PEM: &str = include_str!("fixtures/public_key.pem");
pub(crate) const ENCRYPTED_PRIVATE_KEY_PEM: &str =
    include_str!("fixtures/encrypted_private_key.pem");

pub(crate) const PASSPHRASE: &[u8] = b"opensesame";

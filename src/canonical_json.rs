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

//! Deterministic JSON serialization for request signing.
//!
//! The remote verifier rebuilds this exact byte sequence, so the rules here
//! are a wire contract: object members sorted by ordinal key comparison at
//! every depth, no inter-token whitespace, and `<`, `>`, `&` replaced by
//! their `\uXXXX` escape sequences so the output cannot be reinterpreted as
//! markup when embedded elsewhere.

use serde_json::Value;

use crate::Error;

/// Serialize a JSON value into its canonical form.
///
/// Fails with [`Error::InvalidArgument`] for a top-level `null`:
/// canonicalization of "nothing" is not defined. (A `null` nested inside an
/// object or array serializes normally.)
pub fn canonical_json(value: &Value) -> Result<String, Error> {
    if value.is_null() {
        return Err(Error::InvalidArgument);
    }

    let mut out = String::new();
    write_value(&mut out, value);

    Ok(out
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026"))
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => write_string(out, s),

        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(out, item);
            }
            out.push(']');
        }

        Value::Object(members) => {
            let mut keys: Vec<&str> = members.keys().map(String::as_str).collect();
            keys.sort_unstable();

            out.push('{');
            for (i, key) in keys.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(out, key);
                out.push(':');
                write_value(out, &members[key]);
            }
            out.push('}');
        }
    }
}

/// Write a string literal with standard JSON escaping.
fn write_string(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c < '\u{20}' => {
                out.push_str("\\u00");
                for digit in [(c as u8) >> 4, (c as u8) & 0x0f] {
                    out.push(char::from_digit(digit as u32, 16).unwrap_or('0'));
                }
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

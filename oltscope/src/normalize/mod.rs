//! Field normalizers shared by every vendor parser.
//!
//! Pure functions only: MAC canonicalization, `N/A` handling, numeric
//! coercion and bounded diagnostic snippets.

mod mac;
mod value;

pub use mac::{canonical_mac, is_mac, normalize_mac, parse_mac};
pub use value::{
    NOT_AVAILABLE, is_not_available, join_tokens, parse_decimal, parse_meters, present, snippet,
};

//! MAC address canonicalization.
//!
//! OLTs print MAC addresses in several notations. Everything is reduced to
//! one canonical form: lowercase, colon-separated octets.
//!
//! ```text
//! 70:a5:6a:dd:7e:1d      # canonical
//! 70-A5-6A-DD-7E-1D      # hyphenated octets
//! 70a5.6add.7e1d         # BDCOM / Cisco dotted groups
//! 70a5-6add-7e1d         # Huawei / H3C hyphenated groups
//! ```

/// Separator and group width for each accepted notation.
const NOTATIONS: &[(char, usize)] = &[(':', 2), ('-', 2), ('.', 4), ('-', 4)];

/// Parse a MAC address in any supported separated notation.
///
/// Bare 12-digit hex strings are not accepted; callers pass those through
/// unchanged.
pub fn parse_mac(input: &str) -> Option<[u8; 6]> {
    let input = input.trim();
    NOTATIONS
        .iter()
        .find_map(|&(separator, width)| parse_grouped(input, separator, width))
}

/// Canonical form of `input`, or `None` if it is not a recognizable MAC.
pub fn canonical_mac(input: &str) -> Option<String> {
    parse_mac(input).map(|b| {
        format!(
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            b[0], b[1], b[2], b[3], b[4], b[5]
        )
    })
}

/// Canonicalize `input`, returning it trimmed but otherwise unchanged when
/// it cannot be parsed.
pub fn normalize_mac(input: &str) -> String {
    canonical_mac(input).unwrap_or_else(|| input.trim().to_string())
}

/// Check whether a token is a MAC address in a supported notation.
pub fn is_mac(token: &str) -> bool {
    parse_mac(token).is_some()
}

fn parse_grouped(input: &str, separator: char, width: usize) -> Option<[u8; 6]> {
    let groups: Vec<&str> = input.split(separator).collect();
    if groups.len() != 12 / width {
        return None;
    }

    let mut hex = String::with_capacity(12);
    for group in groups {
        if group.len() != width || !group.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        hex.push_str(group);
    }

    let mut bytes = [0u8; 6];
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).ok()?;
    }
    Some(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bdcom_dotted() {
        assert_eq!(normalize_mac("70a5.6add.7e1d"), "70:a5:6a:dd:7e:1d");
        assert_eq!(normalize_mac("70A5.6ADD.7E1D"), "70:a5:6a:dd:7e:1d");
    }

    #[test]
    fn test_other_notations() {
        assert_eq!(normalize_mac("70-A5-6A-DD-7E-1D"), "70:a5:6a:dd:7e:1d");
        assert_eq!(normalize_mac("70a5-6add-7e1d"), "70:a5:6a:dd:7e:1d");
        assert_eq!(normalize_mac(" 70:A5:6a:dd:7e:1D "), "70:a5:6a:dd:7e:1d");
    }

    #[test]
    fn test_idempotent() {
        for input in [
            "70a5.6add.7e1d",
            "00-1A-2B-3C-4D-5E",
            "ffff-ffff-ffff",
            "70a56add7e1d",
            "N/A",
        ] {
            let once = normalize_mac(input);
            assert_eq!(normalize_mac(&once), once, "not idempotent for {input}");
        }
    }

    #[test]
    fn test_passthrough() {
        // No separators: left alone
        assert_eq!(normalize_mac("70a56add7e1d"), "70a56add7e1d");
        assert_eq!(normalize_mac("N/A"), "N/A");
        assert_eq!(normalize_mac("70a5.6add"), "70a5.6add");
        assert_eq!(normalize_mac("zz:a5:6a:dd:7e:1d"), "zz:a5:6a:dd:7e:1d");
    }

    #[test]
    fn test_is_mac() {
        assert!(is_mac("70a5.6add.7e1d"));
        assert!(!is_mac("DYNAMIC"));
        assert!(!is_mac("100"));
    }
}

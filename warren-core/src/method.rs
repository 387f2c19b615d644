//! Routing key to handler method name transform.

/// The literal every handler method name starts with.
pub const READ_PREFIX: &str = "read";

/// Derive the handler method name for a routing key.
///
/// The key is split into segments on every run of non-alphanumeric
/// characters, the first character of each segment is upper-cased, and the
/// segments are concatenated behind [`READ_PREFIX`]. The rest of each segment
/// is kept as is. Total: every string maps to exactly one name.
///
/// ```rust
/// use warren_core::method_name;
///
/// assert_eq!(method_name("order.created"), "readOrderCreated");
/// assert_eq!(method_name("user.signed_up"), "readUserSignedUp");
/// assert_eq!(method_name(""), "read");
/// ```
pub fn method_name(routing_key: &str) -> String {
    let mut name = String::with_capacity(READ_PREFIX.len() + routing_key.len());
    name.push_str(READ_PREFIX);

    for segment in routing_key.split(|c: char| !c.is_alphanumeric()) {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            name.extend(first.to_uppercase());
            name.push_str(chars.as_str());
        }
    }

    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dotted_key() {
        assert_eq!(method_name("order.created"), "readOrderCreated");
    }

    #[test]
    fn test_mixed_separators() {
        assert_eq!(method_name("user.signed_up"), "readUserSignedUp");
        assert_eq!(method_name("a-b c/d"), "readABCD");
        assert_eq!(method_name("..order..created.."), "readOrderCreated");
    }

    #[test]
    fn test_empty_and_separator_only_keys() {
        assert_eq!(method_name(""), "read");
        assert_eq!(method_name("#.*"), "read");
    }

    #[test]
    fn test_rest_of_segment_is_preserved() {
        assert_eq!(method_name("order.reCreated"), "readOrderReCreated");
        assert_eq!(method_name("ORDER.created"), "readORDERCreated");
    }

    #[test]
    fn test_digits_are_alphanumeric() {
        assert_eq!(method_name("v2.items"), "readV2Items");
        assert_eq!(method_name("2fa.enabled"), "read2faEnabled");
    }

    #[test]
    fn test_unicode_segments() {
        assert_eq!(method_name("übung.fertig"), "readÜbungFertig");
    }

    #[test]
    fn test_deterministic() {
        for key in ["", "a", "order.created", "x_y-z", "ä.ß"] {
            assert_eq!(method_name(key), method_name(key));
        }
    }
}

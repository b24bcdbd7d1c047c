use std::sync::LazyLock;
use regex::Regex;

static NAME_AND_ADDRESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(.*?)\s*<([^<>\s]+)>\s*$").expect("valid address pattern"));
static UNSAFE_NAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}\s'._-]").expect("valid name pattern"));
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Strips characters from the display name part of `Name <address>` that mail clients could
/// render as a second address or as markup. Bare addresses are returned unchanged.
pub fn sanitize_display_name(name_and_address: &str) -> String {
    let Some(caps) = NAME_AND_ADDRESS.captures(name_and_address) else {
        return name_and_address.trim().to_string();
    };

    let address = &caps[2];
    let cleaned = UNSAFE_NAME_CHARS.replace_all(&caps[1], "");
    let name = WHITESPACE.replace_all(cleaned.trim(), " ");

    if name.is_empty() {
        address.to_string()
    } else {
        format!("{} <{}>", name, address)
    }
}

/// Address part of `Name <address>` or the trimmed input.
pub fn extract_address(name_and_address: &str) -> &str {
    match (name_and_address.rfind('<'), name_and_address.rfind('>')) {
        (Some(start), Some(end)) if start < end => name_and_address[start + 1..end].trim(),
        _ => name_and_address.trim(),
    }
}

/// Placeholder addresses created for SMS-only attendees; mail to them can never be delivered.
pub fn is_synthetic_address(name_and_address: &str, synthetic_domain: &str) -> bool {
    let address = extract_address(name_and_address).to_lowercase();
    !synthetic_domain.is_empty() && address.ends_with(&format!("@{}", synthetic_domain.to_lowercase()))
}

/// Decodes HTML entities left in a rendered subject line.
pub fn decode_subject(subject: &str) -> String {
    html_escape::decode_html_entities(subject).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_injection_characters() {
        assert_eq!(
            sanitize_display_name("Evil, <attacker@example.com> \"Co\" <ops@booking.local>"),
            "Evil attackerexample.com Co <ops@booking.local>"
        );
        assert_eq!(sanitize_display_name("Ana-María O'Neil <ana@example.com>"), "Ana-María O'Neil <ana@example.com>");
    }

    #[test]
    fn test_bare_address_unchanged() {
        assert_eq!(sanitize_display_name(" bob@example.com "), "bob@example.com");
    }

    #[test]
    fn test_empty_name_collapses_to_address() {
        assert_eq!(sanitize_display_name("<:> <bob@example.com>"), "bob@example.com");
    }

    #[test]
    fn test_synthetic_address() {
        assert!(is_synthetic_address("+4917012345@sms.booking.local", "sms.booking.local"));
        assert!(is_synthetic_address("Guest <+4917012345@SMS.booking.local>", "sms.booking.local"));
        assert!(!is_synthetic_address("guest@booking.local", "sms.booking.local"));
        assert!(!is_synthetic_address("guest@booking.local", ""));
    }

    #[test]
    fn test_decode_subject() {
        assert_eq!(decode_subject("Tom &amp; Jerry&#39;s &quot;demo&quot;"), "Tom & Jerry's \"demo\"");
    }
}

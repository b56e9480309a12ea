//! String conversion utilities.

/// Reduces a display name to a comparison key: lower-cased ASCII letters and digits only.
///
/// Names authored by hand drift in punctuation and spacing ("Cook's Assistant",
/// "Cooks Assistant", "cooks-assistant"); all of them share one key.
///
/// # Examples
///
/// ```
/// use ironpath_domain::common::normalize_key;
///
/// assert_eq!(normalize_key("Cook's Assistant"), "cooksassistant");
/// assert_eq!(normalize_key("  Tutorial Island "), "tutorialisland");
/// assert_eq!(normalize_key("Lost City!"), normalize_key("lost-city"));
/// ```
pub fn normalize_key(value: &str) -> String {
    value
        .trim()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Returns the trimmed value, or `None` when nothing but whitespace remains.
///
/// # Examples
///
/// ```
/// use ironpath_domain::common::none_if_blank;
///
/// assert_eq!(none_if_blank(" hello "), Some("hello"));
/// assert_eq!(none_if_blank("   "), None);
/// assert_eq!(none_if_blank(""), None);
/// ```
pub fn none_if_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Extension trait for optional strings read from hand-authored documents.
///
/// # Examples
///
/// ```
/// use ironpath_domain::common::StringExt;
///
/// assert_eq!(Some(" why ".to_string()).trimmed_non_blank(), Some("why".to_string()));
/// assert_eq!(Some("  ".to_string()).trimmed_non_blank(), None);
/// assert_eq!(None::<String>.trimmed_non_blank(), None);
/// ```
pub trait StringExt {
    /// Trims the value and drops it entirely if it is blank.
    fn trimmed_non_blank(self) -> Option<String>;
}

impl StringExt for Option<String> {
    fn trimmed_non_blank(self) -> Option<String> {
        self.as_deref().and_then(none_if_blank).map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_key_strips_punctuation() {
        assert_eq!(normalize_key("Recipe for Disaster - Freeing the Goblin generals"),
            "recipefordisasterfreeingthegoblingenerals");
        assert_eq!(normalize_key("Cook's Assistant"), "cooksassistant");
    }

    #[test]
    fn test_normalize_key_keeps_digits() {
        assert_eq!(normalize_key("Dragon Slayer II"), "dragonslayerii");
        assert_eq!(normalize_key("Lunar Diplomacy 2"), "lunardiplomacy2");
    }

    #[test]
    fn test_normalize_key_empty() {
        assert_eq!(normalize_key(""), "");
        assert_eq!(normalize_key(" - "), "");
    }

    #[test]
    fn test_none_if_blank_whitespace_is_blank() {
        assert_eq!(none_if_blank("\t\n"), None);
        assert_eq!(none_if_blank(" a "), Some("a"));
    }

    #[test]
    fn test_trimmed_non_blank() {
        assert_eq!(
            Some("  Grants the lamp. ".to_string()).trimmed_non_blank(),
            Some("Grants the lamp.".to_string())
        );
        assert_eq!(Some(String::new()).trimmed_non_blank(), None);
    }
}

//! Lamp instructions embedded in rationale text.

use std::sync::OnceLock;

static LAMP_ON_REGEX: OnceLock<regex_lite::Regex> = OnceLock::new();

/// Title of the follow-up step a lamp instruction produces.
pub const LAMP_STEP_TITLE: &str = "Use lamp";

/// The lamp instruction in `text`: everything from "lamp on <skill>" to the end, trimmed.
pub fn extract_lamp_instruction(text: &str) -> Option<&str> {
    if text.trim().is_empty() {
        return None;
    }
    let re = LAMP_ON_REGEX.get_or_init(|| {
        regex_lite::Regex::new(r"(?i)\blamp\s+on\s+([a-z ]+)\b")
            .expect("LAMP_ON_REGEX pattern is invalid")
    });
    let found = re.find(text)?;
    Some(text[found.start()..].trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instruction_at_start_is_returned_unchanged() {
        assert_eq!(
            extract_lamp_instruction("Lamp on Firemaking after finishing this."),
            Some("Lamp on Firemaking after finishing this.")
        );
    }

    #[test]
    fn instruction_runs_from_match_to_end_of_text() {
        assert_eq!(
            extract_lamp_instruction("Good xp. Use the LAMP ON herblore  "),
            Some("LAMP ON herblore")
        );
    }

    #[test]
    fn text_without_instruction_yields_none() {
        assert_eq!(extract_lamp_instruction("Rewards an antique lamp."), None);
        assert_eq!(extract_lamp_instruction("Clamp on rope"), None);
        assert_eq!(extract_lamp_instruction(""), None);
    }
}

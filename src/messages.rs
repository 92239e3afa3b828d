//! Canned emergency messages keyed by request path.

/// Contact attribute the selected message travels under; the contact flow
/// reads it back to speak the text.
pub const EMERGENCY_MESSAGE_ATTRIBUTE: &str = "emergencyMessage";

/// Used whenever the path is unrecognized or no custom text was supplied.
pub const FALLBACK_MESSAGE: &str = "There is an emergency. Please respond immediately.";

const BOSS_MESSAGE: &str = "Your boss needs you back at the office immediately.";
const MOM_MESSAGE: &str = "Your mom needs you to come home right away. It is urgent.";
const POLICE_MESSAGE: &str =
    "This is an urgent call. The police need to speak with you immediately.";
const SISTER_MESSAGE: &str = "Your sister has an emergency and needs your help right now.";

// Path is matched with surrounding slashes stripped, so "/boss" and "boss"
// select the same message.
pub fn select_message(path: &str, custom_message: Option<&str>) -> String {
    match path.trim_matches('/') {
        "boss" => BOSS_MESSAGE.to_string(),
        "mom" => MOM_MESSAGE.to_string(),
        "police" => POLICE_MESSAGE.to_string(),
        "sister" => SISTER_MESSAGE.to_string(),
        "custom" => custom_message
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map_or_else(|| FALLBACK_MESSAGE.to_string(), str::to_string),
        _ => FALLBACK_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_select_their_canned_message() {
        assert_eq!(select_message("/boss", None), BOSS_MESSAGE);
        assert_eq!(select_message("/mom", None), MOM_MESSAGE);
        assert_eq!(select_message("/police", None), POLICE_MESSAGE);
        assert_eq!(select_message("/sister", None), SISTER_MESSAGE);
    }

    #[test]
    fn canned_messages_are_distinct() {
        let messages = [BOSS_MESSAGE, MOM_MESSAGE, POLICE_MESSAGE, SISTER_MESSAGE];
        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn surrounding_slashes_are_ignored() {
        assert_eq!(select_message("boss", None), BOSS_MESSAGE);
        assert_eq!(select_message("/boss/", None), BOSS_MESSAGE);
    }

    #[test]
    fn unknown_and_root_paths_fall_back() {
        assert_eq!(select_message("/unknown", None), FALLBACK_MESSAGE);
        assert_eq!(select_message("/", None), FALLBACK_MESSAGE);
        assert_eq!(select_message("", None), FALLBACK_MESSAGE);
    }

    #[test]
    fn custom_path_uses_the_supplied_text() {
        assert_eq!(
            select_message("/custom", Some("  Meet me outside. ")),
            "Meet me outside."
        );
    }

    #[test]
    fn custom_path_without_text_falls_back() {
        assert_eq!(select_message("/custom", None), FALLBACK_MESSAGE);
        assert_eq!(select_message("/custom", Some("   ")), FALLBACK_MESSAGE);
    }
}

/// Text already equal to its uppercase form (contains nothing uppercasing would change).
#[inline]
pub fn is_upper(text: &str) -> bool {
    text == text.to_uppercase()
}

/// Fully uppercase text becomes lowercase, anything else becomes uppercase.
/// Mixed case does not survive two toggles.
pub fn toggle_case(text: &str) -> String {
    let upper = text.to_uppercase();
    if text == upper {
        return text.to_lowercase();
    }
    upper
}

#[cfg(test)]
mod tests {
    use super::{is_upper, toggle_case};

    #[test]
    fn empty() {
        assert_eq!(toggle_case(""), "");
    }

    #[test]
    fn single_char() {
        assert_eq!(toggle_case("a"), "A");
        assert_eq!(toggle_case("A"), "a");
    }

    #[test]
    fn mixed_goes_up() {
        assert_eq!(toggle_case("Hello World"), "HELLO WORLD");
        assert_eq!(toggle_case("hello world"), "HELLO WORLD");
        assert_eq!(toggle_case("HELLO WORLD"), "hello world");
    }

    #[test]
    fn caseless_chars() {
        assert_eq!(toggle_case("Hello123!@#"), "HELLO123!@#");
        assert_eq!(toggle_case("HELLO123!@#"), "hello123!@#");
        assert_eq!(toggle_case("1234 !?"), "1234 !?");
        assert_eq!(toggle_case(&toggle_case("1234 !?")), "1234 !?");
    }

    #[test]
    fn whitespace() {
        assert_eq!(toggle_case("  hello  world  "), "  HELLO  WORLD  ");
        assert_eq!(toggle_case(" \t\n "), " \t\n ");
        assert_eq!(toggle_case("line one\nLINE TWO"), "LINE ONE\nLINE TWO");
    }

    #[test]
    fn unicode() {
        assert_eq!(toggle_case("café résumé"), "CAFÉ RÉSUMÉ");
        assert_eq!(toggle_case("CAFÉ RÉSUMÉ"), "café résumé");
        assert_eq!(toggle_case("straße"), "STRASSE");
        assert_eq!(toggle_case("🦀 crab"), "🦀 CRAB");
        assert_eq!(toggle_case("🦀"), "🦀");
    }

    #[test]
    fn not_a_rotation() {
        let mixed = "Hello World";
        assert_ne!(toggle_case(&toggle_case(mixed)), mixed);
        assert_eq!(toggle_case(&toggle_case(mixed)), "hello world");
        let upper = "SHOUT 42";
        assert_eq!(toggle_case(&toggle_case(upper)), upper);
    }

    #[test]
    fn upper_predicate() {
        assert!(is_upper(""));
        assert!(is_upper("ABC 1"));
        assert!(is_upper("42"));
        assert!(!is_upper("AbC"));
        assert!(!is_upper("é"));
    }
}

/// Map the letter-case pattern of `original` onto `replacement`.
///
/// - all-uppercase originals uppercase the whole replacement
/// - all-lowercase originals lowercase the whole replacement
/// - otherwise only the first character of the replacement is adjusted to
///   match the first character of the original
///
/// Originals without any cased letters (digits, underscores) count as
/// uppercase, since they equal their own uppercase form.
///
/// # Example
///
/// ```
/// use kirstify::retain_case;
///
/// assert_eq!(retain_case("Apple", "banana"), "Banana");
/// assert_eq!(retain_case("APPLE", "banana"), "BANANA");
/// assert_eq!(retain_case("apple", "Banana"), "banana");
/// ```
pub fn retain_case(original: &str, replacement: &str) -> String {
    if original.to_uppercase() == original {
        return replacement.to_uppercase();
    }

    if original.to_lowercase() == original {
        return replacement.to_lowercase();
    }

    let (Some(original_first), Some(replacement_first)) =
        (original.chars().next(), replacement.chars().next())
    else {
        return replacement.to_string();
    };
    let rest = &replacement[replacement_first.len_utf8()..];

    if original_first.is_uppercase() && replacement_first.is_lowercase() {
        return format!("{}{}", replacement_first.to_uppercase(), rest);
    }

    if original_first.is_lowercase() && replacement_first.is_uppercase() {
        return format!("{}{}", replacement_first.to_lowercase(), rest);
    }

    replacement.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalized_original() {
        assert_eq!(retain_case("Apple", "banana"), "Banana");
    }

    #[test]
    fn test_uppercase_original() {
        assert_eq!(retain_case("APPLE", "banana"), "BANANA");
        assert_eq!(retain_case("APPLE", "BaNaNa"), "BANANA");
    }

    #[test]
    fn test_lowercase_original() {
        assert_eq!(retain_case("apple", "Banana"), "banana");
        assert_eq!(retain_case("apple", "banana"), "banana");
        assert_eq!(retain_case("apple", "BANANA"), "banana");
    }

    #[test]
    fn test_mixed_case_keeps_tail() {
        // Only the first character is touched for mixed-case originals
        assert_eq!(retain_case("McDonald", "burgerJoint"), "BurgerJoint");
        assert_eq!(retain_case("iPhone", "Telephone"), "telephone");
        assert_eq!(retain_case("iPhone", "TeLePhone"), "teLePhone");
    }

    #[test]
    fn test_mixed_case_matching_first_is_unchanged() {
        assert_eq!(retain_case("McDonald", "BurgerJoint"), "BurgerJoint");
        assert_eq!(retain_case("I'm", "I am"), "I am");
    }

    #[test]
    fn test_uncased_original_counts_as_uppercase() {
        assert_eq!(retain_case("42", "answer"), "ANSWER");
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(retain_case("", "word"), "WORD");
        assert_eq!(retain_case("Word", ""), "");
    }

    #[test]
    fn test_non_ascii_first_character() {
        assert_eq!(retain_case("École", "établissement"), "Établissement");
        assert_eq!(retain_case("ÉCOLE", "lycée"), "LYCÉE");
    }

    #[test]
    fn test_leading_punctuation_in_replacement() {
        // No cased first character in the replacement: leave it as-is
        assert_eq!(retain_case("Tis", "'tis"), "'tis");
    }
}

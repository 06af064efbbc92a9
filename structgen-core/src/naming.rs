//! snake_case to PascalCase conversion for emitted identifiers.

/// Converts a snake_case identifier into PascalCase.
///
/// Each `_`-separated segment has its first character uppercased when it is
/// an ASCII lowercase letter; everything else is left untouched, with no
/// forced lowercasing of the remainder and no Unicode-aware casing. Empty
/// segments from leading, trailing or doubled underscores contribute
/// nothing.
pub fn to_pascal_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for segment in name.split('_') {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            if first.is_ascii_lowercase() {
                out.push(first.to_ascii_uppercase());
            } else {
                out.push(first);
            }
            out.extend(chars);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_conversion() {
        assert_eq!(to_pascal_case("user_name"), "UserName");
        assert_eq!(to_pascal_case("id"), "Id");
        assert_eq!(to_pascal_case("created_at"), "CreatedAt");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_empty_segments_contribute_nothing() {
        assert_eq!(to_pascal_case("_id"), "Id");
        assert_eq!(to_pascal_case("user__name"), "UserName");
        assert_eq!(to_pascal_case("trailing_"), "Trailing");
    }

    #[test]
    fn test_non_lowercase_leading_chars_are_untouched() {
        assert_eq!(to_pascal_case("ID"), "ID");
        assert_eq!(to_pascal_case("2fa_code"), "2faCode");
        assert_eq!(to_pascal_case("ütf_col"), "ütfCol");
    }

    #[test]
    fn test_remainder_is_not_lowercased() {
        assert_eq!(to_pascal_case("userID"), "UserID");
        assert_eq!(to_pascal_case("aBC_dEF"), "ABCDEF");
    }
}

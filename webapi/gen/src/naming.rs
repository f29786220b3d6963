//! Identifier normalization for schema names.

/// Converts a schema name to PascalCase.
///
/// Underscores become word breaks, every word gets an uppercase first
/// letter, and the words are joined with nothing in between. Names that are
/// already PascalCase pass through unchanged, so the conversion is
/// idempotent.
///
/// ## Examples
///
/// ```
/// use steam_webapi_gen::naming::pascal_case;
///
/// assert_eq!(pascal_case("get_app_list"), "GetAppList");
/// assert_eq!(pascal_case("steamids"), "Steamids");
/// assert_eq!(pascal_case("GetPlayerSummaries"), "GetPlayerSummaries");
/// ```
pub fn pascal_case(raw: &str) -> String {
    raw.replace('_', " ")
        .split_whitespace()
        .map(capitalize_first)
        .collect()
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_case_becomes_pascal() {
        assert_eq!(pascal_case("get_app_list"), "GetAppList");
        assert_eq!(pascal_case("max_length"), "MaxLength");
    }

    #[test]
    fn single_word_gets_capitalized() {
        assert_eq!(pascal_case("steamids"), "Steamids");
        assert_eq!(pascal_case("appid"), "Appid");
    }

    #[test]
    fn idempotent_on_pascal_input() {
        assert_eq!(pascal_case("GetPlayerSummaries"), "GetPlayerSummaries");
        assert_eq!(pascal_case(&pascal_case("get_app_list")), "GetAppList");
    }

    #[test]
    fn interface_names_pass_through() {
        assert_eq!(pascal_case("ISteamUser"), "ISteamUser");
    }

    #[test]
    fn collapses_repeated_separators() {
        assert_eq!(pascal_case("a__b"), "AB");
        assert_eq!(pascal_case(""), "");
    }
}

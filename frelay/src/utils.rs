//! Relay utility functions.

/// Expand `${VAR}` placeholders in relay config text.
///
/// Unset variables expand to an empty string. A `${` with no closing `}` is
/// kept as written.
pub fn expand_env_vars(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("${") {
        result.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            result.push_str(&rest[start..]);
            return result;
        };
        if let Ok(value) = std::env::var(&after[..end]) {
            result.push_str(&value);
        }
        rest = &after[end + 1..];
    }

    result.push_str(rest);
    result
}

#[cfg(test)]
mod tests {
    use super::expand_env_vars;

    #[test]
    fn text_without_placeholders_is_unchanged() {
        assert_eq!(expand_env_vars("plain $text {here}"), "plain $text {here}");
    }

    #[test]
    fn unknown_variables_expand_to_empty() {
        assert_eq!(
            expand_env_vars("key=${FRELAY_SURELY_UNSET_VARIABLE_1234};"),
            "key=;"
        );
    }

    #[test]
    fn unterminated_placeholder_is_kept_literally() {
        let input = "api_key = \"${TURING_KEY\"\nreply = \"Hello!\"\n";
        assert_eq!(expand_env_vars(input), input);
    }

    #[test]
    fn known_variables_expand_to_their_value() {
        let path = std::env::var("PATH").expect("PATH should be set");
        assert_eq!(expand_env_vars("p=${PATH}"), format!("p={path}"));
    }
}

/// Trimmed field value, treating absent and whitespace-only as missing.
pub fn non_empty(field: Option<String>) -> Option<String> {
    field
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_blank_fields_are_missing() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some("   ".to_string())), None);
    }

    #[test]
    fn values_are_trimmed() {
        assert_eq!(non_empty(Some("  Soap ".to_string())), Some("Soap".to_string()));
    }
}

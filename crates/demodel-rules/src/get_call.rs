//! Convert string-keyed getter calls to field access

use crate::registry::Rule;
use demodel_core::Edit;
use regex::Regex;

/// Rewrites `return get("field");` statements to `return field;`
pub struct GetCallRule;

impl Rule for GetCallRule {
    fn name(&self) -> &'static str {
        "get_call"
    }

    fn description(&self) -> &'static str {
        "Convert return get(\"field\") to return field"
    }

    fn check(&self, source: &str) -> Vec<Edit> {
        // Anchoring on the return keyword keeps get(...) expressions in any
        // other position out of reach.
        let re = Regex::new(
            r#"\breturn (?:this\.)?get\s*\(\s*["']([A-Za-z][\w-]*)["']\s*\)\s*;"#,
        )
        .unwrap();

        re.captures_iter(source)
            .map(|cap| {
                let full = cap.get(0).unwrap();
                let field = &cap[1];
                Edit::new(
                    full.start(),
                    full.end(),
                    format!("return {};", field),
                    format!("Convert return get(\"{}\") to field access", field),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use demodel_core::apply_edits;

    fn check(source: &str) -> Vec<Edit> {
        GetCallRule.check(source)
    }

    fn convert(source: &str) -> (String, usize) {
        let edits = check(source);
        let count = edits.len();
        (apply_edits(source, &edits).unwrap(), count)
    }

    #[test]
    fn test_double_quotes() {
        assert_eq!(
            convert("return get(\"fooBar\");"),
            ("return fooBar;".to_string(), 1)
        );
    }

    #[test]
    fn test_single_quotes() {
        assert_eq!(
            convert("return get('fooBar');"),
            ("return fooBar;".to_string(), 1)
        );
    }

    #[test]
    fn test_spaces_inside_parens() {
        assert_eq!(
            convert("return get( 'fooBar' );"),
            ("return fooBar;".to_string(), 1)
        );
    }

    #[test]
    fn test_this_qualifier() {
        assert_eq!(
            convert("return this.get(\"lastDay\");"),
            ("return lastDay;".to_string(), 1)
        );
    }

    #[test]
    fn test_indentation_preserved() {
        let source = "public class Test {\n public Object getFooBar() {\n     return get('fooBar');\n }\n}";
        let expected = "public class Test {\n public Object getFooBar() {\n     return fooBar;\n }\n}";

        assert_eq!(convert(source), (expected.to_string(), 1));
    }

    #[test]
    fn test_plain_getter_call_unchanged() {
        assert!(check("return getFooBar();").is_empty());
    }

    #[test]
    fn test_other_receiver_unchanged() {
        assert!(check("return config.get(\"fooBar\");").is_empty());
    }

    #[test]
    fn test_identifier_suffix_unchanged() {
        assert!(check("return forget(\"fooBar\");").is_empty());
    }

    #[test]
    fn test_non_returned_get_unchanged() {
        assert!(check("Object x = get(\"fooBar\");").is_empty());
    }

    #[test]
    fn test_multiple_returns() {
        let source = "return get(\"a\");\nreturn get(\"b\");\n";
        assert_eq!(
            convert(source),
            ("return a;\nreturn b;\n".to_string(), 2)
        );
    }
}

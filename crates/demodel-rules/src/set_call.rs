//! Convert string-keyed setter calls to field assignments

use crate::registry::Rule;
use demodel_core::Edit;
use regex::Regex;

/// Rewrites `set("field", value);` calls to `this.field = value;`
pub struct SetCallRule;

impl Rule for SetCallRule {
    fn name(&self) -> &'static str {
        "set_call"
    }

    fn description(&self) -> &'static str {
        "Convert set(\"field\", value) calls to this.field = value"
    }

    fn check(&self, source: &str) -> Vec<Edit> {
        // Whitespace may include newlines, so a call split across lines
        // still matches. Field and value must both look like plain
        // identifiers; anything else is left alone.
        let re = Regex::new(
            r#"(?:([A-Za-z_$][\w$]*)\.)?\bset\s*\(\s*["']([A-Za-z][\w-]*)["']\s*,\s*([A-Za-z][\w-]*)\s*\)\s*;"#,
        )
        .unwrap();

        let mut edits = Vec::new();

        for cap in re.captures_iter(source) {
            let full = cap.get(0).unwrap();

            // Only bare calls and this.set(...) qualify; a call on any
            // other receiver is a different API.
            match cap.get(1) {
                Some(receiver) if receiver.as_str() != "this" => continue,
                None if source[..full.start()].ends_with('.') => continue,
                _ => {}
            }

            let field = &cap[2];
            let value = &cap[3];

            edits.push(Edit::new(
                full.start(),
                full.end(),
                format!("this.{} = {};", field, value),
                format!("Convert set(\"{}\", ...) to field assignment", field),
            ));
        }

        edits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use demodel_core::apply_edits;

    fn check(source: &str) -> Vec<Edit> {
        SetCallRule.check(source)
    }

    fn convert(source: &str) -> (String, usize) {
        let edits = check(source);
        let count = edits.len();
        (apply_edits(source, &edits).unwrap(), count)
    }

    #[test]
    fn test_double_quotes() {
        assert_eq!(
            convert("set(\"fooBar\", fooBar);"),
            ("this.fooBar = fooBar;".to_string(), 1)
        );
    }

    #[test]
    fn test_single_quotes() {
        assert_eq!(
            convert("set('fooBar', fooBar);"),
            ("this.fooBar = fooBar;".to_string(), 1)
        );
    }

    #[test]
    fn test_space_after_paren() {
        assert_eq!(
            convert("set( 'fooBar', fooBar);"),
            ("this.fooBar = fooBar;".to_string(), 1)
        );
    }

    #[test]
    fn test_spaces_around_arguments() {
        assert_eq!(
            convert("set( \"fooBar\" , fooBar );"),
            ("this.fooBar = fooBar;".to_string(), 1)
        );
    }

    #[test]
    fn test_this_qualifier() {
        assert_eq!(
            convert("this.set(\"fooBar\", fooBar);"),
            ("this.fooBar = fooBar;".to_string(), 1)
        );
    }

    #[test]
    fn test_indentation_preserved() {
        let source = "public class Test {\n\tpublic void setFooBar(Object fooBar) {\n\t\tset(\"fooBar\", fooBar);\n\t}\n}";
        let expected = "public class Test {\n\tpublic void setFooBar(Object fooBar) {\n\t\tthis.fooBar = fooBar;\n\t}\n}";

        assert_eq!(convert(source), (expected.to_string(), 1));
    }

    #[test]
    fn test_call_split_across_lines() {
        let source = "set(\"fooBar\",\n\t\tfooBar);";
        assert_eq!(convert(source), ("this.fooBar = fooBar;".to_string(), 1));
    }

    #[test]
    fn test_other_receiver_unchanged() {
        assert!(check("model.set(\"fooBar\", fooBar);").is_empty());
    }

    #[test]
    fn test_call_chain_receiver_unchanged() {
        assert!(check("getModel().set(\"fooBar\", fooBar);").is_empty());
    }

    #[test]
    fn test_identifier_suffix_unchanged() {
        assert!(check("offset(\"fooBar\", fooBar);").is_empty());
    }

    #[test]
    fn test_non_identifier_value_unchanged() {
        assert!(check("set(\"fooBar\", foo.getBar());").is_empty());
        assert!(check("set(\"fooBar\", 42);").is_empty());
    }

    #[test]
    fn test_multiple_calls() {
        let source = "set(\"a\", a);\nset(\"b\", b);\n";
        assert_eq!(
            convert(source),
            ("this.a = a;\nthis.b = b;\n".to_string(), 2)
        );
    }
}

//! File processing logic for demodel

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;

use demodel_rules::RuleRegistry;

use crate::output::MatchInfo;

/// Result of processing a single file
pub struct ProcessResult {
    /// Per-rule match counts
    pub matches: Vec<MatchInfo>,
    /// Original source code
    pub old_source: String,
    /// New source code (only if at least one rewrite occurred)
    pub new_source: Option<String>,
}

/// A file is eligible when its name carries the Java source suffix
pub fn is_eligible(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "java")
}

/// Process a single file.
///
/// Returns `Ok(None)` when the file is not eligible; in that case it is
/// neither opened for reading nor for writing. The caller decides whether
/// the rewritten text is persisted.
pub fn process_file(
    path: &Path,
    enabled_rules: &HashSet<String>,
) -> Result<Option<ProcessResult>> {
    if !is_eligible(path) {
        return Ok(None);
    }

    let source_code = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let registry = RuleRegistry::new();
    let rewrite = registry
        .rewrite_all(&source_code, enabled_rules)
        .with_context(|| format!("Failed to rewrite {}", path.display()))?;

    let matches: Vec<MatchInfo> = rewrite
        .matches
        .iter()
        .map(|m| MatchInfo {
            rule: m.rule.to_string(),
            count: m.count,
        })
        .collect();

    if rewrite.count == 0 {
        return Ok(Some(ProcessResult {
            matches,
            old_source: source_code,
            new_source: None,
        }));
    }

    Ok(Some(ProcessResult {
        matches,
        old_source: source_code,
        new_source: Some(rewrite.text),
    }))
}

/// Write the processed result back to the file, in place
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_rules() -> HashSet<String> {
        RuleRegistry::new()
            .all_names()
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    #[test]
    fn test_is_eligible() {
        assert!(is_eligible(Path::new("Change.java")));
        assert!(is_eligible(Path::new("src/model/Change.java")));
        assert!(!is_eligible(Path::new("Change.txt")));
        assert!(!is_eligible(Path::new("Makefile")));
        assert!(!is_eligible(Path::new("Change.java.bak")));
    }

    #[test]
    fn test_ineligible_file_not_read() {
        // The path does not exist; an eligibility skip must not try to read it.
        let result = process_file(Path::new("no/such/file.txt"), &all_rules()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_missing_java_file_is_an_error() {
        let result = process_file(Path::new("no/such/File.java"), &all_rules());
        assert!(result.is_err());
    }

    #[test]
    fn test_no_changes_has_no_new_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Plain.java");
        std::fs::write(&path, "public class Plain {\n}\n").unwrap();

        let result = process_file(&path, &all_rules()).unwrap().unwrap();

        assert!(result.matches.is_empty());
        assert!(result.new_source.is_none());
        assert_eq!(result.old_source, "public class Plain {\n}\n");
    }

    #[test]
    fn test_rewrites_produce_new_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Model.java");
        std::fs::write(
            &path,
            "public class Model extends BaseModel {\n\tpublic Object getFoo() {\n\t\treturn get(\"foo\");\n\t}\n}\n",
        )
        .unwrap();

        let result = process_file(&path, &all_rules()).unwrap().unwrap();
        let new_source = result.new_source.unwrap();

        assert!(new_source.contains("public class Model {"));
        assert!(new_source.contains("return foo;"));
        let count: usize = result.matches.iter().map(|m| m.count).sum();
        assert_eq!(count, 2);

        // Processing alone must not touch the file.
        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert!(on_disk.contains("extends BaseModel"));
    }

    #[test]
    fn test_write_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Model.java");
        std::fs::write(&path, "old").unwrap();

        write_file(&path, "new contents").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new contents");
    }
}

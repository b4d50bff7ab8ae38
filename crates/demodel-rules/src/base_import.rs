//! Remove the legacy base-class import line

use crate::registry::Rule;
use demodel_core::Edit;
use regex::Regex;

/// Removes import statements for the two GXT base-class variants
pub struct BaseImportRule;

impl Rule for BaseImportRule {
    fn name(&self) -> &'static str {
        "base_import"
    }

    fn description(&self) -> &'static str {
        "Remove com.extjs.gxt.ui.client.data.BaseModel(Data) import lines"
    }

    fn check(&self, source: &str) -> Vec<Edit> {
        // The match spans the whole line, newline included, so removal
        // leaves no blank line behind. Only the two literal qualified names
        // are recognized.
        let re = Regex::new(
            r"(?m)^import com\.extjs\.gxt\.ui\.client\.data\.(BaseModel(?:Data)?);[ \t]*\r?\n",
        )
        .unwrap();

        re.captures_iter(source)
            .map(|cap| {
                let full = cap.get(0).unwrap();
                Edit::new(
                    full.start(),
                    full.end(),
                    String::new(),
                    format!("Remove '{}' import", &cap[1]),
                )
            })
            .collect()
    }
}

//! Drop the legacy base class from declaration lines

use crate::registry::Rule;
use demodel_core::Edit;
use regex::Regex;

/// Removes the `extends BaseModel(Data)` fragment from class declarations
pub struct SuperclassRule;

impl Rule for SuperclassRule {
    fn name(&self) -> &'static str {
        "superclass"
    }

    fn description(&self) -> &'static str {
        "Drop 'extends BaseModel(Data)' from class declarations"
    }

    fn check(&self, source: &str) -> Vec<Edit> {
        // Anchored to a single physical line. The word boundaries keep
        // identifiers that merely contain "extends", and longer type names
        // such as BaseModelFactory, out of reach. At most one space after
        // the type name is consumed, so an implements clause or brace keeps
        // its position on the line.
        let re = Regex::new(
            r"(?m)^[^\n]*?(\bextends (?:com\.extjs\.gxt\.ui\.client\.data\.)?(BaseModel(?:Data)?)\b ?)",
        )
        .unwrap();

        re.captures_iter(source)
            .map(|cap| {
                let frag = cap.get(1).unwrap();
                Edit::new(
                    frag.start(),
                    frag.end(),
                    String::new(),
                    format!("Drop 'extends {}' from declaration", &cap[2]),
                )
            })
            .collect()
    }
}

//! demodel-rules: rewrite rules for the GXT model migration
//!
//! Available rules:
//! - base_import: Remove com.extjs.gxt.ui.client.data.BaseModel(Data) import lines
//! - superclass: Drop 'extends BaseModel(Data)' from class declarations
//! - set_call: Convert set("field", value) calls to this.field = value
//! - get_call: Convert return get("field") to return field

pub mod base_import;
pub mod get_call;
pub mod registry;
pub mod set_call;
pub mod superclass;

pub use base_import::BaseImportRule;
pub use get_call::GetCallRule;
pub use registry::{Rewrite, Rule, RuleMatch, RuleRegistry};
pub use set_call::SetCallRule;
pub use superclass::SuperclassRule;

use demodel_core::EditError;

/// Run the full rewrite pipeline with every rule enabled.
///
/// This is the single transformation the tool applies per file: source text
/// in, rewritten text and total match count out.
pub fn convert_all(source: &str) -> Result<Rewrite, EditError> {
    let registry = RuleRegistry::new();
    let enabled = registry
        .all_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    registry.rewrite_all(source, &enabled)
}

//! Byte-range source code editing with format preservation

use thiserror::Error;

/// Errors that can occur during edit application
#[derive(Error, Debug)]
pub enum EditError {
    #[error("Overlapping edits detected at offset {0}")]
    OverlappingEdits(usize),

    #[error("Edit range {start}..{end} out of bounds for source length {len}")]
    RangeOutOfBounds { start: usize, end: usize, len: usize },
}

/// Represents a single text rewrite operation
#[derive(Debug, Clone)]
pub struct Edit {
    /// Start of the byte range to replace
    pub start: usize,
    /// End of the byte range to replace (exclusive)
    pub end: usize,
    /// The replacement text
    pub replacement: String,
    /// Human-readable description of the rewrite
    pub message: String,
}

impl Edit {
    /// Create a new edit
    pub fn new(
        start: usize,
        end: usize,
        replacement: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            start,
            end,
            replacement: replacement.into(),
            message: message.into(),
        }
    }
}

/// Apply edits to source code, preserving surrounding text byte-for-byte
///
/// Edits are applied in reverse order (from end to start) to maintain
/// valid offsets throughout the process.
///
/// # Arguments
/// * `source` - The original source code
/// * `edits` - Slice of edits to apply
///
/// # Returns
/// * `Ok(String)` - The modified source code
/// * `Err(EditError)` - If edits overlap or are out of bounds
pub fn apply_edits(source: &str, edits: &[Edit]) -> Result<String, EditError> {
    if edits.is_empty() {
        return Ok(source.to_string());
    }

    // Sort edits by start position (descending) for safe replacement
    let mut sorted_edits: Vec<&Edit> = edits.iter().collect();
    sorted_edits.sort_by(|a, b| b.start.cmp(&a.start));

    // Validate: check for overlapping edits and bounds
    let source_len = source.len();
    let mut prev_start: Option<usize> = None;

    for edit in &sorted_edits {
        if edit.end > source_len || edit.start > edit.end {
            return Err(EditError::RangeOutOfBounds {
                start: edit.start,
                end: edit.end,
                len: source_len,
            });
        }

        // Check for overlap with the edit that follows in the source
        if let Some(prev) = prev_start {
            if edit.end > prev {
                return Err(EditError::OverlappingEdits(edit.start));
            }
        }

        prev_start = Some(edit.start);
    }

    // Apply edits from end to start
    let mut result = source.to_string();

    for edit in sorted_edits {
        result.replace_range(edit.start..edit.end, &edit.replacement);
    }

    Ok(result)
}

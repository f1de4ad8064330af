//! Completion text post-processing
//!
//! Models asked for bare JSON still wrap it in a Markdown fence now and then.
//! Fence markers are removed before the text is parsed strictly as JSON.

use crate::schedule::model::{GeneratedSchedule, MaintenanceItem};
use anyhow::Context;

const FENCE: &str = "```";

/// Remove every code-fence marker (bare or tagged `json`) and trim
///
/// Markers are removed wherever they appear, nested ones included, until none
/// are left. The result never contains a fence, so a second pass is a no-op.
pub fn strip_code_fences(text: &str) -> String {
    let mut body = text.to_string();
    while body.contains(FENCE) {
        body = body
            .replace("```json\n", "")
            .replace("```json", "")
            .replace("```\n", "")
            .replace(FENCE, "");
    }
    body.trim().to_string()
}

/// Parse the model's completion into schedule items
///
/// Items are kept as returned; only the enclosing document must be JSON with
/// a `schedule` array.
///
/// # Errors
/// Fails if the de-fenced text is not JSON or has no `schedule` array.
pub fn parse_schedule(completion: &str) -> anyhow::Result<Vec<MaintenanceItem>> {
    let json = strip_code_fences(completion);
    let generated: GeneratedSchedule = serde_json::from_str(&json).with_context(|| {
        format!(
            "Failed to parse schedule JSON from completion ({} chars)",
            completion.len()
        )
    })?;
    Ok(generated.schedule)
}

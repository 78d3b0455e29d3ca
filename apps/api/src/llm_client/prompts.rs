// Shared prompt fragments and response schemas.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

use serde_json::{json, Value};

/// Instruction appended to prompts whose output is parsed as JSON.
pub const JSON_ONLY_INSTRUCTION: &str = "Do not add any introductory text, closing remarks, \
    or formatting beyond the JSON structure.";

/// Response schema for an object holding a single array of strings under `field`.
/// Uses the provider's OpenAPI-subset type names.
pub fn string_array_schema(field: &str, item_description: &str) -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            field: {
                "type": "ARRAY",
                "items": {
                    "type": "STRING",
                    "description": item_description
                }
            }
        },
        "required": [field]
    })
}

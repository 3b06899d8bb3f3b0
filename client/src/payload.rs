//! Page payload codec.
//!
//! DESIGN
//! ======
//! The server assigns the payload to a page global in an inline script. The
//! JSON is escaped so `</script>`, HTML comments, and JS line separators in
//! article text cannot break out of the script element. The escapes are
//! valid JSON string escapes, so decoding needs no special handling.

#[cfg(test)]
#[path = "payload_test.rs"]
mod payload_test;

use state_api::InitialData;

/// Name of the page global holding the payload.
pub const INITIAL_DATA_GLOBAL: &str = "initialData";

/// Error returned by the payload codec.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    /// The payload could not be serialized.
    #[error("payload encode failed: {0}")]
    Encode(serde_json::Error),
    /// Malformed JSON, or a payload that fails validation.
    #[error("payload decode failed: {0}")]
    Decode(serde_json::Error),
}

/// Serialize the payload as JSON that is safe inside a `<script>` element.
///
/// # Errors
///
/// Returns [`PayloadError::Encode`] if serialization fails.
pub fn encode_initial_data(data: &InitialData) -> Result<String, PayloadError> {
    let json = serde_json::to_string(data).map_err(PayloadError::Encode)?;
    Ok(escape_script_json(&json))
}

/// Inline script text assigning the payload to `window.initialData`.
///
/// # Errors
///
/// Returns [`PayloadError::Encode`] if serialization fails.
pub fn initial_data_script(data: &InitialData) -> Result<String, PayloadError> {
    let json = encode_initial_data(data)?;
    Ok(format!("window.{INITIAL_DATA_GLOBAL} = {json};"))
}

/// Decode a payload read back from the page.
///
/// # Errors
///
/// Returns [`PayloadError::Decode`] for malformed JSON or a payload that
/// fails validation (for example an article whose author is missing).
pub fn decode_initial_data(json: &str) -> Result<InitialData, PayloadError> {
    serde_json::from_str(json).map_err(PayloadError::Decode)
}

fn escape_script_json(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for ch in json.chars() {
        match ch {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(ch),
        }
    }
    out
}

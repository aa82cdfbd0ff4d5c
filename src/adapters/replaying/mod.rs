//! Replaying adapters that replay recorded interactions.

pub mod transport;

use crate::ports::TransportError;

pub use transport::ReplayingTransport;

/// Decode a recorded `{"Ok": v}` / `{"Err": msg}` output.
///
/// Mirror of `recording::record_result`. An output following neither
/// convention is reported as an error.
pub(crate) fn replay_result(output: serde_json::Value) -> Result<serde_json::Value, TransportError> {
    match output {
        serde_json::Value::Object(mut map) if map.contains_key("Ok") => {
            Ok(map.remove("Ok").unwrap_or_default())
        }
        serde_json::Value::Object(map) if map.contains_key("Err") => {
            let message = match map.get("Err") {
                Some(serde_json::Value::String(message)) => message.clone(),
                Some(other) => other.to_string(),
                None => String::new(),
            };
            Err(TransportError::from(message))
        }
        other => Err(TransportError::from(format!(
            "Recorded output is neither Ok nor Err: {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::replay_result;
    use serde_json::json;

    #[test]
    fn ok_output_replays_value() {
        assert_eq!(replay_result(json!({"Ok": {"a": 1}})).unwrap(), json!({"a": 1}));
    }

    #[test]
    fn err_output_replays_message() {
        let err = replay_result(json!({"Err": "timed out"})).unwrap_err();
        assert_eq!(err.to_string(), "timed out");
    }

    #[test]
    fn unknown_shape_is_an_error() {
        let err = replay_result(json!(null)).unwrap_err();
        assert_eq!(err.to_string(), "Recorded output is neither Ok nor Err: null");
    }
}

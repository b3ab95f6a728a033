use serde_json::Value;

/// Extract the user-facing message from a server error body.
///
/// Precedence, fixed for compatibility with the existing backend:
/// `error`, then `message`, then every entry of the `errors` field map
/// flattened and joined with newlines, then the caller's fallback.
pub fn extract_error_message(body: &Value, fallback: &str) -> String {
    if let Some(msg) = body.get("error").and_then(Value::as_str) {
        return msg.to_string();
    }

    if let Some(msg) = body.get("message").and_then(Value::as_str) {
        return msg.to_string();
    }

    if let Some(errors) = body.get("errors").and_then(Value::as_object) {
        let mut lines = Vec::new();
        for field_errors in errors.values() {
            match field_errors {
                Value::Array(items) => {
                    lines.extend(items.iter().filter_map(Value::as_str).map(str::to_string));
                }
                Value::String(s) => lines.push(s.clone()),
                _ => {}
            }
        }
        if !lines.is_empty() {
            return lines.join("\n");
        }
    }

    fallback.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const FALLBACK: &str = "Error al crear cita";

    #[test]
    fn prefers_error_field() {
        let body = json!({"error": "No autorizado", "message": "otro"});
        assert_eq!(extract_error_message(&body, FALLBACK), "No autorizado");
    }

    #[test]
    fn falls_back_to_message_field() {
        let body = json!({"message": "Cita no encontrada"});
        assert_eq!(extract_error_message(&body, FALLBACK), "Cita no encontrada");
    }

    #[test]
    fn flattens_field_errors_joined_with_newlines() {
        let body = json!({"errors": {"email": ["ya existe"], "password": ["muy corta", "sin números"]}});
        let message = extract_error_message(&body, FALLBACK);
        let mut lines: Vec<&str> = message.lines().collect();
        lines.sort_unstable();
        assert_eq!(lines, vec!["muy corta", "sin números", "ya existe"]);
    }

    #[test]
    fn single_field_error_is_returned_verbatim() {
        let body = json!({"errors": {"email": ["ya existe"]}});
        assert_eq!(extract_error_message(&body, FALLBACK), "ya existe");
    }

    #[test]
    fn empty_or_unknown_body_uses_fallback() {
        assert_eq!(extract_error_message(&Value::Null, FALLBACK), FALLBACK);
        assert_eq!(extract_error_message(&json!({"status": 500}), FALLBACK), FALLBACK);
        assert_eq!(extract_error_message(&json!({"errors": {}}), FALLBACK), FALLBACK);
    }
}

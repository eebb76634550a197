use serde_json::Value;

use super::format_scalar;

/// Headline figure of each calculation, in priority order.
const PRIORITY_KEYS: [&str; 6] = [
    "future_value",
    "final_tax",
    "present_value",
    "implied_inflation_rate_percent",
    "display",
    "distribution",
];

/// Print just the key answer value from the output.
pub fn print_minimal(value: &Value) {
    println!("{}", minimal_text(value));
}

fn minimal_text(value: &Value) -> String {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Value::Object(map) = result_obj {
        for key in PRIORITY_KEYS {
            match map.get(key) {
                Some(Value::Object(inner)) => {
                    return inner
                        .iter()
                        .map(|(k, v)| format!("{}={}", k, format_scalar(v)))
                        .collect::<Vec<_>>()
                        .join(" ");
                }
                Some(val) if !val.is_null() => return format_scalar(val),
                _ => {}
            }
        }

        if let Some((key, val)) = map.iter().next() {
            return format!("{}: {}", key, format_scalar(val));
        }
    }

    format_scalar(result_obj)
}

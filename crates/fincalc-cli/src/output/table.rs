use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::{format_scalar, row_field, ROW_FIELDS};

/// Format output as tables: scalar result fields first, then any per-row
/// breakdown, then warnings and methodology.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                print_result_table(result, map);
            } else {
                println!("{}", field_table(map));
            }
        }
        Value::Array(arr) => {
            println!("{}", rows_table(arr));
        }
        _ => {
            println!("{}", value);
        }
    }
}

fn print_result_table(result: &Value, envelope: &Map<String, Value>) {
    if let Value::Object(res_map) = result {
        let scalars: Map<String, Value> = res_map
            .iter()
            .filter(|(k, _)| !ROW_FIELDS.contains(&k.as_str()))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        println!("{}", field_table(&scalars));

        if let Some((name, rows)) = row_field(res_map) {
            println!("\n{}:", name);
            println!("{}", rows_table(rows));
        }
    } else {
        println!("{}", format_scalar(result));
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn field_table(map: &Map<String, Value>) -> Table {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        builder.push_record([key.as_str(), &cell(val)]);
    }
    builder.build()
}

fn rows_table(arr: &[Value]) -> Table {
    let mut builder = Builder::default();
    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        builder.push_record(headers.clone());
        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| match map.get(h.as_str()) {
                        Some(Value::Null) if h == "max" => "Above".to_string(),
                        Some(v) => cell(v),
                        None => String::new(),
                    })
                    .collect();
                builder.push_record(row);
            }
        }
    } else {
        for item in arr {
            builder.push_record([cell(item)]);
        }
    }
    builder.build()
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| format!("{}: {}", k, cell(v)))
            .collect::<Vec<_>>()
            .join(", "),
        Value::Array(arr) => arr.iter().map(cell).collect::<Vec<_>>().join(", "),
        _ => format_scalar(value),
    }
}

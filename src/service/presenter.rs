//! Row -> response view: cover image URL and first category.

use crate::config::ImageBucket;
use crate::store::CarRow;
use serde::Serialize;
use serde_json::Value;

/// A catalog row as sent to clients. Rebuilt on every request.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PresentedCar(pub CarRow);

pub fn present_car(mut row: CarRow, images: &ImageBucket) -> PresentedCar {
    let url = match row.get("portada") {
        Some(Value::String(name)) if !name.is_empty() => Value::String(images.object_url(name)),
        _ => Value::Null,
    };
    row.insert("portada_url".to_string(), url);

    let category = match row.get("categoria") {
        Some(Value::String(raw)) if !raw.is_empty() => first_category(raw),
        _ => None,
    };
    if let Some(c) = category {
        row.insert("categoria".to_string(), c);
    }
    PresentedCar(row)
}

/// Element `0` of the parsed column, or null when that element is missing or falsy
/// (`null`, `false`, `0`, `""`). Arrays give their first item, strings their first
/// character, objects their `"0"` key. `None` leaves the column as stored: the text is
/// not JSON, or it parses to `null`, which has no element to take.
fn first_category(raw: &str) -> Option<Value> {
    let first = match serde_json::from_str::<Value>(raw).ok()? {
        Value::Null => return None,
        Value::Array(items) => items.into_iter().next(),
        Value::String(s) => s.chars().next().map(|c| Value::String(c.to_string())),
        Value::Object(mut map) => map.remove("0"),
        Value::Bool(_) | Value::Number(_) => None,
    };
    Some(first.filter(is_truthy).unwrap_or(Value::Null))
}

fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

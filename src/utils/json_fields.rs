//! Lectura tolerante de campos JSON
//!
//! Los payloads del API de reservas no tienen forma garantizada: las claves
//! cambian de ortografía (`locationId` / `location_id`), los números llegan
//! a veces como texto y los campos faltan sin aviso. Estas funciones nunca
//! fallan: un valor ausente, vacío o de tipo incorrecto se lee como `None`.

use serde_json::Value;

/// Primer valor no nulo entre las claves candidatas, en orden
pub fn first_present<'a>(json_data: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| json_data.get(*key))
        .find(|value| !value.is_null())
}

/// Texto no vacío bajo la primera clave candidata que lo tenga
pub fn read_string(json_data: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| json_data.get(*key))
        .filter_map(|value| value.as_str())
        .map(str::trim)
        .find(|text| !text.is_empty())
        .map(str::to_string)
}

/// Entero bajo la primera clave candidata; acepta números y texto numérico.
///
/// Un cero cuenta como ausente para que la siguiente ortografía tenga
/// oportunidad, igual que el encadenado de alternativas del front-end.
pub fn read_nonzero_i64(json_data: &Value, keys: &[&str]) -> Option<i64> {
    keys.iter()
        .filter_map(|key| json_data.get(*key))
        .filter_map(as_i64_lenient)
        .find(|number| *number != 0)
}

/// Entero bajo la primera clave candidata, cero incluido
pub fn read_i64(json_data: &Value, keys: &[&str]) -> Option<i64> {
    keys.iter()
        .filter_map(|key| json_data.get(*key))
        .find_map(as_i64_lenient)
}

/// Identificador como texto: acepta números o cadenas
pub fn read_identifier(json_data: &Value, keys: &[&str]) -> Option<String> {
    let value = first_present(json_data, keys)?;
    match value {
        Value::Number(number) => Some(number.to_string()),
        Value::String(text) if !text.trim().is_empty() => Some(text.trim().to_string()),
        _ => None,
    }
}

fn as_i64_lenient(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().filter(|f| f.is_finite()).map(|f| f as i64)),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    }
}

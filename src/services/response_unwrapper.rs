//! Desempaquetado de respuestas del API de reservas
//!
//! El API no es consistente con el sobre de sus respuestas: a veces la lista
//! llega sola, a veces bajo `data` o bajo `result`. Aquí se decide la forma
//! una sola vez para que ningún proyector tenga que adivinarla.

use serde_json::Value;

/// Forma reconocida del sobre de una respuesta de lista
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseEnvelope {
    /// La respuesta es el arreglo
    Bare(Vec<Value>),
    /// `{ "data": [...] }`
    Data(Vec<Value>),
    /// `{ "result": [...] }`
    Result(Vec<Value>),
    /// Ninguna forma conocida
    Unrecognized,
}

impl ResponseEnvelope {
    /// Clasificar la respuesta; la primera forma que coincide gana
    pub fn decode(response: &Value) -> Self {
        if let Some(items) = response.as_array() {
            return ResponseEnvelope::Bare(items.clone());
        }
        if let Some(items) = response.get("data").and_then(|v| v.as_array()) {
            return ResponseEnvelope::Data(items.clone());
        }
        if let Some(items) = response.get("result").and_then(|v| v.as_array()) {
            return ResponseEnvelope::Result(items.clone());
        }
        ResponseEnvelope::Unrecognized
    }

    pub fn into_items(self) -> Vec<Value> {
        match self {
            ResponseEnvelope::Bare(items)
            | ResponseEnvelope::Data(items)
            | ResponseEnvelope::Result(items) => items,
            ResponseEnvelope::Unrecognized => Vec::new(),
        }
    }
}

/// Extraer la lista de elementos de cualquier sobre; nunca falla
pub fn unwrap_list(response: &Value) -> Vec<Value> {
    let envelope = ResponseEnvelope::decode(response);
    if envelope == ResponseEnvelope::Unrecognized {
        log::warn!("⚠️ Response is not a list envelope, using empty list: {}", shape_of(response));
    }
    envelope.into_items()
}

/// Extraer el objeto de detalle: `data` si existe y no es nulo, si no la
/// respuesta misma. `null` y `{ "data": null }` cuentan como ausentes.
pub fn unwrap_detail(response: &Value) -> Option<Value> {
    match response {
        Value::Null => None,
        Value::Object(map) => match map.get("data") {
            Some(Value::Null) => None,
            Some(inner) => Some(inner.clone()),
            None => Some(response.clone()),
        },
        other => Some(other.clone()),
    }
}

fn shape_of(response: &Value) -> String {
    match response {
        Value::Object(map) => format!("object with keys {:?}", map.keys().collect::<Vec<_>>()),
        Value::Null => "null".to_string(),
        Value::Bool(_) => "bool".to_string(),
        Value::Number(_) => "number".to_string(),
        Value::String(_) => "string".to_string(),
        Value::Array(_) => "array".to_string(),
    }
}

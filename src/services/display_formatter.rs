//! Formateo de textos de pantalla
//!
//! Fechas, horas y sustitución por literales de respaldo.

/// "HH:MM" de un timestamp ISO-8601 (caracteres 11..16).
///
/// Devuelve `None` si el texto es más corto que "YYYY-MM-DDTHH:MM" o si el
/// corte no cae en un límite de carácter.
pub fn time_of_day(iso: &str) -> Option<&str> {
    if iso.len() < 16 {
        return None;
    }
    iso.get(11..16)
}

/// "inicio ~ fin" cuando ambas fechas existen y difieren; si no, la de inicio
pub fn date_range(start: Option<&str>, end: Option<&str>) -> Option<String> {
    match (start, end) {
        (Some(start), Some(end)) if start != end => Some(format!("{} ~ {}", start, end)),
        (Some(start), _) => Some(start.to_string()),
        (None, _) => None,
    }
}

/// Valor o literal de respaldo; un texto en blanco cuenta como ausente
pub fn or_fallback(value: Option<&str>, fallback: &str) -> String {
    non_blank(value).unwrap_or(fallback).to_string()
}

/// `None` para textos vacíos o sólo espacios
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|text| !text.is_empty())
}

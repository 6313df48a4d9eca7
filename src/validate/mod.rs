use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use thiserror::Error;

use crate::model::{NewRoom, RoomType};

/// Raw field values as entered by the user, before any normalization.
#[derive(Debug, Clone, Default)]
pub struct RoomForm {
    pub numero: String,
    pub nombre: String,
    pub tipo: String,
    pub precio: String,
    pub fecha: String,
}

/// All violated rules at once, never just the first.
#[derive(Debug, Error)]
#[error("{}", messages.join("\n"))]
pub struct ValidationError {
    pub messages: Vec<String>,
}

fn numero_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{3}$").expect("numero pattern"))
}

fn nombre_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // word, whitespace, word, anchored at the start
    RE.get_or_init(|| Regex::new(r"^\w+\s\w+").expect("nombre pattern"))
}

fn precio_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+(\.\d{1,2})?$").expect("precio pattern"))
}

/// Title-cases a display name: each whitespace-separated token gets its
/// first character uppercased and the rest lowercased.
pub fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Checks every rule independently and accumulates the failures. On success
/// returns the normalized creation payload with `reservada` defaulted off.
pub fn validate_new_room(
    form: &RoomForm,
    existing_numbers: &[String],
    today: NaiveDate,
) -> Result<NewRoom, ValidationError> {
    let mut messages = Vec::new();

    if !numero_re().is_match(&form.numero) {
        messages.push("room number must be exactly 3 digits".to_string());
    }
    if existing_numbers.iter().any(|n| n == &form.numero) {
        messages.push(format!("room number {} already exists", form.numero));
    }
    if !nombre_re().is_match(&form.nombre) {
        messages.push("room name must contain at least two words".to_string());
    }

    let tipo = RoomType::parse(&form.tipo);
    if tipo.is_none() {
        messages.push("room type must be Individual, Doble or Suite".to_string());
    }

    let precio = form.precio.trim().parse::<f64>().ok();
    let precio_ok = matches!(precio, Some(p) if p > 0.0) && precio_re().is_match(form.precio.trim());
    if !precio_ok {
        messages.push(
            "price per night must be a positive number with at most two decimal places".to_string(),
        );
    }

    // The availability date is compared as an ISO string against today,
    // exactly as the date input renders it.
    let fecha = NaiveDate::parse_from_str(form.fecha.trim(), "%Y-%m-%d").ok();
    let today_str = today.format("%Y-%m-%d").to_string();
    let fecha_ok = fecha.is_some() && form.fecha.trim() > today_str.as_str();
    if !fecha_ok {
        messages.push("availability date must be a future date in YYYY-MM-DD form".to_string());
    }

    if !messages.is_empty() {
        return Err(ValidationError { messages });
    }

    match (tipo, precio, fecha) {
        (Some(tipo), Some(precio), Some(fecha)) => Ok(NewRoom {
            numero: form.numero.clone(),
            nombre: title_case(&form.nombre),
            tipo,
            precio,
            fecha_disponibilidad: fecha,
            reservada: false,
        }),
        _ => Err(ValidationError { messages }),
    }
}

use colored::Colorize;

use crate::model::{Room, RoomType};
use crate::report::{OccupancyCounts, PriceExtremes};

fn status_cell(room: &Room) -> String {
    // pad before colorizing so the escape codes do not skew the column
    let padded = format!("{:<10}", room.status_label());
    if room.reservada {
        padded.red().to_string()
    } else {
        padded.green().to_string()
    }
}

/// Renders the full room table, one aligned row per room in input order.
/// The caller prints the result wholesale, replacing whatever came before.
pub fn render_table(rooms: &[Room]) -> String {
    if rooms.is_empty() {
        return "no rooms in the collection".to_string();
    }

    // format widths pad by characters, so measure characters, not bytes
    let nombre_width = rooms
        .iter()
        .map(|r| r.nombre.chars().count())
        .chain(std::iter::once("NOMBRE".len()))
        .max()
        .unwrap_or(0);

    // pad the plain header first, then style the whole line
    let header = format!(
        "{:<6}  {:<nombre_width$}  {:<10}  {:>8}  {:<12}  {}",
        "NUMERO", "NOMBRE", "TIPO", "PRECIO", "DISPONIBLE", "ESTADO",
    );
    let mut out = String::new();
    out.push_str(&format!("{}\n", header.bold()));
    for room in rooms {
        out.push_str(&format!(
            "{:<6}  {:<nombre_width$}  {:<10}  {:>8.2}  {:<12}  {}\n",
            room.numero,
            room.nombre,
            room.tipo.label(),
            room.precio,
            room.fecha_disponibilidad.to_string(),
            status_cell(room),
        ));
    }
    out.push_str(&format!("{} room(s)", rooms.len()));
    out
}

/// Single-row confirmation after a reservation toggle; no full reload.
pub fn render_room_update(room: &Room) -> String {
    format!(
        "room {} ({}) is now {}",
        room.numero,
        room.nombre,
        if room.reservada {
            "Reservada".red().to_string()
        } else {
            "Disponible".green().to_string()
        }
    )
}

/// Single-row confirmation after a deletion; no full reload.
pub fn render_room_deleted(room: &Room) -> String {
    format!("room {} ({}) deleted", room.numero, room.nombre)
}

pub fn render_counts(counts: &OccupancyCounts) -> String {
    format!(
        "Total reserved rooms: {}\nTotal available rooms: {}",
        counts.reservadas, counts.disponibles
    )
}

pub fn render_average(average: Option<f64>) -> String {
    match average {
        Some(value) => format!("Average room price: ${value:.2}"),
        None => "no rooms in the collection".to_string(),
    }
}

pub fn render_extremes(extremes: Option<PriceExtremes<'_>>) -> String {
    match extremes {
        Some(PriceExtremes {
            most_expensive,
            cheapest,
        }) => format!(
            "Most expensive room: {} - ${:.2}\nCheapest room: {} - ${:.2}",
            most_expensive.nombre, most_expensive.precio, cheapest.nombre, cheapest.precio
        ),
        None => "no rooms in the collection".to_string(),
    }
}

pub fn render_by_type(counts: &[(RoomType, usize); 3]) -> String {
    let mut out = String::from("Available rooms by type:");
    for (tipo, count) in counts {
        out.push_str(&format!("\n  {}: {}", tipo.label(), count));
    }
    out
}

pub fn render_next_week(rooms: &[&Room]) -> String {
    if rooms.is_empty() {
        return "No rooms available in the next 7 days.".to_string();
    }
    let mut out = String::from("Rooms available in the next 7 days:");
    for room in rooms {
        out.push_str(&format!(
            "\n  {} - available from {}",
            room.nombre, room.fecha_disponibilidad
        ));
    }
    out
}

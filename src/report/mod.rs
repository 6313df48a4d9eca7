use chrono::{Duration, NaiveDate};

use crate::model::{Room, RoomType};

/// Reserved vs available totals across the whole collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccupancyCounts {
    pub reservadas: usize,
    pub disponibles: usize,
}

pub fn occupancy(rooms: &[Room]) -> OccupancyCounts {
    let reservadas = rooms.iter().filter(|r| r.reservada).count();
    OccupancyCounts {
        reservadas,
        disponibles: rooms.len() - reservadas,
    }
}

/// Arithmetic mean of `precio`, or None for an empty collection.
pub fn average_price(rooms: &[Room]) -> Option<f64> {
    if rooms.is_empty() {
        return None;
    }
    let total: f64 = rooms.iter().map(|r| r.precio).sum();
    Some(total / rooms.len() as f64)
}

#[derive(Debug, Clone, Copy)]
pub struct PriceExtremes<'a> {
    pub most_expensive: &'a Room,
    pub cheapest: &'a Room,
}

/// Scans for the priciest and cheapest rooms. Strict comparisons keep the
/// first-seen room on ties, in collection order.
pub fn price_extremes(rooms: &[Room]) -> Option<PriceExtremes<'_>> {
    let first = rooms.first()?;
    let mut most_expensive = first;
    let mut cheapest = first;
    for room in rooms {
        if room.precio > most_expensive.precio {
            most_expensive = room;
        }
        if room.precio < cheapest.precio {
            cheapest = room;
        }
    }
    Some(PriceExtremes {
        most_expensive,
        cheapest,
    })
}

/// Counts unreserved rooms per type; every category is present, zeros included.
pub fn available_by_type(rooms: &[Room]) -> [(RoomType, usize); 3] {
    RoomType::ALL.map(|tipo| {
        let count = rooms
            .iter()
            .filter(|r| !r.reservada && r.tipo == tipo)
            .count();
        (tipo, count)
    })
}

/// Unreserved rooms whose availability date falls inside the inclusive
/// window [today, today + days], in collection order.
pub fn available_within(rooms: &[Room], today: NaiveDate, days: i64) -> Vec<&Room> {
    let limit = today + Duration::days(days);
    rooms
        .iter()
        .filter(|r| {
            !r.reservada && r.fecha_disponibilidad >= today && r.fecha_disponibilidad <= limit
        })
        .collect()
}

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

use crate::model::{Bet, Game};

/// Color used when a bet's game is not in the catalog (yet).
pub const DEFAULT_COLOR: &str = "#707070";

/// Everything a bet row needs for display. Rebuilt on every render.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayRow {
    pub name: String,
    pub color: String,
    pub price: f64,
    // None when `created_at` could not be parsed
    pub date: Option<DateTime<Utc>>,
    pub numbers: String,
}

/// Project a bet onto a display row, resolving its color against `games`.
pub fn project(bet: &Bet, games: &[Game]) -> DisplayRow {
    let color = games
        .iter()
        .find(|g| g.id == bet.type_field.id)
        .map(|g| g.color.clone())
        // A blank catalog color counts as missing
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| DEFAULT_COLOR.to_string());

    DisplayRow {
        name: bet.type_field.type_field.clone(),
        color,
        price: bet.price,
        date: parse_created_at(&bet.created_at),
        numbers: bet.choosen_numbers.replace(',', ", "),
    }
}

/// Parse an ISO-8601 timestamp; offset-less values are read as UTC.
pub fn parse_created_at(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
                .map(|naive| Utc.from_utc_datetime(&naive))
        })
        .ok()
}

//! Claves de fecha `YYYY-MM-DD`

use chrono::{Days, NaiveDate};

pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Formatear una fecha como clave de cache
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parsear una clave `YYYY-MM-DD`
pub fn parse_date_key(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value.trim(), DATE_KEY_FORMAT)
}

/// Fecha `offset` días antes del ancla; `None` fuera del rango de chrono
pub fn days_before(anchor: NaiveDate, offset: u64) -> Option<NaiveDate> {
    anchor.checked_sub_days(Days::new(offset))
}

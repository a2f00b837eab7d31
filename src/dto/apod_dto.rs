use std::num::ParseIntError;

use serde::Deserialize;

pub const DEFAULT_RECENT_DAYS: i64 = 10;
pub const MIN_RECENT_DAYS: i64 = 1;
pub const MAX_RECENT_DAYS: i64 = 30;

// Query de /api/apod?date=YYYY-MM-DD
#[derive(Debug, Deserialize)]
pub struct ApodByDateQuery {
    pub date: Option<String>,
}

// Query de /api/apod/recent?days=N
// `days` llega como texto para responder 400 en JSON si no es un entero
#[derive(Debug, Default, Deserialize)]
pub struct RecentApodsQuery {
    pub days: Option<String>,
}

impl RecentApodsQuery {
    /// Días pedidos, limitados a [1, 30] para no abusar de la API de NASA
    pub fn clamped_days(&self) -> Result<usize, ParseIntError> {
        let days = match self.days.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => raw.parse::<i64>()?,
            _ => DEFAULT_RECENT_DAYS,
        };
        Ok(days.clamp(MIN_RECENT_DAYS, MAX_RECENT_DAYS) as usize)
    }
}

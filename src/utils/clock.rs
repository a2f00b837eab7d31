//! Reloj inyectable
//!
//! El cache compara edades con instantes monotónicos y el servicio calcula
//! la clave de "hoy" con una zona horaria explícita. Ambas lecturas pasan por
//! el trait `Clock` para poder controlarlas en los tests.

use chrono::{FixedOffset, Local, NaiveDate, Utc};
use std::str::FromStr;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Fuente de tiempo del proceso
pub trait Clock: Send + Sync {
    /// Instante monotónico actual
    fn now(&self) -> Instant;

    /// Fecha de calendario actual
    fn today(&self) -> NaiveDate;
}

/// Zona horaria usada para calcular "hoy"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateZone {
    Utc,
    Local,
    Fixed(FixedOffset),
}

#[derive(Debug, thiserror::Error)]
#[error("Invalid timezone '{0}': expected 'utc', 'local' or an offset like '+02:00'")]
pub struct InvalidDateZone(pub String);

impl FromStr for DateZone {
    type Err = InvalidDateZone;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        match value.to_ascii_lowercase().as_str() {
            "utc" | "z" => Ok(DateZone::Utc),
            "local" => Ok(DateZone::Local),
            _ => value
                .parse::<FixedOffset>()
                .map(DateZone::Fixed)
                .map_err(|_| InvalidDateZone(value.to_string())),
        }
    }
}

impl std::fmt::Display for DateZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateZone::Utc => write!(f, "utc"),
            DateZone::Local => write!(f, "local"),
            DateZone::Fixed(offset) => write!(f, "{}", offset),
        }
    }
}

/// Reloj del sistema
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    zone: DateZone,
}

impl SystemClock {
    pub fn new(zone: DateZone) -> Self {
        Self { zone }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn today(&self) -> NaiveDate {
        match self.zone {
            DateZone::Utc => Utc::now().date_naive(),
            DateZone::Local => Local::now().date_naive(),
            DateZone::Fixed(offset) => Utc::now().with_timezone(&offset).date_naive(),
        }
    }
}

/// Reloj manual para tests: el tiempo sólo avanza cuando se pide
#[derive(Debug)]
pub struct ManualClock {
    origin: Instant,
    state: Mutex<ManualState>,
}

#[derive(Debug)]
struct ManualState {
    elapsed: Duration,
    today: NaiveDate,
}

impl ManualClock {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            origin: Instant::now(),
            state: Mutex::new(ManualState {
                elapsed: Duration::ZERO,
                today,
            }),
        }
    }

    /// Avanzar el reloj monotónico
    pub fn advance(&self, by: Duration) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.elapsed += by;
    }

    pub fn set_today(&self, today: NaiveDate) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.today = today;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        self.origin + state.elapsed
    }

    fn today(&self) -> NaiveDate {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).today
    }
}

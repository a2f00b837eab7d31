//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, reloj inyectable
//! y claves de fecha.

pub mod clock;
pub mod dates;
pub mod errors;

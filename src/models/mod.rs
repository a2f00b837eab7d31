//! Modelos de datos
//!
//! Este módulo contiene los modelos que viajan entre la API de NASA,
//! el cache y los clientes.

pub mod apod;

pub use apod::ApodResponse;

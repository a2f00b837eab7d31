//! Servicios
//!
//! Este módulo contiene la lógica de negocio: el servicio de APOD y el
//! contrato de la fuente upstream que consume.

pub mod apod_service;
pub mod data_source;

pub use apod_service::ApodService;
pub use data_source::{ApodDataSource, FetchError};

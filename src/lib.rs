//! APOD Proxy
//!
//! Backend que sirve la imagen astronómica del día de NASA con un cache en
//! memoria acotado (LRU) y con expiración por TTL.

pub mod cache;
pub mod clients;
pub mod config;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

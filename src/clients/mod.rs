//! Clients - HTTP Clients for External APIs
//!
//! This module contains HTTP clients for communicating with external APIs.

pub mod nasa_apod_client;

pub use nasa_apod_client::NasaApodClient;

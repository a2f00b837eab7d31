#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use apod_proxy::cache::{ApodCache, CacheConfig};
use apod_proxy::models::ApodResponse;
use apod_proxy::services::{ApodDataSource, ApodService, FetchError};
use apod_proxy::utils::clock::ManualClock;
use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::Barrier;

/// Respuesta programada para una clave
#[derive(Clone)]
pub enum Scripted {
    Empty,
    Fail(u16),
}

/// Fuente simulada: responde con un APOD por fecha salvo lo programado
#[derive(Default)]
pub struct MockSource {
    scripted: Mutex<HashMap<String, Scripted>>,
    calls: Mutex<Vec<String>>,
    total: AtomicUsize,
    barrier: Option<Arc<Barrier>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cada fetch espera a que `parties` fetches estén en curso a la vez
    pub fn with_barrier(parties: usize) -> Self {
        Self {
            barrier: Some(Arc::new(Barrier::new(parties))),
            ..Self::default()
        }
    }

    pub fn script(&self, key: &str, response: Scripted) {
        self.scripted.lock().unwrap().insert(key.to_string(), response);
    }

    pub fn clear_script(&self, key: &str) {
        self.scripted.lock().unwrap().remove(key);
    }

    pub fn total_calls(&self) -> usize {
        self.total.load(Ordering::SeqCst)
    }

    pub fn calls_for(&self, key: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|k| *k == key).count()
    }

    pub fn call_order(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ApodDataSource for MockSource {
    async fn fetch(&self, key: &str) -> Result<Option<ApodResponse>, FetchError> {
        self.total.fetch_add(1, Ordering::SeqCst);
        self.calls.lock().unwrap().push(key.to_string());

        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }

        let scripted = self.scripted.lock().unwrap().get(key).cloned();
        match scripted {
            Some(Scripted::Empty) => Ok(None),
            Some(Scripted::Fail(status)) => Err(FetchError::Status {
                status,
                body: format!("upstream failure for {}", key),
            }),
            None => Ok(Some(apod(key))),
        }
    }
}

pub fn apod(date: &str) -> ApodResponse {
    ApodResponse {
        date: date.to_string(),
        title: format!("APOD {}", date),
        explanation: format!("Picture for {}", date),
        url: format!("https://apod.nasa.gov/apod/image/{}.jpg", date),
        hdurl: Some(format!("https://apod.nasa.gov/apod/image/{}_hd.jpg", date)),
        media_type: "image".to_string(),
        service_version: Some("v1".to_string()),
        copyright: None,
        thumbnail_url: None,
    }
}

pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

pub struct Harness {
    pub service: ApodService,
    pub source: Arc<MockSource>,
    pub clock: Arc<ManualClock>,
}

pub fn harness(config: CacheConfig, source: MockSource) -> Harness {
    let clock = Arc::new(ManualClock::new(date("2024-03-10")));
    let source = Arc::new(source);
    let cache = ApodCache::new(config, clock.clone());
    let service = ApodService::new(cache, source.clone(), clock.clone());
    Harness {
        service,
        source,
        clock,
    }
}

pub fn default_harness() -> Harness {
    harness(CacheConfig::default(), MockSource::new())
}

#![allow(dead_code)]

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use foodembed::db;
use foodembed::embedding::{EmbeddingProvider, EMBEDDING_DIM};
use rusqlite::Connection;

/// Open a fresh in-memory database with the schema applied.
pub fn test_db() -> Connection {
    db::open_memory_database().unwrap()
}

/// Deterministic stub provider: hashes the text into a single spike position,
/// so the same text always yields the same vector and distinct texts usually
/// yield distinct vectors. Counts how many times it was invoked.
pub struct StubProvider {
    pub calls: AtomicU64,
}

impl StubProvider {
    pub fn new() -> Self {
        Self {
            calls: AtomicU64::new(0),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }
}

impl EmbeddingProvider for StubProvider {
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let hash = text
            .bytes()
            .fold(0usize, |acc, b| acc.wrapping_mul(31).wrapping_add(b as usize));
        let mut v = vec![0.0f32; EMBEDDING_DIM];
        v[hash % EMBEDDING_DIM] = 1.0;
        Ok(v)
    }
}

/// Provider whose model is permanently broken.
pub struct FailingProvider;

impl EmbeddingProvider for FailingProvider {
    fn embed(&self, _text: &str) -> Result<Vec<f32>> {
        anyhow::bail!("model unavailable")
    }
}

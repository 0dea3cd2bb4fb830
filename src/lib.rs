//! Batch re-computation of vector embeddings for food documents.
//!
//! `foodembed` walks a local store of semi-structured food documents, builds a
//! deterministic canonical text for each one, embeds it with a local ONNX
//! model, and writes the text, vector, and timestamp back per record. One
//! failing record never blocks the rest of the pass.
//!
//! # Architecture
//!
//! - **Storage**: SQLite holding raw JSON documents plus their derived
//!   embedding columns
//! - **Canonicalization**: fixed-order, presence-gated text sections
//!   ([`food::canonical::create_embedding_text`])
//! - **Embeddings**: local ONNX Runtime with multilingual-e5-small
//!   (384 dimensions, L2-normalized)
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`db`] — SQLite database initialization and schema
//! - [`embedding`] — Text-to-vector embedding pipeline via ONNX Runtime
//! - [`food`] — Document types, canonicalization, storage, and the
//!   re-embedding driver
//! - [`websearch`] — Unrelated web-search helper with its CLI smoke check

pub mod config;
pub mod db;
pub mod embedding;
pub mod food;
pub mod websearch;

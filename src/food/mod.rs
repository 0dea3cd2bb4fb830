//! Food document handling: types, canonicalization, storage, and the
//! re-embedding driver.

pub mod canonical;
pub mod constants;
pub mod refresh;
pub mod store;
pub mod types;

/// Convert an f32 embedding slice to raw bytes for BLOB storage.
pub fn embedding_to_bytes(embedding: &[f32]) -> &[u8] {
    unsafe {
        std::slice::from_raw_parts(
            embedding.as_ptr() as *const u8,
            embedding.len() * std::mem::size_of::<f32>(),
        )
    }
}

/// Convert a stored BLOB back to an f32 embedding vector.
#[allow(dead_code)]
pub fn embedding_from_bytes(bytes: &[u8]) -> Vec<f32> {
    bytes
        .chunks_exact(std::mem::size_of::<f32>())
        .map(|chunk| f32::from_ne_bytes(chunk.try_into().expect("4-byte chunk")))
        .collect()
}

use anyhow::{bail, Result};
use libzia::Sample;

/// Parse headerless little-endian samples
pub fn read_samples<T: Sample>(bytes: &[u8]) -> Result<Vec<T>> {
    if bytes.len() % T::BYTES != 0 {
        bail!(
            "Input size {} is not a multiple of {} bytes per sample",
            bytes.len(),
            T::BYTES
        );
    }

    Ok(bytes.chunks_exact(T::BYTES).map(T::read_le).collect())
}

/// Write samples as headerless little-endian bytes
pub fn write_samples<T: Sample>(samples: &[T]) -> Vec<u8> {
    let mut out = vec![0u8; samples.len() * T::BYTES];
    for (chunk, &sample) in out.chunks_exact_mut(T::BYTES).zip(samples) {
        sample.write_le(chunk);
    }
    out
}

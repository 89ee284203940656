use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtoError {
    #[error("Truncated message: {len} bytes is shorter than the {header} byte header")]
    Truncated { len: usize, header: usize },

    #[error("Codec error: {0}")]
    Codec(#[from] serde_json::Error),
}

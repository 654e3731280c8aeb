// src/error.rs

pub type Result<T> = std::result::Result<T, StarError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StarError {
    #[error("vertex index {index} is out of range for a ring of {len} vertices")]
    VertexOutOfRange { index: usize, len: usize },
}

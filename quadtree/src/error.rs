use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuadtreeError {
    InvalidRootExtent {
        left: i32,
        top: i32,
        right: i32,
        bottom: i32,
    },
    InvalidMaxElements { max_elements: usize },
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;

impl fmt::Display for QuadtreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuadtreeError::InvalidRootExtent {
                left,
                top,
                right,
                bottom,
            } => {
                write!(
                    f,
                    "root extent must satisfy left <= right and top <= bottom (left: {}, top: {}, right: {}, bottom: {})",
                    left, top, right, bottom
                )
            }
            QuadtreeError::InvalidMaxElements { max_elements } => {
                write!(
                    f,
                    "max elements per leaf must be at least 1 (max_elements: {})",
                    max_elements
                )
            }
        }
    }
}

impl std::error::Error for QuadtreeError {}

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    #[error("page index {index} is out of range for {page_count} page(s)")]
    OutOfRange { index: usize, page_count: usize },

    #[error("invalid carousel configuration: {0}")]
    InvalidConfiguration(String),

    #[error("carousel runtime for {0} has stopped")]
    RuntimeStopped(String),

    #[error("no carousel named {0}")]
    UnknownCarousel(String),
}

pub type Result<T> = std::result::Result<T, CarouselError>;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CarouselError {
    #[error("display count exceeds image count ({display} > {images})")]
    DisplayExceedsImages { display: usize, images: usize },
    #[error("display count must be at least 1")]
    ZeroDisplayNumber,
    #[error("step interval must be greater than zero")]
    ZeroStepInterval,
}

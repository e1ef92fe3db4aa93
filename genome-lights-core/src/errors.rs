use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GenomeError {
    /// every position lookup is taken modulo the genome length
    #[error("genome must contain at least one base")]
    EmptyGenome,
    #[error("scroll period must be at least 1ms")]
    ZeroScrollPeriod,
    #[error("scroll period must be split into at least one step")]
    ZeroScrollSteps,
    #[error("segment {start}..{end} does not fit in a strand of {leds_per_strand} leds")]
    InvalidSegment {
        start: usize,
        end: usize,
        leds_per_strand: usize,
    },
    #[error("no pattern with that name")]
    UnknownPattern,
}

pub type GenomeResult<T> = Result<T, GenomeError>;

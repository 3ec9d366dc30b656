use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum Error {
    /// Input file is missing or unreadable. Surfaced to the caller
    /// as is, never retried.
    #[error("input file \"{0}\" is missing or unreadable")]
    InputUnavailable(String),

    /// GPS string from which less than the six expected numeric
    /// fields (degrees, minutes, seconds per axis) could be extracted.
    #[error("invalid gps string \"{0}\"")]
    DmsFormat(String),

    /// The propagation model is undefined for a null or negative
    /// antenna height.
    #[error("non positive antenna height")]
    NonPositiveAntennaHeight,

    /// Antenna height for which the path loss denominator vanishes:
    /// the distance exponent cannot be formed.
    #[error("degenerate antenna height")]
    DegenerateAntennaHeight,
}

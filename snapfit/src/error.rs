use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// The ways a snap computation can report "no result".
///
/// Every variant describes an expected, recoverable input configuration,
/// never a programming fault: callers surface a user-facing message and
/// carry on. No operation in this crate panics on bad geometry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("shape is missing bounding box or outline geometry")]
    MissingGeometry,

    #[error("shapes are diagonally separated; no single snap axis applies")]
    DiagonalLayout,

    #[error("shape bounds overlap on both axes; no single snap axis applies")]
    AmbiguousLayout,

    #[error("no facing edge intersects the probe in either direction")]
    Unalignable,
}

use thiserror::Error;

/// Construction-time validation failures for the built-in generators.
///
/// All of these surface synchronously from the constructors; a generator
/// that exists is always geometrically valid.
#[derive(Debug, Error, PartialEq)]
pub enum MotionError {
    #[error("start and end coincide, the chord is degenerate")]
    DegenerateChord,

    #[error("reference point is collinear with start and end")]
    CollinearPivot,

    #[error("arc angle {0}° outside the supported range (10°, 180°]")]
    ArcAngleOutOfRange(f32),

    #[error("movement duration must be positive, got {0}")]
    NonPositiveDuration(f32),

    #[error("ellipse flattening ratio must be positive, got {0}")]
    NonPositiveRatio(f32),
}

pub type MotionResult<T> = Result<T, MotionError>;

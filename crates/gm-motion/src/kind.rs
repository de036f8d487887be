//! The tagged set of motion kinds the scheduler tracks.

use std::fmt;

use gm_core::Secs;

use crate::{
    CircularArcMovement, EllipticalArcMovement, FullCircleMovement, LinearMovement,
    MotionGenerator, Step,
};

/// One motion owned by a target group.
///
/// The built-in kinds are plain data; [`Motion::Custom`] keeps the
/// contract open to host-defined generators.  `Motion` itself implements
/// [`MotionGenerator`] by delegation, so group and scheduler code never
/// matches on the kind.
pub enum Motion {
    Linear(LinearMovement),
    CircularArc(CircularArcMovement),
    FullCircle(FullCircleMovement),
    EllipticalArc(EllipticalArcMovement),
    Custom(Box<dyn MotionGenerator + Send>),
}

impl Motion {
    /// Short kind label for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Motion::Linear(_)        => "linear",
            Motion::CircularArc(_)   => "circular-arc",
            Motion::FullCircle(_)    => "full-circle",
            Motion::EllipticalArc(_) => "elliptical-arc",
            Motion::Custom(_)        => "custom",
        }
    }
}

impl MotionGenerator for Motion {
    fn advance(&mut self, dt: Secs) -> Step {
        match self {
            Motion::Linear(m)        => m.advance(dt),
            Motion::CircularArc(m)   => m.advance(dt),
            Motion::FullCircle(m)    => m.advance(dt),
            Motion::EllipticalArc(m) => m.advance(dt),
            Motion::Custom(m)        => m.advance(dt),
        }
    }

    fn is_stacked(&self) -> bool {
        match self {
            Motion::Linear(m)        => m.is_stacked(),
            Motion::CircularArc(m)   => m.is_stacked(),
            Motion::FullCircle(m)    => m.is_stacked(),
            Motion::EllipticalArc(m) => m.is_stacked(),
            Motion::Custom(m)        => m.is_stacked(),
        }
    }

    fn time_left(&self) -> Secs {
        match self {
            Motion::Linear(m)        => m.time_left(),
            Motion::CircularArc(m)   => m.time_left(),
            Motion::FullCircle(m)    => m.time_left(),
            Motion::EllipticalArc(m) => m.time_left(),
            Motion::Custom(m)        => m.time_left(),
        }
    }

    fn attempt_merge(&mut self, other: &Motion) -> bool {
        match self {
            Motion::Linear(m)        => m.attempt_merge(other),
            Motion::CircularArc(m)   => m.attempt_merge(other),
            Motion::FullCircle(m)    => m.attempt_merge(other),
            Motion::EllipticalArc(m) => m.attempt_merge(other),
            Motion::Custom(m)        => m.attempt_merge(other),
        }
    }

    fn on_finish(&mut self, premature: bool) {
        match self {
            Motion::Linear(m)        => m.on_finish(premature),
            Motion::CircularArc(m)   => m.on_finish(premature),
            Motion::FullCircle(m)    => m.on_finish(premature),
            Motion::EllipticalArc(m) => m.on_finish(premature),
            Motion::Custom(m)        => m.on_finish(premature),
        }
    }
}

impl fmt::Debug for Motion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Motion::Linear(m)        => f.debug_tuple("Linear").field(m).finish(),
            Motion::CircularArc(m)   => f.debug_tuple("CircularArc").field(m).finish(),
            Motion::FullCircle(m)    => f.debug_tuple("FullCircle").field(m).finish(),
            Motion::EllipticalArc(m) => f.debug_tuple("EllipticalArc").field(m).finish(),
            Motion::Custom(_)        => f.write_str("Custom(..)"),
        }
    }
}

impl From<LinearMovement> for Motion {
    fn from(m: LinearMovement) -> Motion {
        Motion::Linear(m)
    }
}

impl From<CircularArcMovement> for Motion {
    fn from(m: CircularArcMovement) -> Motion {
        Motion::CircularArc(m)
    }
}

impl From<FullCircleMovement> for Motion {
    fn from(m: FullCircleMovement) -> Motion {
        Motion::FullCircle(m)
    }
}

impl From<EllipticalArcMovement> for Motion {
    fn from(m: EllipticalArcMovement) -> Motion {
        Motion::EllipticalArc(m)
    }
}

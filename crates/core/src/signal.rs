//! The live signal pair consumed by the thumb visual.

/// One continuously updated sample of thumb position and deformation.
///
/// Values are raw: `offset` leaves `[0, travel]` while the surface
/// rubber-bands, and `scale` exceeds `1.0` inside the ordinary travel
/// range by construction of its formula. Renderers wanting pure shrink
/// semantics apply [`Signal::shrink`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Signal {
    /// Thumb offset along the track, in pixels.
    pub offset: f32,

    /// Raw deformation factor for the thumb length.
    pub scale: f32,
}

impl Signal {
    /// The signal of a thumb at rest.
    pub const REST: Self = Self {
        offset: 0.0,
        scale: 1.0,
    };

    /// The deformation factor clamped for pure shrink semantics.
    ///
    /// Exactly `1.0` anywhere inside the ordinary travel range; strictly
    /// below `1.0` only while overscrolling.
    pub fn shrink(self) -> f32 {
        self.scale.clamp(0.0, 1.0)
    }
}

impl Default for Signal {
    fn default() -> Self {
        Self::REST
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shrink_clamps_above_one() {
        let signal = Signal {
            offset: 0.0,
            scale: 9.0,
        };

        assert_eq!(signal.shrink(), 1.0);
    }

    #[test]
    fn test_shrink_clamps_below_zero() {
        let signal = Signal {
            offset: -100.0,
            scale: -0.5,
        };

        assert_eq!(signal.shrink(), 0.0);
    }

    #[test]
    fn test_shrink_passes_through_overscroll() {
        let signal = Signal {
            offset: -4.0,
            scale: 0.8,
        };

        assert_eq!(signal.shrink(), 0.8);
    }
}

//! Size and range limits applied at the persistence boundary.

use super::error::PersistError;

/// Default cap on the serialized size, in bytes.
pub const DEFAULT_MAX_BYTES: usize = 25_000;

/// Default bound for state coordinates.
pub const DEFAULT_COORDINATE_BOUND: f64 = 10_000.0;

/// Default bound for transition offsets.
pub const DEFAULT_OFFSET_BOUND: f64 = 500.0;

/// Largest state id or counter accepted from saved data. Leaves the
/// counter room to grow without overflowing.
pub const MAX_STATE_ID: u32 = u32::MAX / 2;

/// Limits enforced when saving and loading.
///
/// Coordinates and offsets are clamped into `[-bound, bound]`; NaN
/// becomes 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PersistLimits {
    pub(crate) max_bytes: usize,
    pub(crate) coordinate_bound: f64,
    pub(crate) offset_bound: f64,
}

impl PersistLimits {
    pub fn builder() -> LimitsBuilder {
        LimitsBuilder::new()
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    pub fn clamp_coordinate(&self, value: f64) -> f64 {
        clamp(value, self.coordinate_bound)
    }

    pub fn clamp_offset(&self, value: f64) -> f64 {
        clamp(value, self.offset_bound)
    }

    /// Fail if a saved state id or counter is past [`MAX_STATE_ID`].
    pub fn check_state_id(&self, id: u32) -> Result<(), PersistError> {
        if id > MAX_STATE_ID {
            Err(PersistError::StateIdOutOfRange {
                id,
                limit: MAX_STATE_ID,
            })
        } else {
            Ok(())
        }
    }

    /// Fail if `size` bytes exceed the cap.
    pub fn check_size(&self, size: usize) -> Result<(), PersistError> {
        if size > self.max_bytes {
            Err(PersistError::TooLarge {
                size,
                limit: self.max_bytes,
            })
        } else {
            Ok(())
        }
    }
}

impl Default for PersistLimits {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            coordinate_bound: DEFAULT_COORDINATE_BOUND,
            offset_bound: DEFAULT_OFFSET_BOUND,
        }
    }
}

fn clamp(value: f64, bound: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-bound, bound)
    }
}

/// Builder for [`PersistLimits`]
pub struct LimitsBuilder {
    limits: PersistLimits,
}

impl LimitsBuilder {
    pub fn new() -> Self {
        Self {
            limits: PersistLimits::default(),
        }
    }

    /// Set the serialized size cap
    pub fn max_bytes(mut self, bytes: usize) -> Self {
        self.limits.max_bytes = bytes;
        self
    }

    /// Set the coordinate bound. Negative values are treated as their magnitude.
    pub fn coordinate_bound(mut self, bound: f64) -> Self {
        self.limits.coordinate_bound = bound.abs();
        self
    }

    /// Set the transition offset bound
    pub fn offset_bound(mut self, bound: f64) -> Self {
        self.limits.offset_bound = bound.abs();
        self
    }

    pub fn build(self) -> PersistLimits {
        self.limits
    }
}

impl Default for LimitsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let limits = PersistLimits::default();
        assert_eq!(limits.max_bytes(), DEFAULT_MAX_BYTES);
        assert_eq!(limits.clamp_coordinate(1e9), DEFAULT_COORDINATE_BOUND);
        assert_eq!(limits.clamp_offset(-1e9), -DEFAULT_OFFSET_BOUND);
    }

    #[test]
    fn nan_clamps_to_zero() {
        let limits = PersistLimits::default();
        assert_eq!(limits.clamp_coordinate(f64::NAN), 0.0);
        assert_eq!(limits.clamp_offset(f64::NAN), 0.0);
    }

    #[test]
    fn builder_overrides_defaults() {
        let limits = PersistLimits::builder()
            .max_bytes(10)
            .coordinate_bound(-50.0)
            .offset_bound(5.0)
            .build();

        assert_eq!(limits.clamp_coordinate(60.0), 50.0);
        assert_eq!(limits.clamp_offset(-6.0), -5.0);
        assert!(limits.check_size(10).is_ok());
        assert!(matches!(
            limits.check_size(11),
            Err(PersistError::TooLarge { size: 11, limit: 10 })
        ));
    }

    #[test]
    fn state_ids_past_the_bound_are_rejected() {
        let limits = PersistLimits::default();

        assert!(limits.check_state_id(MAX_STATE_ID).is_ok());
        assert!(matches!(
            limits.check_state_id(u32::MAX),
            Err(PersistError::StateIdOutOfRange { id: u32::MAX, .. })
        ));
    }
}

//! Vehicle identifier.
//!
//! Vehicles are numbered sequentially in generation order starting at 0.  The
//! textual form used in route files and traces is `vehicle_NNNN` (zero-padded
//! to four digits; wider numbers are printed in full).

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// Sequential vehicle number.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
pub struct VehicleId(pub u32);

impl VehicleId {
    /// Prefix of the textual id.
    pub const PREFIX: &'static str = "vehicle_";

    /// The id following `self`.
    #[inline]
    pub fn next(self) -> VehicleId {
        VehicleId(self.0 + 1)
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", Self::PREFIX, self.0)
    }
}

impl FromStr for VehicleId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix(Self::PREFIX)
            .and_then(|n| n.parse::<u32>().ok())
            .map(VehicleId)
            .ok_or_else(|| CoreError::Parse(format!("invalid vehicle id {s:?}")))
    }
}

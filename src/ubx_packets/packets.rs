//! One module per supported NAV message.

pub use nav_pos_llh::*;
pub use nav_pvt::*;
pub use nav_sat::*;
pub use nav_status::*;
pub use nav_vel_ned::*;

mod nav_pos_llh;
mod nav_pvt;
mod nav_sat;
mod nav_status;
mod nav_vel_ned;

/// GPS fix type, shared by NAV-STATUS and NAV-PVT.
///
/// This value does not qualify a fix as valid and within the limits.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GpsFix {
    NoFix,
    DeadReckoningOnly,
    Fix2D,
    Fix3D,
    GpsPlusDeadReckoning,
    TimeOnlyFix,
    /// A raw value the interface description gives no meaning for.
    Unknown(u8),
}

impl GpsFix {
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0 => GpsFix::NoFix,
            1 => GpsFix::DeadReckoningOnly,
            2 => GpsFix::Fix2D,
            3 => GpsFix::Fix3D,
            5 => GpsFix::GpsPlusDeadReckoning,
            6 => GpsFix::TimeOnlyFix,
            x => GpsFix::Unknown(x),
        }
    }

    pub fn raw(self) -> u8 {
        match self {
            GpsFix::NoFix => 0,
            GpsFix::DeadReckoningOnly => 1,
            GpsFix::Fix2D => 2,
            GpsFix::Fix3D => 3,
            GpsFix::GpsPlusDeadReckoning => 5,
            GpsFix::TimeOnlyFix => 6,
            GpsFix::Unknown(x) => x,
        }
    }

    /// Descriptive string from the interface description; empty for
    /// [`GpsFix::Unknown`] values, which deliberately get no invented
    /// description.
    pub fn description(self) -> &'static str {
        match self {
            GpsFix::NoFix => "no fix",
            GpsFix::DeadReckoningOnly => "dead reckoning only",
            GpsFix::Fix2D => "2D-fix",
            GpsFix::Fix3D => "3D-fix",
            GpsFix::GpsPlusDeadReckoning => "GPS + dead reckoning combined",
            GpsFix::TimeOnlyFix => "Time only fix",
            GpsFix::Unknown(_) => "",
        }
    }
}

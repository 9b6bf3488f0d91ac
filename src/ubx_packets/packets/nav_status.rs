use bitflags::bitflags;
use core::fmt;

use crate::error::ParserError;
use crate::ubx_packets::wire::{bits, read_u32};
use crate::ubx_packets::{GpsFix, UbxPacketMeta};

/// Receiver Navigation Status
///
/// Contains a reference to an underlying buffer, contains accessor methods
/// to retrieve data.
pub struct NavStatusRef<'a>(pub(crate) &'a [u8]);

impl UbxPacketMeta for NavStatusRef<'_> {
    const CLASS: u8 = 0x01;
    const ID: u8 = 0x03;
    const FIXED_PAYLOAD_LEN: Option<u16> = Some(16);
    const MAX_PAYLOAD_LEN: u16 = 16;
}

impl<'a> NavStatusRef<'a> {
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.0
    }

    /// GPS Millisecond Time of Week
    #[inline]
    pub fn itow(&self) -> u32 {
        read_u32(self.0, 0)
    }

    /// GPS fix Type, this value does not qualify a fix as
    /// valid and within the limits
    #[inline]
    pub fn fix_type(&self) -> GpsFix {
        GpsFix::from_raw(self.0[4])
    }

    #[inline]
    pub fn fix_type_raw(&self) -> u8 {
        self.0[4]
    }

    /// Navigation Status Flags
    #[inline]
    pub fn flags(&self) -> NavStatusFlags {
        NavStatusFlags::from_bits_truncate(self.0[5])
    }

    /// Fix Status Information
    #[inline]
    pub fn fix_stat(&self) -> FixStatusInfo {
        FixStatusInfo::from(self.0[6])
    }

    /// Further information about navigation output
    #[inline]
    pub fn flags2(&self) -> NavStatusFlags2 {
        NavStatusFlags2::from(self.0[7])
    }

    /// Time to first fix (millisecond time tag)
    #[inline]
    pub fn time_to_first_fix(&self) -> u32 {
        read_u32(self.0, 8)
    }

    /// Milliseconds since Startup / Reset
    #[inline]
    pub fn uptime_ms(&self) -> u32 {
        read_u32(self.0, 12)
    }

    pub(crate) fn validate(payload: &[u8]) -> Result<(), ParserError> {
        let expect = 16;
        let got = payload.len();
        if got == expect {
            Ok(())
        } else {
            Err(ParserError::InvalidPacketLen {
                packet: "NavStatus",
                expect,
                got,
            })
        }
    }
}

impl fmt::Debug for NavStatusRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavStatus")
            .field("itow", &self.itow())
            .field("fix_type", &self.fix_type())
            .field("flags", &self.flags())
            .field("fix_stat", &self.fix_stat())
            .field("flags2", &self.flags2())
            .field("time_to_first_fix", &self.time_to_first_fix())
            .field("uptime_ms", &self.uptime_ms())
            .finish()
    }
}

bitflags! {
    /// Navigation Status Flags
    #[derive(Debug, Copy, Clone)]
    pub struct NavStatusFlags: u8 {
        /// position and velocity valid and within DOP and ACC Masks
        const GPS_FIX_OK = 1;
        /// DGPS used
        const DIFF_SOLN = 2;
        /// Week Number valid
        const WKN_SET = 4;
        /// Time of Week valid
        const TOW_SET = 8;
    }
}

/// Fix Status Information
#[repr(transparent)]
#[derive(Copy, Clone)]
pub struct FixStatusInfo(u8);

impl FixStatusInfo {
    /// Differential corrections were applied
    pub const fn diff_corr(self) -> bool {
        (self.0 & 1) == 1
    }

    pub fn map_matching(self) -> MapMatchingStatus {
        match bits(self.0, 6, 2) {
            0 => MapMatchingStatus::None,
            1 => MapMatchingStatus::Valid,
            2 => MapMatchingStatus::Used,
            3 => MapMatchingStatus::Dr,
            _ => unreachable!("two-bit map matching value out of range"),
        }
    }

    /// Raw two-bit map-matching sub-field
    pub const fn map_matching_raw(self) -> u8 {
        (self.0 >> 6) & 3
    }

    pub const fn from(x: u8) -> Self {
        Self(x)
    }
}

impl fmt::Debug for FixStatusInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixStatusInfo")
            .field("diff_corr", &self.diff_corr())
            .field("map_matching", &self.map_matching())
            .finish()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MapMatchingStatus {
    None = 0,
    /// valid, i.e. map matching data was received, but was too old
    Valid = 1,
    /// used, map matching data was applied
    Used = 2,
    /// map matching was the reason to enable the dead reckoning
    /// gpsFix type instead of publishing no fix
    Dr = 3,
}

/// Further information about navigation output
///
/// Packs the power-save-mode state (bits 0-1) and the spoofing detection
/// state (bits 3-4) into one byte.
#[repr(transparent)]
#[derive(Copy, Clone)]
pub struct NavStatusFlags2(u8);

impl NavStatusFlags2 {
    pub fn psm_state(self) -> PsmState {
        match bits(self.0, 0, 2) {
            0 => PsmState::Acquisition,
            1 => PsmState::Tracking,
            2 => PsmState::PowerOptimizedTracking,
            3 => PsmState::Inactive,
            _ => unreachable!("two-bit PSM state value out of range"),
        }
    }

    /// Raw two-bit power-save-mode sub-field
    pub const fn psm_state_raw(self) -> u8 {
        self.0 & 3
    }

    pub fn spoof_det_state(self) -> SpoofDetState {
        match bits(self.0, 3, 2) {
            0 => SpoofDetState::UnknownOrDeactivated,
            1 => SpoofDetState::NoSpoofing,
            2 => SpoofDetState::Spoofing,
            3 => SpoofDetState::MultipleSpoofing,
            _ => unreachable!("two-bit spoofing state value out of range"),
        }
    }

    /// Raw two-bit spoofing-detection sub-field
    pub const fn spoof_det_state_raw(self) -> u8 {
        (self.0 >> 3) & 3
    }

    pub const fn from(x: u8) -> Self {
        Self(x)
    }
}

impl fmt::Debug for NavStatusFlags2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavStatusFlags2")
            .field("psm_state", &self.psm_state())
            .field("spoof_det_state", &self.spoof_det_state())
            .finish()
    }
}

/// Power save mode state
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PsmState {
    Acquisition = 0,
    Tracking = 1,
    PowerOptimizedTracking = 2,
    Inactive = 3,
}

impl PsmState {
    pub fn description(self) -> &'static str {
        match self {
            PsmState::Acquisition => "ACQUISITION",
            PsmState::Tracking => "TRACKING",
            PsmState::PowerOptimizedTracking => "POWER OPTIMIZED TRACKING",
            PsmState::Inactive => "INACTIVE",
        }
    }
}

/// Spoofing detection state
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpoofDetState {
    UnknownOrDeactivated = 0,
    NoSpoofing = 1,
    Spoofing = 2,
    MultipleSpoofing = 3,
}

impl SpoofDetState {
    pub fn description(self) -> &'static str {
        match self {
            SpoofDetState::UnknownOrDeactivated => "Unknown or deactivated",
            SpoofDetState::NoSpoofing => "No spoofing indicated",
            SpoofDetState::Spoofing => "Spoofing indicated",
            SpoofDetState::MultipleSpoofing => "Multiple spoofing indications",
        }
    }
}

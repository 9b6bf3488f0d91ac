use bitflags::bitflags;
use core::fmt;

use crate::error::ParserError;
use crate::ubx_packets::wire::{bit, bits, read_i32, read_u16, read_u32};
use crate::ubx_packets::{GpsFix, UbxPacketMeta};

/// Navigation Position Velocity Time Solution
///
/// Contains a reference to an underlying buffer, contains accessor methods
/// to retrieve data.
pub struct NavPvtRef<'a>(pub(crate) &'a [u8]);

impl UbxPacketMeta for NavPvtRef<'_> {
    const CLASS: u8 = 0x01;
    const ID: u8 = 0x07;
    const FIXED_PAYLOAD_LEN: Option<u16> = Some(76);
    const MAX_PAYLOAD_LEN: u16 = 76;
}

impl<'a> NavPvtRef<'a> {
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.0
    }

    /// GPS Millisecond Time of Week
    #[inline]
    pub fn itow(&self) -> u32 {
        read_u32(self.0, 0)
    }

    /// Year (UTC)
    #[inline]
    pub fn year(&self) -> u16 {
        read_u16(self.0, 4)
    }

    /// Month, 1..12 (UTC)
    #[inline]
    pub fn month(&self) -> u8 {
        self.0[6]
    }

    /// Day of month, 1..31 (UTC)
    #[inline]
    pub fn day(&self) -> u8 {
        self.0[7]
    }

    #[inline]
    pub fn hour(&self) -> u8 {
        self.0[8]
    }

    #[inline]
    pub fn min(&self) -> u8 {
        self.0[9]
    }

    #[inline]
    pub fn sec(&self) -> u8 {
        self.0[10]
    }

    /// Validity flags of the UTC date and time fields
    #[inline]
    pub fn valid(&self) -> NavPvtValidFlags {
        NavPvtValidFlags::from_bits_truncate(self.0[11])
    }

    /// Time accuracy estimate (ns)
    #[inline]
    pub fn time_accuracy(&self) -> u32 {
        read_u32(self.0, 12)
    }

    /// Fraction of second, -1e9..1e9 (ns)
    #[inline]
    pub fn nanosecond(&self) -> i32 {
        read_i32(self.0, 16)
    }

    /// GNSS fix Type
    #[inline]
    pub fn fix_type(&self) -> GpsFix {
        GpsFix::from_raw(self.0[20])
    }

    #[inline]
    pub fn fix_type_raw(&self) -> u8 {
        self.0[20]
    }

    /// Fix status flags
    #[inline]
    pub fn flags(&self) -> NavPvtFlags {
        NavPvtFlags::from(self.0[21])
    }

    /// Additional flags
    #[inline]
    pub fn flags2(&self) -> NavPvtFlags2 {
        NavPvtFlags2::from_bits_truncate(self.0[22])
    }

    /// Number of satellites used in the navigation solution
    #[inline]
    pub fn num_satellites(&self) -> u8 {
        self.0[23]
    }

    /// Longitude in 1e-7 degrees
    #[inline]
    pub fn lon_raw(&self) -> i32 {
        read_i32(self.0, 24)
    }

    /// Longitude in degrees
    #[inline]
    pub fn lon_degrees(&self) -> f64 {
        f64::from(self.lon_raw()) * 1e-7
    }

    /// Latitude in 1e-7 degrees
    #[inline]
    pub fn lat_raw(&self) -> i32 {
        read_i32(self.0, 28)
    }

    /// Latitude in degrees
    #[inline]
    pub fn lat_degrees(&self) -> f64 {
        f64::from(self.lat_raw()) * 1e-7
    }

    /// Height above ellipsoid (mm)
    #[inline]
    pub fn height(&self) -> i32 {
        read_i32(self.0, 32)
    }

    /// Height above mean sea level (mm)
    #[inline]
    pub fn height_msl(&self) -> i32 {
        read_i32(self.0, 36)
    }

    /// Horizontal accuracy estimate (mm)
    #[inline]
    pub fn horiz_accuracy(&self) -> u32 {
        read_u32(self.0, 40)
    }

    /// Vertical accuracy estimate (mm)
    #[inline]
    pub fn vert_accuracy(&self) -> u32 {
        read_u32(self.0, 44)
    }

    /// North velocity component (mm/s)
    #[inline]
    pub fn vel_north(&self) -> i32 {
        read_i32(self.0, 48)
    }

    /// East velocity component (mm/s)
    #[inline]
    pub fn vel_east(&self) -> i32 {
        read_i32(self.0, 52)
    }

    /// Down velocity component (mm/s)
    #[inline]
    pub fn vel_down(&self) -> i32 {
        read_i32(self.0, 56)
    }

    /// Ground speed 2-D (mm/s)
    #[inline]
    pub fn ground_speed(&self) -> i32 {
        read_i32(self.0, 60)
    }

    /// Heading of motion 2-D in 1e-5 degrees
    #[inline]
    pub fn heading_raw(&self) -> i32 {
        read_i32(self.0, 64)
    }

    /// Heading of motion 2-D in degrees
    #[inline]
    pub fn heading_degrees(&self) -> f64 {
        f64::from(self.heading_raw()) * 1e-5
    }

    /// Speed accuracy estimate (mm/s)
    #[inline]
    pub fn speed_accuracy(&self) -> u32 {
        read_u32(self.0, 68)
    }

    /// Heading accuracy estimate in 1e-5 degrees
    #[inline]
    pub fn heading_accuracy_raw(&self) -> u32 {
        read_u32(self.0, 72)
    }

    /// Heading accuracy estimate in degrees
    #[inline]
    pub fn heading_accuracy_degrees(&self) -> f64 {
        f64::from(self.heading_accuracy_raw()) * 1e-5
    }

    pub(crate) fn validate(payload: &[u8]) -> Result<(), ParserError> {
        let expect = 76;
        let got = payload.len();
        if got == expect {
            Ok(())
        } else {
            Err(ParserError::InvalidPacketLen {
                packet: "NavPvt",
                expect,
                got,
            })
        }
    }
}

impl fmt::Debug for NavPvtRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavPvt")
            .field("itow", &self.itow())
            .field("year", &self.year())
            .field("month", &self.month())
            .field("day", &self.day())
            .field("hour", &self.hour())
            .field("min", &self.min())
            .field("sec", &self.sec())
            .field("valid", &self.valid())
            .field("time_accuracy", &self.time_accuracy())
            .field("nanosecond", &self.nanosecond())
            .field("fix_type", &self.fix_type())
            .field("flags", &self.flags())
            .field("flags2", &self.flags2())
            .field("num_satellites", &self.num_satellites())
            .field("lon_degrees", &self.lon_degrees())
            .field("lat_degrees", &self.lat_degrees())
            .field("height", &self.height())
            .field("height_msl", &self.height_msl())
            .field("horiz_accuracy", &self.horiz_accuracy())
            .field("vert_accuracy", &self.vert_accuracy())
            .field("vel_north", &self.vel_north())
            .field("vel_east", &self.vel_east())
            .field("vel_down", &self.vel_down())
            .field("ground_speed", &self.ground_speed())
            .field("heading_degrees", &self.heading_degrees())
            .field("speed_accuracy", &self.speed_accuracy())
            .field("heading_accuracy_degrees", &self.heading_accuracy_degrees())
            .finish()
    }
}

/// Fix status flags for NAV-PVT
///
/// Packs two flag bits, the three-bit power-save-mode state and the
/// two-bit carrier solution status into one byte.
#[repr(transparent)]
#[derive(Copy, Clone)]
pub struct NavPvtFlags(u8);

impl NavPvtFlags {
    /// Position and velocity valid and within DOP and accuracy masks
    pub const fn gnss_fix_ok(self) -> bool {
        (self.0 & 1) == 1
    }

    /// Differential corrections were applied
    pub fn diff_soln(self) -> bool {
        bit(self.0, 1)
    }

    /// Power save mode state, raw three-bit value
    pub fn psm_state(self) -> u8 {
        bits(self.0, 2, 3)
    }

    /// Heading of vehicle is valid
    pub fn head_veh_valid(self) -> bool {
        bit(self.0, 5)
    }

    /// Carrier phase range solution status, raw two-bit value
    /// (0 = none, 1 = float, 2 = fixed)
    pub fn carr_soln(self) -> u8 {
        bits(self.0, 6, 2)
    }

    pub const fn from(x: u8) -> Self {
        Self(x)
    }
}

impl fmt::Debug for NavPvtFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavPvtFlags")
            .field("gnss_fix_ok", &self.gnss_fix_ok())
            .field("diff_soln", &self.diff_soln())
            .field("psm_state", &self.psm_state())
            .field("head_veh_valid", &self.head_veh_valid())
            .field("carr_soln", &self.carr_soln())
            .finish()
    }
}

bitflags! {
    /// Validity flags of the NAV-PVT UTC date and time fields
    #[derive(Debug, Copy, Clone)]
    pub struct NavPvtValidFlags: u8 {
        /// valid UTC Date
        const VALID_DATE = 0x01;
        /// valid UTC time of day
        const VALID_TIME = 0x02;
        /// UTC time of day has been fully resolved (no seconds uncertainty)
        const FULLY_RESOLVED = 0x04;
        /// valid magnetic declination
        const VALID_MAG = 0x08;
    }
}

bitflags! {
    /// Additional flags for NAV-PVT
    #[derive(Debug, Copy, Clone)]
    pub struct NavPvtFlags2: u8 {
        /// information about UTC date and time validity confirmation
        /// is available
        const CONFIRMED_AVAI = 0x20;
        /// UTC date validity could be confirmed
        const CONFIRMED_DATE = 0x40;
        /// UTC time of day could be confirmed
        const CONFIRMED_TIME = 0x80;
    }
}

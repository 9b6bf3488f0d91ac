use core::fmt;

use crate::error::ParserError;
use crate::ubx_packets::wire::{read_i32, read_u32};
use crate::ubx_packets::UbxPacketMeta;

/// Velocity Solution in NED
///
/// Contains a reference to an underlying buffer, contains accessor methods
/// to retrieve data.
pub struct NavVelNedRef<'a>(pub(crate) &'a [u8]);

impl UbxPacketMeta for NavVelNedRef<'_> {
    const CLASS: u8 = 0x01;
    const ID: u8 = 0x12;
    const FIXED_PAYLOAD_LEN: Option<u16> = Some(36);
    const MAX_PAYLOAD_LEN: u16 = 36;
}

impl<'a> NavVelNedRef<'a> {
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.0
    }

    /// GPS Millisecond Time of Week
    #[inline]
    pub fn itow(&self) -> u32 {
        read_u32(self.0, 0)
    }

    /// North velocity component (cm/s)
    #[inline]
    pub fn vel_north(&self) -> i32 {
        read_i32(self.0, 4)
    }

    /// East velocity component (cm/s)
    #[inline]
    pub fn vel_east(&self) -> i32 {
        read_i32(self.0, 8)
    }

    /// Down velocity component (cm/s)
    #[inline]
    pub fn vel_down(&self) -> i32 {
        read_i32(self.0, 12)
    }

    /// Speed 3-D (cm/s)
    #[inline]
    pub fn speed_3d(&self) -> u32 {
        read_u32(self.0, 16)
    }

    /// Ground speed 2-D (cm/s)
    #[inline]
    pub fn ground_speed(&self) -> u32 {
        read_u32(self.0, 20)
    }

    /// Heading of motion 2-D in 1e-5 degrees
    #[inline]
    pub fn heading_raw(&self) -> i32 {
        read_i32(self.0, 24)
    }

    /// Heading of motion 2-D in degrees
    #[inline]
    pub fn heading_degrees(&self) -> f64 {
        f64::from(self.heading_raw()) * 1e-5
    }

    /// Speed accuracy estimate (cm/s)
    #[inline]
    pub fn speed_accuracy_estimate(&self) -> u32 {
        read_u32(self.0, 28)
    }

    /// Course / heading accuracy estimate in 1e-5 degrees
    #[inline]
    pub fn heading_accuracy_raw(&self) -> i32 {
        read_i32(self.0, 32)
    }

    /// Course / heading accuracy estimate in degrees
    #[inline]
    pub fn heading_accuracy_degrees(&self) -> f64 {
        f64::from(self.heading_accuracy_raw()) * 1e-5
    }

    pub(crate) fn validate(payload: &[u8]) -> Result<(), ParserError> {
        let expect = 36;
        let got = payload.len();
        if got == expect {
            Ok(())
        } else {
            Err(ParserError::InvalidPacketLen {
                packet: "NavVelNed",
                expect,
                got,
            })
        }
    }
}

impl fmt::Debug for NavVelNedRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavVelNed")
            .field("itow", &self.itow())
            .field("vel_north", &self.vel_north())
            .field("vel_east", &self.vel_east())
            .field("vel_down", &self.vel_down())
            .field("speed_3d", &self.speed_3d())
            .field("ground_speed", &self.ground_speed())
            .field("heading_degrees", &self.heading_degrees())
            .field("speed_accuracy_estimate", &self.speed_accuracy_estimate())
            .field("heading_accuracy_degrees", &self.heading_accuracy_degrees())
            .finish()
    }
}

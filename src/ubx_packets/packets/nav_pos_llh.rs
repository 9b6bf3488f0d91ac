use core::fmt;

use crate::error::ParserError;
use crate::ubx_packets::wire::{read_i32, read_u32};
use crate::ubx_packets::UbxPacketMeta;

/// Geodetic Position Solution
///
/// Contains a reference to an underlying buffer, contains accessor methods
/// to retrieve data.
pub struct NavPosLlhRef<'a>(pub(crate) &'a [u8]);

impl UbxPacketMeta for NavPosLlhRef<'_> {
    const CLASS: u8 = 0x01;
    const ID: u8 = 0x02;
    const FIXED_PAYLOAD_LEN: Option<u16> = Some(28);
    const MAX_PAYLOAD_LEN: u16 = 28;
}

impl<'a> NavPosLlhRef<'a> {
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.0
    }

    /// GPS Millisecond Time of Week
    #[inline]
    pub fn itow(&self) -> u32 {
        read_u32(self.0, 0)
    }

    /// Longitude in 1e-7 degrees
    #[inline]
    pub fn lon_raw(&self) -> i32 {
        read_i32(self.0, 4)
    }

    /// Longitude in degrees
    #[inline]
    pub fn lon_degrees(&self) -> f64 {
        f64::from(self.lon_raw()) * 1e-7
    }

    /// Latitude in 1e-7 degrees
    #[inline]
    pub fn lat_raw(&self) -> i32 {
        read_i32(self.0, 8)
    }

    /// Latitude in degrees
    #[inline]
    pub fn lat_degrees(&self) -> f64 {
        f64::from(self.lat_raw()) * 1e-7
    }

    /// Height above ellipsoid (mm)
    #[inline]
    pub fn height(&self) -> i32 {
        read_i32(self.0, 12)
    }

    /// Height above mean sea level (mm)
    #[inline]
    pub fn height_msl(&self) -> i32 {
        read_i32(self.0, 16)
    }

    /// Horizontal accuracy estimate (mm)
    #[inline]
    pub fn h_acc(&self) -> u32 {
        read_u32(self.0, 20)
    }

    /// Vertical accuracy estimate (mm)
    #[inline]
    pub fn v_acc(&self) -> u32 {
        read_u32(self.0, 24)
    }

    pub(crate) fn validate(payload: &[u8]) -> Result<(), ParserError> {
        let expect = 28;
        let got = payload.len();
        if got == expect {
            Ok(())
        } else {
            Err(ParserError::InvalidPacketLen {
                packet: "NavPosLlh",
                expect,
                got,
            })
        }
    }
}

impl fmt::Debug for NavPosLlhRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavPosLlh")
            .field("itow", &self.itow())
            .field("lon_degrees", &self.lon_degrees())
            .field("lat_degrees", &self.lat_degrees())
            .field("height", &self.height())
            .field("height_msl", &self.height_msl())
            .field("h_acc", &self.h_acc())
            .field("v_acc", &self.v_acc())
            .finish()
    }
}

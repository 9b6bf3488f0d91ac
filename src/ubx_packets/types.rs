use chrono::prelude::*;
use core::convert::TryFrom;

use super::packets::*;
use crate::error::DateTimeError;

/// GNSS constellation identifier, as used by the per-satellite entries of
/// NAV-SAT.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GnssId {
    Gps,
    Sbas,
    Galileo,
    BeiDou,
    Imes,
    Qzss,
    Glonass,
    /// An identifier the interface description gives no name for
    Unknown(u8),
}

impl GnssId {
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0 => GnssId::Gps,
            1 => GnssId::Sbas,
            2 => GnssId::Galileo,
            3 => GnssId::BeiDou,
            4 => GnssId::Imes,
            5 => GnssId::Qzss,
            6 => GnssId::Glonass,
            x => GnssId::Unknown(x),
        }
    }

    pub fn raw(self) -> u8 {
        match self {
            GnssId::Gps => 0,
            GnssId::Sbas => 1,
            GnssId::Galileo => 2,
            GnssId::BeiDou => 3,
            GnssId::Imes => 4,
            GnssId::Qzss => 5,
            GnssId::Glonass => 6,
            GnssId::Unknown(x) => x,
        }
    }

    /// Constellation name; empty for unknown identifiers.
    pub fn name(self) -> &'static str {
        match self {
            GnssId::Gps => "GPS",
            GnssId::Sbas => "SBAS",
            GnssId::Galileo => "Galileo",
            GnssId::BeiDou => "BeiDou",
            GnssId::Imes => "IMES",
            GnssId::Qzss => "QZSS",
            GnssId::Glonass => "GLONASS",
            GnssId::Unknown(_) => "",
        }
    }
}

/// Represents a world position, can be constructed from NavPosLlh and
/// NavPvt packets.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Longitude in degrees
    pub lon: f64,

    /// Latitude in degrees
    pub lat: f64,

    /// Altitude above mean sea level in meters
    pub alt: f64,
}

#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Velocity {
    /// m/s over the ground
    pub speed: f64,

    /// Heading in degrees
    pub heading: f64,
}

impl<'a> From<&NavPosLlhRef<'a>> for Position {
    fn from(packet: &NavPosLlhRef<'a>) -> Self {
        Position {
            lon: packet.lon_degrees(),
            lat: packet.lat_degrees(),
            alt: f64::from(packet.height_msl()) * 1e-3,
        }
    }
}

impl<'a> From<&NavVelNedRef<'a>> for Velocity {
    fn from(packet: &NavVelNedRef<'a>) -> Self {
        Velocity {
            speed: f64::from(packet.ground_speed()) * 1e-2,
            heading: packet.heading_degrees(),
        }
    }
}

impl<'a> From<&NavPvtRef<'a>> for Position {
    fn from(packet: &NavPvtRef<'a>) -> Self {
        Position {
            lon: packet.lon_degrees(),
            lat: packet.lat_degrees(),
            alt: f64::from(packet.height_msl()) * 1e-3,
        }
    }
}

impl<'a> From<&NavPvtRef<'a>> for Velocity {
    fn from(packet: &NavPvtRef<'a>) -> Self {
        Velocity {
            speed: f64::from(packet.ground_speed()) * 1e-3,
            heading: packet.heading_degrees(),
        }
    }
}

/// Builds the exact UTC timestamp from NAV-PVT's own calendar fields, the
/// unambiguous alternative to resolving `iTOW` against a wall clock.
impl<'a> TryFrom<&NavPvtRef<'a>> for DateTime<Utc> {
    type Error = DateTimeError;

    fn try_from(sol: &NavPvtRef<'a>) -> Result<Self, Self::Error> {
        let date = NaiveDate::from_ymd_opt(
            i32::from(sol.year()),
            u32::from(sol.month()),
            u32::from(sol.day()),
        )
        .ok_or(DateTimeError::InvalidDate)?;
        let time = NaiveTime::from_hms_opt(
            u32::from(sol.hour()),
            u32::from(sol.min()),
            u32::from(sol.sec()),
        )
        .ok_or(DateTimeError::InvalidTime)?;

        const NANOS_LIM: u32 = 1_000_000_000;
        if (sol.nanosecond().wrapping_abs() as u32) >= NANOS_LIM {
            return Err(DateTimeError::InvalidNanoseconds);
        }

        let dt = NaiveDateTime::new(date, time)
            + chrono::Duration::nanoseconds(i64::from(sol.nanosecond()));

        Ok(dt.and_utc())
    }
}

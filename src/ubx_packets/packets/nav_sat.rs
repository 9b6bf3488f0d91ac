use core::fmt;

use crate::error::ParserError;
use crate::ubx_packets::types::GnssId;
use crate::ubx_packets::wire::{read_i16, read_u32};
use crate::ubx_packets::UbxPacketMeta;

/// Satellite Information
///
/// Contains a reference to an underlying buffer, contains accessor methods
/// to retrieve data.
pub struct NavSatRef<'a>(pub(crate) &'a [u8]);

impl UbxPacketMeta for NavSatRef<'_> {
    const CLASS: u8 = 0x01;
    const ID: u8 = 0x35;
    const FIXED_PAYLOAD_LEN: Option<u16> = None;
    const MAX_PAYLOAD_LEN: u16 = 1240;
}

impl<'a> NavSatRef<'a> {
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.0
    }

    /// GPS time of week in ms
    #[inline]
    pub fn itow(&self) -> u32 {
        read_u32(self.0, 0)
    }

    /// Message version, should be 1
    #[inline]
    pub fn version(&self) -> u8 {
        self.0[4]
    }

    /// Number of satellite entries that follow
    #[inline]
    pub fn num_svs(&self) -> u8 {
        self.0[5]
    }

    /// Iterator over the 12-byte satellite entries
    #[inline]
    pub fn svs(&self) -> NavSatIter<'a> {
        NavSatIter::new(&self.0[8..])
    }

    pub(crate) fn validate(payload: &[u8]) -> Result<(), ParserError> {
        let got = payload.len();
        let min = 8;
        if got < min {
            return Err(ParserError::InvalidPacketLen {
                packet: "NavSat",
                expect: min,
                got,
            });
        }
        if (got - min) % 12 != 0 {
            return Err(ParserError::InvalidField {
                packet: "NavSat",
                field: "svs",
            });
        }
        Ok(())
    }
}

impl fmt::Debug for NavSatRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavSat")
            .field("itow", &self.itow())
            .field("version", &self.version())
            .field("num_svs", &self.num_svs())
            .field("svs", &self.svs())
            .finish()
    }
}

#[derive(Clone)]
pub struct NavSatIter<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> NavSatIter<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }
}

impl<'a> core::iter::Iterator for NavSatIter<'a> {
    type Item = NavSatSvInfoRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset < self.data.len() {
            let data = &self.data[self.offset..self.offset + 12];
            self.offset += 12;
            Some(NavSatSvInfoRef(data))
        } else {
            None
        }
    }
}

impl fmt::Debug for NavSatIter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// One 12-byte satellite entry of a NAV-SAT message
pub struct NavSatSvInfoRef<'a>(pub(crate) &'a [u8]);

impl<'a> NavSatSvInfoRef<'a> {
    /// GNSS constellation identifier
    #[inline]
    pub fn gnss_id(&self) -> GnssId {
        GnssId::from_raw(self.0[0])
    }

    #[inline]
    pub fn gnss_id_raw(&self) -> u8 {
        self.0[0]
    }

    /// Satellite identifier within its constellation
    #[inline]
    pub fn sv_id(&self) -> u8 {
        self.0[1]
    }

    /// Carrier to noise ratio (dBHz)
    #[inline]
    pub fn cno(&self) -> u8 {
        self.0[2]
    }

    /// Elevation (degrees)
    #[inline]
    pub fn elev(&self) -> i8 {
        self.0[3] as i8
    }

    /// Azimuth (degrees)
    #[inline]
    pub fn azim(&self) -> i16 {
        read_i16(self.0, 4)
    }

    /// Pseudorange residual in 0.1 m
    #[inline]
    pub fn pr_res_raw(&self) -> i16 {
        read_i16(self.0, 6)
    }

    /// Pseudorange residual (m)
    #[inline]
    pub fn pr_res(&self) -> f64 {
        f64::from(self.pr_res_raw()) * 0.1
    }

    #[inline]
    pub fn flags(&self) -> NavSatSvFlags {
        NavSatSvFlags::from(read_u32(self.0, 8))
    }
}

impl fmt::Debug for NavSatSvInfoRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavSatSvInfo")
            .field("gnss_id", &self.gnss_id())
            .field("sv_id", &self.sv_id())
            .field("cno", &self.cno())
            .field("elev", &self.elev())
            .field("azim", &self.azim())
            .field("pr_res", &self.pr_res())
            .field("flags", &self.flags())
            .finish()
    }
}

/// Per-satellite flags word of a NAV-SAT entry
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NavSatSvFlags(u32);

impl NavSatSvFlags {
    pub fn quality_ind(self) -> NavSatQualityIndicator {
        let bits = self.0 & 0x7;
        match bits {
            0 => NavSatQualityIndicator::NoSignal,
            1 => NavSatQualityIndicator::Searching,
            2 => NavSatQualityIndicator::SignalAcquired,
            3 => NavSatQualityIndicator::SignalDetected,
            4 => NavSatQualityIndicator::CodeLock,
            5..=7 => NavSatQualityIndicator::CarrierLock,
            _ => NavSatQualityIndicator::Invalid,
        }
    }

    /// Raw three-bit quality indicator
    pub fn quality_ind_raw(self) -> u8 {
        (self.0 & 0x7) as u8
    }

    /// Signal is being used for navigation
    pub fn sv_used(self) -> bool {
        (self.0 >> 3) & 0x1 != 0
    }

    pub fn health(self) -> NavSatSvHealth {
        let bits = (self.0 >> 4) & 0x3;
        match bits {
            1 => NavSatSvHealth::Healthy,
            2 => NavSatSvHealth::Unhealthy,
            x => NavSatSvHealth::Unknown(x as u8),
        }
    }

    pub fn differential_correction_available(self) -> bool {
        (self.0 >> 6) & 0x1 != 0
    }

    pub fn smoothed(self) -> bool {
        (self.0 >> 7) & 0x1 != 0
    }

    pub fn orbit_source(self) -> NavSatOrbitSource {
        let bits = (self.0 >> 8) & 0x7;
        match bits {
            0 => NavSatOrbitSource::NoInfoAvailable,
            1 => NavSatOrbitSource::Ephemeris,
            2 => NavSatOrbitSource::Almanac,
            3 => NavSatOrbitSource::AssistNowOffline,
            4 => NavSatOrbitSource::AssistNowAutonomous,
            x => NavSatOrbitSource::Other(x as u8),
        }
    }

    pub fn ephemeris_available(self) -> bool {
        (self.0 >> 11) & 0x1 != 0
    }

    pub fn almanac_available(self) -> bool {
        (self.0 >> 12) & 0x1 != 0
    }

    pub fn an_offline_available(self) -> bool {
        (self.0 >> 13) & 0x1 != 0
    }

    pub fn an_auto_available(self) -> bool {
        (self.0 >> 14) & 0x1 != 0
    }

    pub fn sbas_corr_used(self) -> bool {
        (self.0 >> 16) & 0x1 != 0
    }

    pub fn rtcm_corr_used(self) -> bool {
        (self.0 >> 17) & 0x1 != 0
    }

    pub fn pr_corr_used(self) -> bool {
        (self.0 >> 20) & 0x1 != 0
    }

    pub fn cr_corr_used(self) -> bool {
        (self.0 >> 21) & 0x1 != 0
    }

    pub fn do_corr_used(self) -> bool {
        (self.0 >> 22) & 0x1 != 0
    }

    pub const fn from(x: u32) -> Self {
        Self(x)
    }
}

impl fmt::Debug for NavSatSvFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavSatSvFlags")
            .field("quality_ind", &self.quality_ind())
            .field("sv_used", &self.sv_used())
            .field("health", &self.health())
            .field(
                "differential_correction_available",
                &self.differential_correction_available(),
            )
            .field("smoothed", &self.smoothed())
            .field("orbit_source", &self.orbit_source())
            .field("ephemeris_available", &self.ephemeris_available())
            .field("almanac_available", &self.almanac_available())
            .field("an_offline_available", &self.an_offline_available())
            .field("an_auto_available", &self.an_auto_available())
            .field("sbas_corr_used", &self.sbas_corr_used())
            .field("rtcm_corr_used", &self.rtcm_corr_used())
            .field("pr_corr_used", &self.pr_corr_used())
            .field("cr_corr_used", &self.cr_corr_used())
            .field("do_corr_used", &self.do_corr_used())
            .finish()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavSatQualityIndicator {
    NoSignal,
    Searching,
    SignalAcquired,
    SignalDetected,
    CodeLock,
    CarrierLock,
    Invalid,
}

impl NavSatQualityIndicator {
    pub fn description(self) -> &'static str {
        match self {
            NavSatQualityIndicator::NoSignal => "no signal",
            NavSatQualityIndicator::Searching => "searching signal",
            NavSatQualityIndicator::SignalAcquired => "signal acquired",
            NavSatQualityIndicator::SignalDetected => "signal detected but unusable",
            NavSatQualityIndicator::CodeLock => "code locked and time synchronized",
            NavSatQualityIndicator::CarrierLock => {
                "code and carrier locked and time synchronized"
            },
            NavSatQualityIndicator::Invalid => "",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavSatSvHealth {
    Healthy,
    Unhealthy,
    Unknown(u8),
}

impl NavSatSvHealth {
    pub fn description(self) -> &'static str {
        match self {
            NavSatSvHealth::Healthy => "healthy",
            NavSatSvHealth::Unhealthy => "unhealthy",
            NavSatSvHealth::Unknown(0) => "unknown",
            NavSatSvHealth::Unknown(_) => "",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavSatOrbitSource {
    NoInfoAvailable,
    Ephemeris,
    Almanac,
    AssistNowOffline,
    AssistNowAutonomous,
    Other(u8),
}

impl NavSatOrbitSource {
    pub fn description(self) -> &'static str {
        match self {
            NavSatOrbitSource::NoInfoAvailable => {
                "no orbit information is available for this SV"
            },
            NavSatOrbitSource::Ephemeris => "ephemeris is used",
            NavSatOrbitSource::Almanac => "almanac is used",
            NavSatOrbitSource::AssistNowOffline => "AssistNow Offline orbit is used",
            NavSatOrbitSource::AssistNowAutonomous => "AssistNow Autonomous orbit is used",
            NavSatOrbitSource::Other(_) => "other orbit information is used",
        }
    }
}

//! Typed views of UBX NAV payloads and the `(class, id)` dispatcher.

use chrono::{DateTime, Utc};

use crate::error::ParserError;
use crate::gps_time::resolve_tow;

pub use packets::*;
pub use types::{GnssId, Position, Velocity};

mod packets;
mod types;
pub(crate) mod wire;

/// Packet-level metadata shared by all supported messages.
pub trait UbxPacketMeta {
    const CLASS: u8;
    const ID: u8;
    const FIXED_PAYLOAD_LEN: Option<u16>;
    const MAX_PAYLOAD_LEN: u16;
}

static PACKET_NAMES: [(u8, u8, &str); 5] = [
    (0x01, 0x02, "NAV-POSLLH"),
    (0x01, 0x03, "NAV-STATUS"),
    (0x01, 0x07, "NAV-PVT"),
    (0x01, 0x12, "NAV-VELNED"),
    (0x01, 0x35, "NAV-SAT"),
];

/// Symbolic name of a `(class, id)` pair, if it is a message this crate
/// decodes.
pub fn packet_name(class: u8, msg_id: u8) -> Option<&'static str> {
    PACKET_NAMES
        .iter()
        .find(|&&(c, id, _)| c == class && id == msg_id)
        .map(|&(_, _, name)| name)
}

/// Inverse of [`packet_name`].
pub fn packet_class_id(name: &str) -> Option<(u8, u8)> {
    PACKET_NAMES
        .iter()
        .find(|&&(_, _, n)| n == name)
        .map(|&(c, id, _)| (c, id))
}

/// A typed view of one decoded NAV message.
///
/// Every variant borrows the payload it was dispatched with; nothing is
/// copied and nothing outlives the caller's buffer.
#[derive(Debug)]
pub enum PacketRef<'a> {
    NavPosLlh(NavPosLlhRef<'a>),
    NavStatus(NavStatusRef<'a>),
    NavPvt(NavPvtRef<'a>),
    NavVelNed(NavVelNedRef<'a>),
    NavSat(NavSatRef<'a>),
}

impl PacketRef<'_> {
    /// Symbolic message-type name, e.g. `"NAV-PVT"`.
    pub fn name(&self) -> &'static str {
        match self {
            PacketRef::NavPosLlh(_) => "NAV-POSLLH",
            PacketRef::NavStatus(_) => "NAV-STATUS",
            PacketRef::NavPvt(_) => "NAV-PVT",
            PacketRef::NavVelNed(_) => "NAV-VELNED",
            PacketRef::NavSat(_) => "NAV-SAT",
        }
    }

    /// GPS time of week of the navigation epoch, in milliseconds.
    pub fn itow(&self) -> u32 {
        match self {
            PacketRef::NavPosLlh(packet) => packet.itow(),
            PacketRef::NavStatus(packet) => packet.itow(),
            PacketRef::NavPvt(packet) => packet.itow(),
            PacketRef::NavVelNed(packet) => packet.itow(),
            PacketRef::NavSat(packet) => packet.itow(),
        }
    }

    /// Absolute timestamp of the navigation epoch, resolved against the
    /// GPS week in progress at `now` (see [`resolve_tow`]).
    pub fn resolve_epoch(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        resolve_tow(self.itow(), now)
    }
}

/// Dispatches a checksum-validated `(class, msg_id, payload)` triple to its
/// decoder.
///
/// Unrecognized pairs yield `Ok(None)`: no record is produced and no error
/// is raised, the caller simply moves on. Recognized pairs have their
/// payload length validated before any field is read, so the accessors of
/// the returned view can never index out of bounds.
pub fn match_packet(
    class: u8,
    msg_id: u8,
    payload: &[u8],
) -> Result<Option<PacketRef<'_>>, ParserError> {
    match (class, msg_id) {
        (0x01, 0x02) => {
            NavPosLlhRef::validate(payload)?;
            Ok(Some(PacketRef::NavPosLlh(NavPosLlhRef(payload))))
        },
        (0x01, 0x03) => {
            NavStatusRef::validate(payload)?;
            Ok(Some(PacketRef::NavStatus(NavStatusRef(payload))))
        },
        (0x01, 0x07) => {
            NavPvtRef::validate(payload)?;
            Ok(Some(PacketRef::NavPvt(NavPvtRef(payload))))
        },
        (0x01, 0x12) => {
            NavVelNedRef::validate(payload)?;
            Ok(Some(PacketRef::NavVelNed(NavVelNedRef(payload))))
        },
        (0x01, 0x35) => {
            NavSatRef::validate(payload)?;
            Ok(Some(PacketRef::NavSat(NavSatRef(payload))))
        },
        _ => Ok(None),
    }
}

//! # ubx-nav
//!
//! Decoder for the UBX NAV-class messages emitted by u-blox GNSS receivers.
//!
//! This crate sits behind a framing layer: something else walks the raw
//! serial or TCP byte stream, strips sync and length bytes, validates
//! checksums and hands over one `(class, msg_id, payload)` triple at a
//! time. [`match_packet`] turns such a triple into a typed, zero-copy
//! [`PacketRef`] view of the payload:
//!
//! ```
//! use ubx_nav::{match_packet, PacketRef};
//!
//! // A checksum-validated triple from the framing layer.
//! let payload = [0u8; 28];
//! match match_packet(0x01, 0x02, &payload) {
//!     Ok(Some(PacketRef::NavPosLlh(pos))) => {
//!         let _lon = pos.lon_degrees();
//!     },
//!     Ok(Some(_)) => { /* another NAV message */ },
//!     Ok(None) => { /* a message type this crate does not decode */ },
//!     Err(_) => { /* payload length did not match the declared layout */ },
//! }
//! ```
//!
//! Message types without a decoder are reported as `Ok(None)`, never as an
//! error; downstream consumers treat them as a normal, expected outcome.
//!
//! Supported messages: NAV-POSLLH, NAV-STATUS, NAV-PVT, NAV-VELNED and
//! NAV-SAT. Field offsets, widths, bit positions and scale factors follow
//! the u-blox interface description; raw integer fields are exposed next to
//! their scaled counterparts (`lon_raw()` / `lon_degrees()`).
//!
//! Timestamps
//! ==========
//!
//! Every NAV message carries `iTOW`, the millisecond time of week. It can
//! be resolved to an absolute [`chrono::DateTime`] with [`resolve_tow`],
//! which derives the GPS week number from a caller-supplied reference time.
//! That derivation drifts near week boundaries and for recorded data; for
//! NAV-PVT the UTC calendar fields give an exact timestamp instead (see
//! `TryFrom<&NavPvtRef> for DateTime<Utc>`).
//!
//! no_std Support
//! ==============
//!
//! The crate is `no_std` without the default `std` feature; only
//! [`resolve_tow_now`] (which needs a system clock) is lost.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "serde")]
extern crate serde;

#[cfg(feature = "std")]
pub use crate::gps_time::resolve_tow_now;
pub use crate::{
    error::{DateTimeError, ParserError},
    gps_time::resolve_tow,
    ubx_packets::*,
};

mod error;
mod gps_time;
mod ubx_packets;

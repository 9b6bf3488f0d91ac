use byteorder::{LittleEndian, WriteBytesExt};
use chrono::{TimeZone, Utc};
use ubx_nav::{
    match_packet, packet_class_id, packet_name, GnssId, GpsFix, MapMatchingStatus,
    NavSatOrbitSource, NavSatQualityIndicator, NavSatSvHealth, PacketRef, ParserError, Position,
    PsmState, SpoofDetState, Velocity,
};

fn nav_pos_llh_payload(
    itow: u32,
    lon: i32,
    lat: i32,
    height: i32,
    height_msl: i32,
    h_acc: u32,
    v_acc: u32,
) -> Vec<u8> {
    let mut wtr = Vec::with_capacity(28);
    wtr.write_u32::<LittleEndian>(itow).unwrap();
    wtr.write_i32::<LittleEndian>(lon).unwrap();
    wtr.write_i32::<LittleEndian>(lat).unwrap();
    wtr.write_i32::<LittleEndian>(height).unwrap();
    wtr.write_i32::<LittleEndian>(height_msl).unwrap();
    wtr.write_u32::<LittleEndian>(h_acc).unwrap();
    wtr.write_u32::<LittleEndian>(v_acc).unwrap();
    wtr
}

#[test]
fn nav_pos_llh_scaled_and_raw_fields() {
    // Scenario from the receiver documentation: 0.1234567 deg east,
    // 0.7654321 deg north, 100 m above the ellipsoid.
    let payload = nav_pos_llh_payload(100_000, 1_234_567, 7_654_321, 100_000, 90_000, 500, 300);
    let packet = match match_packet(0x01, 0x02, &payload) {
        Ok(Some(PacketRef::NavPosLlh(packet))) => packet,
        other => panic!("expected NAV-POSLLH, got {:?}", other),
    };

    assert_eq!(packet.itow(), 100_000);
    assert_eq!(packet.lon_raw(), 1_234_567);
    assert!((packet.lon_degrees() - 0.123_456_7).abs() < 1e-12);
    assert_eq!(packet.lat_raw(), 7_654_321);
    assert!((packet.lat_degrees() - 0.765_432_1).abs() < 1e-12);
    assert_eq!(packet.height(), 100_000);
    assert_eq!(packet.height_msl(), 90_000);
    assert_eq!(packet.h_acc(), 500);
    assert_eq!(packet.v_acc(), 300);
}

#[test]
fn nav_pos_llh_rejects_wrong_length() {
    let payload = [0u8; 27];
    assert_eq!(
        match_packet(0x01, 0x02, &payload).unwrap_err(),
        ParserError::InvalidPacketLen {
            packet: "NavPosLlh",
            expect: 28,
            got: 27,
        }
    );
}

fn nav_status_payload(fix_type: u8, flags: u8, fix_stat: u8, flags2: u8) -> Vec<u8> {
    let mut wtr = Vec::with_capacity(16);
    wtr.write_u32::<LittleEndian>(112_233).unwrap();
    wtr.push(fix_type);
    wtr.push(flags);
    wtr.push(fix_stat);
    wtr.push(flags2);
    wtr.write_u32::<LittleEndian>(3_000).unwrap();
    wtr.write_u32::<LittleEndian>(600_000).unwrap();
    wtr
}

#[test]
fn nav_status_fix_type_and_flag_subfields() {
    // fix_stat 0x81: diffCorr set, mapMatching = 0b10 (used).
    // flags2 0x09: psmState = 0b01 (tracking), spoofDetState = 0b01.
    let payload = nav_status_payload(0x03, 0b1011, 0x81, 0x09);
    let packet = match match_packet(0x01, 0x03, &payload) {
        Ok(Some(PacketRef::NavStatus(packet))) => packet,
        other => panic!("expected NAV-STATUS, got {:?}", other),
    };

    assert_eq!(packet.itow(), 112_233);
    assert_eq!(packet.fix_type(), GpsFix::Fix3D);
    assert_eq!(packet.fix_type().description(), "3D-fix");

    let flags = packet.flags();
    assert!(flags.contains(ubx_nav::NavStatusFlags::GPS_FIX_OK));
    assert!(flags.contains(ubx_nav::NavStatusFlags::DIFF_SOLN));
    assert!(!flags.contains(ubx_nav::NavStatusFlags::WKN_SET));
    assert!(flags.contains(ubx_nav::NavStatusFlags::TOW_SET));

    assert!(packet.fix_stat().diff_corr());
    assert_eq!(packet.fix_stat().map_matching(), MapMatchingStatus::Used);
    assert_eq!(packet.fix_stat().map_matching_raw(), 2);

    assert_eq!(packet.flags2().psm_state(), PsmState::Tracking);
    assert_eq!(packet.flags2().psm_state().description(), "TRACKING");
    assert_eq!(packet.flags2().spoof_det_state(), SpoofDetState::NoSpoofing);
    assert_eq!(
        packet.flags2().spoof_det_state().description(),
        "No spoofing indicated"
    );

    assert_eq!(packet.time_to_first_fix(), 3_000);
    assert_eq!(packet.uptime_ms(), 600_000);
}

#[test]
fn nav_status_unmapped_fix_type_keeps_raw_value() {
    // 4 has no description in the interface description; it must not
    // be given one retroactively.
    let payload = nav_status_payload(0x04, 0, 0, 0);
    let packet = match match_packet(0x01, 0x03, &payload) {
        Ok(Some(PacketRef::NavStatus(packet))) => packet,
        other => panic!("expected NAV-STATUS, got {:?}", other),
    };

    assert_eq!(packet.fix_type(), GpsFix::Unknown(4));
    assert_eq!(packet.fix_type().raw(), 4);
    assert_eq!(packet.fix_type().description(), "");
}

fn nav_vel_ned_payload() -> Vec<u8> {
    let mut wtr = Vec::with_capacity(36);
    wtr.write_u32::<LittleEndian>(100).unwrap();
    wtr.write_i32::<LittleEndian>(123).unwrap();
    wtr.write_i32::<LittleEndian>(-456).unwrap();
    wtr.write_i32::<LittleEndian>(789).unwrap();
    wtr.write_u32::<LittleEndian>(1_000).unwrap();
    wtr.write_u32::<LittleEndian>(900).unwrap();
    wtr.write_i32::<LittleEndian>(4_530_000).unwrap();
    wtr.write_u32::<LittleEndian>(55).unwrap();
    wtr.write_i32::<LittleEndian>(250_000).unwrap();
    wtr
}

#[test]
fn nav_vel_ned_components_and_heading_scale() {
    let payload = nav_vel_ned_payload();
    let packet = match match_packet(0x01, 0x12, &payload) {
        Ok(Some(PacketRef::NavVelNed(packet))) => packet,
        other => panic!("expected NAV-VELNED, got {:?}", other),
    };

    assert_eq!(packet.itow(), 100);
    assert_eq!(packet.vel_north(), 123);
    assert_eq!(packet.vel_east(), -456);
    assert_eq!(packet.vel_down(), 789);
    assert_eq!(packet.speed_3d(), 1_000);
    assert_eq!(packet.ground_speed(), 900);
    assert_eq!(packet.heading_raw(), 4_530_000);
    assert!((packet.heading_degrees() - 45.3).abs() < 1e-9);
    assert_eq!(packet.speed_accuracy_estimate(), 55);
    assert_eq!(packet.heading_accuracy_raw(), 250_000);
    assert!((packet.heading_accuracy_degrees() - 2.5).abs() < 1e-9);

    let vel = Velocity::from(&packet);
    assert!((vel.speed - 9.0).abs() < 1e-9);
    assert!((vel.heading - 45.3).abs() < 1e-9);
}

struct SvEntry {
    gnss_id: u8,
    sv_id: u8,
    cno: u8,
    elev: i8,
    azim: i16,
    pr_res: i16,
    flags: u32,
}

fn nav_sat_payload(itow: u32, entries: &[SvEntry]) -> Vec<u8> {
    let mut wtr = Vec::with_capacity(8 + 12 * entries.len());
    wtr.write_u32::<LittleEndian>(itow).unwrap();
    wtr.push(1); // version
    wtr.push(entries.len() as u8);
    wtr.extend_from_slice(&[0, 0]); // reserved
    for entry in entries {
        wtr.push(entry.gnss_id);
        wtr.push(entry.sv_id);
        wtr.push(entry.cno);
        wtr.write_i8(entry.elev).unwrap();
        wtr.write_i16::<LittleEndian>(entry.azim).unwrap();
        wtr.write_i16::<LittleEndian>(entry.pr_res).unwrap();
        wtr.write_u32::<LittleEndian>(entry.flags).unwrap();
    }
    wtr
}

#[test]
fn nav_sat_entries_decode_from_their_strides() {
    let entries = [
        SvEntry {
            gnss_id: 6,
            sv_id: 5,
            cno: 40,
            elev: -10,
            azim: 270,
            pr_res: -25,
            // quality 4, svUsed, health healthy, orbit ephemeris,
            // ephAvail, SBAS + pseudorange corrections used
            flags: 0x4 | 0x8 | 0x10 | 0x100 | 0x800 | 0x1_0000 | 0x10_0000,
        },
        SvEntry {
            gnss_id: 0,
            sv_id: 7,
            cno: 33,
            elev: 45,
            azim: 123,
            pr_res: 7,
            // quality 7, smoothed, health 3 (unmapped), orbit 6,
            // RTCM + Doppler corrections used
            flags: 0x7 | 0x80 | 0x30 | 0x600 | 0x2_0000 | 0x40_0000,
        },
    ];
    let payload = nav_sat_payload(7_000, &entries);
    let packet = match match_packet(0x01, 0x35, &payload) {
        Ok(Some(PacketRef::NavSat(packet))) => packet,
        other => panic!("expected NAV-SAT, got {:?}", other),
    };

    assert_eq!(packet.itow(), 7_000);
    assert_eq!(packet.version(), 1);
    assert_eq!(packet.num_svs(), 2);

    let svs: Vec<_> = packet.svs().collect();
    assert_eq!(svs.len(), usize::from(packet.num_svs()));

    assert_eq!(svs[0].gnss_id(), GnssId::Glonass);
    assert_eq!(svs[0].sv_id(), 5);
    assert_eq!(svs[0].cno(), 40);
    assert_eq!(svs[0].elev(), -10);
    assert_eq!(svs[0].azim(), 270);
    assert_eq!(svs[0].pr_res_raw(), -25);
    assert!((svs[0].pr_res() + 2.5).abs() < 1e-9);

    let flags = svs[0].flags();
    assert_eq!(flags.quality_ind(), NavSatQualityIndicator::CodeLock);
    assert!(flags.sv_used());
    assert_eq!(flags.health(), NavSatSvHealth::Healthy);
    assert_eq!(flags.orbit_source(), NavSatOrbitSource::Ephemeris);
    assert!(flags.ephemeris_available());
    assert!(!flags.almanac_available());
    assert!(flags.sbas_corr_used());
    assert!(!flags.rtcm_corr_used());
    assert!(flags.pr_corr_used());
    assert!(!flags.cr_corr_used());
    assert!(!flags.do_corr_used());

    assert_eq!(svs[1].gnss_id(), GnssId::Gps);
    assert_eq!(svs[1].gnss_id().name(), "GPS");
    let flags = svs[1].flags();
    assert_eq!(flags.quality_ind(), NavSatQualityIndicator::CarrierLock);
    assert_eq!(flags.quality_ind_raw(), 7);
    assert_eq!(
        flags.quality_ind().description(),
        "code and carrier locked and time synchronized"
    );
    assert!(flags.smoothed());
    assert!(!flags.sv_used());
    assert_eq!(flags.health(), NavSatSvHealth::Unknown(3));
    assert_eq!(flags.health().description(), "");
    assert_eq!(flags.orbit_source(), NavSatOrbitSource::Other(6));
    assert_eq!(
        flags.orbit_source().description(),
        "other orbit information is used"
    );
    assert!(flags.rtcm_corr_used());
    assert!(flags.do_corr_used());
}

#[test]
fn nav_sat_empty_list_is_valid() {
    let payload = nav_sat_payload(1, &[]);
    let packet = match match_packet(0x01, 0x35, &payload) {
        Ok(Some(PacketRef::NavSat(packet))) => packet,
        other => panic!("expected NAV-SAT, got {:?}", other),
    };
    assert_eq!(packet.num_svs(), 0);
    assert_eq!(packet.svs().count(), 0);
}

#[test]
fn nav_sat_rejects_malformed_lengths() {
    assert_eq!(
        match_packet(0x01, 0x35, &[0u8; 7]).unwrap_err(),
        ParserError::InvalidPacketLen {
            packet: "NavSat",
            expect: 8,
            got: 7,
        }
    );
    assert_eq!(
        match_packet(0x01, 0x35, &[0u8; 13]).unwrap_err(),
        ParserError::InvalidField {
            packet: "NavSat",
            field: "svs",
        }
    );
}

fn nav_pvt_payload() -> Vec<u8> {
    let mut wtr = Vec::with_capacity(76);
    wtr.write_u32::<LittleEndian>(500_000).unwrap();
    wtr.write_u16::<LittleEndian>(2023).unwrap();
    wtr.push(7);
    wtr.push(15);
    wtr.push(12);
    wtr.push(34);
    wtr.push(56);
    wtr.push(0x07); // validDate | validTime | fullyResolved
    wtr.write_u32::<LittleEndian>(25).unwrap();
    wtr.write_i32::<LittleEndian>(-500).unwrap();
    wtr.push(0x03); // 3D fix
    wtr.push(0x69); // fixOk, psm 2, headVehValid, carrSoln 1
    wtr.push(0xA0); // confirmedAvai | confirmedTime
    wtr.push(12);
    wtr.write_i32::<LittleEndian>(1_234_567).unwrap();
    wtr.write_i32::<LittleEndian>(-7_654_321).unwrap();
    wtr.write_i32::<LittleEndian>(123_000).unwrap();
    wtr.write_i32::<LittleEndian>(120_000).unwrap();
    wtr.write_u32::<LittleEndian>(1_500).unwrap();
    wtr.write_u32::<LittleEndian>(2_000).unwrap();
    wtr.write_i32::<LittleEndian>(100).unwrap();
    wtr.write_i32::<LittleEndian>(-200).unwrap();
    wtr.write_i32::<LittleEndian>(50).unwrap();
    wtr.write_i32::<LittleEndian>(250).unwrap();
    wtr.write_i32::<LittleEndian>(2_712_345).unwrap();
    wtr.write_u32::<LittleEndian>(80).unwrap();
    wtr.write_u32::<LittleEndian>(150_000).unwrap();
    wtr
}

#[test]
fn nav_pvt_full_decode() {
    let payload = nav_pvt_payload();
    assert_eq!(payload.len(), 76);
    let packet = match match_packet(0x01, 0x07, &payload) {
        Ok(Some(PacketRef::NavPvt(packet))) => packet,
        other => panic!("expected NAV-PVT, got {:?}", other),
    };

    assert_eq!(packet.itow(), 500_000);
    assert_eq!(packet.year(), 2023);
    assert_eq!(packet.month(), 7);
    assert_eq!(packet.day(), 15);
    assert_eq!(packet.hour(), 12);
    assert_eq!(packet.min(), 34);
    assert_eq!(packet.sec(), 56);

    let valid = packet.valid();
    assert!(valid.contains(ubx_nav::NavPvtValidFlags::VALID_DATE));
    assert!(valid.contains(ubx_nav::NavPvtValidFlags::VALID_TIME));
    assert!(valid.contains(ubx_nav::NavPvtValidFlags::FULLY_RESOLVED));
    assert!(!valid.contains(ubx_nav::NavPvtValidFlags::VALID_MAG));

    assert_eq!(packet.time_accuracy(), 25);
    assert_eq!(packet.nanosecond(), -500);
    assert_eq!(packet.fix_type(), GpsFix::Fix3D);

    let flags = packet.flags();
    assert!(flags.gnss_fix_ok());
    assert!(!flags.diff_soln());
    assert_eq!(flags.psm_state(), 2);
    assert!(flags.head_veh_valid());
    assert_eq!(flags.carr_soln(), 1);

    let flags2 = packet.flags2();
    assert!(flags2.contains(ubx_nav::NavPvtFlags2::CONFIRMED_AVAI));
    assert!(!flags2.contains(ubx_nav::NavPvtFlags2::CONFIRMED_DATE));
    assert!(flags2.contains(ubx_nav::NavPvtFlags2::CONFIRMED_TIME));

    assert_eq!(packet.num_satellites(), 12);
    assert!((packet.lon_degrees() - 0.123_456_7).abs() < 1e-12);
    assert!((packet.lat_degrees() + 0.765_432_1).abs() < 1e-12);
    assert_eq!(packet.height(), 123_000);
    assert_eq!(packet.height_msl(), 120_000);
    assert_eq!(packet.horiz_accuracy(), 1_500);
    assert_eq!(packet.vert_accuracy(), 2_000);
    assert_eq!(packet.vel_north(), 100);
    assert_eq!(packet.vel_east(), -200);
    assert_eq!(packet.vel_down(), 50);
    assert_eq!(packet.ground_speed(), 250);
    assert!((packet.heading_degrees() - 27.123_45).abs() < 1e-9);
    assert_eq!(packet.speed_accuracy(), 80);
    assert!((packet.heading_accuracy_degrees() - 1.5).abs() < 1e-9);

    let position = Position::from(&packet);
    assert!((position.alt - 120.0).abs() < 1e-9);
    let velocity = Velocity::from(&packet);
    assert!((velocity.speed - 0.25).abs() < 1e-9);
}

#[test]
fn nav_pvt_utc_fields_give_exact_timestamp() {
    let payload = nav_pvt_payload();
    let packet = match match_packet(0x01, 0x07, &payload) {
        Ok(Some(PacketRef::NavPvt(packet))) => packet,
        other => panic!("expected NAV-PVT, got {:?}", other),
    };

    let utc = chrono::DateTime::<Utc>::try_from(&packet).unwrap();
    let expected = Utc.with_ymd_and_hms(2023, 7, 15, 12, 34, 56).unwrap()
        - chrono::Duration::nanoseconds(500);
    assert_eq!(utc, expected);
}

#[test]
fn nav_pvt_rejects_wrong_length() {
    assert_eq!(
        match_packet(0x01, 0x07, &[0u8; 92]).unwrap_err(),
        ParserError::InvalidPacketLen {
            packet: "NavPvt",
            expect: 76,
            got: 92,
        }
    );
}

#[test]
fn unrecognized_class_id_pairs_produce_no_record() {
    // Distinct from a record with empty fields: there is no record at all.
    assert!(matches!(match_packet(0x02, 0x15, &[0u8; 64]), Ok(None)));
    assert!(matches!(match_packet(0x01, 0x99, &[]), Ok(None)));
    assert!(matches!(match_packet(0x05, 0x01, &[0, 0]), Ok(None)));
}

#[test]
fn packet_ref_exposes_uniform_record_fields() {
    let payload = nav_pos_llh_payload(100_000, 0, 0, 0, 0, 0, 0);
    let packet = match_packet(0x01, 0x02, &payload).unwrap().unwrap();

    assert_eq!(packet.name(), "NAV-POSLLH");
    assert_eq!(packet.itow(), 100_000);

    let now = Utc.with_ymd_and_hms(2021, 1, 10, 12, 0, 0).unwrap();
    assert_eq!(
        packet.resolve_epoch(now),
        Utc.with_ymd_and_hms(2021, 1, 10, 0, 1, 40).unwrap()
    );
}

#[test]
fn name_lookup_works_both_ways() {
    assert_eq!(packet_name(0x01, 0x35), Some("NAV-SAT"));
    assert_eq!(packet_name(0x01, 0x07), Some("NAV-PVT"));
    assert_eq!(packet_name(0x0a, 0x04), None);
    assert_eq!(packet_class_id("NAV-VELNED"), Some((0x01, 0x12)));
    assert_eq!(packet_class_id("NAV-EOE"), None);
}

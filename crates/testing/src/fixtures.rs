//! A small, fixed store content shared by the job tests.
//!
//! Two wells named "Twin" exist on purpose so name lookups can be shown to
//! refuse ambiguous matches.

use wellops_core::*;

pub const ALPHA: &str = "w-alpha";
pub const BRAVO: &str = "w-bravo";
pub const TWIN_A: &str = "w-twin-a";
pub const TWIN_B: &str = "w-twin-b";

pub const ALPHA_1: &str = "wb-alpha-1";
pub const ALPHA_2: &str = "wb-alpha-2";
pub const BRAVO_1: &str = "wb-bravo-1";

pub const RUN_1: &str = "log-run-1";
pub const RUN_2: &str = "log-run-2";

pub fn wells() -> Vec<Well> {
    vec![
        Well {
            field: Some("North Sea".into()),
            operator: Some("Acme".into()),
            country: Some("Norway".into()),
            ..Well::new(ALPHA, "Alpha")
        },
        Well::new(BRAVO, "Bravo"),
        Well::new(TWIN_A, "Twin"),
        Well::new(TWIN_B, "Twin"),
    ]
}

fn wellbore(well: &str, well_name: &str, uid: &str, name: &str) -> Wellbore {
    Wellbore {
        uid: uid.into(),
        uid_well: well.into(),
        name: Some(name.into()),
        name_well: Some(well_name.into()),
        is_active: Some(true),
        ..Default::default()
    }
}

pub fn wellbores() -> Vec<Wellbore> {
    vec![
        wellbore(ALPHA, "Alpha", ALPHA_1, "Alpha-1"),
        wellbore(ALPHA, "Alpha", ALPHA_2, "Alpha-2"),
        wellbore(BRAVO, "Bravo", BRAVO_1, "Bravo-1"),
    ]
}

/// Identity of an object under the first Alpha wellbore.
pub fn under_alpha_1(uid: &str, name: &str) -> ObjectIdentity {
    ObjectIdentity {
        name: Some(name.into()),
        name_well: Some("Alpha".into()),
        name_wellbore: Some("Alpha-1".into()),
        ..ObjectIdentity::new(ALPHA, ALPHA_1, uid)
    }
}

fn curve(uid: &str, mnemonic: &str, unit: &str) -> LogCurveInfo {
    LogCurveInfo {
        uid: uid.into(),
        mnemonic: Some(mnemonic.into()),
        unit: Some(unit.into()),
        curve_description: None,
    }
}

pub fn logs() -> Vec<LogObject> {
    vec![
        LogObject {
            identity: under_alpha_1(RUN_1, "Run 1"),
            index_type: Some("measured depth".into()),
            index_curve: Some("DEPTH".into()),
            service_company: Some("Logging Inc".into()),
            run_number: Some("1".into()),
            start_index: Some("0".into()),
            end_index: Some("2500".into()),
            log_curve_info: vec![
                curve("c-depth", "DEPTH", "m"),
                curve("c-gr", "GR", "gAPI"),
                curve("c-rhob", "RHOB", "g/cm3"),
            ],
        },
        LogObject {
            identity: under_alpha_1(RUN_2, "Run 2"),
            index_type: Some("measured depth".into()),
            index_curve: Some("DEPTH".into()),
            log_curve_info: vec![curve("c-depth", "DEPTH", "m")],
            ..Default::default()
        },
    ]
}

pub fn mud_logs() -> Vec<MudLog> {
    ["mud-1", "mud-2"]
        .into_iter()
        .map(|uid| MudLog {
            identity: under_alpha_1(uid, uid),
            mud_log_company: Some("Mud Co".into()),
            ..Default::default()
        })
        .collect()
}

pub fn messages() -> Vec<MessageObject> {
    ["msg-1", "msg-2"]
        .into_iter()
        .map(|uid| MessageObject {
            identity: under_alpha_1(uid, uid),
            message_text: Some("daily report".into()),
            type_message: Some("informational".into()),
            ..Default::default()
        })
        .collect()
}

pub fn tubulars() -> Vec<Tubular> {
    vec![Tubular {
        identity: under_alpha_1("tub-1", "Drill string"),
        type_tubular: Some("drilling".into()),
    }]
}

pub fn wb_geometries() -> Vec<WbGeometry> {
    vec![WbGeometry {
        identity: under_alpha_1("geo-1", "Casing design"),
        wb_geometry_sections: vec![WbGeometrySection {
            uid: "sec-1".into(),
            type_hole_casing: Some("casing".into()),
            md_top: Some(Measure::new(0.0, "m")),
            md_bottom: Some(Measure::new(850.0, "m")),
            ..Default::default()
        }],
    }]
}

pub fn rigs() -> Vec<Rig> {
    vec![Rig {
        identity: under_alpha_1("rig-1", "Rig 1"),
        type_rig: Some("jack-up".into()),
        owner: Some("Acme".into()),
    }]
}

pub fn snapshot() -> Vec<StoreQuery> {
    vec![
        StoreQuery::Wells(wells()),
        StoreQuery::Wellbores(wellbores()),
        StoreQuery::Logs(logs()),
        StoreQuery::MudLogs(mud_logs()),
        StoreQuery::Messages(messages()),
        StoreQuery::Tubulars(tubulars()),
        StoreQuery::WbGeometrys(wb_geometries()),
        StoreQuery::Rigs(rigs()),
    ]
}

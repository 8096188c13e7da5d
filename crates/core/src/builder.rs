//! Construction of store queries from job payloads and references.
//!
//! Modify builders copy an entity's identity plus the fields the store lets a
//! client change for that kind. Fields the caller left unset stay unset, and
//! server-managed fields (log index ranges, parent names) are never sent even
//! when present on the payload.

use crate::{
    EntityKey, EntityKind, LogCurveInfo, LogObject, MessageObject, ObjectIdentity, StoreEntity,
    StoreQuery, Tubular, WbGeometry, WbGeometrySection, Well, Wellbore,
};

pub fn modify_well(well: &Well) -> StoreQuery {
    StoreQuery::Wells(vec![modify_well_element(well)])
}

/// One well of a batch; each element becomes its own store call.
pub fn modify_well_element(well: &Well) -> Well {
    Well {
        uid: well.uid.clone(),
        name: well.name.clone(),
        field: well.field.clone(),
        country: well.country.clone(),
        operator: well.operator.clone(),
        time_zone: well.time_zone.clone(),
        status_well: well.status_well.clone(),
    }
}

pub fn modify_wellbore(wellbore: &Wellbore) -> StoreQuery {
    StoreQuery::Wellbores(vec![Wellbore {
        uid: wellbore.uid.clone(),
        uid_well: wellbore.uid_well.clone(),
        name: wellbore.name.clone(),
        number: wellbore.number.clone(),
        suffix_api: wellbore.suffix_api.clone(),
        is_active: wellbore.is_active,
        type_wellbore: wellbore.type_wellbore.clone(),
        ..Default::default()
    }])
}

pub fn modify_log(log: &LogObject) -> StoreQuery {
    StoreQuery::Logs(vec![LogObject {
        identity: log.identity.target(),
        service_company: log.service_company.clone(),
        run_number: log.run_number.clone(),
        ..Default::default()
    }])
}

pub fn modify_tubular(tubular: &Tubular) -> StoreQuery {
    StoreQuery::Tubulars(vec![Tubular {
        identity: tubular.identity.target(),
        type_tubular: tubular.type_tubular.clone(),
    }])
}

pub fn modify_message(message: &MessageObject) -> StoreQuery {
    StoreQuery::Messages(vec![MessageObject {
        identity: message.identity.target(),
        message_text: message.message_text.clone(),
        type_message: message.type_message.clone(),
        ..Default::default()
    }])
}

pub fn modify_wb_geometry_section(
    wb_geometry: &EntityKey,
    section: &WbGeometrySection,
) -> StoreQuery {
    StoreQuery::WbGeometrys(vec![WbGeometry {
        identity: ObjectIdentity::from(wb_geometry),
        wb_geometry_sections: vec![section.clone()],
    }])
}

/// Renames one curve of a log, following the index curve when it is the one
/// being renamed.
pub fn rename_mnemonic(
    log: &EntityKey,
    curve_uid: &str,
    new_mnemonic: &str,
    is_index_curve: bool,
) -> StoreQuery {
    StoreQuery::Logs(vec![LogObject {
        identity: ObjectIdentity::from(log),
        index_curve: is_index_curve.then(|| new_mnemonic.to_owned()),
        log_curve_info: vec![LogCurveInfo {
            uid: curve_uid.to_owned(),
            mnemonic: Some(new_mnemonic.to_owned()),
            ..Default::default()
        }],
        ..Default::default()
    }])
}

/// Creation sends the complete payload.
pub fn create<T: StoreEntity>(entity: &T) -> StoreQuery {
    T::wrap(vec![entity.clone()])
}

/// Identity-only query removing every key in one call.
pub fn delete(kind: EntityKind, keys: &[EntityKey]) -> StoreQuery {
    kind.identity_query(keys)
}

/// Template used to read back an entity right after it was written.
pub fn confirm(kind: EntityKind, key: &EntityKey) -> StoreQuery {
    kind.identity_query(std::slice::from_ref(key))
}

/// Template matching every well.
pub fn all_wells() -> StoreQuery {
    StoreQuery::Wells(vec![Well::default()])
}

/// Template matching every wellbore of a well.
pub fn wellbores_of(well_uid: &str) -> StoreQuery {
    StoreQuery::Wellbores(vec![Wellbore {
        uid_well: well_uid.to_owned(),
        ..Default::default()
    }])
}

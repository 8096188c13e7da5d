//! Store entities.
//!
//! Every field beyond an entity's identity is optional. A payload only carries
//! the fields a caller wants written; unset fields are skipped on
//! serialization so the store leaves its own values untouched.

use serde::{Deserialize, Serialize};

use crate::{EntityKey, EntityKind, StoreEntity, StoreQuery};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Measure {
    pub value: f64,
    pub uom: String,
}

impl Measure {
    pub fn new(value: f64, uom: impl Into<String>) -> Self {
        Self {
            value,
            uom: uom.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Well {
    pub uid: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_well: Option<String>,
}

impl Well {
    pub fn new(uid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wellbore {
    pub uid: String,

    #[serde(default)]
    pub uid_well: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_well: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix_api: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_wellbore: Option<String>,
}

/// Identity shared by every object living under a wellbore.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectIdentity {
    pub uid: String,

    /// Left empty when the parent is only known by name
    #[serde(default)]
    pub uid_well: String,

    #[serde(default)]
    pub uid_wellbore: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_well: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_wellbore: Option<String>,
}

impl ObjectIdentity {
    pub fn new(
        uid_well: impl Into<String>,
        uid_wellbore: impl Into<String>,
        uid: impl Into<String>,
    ) -> Self {
        Self {
            uid: uid.into(),
            uid_well: uid_well.into(),
            uid_wellbore: uid_wellbore.into(),
            ..Default::default()
        }
    }

    pub fn key(&self) -> EntityKey {
        EntityKey::object(&self.uid_well, &self.uid_wellbore, &self.uid)
    }

    /// The uids plus the object's own name; parent names are never written.
    pub fn target(&self) -> Self {
        Self {
            name: self.name.clone(),
            ..Self::from(&self.key())
        }
    }
}

impl From<&EntityKey> for ObjectIdentity {
    fn from(key: &EntityKey) -> Self {
        Self::new(&key.well, &key.wellbore, &key.uid)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogCurveInfo {
    pub uid: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mnemonic: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curve_description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogObject {
    #[serde(flatten)]
    pub identity: ObjectIdentity,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_curve: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_company: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_index: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_index: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub log_curve_info: Vec<LogCurveInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tubular {
    #[serde(flatten)]
    pub identity: ObjectIdentity,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_tubular: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MudLog {
    #[serde(flatten)]
    pub identity: ObjectIdentity,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mud_log_company: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mud_log_engineers: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_md: Option<Measure>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_md: Option<Measure>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageObject {
    #[serde(flatten)]
    pub identity: ObjectIdentity,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub d_tim: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Risk {
    #[serde(flatten)]
    pub identity: ObjectIdentity,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_risk: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity_level: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability_level: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WbGeometrySection {
    pub uid: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_hole_casing: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md_top: Option<Measure>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md_bottom: Option<Measure>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_section: Option<Measure>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub od_section: Option<Measure>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curve_conductor: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WbGeometry {
    #[serde(flatten)]
    pub identity: ObjectIdentity,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub wb_geometry_sections: Vec<WbGeometrySection>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rig {
    #[serde(flatten)]
    pub identity: ObjectIdentity,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_rig: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trajectory {
    #[serde(flatten)]
    pub identity: ObjectIdentity,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_company: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BhaRun {
    #[serde(flatten)]
    pub identity: ObjectIdentity,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_string_run: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormationMarker {
    #[serde(flatten)]
    pub identity: ObjectIdentity,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md_top_sample: Option<Measure>,
}

impl StoreEntity for Well {
    const KIND: EntityKind = EntityKind::Well;

    fn key(&self) -> EntityKey {
        EntityKey::well(&self.uid)
    }

    fn from_key(key: &EntityKey) -> Self {
        Self {
            uid: key.uid.clone(),
            ..Default::default()
        }
    }

    fn wrap(items: Vec<Self>) -> StoreQuery {
        StoreQuery::Wells(items)
    }

    fn unwrap(query: StoreQuery) -> Option<Vec<Self>> {
        match query {
            StoreQuery::Wells(x) => Some(x),
            _ => None,
        }
    }
}

impl StoreEntity for Wellbore {
    const KIND: EntityKind = EntityKind::Wellbore;

    fn key(&self) -> EntityKey {
        EntityKey::wellbore(&self.uid_well, &self.uid)
    }

    fn from_key(key: &EntityKey) -> Self {
        Self {
            uid: key.uid.clone(),
            uid_well: key.well.clone(),
            ..Default::default()
        }
    }

    fn wrap(items: Vec<Self>) -> StoreQuery {
        StoreQuery::Wellbores(items)
    }

    fn unwrap(query: StoreQuery) -> Option<Vec<Self>> {
        match query {
            StoreQuery::Wellbores(x) => Some(x),
            _ => None,
        }
    }
}

macro_rules! wellbore_object {
    ($ty:ty, $kind:ident, $variant:ident) => {
        impl StoreEntity for $ty {
            const KIND: EntityKind = EntityKind::$kind;

            fn key(&self) -> EntityKey {
                self.identity.key()
            }

            fn from_key(key: &EntityKey) -> Self {
                Self {
                    identity: ObjectIdentity::from(key),
                    ..Default::default()
                }
            }

            fn wrap(items: Vec<Self>) -> StoreQuery {
                StoreQuery::$variant(items)
            }

            fn unwrap(query: StoreQuery) -> Option<Vec<Self>> {
                match query {
                    StoreQuery::$variant(x) => Some(x),
                    _ => None,
                }
            }
        }
    };
}

wellbore_object!(LogObject, Log, Logs);
wellbore_object!(Tubular, Tubular, Tubulars);
wellbore_object!(MudLog, MudLog, MudLogs);
wellbore_object!(MessageObject, Message, Messages);
wellbore_object!(Risk, Risk, Risks);
wellbore_object!(WbGeometry, WbGeometry, WbGeometrys);
wellbore_object!(Rig, Rig, Rigs);
wellbore_object!(Trajectory, Trajectory, Trajectorys);
wellbore_object!(BhaRun, BhaRun, BhaRuns);
wellbore_object!(FormationMarker, FormationMarker, FormationMarkers);

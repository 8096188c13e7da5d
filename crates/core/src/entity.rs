//! Entity kinds and their capability table.
//!
//! Every kind the store knows about is listed in [`EntityKind`]. Anything the
//! pipeline needs to know about a kind (collection name, header fields, how
//! to build an identity-only query) lives in a single [`KindCapabilities`]
//! row, so adding a kind means adding a row rather than touching the workers.

use std::fmt::Display;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{model::*, StoreQuery};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntityKind {
    Well,
    Wellbore,
    Log,
    Tubular,
    MudLog,
    Message,
    Risk,
    WbGeometry,
    Rig,
    Trajectory,
    BhaRun,
    FormationMarker,
}

pub struct KindCapabilities {
    pub kind: EntityKind,

    /// Name of the store collection wrapping elements of this kind
    pub collection: &'static str,

    /// Human-readable label used in job messages
    pub label: &'static str,

    /// Fields kept when the store answers a header-only fetch
    pub header_fields: &'static [&'static str],

    /// Builds an identity-only query addressing the given keys
    pub identities: fn(&[EntityKey]) -> StoreQuery,
}

const WELL_HEADER: &[&str] = &["uid", "name"];

const WELLBORE_HEADER: &[&str] = &["uid", "uidWell", "name", "nameWell"];

const OBJECT_HEADER: &[&str] = &[
    "uid",
    "uidWell",
    "uidWellbore",
    "name",
    "nameWell",
    "nameWellbore",
];

const LOG_HEADER: &[&str] = &[
    "uid",
    "uidWell",
    "uidWellbore",
    "name",
    "nameWell",
    "nameWellbore",
    "indexType",
    "indexCurve",
    "logCurveInfo",
];

fn identities<T: StoreEntity>(keys: &[EntityKey]) -> StoreQuery {
    T::wrap(keys.iter().map(T::from_key).collect())
}

static CAPABILITIES: [KindCapabilities; 12] = [
    KindCapabilities {
        kind: EntityKind::Well,
        collection: "Wells",
        label: "well",
        header_fields: WELL_HEADER,
        identities: identities::<Well>,
    },
    KindCapabilities {
        kind: EntityKind::Wellbore,
        collection: "Wellbores",
        label: "wellbore",
        header_fields: WELLBORE_HEADER,
        identities: identities::<Wellbore>,
    },
    KindCapabilities {
        kind: EntityKind::Log,
        collection: "Logs",
        label: "log",
        header_fields: LOG_HEADER,
        identities: identities::<LogObject>,
    },
    KindCapabilities {
        kind: EntityKind::Tubular,
        collection: "Tubulars",
        label: "tubular",
        header_fields: OBJECT_HEADER,
        identities: identities::<Tubular>,
    },
    KindCapabilities {
        kind: EntityKind::MudLog,
        collection: "MudLogs",
        label: "mud log",
        header_fields: OBJECT_HEADER,
        identities: identities::<MudLog>,
    },
    KindCapabilities {
        kind: EntityKind::Message,
        collection: "Messages",
        label: "message",
        header_fields: OBJECT_HEADER,
        identities: identities::<MessageObject>,
    },
    KindCapabilities {
        kind: EntityKind::Risk,
        collection: "Risks",
        label: "risk",
        header_fields: OBJECT_HEADER,
        identities: identities::<Risk>,
    },
    KindCapabilities {
        kind: EntityKind::WbGeometry,
        collection: "WbGeometrys",
        label: "wellbore geometry",
        header_fields: OBJECT_HEADER,
        identities: identities::<WbGeometry>,
    },
    KindCapabilities {
        kind: EntityKind::Rig,
        collection: "Rigs",
        label: "rig",
        header_fields: OBJECT_HEADER,
        identities: identities::<Rig>,
    },
    KindCapabilities {
        kind: EntityKind::Trajectory,
        collection: "Trajectorys",
        label: "trajectory",
        header_fields: OBJECT_HEADER,
        identities: identities::<Trajectory>,
    },
    KindCapabilities {
        kind: EntityKind::BhaRun,
        collection: "BhaRuns",
        label: "bha run",
        header_fields: OBJECT_HEADER,
        identities: identities::<BhaRun>,
    },
    KindCapabilities {
        kind: EntityKind::FormationMarker,
        collection: "FormationMarkers",
        label: "formation marker",
        header_fields: OBJECT_HEADER,
        identities: identities::<FormationMarker>,
    },
];

impl EntityKind {
    pub const ALL: [EntityKind; 12] = [
        EntityKind::Well,
        EntityKind::Wellbore,
        EntityKind::Log,
        EntityKind::Tubular,
        EntityKind::MudLog,
        EntityKind::Message,
        EntityKind::Risk,
        EntityKind::WbGeometry,
        EntityKind::Rig,
        EntityKind::Trajectory,
        EntityKind::BhaRun,
        EntityKind::FormationMarker,
    ];

    pub fn capabilities(self) -> &'static KindCapabilities {
        &CAPABILITIES[self as usize]
    }

    pub fn collection(self) -> &'static str {
        self.capabilities().collection
    }

    pub fn label(self) -> &'static str {
        self.capabilities().label
    }

    /// True for kinds addressed by well, wellbore and object uid.
    pub fn is_wellbore_object(self) -> bool {
        !matches!(self, EntityKind::Well | EntityKind::Wellbore)
    }

    pub fn identity_query(self, keys: &[EntityKey]) -> StoreQuery {
        (self.capabilities().identities)(keys)
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Identity tuple of any stored entity.
///
/// Components a kind does not have are left empty: a well only has `uid`,
/// a wellbore has `well` and `uid`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityKey {
    pub well: String,
    pub wellbore: String,
    pub uid: String,
}

impl EntityKey {
    pub fn well(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            ..Default::default()
        }
    }

    pub fn wellbore(well: impl Into<String>, uid: impl Into<String>) -> Self {
        Self {
            well: well.into(),
            uid: uid.into(),
            ..Default::default()
        }
    }

    pub fn object(
        well: impl Into<String>,
        wellbore: impl Into<String>,
        uid: impl Into<String>,
    ) -> Self {
        Self {
            well: well.into(),
            wellbore: wellbore.into(),
            uid: uid.into(),
        }
    }

    /// Uid of the well this key belongs to, whatever the kind.
    pub fn well_uid(&self) -> &str {
        if self.well.is_empty() {
            &self.uid
        } else {
            &self.well
        }
    }

    /// True when every component the kind requires is populated.
    pub fn is_complete(&self, kind: EntityKind) -> bool {
        match kind {
            EntityKind::Well => !self.uid.is_empty(),
            EntityKind::Wellbore => !self.uid.is_empty() && !self.well.is_empty(),
            _ => !self.uid.is_empty() && !self.well.is_empty() && !self.wellbore.is_empty(),
        }
    }
}

impl Display for EntityKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.well.is_empty(), self.wellbore.is_empty()) {
            (true, _) => write!(f, "{}", self.uid),
            (false, true) => write!(f, "{}/{}", self.well, self.uid),
            (false, false) => write!(f, "{}/{}/{}", self.well, self.wellbore, self.uid),
        }
    }
}

/// A typed element of one store collection.
pub trait StoreEntity: Serialize + DeserializeOwned + Clone + Default + Send + Sync + 'static {
    const KIND: EntityKind;

    fn key(&self) -> EntityKey;

    /// An element carrying nothing but the identity in `key`.
    fn from_key(key: &EntityKey) -> Self;

    fn wrap(items: Vec<Self>) -> StoreQuery;

    fn unwrap(query: StoreQuery) -> Option<Vec<Self>>;
}

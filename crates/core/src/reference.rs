//! References addressing store entities by uid and/or name.

use serde::{Deserialize, Serialize};

use crate::{EntityKey, EntityKind};

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|x| !x.is_empty())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub well_uid: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub well_name: Option<String>,
}

impl WellReference {
    pub fn by_uid(uid: impl Into<String>) -> Self {
        Self {
            well_uid: Some(uid.into()),
            well_name: None,
        }
    }

    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            well_uid: None,
            well_name: Some(name.into()),
        }
    }

    pub fn uid(&self) -> Option<&str> {
        non_empty(&self.well_uid)
    }

    pub fn name(&self) -> Option<&str> {
        non_empty(&self.well_name)
    }

    pub fn is_addressable(&self) -> bool {
        self.uid().is_some() || self.name().is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellboreReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub well_uid: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub well_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wellbore_uid: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wellbore_name: Option<String>,
}

impl WellboreReference {
    pub fn by_uid(well_uid: impl Into<String>, wellbore_uid: impl Into<String>) -> Self {
        Self {
            well_uid: Some(well_uid.into()),
            wellbore_uid: Some(wellbore_uid.into()),
            ..Default::default()
        }
    }

    pub fn by_name(well_name: impl Into<String>, wellbore_name: impl Into<String>) -> Self {
        Self {
            well_name: Some(well_name.into()),
            wellbore_name: Some(wellbore_name.into()),
            ..Default::default()
        }
    }

    pub fn well(&self) -> WellReference {
        WellReference {
            well_uid: self.well_uid.clone(),
            well_name: self.well_name.clone(),
        }
    }

    pub fn uid(&self) -> Option<&str> {
        non_empty(&self.wellbore_uid)
    }

    pub fn name(&self) -> Option<&str> {
        non_empty(&self.wellbore_name)
    }

    pub fn is_addressable(&self) -> bool {
        self.well().is_addressable() && (self.uid().is_some() || self.name().is_some())
    }

    /// True when both uids are known and no lookup is needed.
    pub fn is_resolved(&self) -> bool {
        self.well().uid().is_some() && self.uid().is_some()
    }

    /// Uids of the wellbore, empty when not resolved yet.
    pub fn key(&self) -> EntityKey {
        EntityKey::wellbore(
            self.well_uid.clone().unwrap_or_default(),
            self.wellbore_uid.clone().unwrap_or_default(),
        )
    }
}

/// A single wellbore object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectReference {
    #[serde(flatten)]
    pub parent: WellboreReference,

    pub uid: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ObjectReference {
    pub fn new(
        well_uid: impl Into<String>,
        wellbore_uid: impl Into<String>,
        uid: impl Into<String>,
    ) -> Self {
        Self {
            parent: WellboreReference::by_uid(well_uid, wellbore_uid),
            uid: uid.into(),
            name: None,
        }
    }

    pub fn key(&self) -> EntityKey {
        let parent = self.parent.key();
        EntityKey::object(parent.well, parent.uid, &self.uid)
    }
}

pub type LogReference = ObjectReference;

pub type MessageObjectReference = ObjectReference;

/// Several objects of one kind under the same wellbore.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectReferences {
    #[serde(flatten)]
    pub parent: WellboreReference,

    pub object_uids: Vec<String>,

    /// Display names of the objects, used in job messages only
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub names: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_type: Option<EntityKind>,
}

impl ObjectReferences {
    pub fn new(
        well_uid: impl Into<String>,
        wellbore_uid: impl Into<String>,
        object_uids: impl IntoIterator<Item = impl Into<String>>,
        object_type: Option<EntityKind>,
    ) -> Self {
        Self {
            parent: WellboreReference::by_uid(well_uid, wellbore_uid),
            object_uids: object_uids.into_iter().map(Into::into).collect(),
            names: Vec::new(),
            object_type,
        }
    }

    /// Keys of every referenced object, in input order.
    pub fn keys(&self) -> Vec<EntityKey> {
        let parent = self.parent.key();

        self.object_uids
            .iter()
            .map(|uid| EntityKey::object(&parent.well, &parent.uid, uid))
            .collect()
    }
}

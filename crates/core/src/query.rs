//! Store request and response shapes.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{model::*, EntityKey, EntityKind, StoreEntity, StoreError};

pub type Record = Map<String, Value>;

macro_rules! store_query {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        /// A query template addressed to one store collection.
        ///
        /// Holds one element per logical target. For fetches each element is
        /// a template matched against stored entities; for mutations each
        /// element is the (partial) document to write.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(tag = "collection", content = "items")]
        pub enum StoreQuery {
            $($variant(Vec<$ty>),)*
        }

        impl StoreQuery {
            pub fn kind(&self) -> EntityKind {
                match self {
                    $(Self::$variant(_) => <$ty as StoreEntity>::KIND,)*
                }
            }

            pub fn len(&self) -> usize {
                match self {
                    $(Self::$variant(x) => x.len(),)*
                }
            }

            pub fn keys(&self) -> Vec<EntityKey> {
                match self {
                    $(Self::$variant(x) => x.iter().map(StoreEntity::key).collect(),)*
                }
            }

            /// Untyped view of each element, keyed by its identity.
            pub fn to_records(&self) -> Result<Vec<(EntityKey, Record)>, serde_json::Error> {
                match self {
                    $(Self::$variant(x) => x.iter().map(to_record).collect(),)*
                }
            }

            pub fn from_records(
                kind: EntityKind,
                records: Vec<Record>,
            ) -> Result<Self, serde_json::Error> {
                $(
                    if kind == <$ty as StoreEntity>::KIND {
                        let items = records
                            .into_iter()
                            .map(|x| serde_json::from_value(Value::Object(x)))
                            .collect::<Result<Vec<$ty>, _>>()?;

                        return Ok(Self::$variant(items));
                    }
                )*

                Err(serde::de::Error::custom(format!("no collection for kind {kind}")))
            }

            pub fn empty(kind: EntityKind) -> Self {
                kind.identity_query(&[])
            }
        }
    };
}

store_query!(
    Wells(Well),
    Wellbores(Wellbore),
    Logs(LogObject),
    Tubulars(Tubular),
    MudLogs(MudLog),
    Messages(MessageObject),
    Risks(Risk),
    WbGeometrys(WbGeometry),
    Rigs(Rig),
    Trajectorys(Trajectory),
    BhaRuns(BhaRun),
    FormationMarkers(FormationMarker),
);

fn to_record<T: StoreEntity>(item: &T) -> Result<(EntityKey, Record), serde_json::Error> {
    match serde_json::to_value(item)? {
        Value::Object(map) => Ok((item.key(), map)),
        _ => Err(serde::ser::Error::custom("entity did not serialize to an object")),
    }
}

impl StoreQuery {
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn collection(&self) -> &'static str {
        self.kind().collection()
    }

    /// Typed elements, or `None` when the query is of another kind.
    pub fn items<T: StoreEntity>(self) -> Option<Vec<T>> {
        T::unwrap(self)
    }

    /// Typed elements of a fetch answer; an answer of the wrong collection is
    /// a protocol error.
    pub fn into_items<T: StoreEntity>(self) -> Result<Vec<T>, StoreError> {
        let collection = self.collection();

        T::unwrap(self).ok_or_else(|| {
            StoreError::Protocol(format!(
                "expected {} in fetch answer, got {collection}",
                T::KIND.collection()
            ))
        })
    }
}

/// How much of each matched entity a fetch returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnElements {
    HeaderOnly,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Update,
    Delete,
}

impl Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Add => "add",
                Self::Update => "update",
                Self::Delete => "delete",
            }
        )
    }
}

/// Answer of the store to an add, update or delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    pub is_successful: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl QueryResult {
    pub fn ok() -> Self {
        Self {
            is_successful: true,
            reason: None,
        }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            is_successful: false,
            reason: Some(reason.into()),
        }
    }
}

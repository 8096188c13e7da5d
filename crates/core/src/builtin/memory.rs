//! Built-in in-memory store.
//!
//! Keeps every entity as an untyped JSON record keyed by kind and identity.
//! Fetches match templates on their populated scalar fields, updates are
//! merge patches (arrays of uid-carrying elements are merged element-wise)
//! and deleting a well or wellbore removes everything below it.

use std::{
    collections::BTreeMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, RwLock, RwLockReadGuard, RwLockWriteGuard,
    },
};

use serde_json::Value;
use tracing::{debug, trace};

use crate::{
    EntityKey, EntityKind, QueryResult, Record, ReturnElements, StoreClient, StoreError,
    StoreQuery,
};

type Entries = BTreeMap<(EntityKind, EntityKey), Record>;

/// A store living entirely in process memory.
#[derive(Clone, Default)]
pub struct EphemeralStore {
    entries: Arc<RwLock<Entries>>,

    /// Bumped by every accepted mutation
    revision: Arc<AtomicU64>,
}

fn matches_template(template: &Record, record: &Record) -> bool {
    template.iter().all(|(field, value)| match value {
        Value::String(x) if x.is_empty() => true,
        Value::String(_) | Value::Bool(_) | Value::Number(_) => record.get(field) == Some(value),
        _ => true,
    })
}

fn project(kind: EntityKind, record: &Record, options: ReturnElements) -> Record {
    match options {
        ReturnElements::All => record.clone(),
        ReturnElements::HeaderOnly => record
            .iter()
            .filter(|(field, _)| kind.capabilities().header_fields.contains(&field.as_str()))
            .map(|(field, value)| (field.clone(), value.clone()))
            .collect(),
    }
}

fn element_uid(value: &Value) -> Option<&str> {
    value.get("uid").and_then(Value::as_str)
}

fn merge_elements(current: &mut Vec<Value>, patch: Vec<Value>) {
    for element in patch {
        let position = element_uid(&element)
            .and_then(|uid| current.iter().position(|x| element_uid(x) == Some(uid)));

        match (position, element) {
            (Some(index), Value::Object(fields)) => {
                if let Some(Value::Object(target)) = current.get_mut(index) {
                    target.extend(fields);
                }
            }
            (_, element) => current.push(element),
        }
    }
}

fn merge(record: &mut Record, patch: Record) {
    for (field, value) in patch {
        if value.is_null() {
            continue;
        }

        let slot = record.entry(field).or_insert(Value::Null);

        match (slot, value) {
            (Value::Array(current), Value::Array(elements)) => merge_elements(current, elements),
            (slot, value) => *slot = value,
        }
    }
}

fn parent_of(kind: EntityKind, key: &EntityKey) -> Option<(EntityKind, EntityKey)> {
    match kind {
        EntityKind::Well => None,
        EntityKind::Wellbore => Some((EntityKind::Well, EntityKey::well(&key.well))),
        _ => Some((
            EntityKind::Wellbore,
            EntityKey::wellbore(&key.well, &key.wellbore),
        )),
    }
}

fn is_below(kind: EntityKind, key: &EntityKey, candidate: &EntityKey) -> bool {
    match kind {
        EntityKind::Well => candidate.well == key.uid,
        EntityKind::Wellbore => candidate.well == key.well && candidate.wellbore == key.uid,
        _ => false,
    }
}

impl EphemeralStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store holding every element of the given queries as-is.
    pub fn from_snapshot(snapshot: Vec<StoreQuery>) -> Result<Self, StoreError> {
        let mut entries = Entries::new();

        for query in snapshot {
            let kind = query.kind();

            for (key, record) in query.to_records()? {
                entries.insert((kind, key), record);
            }
        }

        debug!(entities = entries.len(), "loaded store snapshot");

        Ok(Self {
            entries: Arc::new(RwLock::new(entries)),
            revision: Default::default(),
        })
    }

    /// Current content, one query per non-empty collection.
    pub fn snapshot(&self) -> Result<Vec<StoreQuery>, StoreError> {
        let entries = self.read()?;

        let mut out = Vec::new();

        for kind in EntityKind::ALL {
            let records: Vec<_> = entries
                .iter()
                .filter(|((x, _), _)| *x == kind)
                .map(|(_, record)| record.clone())
                .collect();

            if !records.is_empty() {
                out.push(StoreQuery::from_records(kind, records)?);
            }
        }

        Ok(out)
    }

    pub fn contains(&self, kind: EntityKind, key: &EntityKey) -> bool {
        self.read()
            .map(|x| x.contains_key(&(kind, key.clone())))
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.read().map(|x| x.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of mutations accepted so far. Clones share the counter.
    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::SeqCst)
    }

    fn accepted(&self) -> Result<QueryResult, StoreError> {
        self.revision.fetch_add(1, Ordering::SeqCst);
        Ok(QueryResult::ok())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Entries>, StoreError> {
        self.entries
            .read()
            .map_err(|_| StoreError::internal("store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Entries>, StoreError> {
        self.entries
            .write()
            .map_err(|_| StoreError::internal("store lock poisoned"))
    }

    fn fetch_sync(
        &self,
        query: StoreQuery,
        options: ReturnElements,
    ) -> Result<StoreQuery, StoreError> {
        let kind = query.kind();
        let templates = query.to_records()?;
        let entries = self.read()?;

        let found: Vec<_> = entries
            .iter()
            .filter(|((x, _), _)| *x == kind)
            .filter(|(_, record)| templates.iter().any(|(_, t)| matches_template(t, record)))
            .map(|(_, record)| project(kind, record, options))
            .collect();

        trace!(collection = kind.collection(), found = found.len(), "fetch");

        Ok(StoreQuery::from_records(kind, found)?)
    }

    fn add_sync(&self, query: StoreQuery) -> Result<QueryResult, StoreError> {
        let kind = query.kind();
        let records = query.to_records()?;
        let mut entries = self.write()?;

        for (key, _) in records.iter() {
            if !key.is_complete(kind) {
                return Ok(QueryResult::rejected(format!(
                    "{kind} {key} has an incomplete identity"
                )));
            }

            if entries.contains_key(&(kind, key.clone())) {
                return Ok(QueryResult::rejected(format!("{kind} {key} already exists")));
            }

            if let Some((parent_kind, parent)) = parent_of(kind, key) {
                if !entries.contains_key(&(parent_kind, parent.clone())) {
                    return Ok(QueryResult::rejected(format!(
                        "parent {parent_kind} {parent} does not exist"
                    )));
                }
            }
        }

        for (key, record) in records {
            entries.insert((kind, key), record);
        }

        self.accepted()
    }

    fn update_sync(&self, query: StoreQuery) -> Result<QueryResult, StoreError> {
        let kind = query.kind();
        let records = query.to_records()?;
        let mut entries = self.write()?;

        if let Some((key, _)) = records
            .iter()
            .find(|(key, _)| !entries.contains_key(&(kind, key.clone())))
        {
            return Ok(QueryResult::rejected(format!("{kind} {key} does not exist")));
        }

        for (key, patch) in records {
            if let Some(record) = entries.get_mut(&(kind, key)) {
                merge(record, patch);
            }
        }

        self.accepted()
    }

    fn delete_sync(&self, query: StoreQuery) -> Result<QueryResult, StoreError> {
        let kind = query.kind();
        let keys = query.keys();
        let mut entries = self.write()?;

        if let Some(key) = keys
            .iter()
            .find(|key| !entries.contains_key(&(kind, (*key).clone())))
        {
            return Ok(QueryResult::rejected(format!("{kind} {key} does not exist")));
        }

        for key in keys {
            entries.remove(&(kind, key.clone()));

            let before = entries.len();
            entries.retain(|(_, candidate), _| !is_below(kind, &key, candidate));

            if entries.len() < before {
                debug!(%key, removed = before - entries.len(), "cascaded delete");
            }
        }

        self.accepted()
    }
}

impl StoreClient for EphemeralStore {
    async fn fetch(
        &self,
        query: StoreQuery,
        options: ReturnElements,
    ) -> Result<StoreQuery, StoreError> {
        self.fetch_sync(query, options)
    }

    async fn add(&self, query: StoreQuery) -> Result<QueryResult, StoreError> {
        self.add_sync(query)
    }

    async fn update(&self, query: StoreQuery) -> Result<QueryResult, StoreError> {
        self.update_sync(query)
    }

    async fn delete(&self, query: StoreQuery) -> Result<QueryResult, StoreError> {
        self.delete_sync(query)
    }
}

use std::sync::{Arc, Mutex};

use wellops_core::{
    EntityKey, Operation, QueryResult, ReturnElements, StoreClient, StoreError, StoreQuery,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreCall {
    Fetch(ReturnElements),
    Mutation(Operation),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub call: StoreCall,
    pub query: StoreQuery,
}

impl RecordedCall {
    pub fn is_mutation(&self) -> bool {
        matches!(self.call, StoreCall::Mutation(_))
    }

    pub fn keys(&self) -> Vec<EntityKey> {
        self.query.keys()
    }
}

/// Wraps a store and remembers every call sent to it, in order.
///
/// Clones share the same journal, so a clone handed to a runner can be
/// inspected through the original.
#[derive(Clone)]
pub struct RecordingStore<S> {
    inner: S,
    journal: Arc<Mutex<Vec<RecordedCall>>>,
}

impl<S> RecordingStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            journal: Default::default(),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    fn record(&self, call: StoreCall, query: &StoreQuery) {
        if let Ok(mut journal) = self.journal.lock() {
            journal.push(RecordedCall {
                call,
                query: query.clone(),
            });
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.journal.lock().map(|x| x.clone()).unwrap_or_default()
    }

    pub fn mutations(&self) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(RecordedCall::is_mutation)
            .collect()
    }

    pub fn clear(&self) {
        if let Ok(mut journal) = self.journal.lock() {
            journal.clear();
        }
    }
}

impl<S: StoreClient> StoreClient for RecordingStore<S> {
    async fn fetch(
        &self,
        query: StoreQuery,
        options: ReturnElements,
    ) -> Result<StoreQuery, StoreError> {
        self.record(StoreCall::Fetch(options), &query);
        self.inner.fetch(query, options).await
    }

    async fn add(&self, query: StoreQuery) -> Result<QueryResult, StoreError> {
        self.record(StoreCall::Mutation(Operation::Add), &query);
        self.inner.add(query).await
    }

    async fn update(&self, query: StoreQuery) -> Result<QueryResult, StoreError> {
        self.record(StoreCall::Mutation(Operation::Update), &query);
        self.inner.update(query).await
    }

    async fn delete(&self, query: StoreQuery) -> Result<QueryResult, StoreError> {
        self.record(StoreCall::Mutation(Operation::Delete), &query);
        self.inner.delete(query).await
    }
}

use tracing::debug;

use wellops_core::{QueryResult, ReturnElements, StoreClient, StoreError, StoreQuery};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TestFault {
    #[default]
    None,

    /// Every call fails as if the store could not be reached
    Unreachable,
    FetchTimeout,
    AddError,
    UpdateError,
    DeleteError,

    /// Mutations touching the entity with this uid are rejected by the store
    RejectTarget(String),

    /// Full fetches answer with the identity of another entity
    ForeignReadBack,
}

fn foreign(answer: StoreQuery) -> Result<StoreQuery, StoreError> {
    let kind = answer.kind();

    let records = answer
        .to_records()?
        .into_iter()
        .map(|(key, mut record)| {
            record.insert("uid".into(), format!("{}-other", key.uid).into());
            record
        })
        .collect();

    Ok(StoreQuery::from_records(kind, records)?)
}

/// Wraps a store and injects the configured fault.
#[derive(Clone)]
pub struct FaultyStore<S> {
    inner: S,
    fault: TestFault,
}

impl<S> FaultyStore<S> {
    pub fn new(inner: S, fault: TestFault) -> Self {
        Self { inner, fault }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    fn fault_err(&self, call: &str) -> StoreError {
        debug!(fault = ?self.fault, call, "injecting store fault");

        match self.fault {
            TestFault::Unreachable => StoreError::Unreachable("fault injection".into()),
            TestFault::FetchTimeout => StoreError::Timeout,
            _ => StoreError::internal(format!("fault injection: {call}")),
        }
    }

    fn rejects(&self, query: &StoreQuery) -> Option<QueryResult> {
        match &self.fault {
            TestFault::RejectTarget(uid) if query.keys().iter().any(|x| &x.uid == uid) => Some(
                QueryResult::rejected(format!("fault injection: {uid} rejected")),
            ),
            _ => None,
        }
    }
}

impl<S: StoreClient> StoreClient for FaultyStore<S> {
    async fn fetch(
        &self,
        query: StoreQuery,
        options: ReturnElements,
    ) -> Result<StoreQuery, StoreError> {
        if matches!(self.fault, TestFault::Unreachable | TestFault::FetchTimeout) {
            return Err(self.fault_err("fetch"));
        }

        let answer = self.inner.fetch(query, options).await?;

        match (&self.fault, options) {
            (TestFault::ForeignReadBack, ReturnElements::All) => foreign(answer),
            _ => Ok(answer),
        }
    }

    async fn add(&self, query: StoreQuery) -> Result<QueryResult, StoreError> {
        if matches!(self.fault, TestFault::Unreachable | TestFault::AddError) {
            return Err(self.fault_err("add"));
        }

        if let Some(rejection) = self.rejects(&query) {
            return Ok(rejection);
        }

        self.inner.add(query).await
    }

    async fn update(&self, query: StoreQuery) -> Result<QueryResult, StoreError> {
        if matches!(self.fault, TestFault::Unreachable | TestFault::UpdateError) {
            return Err(self.fault_err("update"));
        }

        if let Some(rejection) = self.rejects(&query) {
            return Ok(rejection);
        }

        self.inner.update(query).await
    }

    async fn delete(&self, query: StoreQuery) -> Result<QueryResult, StoreError> {
        if matches!(self.fault, TestFault::Unreachable | TestFault::DeleteError) {
            return Err(self.fault_err("delete"));
        }

        if let Some(rejection) = self.rejects(&query) {
            return Ok(rejection);
        }

        self.inner.delete(query).await
    }
}

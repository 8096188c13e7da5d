//! Shared tooling for tests of the job workers.

use wellops_core::{
    builtin::EphemeralStore, EntityKey, EntityKind, JobRunner, ReturnElements, StaticProvider,
    StoreClient, StoreEntity, StoreError, WorkerConfig,
};

pub mod faults;
pub mod fixtures;
pub mod recording;

pub use faults::{FaultyStore, TestFault};
pub use recording::{RecordedCall, RecordingStore, StoreCall};

/// The client handed to runners under test: every call is recorded, then
/// passed through the fault injector down to the in-memory store.
pub type TestClient = RecordingStore<FaultyStore<EphemeralStore>>;

pub type TestRunner = JobRunner<StaticProvider<TestClient>>;

pub struct Harness {
    store: EphemeralStore,
    client: TestClient,
}

impl Harness {
    pub fn new(fault: TestFault) -> Self {
        let store = match EphemeralStore::from_snapshot(fixtures::snapshot()) {
            Ok(x) => x,
            Err(err) => panic!("fixture snapshot is invalid: {err}"),
        };

        let client = RecordingStore::new(FaultyStore::new(store.clone(), fault));

        Self { store, client }
    }

    pub fn runner(&self) -> TestRunner {
        self.runner_with(WorkerConfig::default())
    }

    pub fn runner_with(&self, config: WorkerConfig) -> TestRunner {
        JobRunner::new(StaticProvider::new(self.client.clone()), config)
    }

    /// The underlying store, bypassing recording and faults.
    pub fn store(&self) -> &EphemeralStore {
        &self.store
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.client.calls()
    }

    pub fn mutations(&self) -> Vec<RecordedCall> {
        self.client.mutations()
    }

    /// Reads an entity straight from the underlying store.
    pub async fn read<T: StoreEntity>(&self, key: &EntityKey) -> Result<Option<T>, StoreError> {
        let answer = self
            .store
            .fetch(T::KIND.identity_query(std::slice::from_ref(key)), ReturnElements::All)
            .await?;

        Ok(answer.into_items::<T>()?.into_iter().next())
    }

    pub fn contains(&self, kind: EntityKind, key: &EntityKey) -> bool {
        self.store.contains(kind, key)
    }
}

/// A harness over the fixture store with no fault injected.
pub fn harness() -> Harness {
    Harness::new(TestFault::None)
}

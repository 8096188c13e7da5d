use wellops_core::{
    workers::*, EntityKey, EntityKind, Job, JobError, NotFoundError, ObjectReferences, Operation,
    RefreshAction, RefreshType, WellReference, WellboreReference,
};
use wellops_testing::{fixtures::*, harness, Harness, StoreCall, TestFault};

#[tokio::test]
async fn well_by_name_cascades_to_its_children() {
    let h = harness();

    let job = Job::DeleteWell(DeleteWellJob {
        to_delete: WellReference::by_name("Alpha"),
    });

    let (result, refresh) = h.runner().execute(job).await.unwrap();

    assert!(result.is_success, "{result:?}");
    assert_eq!(result.message, "Delete well Alpha");
    assert_eq!(refresh, RefreshAction::well(ALPHA, RefreshType::Remove));

    let mutations = h.mutations();
    assert_eq!(mutations.len(), 1);
    assert_eq!(mutations[0].keys(), vec![EntityKey::well(ALPHA)]);

    assert!(!h.contains(EntityKind::Well, &EntityKey::well(ALPHA)));
    assert!(!h.contains(EntityKind::Wellbore, &EntityKey::wellbore(ALPHA, ALPHA_1)));
    assert!(!h.contains(EntityKind::Log, &EntityKey::object(ALPHA, ALPHA_1, RUN_1)));
    assert!(h.contains(EntityKind::Wellbore, &EntityKey::wellbore(BRAVO, BRAVO_1)));
}

#[tokio::test]
async fn ambiguous_well_name_deletes_nothing() {
    let h = harness();

    let job = Job::DeleteWell(DeleteWellJob {
        to_delete: WellReference::by_name("Twin"),
    });

    let err = h.runner().execute(job).await.unwrap_err();

    assert!(matches!(
        err,
        JobError::NotFound(NotFoundError::Ambiguous { .. })
    ));
    assert!(h.mutations().is_empty());
    assert!(h.contains(EntityKind::Well, &EntityKey::well(TWIN_A)));
    assert!(h.contains(EntityKind::Well, &EntityKey::well(TWIN_B)));
}

#[tokio::test]
async fn unaddressed_well_is_rejected() {
    let h = harness();

    let job = Job::DeleteWell(DeleteWellJob {
        to_delete: WellReference::default(),
    });

    assert!(matches!(
        h.runner().execute(job).await,
        Err(JobError::Validation(_))
    ));
    assert!(h.calls().is_empty());
}

#[tokio::test]
async fn wellbore_refresh_is_scoped_to_its_well() {
    let h = harness();

    let job = Job::DeleteWellbore(DeleteWellboreJob {
        to_delete: WellboreReference::by_name("Alpha", "Alpha-2"),
    });

    let (result, refresh) = h.runner().execute(job).await.unwrap();

    assert!(result.is_success, "{result:?}");
    assert_eq!(result.message, "Delete wellbore Alpha-2");
    assert_eq!(
        refresh,
        RefreshAction::wellbore(ALPHA, ALPHA_2, RefreshType::Remove)
    );

    assert!(!h.contains(EntityKind::Wellbore, &EntityKey::wellbore(ALPHA, ALPHA_2)));
    assert!(h.contains(EntityKind::Wellbore, &EntityKey::wellbore(ALPHA, ALPHA_1)));
}

#[tokio::test]
async fn mud_logs_go_in_a_single_call() {
    let h = harness();

    let job = Job::DeleteMudLogs(DeleteMudLogsJob {
        to_delete: ObjectReferences::new(ALPHA, ALPHA_1, ["mud-1", "mud-2"], None),
    });

    let (result, refresh) = h.runner().execute(job).await.unwrap();

    assert!(result.is_success, "{result:?}");
    assert_eq!(result.message, "Delete 2 mud logs");
    assert_eq!(
        refresh,
        RefreshAction::objects(ALPHA, ALPHA_1, EntityKind::MudLog, RefreshType::Remove)
    );

    let mutations = h.mutations();
    assert_eq!(mutations.len(), 1);
    assert_eq!(mutations[0].call, StoreCall::Mutation(Operation::Delete));
    assert_eq!(mutations[0].query.kind(), EntityKind::MudLog);
    assert_eq!(mutations[0].keys().len(), 2);

    assert!(!h.contains(EntityKind::MudLog, &EntityKey::object(ALPHA, ALPHA_1, "mud-1")));
    assert!(!h.contains(EntityKind::MudLog, &EntityKey::object(ALPHA, ALPHA_1, "mud-2")));
}

#[tokio::test]
async fn log_objects_under_named_wellbore() {
    let h = harness();

    let mut to_delete = ObjectReferences::new("", "", [RUN_2], None);
    to_delete.parent = WellboreReference::by_name("Alpha", "Alpha-1");

    let job = Job::DeleteLogObjects(DeleteLogObjectsJob { to_delete });

    let (result, refresh) = h.runner().execute(job).await.unwrap();

    assert!(result.is_success, "{result:?}");
    assert_eq!(result.message, "Delete 1 log");
    assert_eq!(refresh.wellbore_uid(), Some(ALPHA_1));

    assert!(!h.contains(EntityKind::Log, &EntityKey::object(ALPHA, ALPHA_1, RUN_2)));
    assert!(h.contains(EntityKind::Log, &EntityKey::object(ALPHA, ALPHA_1, RUN_1)));
}

#[tokio::test]
async fn log_job_refuses_another_object_type() {
    let h = harness();

    let job = Job::DeleteLogObjects(DeleteLogObjectsJob {
        to_delete: ObjectReferences::new(ALPHA, ALPHA_1, ["msg-1"], Some(EntityKind::Message)),
    });

    let err = h.runner().execute(job).await.unwrap_err();

    assert!(matches!(err, JobError::Validation(_)));
    assert!(h.calls().is_empty());
}

#[tokio::test]
async fn message_objects() {
    let h = harness();

    let job = Job::DeleteMessageObjects(DeleteMessageObjectsJob {
        to_delete: ObjectReferences::new(ALPHA, ALPHA_1, ["msg-2"], None),
    });

    let (result, refresh) = h.runner().execute(job).await.unwrap();

    assert!(result.is_success, "{result:?}");
    assert_eq!(
        refresh,
        RefreshAction::objects(ALPHA, ALPHA_1, EntityKind::Message, RefreshType::Remove)
    );
    assert!(h.contains(EntityKind::Message, &EntityKey::object(ALPHA, ALPHA_1, "msg-1")));
}

#[tokio::test]
async fn generic_objects_use_the_given_type() {
    let h = harness();

    let job = Job::DeleteObjects(DeleteObjectsJob {
        to_delete: ObjectReferences::new(ALPHA, ALPHA_1, ["rig-1"], Some(EntityKind::Rig)),
    });

    let (result, refresh) = h.runner().execute(job).await.unwrap();

    assert!(result.is_success, "{result:?}");
    assert_eq!(result.message, "Delete 1 rig");
    assert_eq!(
        refresh,
        RefreshAction::objects(ALPHA, ALPHA_1, EntityKind::Rig, RefreshType::Remove)
    );
    assert!(!h.contains(EntityKind::Rig, &EntityKey::object(ALPHA, ALPHA_1, "rig-1")));
}

#[tokio::test]
async fn generic_objects_require_a_type() {
    let h = harness();

    let job = Job::DeleteObjects(DeleteObjectsJob {
        to_delete: ObjectReferences::new(ALPHA, ALPHA_1, ["rig-1"], None),
    });

    let err = h.runner().execute(job).await.unwrap_err();

    assert_eq!(err.to_string(), "object type is required");
}

#[tokio::test]
async fn failed_delete_still_reports_the_refresh_scope() {
    let h = Harness::new(TestFault::DeleteError);

    let job = Job::DeleteMudLogs(DeleteMudLogsJob {
        to_delete: ObjectReferences::new(ALPHA, ALPHA_1, ["mud-1"], None),
    });

    let (result, refresh) = h.runner().execute(job).await.unwrap();

    assert!(!result.is_success);
    assert_eq!(result.message, "Delete 1 mud log failed");
    assert_eq!(refresh.well_uid(), Some(ALPHA));
    assert!(h.contains(EntityKind::MudLog, &EntityKey::object(ALPHA, ALPHA_1, "mud-1")));
}

#[tokio::test]
async fn unknown_objects_are_rejected_by_the_store() {
    let h = harness();

    let job = Job::DeleteMudLogs(DeleteMudLogsJob {
        to_delete: ObjectReferences::new(ALPHA, ALPHA_1, ["mud-9"], None),
    });

    let (result, _) = h.runner().execute(job).await.unwrap();

    assert!(!result.is_success);
}

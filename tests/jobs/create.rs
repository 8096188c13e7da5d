use wellops_core::{
    workers::*, EntityKey, EntityKind, Job, JobError, NotFoundError, ObjectIdentity, Operation,
    RefreshAction, RefreshType, ReturnElements, Risk, Well, Wellbore,
};
use wellops_testing::{fixtures::*, harness, Harness, StoreCall, TestFault};

#[tokio::test]
async fn well_is_added_then_read_back() {
    let h = harness();

    let job = Job::CreateWell(CreateWellJob {
        well: Well {
            country: Some("Norway".into()),
            ..Well::new("w-charlie", "Charlie")
        },
    });

    let (result, refresh) = h.runner().execute(job).await.unwrap();

    assert!(result.is_success, "{result:?}");
    assert_eq!(result.message, "Create well Charlie");
    assert_eq!(refresh, RefreshAction::well("w-charlie", RefreshType::Add));

    let calls: Vec<_> = h.calls().into_iter().map(|x| x.call).collect();
    assert_eq!(
        calls,
        vec![
            StoreCall::Mutation(Operation::Add),
            StoreCall::Fetch(ReturnElements::All),
        ]
    );

    let stored: Well = h.read(&EntityKey::well("w-charlie")).await.unwrap().unwrap();
    assert_eq!(stored.country.as_deref(), Some("Norway"));
}

#[tokio::test]
async fn well_without_name_is_rejected() {
    let h = harness();

    let job = Job::CreateWell(CreateWellJob {
        well: Well {
            uid: "w-charlie".into(),
            ..Default::default()
        },
    });

    let err = h.runner().execute(job).await.unwrap_err();

    assert_eq!(err.to_string(), "Name cannot be empty");
    assert!(h.calls().is_empty());
}

#[tokio::test]
async fn duplicate_well_is_reported_as_failed() {
    let h = harness();

    let job = Job::CreateWell(CreateWellJob {
        well: Well::new(ALPHA, "Alpha again"),
    });

    let (result, _) = h.runner().execute(job).await.unwrap();

    assert!(!result.is_success);
    assert_eq!(result.message, "Create well Alpha again failed");

    // nothing to read back after a rejected add
    assert_eq!(h.calls().len(), 1);
}

#[tokio::test]
async fn wellbore_under_a_well_named_by_the_user() {
    let h = harness();

    let job = Job::CreateWellbore(CreateWellboreJob {
        wellbore: Wellbore {
            uid: "wb-bravo-2".into(),
            name: Some("Bravo-2".into()),
            name_well: Some("Bravo".into()),
            ..Default::default()
        },
    });

    let (result, refresh) = h.runner().execute(job).await.unwrap();

    assert!(result.is_success, "{result:?}");
    assert_eq!(
        refresh,
        RefreshAction::wellbore(BRAVO, "wb-bravo-2", RefreshType::Add)
    );

    let stored: Wellbore = h
        .read(&EntityKey::wellbore(BRAVO, "wb-bravo-2"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(stored.uid_well, BRAVO);
    assert_eq!(stored.name_well.as_deref(), Some("Bravo"));
    assert_eq!(stored.name.as_deref(), Some("Bravo-2"));
}

#[tokio::test]
async fn wellbore_under_an_ambiguous_well_name_is_not_created() {
    let h = harness();

    let job = Job::CreateWellbore(CreateWellboreJob {
        wellbore: Wellbore {
            uid: "wb-twin-1".into(),
            name: Some("Twin-1".into()),
            name_well: Some("Twin".into()),
            ..Default::default()
        },
    });

    let err = h.runner().execute(job).await.unwrap_err();

    assert!(matches!(
        err,
        JobError::NotFound(NotFoundError::Ambiguous { count: 2, .. })
    ));
    assert!(h.mutations().is_empty());
}

#[tokio::test]
async fn wellbore_under_a_missing_well_is_not_created() {
    let h = harness();

    let job = Job::CreateWellbore(CreateWellboreJob {
        wellbore: Wellbore {
            uid: "wb-x".into(),
            name: Some("X-1".into()),
            name_well: Some("Nowhere".into()),
            ..Default::default()
        },
    });

    let err = h.runner().execute(job).await.unwrap_err();

    assert!(matches!(err, JobError::NotFound(NotFoundError::Missing { .. })));
    assert!(h.mutations().is_empty());
}

#[tokio::test]
async fn risk_under_wellbore_named_by_the_user() {
    let h = harness();

    let job = Job::CreateRisk(CreateRiskJob {
        risk: Risk {
            identity: ObjectIdentity {
                uid: "risk-1".into(),
                name: Some("Stuck pipe".into()),
                name_well: Some("Alpha".into()),
                name_wellbore: Some("Alpha-2".into()),
                ..Default::default()
            },
            category: Some("hole".into()),
            summary: Some("pipe stuck at 1200 m".into()),
            ..Default::default()
        },
    });

    let (result, refresh) = h.runner().execute(job).await.unwrap();

    assert!(result.is_success, "{result:?}");
    assert_eq!(
        refresh,
        RefreshAction::objects(ALPHA, ALPHA_2, EntityKind::Risk, RefreshType::Add)
    );

    let stored: Risk = h
        .read(&EntityKey::object(ALPHA, ALPHA_2, "risk-1"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(stored.identity.name_wellbore.as_deref(), Some("Alpha-2"));
    assert_eq!(stored.summary.as_deref(), Some("pipe stuck at 1200 m"));
}

#[tokio::test]
async fn read_back_failure_fails_the_creation() {
    let h = Harness::new(TestFault::FetchTimeout);

    let job = Job::CreateWell(CreateWellJob {
        well: Well::new("w-charlie", "Charlie"),
    });

    let (result, _) = h.runner().execute(job).await.unwrap();

    assert!(!result.is_success);
    assert!(result.reason.unwrap().contains("timed out"));

    // the add itself went through
    assert!(h.contains(EntityKind::Well, &EntityKey::well("w-charlie")));
}

#[tokio::test]
async fn read_back_of_another_entity_fails_the_creation() {
    let h = Harness::new(TestFault::ForeignReadBack);

    let job = Job::CreateWell(CreateWellJob {
        well: Well::new("w-charlie", "Charlie"),
    });

    let (result, refresh) = h.runner().execute(job).await.unwrap();

    assert!(!result.is_success);
    assert_eq!(result.message, "Create well Charlie failed");
    assert_eq!(
        result.reason.as_deref(),
        Some("well w-charlie: entity not found after creation")
    );
    assert_eq!(refresh, RefreshAction::well("w-charlie", RefreshType::Add));
}

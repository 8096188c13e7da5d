use wellops_core::{
    workers::RenameMnemonicJob, EntityKey, EntityKind, Job, JobError, LogObject, NotFoundError,
    ObjectReference, RefreshAction, RefreshType, WellboreReference,
};
use wellops_testing::{fixtures::*, harness};

fn rename(log: &str, mnemonic: &str, new_mnemonic: &str) -> Job {
    Job::RenameMnemonic(RenameMnemonicJob::new(
        ObjectReference::new(ALPHA, ALPHA_1, log),
        mnemonic,
        new_mnemonic,
    ))
}

async fn stored_run_1(h: &wellops_testing::Harness) -> LogObject {
    h.read(&EntityKey::object(ALPHA, ALPHA_1, RUN_1))
        .await
        .unwrap()
        .unwrap()
}

#[tokio::test]
async fn plain_curve_rename() {
    let h = harness();

    let (result, refresh) = h.runner().execute(rename(RUN_1, "GR", "GR_CORR")).await.unwrap();

    assert!(result.is_success, "{result:?}");
    assert_eq!(
        refresh,
        RefreshAction::objects(ALPHA, ALPHA_1, EntityKind::Log, RefreshType::Update)
    );

    let sent = h.mutations()[0].query.clone().items::<LogObject>().unwrap();
    assert_eq!(sent[0].log_curve_info.len(), 1);
    assert_eq!(sent[0].log_curve_info[0].uid, "c-gr");
    assert_eq!(sent[0].index_curve, None);

    let log = stored_run_1(&h).await;
    let mnemonics: Vec<_> = log
        .log_curve_info
        .iter()
        .filter_map(|x| x.mnemonic.as_deref())
        .collect();

    assert_eq!(mnemonics, vec!["DEPTH", "GR_CORR", "RHOB"]);
    assert_eq!(log.index_curve.as_deref(), Some("DEPTH"));
    assert_eq!(log.log_curve_info[1].unit.as_deref(), Some("gAPI"));
}

#[tokio::test]
async fn index_curve_follows_its_mnemonic() {
    let h = harness();

    let (result, _) = h.runner().execute(rename(RUN_1, "DEPTH", "MD")).await.unwrap();

    assert!(result.is_success, "{result:?}");

    let log = stored_run_1(&h).await;
    assert_eq!(log.index_curve.as_deref(), Some("MD"));
    assert_eq!(log.log_curve_info[0].mnemonic.as_deref(), Some("MD"));
}

#[tokio::test]
async fn rename_onto_an_existing_mnemonic_sends_nothing() {
    let h = harness();

    let (result, _) = h.runner().execute(rename(RUN_1, "GR", "RHOB")).await.unwrap();

    assert!(!result.is_success);
    assert!(result.reason.unwrap().contains("RHOB"));
    assert!(h.mutations().is_empty());

    let log = stored_run_1(&h).await;
    assert_eq!(log.log_curve_info[1].mnemonic.as_deref(), Some("GR"));
}

#[tokio::test]
async fn unknown_mnemonic_is_not_found() {
    let h = harness();

    let err = h.runner().execute(rename(RUN_2, "GR", "GR2")).await.unwrap_err();

    assert!(matches!(err, JobError::NotFound(NotFoundError::Mnemonic { .. })));
    assert!(h.mutations().is_empty());
}

#[tokio::test]
async fn unknown_log_is_not_found() {
    let h = harness();

    let err = h
        .runner()
        .execute(rename("log-missing", "GR", "GR2"))
        .await
        .unwrap_err();

    assert!(matches!(err, JobError::NotFound(NotFoundError::Unknown { .. })));
}

#[tokio::test]
async fn same_mnemonic_is_rejected_up_front() {
    let h = harness();

    let err = h.runner().execute(rename(RUN_1, "GR", "GR")).await.unwrap_err();

    assert!(matches!(err, JobError::Validation(_)));
    assert!(h.calls().is_empty());
}

#[tokio::test]
async fn log_under_named_wellbore() {
    let h = harness();

    let job = Job::RenameMnemonic(RenameMnemonicJob::new(
        ObjectReference {
            parent: WellboreReference::by_name("Alpha", "Alpha-1"),
            uid: RUN_1.into(),
            name: Some("Run 1".into()),
        },
        "RHOB",
        "DEN",
    ));

    let (result, refresh) = h.runner().execute(job).await.unwrap();

    assert!(result.is_success, "{result:?}");
    assert_eq!(result.message, "Rename mnemonic RHOB to DEN in log Run 1");
    assert_eq!(refresh.wellbore_uid(), Some(ALPHA_1));

    let log = stored_run_1(&h).await;
    assert_eq!(log.log_curve_info[2].mnemonic.as_deref(), Some("DEN"));
}

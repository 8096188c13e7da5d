use wellops_core::{
    workers::*, EntityKey, EntityKind, Job, JobError, LogObject, Measure, MessageObject,
    ObjectReference, Operation, RefreshAction, RefreshType, StoreQuery, Tubular, WbGeometry,
    WbGeometrySection, Well, Wellbore, WellboreReference,
};
use wellops_testing::{fixtures::*, harness, Harness, StoreCall, TestFault};

fn rename_alpha(name: &str) -> Job {
    Job::ModifyWell(ModifyWellJob {
        well: Well::new(ALPHA, name),
    })
}

#[tokio::test]
async fn rename_issues_a_single_update_carrying_the_name() {
    let h = harness();

    let (result, refresh) = h.runner().execute(rename_alpha("Alpha Prime")).await.unwrap();

    assert!(result.is_success, "{result:?}");
    assert_eq!(refresh, RefreshAction::well(ALPHA, RefreshType::Update));

    let mutations = h.mutations();
    assert_eq!(mutations.len(), 1);
    assert_eq!(mutations[0].call, StoreCall::Mutation(Operation::Update));

    let sent = mutations[0].query.clone().items::<Well>().unwrap();
    assert_eq!(sent[0].name.as_deref(), Some("Alpha Prime"));

    let stored: Well = h.read(&EntityKey::well(ALPHA)).await.unwrap().unwrap();
    assert_eq!(stored.name.as_deref(), Some("Alpha Prime"));
}

#[tokio::test]
async fn empty_name_is_rejected_before_any_store_call() {
    for name in [None, Some(String::new())] {
        let h = harness();

        let job = Job::ModifyWell(ModifyWellJob {
            well: Well {
                uid: ALPHA.into(),
                name,
                ..Default::default()
            },
        });

        let err = h.runner().execute(job).await.unwrap_err();

        assert!(matches!(err, JobError::Validation(_)));
        assert_eq!(err.to_string(), "Name cannot be empty");
        assert!(h.calls().is_empty());
    }
}

#[tokio::test]
async fn unset_fields_keep_their_stored_values() {
    let h = harness();

    h.runner().execute(rename_alpha("Alpha Prime")).await.unwrap();

    let sent = &h.mutations()[0].query;
    let json = serde_json::to_value(sent).unwrap();
    assert_eq!(
        json["items"][0],
        serde_json::json!({ "uid": ALPHA, "name": "Alpha Prime" })
    );

    let stored: Well = h.read(&EntityKey::well(ALPHA)).await.unwrap().unwrap();
    assert_eq!(stored.operator.as_deref(), Some("Acme"));
    assert_eq!(stored.field.as_deref(), Some("North Sea"));
}

#[tokio::test]
async fn wellbore_rename_keeps_its_parent() {
    let h = harness();

    let job = Job::ModifyWellbore(ModifyWellboreJob {
        wellbore: Wellbore {
            uid: ALPHA_2.into(),
            uid_well: ALPHA.into(),
            name: Some("Alpha-2 sidetrack".into()),
            name_well: Some("Renamed by mistake".into()),
            ..Default::default()
        },
    });

    let (result, refresh) = h.runner().execute(job).await.unwrap();

    assert!(result.is_success);
    assert_eq!(
        refresh,
        RefreshAction::wellbore(ALPHA, ALPHA_2, RefreshType::Update)
    );

    let stored: Wellbore = h
        .read(&EntityKey::wellbore(ALPHA, ALPHA_2))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(stored.name.as_deref(), Some("Alpha-2 sidetrack"));
    assert_eq!(stored.name_well.as_deref(), Some("Alpha"));
}

#[tokio::test]
async fn log_modify_never_sends_index_ranges() {
    let h = harness();

    let mut log = logs().remove(0);
    log.identity.name = Some("Run 1 (final)".into());
    log.start_index = Some("100".into());
    log.end_index = Some("100".into());

    let (result, refresh) = h
        .runner()
        .execute(Job::ModifyLogObject(ModifyLogObjectJob { log_object: log }))
        .await
        .unwrap();

    assert!(result.is_success);
    assert_eq!(
        refresh,
        RefreshAction::objects(ALPHA, ALPHA_1, EntityKind::Log, RefreshType::Update)
    );

    let sent = h.mutations()[0].query.clone().items::<LogObject>().unwrap();
    assert_eq!(sent[0].start_index, None);
    assert_eq!(sent[0].end_index, None);
    assert!(sent[0].log_curve_info.is_empty());

    let stored: LogObject = h
        .read(&EntityKey::object(ALPHA, ALPHA_1, RUN_1))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(stored.identity.name.as_deref(), Some("Run 1 (final)"));
    assert_eq!(stored.end_index.as_deref(), Some("2500"));
    assert_eq!(stored.log_curve_info.len(), 3);
}

#[tokio::test]
async fn tubular_and_message_renames() {
    let h = harness();

    let mut tubular = tubulars().remove(0);
    tubular.identity.name = Some("Drill string #2".into());

    let mut message = messages().remove(0);
    message.identity.name = Some("Morning report".into());
    message.message_text = None;

    let runner = h.runner();

    let (result, _) = runner
        .execute(Job::ModifyTubular(ModifyTubularJob { tubular }))
        .await
        .unwrap();
    assert!(result.is_success);

    let (result, _) = runner
        .execute(Job::ModifyMessage(ModifyMessageJob {
            message_object: message,
        }))
        .await
        .unwrap();
    assert!(result.is_success);

    let stored: Tubular = h
        .read(&EntityKey::object(ALPHA, ALPHA_1, "tub-1"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.identity.name.as_deref(), Some("Drill string #2"));

    let stored: MessageObject = h
        .read(&EntityKey::object(ALPHA, ALPHA_1, "msg-1"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.identity.name.as_deref(), Some("Morning report"));
    assert_eq!(stored.message_text.as_deref(), Some("daily report"));
}

#[tokio::test]
async fn wb_geometry_section_by_parent_names() {
    let h = harness();

    let job = Job::ModifyWbGeometrySection(ModifyWbGeometrySectionJob {
        wb_geometry_reference: ObjectReference {
            parent: WellboreReference::by_name("Alpha", "Alpha-1"),
            uid: "geo-1".into(),
            name: None,
        },
        section: WbGeometrySection {
            uid: "sec-1".into(),
            md_bottom: Some(Measure::new(900.0, "m")),
            ..Default::default()
        },
    });

    let (result, refresh) = h.runner().execute(job).await.unwrap();

    assert!(result.is_success, "{result:?}");
    assert_eq!(
        refresh,
        RefreshAction::objects(ALPHA, ALPHA_1, EntityKind::WbGeometry, RefreshType::Update)
    );

    let sent = &h.mutations()[0].query;
    assert!(matches!(sent, StoreQuery::WbGeometrys(x) if x[0].wb_geometry_sections.len() == 1));

    let stored: WbGeometry = h
        .read(&EntityKey::object(ALPHA, ALPHA_1, "geo-1"))
        .await
        .unwrap()
        .unwrap();

    let section = &stored.wb_geometry_sections[0];
    assert_eq!(section.md_bottom, Some(Measure::new(900.0, "m")));
    assert_eq!(section.type_hole_casing.as_deref(), Some("casing"));
}

#[tokio::test]
async fn store_errors_are_reported_not_raised() {
    let h = Harness::new(TestFault::UpdateError);

    let (result, refresh) = h.runner().execute(rename_alpha("Alpha Prime")).await.unwrap();

    assert!(!result.is_success);
    assert!(result.reason.unwrap().contains("fault injection"));
    assert_eq!(refresh, RefreshAction::well(ALPHA, RefreshType::Update));
}

#[tokio::test]
async fn store_rejections_are_reported() {
    let h = harness();

    let job = Job::ModifyWell(ModifyWellJob {
        well: Well::new("w-unknown", "Ghost"),
    });

    let (result, _) = h.runner().execute(job).await.unwrap();

    assert!(!result.is_success);
    assert_eq!(result.message, "Update well Ghost failed");
}

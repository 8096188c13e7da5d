use std::sync::{Arc, Mutex};

use tracing::{
    span::{Attributes, Id},
    Subscriber,
};
use tracing_subscriber::{
    layer::{Context, SubscriberExt},
    registry::LookupSpan,
    Layer, Registry,
};
use wellops_core::{
    workers::DeleteWellJob, EntityKey, EntityKind, Job, JobError, RefreshAction, RefreshType,
    Well, WellReference,
};
use wellops_testing::{fixtures::*, harness, Harness, TestFault};

#[tokio::test]
async fn jobs_submitted_as_json() {
    let h = harness();

    let job: Job = serde_json::from_value(serde_json::json!({
        "type": "ModifyWell",
        "well": { "uid": BRAVO, "name": "Bravo Prime", "timeZone": "+01:00" },
    }))
    .unwrap();

    assert_eq!(job.name(), "modify_well");

    let (result, refresh) = h.runner().execute(job).await.unwrap();

    assert!(result.is_success);

    let json = serde_json::to_value(&refresh).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "scope": "well",
            "wellUid": BRAVO,
            "refreshType": "update",
        })
    );

    let stored: Well = h.read(&EntityKey::well(BRAVO)).await.unwrap().unwrap();
    assert_eq!(stored.time_zone.as_deref(), Some("+01:00"));
}

#[tokio::test]
async fn unreachable_store_during_lookup_is_a_failed_result() {
    let h = Harness::new(TestFault::Unreachable);

    let job = Job::DeleteWell(DeleteWellJob {
        to_delete: WellReference::by_name("Alpha"),
    });

    let (result, refresh) = h.runner().execute(job).await.unwrap();

    assert!(!result.is_success);
    assert_eq!(result.message, "Delete well Alpha failed");
    assert!(result.reason.unwrap().contains("unreachable"));
    assert_eq!(refresh.refresh_type(), RefreshType::Remove);
    assert!(h.mutations().is_empty());
}

#[tokio::test]
async fn lookups_happen_before_any_mutation() {
    let h = harness();

    let job = Job::DeleteWell(DeleteWellJob {
        to_delete: WellReference::by_name("Bravo"),
    });

    h.runner().execute(job).await.unwrap();

    let calls = h.calls();
    assert_eq!(calls.len(), 2);
    assert!(!calls[0].is_mutation());
    assert!(calls[1].is_mutation());
}

#[tokio::test]
async fn concurrent_jobs_on_one_runner() {
    let h = harness();
    let runner = h.runner();

    let (a, b) = tokio::join!(
        runner.execute(Job::ModifyWell(wellops_core::workers::ModifyWellJob {
            well: Well::new(ALPHA, "Alpha Prime"),
        })),
        runner.execute(Job::ModifyWell(wellops_core::workers::ModifyWellJob {
            well: Well::new(BRAVO, "Bravo Prime"),
        })),
    );

    assert!(a.unwrap().0.is_success);
    assert!(b.unwrap().0.is_success);
    assert_eq!(h.mutations().len(), 2);
}

type Spans = Arc<Mutex<Vec<(String, Option<String>)>>>;

/// Records every new span with the name of its parent.
struct SpanTree(Spans);

impl<S> Layer<S> for SpanTree
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(&self, _attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
        if let Some(span) = ctx.span(id) {
            let parent = span.parent().map(|x| x.name().to_owned());
            self.0.lock().unwrap().push((span.name().to_owned(), parent));
        }
    }
}

#[tokio::test]
async fn job_span_nests_under_the_runner_span() {
    let spans = Spans::default();
    let subscriber = Registry::default().with(SpanTree(spans.clone()));
    let _guard = tracing::subscriber::set_default(subscriber);

    let h = harness();
    let runner = h.runner().with_span(tracing::info_span!("test_runner"));

    let job = Job::DeleteWell(DeleteWellJob {
        to_delete: WellReference::by_uid(TWIN_B),
    });

    let (result, refresh) = runner.execute(job).await.unwrap();

    assert!(result.is_success);
    assert_eq!(refresh, RefreshAction::well(TWIN_B, RefreshType::Remove));
    assert!(!h.contains(EntityKind::Well, &EntityKey::well(TWIN_B)));

    let spans = spans.lock().unwrap().clone();
    assert!(
        spans.contains(&("execute_job".to_owned(), Some("test_runner".to_owned()))),
        "{spans:?}"
    );
}

#[tokio::test]
async fn lookup_errors_carry_the_name() {
    let h = harness();

    let job = Job::DeleteWell(DeleteWellJob {
        to_delete: WellReference::by_name("Nowhere"),
    });

    let err = h.runner().execute(job).await.unwrap_err();

    assert!(matches!(err, JobError::NotFound(_)));
    assert_eq!(err.to_string(), "no well named 'Nowhere'");
}

use httpmock::prelude::*;
use serde_json::{json, Value};

use crate::commands::intent::IncidentTarget;
use crate::config::StatusPageSettings;
use crate::statuspage::{Component, ComponentStatus, IncidentStatus, StatusPageClient};

use super::components::{
    handle_component_status, handle_overview, handle_set_component_status, overview_replies,
};
use super::incidents::{
    handle_list_incidents, handle_open_incident, handle_update_incident, NO_UNRESOLVED_INCIDENTS,
};

const INCIDENTS_PATH: &str = "/v1/pages/63kbmt268d37/incidents.json";
const COMPONENTS_PATH: &str = "/v1/pages/63kbmt268d37/components.json";

fn settings(server: &MockServer) -> StatusPageSettings {
    StatusPageSettings {
        api_base_url: format!("{}/v1", server.base_url()),
        page_id: "63kbmt268d37".to_string(),
        api_token: "89a229ce1a8dbcf9".to_string(),
        ..StatusPageSettings::default()
    }
}

fn client(settings: &StatusPageSettings) -> StatusPageClient {
    StatusPageClient::new(settings, 5).expect("client")
}

fn components_fixture() -> Value {
    json!([
        {"id": "c1", "name": "Backend Database", "status": "degraded_performance"},
        {"id": "c2", "name": "API", "status": "operational"},
        {"id": "c3", "name": "Website", "status": "operational"}
    ])
}

fn unresolved_incidents_fixture() -> Value {
    json!([
        {
            "id": "sched01",
            "name": "Data Layer Migration",
            "status": "scheduled",
            "created_at": "2020-08-14T16:11:34Z",
            "backfilled": false
        },
        {
            "id": "bd0b7yh8rkfz",
            "name": "System has been invaded by Barbarians",
            "status": "monitoring",
            "created_at": "2020-08-13T09:00:00Z",
            "backfilled": false
        }
    ])
}

#[tokio::test]
async fn overview_reports_degraded_components() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(COMPONENTS_PATH);
        then.status(200).json_body(components_fixture());
    });
    let settings = settings(&server);

    let replies = handle_overview(&client(&settings), &settings).await;

    assert_eq!(
        replies,
        vec![
            "There are currently 1 components in a degraded state".to_string(),
            "Broken Components:\n-------------".to_string(),
            "Backend Database: degraded performance".to_string(),
        ]
    );
}

#[test]
fn overview_lists_working_components_only_when_enabled() {
    let components: Vec<Component> =
        serde_json::from_value(components_fixture()).expect("fixture");
    let hidden = overview_replies(&components, false);
    assert_eq!(hidden.len(), 3);

    let shown = overview_replies(&components, true);
    assert_eq!(shown.len(), 5);
    assert_eq!(shown[3], "Working Components:\n-------------");
    assert_eq!(shown[4], "API\nWebsite");
}

#[test]
fn overview_count_matches_non_operational_components() {
    let components: Vec<Component> = serde_json::from_value(json!([
        {"id": "1", "name": "A", "status": "major_outage"},
        {"id": "2", "name": "B", "status": "under_maintenance"},
        {"id": "3", "name": "C", "status": "partial_outage"},
        {"id": "4", "name": "D", "status": "operational"}
    ]))
    .expect("fixture");
    let replies = overview_replies(&components, false);
    assert_eq!(
        replies[0],
        "There are currently 3 components in a degraded state"
    );
    assert_eq!(
        replies[2],
        "A: major outage\nB: under maintenance\nC: partial outage"
    );

    let healthy: Vec<Component> = serde_json::from_value(json!([
        {"id": "4", "name": "D", "status": "operational"}
    ]))
    .expect("fixture");
    assert_eq!(
        overview_replies(&healthy, false),
        vec!["All systems operational!".to_string()]
    );
}

#[tokio::test]
async fn overview_surfaces_remote_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(COMPONENTS_PATH);
        then.status(200).json_body(json!({"error": "Page not found"}));
    });
    let settings = settings(&server);

    let replies = handle_overview(&client(&settings), &settings).await;

    assert_eq!(
        replies,
        vec!["Error talking to StatusPage.io: Page not found".to_string()]
    );
}

#[tokio::test]
async fn lists_scheduled_incident_as_unresolved() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(INCIDENTS_PATH);
        then.status(200).json_body(json!([
            {
                "id": "bd0b7yh8rkfz",
                "name": "Data Layer Migration",
                "status": "scheduled",
                "created_at": "2020-08-14T16:11:34Z"
            },
            {
                "id": "old1",
                "name": "Yesterday",
                "status": "resolved",
                "created_at": "2020-08-13T16:11:34Z"
            }
        ]));
    });
    let settings = settings(&server);

    let replies = handle_list_incidents(&client(&settings)).await;

    assert_eq!(
        replies,
        vec![
            "Unresolved incidents:".to_string(),
            "Data Layer Migration (Status: scheduled, Created: 2020-08-14T16:11:34Z, ID: bd0b7yh8rkfz)"
                .to_string(),
        ]
    );
}

#[tokio::test]
async fn empty_incident_list_is_all_clear() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(INCIDENTS_PATH);
        then.status(200).json_body(json!([]));
    });
    let settings = settings(&server);

    let replies = handle_list_incidents(&client(&settings)).await;

    assert_eq!(replies, vec!["All clear, no unresolved incidents!".to_string()]);
}

#[tokio::test]
async fn lists_created_at_as_sent_and_tolerates_null() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(INCIDENTS_PATH);
        then.status(200).json_body(json!([
            {
                "id": "x1",
                "name": "API latency",
                "status": "investigating",
                "created_at": "2014-05-14T14:22:39.441-06:00"
            },
            {
                "id": "x2",
                "name": "Imported outage",
                "status": "identified",
                "created_at": null
            }
        ]));
    });
    let settings = settings(&server);

    let replies = handle_list_incidents(&client(&settings)).await;

    assert_eq!(
        replies,
        vec![
            "Unresolved incidents:".to_string(),
            "API latency (Status: investigating, Created: 2014-05-14T14:22:39.441-06:00, ID: x1)\n\
             Imported outage (Status: identified, Created: unknown, ID: x2)"
                .to_string(),
        ]
    );
}

#[tokio::test]
async fn update_targets_incident_without_created_at() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(INCIDENTS_PATH);
        then.status(200).json_body(json!([
            {"id": "x2", "name": "Imported outage", "status": "identified", "created_at": null}
        ]));
    });
    let patch = server.mock(|when, then| {
        when.method(PATCH)
            .path("/v1/pages/63kbmt268d37/incidents/x2.json");
        then.status(200).json_body(json!({"id": "x2"}));
    });
    let settings = settings(&server);

    let replies = handle_update_incident(
        &client(&settings),
        &settings,
        &IncidentTarget::MostRecent,
        IncidentStatus::Monitoring,
        "Fix deployed",
    )
    .await;

    assert_eq!(replies, vec!["Updated incident \"Imported outage\"".to_string()]);
    patch.assert_calls(1);
}

#[tokio::test]
async fn latest_update_skips_scheduled_incident() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(INCIDENTS_PATH);
        then.status(200).json_body(unresolved_incidents_fixture());
    });
    let patch = server.mock(|when, then| {
        when.method(PATCH)
            .path("/v1/pages/63kbmt268d37/incidents/bd0b7yh8rkfz.json")
            .json_body(json!({"incident": {
                "status": "monitoring",
                "message": "We have dispatched an army to fix it.",
                "wants_twitter_update": false
            }}));
        then.status(200).json_body(json!({"id": "bd0b7yh8rkfz"}));
    });
    let scheduled_patch = server.mock(|when, then| {
        when.method(PATCH)
            .path("/v1/pages/63kbmt268d37/incidents/sched01.json");
        then.status(200).json_body(json!({"id": "sched01"}));
    });
    let settings = settings(&server);

    let replies = handle_update_incident(
        &client(&settings),
        &settings,
        &IncidentTarget::MostRecent,
        IncidentStatus::Monitoring,
        "We have dispatched an army to fix it.",
    )
    .await;

    assert_eq!(
        replies,
        vec!["Updated incident \"System has been invaded by Barbarians\"".to_string()]
    );
    patch.assert_calls(1);
    scheduled_patch.assert_calls(0);
}

#[tokio::test]
async fn targeted_update_uses_twitter_flag() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(INCIDENTS_PATH);
        then.status(200).json_body(unresolved_incidents_fixture());
    });
    let patch = server.mock(|when, then| {
        when.method(PATCH)
            .path("/v1/pages/63kbmt268d37/incidents/bd0b7yh8rkfz.json")
            .json_body(json!({"incident": {
                "status": "resolved",
                "message": "Barbarians repelled",
                "wants_twitter_update": true
            }}));
        then.status(200).json_body(json!({"id": "bd0b7yh8rkfz"}));
    });
    let settings = StatusPageSettings {
        twitter_updates: true,
        ..settings(&server)
    };

    let replies = handle_update_incident(
        &client(&settings),
        &settings,
        &IncidentTarget::Id("bd0b7yh8rkfz".to_string()),
        IncidentStatus::Resolved,
        "Barbarians repelled",
    )
    .await;

    assert_eq!(
        replies,
        vec!["Updated incident \"System has been invaded by Barbarians\"".to_string()]
    );
    patch.assert_calls(1);
}

#[tokio::test]
async fn update_without_unresolved_incidents_never_writes() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(INCIDENTS_PATH);
        then.status(200).json_body(json!([
            {"id": "s1", "name": "Maintenance", "status": "scheduled", "created_at": "2020-08-14T16:11:34Z"},
            {"id": "b1", "name": "Imported", "status": "identified", "created_at": "2020-08-14T16:11:34Z", "backfilled": true},
            {"id": "r1", "name": "Done", "status": "resolved", "created_at": "2020-08-14T16:11:34Z"}
        ]));
    });
    let any_patch = server.mock(|when, then| {
        when.method(PATCH);
        then.status(200).json_body(json!({}));
    });
    let settings = settings(&server);

    for target in [IncidentTarget::MostRecent, IncidentTarget::Id("s1".to_string())] {
        let replies = handle_update_incident(
            &client(&settings),
            &settings,
            &target,
            IncidentStatus::Monitoring,
            "msg",
        )
        .await;
        assert_eq!(replies, vec![NO_UNRESOLVED_INCIDENTS.to_string()]);
    }
    any_patch.assert_calls(0);
}

#[tokio::test]
async fn targeted_update_for_unknown_id_never_writes() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(INCIDENTS_PATH);
        then.status(200).json_body(unresolved_incidents_fixture());
    });
    let any_patch = server.mock(|when, then| {
        when.method(PATCH);
        then.status(200).json_body(json!({}));
    });
    let settings = settings(&server);

    let replies = handle_update_incident(
        &client(&settings),
        &settings,
        &IncidentTarget::Id("nope".to_string()),
        IncidentStatus::Identified,
        "msg",
    )
    .await;

    assert_eq!(
        replies,
        vec!["Sorry, I couldn't find an unresolved incident with ID nope.".to_string()]
    );
    any_patch.assert_calls(0);
}

#[tokio::test]
async fn update_reports_patch_error_with_incident_name() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(INCIDENTS_PATH);
        then.status(200).json_body(unresolved_incidents_fixture());
    });
    server.mock(|when, then| {
        when.method(PATCH)
            .path("/v1/pages/63kbmt268d37/incidents/bd0b7yh8rkfz.json");
        then.status(200).json_body(json!({"error": "Message can't be blank"}));
    });
    let settings = settings(&server);

    let replies = handle_update_incident(
        &client(&settings),
        &settings,
        &IncidentTarget::MostRecent,
        IncidentStatus::Monitoring,
        "msg",
    )
    .await;

    assert_eq!(
        replies,
        vec![
            "Error updating incident System has been invaded by Barbarians: Message can't be blank"
                .to_string()
        ]
    );
}

#[tokio::test]
async fn open_incident_posts_name_and_message() {
    let server = MockServer::start();
    let post = server.mock(|when, then| {
        when.method(POST).path(INCIDENTS_PATH).json_body(json!({"incident": {
            "status": "investigating",
            "name": "Name",
            "message": "message text",
            "wants_twitter_update": false
        }}));
        then.status(201).json_body(json!({"id": "new1", "name": "Name"}));
    });
    let settings = settings(&server);

    let replies = handle_open_incident(
        &client(&settings),
        &settings,
        IncidentStatus::Investigating,
        "Name",
        Some("message text"),
    )
    .await;

    assert_eq!(replies, vec!["Created incident \"Name\"".to_string()]);
    post.assert_calls(1);
}

#[tokio::test]
async fn open_incident_error_is_the_only_reply() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(INCIDENTS_PATH);
        then.status(200).json_body(json!({"error": "Name is too long"}));
    });
    let settings = settings(&server);

    let replies = handle_open_incident(
        &client(&settings),
        &settings,
        IncidentStatus::Identified,
        "Outage",
        None,
    )
    .await;

    assert_eq!(
        replies,
        vec!["Error creating incident \"Outage\": Name is too long".to_string()]
    );
}

#[tokio::test]
async fn component_query_renders_display_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(COMPONENTS_PATH);
        then.status(200).json_body(components_fixture());
    });
    let settings = settings(&server);

    let replies = handle_component_status(&client(&settings), "Backend Database").await;

    assert_eq!(
        replies,
        vec!["Status of Backend Database: degraded performance".to_string()]
    );
}

#[tokio::test]
async fn unknown_component_query_only_sends_hint() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(COMPONENTS_PATH);
        then.status(200).json_body(components_fixture());
    });
    let settings = settings(&server);

    let replies = handle_component_status(&client(&settings), "Backend").await;

    assert_eq!(
        replies,
        vec![
            "Sorry, the component \"Backend\" doesn't exist. I know of these components: Backend Database, API, Website."
                .to_string()
        ]
    );
}

#[tokio::test]
async fn set_component_status_patches_wire_form() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(COMPONENTS_PATH);
        then.status(200).json_body(components_fixture());
    });
    let patch = server.mock(|when, then| {
        when.method(PATCH)
            .path("/v1/pages/63kbmt268d37/components/c1.json")
            .json_body(json!({"component": {"status": "major_outage"}}));
        then.status(200).json_body(json!({"id": "c1", "status": "major_outage"}));
    });
    let settings = settings(&server);

    let replies = handle_set_component_status(
        &client(&settings),
        "Backend Database",
        ComponentStatus::MajorOutage,
    )
    .await;

    assert_eq!(
        replies,
        vec!["Status for Backend Database is now major outage (was: degraded performance)".to_string()]
    );
    patch.assert_calls(1);
}

#[tokio::test]
async fn set_status_for_unknown_component_never_writes() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(COMPONENTS_PATH);
        then.status(200).json_body(components_fixture());
    });
    let any_patch = server.mock(|when, then| {
        when.method(PATCH);
        then.status(200).json_body(json!({}));
    });
    let settings = settings(&server);

    let replies =
        handle_set_component_status(&client(&settings), "Backend", ComponentStatus::MajorOutage)
            .await;

    assert_eq!(
        replies,
        vec!["Couldn't find a component named Backend".to_string()]
    );
    any_patch.assert_calls(0);
}

#[tokio::test]
async fn set_component_status_reports_patch_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(COMPONENTS_PATH);
        then.status(200).json_body(components_fixture());
    });
    server.mock(|when, then| {
        when.method(PATCH)
            .path("/v1/pages/63kbmt268d37/components/c2.json");
        then.status(200).json_body(json!({"error": "Component is locked"}));
    });
    let settings = settings(&server);

    let replies =
        handle_set_component_status(&client(&settings), "API", ComponentStatus::PartialOutage)
            .await;

    assert_eq!(
        replies,
        vec!["Error setting the status for API: Component is locked".to_string()]
    );
}

#[tokio::test]
async fn unreachable_service_becomes_a_reply() {
    let settings = StatusPageSettings {
        api_base_url: "http://127.0.0.1:9".to_string(),
        page_id: "63kbmt268d37".to_string(),
        api_token: "token".to_string(),
        ..StatusPageSettings::default()
    };

    let replies = handle_list_incidents(&client(&settings)).await;

    assert_eq!(replies.len(), 1);
    assert!(replies[0].starts_with("Error talking to StatusPage.io: "));
}

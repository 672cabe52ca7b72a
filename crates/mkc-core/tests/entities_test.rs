#![allow(clippy::unwrap_used)]
// Integration tests for entity fetch, load and cross-reference resolution.

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use mkc_core::{
    CoreError, EntityKind, Player, PlayerId, RegistryClient, Representation, RosterMode, Team,
    TeamId, TransportConfig,
};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, RegistryClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let transport = TransportConfig::default().with_allow_http(true);
    let client = RegistryClient::new(base_url, &transport).unwrap();
    (server, client)
}

async fn mount_json(server: &MockServer, route: &str, body: &Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn rollo() -> Value {
    json!({
        "id": 1655,
        "user_id": 2200,
        "registered_at": { "date": "2019-03-01 10:00:00.000000", "timezone_type": 3, "timezone": "UTC" },
        "registered_at_human": "Mar 1, 2019",
        "display_name": "Rollo",
        "player_status": "active",
        "is_banned": false,
        "ban_reason": null,
        "is_hidden": 0,
        "country_code": "DE",
        "country_name": "Germany",
        "switch_fc": "4678-1807-6386",
        "profile_message": "",
        "is_supporter": 1,
        "is_administrator": 0,
        "is_moderator": 0,
        "current_teams": [
            {
                "mode": "mk8dx",
                "mode_title": "Mario Kart 8 Deluxe 150cc",
                "mode_key": "mk8dx_150",
                "team_id": 1064,
                "team_name": "Project HIVE Academia",
                "team_tag": "HIVE",
                "team_status": "active"
            }
        ]
    })
}

fn xyros() -> Value {
    json!({
        "id": 7922,
        "display_name": "Xyros",
        "registered_at": { "date": "2020-01-05 12:00:00.000000" },
        "country_code": "DE",
        "is_banned": 0,
        "profile_message": "Bin a geiler bub",
        "current_teams": []
    })
}

fn hive_academia() -> Value {
    json!({
        "id": 1064,
        "team_category": "competitive",
        "main_language": "German",
        "team_name": "Project HIVE Academia",
        "team_tag": "HIVE",
        "team_color": 3,
        "team_status": "active",
        "recruitment_status": "closed",
        "is_historical": 0,
        "founding_date": { "date": "2020-10-22 17:33:57.000000", "timezone_type": 3, "timezone": "UTC" },
        "founding_date_human": "Oct 22, 2020",
        "team_logo": "teams/1064/logo.png",
        "primary_team_id": 1000,
        "primary_team_name": "Project HIVE",
        "rosters": {
            "150cc": {
                "mode_key": "150cc",
                "mode_title": "MK8DX 150cc",
                "roster_name": "HIVE Academia",
                "is_user_member": false,
                "active": 1,
                "members": [
                    { "player_id": 7922, "display_name": "Xyros", "team_leader": 1,
                      "registered_since": { "date": "2020-10-22 17:40:00.000000" },
                      "registered_since_human": "Oct 22, 2020" },
                    { "player_id": 1655, "display_name": "Rollo", "team_leader": 0 }
                ]
            }
        },
        "secondary_teams": [ { "id": 1100, "name": "Project HIVE Lite" } ]
    })
}

// ── Fetch ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_fetch_player_by_id() {
    let (server, client) = setup().await;
    mount_json(&server, "/api/registry/players/1655", &rollo()).await;

    let player = Player::fetch(&client, 1655).await.unwrap();

    assert_eq!(player.id, PlayerId::new(1655));
    assert_eq!(player.name, "Rollo");
    assert_eq!(player.representation(), Representation::Full);
    assert_eq!(player.switch_fc.as_deref(), Some("4678-1807-6386"));
    assert_eq!(player.is_supporter(), Some(true));
    assert_eq!(player.is_banned(), Some(false));
    // Present but empty, as opposed to absent.
    assert_eq!(player.profile_message(), Some(""));
    assert_eq!(player.profile().unwrap().ban_reason, None);
    let teams = player.current_teams().unwrap();
    assert_eq!(teams[0].mode_key.as_deref(), Some("mk8dx_150"));
    assert_eq!(teams[0].team_id, TeamId::new(1064));
}

#[tokio::test]
async fn test_fetch_team_by_id() {
    let (server, client) = setup().await;
    mount_json(&server, "/api/registry/teams/1064", &hive_academia()).await;

    let team = Team::fetch(&client, 1064).await.unwrap();

    assert_eq!(team.id, TeamId::new(1064));
    assert_eq!(team.name, "Project HIVE Academia");
    assert_eq!(team.founding_date_human.as_deref(), Some("Oct 22, 2020"));
    assert_eq!(
        team.founding_date.unwrap().to_rfc3339(),
        "2020-10-22T17:33:57+00:00"
    );
    assert_eq!(team.main_language(), Some("German"));
    assert_eq!(team.is_historical(), Some(false));
    assert_eq!(team.player_count, Some(2));
    assert_eq!(
        team.logo().unwrap().as_str(),
        format!("{}/storage/teams/1064/logo.png", server.uri())
    );

    let roster = team.roster(RosterMode::Cc150).unwrap();
    assert_eq!(roster.name.as_deref(), Some("HIVE Academia"));
    assert!(roster.is_active);
    assert_eq!(roster.members[0].id, PlayerId::new(7922));
    assert_eq!(roster.members[0].name, "Xyros");
    assert!(roster.members[0].is_leader);
    assert!(team.roster(RosterMode::Cc200).is_none());
}

#[tokio::test]
async fn test_fetch_rejects_mismatched_id() {
    let (server, client) = setup().await;
    mount_json(&server, "/api/registry/players/1", &xyros()).await;

    let err = Player::fetch(&client, 1).await.unwrap_err();

    assert!(matches!(
        err,
        CoreError::IdMismatch {
            entity: EntityKind::Player,
            requested: 1,
            received: 7922
        }
    ));
}

#[tokio::test]
async fn test_fetch_unknown_ids() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/registry/players/404"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/registry/teams/999999"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .mount(&server)
        .await;

    let player = Player::fetch(&client, 404).await.unwrap_err();
    assert!(player.is_not_found());

    let team = Team::fetch(&client, 999_999).await.unwrap_err();
    assert!(matches!(
        team,
        CoreError::NotFound {
            entity: EntityKind::Team,
            id: 999_999
        }
    ));
}

#[tokio::test]
async fn test_malformed_body_is_format_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/registry/teams/5"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = Team::fetch(&client, 5).await.unwrap_err();
    assert!(err.is_format_error());
}

#[tokio::test]
async fn test_broken_roster_is_format_error() {
    let (server, client) = setup().await;
    let mut team = hive_academia();
    team["rosters"]["150cc"]["members"][1] = json!({ "player_id": 1655 });
    mount_json(&server, "/api/registry/teams/1064", &team).await;

    let err = Team::fetch(&client, 1064).await.unwrap_err();
    assert!(err.is_format_error(), "{err}");
}

#[tokio::test]
async fn test_server_error_is_connection_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/registry/players/1655"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let err = Player::fetch(&client, 1655).await.unwrap_err();
    assert!(err.is_connection_error());
    assert!(matches!(err, CoreError::Http { status: 502, .. }));
}

#[tokio::test]
async fn test_https_only_client_refuses_plain_http() {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();

    let err = RegistryClient::new(base_url, &TransportConfig::default()).unwrap_err();
    assert!(CoreError::from(err).is_format_error());
}

// ── Load ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_load_matches_fetch() {
    let (server, client) = setup().await;
    mount_json(&server, "/api/registry/teams/1064", &hive_academia()).await;

    let mut shallow = Team {
        id: TeamId::new(1064),
        name: "Project HIVE Academia".into(),
        tag: "HIVE".into(),
        color: None,
        status: Some("active".into()),
        recruitment_status: None,
        founding_date: None,
        founding_date_human: None,
        player_count: Some(2),
        is_shadow: Some(false),
        profile: None,
    };
    assert_eq!(shallow.rosters(), None);

    shallow.load(&client).await.unwrap();
    let fetched = Team::fetch(&client, 1064).await.unwrap();

    assert_eq!(shallow, fetched);
    assert!(shallow.rosters().is_some());
    assert_eq!(shallow.is_shadow, None);
}

#[tokio::test]
async fn test_failed_load_leaves_entity_untouched() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/registry/players/12"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut player = Player {
        id: PlayerId::new(12),
        user_id: None,
        name: "Mars".into(),
        status: None,
        registered_at: None,
        registered_at_human: None,
        country_code: None,
        country_name: None,
        switch_fc: None,
        nnid: None,
        fc_3ds: None,
        mktour_fc: None,
        current_team: None,
        team_registered_at: None,
        team_registered_at_human: None,
        profile: None,
    };
    let before = player.clone();

    assert!(player.load(&client).await.is_err());
    assert_eq!(player, before);
}

// ── Cross-references ────────────────────────────────────────────────

#[tokio::test]
async fn test_member_get_player_fetches_every_time() {
    let (server, client) = setup().await;
    mount_json(&server, "/api/registry/teams/1064", &hive_academia()).await;

    Mock::given(method("GET"))
        .and(path("/api/registry/players/7922"))
        .respond_with(ResponseTemplate::new(200).set_body_json(xyros()))
        .expect(2)
        .mount(&server)
        .await;

    let team = Team::fetch(&client, 1064).await.unwrap();
    let member = team
        .rosters()
        .unwrap()
        .member(PlayerId::new(7922))
        .unwrap();

    let first = member.get_player(&client).await.unwrap();
    let mut second = member.get_player(&client).await.unwrap();

    assert_eq!(first.profile_message(), Some("Bin a geiler bub"));
    assert_eq!(first, second);

    second.name = "changed".into();
    assert_eq!(first.name, "Xyros");
}

#[tokio::test]
async fn test_current_team_get_team() {
    let (server, client) = setup().await;
    mount_json(&server, "/api/registry/players/1655", &rollo()).await;
    mount_json(&server, "/api/registry/teams/1064", &hive_academia()).await;

    let player = Player::fetch(&client, 1655).await.unwrap();
    let team = player.current_teams().unwrap()[0]
        .get_team(&client)
        .await
        .unwrap();

    assert_eq!(team.name, "Project HIVE Academia");
    assert!(team.is_full());
}

#[tokio::test]
async fn test_team_links_resolve() {
    let (server, client) = setup().await;
    mount_json(&server, "/api/registry/teams/1064", &hive_academia()).await;
    mount_json(
        &server,
        "/api/registry/teams/1100",
        &json!({ "id": 1100, "team_name": "Project HIVE Lite", "team_tag": "HVL", "rosters": [] }),
    )
    .await;

    let team = Team::fetch(&client, 1064).await.unwrap();
    let profile = team.profile().unwrap();
    assert_eq!(profile.primary_team.as_ref().unwrap().name, "Project HIVE");

    let lite = profile.secondary_teams[0].get_team(&client).await.unwrap();
    assert_eq!(lite.tag, "HVL");
    assert_eq!(lite.player_count, Some(0));
}

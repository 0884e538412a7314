mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, TestContext};
use party_quests::i18n::MessageId;
use party_quests::types::group::GroupKind;
use uuid::Uuid;

const PET_QUEST: &str = "whale";

#[tokio::test]
async fn test_invite_quest_flow_success() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let party = client.create_and_populate_group(GroupKind::Party, 2).await;
    let (leader_id, leader_token) = &party.leader;

    let req = test::TestRequest::post()
        .uri(&format!("/groups/{}/quests/invite/{}", party.group_id, PET_QUEST))
        .insert_header(("Authorization", format!("Bearer {}", leader_token)))
        .to_request();

    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["message"].as_str().unwrap().contains("invited"));

    // Group is on the quest; the inviter owes no RSVP, everyone else does.
    let group = ctx.db.find_group(party.group_id).await.unwrap().unwrap();
    assert_eq!(group.quest_key.as_deref(), Some(PET_QUEST));

    let leader = ctx.db.find_user(*leader_id).await.unwrap().unwrap();
    assert_eq!(leader.quest_key.as_deref(), Some(PET_QUEST));
    assert!(!leader.rsvp_needed);

    for (member_id, _) in &party.members {
        let member = ctx.db.find_user(*member_id).await.unwrap().unwrap();
        assert_eq!(member.quest_key.as_deref(), Some(PET_QUEST));
        assert!(member.rsvp_needed);
    }

    // A member sees the pending invitation on their own document.
    let (_, member_token) = &party.members[0];
    let req = test::TestRequest::get()
        .uri("/user")
        .insert_header(("Authorization", format!("Bearer {}", member_token)))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let user: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(user["party"]["quest"]["key"], PET_QUEST);
    assert_eq!(user["party"]["quest"]["RSVPNeeded"], true);
}

#[tokio::test]
async fn test_invite_quest_flow_group_not_found() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (_user_id, user_token) = client.create_test_user().await;

    let req = test::TestRequest::post()
        .uri(&format!("/groups/{}/quests/invite/{}", Uuid::new_v4(), PET_QUEST))
        .insert_header(("Authorization", format!("Bearer {}", user_token)))
        .to_request();

    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], MessageId::GroupNotFound.render());
}

#[tokio::test]
async fn test_invite_quest_flow_guild_not_supported() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let guild = client.create_and_populate_group(GroupKind::Guild, 0).await;
    let (_leader_id, leader_token) = &guild.leader;

    let req = test::TestRequest::post()
        .uri(&format!("/groups/{}/quests/invite/{}", guild.group_id, PET_QUEST))
        .insert_header(("Authorization", format!("Bearer {}", leader_token)))
        .to_request();

    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], MessageId::GuildQuestsNotSupported.render());
}

#[tokio::test]
async fn test_invite_quest_flow_unknown_quest() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let party = client.create_and_populate_group(GroupKind::Party, 1).await;
    let (_leader_id, leader_token) = &party.leader;

    let req = test::TestRequest::post()
        .uri(&format!("/groups/{}/quests/invite/fakeQuestName", party.group_id))
        .insert_header(("Authorization", format!("Bearer {}", leader_token)))
        .to_request();

    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        MessageId::QuestNotFound {
            key: "fakeQuestName".to_string()
        }
        .render()
    );
}

#[tokio::test]
async fn test_invite_quest_flow_already_underway() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let party = client.create_and_populate_group(GroupKind::Party, 1).await;
    let (_leader_id, leader_token) = &party.leader;

    ctx.db
        .set_group_quest(party.group_id, Some(PET_QUEST))
        .await
        .unwrap();

    let req = test::TestRequest::post()
        .uri(&format!("/groups/{}/quests/invite/gryphon", party.group_id))
        .insert_header(("Authorization", format!("Bearer {}", leader_token)))
        .to_request();

    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], MessageId::QuestAlreadyUnderway.render());
}

#[tokio::test]
async fn test_accept_quest_flow_success() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let party = client.create_and_populate_group(GroupKind::Party, 1).await;
    let (leader_id, _) = &party.leader;
    let (member_id, member_token) = &party.members[0];

    ctx.db
        .send_quest_invitations(party.group_id, PET_QUEST, *leader_id)
        .await
        .unwrap();

    let req = test::TestRequest::post()
        .uri(&format!("/groups/{}/quests/accept/{}", party.group_id, PET_QUEST))
        .insert_header(("Authorization", format!("Bearer {}", member_token)))
        .to_request();

    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["message"].as_str().unwrap().contains("accepted"));

    // Acceptance keeps the quest key and settles the RSVP.
    let member = ctx.db.find_user(*member_id).await.unwrap().unwrap();
    assert_eq!(member.quest_key.as_deref(), Some(PET_QUEST));
    assert!(!member.rsvp_needed);
}

#[tokio::test]
async fn test_accept_quest_flow_not_invited() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let party = client.create_and_populate_group(GroupKind::Party, 1).await;
    let (_member_id, member_token) = &party.members[0];

    let req = test::TestRequest::post()
        .uri(&format!("/groups/{}/quests/accept/{}", party.group_id, PET_QUEST))
        .insert_header(("Authorization", format!("Bearer {}", member_token)))
        .to_request();

    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], MessageId::QuestNotOwned.render());
}

use actix_web::{web, App};
use party_quests::{
    db::postgres_service::PostgresService,
    types::group::{GroupKind, GroupPrivacy},
    types::user::DBUserCreate,
    utils::token::{construct_token, encrypt, new_token},
};
use std::sync::Arc;
use uuid::Uuid;

pub struct TestClient {
    pub db: Arc<PostgresService>,
}

/// A party plus its members, the way most quest scenarios start out.
#[allow(dead_code)]
pub struct PopulatedGroup {
    pub group_id: Uuid,
    pub leader: (Uuid, String),
    pub members: Vec<(Uuid, String)>,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient { db }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(party_quests::routes::configure_routes)
    }

    /// User with a fresh access token. Names are unique per call since the
    /// service refuses duplicates.
    #[allow(dead_code)]
    pub async fn create_test_user(&self) -> (Uuid, String) {
        let secret = new_token();
        let auth_hash = encrypt(&secret).expect("Failed to encrypt token");

        let user_id = self
            .db
            .create_user(DBUserCreate {
                name: format!("user-{}", Uuid::new_v4()),
                auth_hash,
            })
            .await
            .expect("Failed to create user");

        (user_id, construct_token(&user_id, &secret))
    }

    #[allow(dead_code)]
    pub async fn create_group_with_leader(&self, leader: Uuid, kind: GroupKind) -> Uuid {
        let group_id = self
            .db
            .create_group(leader, "Test Group".to_string(), kind, GroupPrivacy::Private)
            .await
            .expect("Failed to create group");

        if kind == GroupKind::Party {
            self.db
                .set_user_party(leader, Some(group_id))
                .await
                .expect("Failed to set user party");
        }

        group_id
    }

    /// Group with a leader and `member_count` additional members, all with
    /// valid tokens.
    #[allow(dead_code)]
    pub async fn create_and_populate_group(
        &self,
        kind: GroupKind,
        member_count: usize,
    ) -> PopulatedGroup {
        let leader = self.create_test_user().await;
        let group_id = self.create_group_with_leader(leader.0, kind).await;

        let mut members = Vec::with_capacity(member_count);
        for _ in 0..member_count {
            let member = self.create_test_user().await;
            if kind == GroupKind::Party {
                self.db
                    .set_user_party(member.0, Some(group_id))
                    .await
                    .expect("Failed to set user party");
            }
            members.push(member);
        }

        PopulatedGroup {
            group_id,
            leader,
            members,
        }
    }
}

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize)]
pub struct DBUserCreate {
    pub name: String,
    pub auth_hash: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RUserCreate {
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UserCreateRes {
    pub id: Uuid,
    pub token: String,
}

/// The user document as returned by `GET /user`.
#[derive(Serialize, Deserialize, Debug)]
pub struct UserRes {
    pub id: Uuid,
    pub name: String,
    pub party: PartyStateRes,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PartyStateRes {
    pub id: Option<Uuid>,
    pub quest: QuestStateRes,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct QuestStateRes {
    pub key: Option<String>,
    #[serde(rename = "RSVPNeeded")]
    pub rsvp_needed: bool,
}

impl From<entity::user::Model> for UserRes {
    fn from(user: entity::user::Model) -> Self {
        UserRes {
            id: user.id,
            name: user.name,
            party: PartyStateRes {
                id: user.party_id,
                quest: QuestStateRes {
                    key: user.quest_key,
                    rsvp_needed: user.rsvp_needed,
                },
            },
        }
    }
}

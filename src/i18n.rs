//! Message identifiers surfaced by the API. Handlers pick the identifier
//! (plus interpolation data); rendering to text happens only here.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageId {
    GroupNotFound,
    GuildQuestsNotSupported,
    QuestNotFound { key: String },
    QuestNotOwned,
    QuestInvitationDoesNotExist,
    QuestAlreadyUnderway,
    AlreadyInParty,
    InvalidCredentials,
    UsernameTaken,
}

impl MessageId {
    pub fn render(&self) -> String {
        match self {
            Self::GroupNotFound => "Group not found or you don't have access.".to_string(),
            Self::GuildQuestsNotSupported => "Guilds cannot be involved in quests.".to_string(),
            Self::QuestNotFound { key } => format!("Quest \"{key}\" not found."),
            Self::QuestNotOwned => "You don't have an invitation for this quest.".to_string(),
            Self::QuestInvitationDoesNotExist => {
                "There is no quest invitation to respond to.".to_string()
            }
            Self::QuestAlreadyUnderway => {
                "Your party is already on a quest. Try again when it has ended.".to_string()
            }
            Self::AlreadyInParty => "You are already a member of a party.".to_string(),
            Self::InvalidCredentials => {
                "There is no account that uses those credentials.".to_string()
            }
            Self::UsernameTaken => "Username already taken.".to_string(),
        }
    }
}

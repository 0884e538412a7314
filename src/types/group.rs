use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GroupKind {
    Party,
    Guild,
}

impl GroupKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupKind::Party => "party",
            GroupKind::Guild => "guild",
        }
    }
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GroupPrivacy {
    Private,
    Public,
}

impl GroupPrivacy {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupPrivacy::Private => "private",
            GroupPrivacy::Public => "public",
        }
    }
}

impl fmt::Display for GroupPrivacy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RGroupCreate {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: GroupKind,
    pub privacy: GroupPrivacy,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct GroupCreateRes {
    pub id: String,
    pub message: String,
}

use std::collections::HashMap;
use std::sync::OnceLock;

/// Catalog entry for a quest a party can undertake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quest {
    pub key: &'static str,
    pub title: &'static str,
    pub kind: QuestKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestKind {
    Collect,
    Boss,
}

static CATALOG: OnceLock<HashMap<&'static str, Quest>> = OnceLock::new();

fn catalog() -> &'static HashMap<&'static str, Quest> {
    CATALOG.get_or_init(|| {
        [
            Quest { key: "whale", title: "The Wailing Whale", kind: QuestKind::Collect },
            Quest { key: "gryphon", title: "The Gryphon's Gauntlet", kind: QuestKind::Collect },
            Quest { key: "hedgehog", title: "The Hedgebeast", kind: QuestKind::Collect },
            Quest { key: "rat", title: "King of the Rat Maze", kind: QuestKind::Collect },
            Quest { key: "octopus", title: "Ink Storm", kind: QuestKind::Collect },
            Quest { key: "dustbunnies", title: "The Feral Dust Bunnies", kind: QuestKind::Boss },
            Quest { key: "basilisk", title: "The Backlog Basilisk", kind: QuestKind::Boss },
        ]
        .into_iter()
        .map(|quest| (quest.key, quest))
        .collect()
    })
}

pub fn get_quest(key: &str) -> Option<&'static Quest> {
    catalog().get(key)
}

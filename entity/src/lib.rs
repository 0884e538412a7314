pub mod group;
pub mod user;

/*
 Users live in at most one party (user.party_id). Guilds are groups too but
 never run quests, so guild membership is not tracked here.
 A quest invitation is plain state on the user row: quest_key says which
 quest, rsvp_needed says whether the user still has to answer.
 The group row only records the quest the party is running (quest_key);
 per-member RSVP bookkeeping never touches it.
 */

//! Persisted shape of a Session.

use crate::core::error::{GachaError, Result};
use crate::core::session::Session;
use crate::draw::Item;
use serde::{Deserialize, Serialize};
use std::io;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionRecord {
    is_configured: bool,
    total_spins_allowed: u32,
    spins_used: u32,
    inventory: Vec<Item>,
}

impl From<&Session> for SessionRecord {
    fn from(session: &Session) -> Self {
        Self {
            is_configured: session.is_configured(),
            total_spins_allowed: session.total_budget(),
            spins_used: session.used(),
            inventory: session.inventory().to_vec(),
        }
    }
}

pub fn encode_session(session: &Session) -> Result<String> {
    serde_json::to_string_pretty(&SessionRecord::from(session))
        .map_err(|e| GachaError::Storage(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Puts a newest-first inventory (the layout of earlier save files) into
/// append order. Lists with equal or mixed timestamps are left as stored.
fn into_append_order(mut inventory: Vec<Item>) -> Vec<Item> {
    let descending = inventory
        .windows(2)
        .all(|pair| pair[0].obtained_at >= pair[1].obtained_at);
    let strictly_somewhere = inventory
        .windows(2)
        .any(|pair| pair[0].obtained_at > pair[1].obtained_at);
    if descending && strictly_somewhere {
        inventory.reverse();
    }
    inventory
}

/// Parses and validates a stored record. Any failure is reported as
/// `CorruptPersistedState`.
pub fn decode_session(json: &str) -> Result<Session> {
    let record: SessionRecord = serde_json::from_str(json)
        .map_err(|e| GachaError::CorruptPersistedState(e.to_string()))?;
    Session::restore(
        record.is_configured,
        record.total_spins_allowed,
        record.spins_used,
        into_append_order(record.inventory),
    )
}

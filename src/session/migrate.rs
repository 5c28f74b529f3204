//! Stored user record decoding
//!
//! Older releases persisted the user with `_id` and `createdAt`. Records are
//! decoded once at load time; a legacy record is upgraded to the current field
//! names and flagged so the store can write it back. Unknown fields are
//! ignored and do not survive the rewrite.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{SessionError, SessionResult};
use crate::models::User;

/// Shape of the stored user record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordVersion {
    /// Uses `_id` and/or `createdAt`
    Legacy,
    /// Uses `id` and `created_at`
    Current,
}

/// Result of decoding a stored user record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedUser {
    pub user: User,
    pub version: RecordVersion,
}

impl DecodedUser {
    /// Whether the stored record should be rewritten in the current shape
    pub fn needs_rewrite(&self) -> bool {
        self.version == RecordVersion::Legacy
    }
}

/// Every field name any release has written
#[derive(Debug, Deserialize)]
struct StoredUser {
    #[serde(default)]
    id: Option<String>,
    #[serde(default, rename = "_id")]
    legacy_id: Option<String>,
    email: String,
    name: String,
    #[serde(default)]
    bio: Option<String>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default, rename = "createdAt")]
    legacy_created_at: Option<DateTime<Utc>>,
}

/// Decode a stored user record, upgrading legacy field names.
///
/// A current field always wins over its legacy counterpart; the legacy value
/// is only used when the current one is absent.
pub fn decode_user(raw: &str) -> SessionResult<DecodedUser> {
    let stored: StoredUser = serde_json::from_str(raw)?;
    let mut version = RecordVersion::Current;

    let id = match (stored.id, stored.legacy_id) {
        (Some(id), _) => id,
        (None, Some(legacy)) => {
            version = RecordVersion::Legacy;
            legacy
        }
        (None, None) => return Err(SessionError::Corrupt("user record has no id".to_string())),
    };

    let created_at = match (stored.created_at, stored.legacy_created_at) {
        (Some(at), _) => at,
        (None, Some(legacy)) => {
            version = RecordVersion::Legacy;
            legacy
        }
        (None, None) => {
            return Err(SessionError::Corrupt(
                "user record has no creation time".to_string(),
            ))
        }
    };

    Ok(DecodedUser {
        user: User {
            id,
            email: stored.email,
            name: stored.name,
            bio: stored.bio.unwrap_or_default(),
            created_at,
        },
        version,
    })
}

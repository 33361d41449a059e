//! Regular user model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::values::RegularUserId;
use crate::utils::errors::{Result, SupportDeskError};

/// An end user who asks questions through the chat interface.
///
/// Created lazily on the first inbound interaction from an unrecognized
/// chat identity; immutable afterwards except for an identity migration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegularUser {
    pub id: RegularUserId,
    pub telegram_id: i64,
    pub joined_at: DateTime<Utc>,
}

impl RegularUser {
    /// Move the account to another chat identity. Reassigning the current
    /// identity is an error, not a no-op.
    pub fn change_telegram_id(&mut self, telegram_id: i64) -> Result<()> {
        if self.telegram_id == telegram_id {
            return Err(SupportDeskError::SameValueAssigning(format!(
                "regular user already has telegram id {telegram_id}"
            )));
        }
        self.telegram_id = telegram_id;
        Ok(())
    }
}

/// Fields of a regular user that has not been persisted yet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRegularUser {
    pub telegram_id: i64,
}

impl NewRegularUser {
    pub fn new(telegram_id: i64) -> Self {
        Self { telegram_id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_change_telegram_id_rejects_same_value() {
        let mut user = RegularUser {
            id: RegularUserId::new(1),
            telegram_id: 100,
            joined_at: Utc::now(),
        };
        assert_matches!(
            user.change_telegram_id(100),
            Err(SupportDeskError::SameValueAssigning(_))
        );
        user.change_telegram_id(200).unwrap();
        assert_eq!(user.telegram_id, 200);
    }
}

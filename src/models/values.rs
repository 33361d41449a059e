//! Value objects: typed identifiers and bounded strings
//!
//! Identifiers are assigned by the persistence layer and wrapped in newtypes
//! so that a question id can never be passed where a role id is expected.
//! Bounded strings fail construction when their constraints are violated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::errors::{Result, SupportDeskError};

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            pub fn value(self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Identifier of a persisted [`crate::models::Role`]
    RoleId
);
entity_id!(
    /// Identifier of a persisted [`crate::models::RegularUser`]
    RegularUserId
);
entity_id!(
    /// Identifier of a persisted [`crate::models::SupportUser`]
    SupportUserId
);
entity_id!(
    /// Identifier of a persisted [`crate::models::Question`]
    QuestionId
);
entity_id!(
    /// Identifier of a persisted [`crate::models::Answer`]
    AnswerId
);

/// Maximum length of a role name
pub const MAX_ROLE_NAME_LEN: usize = 256;
/// Maximum length of a role description
pub const MAX_ROLE_DESCRIPTION_LEN: usize = 4096;
/// Maximum length of a support user's descriptive name
pub const MAX_DESCRIPTIVE_NAME_LEN: usize = 256;
/// Maximum length of a question or answer message
pub const MAX_MESSAGE_TEXT_LEN: usize = 4096;
/// Maximum length of an attachment caption
pub const MAX_CAPTION_LEN: usize = 1024;

fn check_bounds(value: &str, what: &str, max_len: usize, allow_empty: bool) -> Result<()> {
    if !allow_empty && value.is_empty() {
        return Err(SupportDeskError::InvalidInput(format!("{what} must not be empty")));
    }
    if value.chars().count() > max_len {
        return Err(SupportDeskError::InvalidInput(format!(
            "{what} must not exceed {max_len} characters"
        )));
    }
    Ok(())
}

macro_rules! bounded_string {
    ($(#[$doc:meta])* $name:ident, $what:expr, $max:expr, allow_empty: $allow_empty:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Result<Self> {
                let value = value.into();
                check_bounds(&value, $what, $max, $allow_empty)?;
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

bounded_string!(
    /// Unique name of a role
    RoleName, "role name", MAX_ROLE_NAME_LEN, allow_empty: false
);
bounded_string!(
    /// Free-form role description, may be empty
    RoleDescription, "role description", MAX_ROLE_DESCRIPTION_LEN, allow_empty: true
);
bounded_string!(
    /// Human-readable name a support user is addressed by
    DescriptiveName, "descriptive name", MAX_DESCRIPTIVE_NAME_LEN, allow_empty: false
);
bounded_string!(
    /// Text of a question or answer message
    MessageText, "message text", MAX_MESSAGE_TEXT_LEN, allow_empty: false
);
bounded_string!(
    /// Caption attached to a media file
    AttachmentCaption, "attachment caption", MAX_CAPTION_LEN, allow_empty: false
);

/// Kind of media file attached to a question or answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentKind {
    Photo,
    Document,
    Video,
    Audio,
    Voice,
    VideoNote,
}

impl std::fmt::Display for AttachmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AttachmentKind::Photo => "photo",
            AttachmentKind::Document => "document",
            AttachmentKind::Video => "video",
            AttachmentKind::Audio => "audio",
            AttachmentKind::Voice => "voice",
            AttachmentKind::VideoNote => "video_note",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for AttachmentKind {
    type Err = SupportDeskError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "photo" => Ok(AttachmentKind::Photo),
            "document" => Ok(AttachmentKind::Document),
            "video" => Ok(AttachmentKind::Video),
            "audio" => Ok(AttachmentKind::Audio),
            "voice" => Ok(AttachmentKind::Voice),
            "video_note" => Ok(AttachmentKind::VideoNote),
            other => Err(SupportDeskError::InvalidInput(format!(
                "unknown attachment kind: {other}"
            ))),
        }
    }
}

/// A media file appended to a question or answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub tg_file_id: String,
    pub kind: AttachmentKind,
    pub caption: Option<AttachmentCaption>,
    pub created_at: DateTime<Utc>,
}

impl Attachment {
    pub fn new(
        tg_file_id: impl Into<String>,
        kind: AttachmentKind,
        caption: Option<AttachmentCaption>,
    ) -> Result<Self> {
        let tg_file_id = tg_file_id.into();
        if tg_file_id.is_empty() {
            return Err(SupportDeskError::InvalidInput(
                "attachment file id must not be empty".to_string(),
            ));
        }
        Ok(Self {
            tg_file_id,
            kind,
            caption,
            created_at: Utc::now(),
        })
    }
}

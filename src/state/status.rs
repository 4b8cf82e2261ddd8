use serde::{Deserialize, Serialize};

/// Keys into the message catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageId {
    /// Rows have fewer cells than earlier rows.
    Msg0,
    /// Extension not in the allow-list.
    Msg1,
    /// File at or above the size ceiling.
    Msg2,
    /// Rows processed.
    Msg3,
    /// Labels and values point at the same column.
    Msg4,
}

impl MessageId {
    pub fn all() -> &'static [Self] {
        &[Self::Msg0, Self::Msg1, Self::Msg2, Self::Msg3, Self::Msg4]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Msg0 => "msg0",
            Self::Msg1 => "msg1",
            Self::Msg2 => "msg2",
            Self::Msg3 => "msg3",
            Self::Msg4 => "msg4",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().iter().copied().find(|id| id.as_str() == code)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalStatus {
    pub message_id: Option<MessageId>,
    pub is_open: bool,
    pub params: Option<usize>,
}

impl ModalStatus {
    pub fn open(message_id: MessageId, params: Option<usize>) -> Self {
        Self {
            message_id: Some(message_id),
            is_open: true,
            params,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationStatus {
    pub message_id: Option<MessageId>,
    pub is_visible: bool,
}

impl NotificationStatus {
    pub fn shown(message_id: MessageId) -> Self {
        Self {
            message_id: Some(message_id),
            is_visible: true,
        }
    }

    pub fn hidden(message_id: MessageId) -> Self {
        Self {
            message_id: Some(message_id),
            is_visible: false,
        }
    }
}

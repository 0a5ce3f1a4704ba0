//! Session callback events and the configured deny-list filter.

use std::{collections::HashSet, fmt};

/// Callback events the bridge can forward to the webhook.
///
/// Names match the upstream client's event strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionEvent {
    Qr,
    Ready,
    Authenticated,
    AuthFailure,
    Disconnected,
    ChangeState,
    Message,
    MessageCreate,
    MessageAck,
    MessageRevokeEveryone,
    MessageRevokeMe,
    MessageReaction,
    MediaUploaded,
    GroupJoin,
    GroupLeave,
    GroupUpdate,
    Call,
    LoadingScreen,
    ContactChanged,
}

impl SessionEvent {
    /// All variants, for iteration.
    pub const ALL: &'static [SessionEvent] = &[
        Self::Qr,
        Self::Ready,
        Self::Authenticated,
        Self::AuthFailure,
        Self::Disconnected,
        Self::ChangeState,
        Self::Message,
        Self::MessageCreate,
        Self::MessageAck,
        Self::MessageRevokeEveryone,
        Self::MessageRevokeMe,
        Self::MessageReaction,
        Self::MediaUploaded,
        Self::GroupJoin,
        Self::GroupLeave,
        Self::GroupUpdate,
        Self::Call,
        Self::LoadingScreen,
        Self::ContactChanged,
    ];

    /// The upstream event string, as it appears in `disabled_callbacks`.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Qr => "qr",
            Self::Ready => "ready",
            Self::Authenticated => "authenticated",
            Self::AuthFailure => "auth_failure",
            Self::Disconnected => "disconnected",
            Self::ChangeState => "change_state",
            Self::Message => "message",
            Self::MessageCreate => "message_create",
            Self::MessageAck => "message_ack",
            Self::MessageRevokeEveryone => "message_revoke_everyone",
            Self::MessageRevokeMe => "message_revoke_me",
            Self::MessageReaction => "message_reaction",
            Self::MediaUploaded => "media_uploaded",
            Self::GroupJoin => "group_join",
            Self::GroupLeave => "group_leave",
            Self::GroupUpdate => "group_update",
            Self::Call => "call",
            Self::LoadingScreen => "loading_screen",
            Self::ContactChanged => "contact_changed",
        }
    }
}

impl fmt::Display for SessionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pure predicate over the configured callback deny-list.
#[derive(Debug, Clone, Default)]
pub struct CallbackFilter {
    disabled: HashSet<String>,
}

impl CallbackFilter {
    pub fn new(disabled: impl IntoIterator<Item = String>) -> Self {
        Self {
            disabled: disabled.into_iter().collect(),
        }
    }

    /// True unless the event name is on the deny-list. Matching is
    /// case-exact.
    #[must_use]
    pub fn is_enabled(&self, event: &str) -> bool {
        !self.disabled.contains(event)
    }

    /// Typed convenience over [`CallbackFilter::is_enabled`].
    #[must_use]
    pub fn allows(&self, event: SessionEvent) -> bool {
        self.is_enabled(event.as_str())
    }
}

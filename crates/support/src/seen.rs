//! Marking inbound messages as seen.

use {async_trait::async_trait, tracing::error};

/// A chat that can acknowledge messages as read.
#[async_trait]
pub trait ChatHandle: Send + Sync {
    async fn send_seen(&self) -> anyhow::Result<()>;
}

/// A message that can resolve the chat it belongs to.
#[async_trait]
pub trait MessageHandle: Send + Sync {
    type Chat: ChatHandle;

    async fn chat(&self) -> anyhow::Result<Self::Chat>;
}

/// Resolve the message's chat and mark it seen.
///
/// Failure on either step is logged and fully absorbed; the caller always
/// completes normally.
pub async fn mark_message_seen(message: &impl MessageHandle) {
    let chat = match message.chat().await {
        Ok(chat) => chat,
        Err(e) => {
            error!(error = %e, "failed to send seen status");
            return;
        },
    };
    if let Err(e) = chat.send_seen().await {
        error!(error = %e, "failed to send seen status");
    }
}

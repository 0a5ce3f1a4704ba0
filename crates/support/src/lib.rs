//! Support helpers for the wabridge HTTP bridge.
//!
//! Outbound webhook delivery, uniform JSON error responses, bounded
//! readiness polling, callback filtering, seen-status marking, and chunked
//! base64 decoding. Each helper is consumed independently by the bridge;
//! none of them call each other.

pub mod events;
pub mod media;
pub mod respond;
pub mod seen;
pub mod wait;
pub mod webhook;

pub use {
    events::{CallbackFilter, SessionEvent},
    media::{BASE64_CHUNK_SIZE, Base64Chunks, decode_base64_chunks},
    respond::{ErrorBody, error_response},
    seen::{ChatHandle, MessageHandle, mark_message_seen},
    wait::{WaitOptions, is_truthy, lookup_path, sleep, wait_for_nested_value},
    webhook::{WebhookNotifier, WebhookPayload},
};

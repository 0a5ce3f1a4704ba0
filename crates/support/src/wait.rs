//! Bounded polling for lazily initialized session state, plus a sleep helper.
//!
//! The upstream session client builds its internal state asynchronously;
//! routes that need a nested property (such as the headless page handle)
//! poll for it with a deadline instead of subscribing to events.

use std::time::{Duration, Instant};

use {serde_json::Value, tracing::error};

use wabridge_common::{Error, Result};

/// Polling bounds for [`wait_for_nested_value`].
#[derive(Debug, Clone, Copy)]
pub struct WaitOptions {
    pub max_wait: Duration,
    pub interval: Duration,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            max_wait: Duration::from_millis(10_000),
            interval: Duration::from_millis(100),
        }
    }
}

/// Resolve a dot-separated path by sequential member lookup.
///
/// Short-circuits to `None` the moment any intermediate member is missing
/// or not an object.
#[must_use]
pub fn lookup_path<'v>(root: &'v Value, path: &str) -> Option<&'v Value> {
    path.split('.')
        .try_fold(root, |value, key| value.get(key))
}

/// Script-style truthiness: `null`, `false`, zero, NaN, and `""` are falsy;
/// everything else, including empty arrays and objects, is truthy.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Poll `probe` until `path` resolves to a truthy value or the deadline
/// passes.
///
/// The probe is evaluated before the deadline check, so an already-present
/// value succeeds immediately and a timeout fires no sooner than
/// `opts.max_wait` and no later than `opts.max_wait` plus one interval.
pub async fn wait_for_nested_value<F>(probe: F, path: &str, opts: WaitOptions) -> Result<()>
where
    F: Fn() -> Value,
{
    let start = Instant::now();
    loop {
        let root = probe();
        if lookup_path(&root, path).is_some_and(is_truthy) {
            return Ok(());
        }
        let waited = start.elapsed();
        if waited > opts.max_wait {
            error!(path, ?waited, "timed out waiting for nested object");
            return Err(Error::timeout(path, waited));
        }
        sleep(opts.interval).await;
    }
}

/// Complete after `duration` elapses. Never fails; a zero duration resolves
/// immediately.
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

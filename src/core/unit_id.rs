//! Numeric id of the calling thread
//!
//! The id is parsed out of the `Debug` rendering of [`std::thread::ThreadId`]
//! (`ThreadId(7)`), which is the only stable way to read it as a number.

use super::error::{LoggerError, Result};
use std::cell::Cell;

thread_local! {
    static UNIT_ID_CACHE: Cell<Option<u64>> = const { Cell::new(None) };
}

/// Extract the number embedded in a thread id dump such as `ThreadId(7)`.
pub fn parse_unit_id(dump: &str) -> Result<u64> {
    dump.trim()
        .strip_prefix("ThreadId(")
        .and_then(|rest| rest.strip_suffix(')'))
        .and_then(|digits| digits.parse().ok())
        .ok_or_else(|| LoggerError::unit_id(dump))
}

/// Resolve the current thread's id, caching it on first access
pub fn try_unit_id() -> Result<u64> {
    UNIT_ID_CACHE.with(|cache| {
        if let Some(id) = cache.get() {
            return Ok(id);
        }
        let id = parse_unit_id(&format!("{:?}", std::thread::current().id()))?;
        cache.set(Some(id));
        Ok(id)
    })
}

/// Resolve the current thread's id.
///
/// # Panics
///
/// Panics if the runtime's thread id rendering can no longer be parsed.
pub fn unit_id() -> u64 {
    match try_unit_id() {
        Ok(id) => id,
        Err(e) => panic!("{}", e),
    }
}

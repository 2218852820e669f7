//! Call session events
//!
//! Broadcast to subscriber views (minimized strip, foreground modal,
//! WebSocket stream) whenever the registry mutates.

use crate::domain::call::entity::ActiveCall;
use crate::domain::shared::value_objects::CallId;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// State change emitted by the call registry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CallSessionEvent {
    /// A call was created and took the foreground
    Started { call: ActiveCall, timestamp: i64 },
    /// A call moved to the minimized strip
    Minimized { call_id: CallId, timestamp: i64 },
    /// A minimized call took the foreground again
    Restored { call_id: CallId, timestamp: i64 },
    /// Elapsed duration ticked forward or was overridden
    DurationUpdated {
        call_id: CallId,
        duration_seconds: u64,
        timestamp: i64,
    },
    /// A call was removed from the live set
    Ended {
        call_id: CallId,
        duration_seconds: u64,
        timestamp: i64,
    },
}

impl CallSessionEvent {
    pub fn started(call: ActiveCall) -> Self {
        Self::Started {
            call,
            timestamp: now_ms(),
        }
    }

    pub fn minimized(call_id: CallId) -> Self {
        Self::Minimized {
            call_id,
            timestamp: now_ms(),
        }
    }

    pub fn restored(call_id: CallId) -> Self {
        Self::Restored {
            call_id,
            timestamp: now_ms(),
        }
    }

    pub fn duration_updated(call_id: CallId, duration_seconds: u64) -> Self {
        Self::DurationUpdated {
            call_id,
            duration_seconds,
            timestamp: now_ms(),
        }
    }

    pub fn ended(call_id: CallId, duration_seconds: u64) -> Self {
        Self::Ended {
            call_id,
            duration_seconds,
            timestamp: now_ms(),
        }
    }

    /// The call this event is about
    pub fn call_id(&self) -> &CallId {
        match self {
            CallSessionEvent::Started { call, .. } => &call.id,
            CallSessionEvent::Minimized { call_id, .. } => call_id,
            CallSessionEvent::Restored { call_id, .. } => call_id,
            CallSessionEvent::DurationUpdated { call_id, .. } => call_id,
            CallSessionEvent::Ended { call_id, .. } => call_id,
        }
    }
}

fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

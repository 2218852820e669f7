//! Concurrent call session registry
//!
//! Owns the set of live AI calls, the single focused-call pointer, and the
//! transition rules between foregrounded, minimized, and ended sessions.
//! All mutation goes through the operations here so the capacity, uniqueness,
//! and focus invariants hold centrally.

use crate::domain::call::entity::{ActiveCall, CallSetup};
use crate::domain::call::event::CallSessionEvent;
use crate::domain::call::value_object::palette_color;
use crate::domain::shared::value_objects::CallId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;
use thiserror::Error;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

/// Default limit on simultaneous live calls
pub const DEFAULT_MAX_CONCURRENT_CALLS: usize = 5;

/// Why `start_call` refused to create a call
///
/// The rendered messages are the texts surfaced to the user, so they name
/// the remedy rather than the internal rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StartCallRejection {
    #[error("Maximum of {limit} concurrent calls reached. End a call before starting another.")]
    CapacityReached { limit: usize },

    #[error("A call with {contact} is already in progress.")]
    ContactBusy { contact: String },
}

/// Point-in-time view of the registry for rendering collaborators
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    /// All live calls, oldest first
    pub calls: Vec<ActiveCall>,
    /// The foregrounded call, if any
    pub focused_call_id: Option<CallId>,
}

struct RegistryState {
    calls: HashMap<CallId, ActiveCall>,
    focused: Option<CallId>,
}

/// Registry of concurrent AI call sessions
///
/// Operations are synchronous in-memory mutations serialized by an internal
/// mutex; state changes are published to subscribers over a broadcast
/// channel.
pub struct CallRegistry {
    state: Mutex<RegistryState>,
    capacity: usize,
    events: broadcast::Sender<CallSessionEvent>,
}

impl CallRegistry {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_CONCURRENT_CALLS)
    }

    /// Create a registry with a custom concurrent-call limit
    pub fn with_capacity(capacity: usize) -> Self {
        let (events, _) = broadcast::channel(256);
        Self {
            state: Mutex::new(RegistryState {
                calls: HashMap::new(),
                focused: None,
            }),
            capacity,
            events,
        }
    }

    /// Subscribe to registry state changes
    pub fn subscribe(&self) -> broadcast::Receiver<CallSessionEvent> {
        self.events.subscribe()
    }

    /// Start a new call and bring it to the foreground
    ///
    /// Rejects without any state change when the live set is at capacity or
    /// the contact already has a live call. On success the previously
    /// focused call (if any) is minimized in the same mutation.
    pub fn start_call(&self, setup: CallSetup) -> Result<ActiveCall, StartCallRejection> {
        let mut guard = self.state.lock().unwrap();
        let state = &mut *guard;

        if state.calls.len() >= self.capacity {
            warn!(
                "Rejected call to {}: {} calls already live",
                setup.contact.name(),
                state.calls.len()
            );
            return Err(StartCallRejection::CapacityReached {
                limit: self.capacity,
            });
        }

        if let Some(existing) = state
            .calls
            .values()
            .find(|call| call.contact.id() == setup.contact.id())
        {
            warn!(
                "Rejected call to {}: contact already on call {}",
                setup.contact.name(),
                existing.id
            );
            return Err(StartCallRejection::ContactBusy {
                contact: existing.contact.name().to_string(),
            });
        }

        // Hand-off: the foregrounded call moves to the minimized strip
        if let Some(previous_id) = state.focused.take() {
            if let Some(previous) = state.calls.get_mut(&previous_id) {
                previous.minimize();
                self.publish(CallSessionEvent::minimized(previous_id));
            }
        }

        let color = palette_color(state.calls.len());
        let call = ActiveCall::new(setup, color);
        info!(
            "Call {} started for {} ({})",
            call.id,
            call.contact.name(),
            call.kind.as_str()
        );

        state.focused = Some(call.id);
        state.calls.insert(call.id, call.clone());
        self.publish(CallSessionEvent::started(call.clone()));

        Ok(call)
    }

    /// End a call, removing it from the live set
    ///
    /// Clears the focus pointer if the ended call held it; no other call is
    /// promoted. Stale ids are ignored so UI surfaces can end a call that
    /// already finished without racing.
    pub fn end_call(&self, call_id: &CallId) -> Option<ActiveCall> {
        let mut guard = self.state.lock().unwrap();
        let state = &mut *guard;

        let mut call = match state.calls.remove(call_id) {
            Some(call) => call,
            None => {
                debug!("end_call ignored: {} is not a live call", call_id);
                return None;
            }
        };

        if state.focused == Some(*call_id) {
            state.focused = None;
        }

        let final_duration = call.refresh_duration();
        info!("Call {} ended after {}s", call_id, final_duration);
        self.publish(CallSessionEvent::ended(*call_id, final_duration));

        Some(call)
    }

    /// Send a call to the minimized strip; it keeps ticking
    pub fn minimize_call(&self, call_id: &CallId) {
        let mut guard = self.state.lock().unwrap();
        let state = &mut *guard;

        match state.calls.get_mut(call_id) {
            Some(call) => {
                call.minimize();
                if state.focused == Some(*call_id) {
                    state.focused = None;
                }
                debug!("Call {} minimized", call_id);
                self.publish(CallSessionEvent::minimized(*call_id));
            }
            None => debug!("minimize_call ignored: {} is not a live call", call_id),
        }
    }

    /// Bring a minimized call back to the foreground
    ///
    /// The currently focused call (if different) is minimized in the same
    /// mutation, mirroring the hand-off on `start_call`.
    pub fn restore_call(&self, call_id: &CallId) {
        let mut guard = self.state.lock().unwrap();
        let state = &mut *guard;

        if !state.calls.contains_key(call_id) {
            debug!("restore_call ignored: {} is not a live call", call_id);
            return;
        }

        if let Some(previous_id) = state.focused {
            if previous_id != *call_id {
                if let Some(previous) = state.calls.get_mut(&previous_id) {
                    previous.minimize();
                    self.publish(CallSessionEvent::minimized(previous_id));
                }
            }
        }

        if let Some(call) = state.calls.get_mut(call_id) {
            call.restore();
        }
        state.focused = Some(*call_id);
        debug!("Call {} restored to foreground", call_id);
        self.publish(CallSessionEvent::restored(*call_id));
    }

    /// Overwrite a call's elapsed duration
    ///
    /// Escape hatch for collaborators that track duration themselves; the
    /// next tick recomputes from the start timestamp (last write wins).
    pub fn update_call_duration(&self, call_id: &CallId, seconds: u64) {
        let mut guard = self.state.lock().unwrap();

        match guard.calls.get_mut(call_id) {
            Some(call) => {
                call.duration_seconds = seconds;
                self.publish(CallSessionEvent::duration_updated(*call_id, seconds));
            }
            None => debug!("update_call_duration ignored: {} is not a live call", call_id),
        }
    }

    /// Recompute every live call's duration from its start timestamp
    ///
    /// Driven once per second by the shared ticker; emits an event per call
    /// whose displayed duration actually changed.
    pub fn refresh_durations(&self) {
        let mut guard = self.state.lock().unwrap();

        for call in guard.calls.values_mut() {
            let previous = call.duration_seconds;
            let current = call.refresh_duration();
            if current != previous {
                self.publish(CallSessionEvent::duration_updated(call.id, current));
            }
        }
    }

    /// The foregrounded call, if any
    pub fn focused_call(&self) -> Option<ActiveCall> {
        let guard = self.state.lock().unwrap();
        guard.focused.and_then(|id| guard.calls.get(&id).cloned())
    }

    /// Id of the foregrounded call, if any
    pub fn focused_call_id(&self) -> Option<CallId> {
        self.state.lock().unwrap().focused
    }

    /// Look up a live call by id
    pub fn call(&self, call_id: &CallId) -> Option<ActiveCall> {
        self.state.lock().unwrap().calls.get(call_id).cloned()
    }

    /// All live calls, oldest first
    pub fn active_calls(&self) -> Vec<ActiveCall> {
        let guard = self.state.lock().unwrap();
        let mut calls: Vec<ActiveCall> = guard.calls.values().cloned().collect();
        calls.sort_by_key(|call| call.started_at);
        calls
    }

    /// Live calls currently in the minimized strip, oldest first
    pub fn minimized_calls(&self) -> Vec<ActiveCall> {
        let mut calls = self.active_calls();
        calls.retain(|call| call.minimized);
        calls
    }

    /// Whether any call is live
    pub fn has_active_call(&self) -> bool {
        !self.state.lock().unwrap().calls.is_empty()
    }

    /// Number of live calls
    pub fn count(&self) -> usize {
        self.state.lock().unwrap().calls.len()
    }

    /// Point-in-time view for rendering collaborators
    pub fn snapshot(&self) -> RegistrySnapshot {
        let guard = self.state.lock().unwrap();
        let mut calls: Vec<ActiveCall> = guard.calls.values().cloned().collect();
        calls.sort_by_key(|call| call.started_at);
        RegistrySnapshot {
            calls,
            focused_call_id: guard.focused,
        }
    }

    fn publish(&self, event: CallSessionEvent) {
        // Send only fails when no subscriber is listening, which is fine
        let _ = self.events.send(event);
    }
}

impl Default for CallRegistry {
    fn default() -> Self {
        Self::new()
    }
}

//! Signal/slot notifications.
//!
//! A [`Signal`] holds any number of connected slots (closures). Emitting the
//! signal calls every slot, in connection order, on the emitting thread.
//! Segue widgets live on the UI thread, so there is no queued delivery: a
//! slot that needs to defer work posts a task to the
//! [`MainLoop`](crate::MainLoop).
//!
//! # Example
//!
//! ```
//! use segue_core::Signal;
//!
//! let text_changed = Signal::<String>::new();
//! let conn_id = text_changed.connect(|text| {
//!     println!("Text changed to: {}", text);
//! });
//!
//! text_changed.emit("Hello, World!".to_string());
//! text_changed.disconnect(conn_id);
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Pass it to [`Signal::disconnect`] to remove the slot.
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;
type SlotTable<Args> = Mutex<SlotMap<ConnectionId, Slot<Args>>>;

/// A type-safe signal that can have multiple connected slots.
///
/// Use `()` as `Args` for signals without a payload.
pub struct Signal<Args> {
    slots: Arc<SlotTable<Args>>,
    blocked: AtomicBool,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            slots: Arc::new(Mutex::new(SlotMap::with_key())),
            blocked: AtomicBool::new(false),
        }
    }

    /// Connect a slot.
    ///
    /// Returns a `ConnectionId` that can be used to disconnect the slot later.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.slots.lock().insert(Arc::new(slot))
    }

    /// Connect a slot that is disconnected when the returned guard drops.
    pub fn connect_scoped<F>(&self, slot: F) -> ConnectionGuard<Args>
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let id = self.connect(slot);
        ConnectionGuard {
            slots: Arc::downgrade(&self.slots),
            id,
        }
    }

    /// Disconnect a slot.
    ///
    /// Returns `true` if the connection was found and removed.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.slots.lock().remove(id).is_some()
    }

    /// Disconnect all slots from this signal.
    pub fn disconnect_all(&self) {
        self.slots.lock().clear();
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.slots.lock().len()
    }

    /// Block or unblock emission. While blocked, [`emit`](Self::emit) does nothing.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Check if emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Emit the signal, invoking all connected slots.
    ///
    /// The slot table is snapshotted first, so slots may connect or
    /// disconnect on this same signal without deadlocking.
    #[tracing::instrument(skip_all, target = "segue_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: targets::SIGNAL, "signal blocked, skipping emit");
            return;
        }

        let slots: Vec<Slot<Args>> = self.slots.lock().values().cloned().collect();
        tracing::trace!(
            target: targets::SIGNAL,
            connection_count = slots.len(),
            "emitting signal"
        );
        for slot in slots {
            slot(&args);
        }
    }
}

/// RAII connection handle returned by [`Signal::connect_scoped`].
///
/// Dropping the guard disconnects the slot. Outliving the signal is fine;
/// the guard then does nothing.
pub struct ConnectionGuard<Args> {
    slots: Weak<SlotTable<Args>>,
    id: ConnectionId,
}

impl<Args> ConnectionGuard<Args> {
    /// The id of the guarded connection.
    pub fn id(&self) -> ConnectionId {
        self.id
    }
}

impl<Args> Drop for ConnectionGuard<Args> {
    fn drop(&mut self) {
        if let Some(slots) = self.slots.upgrade() {
            slots.lock().remove(self.id);
        }
    }
}

static_assertions::assert_impl_all!(Signal<bool>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_connect_emit() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        signal.connect(move |&value| {
            received_clone.lock().push(value);
        });

        signal.emit(42);
        signal.emit(100);

        assert_eq!(*received.lock(), vec![42, 100]);
    }

    #[test]
    fn test_signal_disconnect() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        let conn_id = signal.connect(move |&value| {
            received_clone.lock().push(value);
        });

        signal.emit(1);
        assert!(signal.disconnect(conn_id));
        assert!(!signal.disconnect(conn_id));
        signal.emit(2);

        assert_eq!(*received.lock(), vec![1]);
    }

    #[test]
    fn test_signal_blocked() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        signal.connect(move |&value| {
            received_clone.lock().push(value);
        });

        signal.emit(1);
        signal.set_blocked(true);
        signal.emit(2);
        signal.set_blocked(false);
        signal.emit(3);

        assert_eq!(*received.lock(), vec![1, 3]);
    }

    #[test]
    fn test_scoped_connection() {
        let signal = Signal::<()>::new();
        let count = Arc::new(Mutex::new(0));

        {
            let count = count.clone();
            let _guard = signal.connect_scoped(move |_| *count.lock() += 1);
            signal.emit(());
            assert_eq!(signal.connection_count(), 1);
        }
        signal.emit(());

        assert_eq!(*count.lock(), 1);
        assert_eq!(signal.connection_count(), 0);
    }

    #[test]
    fn test_guard_outliving_signal() {
        let signal = Signal::<()>::new();
        let guard = signal.connect_scoped(|_| {});
        drop(signal);
        drop(guard);
    }

    #[test]
    fn test_slot_may_disconnect_during_emit() {
        let signal = Arc::new(Signal::<()>::new());
        let id_cell = Arc::new(Mutex::new(None));

        let sig = Arc::downgrade(&signal);
        let cell = id_cell.clone();
        let id = signal.connect(move |_| {
            if let (Some(sig), Some(id)) = (sig.upgrade(), *cell.lock()) {
                sig.disconnect(id);
            }
        });
        *id_cell.lock() = Some(id);

        signal.emit(());
        assert_eq!(signal.connection_count(), 0);
    }
}

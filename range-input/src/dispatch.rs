//! Document-level event fan-out.
//!
//! Pointer moves and releases happen anywhere in the document, not just over
//! a slider, and resizes belong to the window. [`PointerDispatcher`] keeps a
//! registry of live sliders and forwards each such event to all of them; each
//! slider decides from its own drag state whether to act.
//!
//! # Responsibilities
//!
//! - Hold weak handles so a dropped slider silently leaves the registry.
//! - Deliver events in registration order.
//! - Invoke listeners outside the registry lock, so a listener may register
//!   or unregister others while handling an event.

use std::sync::{Arc, OnceLock, Weak};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;
use tracing::trace;

use crate::{drag::EventDisposition, pointer::PointerInput};

new_key_type! {
    /// Handle returned by [`PointerDispatcher::register`].
    pub struct ListenerKey;
}

/// Events observed at document or window level.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum DocumentEvent {
    PointerMove(PointerInput),
    PointerUp,
    PointerCancel,
    /// Viewport resize or orientation change.
    Resize,
}

/// Receiver of document-level events.
pub trait DocumentListener {
    fn on_document_event(&mut self, event: &DocumentEvent) -> EventDisposition;
}

type SharedListener = Arc<Mutex<dyn DocumentListener + Send>>;
type WeakListener = Weak<Mutex<dyn DocumentListener + Send>>;

#[derive(Default)]
struct Registry {
    listeners: SlotMap<ListenerKey, WeakListener>,
    order: Vec<ListenerKey>,
}

impl Registry {
    /// Upgrades every live listener, dropping the dead ones.
    fn snapshot(&mut self) -> SmallVec<[SharedListener; 8]> {
        let mut live = SmallVec::new();
        let listeners = &mut self.listeners;
        self.order.retain(|key| {
            match listeners.get(*key).and_then(Weak::upgrade) {
                Some(listener) => {
                    live.push(listener);
                    true
                }
                None => {
                    listeners.remove(*key);
                    false
                }
            }
        });
        live
    }
}

/// Registry of sliders interested in document-level events.
#[derive(Default)]
pub struct PointerDispatcher {
    registry: Mutex<Registry>,
}

impl PointerDispatcher {
    /// Creates an isolated dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide dispatcher shared by every slider on the page.
    pub fn global() -> &'static PointerDispatcher {
        static GLOBAL: OnceLock<PointerDispatcher> = OnceLock::new();
        GLOBAL.get_or_init(PointerDispatcher::new)
    }

    /// Registers `listener`. The dispatcher only keeps a weak handle; drop
    /// the last `Arc` to detach implicitly.
    pub fn register<L>(&self, listener: &Arc<Mutex<L>>) -> ListenerKey
    where
        L: DocumentListener + Send + 'static,
    {
        let weak: Weak<Mutex<L>> = Arc::downgrade(listener);
        let weak: WeakListener = weak;
        let mut registry = self.registry.lock();
        let key = registry.listeners.insert(weak);
        registry.order.push(key);
        key
    }

    /// Removes a listener. Returns `false` when the key was not registered.
    pub fn unregister(&self, key: ListenerKey) -> bool {
        let mut registry = self.registry.lock();
        if registry.listeners.remove(key).is_none() {
            return false;
        }
        registry.order.retain(|k| *k != key);
        true
    }

    /// Number of listeners still alive.
    pub fn len(&self) -> usize {
        self.registry.lock().snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forwards `event` to every live listener.
    ///
    /// Returns [`EventDisposition::Consumed`] when at least one listener
    /// acted on it, meaning the host should suppress the default action.
    ///
    /// A listener must not dispatch into the dispatcher while handling an
    /// event, since its own lock is held for the duration of the call.
    pub fn dispatch(&self, event: &DocumentEvent) -> EventDisposition {
        let listeners = self.registry.lock().snapshot();
        let disposition = listeners
            .iter()
            .fold(EventDisposition::Ignored, |acc, listener| {
                acc.or(listener.lock().on_document_event(event))
            });
        trace!(?event, listeners = listeners.len(), ?disposition, "document event dispatched");
        disposition
    }
}

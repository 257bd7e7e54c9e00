//! Callback types and the per-build handler registry.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use kydra_dom::{Event, Key};

use crate::widget::WidgetResult;

/// A callback with no arguments (clicks, clear, add).
pub type Handler = Arc<dyn Fn() + Send + Sync>;

/// A callback receiving a value (text changes, toggles, deleted ids).
pub type Callback<T> = Arc<dyn Fn(T) + Send + Sync>;

/// Event name registered for click and Enter/Space activation.
pub const ON_ACTIVATE: &str = "on_activate";

/// Handlers registered by stateless widgets while building their elements.
///
/// The host clears the registry before rebuilding the tree, then routes
/// events through [`dispatch`](Self::dispatch).
#[derive(Clone, Default)]
pub struct HandlerRegistry {
    handlers: Arc<RwLock<HashMap<(String, String), Handler>>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `event` on the element with `element_id`.
    pub fn register(&self, element_id: &str, event: &str, handler: Handler) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.insert((element_id.to_string(), event.to_string()), handler);
        }
    }

    pub fn get(&self, element_id: &str, event: &str) -> Option<Handler> {
        self.handlers
            .read()
            .ok()?
            .get(&(element_id.to_string(), event.to_string()))
            .cloned()
    }

    /// Remove handlers left over from the previous build.
    pub fn clear(&self) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.clear();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.handlers
            .read()
            .map(|h| h.is_empty())
            .unwrap_or(true)
    }

    pub fn len(&self) -> usize {
        self.handlers.read().map(|h| h.len()).unwrap_or(0)
    }

    /// Run the activation handler for a click, or an Enter/Space key press,
    /// on a registered element.
    pub fn dispatch(&self, event: &Event) -> WidgetResult {
        let target = match event {
            Event::Click { target, .. } => target.as_deref(),
            Event::Key { target, key, .. } if matches!(key, Key::Enter | Key::Char(' ')) => {
                target.as_deref()
            }
            _ => None,
        };
        let Some(handler) = target.and_then(|id| self.get(id, ON_ACTIVATE)) else {
            return WidgetResult::Ignored;
        };
        log::debug!("dispatching {ON_ACTIVATE} to {:?}", event.target());
        handler();
        WidgetResult::Activated
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("handler_count", &self.len())
            .finish()
    }
}

//! Event emitter
//!
//! Listeners are grouped by event name. Names keep the order in which they
//! first received a listener, and listeners keep their insertion order unless
//! added with one of the `prepend_*` variants.

use anyhow::Result;
use std::rc::Rc;

/// Handle returned when a listener is added; pass it to [`EventEmitter::off`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Callback<T> = Rc<dyn Fn(&T) -> Result<()>>;

struct Listener<T> {
    id: ListenerId,
    callback: Callback<T>,
    once: bool,
}

pub struct EventEmitter<T> {
    events: Vec<(String, Vec<Listener<T>>)>,
    next_id: u64,
}

impl<T> Default for EventEmitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for EventEmitter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts: Vec<(&str, usize)> = self
            .events
            .iter()
            .map(|(name, listeners)| (name.as_str(), listeners.len()))
            .collect();
        f.debug_struct("EventEmitter").field("events", &counts).finish()
    }
}

impl<T> EventEmitter<T> {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            next_id: 0,
        }
    }

    fn add_listener_with<F>(&mut self, name: &str, callback: F, prepend: bool, once: bool) -> ListenerId
    where
        F: Fn(&T) -> Result<()> + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;

        let listener = Listener {
            id,
            callback: Rc::new(callback),
            once,
        };

        let index = match self.events.iter().position(|(n, _)| n == name) {
            Some(index) => index,
            None => {
                self.events.push((name.to_string(), Vec::new()));
                self.events.len() - 1
            }
        };
        let listeners = &mut self.events[index].1;

        if prepend {
            listeners.insert(0, listener);
        } else {
            listeners.push(listener);
        }
        id
    }

    pub fn on<F>(&mut self, name: &str, callback: F) -> ListenerId
    where
        F: Fn(&T) -> Result<()> + 'static,
    {
        self.add_listener_with(name, callback, false, false)
    }

    pub fn add_listener<F>(&mut self, name: &str, callback: F) -> ListenerId
    where
        F: Fn(&T) -> Result<()> + 'static,
    {
        self.on(name, callback)
    }

    /// The listener is removed the first time `name` is emitted.
    pub fn once<F>(&mut self, name: &str, callback: F) -> ListenerId
    where
        F: Fn(&T) -> Result<()> + 'static,
    {
        self.add_listener_with(name, callback, false, true)
    }

    pub fn prepend_listener<F>(&mut self, name: &str, callback: F) -> ListenerId
    where
        F: Fn(&T) -> Result<()> + 'static,
    {
        self.add_listener_with(name, callback, true, false)
    }

    pub fn prepend_once_listener<F>(&mut self, name: &str, callback: F) -> ListenerId
    where
        F: Fn(&T) -> Result<()> + 'static,
    {
        self.add_listener_with(name, callback, true, true)
    }

    /// Remove one listener. Returns false if `id` was not registered under `name`.
    pub fn off(&mut self, name: &str, id: ListenerId) -> bool {
        let Some(event_index) = self.events.iter().position(|(n, _)| n == name) else {
            return false;
        };
        let listeners = &mut self.events[event_index].1;
        let Some(listener_index) = listeners.iter().position(|l| l.id == id) else {
            return false;
        };

        listeners.remove(listener_index);
        if listeners.is_empty() {
            self.events.remove(event_index);
        }
        true
    }

    pub fn remove_listener(&mut self, name: &str, id: ListenerId) -> bool {
        self.off(name, id)
    }

    /// Call every listener of `name` with `args`.
    ///
    /// `once` listeners are detached before any callback runs. The first
    /// failing callback stops the emission and its error is returned.
    /// Returns whether `name` had listeners.
    pub fn emit(&mut self, name: &str, args: &T) -> Result<bool> {
        let Some(event_index) = self.events.iter().position(|(n, _)| n == name) else {
            return Ok(false);
        };

        let listeners = &mut self.events[event_index].1;
        let callbacks: Vec<Callback<T>> = listeners.iter().map(|l| Rc::clone(&l.callback)).collect();
        listeners.retain(|l| !l.once);
        if listeners.is_empty() {
            self.events.remove(event_index);
        }

        tracing::trace!(target: "yaso::events", event = name, listeners = callbacks.len(), "emit");
        for callback in callbacks {
            callback(args)?;
        }
        Ok(true)
    }

    pub fn event_names(&self) -> Vec<&str> {
        self.events.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn listener_count(&self, name: &str) -> usize {
        self.events
            .iter()
            .find(|(n, _)| n == name)
            .map_or(0, |(_, listeners)| listeners.len())
    }
}

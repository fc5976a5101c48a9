//! Session-history capability.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

/// Listener invoked with the path the user navigated back/forward to.
pub type PopCallback = Box<dyn FnMut(&str)>;

/// Wraps the host's session history so navigation can update the visible
/// address without a reload, and can be driven by back/forward.
///
/// A browser embedding wraps the History API; [`MemoryHistory`] serves
/// native use and tests.
pub trait HistoryAdapter {
    /// Record `path` as a new navigable entry.
    fn push(&mut self, path: &str);

    /// Update the current entry in place, adding nothing to the stack.
    fn replace(&mut self, path: &str);

    /// Register the single back/forward listener. Re-registration
    /// overwrites the previous listener, it never accumulates.
    fn on_popped(&mut self, callback: PopCallback);
}

/// In-process history: an entry stack plus a cursor.
///
/// `back`/`forward` move the cursor and fire the pop listener with the path
/// moved to, mirroring the host's popstate delivery.
pub struct MemoryHistory {
    entries: Vec<String>,
    index: usize,
    listener: Option<PopCallback>,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl MemoryHistory {
    /// History with a single initial entry, as on first page load.
    #[must_use]
    pub fn new(initial: &str) -> Self {
        Self {
            entries: vec![initial.to_owned()],
            index: 0,
            listener: None,
        }
    }

    /// Path of the current entry.
    #[must_use]
    pub fn current(&self) -> &str {
        &self.entries[self.index]
    }

    /// All entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Move one entry back, firing the pop listener. No-op at the oldest
    /// entry.
    pub fn back(&mut self) {
        if self.index > 0 {
            self.index -= 1;
            self.fire_pop();
        }
    }

    /// Move one entry forward, firing the pop listener. No-op at the newest
    /// entry.
    pub fn forward(&mut self) {
        if self.index + 1 < self.entries.len() {
            self.index += 1;
            self.fire_pop();
        }
    }

    fn fire_pop(&mut self) {
        let path = self.entries[self.index].clone();
        if let Some(listener) = self.listener.as_mut() {
            listener(&path);
        }
    }
}

impl HistoryAdapter for MemoryHistory {
    fn push(&mut self, path: &str) {
        // Pushing discards any forward entries, like the browser stack.
        self.entries.truncate(self.index + 1);
        self.entries.push(path.to_owned());
        self.index = self.entries.len() - 1;
    }

    fn replace(&mut self, path: &str) {
        self.entries[self.index] = path.to_owned();
    }

    fn on_popped(&mut self, callback: PopCallback) {
        self.listener = Some(callback);
    }
}

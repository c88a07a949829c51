//! Known-room roster.
//!
//! [`RoomDirectory`] holds every room name the client believes exists on the
//! server, whether or not the user has it open. Names keep insertion order so
//! the rendered roster is stable.

/// Set of room names known to exist server-side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomDirectory {
    names: Vec<String>,
}

impl RoomDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a room. Returns `true` if it was not already known.
    pub fn add(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.names.push(name.to_owned());
        true
    }

    /// Forget a room. Returns `true` if it was known.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|known| known != name);
        self.names.len() != before
    }

    /// Apply a roster snapshot.
    ///
    /// Names not yet known are appended in snapshot order. Known names absent
    /// from the snapshot are kept: the snapshot is merged, not substituted.
    /// Returns how many names were added.
    pub fn replace_all<I, S>(&mut self, names: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names.into_iter().filter(|name| self.add(name.as_ref())).count()
    }

    /// Whether a room is known.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|known| known == name)
    }

    /// Known rooms in display order.
    pub fn list(&self) -> &[String] {
        &self.names
    }

    /// Number of known rooms.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no room is known.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

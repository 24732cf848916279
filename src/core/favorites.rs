/// User-curated set of dog identifiers, in selection order
///
/// Toggling is synchronous and local; nothing here touches the network.
/// The set is never cleared automatically: dismissing a match dialog or
/// running a new search leaves it intact.
#[derive(Debug, Clone, Default)]
pub struct FavoritesSet {
    ids: Vec<String>,
}

impl FavoritesSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the id if absent, remove it if present
    pub fn toggle(&mut self, id: impl Into<String>) {
        let id = id.into();
        if let Some(pos) = self.ids.iter().position(|f| *f == id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id);
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|f| f == id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}

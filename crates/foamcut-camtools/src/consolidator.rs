//! Path consolidation.
//!
//! Drawings arrive as many short fragments (individual lines, arc pieces,
//! polyline segments). Consolidation chains fragments that share endpoints
//! into maximal continuous paths so each one is cut with a single plunge.
//!
//! Paths live in an arena addressed by [`PathId`]. Absorbed paths leave an
//! empty slot behind, so ids stay valid while merging and
//! [`PathConsolidator::into_paths`] returns a compact list in arena order.

use foamcut_core::MachinePath;
use tracing::debug;

/// Handle to a path held by a [`PathConsolidator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PathId(usize);

impl PathId {
    /// Arena slot index
    pub fn index(self) -> usize {
        self.0
    }
}

/// Merges paths that share endpoints
#[derive(Debug, Default)]
pub struct PathConsolidator {
    slots: Vec<Option<MachinePath>>,
    joins: usize,
}

impl PathConsolidator {
    /// Create an empty consolidator
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a path, joining it onto the first held path that accepts it.
    ///
    /// Returns the id of the path that now contains it.
    pub fn add(&mut self, path: MachinePath) -> PathId {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if let Some(existing) = slot {
                if existing.join(&path) {
                    self.joins += 1;
                    return PathId(index);
                }
            }
        }

        self.slots.push(Some(path));
        PathId(self.slots.len() - 1)
    }

    /// Path behind an id, `None` once it has been absorbed
    pub fn get(&self, id: PathId) -> Option<&MachinePath> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    /// Number of paths currently held
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Whether no paths are held
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of successful joins so far
    pub fn joins(&self) -> usize {
        self.joins
    }

    /// Join held paths with each other until no two share an endpoint.
    ///
    /// Two paths added separately can become adjacent only after a later
    /// fragment extends one of them, which [`add`](Self::add) alone does not
    /// revisit. Returns the number of joins made.
    pub fn merge_adjacent(&mut self) -> usize {
        let mut total = 0;
        loop {
            let merged = self.merge_pass();
            if merged == 0 {
                break;
            }
            total += merged;
        }
        total
    }

    fn merge_pass(&mut self) -> usize {
        let mut merged = 0;
        for i in 0..self.slots.len() {
            for j in 0..self.slots.len() {
                if i == j || self.slots[i].is_none() {
                    continue;
                }
                let Some(other) = self.slots[j].take() else {
                    continue;
                };

                let joined = self.slots[i]
                    .as_mut()
                    .is_some_and(|receiver| receiver.join(&other));
                if joined {
                    merged += 1;
                    self.joins += 1;
                } else {
                    self.slots[j] = Some(other);
                }
            }
        }
        merged
    }

    /// Held paths in arena order
    pub fn into_paths(self) -> Vec<MachinePath> {
        self.slots.into_iter().flatten().collect()
    }

    /// Merge adjacent paths and return the maximal paths
    pub fn finish(mut self) -> Vec<MachinePath> {
        let late = self.merge_adjacent();
        if late > 0 {
            debug!(joins = self.joins, late, "joined paths after insertion");
        }
        self.into_paths()
    }
}

/// Consolidate fragments into maximal paths.
///
/// Paths of different roles never merge. Zero fragments produce zero paths.
pub fn consolidate(paths: impl IntoIterator<Item = MachinePath>) -> Vec<MachinePath> {
    let mut consolidator = PathConsolidator::new();
    let mut fragments = 0;
    for path in paths {
        consolidator.add(path);
        fragments += 1;
    }

    let paths = consolidator.finish();
    debug!(fragments, paths = paths.len(), "consolidated fragments");
    paths
}

// Snapshot history for step-mode replay

use crate::memory::ArrayEnvironment;

/// Stack of environments, one per executed statement plus the empty start.
///
/// Stepping forward pushes, stepping back pops. There is no redo: anything
/// popped is gone and will be recomputed on the next forward step.
#[derive(Debug, Clone)]
pub struct SnapshotManager {
    snapshots: Vec<ArrayEnvironment>,
    current_memory: usize,
}

impl SnapshotManager {
    /// A history holding only the empty starting environment
    pub fn new() -> Self {
        SnapshotManager {
            snapshots: vec![ArrayEnvironment::new()],
            current_memory: 0,
        }
    }

    /// Add a snapshot to history
    pub fn push(&mut self, snapshot: ArrayEnvironment) {
        self.current_memory += snapshot.estimated_size();
        self.snapshots.push(snapshot);
    }

    /// Remove the newest snapshot; the starting snapshot is never removed
    pub fn pop(&mut self) -> Option<ArrayEnvironment> {
        if self.snapshots.len() <= 1 {
            return None;
        }
        let snapshot = self.snapshots.pop()?;
        self.current_memory = self.current_memory.saturating_sub(snapshot.estimated_size());
        Some(snapshot)
    }

    /// The newest snapshot
    pub fn latest(&self) -> &ArrayEnvironment {
        // `snapshots` always holds the starting environment
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// Get a snapshot by index
    pub fn get(&self, index: usize) -> Option<&ArrayEnvironment> {
        self.snapshots.get(index)
    }

    /// Get the number of snapshots, including the starting one
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Back to the single empty starting snapshot
    pub fn reset(&mut self) {
        self.snapshots.clear();
        self.snapshots.push(ArrayEnvironment::new());
        self.current_memory = 0;
    }

    /// Get current memory usage
    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }
}

impl Default for SnapshotManager {
    fn default() -> Self {
        Self::new()
    }
}

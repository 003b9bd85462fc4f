//! Undo hook.
//!
//! The engine does not keep history. Before every mutation of the bin store
//! it hands the current bins to a caller-supplied [`UndoHook`], which may
//! record them however it likes.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use drawerzen_core::Bin;

/// What is about to change the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Draw,
    Add,
    Move,
    Drop,
    Remove,
    ReturnToCatalog,
    Update,
    AutoSort,
    GenerateBins,
    Clear,
}

impl fmt::Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Draw => "Draw Bin",
            Self::Add => "Add Bin",
            Self::Move => "Move Bin",
            Self::Drop => "Drop Bin",
            Self::Remove => "Remove Bin",
            Self::ReturnToCatalog => "Return Bin",
            Self::Update => "Edit Bin",
            Self::AutoSort => "Auto Sort",
            Self::GenerateBins => "Generate Bins",
            Self::Clear => "Clear Layout",
        };
        f.write_str(name)
    }
}

/// Called immediately before the bin store is mutated.
pub trait UndoHook {
    fn push_undo_snapshot(&mut self, bins: &[Bin], kind: MutationKind);
}

/// Hook that ignores every snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoUndo;

impl UndoHook for NoUndo {
    fn push_undo_snapshot(&mut self, _bins: &[Bin], _kind: MutationKind) {}
}

/// Adapts a closure into an [`UndoHook`].
pub struct FnUndoHook<F>(pub F);

impl<F> UndoHook for FnUndoHook<F>
where
    F: FnMut(&[Bin], MutationKind),
{
    fn push_undo_snapshot(&mut self, bins: &[Bin], kind: MutationKind) {
        (self.0)(bins, kind)
    }
}

impl<H: UndoHook> UndoHook for Rc<RefCell<H>> {
    fn push_undo_snapshot(&mut self, bins: &[Bin], kind: MutationKind) {
        self.borrow_mut().push_undo_snapshot(bins, kind)
    }
}

/// One recorded pre-mutation state.
#[derive(Debug, Clone)]
pub struct UndoSnapshot {
    pub kind: MutationKind,
    pub bins: Vec<Bin>,
}

/// Bounded in-memory recorder of snapshots.
#[derive(Debug, Clone)]
pub struct SnapshotRecorder {
    snapshots: Vec<UndoSnapshot>,
    limit: usize,
}

impl SnapshotRecorder {
    const DEFAULT_LIMIT: usize = 50;

    pub fn new() -> Self {
        Self::with_limit(Self::DEFAULT_LIMIT)
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            snapshots: Vec::new(),
            limit: limit.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn last(&self) -> Option<&UndoSnapshot> {
        self.snapshots.last()
    }

    pub fn pop(&mut self) -> Option<UndoSnapshot> {
        self.snapshots.pop()
    }

    pub fn snapshots(&self) -> &[UndoSnapshot] {
        &self.snapshots
    }
}

impl Default for SnapshotRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl UndoHook for SnapshotRecorder {
    fn push_undo_snapshot(&mut self, bins: &[Bin], kind: MutationKind) {
        if self.snapshots.len() == self.limit {
            self.snapshots.remove(0);
        }
        self.snapshots.push(UndoSnapshot {
            kind,
            bins: bins.to_vec(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_limit() {
        let mut recorder = SnapshotRecorder::with_limit(2);
        let bins = vec![Bin::new(0.0, 0.0, 42.0, 42.0, 21.0)];
        recorder.push_undo_snapshot(&[], MutationKind::Draw);
        recorder.push_undo_snapshot(&bins, MutationKind::Move);
        recorder.push_undo_snapshot(&bins, MutationKind::Remove);

        assert_eq!(recorder.len(), 2);
        assert_eq!(recorder.snapshots()[0].kind, MutationKind::Move);
        assert_eq!(recorder.last().unwrap().kind, MutationKind::Remove);
    }

    #[test]
    fn test_closure_hook() {
        let mut count = 0;
        {
            let mut hook = FnUndoHook(|_: &[Bin], _: MutationKind| count += 1);
            hook.push_undo_snapshot(&[], MutationKind::AutoSort);
            hook.push_undo_snapshot(&[], MutationKind::GenerateBins);
        }
        assert_eq!(count, 2);
    }

    #[test]
    fn test_shared_recorder() {
        let shared = Rc::new(RefCell::new(SnapshotRecorder::new()));
        let mut hook = shared.clone();
        hook.push_undo_snapshot(&[], MutationKind::Clear);
        assert_eq!(shared.borrow().len(), 1);
    }

    #[test]
    fn test_mutation_kind_display() {
        assert_eq!(MutationKind::GenerateBins.to_string(), "Generate Bins");
    }
}

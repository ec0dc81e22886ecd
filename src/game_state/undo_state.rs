use crate::game_state::board::Board;

/// Stack of board snapshots taken immediately before each attempted move.
///
/// A rejected move pops its own snapshot again, so only accepted moves leave
/// an entry behind.
#[derive(Debug, Clone, Default)]
pub struct UndoHistory {
    snapshots: Vec<Board>,
}

impl UndoHistory {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, snapshot: Board) {
        self.snapshots.push(snapshot);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<Board> {
        self.snapshots.pop()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}

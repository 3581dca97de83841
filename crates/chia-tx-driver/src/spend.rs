use clvmr::NodePtr;

/// A puzzle and the solution it will be run with.
/// Both are allocated in a [`SpendContext`](crate::SpendContext).
#[derive(Debug, Clone, Copy)]
#[must_use]
pub struct Spend {
    pub puzzle: NodePtr,
    pub solution: NodePtr,
}

impl Spend {
    pub fn new(puzzle: NodePtr, solution: NodePtr) -> Self {
        Self { puzzle, solution }
    }
}

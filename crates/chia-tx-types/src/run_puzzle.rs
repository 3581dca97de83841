use clvmr::{
    reduction::{EvalErr, Reduction},
    run_program, Allocator, ChiaDialect, NodePtr,
};

/// The maximum cost of running a single puzzle, matching the block cost limit.
pub const MAX_PUZZLE_COST: u64 = 11_000_000_000;

pub fn run_puzzle(
    allocator: &mut Allocator,
    puzzle: NodePtr,
    solution: NodePtr,
) -> Result<NodePtr, EvalErr> {
    Ok(run_puzzle_with_cost(allocator, puzzle, solution)?.1)
}

pub fn run_puzzle_with_cost(
    allocator: &mut Allocator,
    puzzle: NodePtr,
    solution: NodePtr,
) -> Result<Reduction, EvalErr> {
    run_program(
        allocator,
        &ChiaDialect::new(0),
        puzzle,
        solution,
        MAX_PUZZLE_COST,
    )
}

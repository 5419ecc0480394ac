/// Greedy brick placement over the wall shape
pub mod filler;
/// Yes/no outcome of a feasibility check
pub mod verdict;

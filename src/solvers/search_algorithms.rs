//! A* search over user-defined state spaces.

mod astar_search;
mod search;
pub mod search_nodes;
mod successors;

pub use astar_search::AStarSearch;
pub use search::{Search, SearchParameters, SearchStatus, Solution};
pub use search_nodes::{Location, Node, NodeId, SolutionPath};
pub use successors::Successors;

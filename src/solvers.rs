mod astar;
pub mod search_algorithms;

pub use astar::create_astar;
pub use search_algorithms::{
    AStarSearch, Search, SearchParameters, SearchStatus, Solution, Successors,
};

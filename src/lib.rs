pub mod io;
pub mod solvers;
mod state;
pub mod timer;

pub use solvers::Solution;
pub use state::UserState;

pub mod prelude {
    pub use super::solvers::{
        AStarSearch, Search, SearchParameters, SearchStatus, Successors,
    };
    pub use super::{Solution, UserState};
}

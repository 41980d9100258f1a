use crate::solvers::search_algorithms::{AStarSearch, SearchParameters};
use crate::UserState;
use std::fmt::Display;

/// Creates an A* solver searching from `start` to `goal`.
///
/// Search nodes are ordered by the f-value, the sum of the path cost and the heuristic estimate.
/// The path found is optimal if `UserState::goal_distance_estimate` never overestimates.
///
/// # Examples
///
/// ```
/// use rastar::prelude::*;
/// use rastar::solvers;
///
/// // A small road network: (from, to, length).
/// const ROADS: [(u8, u8, f64); 5] = [(0, 1, 4.0), (0, 2, 1.0), (2, 1, 2.0), (1, 3, 1.0), (2, 3, 5.0)];
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// struct Town(u8);
///
/// impl UserState for Town {
///     type CostType = f64;
///     type Key = u8;
///
///     fn get_key(&self) -> u8 {
///         self.0
///     }
///
///     fn goal_distance_estimate(&self, _: &Self) -> f64 {
///         0.0
///     }
///
///     fn is_goal(&self, goal: &Self) -> bool {
///         self.0 == goal.0
///     }
///
///     fn get_successors(&self, _: Option<&Self>, successors: &mut Successors<Self>) -> bool {
///         ROADS
///             .iter()
///             .filter(|(from, _, _)| *from == self.0)
///             .all(|&(_, to, _)| successors.add(Town(to)))
///     }
///
///     fn get_cost(&self, successor: &Self) -> f64 {
///         ROADS
///             .iter()
///             .find(|(from, to, _)| *from == self.0 && *to == successor.0)
///             .map_or(f64::INFINITY, |&(_, _, length)| length)
///     }
/// }
///
/// let parameters = SearchParameters {
///     quiet: true,
///     ..Default::default()
/// };
/// let mut solver = solvers::create_astar(Town(0), Town(3), parameters);
/// let solution = solver.search();
/// assert_eq!(solution.status, SearchStatus::Succeeded);
/// assert_eq!(solution.cost, Some(4.0));
///
/// let towns = solver.get_solution_path().map(|node| node.get_state().0).collect::<Vec<_>>();
/// assert_eq!(towns, vec![0, 2, 1, 3]);
///
/// solver.free_solution_nodes();
/// assert_eq!(solver.get_live_node_count(), 0);
/// ```
pub fn create_astar<S>(start: S, goal: S, parameters: SearchParameters) -> AStarSearch<S>
where
    S: UserState,
    S::CostType: Display,
{
    let mut search = AStarSearch::new(parameters);
    search.set_start_and_goal_states(start, goal);

    search
}

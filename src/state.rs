use crate::solvers::search_algorithms::Successors;
use num_traits::Zero;
use std::hash::Hash;
use std::ops::Add;

/// Trait for states explored by A* search.
///
/// This trait defines the operations the search engine needs from a domain.
/// The engine knows nothing else about the state: it never inspects it and
/// only compares states through `get_key` and `is_same_state`.
///
/// The cost of a path is the sum of the transition costs returned by `get_cost`.
/// For the solution to be optimal, `goal_distance_estimate` must never overestimate
/// the remaining cost.
///
/// # Examples
///
/// ```
/// use rastar::prelude::*;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Position(i32);
///
/// impl UserState for Position {
///     type CostType = f32;
///     type Key = i32;
///
///     fn get_key(&self) -> i32 {
///         self.0
///     }
///
///     fn goal_distance_estimate(&self, goal: &Self) -> f32 {
///         (goal.0 - self.0).abs() as f32
///     }
///
///     fn is_goal(&self, goal: &Self) -> bool {
///         self.0 == goal.0
///     }
///
///     fn get_successors(&self, parent: Option<&Self>, successors: &mut Successors<Self>) -> bool {
///         for next in [self.0 - 1, self.0 + 1] {
///             if parent.map_or(true, |p| p.0 != next) && !successors.add(Position(next)) {
///                 return false;
///             }
///         }
///
///         true
///     }
///
///     fn get_cost(&self, _: &Self) -> f32 {
///         1.0
///     }
/// }
///
/// let start = Position(0);
/// assert_eq!(start.goal_distance_estimate(&Position(3)), 3.0);
/// assert!(start.is_same_state(&Position(0)));
/// assert!(!start.is_goal(&Position(3)));
/// ```
pub trait UserState: Sized {
    /// Type of the cost. Usually, `f32`, `f64`, or `i32`.
    type CostType: PartialOrd + Add<Output = Self::CostType> + Zero + Copy;
    /// Type of the key used to look up a state.
    type Key: Hash + Eq;

    /// Gets the key of the state.
    ///
    /// The key is used to find a state in the open and closed lists in constant time.
    /// The same states must have equal keys. Different states may share a key,
    /// in which case `is_same_state` tells them apart.
    fn get_key(&self) -> Self::Key;

    /// Estimates the cost from this state to the goal.
    fn goal_distance_estimate(&self, goal: &Self) -> Self::CostType;

    /// Returns whether this state satisfies the goal.
    fn is_goal(&self, goal: &Self) -> bool;

    /// Returns whether two states are the same.
    ///
    /// Called on states having equal keys to detect duplicates.
    /// The default implementation compares the keys, which suffices when a key identifies a state.
    fn is_same_state(&self, other: &Self) -> bool {
        self.get_key() == other.get_key()
    }

    /// Generates the successors of the state by calling `successors.add`.
    ///
    /// `parent` is the predecessor of the state on the current best path, or `None` for the start state.
    /// It can be used to avoid generating a transition straight back.
    ///
    /// Returns `false` if the successors cannot be enumerated, e.g., when `successors.add` refuses a state.
    fn get_successors(&self, parent: Option<&Self>, successors: &mut Successors<Self>) -> bool;

    /// Returns the cost of the transition from this state to `successor`.
    fn get_cost(&self, successor: &Self) -> Self::CostType;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct MockState(u8, u8);

    impl UserState for MockState {
        type CostType = i32;
        type Key = u8;

        fn get_key(&self) -> u8 {
            self.0
        }

        fn goal_distance_estimate(&self, goal: &Self) -> i32 {
            (i32::from(goal.0) - i32::from(self.0)).abs()
        }

        fn is_goal(&self, goal: &Self) -> bool {
            self.0 == goal.0
        }

        fn get_successors(&self, _: Option<&Self>, successors: &mut Successors<Self>) -> bool {
            successors.add(MockState(self.0 + 1, 0))
        }

        fn get_cost(&self, _: &Self) -> i32 {
            1
        }
    }

    #[test]
    fn test_is_same_state_compares_keys() {
        assert!(MockState(1, 0).is_same_state(&MockState(1, 5)));
        assert!(!MockState(1, 0).is_same_state(&MockState(2, 0)));
    }

    #[test]
    fn test_goal_distance_estimate() {
        assert_eq!(MockState(1, 0).goal_distance_estimate(&MockState(4, 0)), 3);
        assert_eq!(MockState(4, 0).goal_distance_estimate(&MockState(1, 0)), 3);
    }
}

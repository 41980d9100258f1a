use super::{Node, NodeId, NodeStore};
use crate::state::UserState;
use std::iter::FusedIterator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// Iterator over the nodes of a solution path.
///
/// Walks `child` links from the start to the goal, or `parent` links from the goal to the start.
pub struct SolutionPath<'a, S: UserState> {
    store: &'a NodeStore<S>,
    current: Option<NodeId>,
    direction: Direction,
}

impl<'a, S: UserState> SolutionPath<'a, S> {
    /// Creates an iterator from `start` following the child links.
    pub fn forward(store: &'a NodeStore<S>, start: Option<NodeId>) -> Self {
        Self {
            store,
            current: start,
            direction: Direction::Forward,
        }
    }

    /// Creates an iterator from `goal` following the parent links.
    pub fn backward(store: &'a NodeStore<S>, goal: Option<NodeId>) -> Self {
        Self {
            store,
            current: goal,
            direction: Direction::Backward,
        }
    }

    /// Collects the states on the path.
    pub fn get_states(self) -> Vec<&'a S> {
        self.map(Node::get_state).collect()
    }
}

impl<'a, S: UserState> Iterator for SolutionPath<'a, S> {
    type Item = &'a Node<S, S::CostType>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.store.get(self.current?)?;
        self.current = match self.direction {
            Direction::Forward => node.get_child(),
            Direction::Backward => node.get_parent(),
        };

        Some(node)
    }
}

impl<S: UserState> FusedIterator for SolutionPath<'_, S> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::search_algorithms::Successors;

    #[derive(Debug, PartialEq)]
    struct MockState(u32);

    impl UserState for MockState {
        type CostType = u32;
        type Key = u32;

        fn get_key(&self) -> u32 {
            self.0
        }

        fn goal_distance_estimate(&self, _: &Self) -> u32 {
            0
        }

        fn is_goal(&self, _: &Self) -> bool {
            false
        }

        fn get_successors(&self, _: Option<&Self>, _: &mut Successors<Self>) -> bool {
            true
        }

        fn get_cost(&self, _: &Self) -> u32 {
            1
        }
    }

    fn build_chain(store: &mut NodeStore<MockState>) -> (NodeId, NodeId) {
        let start = store.allocate(Node::new(MockState(1), 0, 0, None));
        let middle = store.allocate(Node::new(MockState(2), 1, 0, Some(start)));
        let goal = store.allocate(Node::new(MockState(3), 2, 0, Some(middle)));
        store[start].set_child(Some(middle));
        store[middle].set_child(Some(goal));

        (start, goal)
    }

    #[test]
    fn test_forward() {
        let mut store = NodeStore::default();
        let (start, _) = build_chain(&mut store);

        let states = SolutionPath::forward(&store, Some(start)).get_states();
        assert_eq!(states, vec![&MockState(1), &MockState(2), &MockState(3)]);

        let costs = SolutionPath::forward(&store, Some(start))
            .map(Node::get_g)
            .collect::<Vec<_>>();
        assert_eq!(costs, vec![0, 1, 2]);
    }

    #[test]
    fn test_backward() {
        let mut store = NodeStore::default();
        let (_, goal) = build_chain(&mut store);

        let states = SolutionPath::backward(&store, Some(goal)).get_states();
        assert_eq!(states, vec![&MockState(3), &MockState(2), &MockState(1)]);
    }

    #[test]
    fn test_empty() {
        let store = NodeStore::<MockState>::default();

        assert_eq!(SolutionPath::forward(&store, None).count(), 0);
        assert_eq!(SolutionPath::backward(&store, None).count(), 0);
    }

    #[test]
    fn test_single_node() {
        let mut store = NodeStore::default();
        let start = store.allocate(Node::new(MockState(1), 0, 0, None));

        let mut path = SolutionPath::forward(&store, Some(start));
        assert_eq!(path.next().map(Node::get_state), Some(&MockState(1)));
        assert!(path.next().is_none());
        assert!(path.next().is_none());
    }
}

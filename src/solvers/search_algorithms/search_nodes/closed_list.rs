use super::{Location, NodeId, NodeStore};
use crate::state::UserState;

/// Closed list: the nodes that were already expanded.
///
/// No order is kept. A node stores its position, so it can be removed in constant time when it is reopened.
#[derive(Debug, Default)]
pub struct ClosedList {
    nodes: Vec<NodeId>,
}

impl ClosedList {
    /// Returns the number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns whether the closed list is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the ids of the nodes.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    /// Returns the closed node having the same state, if any.
    pub fn find<S: UserState>(&self, store: &NodeStore<S>, state: &S) -> Option<NodeId> {
        store
            .find(state)
            .filter(|&id| matches!(store.get_location(id), Location::Closed(_)))
    }

    /// Inserts a node.
    pub fn push<S: UserState>(&mut self, store: &mut NodeStore<S>, id: NodeId) {
        store[id].set_location(Location::Closed(self.nodes.len()));
        self.nodes.push(id);
    }

    /// Removes a node.
    ///
    /// # Panics
    ///
    /// Panics if the node is not in the closed list.
    pub fn remove<S: UserState>(&mut self, store: &mut NodeStore<S>, id: NodeId) {
        let Location::Closed(position) = store.get_location(id) else {
            panic!("node {} is not in the closed list", id.0);
        };

        self.nodes.swap_remove(position);
        store[id].set_location(Location::Detached);

        if let Some(&moved) = self.nodes.get(position) {
            store[moved].set_location(Location::Closed(position));
        }
    }

    /// Removes all nodes and returns their ids.
    ///
    /// The nodes are marked as detached but stay in the store.
    pub fn drain<S: UserState>(&mut self, store: &mut NodeStore<S>) -> Vec<NodeId> {
        for &id in &self.nodes {
            store[id].set_location(Location::Detached);
        }

        std::mem::take(&mut self.nodes)
    }

    /// Removes all nodes without touching the store.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::search_algorithms::search_nodes::Node;
    use crate::solvers::search_algorithms::Successors;

    #[derive(Debug, PartialEq)]
    struct MockState(char);

    impl UserState for MockState {
        type CostType = i32;
        type Key = char;

        fn get_key(&self) -> char {
            self.0
        }

        fn goal_distance_estimate(&self, _: &Self) -> i32 {
            0
        }

        fn is_goal(&self, _: &Self) -> bool {
            false
        }

        fn get_successors(&self, _: Option<&Self>, _: &mut Successors<Self>) -> bool {
            true
        }

        fn get_cost(&self, _: &Self) -> i32 {
            1
        }
    }

    #[test]
    fn test_push_find_remove() {
        let mut store = NodeStore::default();
        let mut closed = ClosedList::default();
        let ids = ['a', 'b', 'c']
            .into_iter()
            .map(|c| {
                let id = store.allocate(Node::new(MockState(c), 0, 0, None));
                closed.push(&mut store, id);
                id
            })
            .collect::<Vec<_>>();

        assert_eq!(closed.len(), 3);
        assert_eq!(closed.find(&store, &MockState('b')), Some(ids[1]));
        assert_eq!(closed.find(&store, &MockState('d')), None);

        closed.remove(&mut store, ids[0]);
        assert_eq!(closed.len(), 2);
        assert_eq!(closed.find(&store, &MockState('a')), None);
        assert_eq!(store.get_location(ids[0]), Location::Detached);
        assert_eq!(store.get_location(ids[2]), Location::Closed(0));
        assert_eq!(closed.iter().collect::<Vec<_>>(), vec![ids[2], ids[1]]);

        closed.remove(&mut store, ids[1]);
        closed.remove(&mut store, ids[2]);
        assert!(closed.is_empty());
    }

    #[test]
    #[should_panic]
    fn test_remove_not_closed() {
        let mut store = NodeStore::default();
        let mut closed = ClosedList::default();
        let id = store.allocate(Node::new(MockState('a'), 0, 0, None));

        closed.remove(&mut store, id);
    }

    #[test]
    fn test_drain() {
        let mut store = NodeStore::default();
        let mut closed = ClosedList::default();
        let id = store.allocate(Node::new(MockState('a'), 0, 0, None));
        closed.push(&mut store, id);

        assert_eq!(closed.drain(&mut store), vec![id]);
        assert!(closed.is_empty());
        assert_eq!(store.get_location(id), Location::Detached);
    }
}

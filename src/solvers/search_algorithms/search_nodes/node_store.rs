use super::{Location, Node, NodeId};
use crate::state::UserState;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

/// Arena owning the nodes of one search.
///
/// Nodes are addressed by [`NodeId`], and the store keeps a hash index from state keys to nodes
/// so that a state is found in the open and closed lists in constant time.
/// Nodes sharing a key are told apart by `UserState::is_same_state`,
/// and at most one node exists per state.
///
/// The store counts allocations and releases to detect leaked nodes.
pub struct NodeStore<S: UserState> {
    nodes: Vec<Option<Node<S, S::CostType>>>,
    free_slots: Vec<usize>,
    index: FxHashMap<S::Key, SmallVec<[NodeId; 1]>>,
    allocated: usize,
    released: usize,
}

impl<S: UserState> Default for NodeStore<S> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            free_slots: Vec::new(),
            index: FxHashMap::default(),
            allocated: 0,
            released: 0,
        }
    }
}

impl<S: UserState> NodeStore<S> {
    /// Creates a new node store with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            free_slots: Vec::new(),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            allocated: 0,
            released: 0,
        }
    }

    /// Stores a node and returns its id.
    ///
    /// # Panics
    ///
    /// Panics if a node with the same state is already stored.
    pub fn allocate(&mut self, node: Node<S, S::CostType>) -> NodeId {
        assert!(
            self.find(node.get_state()).is_none(),
            "a node with the same state is already stored"
        );

        let slot = self.free_slots.pop().unwrap_or(self.nodes.len());
        let id = NodeId(slot);
        self.index
            .entry(node.get_state().get_key())
            .or_default()
            .push(id);

        if slot == self.nodes.len() {
            self.nodes.push(Some(node));
        } else {
            self.nodes[slot] = Some(node);
        }

        self.allocated += 1;

        id
    }

    /// Removes a node from the store and returns it.
    ///
    /// # Panics
    ///
    /// Panics if the node was already released.
    pub fn release(&mut self, id: NodeId) -> Node<S, S::CostType> {
        let node = self.nodes[id.0]
            .take()
            .unwrap_or_else(|| panic!("node {} is already released", id.0));
        let key = node.get_state().get_key();

        if let Some(bucket) = self.index.get_mut(&key) {
            bucket.retain(|other| *other != id);

            if bucket.is_empty() {
                self.index.remove(&key);
            }
        }
        self.free_slots.push(id.0);
        self.released += 1;

        node
    }

    /// Releases every node in the store.
    pub fn release_all(&mut self) {
        self.released += self.nodes.iter().filter(|node| node.is_some()).count();
        self.nodes.clear();
        self.free_slots.clear();
        self.index.clear();
    }

    /// Returns the id of the node having the same state, if any.
    pub fn find(&self, state: &S) -> Option<NodeId> {
        self.index.get(&state.get_key()).and_then(|bucket| {
            bucket
                .iter()
                .copied()
                .find(|&id| self[id].get_state().is_same_state(state))
        })
    }

    /// Returns the node, or `None` if it was released.
    pub fn get(&self, id: NodeId) -> Option<&Node<S, S::CostType>> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    /// Returns the container holding the node.
    pub fn get_location(&self, id: NodeId) -> Location {
        self[id].get_location()
    }

    /// Returns the number of live nodes.
    pub fn len(&self) -> usize {
        self.allocated - self.released
    }

    /// Returns whether no node is alive.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of nodes allocated since the last reset.
    pub fn get_allocated_count(&self) -> usize {
        self.allocated
    }

    /// Returns the number of nodes released since the last reset.
    pub fn get_released_count(&self) -> usize {
        self.released
    }

    /// Resets the allocation counters.
    ///
    /// # Panics
    ///
    /// Panics if a node is still alive.
    pub fn reset_counters(&mut self) {
        assert!(self.is_empty(), "{} nodes are still alive", self.len());
        self.allocated = 0;
        self.released = 0;
    }
}

impl<S: UserState> Index<NodeId> for NodeStore<S> {
    type Output = Node<S, S::CostType>;

    fn index(&self, id: NodeId) -> &Self::Output {
        self.nodes[id.0]
            .as_ref()
            .unwrap_or_else(|| panic!("node {} is already released", id.0))
    }
}

impl<S: UserState> IndexMut<NodeId> for NodeStore<S> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        self.nodes[id.0]
            .as_mut()
            .unwrap_or_else(|| panic!("node {} is already released", id.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::search_algorithms::Successors;

    #[derive(Debug, PartialEq)]
    struct MockState(i32);

    impl UserState for MockState {
        type CostType = i32;
        type Key = i32;

        fn get_key(&self) -> i32 {
            self.0
        }

        fn goal_distance_estimate(&self, _: &Self) -> i32 {
            0
        }

        fn is_goal(&self, goal: &Self) -> bool {
            self.0 == goal.0
        }

        fn get_successors(&self, _: Option<&Self>, _: &mut Successors<Self>) -> bool {
            true
        }

        fn get_cost(&self, _: &Self) -> i32 {
            1
        }
    }

    #[test]
    fn test_allocate_and_find() {
        let mut store = NodeStore::default();
        let a = store.allocate(Node::new(MockState(1), 0, 0, None));
        let b = store.allocate(Node::new(MockState(2), 1, 0, Some(a)));

        assert_ne!(a, b);
        assert_eq!(store.find(&MockState(1)), Some(a));
        assert_eq!(store.find(&MockState(2)), Some(b));
        assert_eq!(store.find(&MockState(3)), None);
        assert_eq!(store[b].get_parent(), Some(a));
        assert_eq!(store.len(), 2);
        assert_eq!(store.get_allocated_count(), 2);
    }

    #[derive(Debug, PartialEq)]
    struct Coarse(i32);

    impl UserState for Coarse {
        type CostType = i32;
        type Key = i32;

        fn get_key(&self) -> i32 {
            self.0 / 10
        }

        fn goal_distance_estimate(&self, _: &Self) -> i32 {
            0
        }

        fn is_goal(&self, goal: &Self) -> bool {
            self.0 == goal.0
        }

        fn is_same_state(&self, other: &Self) -> bool {
            self.0 == other.0
        }

        fn get_successors(&self, _: Option<&Self>, _: &mut Successors<Self>) -> bool {
            true
        }

        fn get_cost(&self, _: &Self) -> i32 {
            1
        }
    }

    #[test]
    fn test_shared_key_distinct_states() {
        let mut store = NodeStore::default();
        let a = store.allocate(Node::new(Coarse(11), 0, 0, None));
        let b = store.allocate(Node::new(Coarse(12), 0, 0, None));

        assert_ne!(a, b);
        assert_eq!(store.find(&Coarse(11)), Some(a));
        assert_eq!(store.find(&Coarse(12)), Some(b));
        assert_eq!(store.find(&Coarse(13)), None);

        store.release(a);
        assert_eq!(store.find(&Coarse(11)), None);
        assert_eq!(store.find(&Coarse(12)), Some(b));

        store.release(b);
        assert_eq!(store.find(&Coarse(12)), None);
    }

    #[test]
    #[should_panic]
    fn test_allocate_same_state_shared_key() {
        let mut store = NodeStore::default();
        store.allocate(Node::new(Coarse(11), 0, 0, None));
        store.allocate(Node::new(Coarse(11), 1, 0, None));
    }

    #[test]
    #[should_panic]
    fn test_allocate_duplicate_state() {
        let mut store = NodeStore::default();
        store.allocate(Node::new(MockState(1), 0, 0, None));
        store.allocate(Node::new(MockState(1), 2, 0, None));
    }

    #[test]
    fn test_release_reuses_slot() {
        let mut store = NodeStore::with_capacity(4);
        let a = store.allocate(Node::new(MockState(1), 0, 0, None));
        let node = store.release(a);

        assert_eq!(node.get_state(), &MockState(1));
        assert_eq!(store.find(&MockState(1)), None);
        assert!(store.get(a).is_none());
        assert!(store.is_empty());

        let b = store.allocate(Node::new(MockState(2), 0, 0, None));
        assert_eq!(a, b);
        assert_eq!(store.get_allocated_count(), 2);
        assert_eq!(store.get_released_count(), 1);
    }

    #[test]
    #[should_panic]
    fn test_release_twice() {
        let mut store = NodeStore::default();
        let a = store.allocate(Node::new(MockState(1), 0, 0, None));
        store.release(a);
        store.release(a);
    }

    #[test]
    fn test_release_all() {
        let mut store = NodeStore::default();
        let a = store.allocate(Node::new(MockState(1), 0, 0, None));
        store.allocate(Node::new(MockState(2), 0, 0, None));
        store.allocate(Node::new(MockState(3), 0, 0, None));
        store.release(a);
        store.release_all();

        assert!(store.is_empty());
        assert_eq!(store.get_allocated_count(), 3);
        assert_eq!(store.get_released_count(), 3);
        assert_eq!(store.find(&MockState(2)), None);

        store.reset_counters();
        assert_eq!(store.get_allocated_count(), 0);
        assert_eq!(store.get_released_count(), 0);
    }

    #[test]
    #[should_panic]
    fn test_reset_counters_with_live_nodes() {
        let mut store = NodeStore::default();
        store.allocate(Node::new(MockState(1), 0, 0, None));
        store.reset_counters();
    }
}

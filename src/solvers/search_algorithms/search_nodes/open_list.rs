use super::{Location, NodeId, NodeStore};
use crate::state::UserState;

/// Open list: a binary min-heap of nodes ordered by `f`.
///
/// Each node stores its position in the heap, so a node can be found, moved, or removed
/// without scanning the heap. Ties in `f` are broken arbitrarily.
#[derive(Debug, Default)]
pub struct OpenList {
    heap: Vec<NodeId>,
}

impl OpenList {
    /// Creates a new open list with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of nodes.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns whether the open list is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the ids of the nodes in heap order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.heap.iter().copied()
    }

    /// Returns the node with the minimum `f` without removing it.
    pub fn peek(&self) -> Option<NodeId> {
        self.heap.first().copied()
    }

    /// Returns the open node having the same state, if any.
    pub fn find<S: UserState>(&self, store: &NodeStore<S>, state: &S) -> Option<NodeId> {
        store
            .find(state)
            .filter(|&id| matches!(store.get_location(id), Location::Open(_)))
    }

    /// Inserts a node.
    pub fn push<S: UserState>(&mut self, store: &mut NodeStore<S>, id: NodeId) {
        let position = self.heap.len();
        self.heap.push(id);
        store[id].set_location(Location::Open(position));
        self.sift_up(store, position);
    }

    /// Removes and returns the node with the minimum `f`.
    pub fn pop<S: UserState>(&mut self, store: &mut NodeStore<S>) -> Option<NodeId> {
        if self.heap.is_empty() {
            return None;
        }

        Some(self.remove_at(store, 0))
    }

    /// Removes a node.
    ///
    /// # Panics
    ///
    /// Panics if the node is not in the open list.
    pub fn remove<S: UserState>(&mut self, store: &mut NodeStore<S>, id: NodeId) {
        let Location::Open(position) = store.get_location(id) else {
            panic!("node {} is not in the open list", id.0);
        };

        self.remove_at(store, position);
    }

    /// Restores the heap order after the `f` of a node decreased.
    ///
    /// # Panics
    ///
    /// Panics if the node is not in the open list.
    pub fn decrease_key<S: UserState>(&mut self, store: &mut NodeStore<S>, id: NodeId) {
        let Location::Open(position) = store.get_location(id) else {
            panic!("node {} is not in the open list", id.0);
        };

        self.sift_up(store, position);
    }

    /// Restores the heap order after arbitrary changes to the priorities of the nodes.
    pub fn rebuild<S: UserState>(&mut self, store: &mut NodeStore<S>) {
        for (position, &id) in self.heap.iter().enumerate() {
            store[id].set_location(Location::Open(position));
        }

        for position in (0..self.heap.len() / 2).rev() {
            self.sift_down(store, position);
        }
    }

    /// Removes all nodes and returns their ids.
    ///
    /// The nodes are marked as detached but stay in the store.
    pub fn drain<S: UserState>(&mut self, store: &mut NodeStore<S>) -> Vec<NodeId> {
        for &id in &self.heap {
            store[id].set_location(Location::Detached);
        }

        std::mem::take(&mut self.heap)
    }

    /// Removes all nodes without touching the store.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    fn remove_at<S: UserState>(&mut self, store: &mut NodeStore<S>, position: usize) -> NodeId {
        let last = self.heap.len() - 1;
        self.swap(store, position, last);
        let id = self.heap[last];
        self.heap.truncate(last);
        store[id].set_location(Location::Detached);

        if position < self.heap.len() {
            let position = self.sift_up(store, position);
            self.sift_down(store, position);
        }

        id
    }

    fn swap<S: UserState>(&mut self, store: &mut NodeStore<S>, i: usize, j: usize) {
        self.heap.swap(i, j);
        store[self.heap[i]].set_location(Location::Open(i));
        store[self.heap[j]].set_location(Location::Open(j));
    }

    fn sift_up<S: UserState>(&mut self, store: &mut NodeStore<S>, mut position: usize) -> usize {
        while position > 0 {
            let parent = (position - 1) / 2;

            if !store[self.heap[position]].is_higher_priority(&store[self.heap[parent]]) {
                break;
            }

            self.swap(store, position, parent);
            position = parent;
        }

        position
    }

    fn sift_down<S: UserState>(&mut self, store: &mut NodeStore<S>, mut position: usize) {
        loop {
            let left = 2 * position + 1;
            let right = left + 1;
            let mut best = position;

            if left < self.heap.len()
                && store[self.heap[left]].is_higher_priority(&store[self.heap[best]])
            {
                best = left;
            }

            if right < self.heap.len()
                && store[self.heap[right]].is_higher_priority(&store[self.heap[best]])
            {
                best = right;
            }

            if best == position {
                break;
            }

            self.swap(store, position, best);
            position = best;
        }
    }
}

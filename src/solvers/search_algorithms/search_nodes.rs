//! Search nodes for A* search.

mod closed_list;
mod node_store;
mod open_list;
mod solution_path;

pub use closed_list::ClosedList;
pub use node_store::NodeStore;
pub use open_list::OpenList;
pub use solution_path::SolutionPath;

/// Index of a node in a [`NodeStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// Container currently holding a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// In the open list at the given heap position.
    Open(usize),
    /// In the closed list at the given position.
    Closed(usize),
    /// In neither list: the node being expanded, or a node kept for the solution.
    Detached,
}

/// Node representing one explored state.
///
/// `parent` is the predecessor on the best known path and `child` is set only after the search succeeds,
/// linking the solution path from the start to the goal.
/// Both are indices into the node store and do not own the referenced nodes.
#[derive(Debug, Clone)]
pub struct Node<S, C> {
    state: S,
    g: C,
    h: C,
    f: C,
    parent: Option<NodeId>,
    child: Option<NodeId>,
    location: Location,
}

impl<S, C> Node<S, C>
where
    C: Copy + std::ops::Add<Output = C>,
{
    /// Creates a new node given the state, the path cost, the heuristic value, and the parent.
    pub fn new(state: S, g: C, h: C, parent: Option<NodeId>) -> Self {
        Self {
            state,
            g,
            h,
            f: g + h,
            parent,
            child: None,
            location: Location::Detached,
        }
    }

    /// Replaces the path to the node by a cheaper one.
    pub fn update(&mut self, g: C, h: C, parent: Option<NodeId>) {
        self.g = g;
        self.h = h;
        self.f = g + h;
        self.parent = parent;
    }
}

impl<S, C> Node<S, C> {
    /// Returns the state of the node.
    pub fn get_state(&self) -> &S {
        &self.state
    }

    /// Returns the cost of the best known path from the start.
    pub fn get_g(&self) -> C
    where
        C: Copy,
    {
        self.g
    }

    /// Returns the heuristic estimate of the remaining cost.
    pub fn get_h(&self) -> C
    where
        C: Copy,
    {
        self.h
    }

    /// Returns the priority of the node, `g + h`.
    pub fn get_f(&self) -> C
    where
        C: Copy,
    {
        self.f
    }

    /// Returns the predecessor on the best known path.
    pub fn get_parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns the successor on the solution path.
    pub fn get_child(&self) -> Option<NodeId> {
        self.child
    }

    /// Returns the container holding the node.
    pub fn get_location(&self) -> Location {
        self.location
    }

    pub(crate) fn set_child(&mut self, child: Option<NodeId>) {
        self.child = child;
    }

    pub(crate) fn set_location(&mut self, location: Location) {
        self.location = location;
    }

    /// Returns whether the node should be expanded before `other`.
    pub fn is_higher_priority(&self, other: &Self) -> bool
    where
        C: PartialOrd,
    {
        self.f < other.f
    }
}

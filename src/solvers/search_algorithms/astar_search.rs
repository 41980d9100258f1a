use super::search::{Search, SearchParameters, SearchStatus, Solution};
use super::search_nodes::{ClosedList, Location, Node, NodeId, NodeStore, OpenList, SolutionPath};
use super::successors::Successors;
use crate::state::UserState;
use crate::timer::Timer;
use num_traits::Zero;
use std::fmt::Display;

/// A* search over a user-defined state space.
///
/// The search keeps every node it creates in a [`NodeStore`]. A node is either in the open list,
/// in the closed list, or detached while it is expanded or kept for the solution.
/// There is never more than one node for the same state.
///
/// When a cheaper path to a known state is found, the existing node is updated in place:
/// an open node is moved up in the heap, and a closed node is reopened.
///
/// After success, only the nodes on the solution path stay alive.
/// They must be released with [`AStarSearch::free_solution_nodes`] before the search is reused.
/// A failed search releases all nodes by itself.
pub struct AStarSearch<S: UserState> {
    store: NodeStore<S>,
    open: OpenList,
    closed: ClosedList,
    successors: Successors<S>,
    goal_state: Option<S>,
    start: Option<NodeId>,
    goal: Option<NodeId>,
    status: SearchStatus,
    parameters: SearchParameters,
    solution: Solution<S::CostType>,
    timer: Timer,
}

impl<S> Default for AStarSearch<S>
where
    S: UserState,
    S::CostType: Display,
{
    fn default() -> Self {
        Self::new(SearchParameters::default())
    }
}

impl<S> AStarSearch<S>
where
    S: UserState,
    S::CostType: Display,
{
    /// Creates a new search engine.
    pub fn new(parameters: SearchParameters) -> Self {
        let capacity = parameters.initial_registry_capacity;

        Self {
            store: capacity.map(NodeStore::with_capacity).unwrap_or_default(),
            open: capacity.map(OpenList::with_capacity).unwrap_or_default(),
            closed: ClosedList::default(),
            successors: Successors::default(),
            goal_state: None,
            start: None,
            goal: None,
            status: SearchStatus::NotStarted,
            parameters,
            solution: Solution::default(),
            timer: Timer::default(),
        }
    }

    /// Starts a new search from `start` to `goal`.
    ///
    /// Returns `SearchStatus::OutOfMemory` if the node limit does not allow the start node.
    ///
    /// # Panics
    ///
    /// Panics if nodes of a previous search are still alive.
    pub fn set_start_and_goal_states(&mut self, start: S, goal: S) -> SearchStatus {
        assert!(
            self.store.is_empty(),
            "{} nodes of the previous search must be freed before starting a new search",
            self.store.len()
        );

        self.store.reset_counters();
        self.open.clear();
        self.closed.clear();
        self.start = None;
        self.goal = None;
        self.timer.reset();
        self.solution = Solution {
            status: SearchStatus::Searching,
            ..Default::default()
        };
        self.status = SearchStatus::Searching;

        if self.get_remaining_node_capacity() == Some(0) {
            self.goal_state = Some(goal);

            return self.finish(SearchStatus::OutOfMemory);
        }

        let h = start.goal_distance_estimate(&goal);
        let id = self.store.allocate(Node::new(start, Zero::zero(), h, None));
        self.open.push(&mut self.store, id);
        self.start = Some(id);
        self.goal_state = Some(goal);
        self.solution.generated = 1;

        self.status
    }

    /// Returns the status of the search.
    pub fn get_status(&self) -> SearchStatus {
        self.status
    }

    /// Returns the number of nodes taken from the open list so far.
    pub fn get_step_count(&self) -> usize {
        self.solution.steps
    }

    /// Returns the cost of the solution path, if found.
    pub fn get_solution_cost(&self) -> Option<S::CostType> {
        self.solution.cost
    }

    /// Returns the goal state of the current search.
    pub fn get_goal_state(&self) -> Option<&S> {
        self.goal_state.as_ref()
    }

    /// Returns the node with the given id, or `None` if it was released.
    pub fn get_node(&self, id: NodeId) -> Option<&Node<S, S::CostType>> {
        self.store.get(id)
    }

    /// Returns the solution path from the start to the goal.
    ///
    /// The iterator is empty unless the search succeeded and the solution nodes are not freed.
    /// Calling this again restarts from the start node.
    pub fn get_solution_path(&self) -> SolutionPath<'_, S> {
        SolutionPath::forward(&self.store, self.start.filter(|_| self.goal.is_some()))
    }

    /// Returns the solution path from the goal back to the start.
    pub fn get_solution_path_rev(&self) -> SolutionPath<'_, S> {
        SolutionPath::backward(&self.store, self.goal)
    }

    /// Returns the nodes in the open list, in heap order.
    pub fn get_open_list(&self) -> impl Iterator<Item = &Node<S, S::CostType>> + '_ {
        self.open.iter().map(|id| &self.store[id])
    }

    /// Returns the nodes in the closed list.
    pub fn get_closed_list(&self) -> impl Iterator<Item = &Node<S, S::CostType>> + '_ {
        self.closed.iter().map(|id| &self.store[id])
    }

    /// Returns the number of nodes allocated by the current search.
    pub fn get_allocated_node_count(&self) -> usize {
        self.store.get_allocated_count()
    }

    /// Returns the number of nodes released by the current search.
    pub fn get_released_node_count(&self) -> usize {
        self.store.get_released_count()
    }

    /// Returns the number of nodes alive.
    pub fn get_live_node_count(&self) -> usize {
        self.store.len()
    }

    /// Releases the nodes kept for the solution path.
    ///
    /// # Panics
    ///
    /// Panics if the search has not succeeded.
    pub fn free_solution_nodes(&mut self) {
        assert_eq!(
            self.status,
            SearchStatus::Succeeded,
            "solution nodes exist only after a successful search"
        );

        let mut current = self.start.take();

        while let Some(id) = current {
            current = self.store.release(id).get_child();
        }

        self.goal = None;
    }

    /// Releases every node, e.g., when a search is abandoned.
    ///
    /// A search in progress ends with `SearchStatus::Failed`.
    pub fn free_all_nodes(&mut self) {
        self.release_all_nodes();

        if self.status == SearchStatus::Searching {
            if !self.parameters.quiet {
                println!(
                    "Search abandoned, steps: {steps}.",
                    steps = self.solution.steps
                );
            }

            self.finish(SearchStatus::Failed);
        }
    }

    fn get_remaining_node_capacity(&self) -> Option<usize> {
        self.parameters
            .node_limit
            .map(|limit| limit.saturating_sub(self.store.len()))
    }

    fn finish(&mut self, status: SearchStatus) -> SearchStatus {
        self.status = status;
        self.solution.status = status;

        status
    }

    fn release_all_nodes(&mut self) {
        self.open.clear();
        self.closed.clear();
        self.store.release_all();
        self.successors.reset(None);
        self.start = None;
        self.goal = None;
    }

    fn expand_next(&mut self) -> SearchStatus {
        let Some(current) = self.open.pop(&mut self.store) else {
            self.release_all_nodes();

            if !self.parameters.quiet {
                println!(
                    "No path to the goal, steps: {steps}, generated: {generated}, elapsed time: {time}s.",
                    steps = self.solution.steps,
                    generated = self.solution.generated,
                    time = self.timer.get_elapsed_time()
                );
            }

            return self.finish(SearchStatus::Failed);
        };

        self.solution.steps += 1;

        let goal = self
            .goal_state
            .as_ref()
            .expect("the goal state is set while searching");

        if self.store[current].get_state().is_goal(goal) {
            return self.succeed(current);
        }

        let capacity = self.get_remaining_node_capacity();
        self.successors.reset(capacity);
        let node = &self.store[current];
        let parent = node.get_parent().map(|id| self.store[id].get_state());
        let enumerated = node.get_state().get_successors(parent, &mut self.successors);

        if !enumerated || self.successors.is_refused() {
            self.successors.reset(None);
            self.store.release(current);
            self.release_all_nodes();

            if !self.parameters.quiet {
                println!(
                    "Failed to generate successors, steps: {steps}, generated: {generated}.",
                    steps = self.solution.steps,
                    generated = self.solution.generated
                );
            }

            return self.finish(SearchStatus::OutOfMemory);
        }

        for successor in self.successors.take() {
            self.insert_successor(current, successor);
        }

        self.closed.push(&mut self.store, current);
        self.solution.expanded += 1;

        SearchStatus::Searching
    }

    fn insert_successor(&mut self, current: NodeId, successor: S) {
        let node = &self.store[current];
        let g = node.get_g() + node.get_state().get_cost(&successor);
        let goal = self
            .goal_state
            .as_ref()
            .expect("the goal state is set while searching");

        let Some(existing) = self.store.find(&successor) else {
            let h = successor.goal_distance_estimate(goal);
            let id = self
                .store
                .allocate(Node::new(successor, g, h, Some(current)));
            self.open.push(&mut self.store, id);
            self.solution.generated += 1;

            return;
        };

        // The existing path is as good or better.
        if self.store[existing].get_g() <= g {
            return;
        }

        let h = successor.goal_distance_estimate(goal);
        let location = self.store.get_location(existing);

        // The node being expanded cannot be its own parent.
        if location == Location::Detached {
            return;
        }

        self.store[existing].update(g, h, Some(current));

        match location {
            Location::Closed(_) => {
                self.closed.remove(&mut self.store, existing);
                self.open.push(&mut self.store, existing);
            }
            Location::Open(_) => self.open.decrease_key(&mut self.store, existing),
            Location::Detached => {}
        }
    }

    fn succeed(&mut self, goal: NodeId) -> SearchStatus {
        // When the start is the goal, the start node alone is the solution.
        if self.start != Some(goal) {
            let mut child = goal;

            while let Some(parent) = self.store[child].get_parent() {
                self.store[parent].set_child(Some(child));
                child = parent;
            }
        }

        self.goal = Some(goal);
        self.free_unused_nodes();

        let cost = self.store[goal].get_g();
        self.solution.cost = Some(cost);

        if !self.parameters.quiet {
            println!(
                "Solution found: cost {cost}, steps: {steps}, generated: {generated}, elapsed time: {time}s.",
                steps = self.solution.steps,
                generated = self.solution.generated,
                time = self.timer.get_elapsed_time()
            );
        }

        self.finish(SearchStatus::Succeeded)
    }

    fn free_unused_nodes(&mut self) {
        let open = self.open.drain(&mut self.store);
        let closed = self.closed.drain(&mut self.store);

        for id in open.into_iter().chain(closed) {
            if self.store[id].get_child().is_none() {
                self.store.release(id);
            }
        }
    }
}

impl<S> Search for AStarSearch<S>
where
    S: UserState,
    S::CostType: Display,
{
    type CostType = S::CostType;

    /// Advances the search by one step.
    ///
    /// # Panics
    ///
    /// Panics if the start and goal states were never set.
    fn search_step(&mut self) -> SearchStatus {
        assert_ne!(
            self.status,
            SearchStatus::NotStarted,
            "the start and goal states must be set before searching"
        );

        if self.status.is_terminal() {
            return self.status;
        }

        self.timer.start();
        let status = self.expand_next();
        self.timer.stop();
        self.solution.time = self.timer.get_elapsed_time();

        status
    }

    fn get_solution(&self) -> Solution<S::CostType> {
        self.solution.clone()
    }
}

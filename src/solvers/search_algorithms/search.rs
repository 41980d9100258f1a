/// Status of a search.
///
/// A search starts in `NotStarted`, moves to `Searching` when the start and goal states are set,
/// and ends in one of the terminal statuses.
/// Once a terminal status is reached, stepping the search returns it again without doing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStatus {
    /// The start and goal states are not set.
    #[default]
    NotStarted,
    /// The search is in progress.
    Searching,
    /// A path to the goal was found.
    Succeeded,
    /// The open list became empty, or the search was abandoned.
    Failed,
    /// Successor generation or node allocation could not proceed.
    OutOfMemory,
}

impl SearchStatus {
    /// Returns whether the status is terminal.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed | Self::OutOfMemory)
    }
}

/// Search parameters.
#[derive(Debug, Clone, Default)]
pub struct SearchParameters {
    /// Whether to suppress output.
    pub quiet: bool,
    /// Initial capacity of the node store and the open list.
    pub initial_registry_capacity: Option<usize>,
    /// Maximum number of nodes alive at the same time.
    pub node_limit: Option<usize>,
}

/// Solution information.
#[derive(Clone, PartialEq, Debug)]
pub struct Solution<C> {
    /// Status of the search.
    pub status: SearchStatus,
    /// Cost of the path found.
    pub cost: Option<C>,
    /// Number of nodes taken from the open list.
    pub steps: usize,
    /// Number of nodes expanded.
    pub expanded: usize,
    /// Number of nodes generated.
    pub generated: usize,
    /// Elapsed time in seconds.
    pub time: f64,
}

impl<C> Default for Solution<C> {
    fn default() -> Self {
        Self {
            status: SearchStatus::NotStarted,
            cost: None,
            steps: 0,
            expanded: 0,
            generated: 0,
            time: 0.0,
        }
    }
}

/// Search trait.
pub trait Search {
    type CostType;

    /// Advances the search by one step and returns the status.
    fn search_step(&mut self) -> SearchStatus;

    /// Returns the solution information of the current search.
    fn get_solution(&self) -> Solution<Self::CostType>;

    /// Performs search until termination.
    fn search(&mut self) -> Solution<Self::CostType> {
        while !self.search_step().is_terminal() {}

        self.get_solution()
    }
}

use smallvec::SmallVec;

/// Buffer collecting the successors generated by [`crate::UserState::get_successors`].
///
/// A limit on the number of states can be set to model running out of node memory.
/// Once the limit is reached, `add` refuses further states.
#[derive(Debug)]
pub struct Successors<S> {
    states: SmallVec<[S; 4]>,
    limit: Option<usize>,
    refused: bool,
}

impl<S> Default for Successors<S> {
    fn default() -> Self {
        Self {
            states: SmallVec::new(),
            limit: None,
            refused: false,
        }
    }
}

impl<S> Successors<S> {
    /// Adds a successor.
    ///
    /// Returns `false` if the state is refused because the limit is reached.
    pub fn add(&mut self, state: S) -> bool {
        if self.limit.is_some_and(|limit| self.states.len() >= limit) {
            self.refused = true;

            return false;
        }

        self.states.push(state);

        true
    }

    /// Returns whether a state was refused.
    pub fn is_refused(&self) -> bool {
        self.refused
    }

    /// Empties the buffer and sets a new limit.
    pub(crate) fn reset(&mut self, limit: Option<usize>) {
        self.states.clear();
        self.limit = limit;
        self.refused = false;
    }

    /// Takes the successors out of the buffer.
    pub(crate) fn take(&mut self) -> SmallVec<[S; 4]> {
        std::mem::take(&mut self.states)
    }
}

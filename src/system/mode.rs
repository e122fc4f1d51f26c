//! Continuous sub-systems attached to the states of a hybrid system.

use serde::{Deserialize, Serialize};

/// Continuous dynamics of one discrete state, seen from the outside.
///
/// The hybrid system never looks inside a mode; it only forwards these
/// queries so analyses can size their state and input spaces per state.
pub trait Mode {
    type StateSet;
    type InputSet;

    /// Dimension of the continuous state space.
    fn statedim(&self) -> usize;

    /// Set of allowed continuous states (the domain, or invariant).
    fn stateset(&self) -> &Self::StateSet;

    /// Dimension of the input space; zero for autonomous dynamics.
    fn inputdim(&self) -> usize;

    fn inputset(&self) -> &Self::InputSet;
}

/// Mode described only by its spaces.
///
/// # Example
///
/// ```rust
/// use hybrid_automata::system::{ContinuousMode, Mode};
///
/// // Two-dimensional box domain, scalar input in [-1, 1].
/// let mode = ContinuousMode::new(2, [(0.0, 1.0), (0.0, 5.0)], 1, (-1.0, 1.0));
/// assert_eq!(mode.statedim(), 2);
/// assert_eq!(mode.inputset().1, 1.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContinuousMode<S, U = ()> {
    pub statedim: usize,
    pub stateset: S,
    pub inputdim: usize,
    pub inputset: U,
}

impl<S, U> ContinuousMode<S, U> {
    pub fn new(statedim: usize, stateset: S, inputdim: usize, inputset: U) -> Self {
        Self {
            statedim,
            stateset,
            inputdim,
            inputset,
        }
    }
}

impl<S> ContinuousMode<S> {
    /// Mode without inputs.
    pub fn autonomous(statedim: usize, stateset: S) -> Self {
        Self::new(statedim, stateset, 0, ())
    }
}

impl<S, U> Mode for ContinuousMode<S, U> {
    type StateSet = S;
    type InputSet = U;

    fn statedim(&self) -> usize {
        self.statedim
    }

    fn stateset(&self) -> &S {
        &self.stateset
    }

    fn inputdim(&self) -> usize {
        self.inputdim
    }

    fn inputset(&self) -> &U {
        &self.inputset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn autonomous_mode_has_no_inputs() {
        let mode = ContinuousMode::autonomous(3, "x >= 0");

        assert_eq!(mode.statedim(), 3);
        assert_eq!(*mode.stateset(), "x >= 0");
        assert_eq!(mode.inputdim(), 0);
        assert_eq!(mode.inputset(), &());
    }

    #[test]
    fn serializes_every_space() {
        let mode = ContinuousMode::new(1, 4u8, 2, 7u8);
        let json = serde_json::to_string(&mode).unwrap();
        assert_eq!(
            json,
            r#"{"statedim":1,"stateset":4,"inputdim":2,"inputset":7}"#
        );
    }
}

//! Builder for constructing hybrid systems.

use crate::builder::error::BuildError;
use crate::core::Automaton;
use crate::switching::Switching;
use crate::system::HybridSystem;

/// Builder for a [`HybridSystem`] with a fluent API.
///
/// Modes are matched with the automaton's states in ascending id order, reset
/// maps and switchings with its transitions in ascending id order.
#[derive(Clone, Debug)]
pub struct HybridSystemBuilder<A, M, R, W = Switching, X = ()> {
    automaton: Option<A>,
    modes: Vec<M>,
    resetmaps: Vec<R>,
    switchings: Vec<W>,
    ext: X,
}

impl<A, M, R, W> HybridSystemBuilder<A, M, R, W> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            automaton: None,
            modes: Vec::new(),
            resetmaps: Vec::new(),
            switchings: Vec::new(),
            ext: (),
        }
    }
}

impl<A, M, R, W> Default for HybridSystemBuilder<A, M, R, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Automaton, M, R, W, X> HybridSystemBuilder<A, M, R, W, X> {
    /// Set the underlying automaton (required).
    pub fn automaton(mut self, automaton: A) -> Self {
        self.automaton = Some(automaton);
        self
    }

    /// Append the mode of the next state.
    pub fn mode(mut self, mode: M) -> Self {
        self.modes.push(mode);
        self
    }

    /// Append several modes at once.
    pub fn modes(mut self, modes: impl IntoIterator<Item = M>) -> Self {
        self.modes.extend(modes);
        self
    }

    /// Append the reset map of the next transition.
    pub fn resetmap(mut self, resetmap: R) -> Self {
        self.resetmaps.push(resetmap);
        self
    }

    pub fn resetmaps(mut self, resetmaps: impl IntoIterator<Item = R>) -> Self {
        self.resetmaps.extend(resetmaps);
        self
    }

    /// Append the switching nature of the next transition.
    pub fn switching(mut self, switching: W) -> Self {
        self.switchings.push(switching);
        self
    }

    pub fn switchings(mut self, switchings: impl IntoIterator<Item = W>) -> Self {
        self.switchings.extend(switchings);
        self
    }

    /// Append the reset map and switching nature of the next transition.
    pub fn jump(self, resetmap: R, switching: W) -> Self {
        self.resetmap(resetmap).switching(switching)
    }

    /// Attach an extension payload.
    pub fn ext<Y>(self, ext: Y) -> HybridSystemBuilder<A, M, R, W, Y> {
        HybridSystemBuilder {
            automaton: self.automaton,
            modes: self.modes,
            resetmaps: self.resetmaps,
            switchings: self.switchings,
            ext,
        }
    }

    /// Build the hybrid system.
    /// Returns an error if the automaton is missing or a table has the wrong size.
    pub fn build(self) -> Result<HybridSystem<A, M, R, W, X>, BuildError> {
        let automaton = self.automaton.ok_or(BuildError::MissingAutomaton)?;
        let system = HybridSystem::new(automaton, self.modes, self.resetmaps, self.switchings)?;

        Ok(system.with_ext(self.ext))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::AutomatonBuilder;
    use crate::core::{AutomatonError, GraphAutomaton, StateId, Table, TransitionId};

    fn two_state() -> GraphAutomaton {
        AutomatonBuilder::new()
            .states(2)
            .transition(1, 2, 1)
            .transition(2, 1, 1)
            .build()
            .unwrap()
    }

    #[test]
    fn builder_requires_automaton() {
        let result = HybridSystemBuilder::<GraphAutomaton, (), ()>::new().build();

        assert!(matches!(result, Err(BuildError::MissingAutomaton)));
    }

    #[test]
    fn fluent_api_builds_system() {
        let system = HybridSystemBuilder::new()
            .automaton(two_state())
            .mode("flow")
            .mode("jump")
            .jump(10, Switching::Autonomous)
            .jump(20, Switching::Controlled)
            .build()
            .unwrap();

        assert_eq!(system.mode(StateId::new(2)), Ok(&"jump"));
        assert_eq!(system.resetmap(TransitionId::new(2)), Ok(&20));
        assert_eq!(
            system.switching(TransitionId::new(1)),
            Ok(&Switching::Autonomous)
        );
    }

    #[test]
    fn size_errors_surface_as_build_errors() {
        let result = HybridSystemBuilder::<_, &str, u8>::new()
            .automaton(two_state())
            .modes(["flow"])
            .resetmaps([1, 2])
            .switchings([Switching::Autonomous; 2])
            .build();

        match result {
            Err(BuildError::Automaton(AutomatonError::SizeMismatch { mismatches })) => {
                assert_eq!(mismatches.len(), 1);
                assert_eq!(mismatches[0].table, Table::Modes);
            }
            other => panic!("Expected a size mismatch, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn ext_changes_the_payload_type() {
        let system = HybridSystemBuilder::<_, u8, u8>::new()
            .automaton(two_state())
            .modes([0, 1])
            .resetmaps([0, 0])
            .switchings([Switching::Autonomous; 2])
            .ext(("sample time", 0.5))
            .build()
            .unwrap();

        assert_eq!(system.ext().1, 0.5);
    }
}

//! Reset maps and the guards and assignments they carry.

use serde::{Deserialize, Serialize};

/// Data attached to a transition: the guard enabling it and the assignment
/// applied to the continuous state when it fires.
///
/// The hybrid system stores one reset map per transition and reads the guard
/// and the assignment through this trait; their types are opaque to it.
pub trait ResetMap {
    type Guard;
    type Assignment;

    fn guard(&self) -> &Self::Guard;

    fn assignment(&self) -> &Self::Assignment;
}

/// Plain pairing of a guard with an assignment.
///
/// # Example
///
/// ```rust
/// use hybrid_automata::system::{Guard, GuardedReset, ResetMap};
///
/// // x ≥ 1 enables the jump, which halves x.
/// let reset = GuardedReset::new(
///     Guard::new(|x: &f64| *x >= 1.0),
///     |x: f64| x / 2.0,
/// );
/// assert!(reset.guard().check(&1.5));
/// assert_eq!((reset.assignment())(3.0), 1.5);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardedReset<G, F> {
    pub guard: G,
    pub assignment: F,
}

impl<G, F> GuardedReset<G, F> {
    pub fn new(guard: G, assignment: F) -> Self {
        Self { guard, assignment }
    }
}

impl<G, F> ResetMap for GuardedReset<G, F> {
    type Guard = G;
    type Assignment = F;

    fn guard(&self) -> &G {
        &self.guard
    }

    fn assignment(&self) -> &F {
        &self.assignment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exposes_both_parts() {
        let reset = GuardedReset::new("x > 0", [[1.0, 0.0], [0.0, 2.0]]);

        assert_eq!(*reset.guard(), "x > 0");
        assert_eq!(reset.assignment()[1][1], 2.0);
    }

    #[test]
    fn serializes_as_a_pair_of_fields() {
        let reset = GuardedReset::new(1u8, vec![2u8]);
        let json = serde_json::to_string(&reset).unwrap();
        assert_eq!(json, r#"{"guard":1,"assignment":[2]}"#);
    }
}

//! Guard predicates over the continuous state.
//!
//! A guard decides whether a transition is enabled for a given continuous
//! state. The automaton never evaluates guards itself; they are stored with
//! the reset map of each transition and handed back to analyses.

use std::fmt;
use std::sync::Arc;

/// Pure predicate on a continuous state of type `X`.
///
/// # Example
///
/// ```rust
/// use hybrid_automata::system::Guard;
///
/// // Enabled once the temperature reaches 22 degrees.
/// let too_warm = Guard::new(|x: &[f64]| x[0] >= 22.0);
///
/// assert!(too_warm.check(&[23.5]));
/// assert!(!too_warm.check(&[18.0]));
/// ```
pub struct Guard<X: ?Sized> {
    predicate: Arc<dyn Fn(&X) -> bool + Send + Sync>,
}

impl<X: ?Sized + 'static> Guard<X> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&X) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
        }
    }

    /// Guard that is always enabled.
    pub fn always() -> Self {
        Self::new(|_| true)
    }

    /// Guard that is never enabled.
    pub fn never() -> Self {
        Self::new(|_| false)
    }

    /// Evaluate the guard at `state`.
    pub fn check(&self, state: &X) -> bool {
        (self.predicate)(state)
    }

    /// Conjunction of two guards.
    pub fn and(&self, other: &Self) -> Self {
        let (left, right) = (self.clone(), other.clone());
        Self::new(move |x| left.check(x) && right.check(x))
    }
}

impl<X: ?Sized> Clone for Guard<X> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<X: ?Sized> fmt::Debug for Guard<X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_is_deterministic() {
        let guard = Guard::new(|x: &f64| *x > 0.0);

        assert_eq!(guard.check(&1.0), guard.check(&1.0));
        assert!(!guard.check(&-1.0));
    }

    #[test]
    fn constant_guards() {
        assert!(Guard::<f64>::always().check(&0.0));
        assert!(!Guard::<f64>::never().check(&0.0));
    }

    #[test]
    fn conjunction_requires_both() {
        let above = Guard::new(|x: &[f64]| x[0] > 0.0);
        let below = Guard::new(|x: &[f64]| x[0] < 10.0);
        let inside = above.and(&below);

        assert!(inside.check(&[5.0]));
        assert!(!inside.check(&[-1.0]));
        assert!(!inside.check(&[11.0]));
    }

    #[test]
    fn clones_share_the_predicate() {
        let guard = Guard::new(|x: &i32| *x % 2 == 0);
        let copy = guard.clone();

        assert!(copy.check(&4));
        assert!(!copy.check(&3));
    }
}

//! Macros for ergonomic automaton construction.

/// Build a [`GraphAutomaton`](crate::core::GraphAutomaton) from a literal
/// description.
///
/// Expands to an [`AutomatonBuilder`](crate::builder::AutomatonBuilder) chain
/// and evaluates to `Result<GraphAutomaton, BuildError>`.
///
/// # Example
///
/// ```
/// use hybrid_automata::automaton;
///
/// let a = automaton! {
///     states: 2,
///     transitions: [
///         1 => 1 : 1,
///         2 => 2 : 1,
///         1 => 2 : 2,
///         2 => 1 : 3,
///     ]
/// }
/// .unwrap();
///
/// assert_eq!(a.ntransitions(), 4);
/// ```
#[macro_export]
macro_rules! automaton {
    (
        states: $n:expr
        $(, config: $config:expr)?
        $(, transitions: [$($q:literal => $r:literal : $sigma:expr),* $(,)?])?
        $(,)?
    ) => {
        $crate::builder::AutomatonBuilder::new()
            .states($n)
            $(.config($config))?
            $($(.transition($q as u32, $r as u32, $sigma))*)?
            .build()
    };
}

//! Nature of the switching signal attached to a transition.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Who decides when a transition fires.
///
/// See Liberzon, *Switching in Systems and Control*, section 1.1.3.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Switching {
    /// The switching signal is autonomous: the transition fires on its own
    /// once its guard holds.
    #[default]
    Autonomous,

    /// The switching signal is controlled: the transition is a decision.
    Controlled,
}

impl fmt::Display for Switching {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Autonomous => "autonomous",
            Self::Controlled => "controlled",
        })
    }
}

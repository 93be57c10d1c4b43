//! Change observation for host-supplied option lists.
//!
//! Each watched list is observed in one of two modes, chosen at construction:
//!
//! - [`WatchMode::Reference`]: a change is reported when the host swaps in a
//!   different list handle (or sets/clears it). In-place edits of the same
//!   handle go unnoticed.
//! - [`WatchMode::Collection`]: a change is reported when the contents differ
//!   from the last observation, regardless of which handle holds them.

use serde::{Deserialize, Serialize};

use crate::options::OptionList;

/// How a watched option list is compared between observations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WatchMode {
    /// Compare list handles by identity.
    #[default]
    Reference,
    /// Compare list contents.
    Collection,
}

/// What a watcher remembers from its last observation.
#[derive(Debug, Clone)]
enum Observed {
    Nothing,
    Handle(Option<OptionList>),
    Contents(Vec<String>),
}

/// Watches one optional option list for changes.
#[derive(Debug, Clone)]
pub struct OptionsWatch {
    mode: WatchMode,
    last: Observed,
}

impl OptionsWatch {
    /// Create a watcher. The first [`check`](Self::check) always reports a change.
    pub fn new(mode: WatchMode) -> Self {
        Self {
            mode,
            last: Observed::Nothing,
        }
    }

    /// The comparison mode of this watcher.
    pub fn mode(&self) -> WatchMode {
        self.mode
    }

    /// Observe `current` and report whether it changed since the last check.
    pub fn check(&mut self, current: Option<&OptionList>) -> bool {
        let changed = match (&self.last, self.mode) {
            (Observed::Nothing, _) => true,
            (Observed::Handle(previous), WatchMode::Reference) => {
                match (previous, current) {
                    (Some(a), Some(b)) => !a.ptr_eq(b),
                    (None, None) => false,
                    _ => true,
                }
            }
            (Observed::Contents(previous), WatchMode::Collection) => {
                let empty: &[String] = &[];
                match current {
                    Some(list) => list.with(|items| items != previous.as_slice()),
                    None => previous.as_slice() != empty,
                }
            }
            _ => true,
        };

        if changed {
            self.last = match self.mode {
                WatchMode::Reference => Observed::Handle(current.cloned()),
                WatchMode::Collection => {
                    Observed::Contents(current.map(OptionList::snapshot).unwrap_or_default())
                }
            };
        }
        changed
    }
}

//! Component state for the booking console.

use common::api::ApiConfig;
use common::workflow::ConsoleState;

use crate::api::HttpBookingApi;

/// Main state container for the `ConsoleComponent`.
///
/// Fields are `pub` because they are accessed by `view`, `update` and the
/// dialog builders.
pub struct ConsoleComponent {
    /// Collections, drafts, pending operations, notification and open dialog.
    pub console: ConsoleState,

    /// Transport handed to every spawned backend call.
    pub api: HttpBookingApi,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,
}

impl ConsoleComponent {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            console: ConsoleState::new(),
            api: HttpBookingApi::new(config),
            loaded: false,
        }
    }
}

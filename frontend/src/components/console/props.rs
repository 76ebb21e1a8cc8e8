//! Defines the properties for the `ConsoleComponent`.

use common::api::ApiConfig;
use yew::prelude::*;

/// Properties for the `ConsoleComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct ConsoleProps {
    /// Backend the console talks to. Defaults to the fixed booking host;
    /// read once when the component is created.
    #[prop_or_default]
    pub api_config: ApiConfig,
}

//! Booking console: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, dialogs and
//! helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `ConsoleProps`, `ConsoleComponent`).
//! - Provide the `Component` implementation that delegates to `update::update`
//!   and `view::view`.
//! - On first render, load the three collections from the backend.

use common::workflow::Action;
use yew::prelude::*;

mod dialogs;
mod helpers;
mod messages;
mod props;
mod state;
mod tables;
mod update;
mod view;

pub use messages::Msg;
pub use props::ConsoleProps;
pub use state::ConsoleComponent;

impl Component for ConsoleComponent {
    type Message = Msg;
    type Properties = ConsoleProps;

    fn create(ctx: &Context<Self>) -> Self {
        ConsoleComponent::new(ctx.props().api_config.clone())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message(Msg::Console(Action::RefreshAll));
        }
    }
}

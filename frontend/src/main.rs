use crate::app::App;

mod api;
mod app;
mod components;
mod tops_sheet;

fn main() {
    let _ = console_log::init_with_level(log::Level::Debug);
    yew::Renderer::<App>::new().render();
}

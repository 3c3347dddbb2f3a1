use crate::app::App;

mod app;
mod components;
mod config;
mod logging;

fn main() {
    logging::init();
    yew::Renderer::<App>::new().render();
}

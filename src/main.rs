mod bridge;
mod components;
mod config;
mod model;
mod scan;
mod state;
mod util;

use components::App;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("zoom viewer starting");
    yew::Renderer::<App>::new().render();
}

use spacex_launches::components::App;
use spacex_launches::config::CONFIG;

fn main() {
    spacex_launches::init_logging();
    log::info!("🚀 SpaceX launches {} starting...", CONFIG.launch_year);

    yew::Renderer::<App>::new().render();
}

pub mod app;
pub mod home_page;
pub mod launch_card;
pub mod launch_modal;
pub mod overlay;

pub use app::App;
pub use home_page::HomePage;
pub use launch_card::LaunchCard;
pub use launch_modal::LaunchModal;
pub use overlay::Overlay;

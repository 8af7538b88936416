pub mod use_launches;
pub mod use_patch_image;

pub use use_launches::{use_launches, UseLaunchesHandle};
pub use use_patch_image::{use_patch_image, UsePatchImageHandle};

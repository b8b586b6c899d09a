pub mod avatar;
pub mod text_source;
pub mod timing;

pub use avatar::{AvatarLinkGenerator, DiceBearAvatarLinks};
pub use text_source::{PetnameTextSource, RaceTextSource, StaticTextSource};
pub use timing::{compute_race_duration, AVERAGE_WPM};

pub mod settings;

pub use settings::{OutputSettings, Settings, TogglSettings};

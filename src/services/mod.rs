/// Display and audio adapter for session outcomes.
pub mod presenter;
/// Start-menu preferences.
pub mod settings;

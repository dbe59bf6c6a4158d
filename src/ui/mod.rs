pub mod app;
pub mod choices_panel;
pub mod options_panel;
pub mod settings;
pub mod settings_io;
pub mod status_panel;
pub mod story_panel;

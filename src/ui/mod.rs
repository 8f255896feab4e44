// ui/mod.rs - User Interface Components
//
// The tray icon is the whole user interface.

mod tray;

pub use tray::EyesTray;

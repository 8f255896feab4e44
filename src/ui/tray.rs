// ui/tray.rs - System Tray Icon Implementation
//
// Registers the eyes icon with a one-item context menu and publishes each
// rendered frame as the new icon image.

use anyhow::{Context, Result};
use log::{error, info};
use tray_icon::{
    menu::{Menu, MenuEvent, MenuItem},
    Icon, TrayIcon, TrayIconBuilder,
};
use winit::event_loop::EventLoopProxy;

use crate::app::UserEvent;
use crate::canvas::Canvas;
use crate::error::RenderError;
use crate::render::IconSurface;

const TOOLTIP: &str = "Googly Eyes";

/// System tray icon showing the eyes
pub struct EyesTray {
    /// The tray icon; dropping it removes the icon
    tray_icon: TrayIcon,
    /// Exit menu item, kept alive with the menu
    _exit: MenuItem,
}

impl EyesTray {
    /// Register the tray icon. Choosing "Exit" posts `UserEvent::Exit` through
    /// `event_proxy`.
    pub fn new(event_proxy: EventLoopProxy<UserEvent>, size: u32) -> Result<Self> {
        info!("Initializing system tray icon");

        let exit = MenuItem::new("Exit", true, None);
        let menu = Menu::new();
        menu.append(&exit).context("Failed to build tray menu")?;

        let exit_id = exit.id().clone();
        MenuEvent::set_event_handler(Some(move |event: MenuEvent| {
            if event.id == exit_id {
                if let Err(e) = event_proxy.send_event(UserEvent::Exit) {
                    error!("Failed to send tray event: {}", e);
                }
            }
        }));

        let placeholder = Canvas::new(size);
        let tray_icon = TrayIconBuilder::new()
            .with_menu(Box::new(menu))
            .with_tooltip(TOOLTIP)
            .with_icon(to_icon(&placeholder).context("Failed to create placeholder icon")?)
            .build()
            .context("Failed to register tray icon")?;

        info!("System tray icon initialized successfully");
        Ok(Self { tray_icon, _exit: exit })
    }
}

impl IconSurface for EyesTray {
    fn publish(&mut self, canvas: &Canvas) -> Result<(), RenderError> {
        let icon = to_icon(canvas).map_err(|e| RenderError::Publish(e.to_string()))?;
        self.tray_icon
            .set_icon(Some(icon))
            .map_err(|e| RenderError::Publish(e.to_string()))
    }
}

/// Copy a canvas into a tray icon
fn to_icon(canvas: &Canvas) -> Result<Icon, tray_icon::BadIcon> {
    let size = canvas.size();
    Icon::from_rgba(canvas.as_raw().to_vec(), size, size)
}

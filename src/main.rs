// main.rs - Googly Eyes Application Entry Point
//
// Owns the main thread's event loop. The loop sleeps until the next tick's
// deadline, runs one render-loop tick, and schedules the next one. The tray's
// "Exit" item ends the loop immediately.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::time::Instant;

use anyhow::{Context, Result};
use log::{error, info, warn};
use winit::application::ApplicationHandler;
use winit::event::{StartCause, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop, EventLoopProxy};
use winit::window::WindowId;

use googly_eyes::appearance::CommandProbe;
use googly_eyes::config::Config;
use googly_eyes::constants::anchor::{FALLBACK_SCREEN_HEIGHT, FALLBACK_SCREEN_WIDTH};
use googly_eyes::constants::geometry::{BASE_IMAGE_SIZE, BASE_PUPIL_SIZE};
use googly_eyes::platform::{self, SystemCursor};
use googly_eyes::ui::EyesTray;
use googly_eyes::{EyeRenderer, Layout, RenderLoop, UserEvent};

type TrayLoop = RenderLoop<SystemCursor, CommandProbe, EyesTray>;

/// Main application state
struct GooglyEyesApp {
    config: Config,

    /// Handed to the tray so its menu can reach the loop
    event_proxy: EventLoopProxy<UserEvent>,

    /// Created once the event loop is running (tray icons need a live loop)
    render_loop: Option<TrayLoop>,

    /// When the next tick is due
    next_tick: Instant,
}

impl GooglyEyesApp {
    fn new(config: Config, event_proxy: EventLoopProxy<UserEvent>) -> Self {
        Self {
            config,
            event_proxy,
            render_loop: None,
            next_tick: Instant::now(),
        }
    }

    /// Compute the layout, register the tray, and build the render loop
    fn start(&mut self) -> Result<()> {
        let layout = Layout::new(BASE_IMAGE_SIZE, BASE_PUPIL_SIZE, self.config.scale);

        let (screen_width, screen_height) = platform::primary_screen_size(self.config.probe_timeout)
            .unwrap_or_else(|e| {
                warn!(
                    "Could not read screen size ({}), assuming {}x{}",
                    e, FALLBACK_SCREEN_WIDTH, FALLBACK_SCREEN_HEIGHT
                );
                (FALLBACK_SCREEN_WIDTH, FALLBACK_SCREEN_HEIGHT)
            });
        info!("Primary screen is {}x{}", screen_width, screen_height);

        let references = self.config.anchor.references(screen_width);
        let renderer = EyeRenderer::new(layout, references);
        let tray = EyesTray::new(self.event_proxy.clone(), layout.image_size)?;

        self.render_loop = Some(RenderLoop::new(
            renderer,
            SystemCursor::new(self.config.probe_timeout),
            platform::appearance_probe(self.config.probe_timeout),
            tray,
            self.config.check_mode_interval,
        ));
        self.next_tick = Instant::now();
        Ok(())
    }
}

impl ApplicationHandler<UserEvent> for GooglyEyesApp {
    fn new_events(&mut self, event_loop: &ActiveEventLoop, cause: StartCause) {
        if matches!(cause, StartCause::Init) {
            if let Err(e) = self.start() {
                error!("Failed to start: {:#}", e);
                event_loop.exit();
            }
        }
    }

    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {}

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _window_id: WindowId, _event: WindowEvent) {}

    fn user_event(&mut self, event_loop: &ActiveEventLoop, event: UserEvent) {
        match event {
            UserEvent::Exit => {
                info!("Exit requested from tray");
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        #[cfg(target_os = "linux")]
        while gtk::events_pending() {
            gtk::main_iteration_do(false);
        }

        let Some(render_loop) = self.render_loop.as_mut() else {
            return;
        };

        let now = Instant::now();
        if now >= self.next_tick {
            render_loop.tick(now);
            // measured from the end of the tick so ticks are never closer than the interval
            self.next_tick = Instant::now() + self.config.interval;
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_tick));
    }
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_args(std::env::args());
    info!("Googly Eyes starting, refreshing every {:?}", config.interval);

    #[cfg(target_os = "linux")]
    gtk::init().context("Failed to initialize GTK")?;

    // Create event loop with UserEvent support
    let mut builder = EventLoop::<UserEvent>::with_user_event();
    #[cfg(target_os = "macos")]
    {
        // Tray-only app: no Dock icon, no app menu
        use winit::platform::macos::{ActivationPolicy, EventLoopBuilderExtMacOS};
        builder.with_activation_policy(ActivationPolicy::Accessory);
    }
    let event_loop = builder.build().context("Failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Wait);

    // Create event proxy before creating app
    let event_proxy = event_loop.create_proxy();

    let mut app = GooglyEyesApp::new(config, event_proxy);
    event_loop.run_app(&mut app).context("Event loop error")?;

    if let Some(render_loop) = &app.render_loop {
        let ctx = render_loop.context();
        info!(
            "Googly Eyes exited after {:?}: {} frames drawn, {} skipped",
            ctx.elapsed(),
            ctx.frames_rendered,
            ctx.frames_skipped
        );
    }
    Ok(())
}

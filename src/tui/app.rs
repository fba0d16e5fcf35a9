//! Main TUI application state and logic
//!
//! [`App`] owns the screen and every panel on it. It runs the input loop,
//! intercepts the global keys (resize, help, disconnect) and feeds the rest
//! to the [`Navigator`]. Launching a command hands the terminal to the
//! child process for the duration of the run.

use std::time::{Duration, Instant};

use ratatui::layout::Size;

use crate::core::launcher::{Launcher, SystemLauncher};
use crate::error::{Result, TimedialError};
use crate::menu::Command;
use crate::tui::event::{is_help_key, is_quit_key, AppEvent, EventSource, TerminalEvents};
use crate::tui::layout;
use crate::tui::navigator::{NavKey, Navigator, Transition};
use crate::tui::region::Panel;
use crate::tui::status::{ClockStatus, StatusSource, StatusTicker};
use crate::tui::surface::Surface;
use crate::tui::terminal::{RawTerminal, TerminalMode};
use crate::tui::theme::Theme;
use crate::tui::widgets::{wrap, Footer, Header, TextBox};

/// Longest the input loop blocks without checking the status timer
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Default footer status refresh interval
pub const STATUS_INTERVAL: Duration = Duration::from_secs(30);

/// Shown instead of the interface while the terminal is below the minimum size
pub const TOO_SMALL: &str = "Terminal too small";

const HEADER_TITLE: &str = "TimeDial.org";

/// Banner shown at start and as the help screen
pub const WELCOME: &[&str] = &[
    r" _____ _                ____  _       _ ",
    r"|_   _(_)_ __ ___   ___|  _ \(_) __ _| |",
    r"  | | | | '_ ` _ \ / _ \ | | | |/ _` | |",
    r"  | | | | | | | | |  __/ |_| | | (_| | |",
    r"  |_| |_|_| |_| |_|\___|____/|_|\__,_|_|",
    "",
    "Travel through time with our collection",
    "of apps, shells, games, and simulators.",
    "",
    "----------------------------------------",
    "",
    "   - Use ARROW KEYS to move",
    "   - Press ENTER to select",
    "   - Press F1 for help",
    "",
    "----------------------------------------",
    "",
    "     Enjoy your trip through time!",
];

/// Main application state
pub struct App<S: Surface> {
    /// Whether the app is running
    running: bool,
    surface: S,
    terminal: Box<dyn TerminalMode>,
    events: Box<dyn EventSource>,
    launcher: Box<dyn Launcher>,
    status: Box<dyn StatusSource>,
    ticker: StatusTicker,
    header: Header,
    footer: Footer,
    navigator: Navigator,
    /// Welcome/help/error box covering the menu until a key is pressed
    overlay: Option<TextBox>,
    size: Size,
}

impl<S: Surface> App<S> {
    /// Create an app drawing to `surface`; `term` is shown in the footer
    pub fn new(surface: S, navigator: Navigator, term: impl Into<String>) -> Self {
        Self {
            running: true,
            surface,
            terminal: Box::new(RawTerminal::new()),
            events: Box::new(TerminalEvents),
            launcher: Box::new(SystemLauncher),
            status: Box::new(ClockStatus),
            ticker: StatusTicker::new(STATUS_INTERVAL),
            header: Header::new(HEADER_TITLE),
            footer: Footer::new(term),
            navigator,
            overlay: None,
            size: Size::default(),
        }
    }

    pub fn with_terminal(mut self, terminal: impl TerminalMode + 'static) -> Self {
        self.terminal = Box::new(terminal);
        self
    }

    pub fn with_events(mut self, events: impl EventSource + 'static) -> Self {
        self.events = Box::new(events);
        self
    }

    pub fn with_launcher(mut self, launcher: impl Launcher + 'static) -> Self {
        self.launcher = Box::new(launcher);
        self
    }

    /// Replace the footer status source and its refresh interval
    pub fn with_status(mut self, status: impl StatusSource + 'static, interval: Duration) -> Self {
        self.status = Box::new(status);
        self.ticker = StatusTicker::new(interval);
        self
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn footer(&self) -> &Footer {
        &self.footer
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Title of the box currently covering the menu, if any
    pub fn overlay_title(&self) -> Option<&str> {
        self.overlay.as_ref().map(|o| o.region().name())
    }

    /// Run the TUI application until the user disconnects
    pub fn run(&mut self) -> Result<()> {
        self.terminal.acquire()?;
        self.surface.clear()?;
        self.start()?;

        // Main event loop
        while self.running {
            let timeout = POLL_INTERVAL.min(self.ticker.remaining(Instant::now()));
            let event = self.events.next(timeout)?;
            if let Err(e) = self.handle_event(event) {
                if matches!(e, TimedialError::Terminal(_)) {
                    self.terminal.release()?;
                    return Err(e);
                }
                tracing::error!("Event handling failed: {}", e);
            }
            if let Err(e) = self.tick(Instant::now()) {
                tracing::warn!("Status refresh failed: {}", e);
            }
        }

        tracing::info!("Session ended");
        self.terminal.release()?;
        Ok(())
    }

    /// Lay out every panel and show the welcome screen
    pub fn start(&mut self) -> Result<()> {
        self.overlay = Some(TextBox::new("Welcome", WELCOME.iter().copied()));
        self.tick(Instant::now())?;
        self.layout_all()?;
        self.redraw_all()
    }

    /// Process one input event
    pub fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Resize(width, height) => {
                tracing::debug!("Terminal resized to {}x{}", width, height);
                self.surface.clear()?;
                self.layout_all()?;
                self.redraw_all()
            }
            AppEvent::Key(key) => {
                if is_quit_key(&key) {
                    tracing::info!("Disconnect requested");
                    self.running = false;
                    return Ok(());
                }
                if self.overlay.take().is_some() {
                    // Any key dismisses the overlay; the menu was hidden behind it
                    return self.redraw_all();
                }
                if !layout::fits(self.size) {
                    tracing::debug!("Ignoring {:?} while the terminal is too small", key.code);
                    return Ok(());
                }
                if is_help_key(&key) {
                    self.show_overlay(TextBox::new("Help", WELCOME.iter().copied()))?;
                    return Ok(());
                }
                let Some(nav_key) = NavKey::from_key(&key) else {
                    tracing::debug!("Unknown key: {:?}", key.code);
                    return Ok(());
                };
                self.navigate(nav_key)
            }
            AppEvent::Tick => Ok(()),
        }
    }

    fn navigate(&mut self, key: NavKey) -> Result<()> {
        match self.navigator.handle(key, &mut self.surface) {
            Ok(Transition::Launch(command)) => self.launch(&command),
            Ok(transition @ (Transition::Entered | Transition::Returned)) => {
                tracing::debug!(
                    "{:?} '{}' at depth {}",
                    transition,
                    self.navigator.title(),
                    self.navigator.depth()
                );
                self.surface.flush()?;
                Ok(())
            }
            Ok(transition) => {
                tracing::trace!("Navigation: {:?}", transition);
                self.surface.flush()?;
                Ok(())
            }
            Err(e @ (TimedialError::Provider { .. } | TimedialError::UnknownProvider(_))) => {
                tracing::error!("{}", e);
                let width = usize::from(self.size.width.saturating_sub(8));
                let lines: Vec<String> = e
                    .to_string()
                    .lines()
                    .flat_map(|line| {
                        if line.is_empty() {
                            vec![String::new()]
                        } else {
                            wrap(line, width)
                        }
                    })
                    .collect();
                self.show_overlay(TextBox::new("Error", lines).bordered())
            }
            Err(e) => Err(e),
        }
    }

    /// Run `command` in the foreground, then restore the interface
    pub fn launch(&mut self, command: &Command) -> Result<()> {
        tracing::info!("Running {:?}", command.argv());
        self.terminal.release()?;

        let failure = match self.launcher.launch(command.argv()) {
            Ok(state) => state.failure_message(),
            Err(e) => {
                tracing::error!("{}", e);
                Some(e.to_string())
            }
        };
        if let Some(message) = failure {
            tracing::warn!("{}: {}", command.program(), message);
            if let Err(e) = self.launcher.acknowledge(&message) {
                tracing::warn!("Could not wait for acknowledgement: {}", e);
            }
        }

        // The child may have left the screen in any state
        self.terminal.acquire()?;
        self.surface.clear()?;
        self.layout_all()?;
        self.redraw_all()
    }

    /// Refresh the footer status if the timer is due
    pub fn tick(&mut self, now: Instant) -> Result<()> {
        if !self.ticker.due(now) {
            return Ok(());
        }
        let status = self.status.status();
        if self.footer.set_status(status) && self.footer.region().is_visible() {
            self.footer.render(&mut self.surface)?;
            self.surface.flush()?;
        }
        Ok(())
    }

    fn show_overlay(&mut self, mut overlay: TextBox) -> Result<()> {
        overlay.layout(self.size);
        self.overlay = Some(overlay);
        self.redraw_all()
    }

    fn layout_all(&mut self) -> Result<()> {
        self.size = self.surface.size()?;
        self.header.layout(self.size);
        self.footer.layout(self.size);
        self.navigator.layout(self.size);
        if let Some(overlay) = self.overlay.as_mut() {
            overlay.layout(self.size);
        }
        Ok(())
    }

    /// Redraw the whole screen from scratch
    pub fn redraw_all(&mut self) -> Result<()> {
        self.surface.clear()?;
        if !layout::fits(self.size) {
            tracing::warn!(
                "Terminal below minimum size: {}x{}",
                self.size.width,
                self.size.height
            );
            self.surface.print(0, 0, TOO_SMALL, Theme::notice())?;
            self.surface.flush()?;
            return Ok(());
        }

        self.header.render(&mut self.surface)?;
        self.footer.render(&mut self.surface)?;
        match self.overlay.as_mut() {
            Some(overlay) => {
                // The box may have been drawn before the clear
                overlay.layout(self.size);
                overlay.render(&mut self.surface)?;
            }
            None => self.navigator.render(&mut self.surface)?,
        }
        self.surface.flush()?;
        Ok(())
    }
}

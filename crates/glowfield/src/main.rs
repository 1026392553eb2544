mod cli;

use std::fs::OpenOptions;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use glowfield_background::{AnimationDriver, Framebuffer, HalfBlockView};
use glowfield_config::Config;
use glowfield_core::SurfaceSize;
use log::{LevelFilter, info};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::{Color, Stylize},
    text::Line,
};

use crate::cli::Cli;

/// Accent used for the overlay text.
const ACCENT: Color = Color::Rgb(192, 132, 252);

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?.with_overrides(cli.overrides())?;

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    init_logging(&config, cli.log_level())?;

    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    ratatui::restore();
    result
}

/// Send log records to the configured file; stderr belongs to the terminal UI.
fn init_logging(config: &Config, level: Option<LevelFilter>) -> color_eyre::Result<()> {
    let Some(path) = config.log_file.as_ref() else {
        return Ok(());
    };
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    builder.target(env_logger::Target::Pipe(Box::new(file)));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.init();
    Ok(())
}

/// The main application: hosts the background and draws the overlay on top.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Effective settings.
    config: Config,
    /// Background animation; replaced with a fresh driver on every mount.
    background: AnimationDriver<Framebuffer>,
    /// Last known viewport in pixels.
    viewport: SurfaceSize,
    /// Draw title and key help?
    show_overlay: bool,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        Self {
            running: false,
            show_overlay: config.overlay,
            config,
            background: AnimationDriver::new(),
            viewport: SurfaceSize::default(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        let size = terminal.size()?;
        self.viewport = SurfaceSize::from_terminal(size.width, size.height);
        self.mount_background();

        let interval = self.config.frame_interval();
        let mut next_frame = Instant::now();
        self.running = true;
        while self.running {
            self.background.tick();
            terminal.draw(|frame| self.render(frame))?;

            next_frame += interval;
            let now = Instant::now();
            if next_frame < now {
                // fell behind; don't try to catch up
                next_frame = now;
            }
            self.handle_crossterm_events(next_frame - now)?;
        }

        self.unmount_background();
        Ok(())
    }

    /// Start a fresh background driver on a new framebuffer.
    fn mount_background(&mut self) {
        self.background = AnimationDriver::new();
        if self
            .background
            .start(Some(Framebuffer::default()), self.viewport)
        {
            info!(
                "background mounted at {}x{} px",
                self.viewport.width, self.viewport.height
            );
        }
    }

    fn unmount_background(&mut self) {
        if self.background.stop().is_some() {
            info!("background unmounted");
        }
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        if let Some(framebuffer) = self.background.surface() {
            frame.render_widget(HalfBlockView::new(framebuffer), area);
        }

        if !self.show_overlay {
            return;
        }

        let chunks = Layout::vertical([
            Constraint::Fill(1),   // Top padding
            Constraint::Length(1), // Title
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Tagline
            Constraint::Fill(1),   // Bottom padding
            Constraint::Length(1), // Help text
        ])
        .split(area);

        // span styles only, so the rest of the row keeps its pixels
        let title = Line::from("g l o w f i e l d".fg(ACCENT).bold()).centered();
        frame.render_widget(title, chunks[1]);

        let tagline = Line::from("particles adrift in a violet dusk".gray()).centered();
        frame.render_widget(tagline, chunks[3]);

        let background_action = if self.background.is_running() {
            " pause  "
        } else {
            " resume  "
        };
        let help = Line::from(vec![
            "q".bold().fg(ACCENT),
            " quit  ".dark_gray(),
            "p".bold().fg(ACCENT),
            background_action.dark_gray(),
            "o".bold().fg(ACCENT),
            " hide overlay".dark_gray(),
        ])
        .centered();
        frame.render_widget(help, chunks[5]);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Waits at most `timeout` for the first event, then drains the queue.
    fn handle_crossterm_events(&mut self, timeout: Duration) -> color_eyre::Result<()> {
        let mut wait = timeout;
        while event::poll(wait)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Resize(cols, rows) => self.on_resize(cols, rows),
                _ => {}
            }
            wait = Duration::ZERO;
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('p')) => self.toggle_background(),
            (_, KeyCode::Char('o')) => self.show_overlay = !self.show_overlay,
            _ => {}
        }
    }

    /// Forward a terminal resize to the background.
    fn on_resize(&mut self, cols: u16, rows: u16) {
        self.viewport = SurfaceSize::from_terminal(cols, rows);
        self.background.on_viewport_resize(self.viewport);
    }

    /// Unmount the background if shown, otherwise mount a new one.
    fn toggle_background(&mut self) {
        if self.background.is_running() {
            self.unmount_background();
        } else {
            self.mount_background();
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

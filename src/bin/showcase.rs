//! `showcase` — `ChadCn` UI demonstration binary
//!
//! Walks through every component: a live interactive preview on the left,
//! the prop table and a copy-pasteable usage snippet on the right.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin showcase
//! cargo run --bin showcase -- --help
//! cargo run --bin showcase -- --component carousel3d
//! cargo run --bin showcase -- --headless-smoke
//! ```
//!
//! Press Ctrl+Q to quit.

// Required for libc FFI (fcntl for non-blocking stdin).
#![allow(unsafe_code)]

use chadcn_tui::docs;
use chadcn_tui::input::{Event, InputParser, KeyCode, KeyModifiers, TouchEvent, PointerPhase};
use chadcn_tui::terminal::{enable_raw_mode, is_tty, terminal_size};
use chadcn_tui::widgets::{
    Button, ButtonVariant, Card, Carousel3D, CarouselConfig, CarouselItem, Column, DataTable,
    Dropdown, FormField, FormStep, HeroEffect, HeroText, Modal, MultiStepForm, Tabs, Viewport,
    Widget,
};
use chadcn_tui::{Rect, Renderer, RendererOptions, Style, theme};
use std::ffi::OsString;
use std::io::{self, Read, Write};
use std::time::{Duration, Instant};

// ============================================================================
// CLI Parsing
// ============================================================================

const HELP_TEXT: &str = "showcase - ChadCn UI demonstration binary

USAGE:
    showcase [OPTIONS]

OPTIONS:
    -h, --help              Print this help message and exit
    --component <NAME>      Start on a specific component page
    --fps <N>               Cap frames per second (default: 60)

    --no-mouse              Disable mouse tracking
    --no-alt-screen         Don't enter alternate screen
    --touch-emulation       Deliver mouse drags to the carousel as touch

    --max-frames <N>        Exit after presenting N frames

    --headless-smoke        Render every page headless and exit (no TTY)
    --headless-size <WxH>   Force headless size (default: 120x36)

KEYS:
    ]  /  [                 Next / previous component page
    c                       Copy the usage snippet (OSC 52)
    r                       Reset the component on the current page
    Ctrl+Q                  Quit

EXAMPLES:
    showcase                          # Interactive mode
    showcase --component datatable    # Open the table page
    showcase --fps 30 --no-mouse      # 30 FPS, keyboard only
    showcase --headless-smoke         # CI smoke test
";

/// Application configuration parsed from command-line arguments.
#[derive(Clone, Debug)]
#[allow(clippy::struct_excessive_bools)] // Config naturally has many boolean flags
pub struct Config {
    pub start_component: Option<String>,
    pub fps_cap: u32,

    pub enable_mouse: bool,
    pub use_alt_screen: bool,
    pub touch_emulation: bool,

    pub max_frames: Option<u64>,

    pub headless_smoke: bool,
    pub headless_size: (u16, u16),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_component: None,
            fps_cap: 60,
            enable_mouse: true,
            use_alt_screen: true,
            touch_emulation: false,
            max_frames: None,
            headless_smoke: false,
            headless_size: (120, 36),
        }
    }
}

/// Result of CLI parsing.
pub enum ParseResult {
    /// Successfully parsed configuration.
    Config(Config),
    /// User requested help.
    Help,
    /// Parse error with message.
    Error(String),
}

impl Config {
    /// Parse configuration from command-line arguments.
    pub fn from_args<I>(args: I) -> ParseResult
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        // Skip program name
        args.next();

        while let Some(arg) = args.next() {
            let arg_str = arg.to_string_lossy();

            match arg_str.as_ref() {
                "-h" | "--help" => return ParseResult::Help,

                "--component" => {
                    let Some(value) = args.next() else {
                        return ParseResult::Error("--component requires a value".to_string());
                    };
                    let name = value.to_string_lossy().to_string();
                    if docs::find(&name).is_none() {
                        return ParseResult::Error(format!("Unknown component: {name}"));
                    }
                    config.start_component = Some(name);
                }

                "--fps" => {
                    let value = match args.next() {
                        Some(v) => v.to_string_lossy().to_string(),
                        None => return ParseResult::Error("--fps requires a value".to_string()),
                    };
                    match value.parse::<u32>() {
                        Ok(n) if n > 0 => config.fps_cap = n,
                        _ => {
                            return ParseResult::Error(format!(
                                "Invalid --fps value: {value} (must be positive integer)"
                            ));
                        }
                    }
                }

                "--no-mouse" => config.enable_mouse = false,
                "--no-alt-screen" => config.use_alt_screen = false,
                "--touch-emulation" => config.touch_emulation = true,

                "--max-frames" => {
                    let value = match args.next() {
                        Some(v) => v.to_string_lossy().to_string(),
                        None => {
                            return ParseResult::Error("--max-frames requires a value".to_string());
                        }
                    };
                    match value.parse::<u64>() {
                        Ok(n) => config.max_frames = Some(n),
                        Err(_) => {
                            return ParseResult::Error(format!(
                                "Invalid --max-frames value: {value}"
                            ));
                        }
                    }
                }

                "--headless-smoke" => config.headless_smoke = true,

                "--headless-size" => {
                    let value = match args.next() {
                        Some(v) => v.to_string_lossy().to_string(),
                        None => {
                            return ParseResult::Error(
                                "--headless-size requires a value (e.g., 120x36)".to_string(),
                            );
                        }
                    };
                    match parse_size(&value) {
                        Some((w, h)) => config.headless_size = (w, h),
                        None => {
                            return ParseResult::Error(format!(
                                "Invalid --headless-size: {value} (use WxH format, e.g., 120x36)"
                            ));
                        }
                    }
                }

                other => {
                    if other.starts_with('-') {
                        return ParseResult::Error(format!("Unknown option: {other}"));
                    }
                    // Ignore positional arguments for now
                }
            }
        }

        ParseResult::Config(config)
    }

    /// Get renderer options from config.
    #[must_use]
    pub fn renderer_options(&self) -> RendererOptions {
        RendererOptions {
            use_alt_screen: self.use_alt_screen,
            hide_cursor: true,
            enable_mouse: self.enable_mouse,
        }
    }

    /// Get target frame duration.
    #[must_use]
    pub fn frame_duration(&self) -> Duration {
        Duration::from_micros(1_000_000 / u64::from(self.fps_cap))
    }
}

/// Parse a size string like "120x36" into (width, height).
fn parse_size(s: &str) -> Option<(u16, u16)> {
    let parts: Vec<&str> = s.split('x').collect();
    if parts.len() != 2 {
        return None;
    }
    let w = parts[0].parse::<u16>().ok()?;
    let h = parts[1].parse::<u16>().ok()?;
    if w == 0 || h == 0 {
        return None;
    }
    Some((w, h))
}

// ============================================================================
// Application State
// ============================================================================

/// SGR mouse coordinates are cells; carousel input units are finer. One
/// column is ~10 units, one row ~20 (cells are roughly twice as tall as
/// wide).
const UNITS_PER_COL: f32 = 10.0;
const UNITS_PER_ROW: f32 = 20.0;

/// How long the "Copied!" indicator stays up.
const COPIED_HOLD: Duration = Duration::from_secs(2);

/// One component page: the live widget plus its documentation.
enum Page {
    Carousel(Carousel3D),
    Table(DataTable),
    Form(MultiStepForm),
    Modal(Modal),
    Dropdown(Dropdown),
    Tabs(Tabs),
    Button(Button),
    Card(Card),
    Hero(HeroText),
}

impl Page {
    fn widget_mut(&mut self) -> &mut dyn Widget {
        match self {
            Self::Carousel(w) => w,
            Self::Table(w) => w,
            Self::Form(w) => w,
            Self::Modal(w) => w,
            Self::Dropdown(w) => w,
            Self::Tabs(w) => w,
            Self::Button(w) => w,
            Self::Card(w) => w,
            Self::Hero(w) => w,
        }
    }

    fn widget(&self) -> &dyn Widget {
        match self {
            Self::Carousel(w) => w,
            Self::Table(w) => w,
            Self::Form(w) => w,
            Self::Modal(w) => w,
            Self::Dropdown(w) => w,
            Self::Tabs(w) => w,
            Self::Button(w) => w,
            Self::Card(w) => w,
            Self::Hero(w) => w,
        }
    }
}

fn build_pages() -> Vec<Page> {
    let carousel = Carousel3D::new(
        vec![
            CarouselItem::image("sunrise.jpg"),
            CarouselItem::image("harbor.jpg"),
            CarouselItem::video("launch.mp4"),
            CarouselItem::image("forest.jpg"),
            CarouselItem::image("skyline.jpg"),
            CarouselItem::video("timelapse.mp4"),
            CarouselItem::image("dunes.jpg"),
        ],
        CarouselConfig::default(),
    );

    let table = DataTable::new(
        vec![
            Column::new("name", "Name"),
            Column::new("status", "Status"),
            Column::new("region", "Region"),
        ],
        vec![
            vec!["api-core".into(), "healthy".into(), "us-east".into()],
            vec!["billing".into(), "degraded".into(), "eu-west".into()],
            vec!["search".into(), "healthy".into(), "us-east".into()],
            vec!["ingest".into(), "healthy".into(), "ap-south".into()],
            vec!["mailer".into(), "down".into(), "eu-west".into()],
            vec!["cdn-edge".into(), "healthy".into(), "global".into()],
        ],
        4,
    );

    let form = MultiStepForm::new(vec![
        FormStep::new(
            "Account",
            vec![
                FormField::new("email", "Email"),
                FormField::new("password", "Password"),
            ],
        ),
        FormStep::new("Profile", vec![FormField::new("display", "Display name")]),
        FormStep::new("Confirm", Vec::new()),
    ]);

    let mut modal = Modal::new(
        "Confirm deletion",
        vec![
            "This action cannot be undone.".to_string(),
            String::new(),
            "Drag the title bar to move me.".to_string(),
        ],
        36,
        9,
    );
    modal.open();

    let mut dropdown = Dropdown::new(
        "Select region",
        vec![
            "us-east".to_string(),
            "eu-west".to_string(),
            "ap-south".to_string(),
        ],
    );
    // Below the top bar and clear of the doc panel on any sane terminal.
    dropdown.set_anchor(Rect::new(4, 3, 20, 1));

    let tabs = Tabs::new(
        vec!["Overview".to_string(), "Usage".to_string(), "Billing".to_string()],
        vec![
            vec!["Everything is operational.".to_string()],
            vec!["1.2M requests this month.".to_string()],
            vec!["Next invoice: Sep 1.".to_string()],
        ],
    );

    let mut button = Button::new("Deploy", ButtonVariant::Primary);
    button.set_area(Rect::new(4, 4, 12, 3));

    let card = Card::titled(
        "Release notes",
        vec![
            "v0.1.0".to_string(),
            "First public preview.".to_string(),
        ],
    );

    let hero = HeroText::new("ChadCn UI", HeroEffect::Wave);

    vec![
        Page::Carousel(carousel),
        Page::Table(table),
        Page::Form(form),
        Page::Modal(modal),
        Page::Dropdown(dropdown),
        Page::Tabs(tabs),
        Page::Button(button),
        Page::Card(card),
        Page::Hero(hero),
    ]
}

/// Application state.
struct App {
    pages: Vec<Page>,
    current: usize,
    should_quit: bool,
    frame_count: u64,
    max_frames: Option<u64>,
    touch_emulation: bool,
    copied_at: Option<Instant>,
}

impl App {
    fn new(config: &Config) -> Self {
        let pages = build_pages();
        let current = config
            .start_component
            .as_deref()
            .and_then(|name| {
                docs::registry()
                    .iter()
                    .position(|d| d.name.eq_ignore_ascii_case(name))
            })
            .unwrap_or(0);
        Self {
            pages,
            current,
            should_quit: false,
            frame_count: 0,
            max_frames: config.max_frames,
            touch_emulation: config.touch_emulation,
            copied_at: None,
        }
    }

    fn doc(&self) -> docs::ComponentDoc {
        let registry = docs::registry();
        registry[self.current.min(registry.len() - 1)].clone()
    }

    fn handle_event(&mut self, event: &Event, viewport: Viewport) {
        if let Event::Key(key) = event {
            if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CTRL) {
                self.should_quit = true;
                return;
            }
            // Page navigation and page-level actions never reach the widget.
            match key.code {
                KeyCode::Char(']') => {
                    self.current = (self.current + 1) % self.pages.len();
                    return;
                }
                KeyCode::Char('[') => {
                    self.current = (self.current + self.pages.len() - 1) % self.pages.len();
                    return;
                }
                KeyCode::Char('c') if !matches!(self.pages[self.current], Page::Form(_)) => {
                    self.copy_snippet();
                    return;
                }
                KeyCode::Char('r') if !matches!(self.pages[self.current], Page::Form(_)) => {
                    self.reset_page();
                    return;
                }
                _ => {}
            }
        }

        // Mouse coordinates arrive in cells; widgets that track fine-grained
        // displacement get them scaled up into input units.
        let routed = match (&mut self.pages[self.current], event) {
            (Page::Carousel(carousel), Event::Pointer(p)) => {
                let (x, y) = (p.x * UNITS_PER_COL, p.y * UNITS_PER_ROW);
                if self.touch_emulation {
                    let touch = match p.phase {
                        PointerPhase::Press => TouchEvent::start(x, y),
                        PointerPhase::Move => TouchEvent::move_to(x, y),
                        PointerPhase::Release => TouchEvent::end(x, y),
                    };
                    carousel.touch(touch);
                } else {
                    let scaled = chadcn_tui::PointerEvent::new(x, y, p.phase);
                    carousel.pointer(scaled, viewport);
                }
                true
            }
            _ => false,
        };
        if !routed {
            self.pages[self.current].widget_mut().handle_event(event, viewport);
        }
    }

    fn copy_snippet(&mut self) {
        let doc = self.doc();
        if doc.copy_source(&mut io::stdout()) {
            self.copied_at = Some(Instant::now());
        } else {
            // Copy failed: never show a stale indicator.
            self.copied_at = None;
        }
    }

    fn reset_page(&mut self) {
        match &mut self.pages[self.current] {
            Page::Carousel(c) => c.reset(),
            Page::Hero(h) => h.restart(),
            Page::Modal(m) => m.open(),
            _ => {}
        }
    }

    fn tick(&mut self, dt: Duration) {
        self.frame_count = self.frame_count.wrapping_add(1);
        self.pages[self.current].widget_mut().tick(dt);

        if let Some(at) = self.copied_at {
            if at.elapsed() >= COPIED_HOLD {
                self.copied_at = None;
            }
        }

        if let Some(max) = self.max_frames {
            if self.frame_count >= max {
                self.should_quit = true;
            }
        }
    }
}

// ============================================================================
// Drawing
// ============================================================================

fn draw_frame<W: Write>(renderer: &mut Renderer<W>, app: &App) {
    let surface = renderer.surface();
    let (width, height) = surface.size();
    surface.clear(theme::BACKGROUND);

    let doc = app.doc();

    // Top bar: component name and position.
    surface.fill_rect(Rect::new(0, 0, width, 1), theme::SURFACE);
    let title = format!(
        " {}  ({}/{})",
        doc.name,
        app.current + 1,
        app.pages.len()
    );
    surface.draw_text(0, 0, &title, theme::title());
    if app.copied_at.is_some() {
        let msg = "Copied!";
        let x = width.saturating_sub(msg.len() as u32 + 1);
        surface.draw_text(x, 0, msg, Style::fg(theme::SUCCESS).with_bold());
    }

    // Split: preview left, docs right.
    let body_h = height.saturating_sub(2);
    let doc_w = (width / 3).clamp(24, 48).min(width);
    let preview = Rect::new(0, 1, width.saturating_sub(doc_w), body_h);
    let panel = Rect::new(preview.width, 1, doc_w, body_h);

    app.pages[app.current].widget().render(surface, preview);
    draw_doc_panel(app, surface, panel);

    // Bottom bar: key hints.
    let hints = " [ / ] page   c copy   r reset   Ctrl+Q quit";
    surface.fill_rect(Rect::new(0, height.saturating_sub(1), width, 1), theme::SURFACE);
    surface.draw_text(0, height.saturating_sub(1), hints, theme::muted());
}

fn draw_doc_panel(app: &App, surface: &mut chadcn_tui::Surface, panel: Rect) {
    if panel.is_empty() {
        return;
    }
    let doc = app.doc();
    surface.draw_box(panel, theme::border());
    let inner = panel.inset(1);
    if inner.is_empty() {
        return;
    }

    let mut y = inner.y;
    for line in wrap(doc.summary, inner.width as usize) {
        if y >= inner.bottom() {
            return;
        }
        surface.draw_text(inner.x, y, &line, theme::text());
        y += 1;
    }

    y += 1;
    if y < inner.bottom() {
        surface.draw_text(inner.x, y, "Props", theme::accent());
        y += 1;
    }
    for prop in &doc.props {
        if y >= inner.bottom() {
            return;
        }
        let default = prop.default.map_or(String::new(), |d| format!(" = {d}"));
        let mut line = format!("{}: {}{}", prop.name, prop.type_name, default);
        line.truncate(inner.width as usize);
        surface.draw_text(inner.x, y, &line, theme::muted());
        y += 1;
    }

    y += 1;
    if y < inner.bottom() {
        surface.draw_text(inner.x, y, "Usage (c to copy)", theme::accent());
        y += 1;
    }
    for line in doc.source.lines() {
        if y >= inner.bottom() {
            return;
        }
        let mut line = line.to_string();
        line.truncate(inner.width as usize);
        surface.draw_text(inner.x, y, &line, theme::text());
        y += 1;
    }
}

/// Greedy word wrap.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

// ============================================================================
// Entry Point
// ============================================================================

fn main() -> io::Result<()> {
    match Config::from_args(std::env::args_os()) {
        ParseResult::Config(config) => {
            if config.headless_smoke {
                run_headless_smoke(&config)
            } else {
                run_interactive(&config)
            }
        }
        ParseResult::Help => {
            print!("{HELP_TEXT}");
            Ok(())
        }
        ParseResult::Error(msg) => {
            eprintln!("Error: {msg}");
            eprintln!("Run with --help for usage information.");
            std::process::exit(1);
        }
    }
}

// ============================================================================
// Headless Smoke Test
// ============================================================================

/// Render every component page once without a TTY.
fn run_headless_smoke(config: &Config) -> io::Result<()> {
    let (width, height) = config.headless_size;
    eprintln!("Running headless smoke test ({width}x{height})...");

    let mut out = Vec::new();
    let mut renderer = Renderer::headless(u32::from(width), u32::from(height), &mut out)
        .map_err(io::Error::other)?;

    let mut app = App::new(config);
    let page_count = app.pages.len();
    for page in 0..page_count {
        app.current = page;
        // A couple of frames so time-driven widgets move.
        app.tick(Duration::from_millis(17));
        app.tick(Duration::from_millis(17));
        draw_frame(&mut renderer, &app);
        renderer.present().map_err(io::Error::other)?;
    }
    drop(renderer);
    assert!(!out.is_empty(), "headless render produced no output");

    eprintln!("Headless smoke test PASSED");
    eprintln!("  Pages rendered: {page_count}");
    eprintln!("  Output bytes: {}", out.len());

    Ok(())
}

// ============================================================================
// Interactive Mode
// ============================================================================

/// Run interactive mode with terminal.
fn run_interactive(config: &Config) -> io::Result<()> {
    if !is_tty(&io::stdout()) {
        eprintln!("Error: stdout is not a terminal");
        eprintln!();
        eprintln!("showcase requires an interactive terminal to run.");
        eprintln!("For non-interactive use, try: showcase --headless-smoke");
        std::process::exit(1);
    }

    // Determine terminal size, fall back to 80x24.
    let (width, height) = terminal_size().unwrap_or((80, 24));
    let viewport = Viewport::new(width, height);

    let mut renderer = Renderer::new(
        u32::from(width),
        u32::from(height),
        io::stdout(),
        config.renderer_options(),
    )
    .map_err(io::Error::other)?;

    // Enable raw mode for input handling.
    let _raw_guard = enable_raw_mode()?;

    // Set up non-blocking stdin.
    set_stdin_nonblocking()?;

    let mut app = App::new(config);
    let mut parser = InputParser::new();
    let mut input_buf = [0u8; 256];

    let frame_duration = config.frame_duration();
    let mut last_frame = Instant::now();

    while !app.should_quit {
        let frame_start = Instant::now();
        let dt = frame_start.duration_since(last_frame);
        last_frame = frame_start;

        // --- Input phase ---
        if let Ok(n) = io::stdin().read(&mut input_buf) {
            let mut offset = 0;
            while offset < n {
                match parser.parse(&input_buf[offset..n]) {
                    Ok((event, consumed)) => {
                        app.handle_event(&event, viewport);
                        offset += consumed;
                    }
                    Err(_) => break,
                }
            }
        }

        // --- Update phase ---
        app.tick(dt);

        // --- Render phase ---
        draw_frame(&mut renderer, &app);
        renderer.present().map_err(io::Error::other)?;

        // --- Frame pacing ---
        let elapsed = frame_start.elapsed();
        if let Some(remaining) = frame_duration.checked_sub(elapsed) {
            std::thread::sleep(remaining);
        }
    }

    Ok(())
}

/// Switch stdin to non-blocking so the frame loop never stalls on input.
fn set_stdin_nonblocking() -> io::Result<()> {
    // SAFETY: fcntl on STDIN_FILENO with F_GETFL/F_SETFL is safe
    let flags = unsafe { libc::fcntl(libc::STDIN_FILENO, libc::F_GETFL) };
    if flags == -1 {
        return Err(io::Error::last_os_error());
    }
    // SAFETY: setting O_NONBLOCK preserves all other flags
    let result = unsafe { libc::fcntl(libc::STDIN_FILENO, libc::F_SETFL, flags | libc::O_NONBLOCK) };
    if result == -1 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}

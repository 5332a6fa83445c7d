use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::{Frame, Terminal};
use settings_kit::i18n;
use settings_kit::prelude::*;
use settings_kit::services::log_dirs;
use settings_kit::services::terminal_modes::{self, TerminalModes};
use settings_kit::services::tracing_setup;
use settings_kit::view::settings::DEFAULT_TITLE;
use settings_kit::view::RenderContext;
use std::io::{self, Stdout};
use std::path::PathBuf;

/// Interactive demo of the settings-kit components
#[derive(Parser, Debug)]
#[command(name = "settings-demo")]
#[command(about = "A sample settings screen for the terminal", long_about = None)]
#[command(version)]
struct Args {
    /// Navigation title, as a localization key or plain text
    #[arg(long, default_value = DEFAULT_TITLE)]
    title: String,

    /// How the navigation title is drawn
    #[arg(long, value_enum, default_value_t = DisplayMode::Compact)]
    display_mode: DisplayMode,

    /// Override the locale (e.g., 'en', 'zh-CN')
    #[arg(long, value_name = "LOCALE")]
    locale: Option<String>,

    /// Path to log file for diagnostics (default: XDG state dir)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

/// Values edited by the demo screen
#[derive(Clone)]
struct DemoState {
    wifi: Rc<Cell<bool>>,
    bluetooth: Rc<Cell<bool>>,
    notifications: Rc<Cell<bool>>,
    brightness: Rc<Cell<f64>>,
    accent: Rc<Cell<Color>>,
    font_size: Rc<Cell<i64>>,
    appearance: Rc<Cell<usize>>,
}

impl Default for DemoState {
    fn default() -> Self {
        Self {
            wifi: Rc::new(Cell::new(true)),
            bluetooth: Rc::new(Cell::new(false)),
            notifications: Rc::new(Cell::new(true)),
            brightness: Rc::new(Cell::new(70.0)),
            accent: Rc::new(Cell::new(Color::Rgb(0, 122, 255))),
            font_size: Rc::new(Cell::new(14)),
            appearance: Rc::new(Cell::new(2)),
        }
    }
}

/// Picker binding over the bundled locales; picking one switches the
/// process-wide locale.
fn locale_binding(locales: Vec<String>) -> Binding<usize> {
    let read = locales.clone();
    Binding::new(
        move || {
            let current = i18n::current_locale();
            read.iter().position(|l| *l == current).unwrap_or(0)
        },
        move |index: usize| {
            if let Some(locale) = locales.get(index) {
                i18n::init(Some(locale.as_str()));
            }
        },
    )
}

fn display_page(state: &DemoState) -> SettingsPage {
    dsl::page(
        "demo.display",
        [
            dsl::section(
                "demo.display",
                [
                    dsl::slider(
                        "demo.brightness",
                        Some("☀"),
                        Binding::from_cell(&state.brightness),
                        0.0..=100.0,
                    ),
                    dsl::picker(
                        "demo.appearance",
                        Some("◐"),
                        Binding::from_cell(&state.appearance),
                        ["Light", "Dark", "Automatic"],
                    ),
                ],
            ),
            dsl::section(
                "demo.font_size",
                [
                    dsl::stepper(
                        "demo.font_size",
                        Some("A"),
                        Binding::from_cell(&state.font_size),
                        8..=24,
                    ),
                    dsl::color_picker("demo.accent", Some("●"), Binding::from_cell(&state.accent)),
                ],
            )
            .with_footer("demo.footer"),
        ],
    )
}

fn build_list(args: &Args, state: &DemoState) -> SettingsList {
    let mut locales = i18n::available_locales();
    locales.sort();

    let notifications = state.notifications.clone();
    let display_state = state.clone();

    dsl::list(
        args.title.clone(),
        args.display_mode,
        [
            dsl::section(
                "demo.general",
                [
                    dsl::toggle("demo.wifi", Some("≋"), Binding::from_cell(&state.wifi)),
                    dsl::toggle(
                        "demo.bluetooth",
                        Some("ᛒ"),
                        Binding::from_cell(&state.bluetooth),
                    ),
                    dsl::picker("demo.language", Some("⌨"), locale_binding(locales.clone()), locales),
                ],
            ),
            dsl::section(
                "",
                [
                    dsl::link("demo.notifications", Some("◉"), move || {
                        dsl::page(
                            "demo.notifications",
                            [dsl::section(
                                "",
                                [dsl::toggle(
                                    "demo.notifications",
                                    None,
                                    Binding::from_cell(&notifications),
                                )],
                            )],
                        )
                    }),
                    dsl::link("demo.display", Some("☀"), move || display_page(&display_state)),
                ],
            ),
            dsl::section(
                "demo.status",
                [
                    dsl::status("demo.backup", Some("☁"), StatusKind::Checkmark),
                    dsl::status("demo.updates", Some("⟳"), StatusKind::Warning),
                ],
            ),
            dsl::section(
                "",
                [dsl::link("demo.about", Some("ⓘ"), || AboutScreen)],
            ),
        ],
    )
}

/// Free-form destination showing a short description
struct AboutScreen;

impl Destination for AboutScreen {
    fn title(&self) -> &str {
        "demo.about"
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        if area.width < 2 {
            return;
        }
        let lines = vec![
            Line::from(Span::styled(
                ctx.text("demo.about_body"),
                Style::default().fg(ctx.theme.text_fg),
            )),
            Line::default(),
            Line::from(Span::styled(
                format!("settings-kit {}", env!("CARGO_PKG_VERSION")),
                Style::default().fg(ctx.theme.secondary_fg),
            )),
        ];
        let inner = Rect::new(area.x + 1, area.y, area.width - 1, area.height);
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
    }

    fn handle_key(&mut self, key: KeyEvent) -> NavAction {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => NavAction::Pop,
            _ => NavAction::Ignored,
        }
    }

    fn handle_mouse(&mut self, _event: MouseEvent) -> NavAction {
        NavAction::Ignored
    }
}

fn is_quit(event: &Event, list: &SettingsList) -> bool {
    let Event::Key(key) = event else {
        return false;
    };
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
        KeyCode::Char('q') => !list.has_open_popup(),
        _ => false,
    }
}

fn run_event_loop(
    list: &mut SettingsList,
    state: &DemoState,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> AnyhowResult<()> {
    loop {
        list.theme_mut().accent_fg = state.accent.get();
        terminal
            .draw(|frame| list.render(frame, frame.area()))
            .context("Failed to draw frame")?;

        let event = event::read().context("Failed to read terminal event")?;
        if is_quit(&event, list) {
            tracing::info!("Quit requested");
            return Ok(());
        }

        let handled = list.handle_event(&event);
        if !handled && list.is_root() {
            if let Event::Key(KeyEvent {
                code: KeyCode::Esc,
                kind: KeyEventKind::Press,
                ..
            }) = event
            {
                return Ok(());
            }
        }
    }
}

fn main() -> AnyhowResult<()> {
    let args = Args::parse();

    let log_file = args.log_file.clone().unwrap_or_else(log_dirs::main_log_path);
    if !tracing_setup::init_global(&log_file) {
        eprintln!("Could not open log file {}", log_file.display());
    }
    tracing::info!("Demo starting");

    let locale = i18n::init(args.locale.as_deref());
    tracing::info!("Using locale {}", locale);

    let state = DemoState::default();
    let mut list = build_list(&args, &state);

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        terminal_modes::emergency_cleanup();
        original_hook(panic);
    }));

    let mut terminal_modes = TerminalModes::enable().context("Failed to set up terminal")?;
    let result = Terminal::new(CrosstermBackend::new(io::stdout()))
        .context("Failed to create terminal")
        .and_then(|mut terminal| run_event_loop(&mut list, &state, &mut terminal));

    terminal_modes.undo();
    tracing::info!(
        "Demo finished: wifi={} bluetooth={} brightness={:.0} font_size={}",
        state.wifi.get(),
        state.bluetooth.get(),
        state.brightness.get(),
        state.font_size.get()
    );

    result.context("Event loop returned an error")
}

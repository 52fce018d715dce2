// Tabbed Pane Demo
// Interactive terminal demo for the tabbed pane widget

// IMPORTS ------------------>>

use std::collections::VecDeque;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Terminal,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tabbed_pane::{load_pane_config, DimmingContext, PaneEvent, Tab, TabbedPaneManager, VERSION};

//--------------------------------------------------------<<

const HWND_MAIN_TABBED_PANE: &str = "hwndMainTabbedPane";
const LOG_ENV: &str = "TABBED_PANE_LOG";
const LOG_FILE: &str = "tabbed-pane.log";
const EVENT_HISTORY: usize = 6;

// ┌──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                                 MAIN ENTRY POINT                                                 │
// └──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┘

fn main() -> Result<()> {
    init_logging()?;

    let config_path = std::env::args().nth(1).map(PathBuf::from).unwrap_or_else(|| {
        let mut default_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        default_path.push("src");
        default_path.push("config.yaml");
        default_path
    });
    let config = load_pane_config(&config_path)?;
    let mut manager = TabbedPaneManager::create(&config, HWND_MAIN_TABBED_PANE)
        .with_context(|| format!("building pane from {}", config_path.display()))?;
    info!(version = VERSION, config = %config_path.display(), "demo started");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut manager, &config.application.title, &config.application.status_text);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

/// Write tracing output to a file when the log variable holds a filter
fn init_logging() -> Result<()> {
    let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) else {
        return Ok(());
    };
    let file = File::create(LOG_FILE).with_context(|| format!("creating {LOG_FILE}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                           MAIN LOOP                                            │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    manager: &mut TabbedPaneManager,
    title: &str,
    status_text: &str,
) -> Result<()> {
    let mut history: VecDeque<String> = VecDeque::with_capacity(EVENT_HISTORY);
    let mut added = 0usize;

    loop {
        terminal.draw(|f| {
            let dimming = DimmingContext::default();
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Min(3), Constraint::Length(2)])
                .split(f.area());

            let header = Line::from(vec![
                Span::styled(format!(" {title} "), Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(format!("v{VERSION}"), Style::default().fg(Color::DarkGray)),
            ]);
            f.render_widget(Paragraph::new(header), rows[0]);

            manager.pane_mut().render(f, rows[1], &dimming);

            let recent = history.iter().cloned().collect::<Vec<_>>().join(" · ");
            let status = vec![
                Line::styled(format!(" {status_text}"), Style::default().fg(Color::Gray)),
                Line::styled(format!(" events: {recent}"), Style::default().fg(Color::DarkGray)),
            ];
            f.render_widget(Paragraph::new(status), rows[2]);
        })?;

        // ┌──────────────────────────────────────────────────────────────────────────────────────────────┐
        // │                              Handle events (keyboard and mouse)                              │
        // └──────────────────────────────────────────────────────────────────────────────────────────────┘

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }

        let input = event::read()?;
        if let Event::Key(key) = &input {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('q') => break,
                KeyCode::Char('t') => {
                    manager.toggle_tabs();
                }
                KeyCode::Char('+') => {
                    manager.adjust_tab_height(1);
                }
                KeyCode::Char('-') => {
                    manager.adjust_tab_height(-1);
                }
                KeyCode::Char('a') => {
                    added += 1;
                    let tab = Tab::new(format!("added-{added}"), format!("TAB {added}"))
                        .with_content(format!("Tab added at runtime (#{added})"));
                    if let Err(err) = manager.pane_mut().add_child(tab) {
                        push_history(&mut history, format!("rejected: {err}"));
                    }
                }
                KeyCode::Char('x') => {
                    manager.remove_selected();
                }
                KeyCode::Char('c') => {
                    manager.pane_mut().clear_children();
                }
                KeyCode::Char('d') => {
                    manager.toggle_selected_enabled();
                }
                _ => {
                    manager.pane_mut().handle_input(&input);
                }
            }
        } else {
            manager.pane_mut().handle_input(&input);
        }

        manager.pane_mut().dispatch_events(|_, event| {
            if let Some(text) = describe(&event) {
                push_history(&mut history, text);
            }
        });
    }

    Ok(())
}

fn push_history(history: &mut VecDeque<String>, entry: String) {
    if history.len() == EVENT_HISTORY {
        history.pop_front();
    }
    history.push_back(entry);
}

/// Short label for the status line; repaint requests are not shown
fn describe(event: &PaneEvent) -> Option<String> {
    let text = match event {
        PaneEvent::Change => "change".to_string(),
        PaneEvent::Execute { .. } => "execute".to_string(),
        PaneEvent::Show { tab } => format!("show {tab}"),
        PaneEvent::Hide { tab } => format!("hide {tab}"),
        PaneEvent::Focus { tab } => format!("focus {tab}"),
        PaneEvent::Drop { .. } => "drop".to_string(),
        PaneEvent::Repaint => return None,
    };
    Some(text)
}

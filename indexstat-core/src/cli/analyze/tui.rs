//! Interactive chart of observed against expected partition counts

use crate::stats::Report;
use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
};
use std::io::{self, Write};

/// Half-width of a drawn bar; bins are one unit wide.
const BAR_HALF_WIDTH: f64 = 0.4;
/// Horizontal spacing of the vertical strokes that fill a bar.
const BAR_STEP: f64 = 0.02;

pub(crate) struct App<'a> {
    report: &'a Report,
    proportions: bool,
}

impl<'a> App<'a> {
    pub(crate) fn new(report: &'a Report) -> Self {
        Self {
            report,
            proportions: false,
        }
    }

    pub(crate) fn toggle_proportions(&mut self) {
        self.proportions = !self.proportions;
    }

    /// Observed bins as dense vertical strokes so each bar renders filled.
    pub(crate) fn observed_points(&self) -> Vec<(f64, f64)> {
        let strokes = (2.0 * BAR_HALF_WIDTH / BAR_STEP).round() as usize;

        self.report
            .histogram
            .bins()
            .into_iter()
            .filter(|(_, count)| *count > 0)
            .flat_map(|(k, count)| {
                let height = if self.proportions {
                    self.report.observed_proportion(k)
                } else {
                    count as f64
                };
                let left = k as f64 - BAR_HALF_WIDTH;
                (0..=strokes).map(move |i| (left + i as f64 * BAR_STEP, height))
            })
            .collect()
    }

    pub(crate) fn expected_points(&self) -> Vec<(f64, f64)> {
        self.report
            .expected
            .points
            .iter()
            .map(|(k, v)| {
                let height = if self.proportions {
                    self.report.expected_proportion(*k as usize)
                } else {
                    *v
                };
                (f64::from(*k), height)
            })
            .collect()
    }

    pub(crate) fn y_max(&self) -> f64 {
        let max = self
            .observed_points()
            .iter()
            .chain(self.expected_points().iter())
            .map(|(_, y)| *y)
            .fold(0.0, f64::max);
        if max > 0.0 { max * 1.1 } else { 1.0 }
    }
}

/// Restores the terminal when dropped, on every exit path after raw mode
/// has been entered.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal(&mut io::stdout());
    }
}

/// Best-effort: each step runs even if an earlier one failed.
pub(crate) fn restore_terminal<W: Write>(out: &mut W) {
    if let Err(e) = disable_raw_mode() {
        tracing::warn!("failed to disable raw mode: {e}");
    }
    if let Err(e) = execute!(out, LeaveAlternateScreen, Show) {
        tracing::warn!("failed to leave alternate screen: {e}");
    }
}

pub fn run(report: &Report) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(report);
    run_app(&mut terminal, &mut app)
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('p') => app.toggle_proportions(),
                    _ => {}
                }
            }
        }
    }
}

pub(crate) fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    let report = app.report;
    let observed_mean = report
        .observed_mean
        .map(|m| format!("{m:.3}"))
        .unwrap_or_else(|| "-".to_string());
    let header = Paragraph::new(format!(
        " indexstat | {} samples | {} skipped | mean {} (expected {:.3})",
        report.sample_count, report.skipped, observed_mean, report.expected.mean
    ))
    .style(Style::default().fg(Color::Cyan).bold())
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    render_chart(f, chunks[1], app);

    let help = " p:Counts/Proportions  q:Quit";
    let footer = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    f.render_widget(footer, chunks[2]);
}

fn render_chart(f: &mut Frame, area: Rect, app: &App) {
    let observed = app.observed_points();
    let expected = app.expected_points();

    let datasets = vec![
        Dataset::default()
            .name("observed")
            .marker(Marker::HalfBlock)
            .graph_type(GraphType::Bar)
            .style(Style::default().fg(Color::Blue))
            .data(&observed),
        Dataset::default()
            .name("stirling")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Yellow))
            .data(&expected),
    ];

    // x runs from 0 to last + 1 so integer labels sit under the bin centers.
    let last = app.report.histogram.last();
    let x_labels: Vec<String> = (0..=last + 1).map(|k| k.to_string()).collect();

    let y_max = app.y_max();
    let y_labels: Vec<String> = [0.0, y_max / 2.0, y_max]
        .iter()
        .map(|v| {
            if app.proportions {
                format!("{v:.2}")
            } else {
                format!("{v:.0}")
            }
        })
        .collect();

    let title = if app.proportions {
        " Block counts (proportion) "
    } else {
        " Block counts "
    };

    let chart = Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL).title(title))
        .x_axis(
            Axis::default()
                .title("distinct indices")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, (last + 1) as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(if app.proportions { "share" } else { "records" })
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, y_max])
                .labels(y_labels),
        );

    f.render_widget(chart, area);
}

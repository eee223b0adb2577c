//! Ratatui-based terminal dashboard.
//!
//! The TUI provides a settings panel for choosing category, region, year, and
//! trend granularity, then renders the trend chart, breakdown bar charts, and
//! the discount-band profit panel. Changing a filter re-runs the aggregation
//! pipeline; changing granularity only re-selects an already-computed series.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Clear, List, ListItem, Paragraph},
};

use crate::app::pipeline::{self, DashboardData, LoadReport};
use crate::agg::{distinct_categories, distinct_regions, distinct_years};
use crate::cli::DashArgs;
use crate::domain::{DashConfig, NamedValue, SalesRecord};
use crate::error::AppError;
use crate::report::format::{fmt_currency_thousands, fmt_percent, fmt_thousands, truncate};

mod charts;

use charts::TrendChart;

/// Start the TUI.
pub fn run(args: DashArgs) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::runtime(format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(crate::app::dash_config_from_args(&args));
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::runtime(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::runtime(format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Settings fields, top to bottom.
const FIELD_CATEGORY: usize = 0;
const FIELD_REGION: usize = 1;
const FIELD_YEAR: usize = 2;
const FIELD_GRANULARITY: usize = 3;

struct App {
    config: DashConfig,
    records: Vec<SalesRecord>,
    load: LoadReport,
    dash: DashboardData,

    // Filter option lists extracted from the loaded records.
    categories: Vec<String>,
    regions: Vec<String>,
    years: Vec<i32>,

    selected_field: usize,
    status: String,
}

impl App {
    fn new(config: DashConfig) -> Self {
        let mut app = Self {
            config,
            records: Vec::new(),
            load: LoadReport::default(),
            dash: pipeline::build_dashboard(&[], &Default::default()),
            categories: Vec::new(),
            regions: Vec::new(),
            years: Vec::new(),
            selected_field: 0,
            status: "Loading dataset...".to_string(),
        };
        app.reload();
        app
    }

    fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::runtime(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::runtime(format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::runtime(format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code)? {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) -> Result<bool, AppError> {
        match code {
            KeyCode::Char('q') => return Ok(true),
            KeyCode::Up => {
                if self.selected_field > 0 {
                    self.selected_field -= 1;
                }
            }
            KeyCode::Down => {
                if self.selected_field < FIELD_GRANULARITY {
                    self.selected_field += 1;
                }
            }
            KeyCode::Left => self.adjust_field(-1),
            KeyCode::Right => self.adjust_field(1),
            KeyCode::Char('g') => {
                self.config.granularity = self.config.granularity.next();
                // Pure selection: the series were already computed.
                self.status = format!("granularity: {}", self.config.granularity.display_name());
            }
            KeyCode::Char('r') => {
                self.reload();
            }
            KeyCode::Char('e') => {
                let path = self
                    .config
                    .export_csv
                    .clone()
                    .unwrap_or_else(|| "sdash_export.csv".into());
                match crate::io::export::write_dashboard_csv(&path, &self.dash) {
                    Ok(()) => self.status = format!("Exported series to {}", path.display()),
                    Err(err) => self.status = format!("Export failed: {err}"),
                }
            }
            _ => {}
        }

        Ok(false)
    }

    fn adjust_field(&mut self, delta: i32) {
        match self.selected_field {
            FIELD_CATEGORY => {
                self.config.filters.category =
                    cycle_option(self.config.filters.category.take(), &self.categories, delta);
                self.rebuild();
                self.status = format!(
                    "category: {}",
                    self.config.filters.category.as_deref().unwrap_or("All")
                );
            }
            FIELD_REGION => {
                self.config.filters.region =
                    cycle_option(self.config.filters.region.take(), &self.regions, delta);
                self.rebuild();
                self.status = format!(
                    "region: {}",
                    self.config.filters.region.as_deref().unwrap_or("All")
                );
            }
            FIELD_YEAR => {
                let labels: Vec<String> = self.years.iter().map(|y| y.to_string()).collect();
                let current = self.config.filters.year.map(|y| y.to_string());
                let next = cycle_option(current, &labels, delta);
                self.config.filters.year = next.and_then(|s| s.parse().ok());
                self.rebuild();
                self.status = format!(
                    "year: {}",
                    self.config
                        .filters
                        .year
                        .map(|y| y.to_string())
                        .unwrap_or_else(|| "All".to_string())
                );
            }
            FIELD_GRANULARITY => {
                let mut g = self.config.granularity;
                let steps = if delta >= 0 { 1 } else { 3 };
                for _ in 0..steps {
                    g = g.next();
                }
                self.config.granularity = g;
                self.status = format!("granularity: {}", g.display_name());
            }
            _ => {}
        }
    }

    /// Load (or re-load) the dataset and rebuild every view.
    fn reload(&mut self) {
        let (records, load) = pipeline::load_records_or_empty(&self.config);
        self.records = records;
        self.load = load;

        self.categories = distinct_categories(&self.records);
        self.regions = distinct_regions(&self.records);
        self.years = distinct_years(&self.records);

        self.rebuild();
        self.status = match &self.load.diagnostic {
            Some(diagnostic) => diagnostic.clone(),
            None => format!("Loaded {} records.", self.records.len()),
        };
    }

    /// Recompute the dashboard for the current filter state.
    fn rebuild(&mut self) {
        self.dash = pipeline::build_dashboard(&self.records, &self.config.filters);
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled("sdash", Style::default().fg(Color::Cyan)),
            Span::raw(" — SuperStore sales dashboard"),
        ]));

        lines.push(Line::from(Span::styled(
            format!(
                "{} | granularity: {} | n={}",
                crate::report::describe_filters(&self.config.filters),
                self.config.granularity.display_name(),
                self.dash.filtered_count,
            ),
            Style::default().fg(Color::Gray),
        )));

        let stats = &self.dash.stats;
        lines.push(Line::from(Span::styled(
            format!(
                "sales={} | profit={} | margin={} | avg discount={}",
                fmt_currency_thousands(stats.total_sales),
                fmt_currency_thousands(stats.total_profit),
                fmt_percent(stats.profit_margin),
                fmt_percent(stats.avg_discount),
            ),
            Style::default().fg(Color::Gray),
        )));

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(8)])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(rows[0]);

        self.draw_trend_chart(frame, columns[0]);
        self.draw_breakdowns(frame, columns[1]);
        self.draw_settings(frame, rows[1]);
    }

    fn draw_trend_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let title = format!("{} Sales & Profit", self.config.granularity.display_name());
        let block = Block::default().title(title).borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        if self.dash.filtered_count == 0 {
            let msg = Paragraph::new("No data for the current filters.")
                .style(Style::default().fg(Color::Yellow));
            frame.render_widget(msg, inner);
            return;
        }

        let series = self.dash.trend.select(self.config.granularity);
        let labels: Vec<String> = series.iter().map(|b| b.period.clone()).collect();
        let sales: Vec<(f64, f64)> = series
            .iter()
            .enumerate()
            .map(|(i, b)| (i as f64, b.sales))
            .collect();
        let profit: Vec<(f64, f64)> = series
            .iter()
            .enumerate()
            .map(|(i, b)| (i as f64, b.profit))
            .collect();

        let (x_bounds, y_bounds) = chart_bounds(&sales, &profit);
        let widget = TrendChart {
            labels: &labels,
            sales: &sales,
            profit: &profit,
            x_bounds,
            y_bounds,
            y_label: "USD",
            fmt_y: fmt_thousands,
        };
        frame.render_widget(widget, inner);
    }

    fn draw_breakdowns(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(34),
                Constraint::Percentage(33),
                Constraint::Percentage(33),
            ])
            .split(area);

        self.draw_bar_panel(frame, chunks[0], "Ship Mode Sales", &self.dash.ship_mode_sales);
        self.draw_bar_panel(frame, chunks[1], "Segment Sales", &self.dash.segment_sales);
        self.draw_discount_panel(frame, chunks[2]);
    }

    fn draw_bar_panel(
        &self,
        frame: &mut ratatui::Frame<'_>,
        area: Rect,
        title: &str,
        buckets: &[NamedValue],
    ) {
        let bars: Vec<Bar> = buckets
            .iter()
            .map(|bucket| {
                Bar::default()
                    .label(Line::from(truncate(&bucket.name, 14)))
                    .value(bucket.value.max(0.0).round() as u64)
                    .text_value(fmt_thousands(bucket.value))
            })
            .collect();

        let chart = BarChart::default()
            .block(Block::default().title(title.to_string()).borders(Borders::ALL))
            .direction(Direction::Horizontal)
            .bar_width(1)
            .bar_gap(0)
            .data(BarGroup::default().bars(&bars));

        frame.render_widget(chart, area);
    }

    fn draw_discount_panel(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let items: Vec<ListItem> = self
            .dash
            .discount_profit
            .iter()
            .map(|bucket| {
                let style = if bucket.value < 0.0 {
                    Style::default().fg(Color::Red)
                } else {
                    Style::default().fg(Color::Green)
                };
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{:<10} ", bucket.name)),
                    Span::styled(fmt_currency_thousands(bucket.value), style),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().title("Profit by Discount").borders(Borders::ALL));
        frame.render_widget(list, area);
    }

    fn draw_settings(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let filters = &self.config.filters;
        let items = vec![
            ListItem::new(format!(
                "Category: {}",
                filters.category.as_deref().unwrap_or("All")
            )),
            ListItem::new(format!(
                "Region: {}",
                filters.region.as_deref().unwrap_or("All")
            )),
            ListItem::new(format!(
                "Year: {}",
                filters
                    .year
                    .map(|y| y.to_string())
                    .unwrap_or_else(|| "All".to_string())
            )),
            ListItem::new(format!(
                "Granularity: {}",
                self.config.granularity.display_name()
            )),
        ];

        let list = List::new(items)
            .block(Block::default().title("Filters").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ratatui::widgets::ListState::default();
        state.select(Some(self.selected_field));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ select  ←/→ adjust  g granularity  r reload  e export  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(
                &self.status,
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

/// Cycle an optional filter value through `[All, options...]`.
fn cycle_option(current: Option<String>, options: &[String], delta: i32) -> Option<String> {
    if options.is_empty() {
        return None;
    }

    // Index 0 is the "All" sentinel, 1..=len are the concrete options.
    let len = options.len() as i32;
    let current_idx = match &current {
        None => 0,
        Some(value) => options
            .iter()
            .position(|o| o == value)
            .map(|i| i as i32 + 1)
            .unwrap_or(0),
    };

    let next_idx = (current_idx + delta).rem_euclid(len + 1);
    if next_idx == 0 {
        None
    } else {
        Some(options[(next_idx - 1) as usize].clone())
    }
}

/// Pad y and fix x to the period-index space.
fn chart_bounds(sales: &[(f64, f64)], profit: &[(f64, f64)]) -> ([f64; 2], [f64; 2]) {
    let n = sales.len().max(1);
    let x_bounds = [0.0, (n - 1).max(1) as f64];

    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for &(_, y) in sales.iter().chain(profit.iter()) {
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }

    if !y_min.is_finite() || !y_max.is_finite() || y_max <= y_min {
        y_min = 0.0;
        y_max = 1.0;
    }

    let pad = ((y_max - y_min).abs() * 0.05).max(1e-12);
    ([x_bounds[0], x_bounds[1]], [y_min - pad, y_max + pad])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycling_wraps_through_all_sentinel() {
        let options = vec!["East".to_string(), "West".to_string()];

        let first = cycle_option(None, &options, 1);
        assert_eq!(first.as_deref(), Some("East"));

        let second = cycle_option(first, &options, 1);
        assert_eq!(second.as_deref(), Some("West"));

        let wrapped = cycle_option(second, &options, 1);
        assert_eq!(wrapped, None);

        let backwards = cycle_option(None, &options, -1);
        assert_eq!(backwards.as_deref(), Some("West"));
    }

    #[test]
    fn cycling_with_no_options_stays_all() {
        assert_eq!(cycle_option(None, &[], 1), None);
        assert_eq!(cycle_option(Some("x".to_string()), &[], 1), None);
    }

    #[test]
    fn bounds_pad_and_degrade_sanely() {
        let sales = vec![(0.0, 100.0), (1.0, 300.0)];
        let profit = vec![(0.0, -50.0), (1.0, 30.0)];
        let (x, y) = chart_bounds(&sales, &profit);
        assert_eq!(x, [0.0, 1.0]);
        assert!(y[0] < -50.0 && y[1] > 300.0);

        let (x, y) = chart_bounds(&[], &[]);
        assert_eq!(x, [0.0, 1.0]);
        assert_eq!(y, [-1e-12, 1.0 + 1e-12]);
    }
}

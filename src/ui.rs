use crate::histogram::{Histogram, X_LABEL, Y_LABEL};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Histogram,
    Summary,
}

impl Page {
    pub fn next(&self) -> Self {
        match self {
            Page::Histogram => Page::Summary,
            Page::Summary => Page::Histogram,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Page::Histogram => "Histogram",
            Page::Summary => "Summary",
        }
    }
}

pub struct App {
    pub histogram: Histogram,
    pub summary: String,
    pub selected: usize,
    pub current_page: Page,
}

impl App {
    pub fn new(histogram: Histogram, summary: String) -> Self {
        Self {
            histogram,
            summary,
            selected: 0,
            current_page: Page::Histogram,
        }
    }

    pub fn next_page(&mut self) {
        self.current_page = self.current_page.next();
    }

    pub fn next(&mut self) {
        let len = self.histogram.bins();
        if len == 0 {
            return;
        }
        self.selected = if self.selected >= len - 1 { 0 } else { self.selected + 1 };
    }

    pub fn previous(&mut self) {
        let len = self.histogram.bins();
        if len == 0 {
            return;
        }
        self.selected = if self.selected == 0 { len - 1 } else { self.selected - 1 };
    }

    /// Range and count of the highlighted bucket
    pub fn selected_bucket(&self) -> Option<(String, usize)> {
        let count = *self.histogram.counts.get(self.selected)?;
        Some((self.histogram.bucket_label(self.selected), count))
    }
}

/// Open the interactive chart and block until the user quits.
pub fn show_histogram(histogram: &Histogram, summary: &str) -> Result<()> {
    let mut app = App::new(histogram.clone(), summary.to_string());
    run_ui(&mut app)
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(())
                }
                KeyCode::Tab => app.next_page(),
                KeyCode::Right | KeyCode::Char('l') => app.next(),
                KeyCode::Left | KeyCode::Char('h') => app.previous(),
                KeyCode::Home => app.selected = 0,
                KeyCode::End => app.selected = app.histogram.bins().saturating_sub(1),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with navigation
            Constraint::Min(0),    // Content area
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    match app.current_page {
        Page::Histogram => render_histogram(f, chunks[1], app),
        Page::Summary => render_summary(f, chunks[1], app),
    }

    render_status_bar(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let mut tab_spans = vec![];
    for (i, page) in [Page::Histogram, Page::Summary].iter().enumerate() {
        if i > 0 {
            tab_spans.push(Span::raw(" │ "));
        }

        let style = if *page == app.current_page {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        tab_spans.push(Span::styled(page.title().to_string(), style));
    }

    tab_spans.push(Span::raw("  |  "));
    tab_spans.push(Span::styled(
        format!("Lifespans: {}", app.histogram.total()),
        Style::default().fg(Color::White),
    ));

    let header = Paragraph::new(vec![Line::from(tab_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(header, area);
}

fn render_histogram(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let gap: u16 = 1;
    let bar_width = bar_width_for(chunks[0].width, app.histogram.bins(), gap);

    let bars: Vec<Bar> = app
        .histogram
        .counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let low = app.histogram.bucket_range(i).map(|(lo, _)| lo).unwrap_or(0.0);
            let style = if i == app.selected {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::Cyan)
            };
            Bar::default()
                .value(count as u64)
                .label(Line::from(format!("{:.1}k", low / 1000.0)))
                .style(style)
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White))
                .title(format!(" {} ", Y_LABEL)),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(gap)
        .value_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    f.render_widget(chart, chunks[0]);

    let x_label = Paragraph::new(Line::from(Span::styled(
        X_LABEL,
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);

    f.render_widget(x_label, chunks[1]);
}

/// Widest bar that fits `bins` bars in `area_width`, never narrower than 3
fn bar_width_for(area_width: u16, bins: usize, gap: u16) -> u16 {
    let bins = bins.max(1);
    let inner_width = usize::from(area_width.saturating_sub(2));
    let gaps = usize::from(gap).saturating_mul(bins - 1);
    let width = (inner_width.saturating_sub(gaps) / bins).max(3);
    u16::try_from(width).unwrap_or(u16::MAX)
}

fn render_summary(f: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = app
        .summary
        .lines()
        .map(|l| Line::from(format!("  {l}")))
        .collect();

    let summary = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Statistics "),
    );

    f.render_widget(summary, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut status_spans = vec![];

    if let Some((range, count)) = app.selected_bucket() {
        status_spans.push(Span::styled(
            format!(" {}: {} ", X_LABEL, range),
            Style::default().fg(Color::Cyan),
        ));
        status_spans.push(Span::styled(
            format!("{}: {} ", Y_LABEL, count),
            Style::default().fg(Color::Green),
        ));
    }

    status_spans.push(Span::raw(" | "));
    status_spans.push(Span::styled("←/→", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Bucket | "));
    status_spans.push(Span::styled("Tab", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Page | "));
    status_spans.push(Span::styled("q", Style::default().fg(Color::Red)));
    status_spans.push(Span::raw(" Quit"));

    let status_bar = Paragraph::new(vec![Line::from(status_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn app() -> App {
        let hist = Histogram::from_values(&[20_000.0, 25_000.0, 25_100.0, 30_000.0], 10);
        App::new(hist, "Mean: 25,025".to_string())
    }

    #[test]
    fn test_bucket_navigation_wraps() {
        let mut app = app();
        app.previous();
        assert_eq!(app.selected, 9);
        app.next();
        assert_eq!(app.selected, 0);
        app.next();
        assert_eq!(app.selected, 1);
    }

    #[test]
    fn test_selected_bucket() {
        let mut app = app();
        assert_eq!(app.selected_bucket(), Some(("20,000-21,000".to_string(), 1)));
        app.selected = 5;
        assert_eq!(app.selected_bucket().map(|(_, c)| c), Some(2));
    }

    #[test]
    fn test_page_cycle() {
        let mut app = app();
        app.next_page();
        assert_eq!(app.current_page, Page::Summary);
        app.next_page();
        assert_eq!(app.current_page, Page::Histogram);
    }

    #[test]
    fn test_bar_width_for() {
        assert_eq!(bar_width_for(100, 10, 1), 8);
        assert_eq!(bar_width_for(100, 0, 1), 98);
        assert_eq!(bar_width_for(100, 65_536, 1), 3);
        assert_eq!(bar_width_for(0, 10, 1), 3);
    }

    #[test]
    fn test_draws_with_more_bins_than_columns() {
        let hist = Histogram::from_values(&[20_000.0, 30_000.0], 65_536);
        let app = App::new(hist, String::new());
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        terminal.draw(|f| ui(f, &app)).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Lived Days"));
    }

    #[test]
    fn test_draws_axis_labels() {
        let app = app();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        terminal.draw(|f| ui(f, &app)).unwrap();

        let buffer = terminal.backend().buffer().clone();
        let text: String = buffer.content.iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Lived Days"));
        assert!(text.contains("Frequency"));
    }
}

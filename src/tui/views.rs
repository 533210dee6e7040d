//! TUI Views
//!
//! One renderer per top-level view plus the shared chrome (tab bar, footer,
//! help overlay). Everything here reads from [`App`]; nothing mutates state.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Bar, BarChart, BarGroup, Block, Borders, Cell, Clear, List, ListItem, ListState, Paragraph, Row, Table,
        TableState, Tabs, Wrap,
    },
};

use super::app::App;
use super::colors;
use super::state::{InteractionMode, TrendingTab, View};
use crate::catalog::{DATE_FORMAT, Tool};
use crate::display::{
    ABOUT, DISCLAIMER, NO_MATCHES, RESOURCES, TABLE_HEADERS, ViewMode, compact_detail, compact_headline,
    format_users, overview_metrics, star_bar, table_row,
};
use crate::query::{Evaluation, ranked};

/// Height of one card in the cards layout
const CARD_HEIGHT: u16 = 9;

/// Cards per row
const CARDS_PER_ROW: usize = 3;

/// Renderer for one top-level view
pub trait Screen {
    /// Render the view into `area`
    fn render(&self, frame: &mut Frame, area: Rect, app: &App);

    /// Get the view title
    fn title(&self) -> &'static str;
}

/// Draw the whole dashboard
pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    render_header(frame, chunks[0], app);

    let screen: &dyn Screen = match app.state().current_view {
        View::Tools => &ToolsView,
        View::Trending => &TrendingView,
        View::Papers => &PapersView,
    };
    screen.render(frame, chunks[1], app);

    render_footer(frame, chunks[2], app);

    if app.state().interaction_mode == InteractionMode::Help {
        render_help(frame, app);
    }
}

fn focused(active: bool) -> Style {
    if active {
        Style::default().fg(colors::HIGHLIGHT)
    } else {
        Style::default()
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = View::ALL
        .iter()
        .enumerate()
        .map(|(i, v)| Line::from(format!(" {} {} ", i + 1, v.name())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.state().current_view.index())
        .highlight_style(Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" AI Trends & Tools Dashboard ")
                .title_style(Style::default().add_modifier(Modifier::BOLD)),
        );
    frame.render_widget(tabs, area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.state();
    let hints: &[(&str, &str)] = match state.interaction_mode {
        InteractionMode::Search => &[("Enter/Esc", "done"), ("Ctrl+U", "clear"), ("Ctrl+W", "word")],
        InteractionMode::Categories => &[("↑↓", "move"), ("Space", "toggle"), ("Esc", "done")],
        InteractionMode::Help => &[("any key", "close")],
        InteractionMode::Normal => match state.current_view {
            View::Tools => &[
                ("/", "search"),
                ("c", "categories"),
                ("+/-", "rating"),
                ("s", "sort"),
                ("v", "view"),
                ("x", "clear"),
                ("r", "refresh"),
                ("?", "help"),
                ("q", "quit"),
            ],
            View::Trending => &[("←→", "models/repos"), ("Tab", "next view"), ("?", "help"), ("q", "quit")],
            View::Papers => &[("↑↓", "move"), ("Enter", "expand"), ("?", "help"), ("q", "quit")],
        },
    };

    let mut spans = Vec::new();
    for (key, action) in hints {
        spans.push(Span::styled(format!("<{}>", key), Style::default().fg(colors::KEYBIND)));
        spans.push(Span::styled(format!(" {}  ", action), Style::default().fg(colors::DIM)));
    }
    if let Some(message) = &state.status_message {
        spans.push(Span::styled(message.clone(), Style::default().fg(colors::PENDING)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Catalog browser: filter controls, metrics, chart and results
pub struct ToolsView;

impl ToolsView {
    fn render_sidebar(frame: &mut Frame, area: Rect, app: &App) {
        let state = app.state();
        let options = state.category_options.len() as u16;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(options + 2),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        let searching = state.interaction_mode == InteractionMode::Search;
        let text = if searching {
            format!("{}█", state.search.content())
        } else {
            state.search.content().to_string()
        };
        let search = Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(focused(searching))
                .title(" Search "),
        );
        frame.render_widget(search, chunks[0]);

        let picking = state.interaction_mode == InteractionMode::Categories;
        let items: Vec<ListItem> = state
            .category_options
            .iter()
            .map(|c| {
                let mark = if state.selected_categories.contains(c) { "[x]" } else { "[ ]" };
                ListItem::new(format!("{} {}", mark, c))
            })
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(focused(picking))
                    .title(" Categories "),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        let mut list_state = ListState::default().with_selected(picking.then_some(state.category_cursor));
        frame.render_stateful_widget(list, chunks[1], &mut list_state);

        let rating = Paragraph::new(format!("◀ {:.1} ▶", state.min_rating))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" Min Rating "));
        frame.render_widget(rating, chunks[2]);

        let sort_label = state.sort_key.map(|k| k.label()).unwrap_or("Catalog order");
        let sort = Paragraph::new(sort_label).block(Block::default().borders(Borders::ALL).title(" Sort By "));
        frame.render_widget(sort, chunks[3]);

        let view = Paragraph::new(state.view_mode.label()).block(Block::default().borders(Borders::ALL).title(" View "));
        frame.render_widget(view, chunks[4]);
    }

    fn render_metrics(frame: &mut Frame, area: Rect, eval: &Evaluation) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(area);
        for (chunk, (label, value)) in chunks.iter().zip(overview_metrics(eval.total_tools, &eval.summary)) {
            let metric = Paragraph::new(value)
                .alignment(Alignment::Center)
                .style(Style::default().add_modifier(Modifier::BOLD))
                .block(Block::default().borders(Borders::ALL).title(format!(" {} ", label)));
            frame.render_widget(metric, *chunk);
        }
    }

    fn render_chart(frame: &mut Frame, area: Rect, eval: &Evaluation) {
        let bars: Vec<Bar> = ranked(&eval.histogram)
            .into_iter()
            .map(|(name, count)| {
                Bar::default()
                    .value(count as u64)
                    .label(Line::from(name.to_string()))
                    .text_value(count.to_string())
            })
            .collect();
        let chart = BarChart::default()
            .block(Block::default().borders(Borders::ALL).title(" Tools by Category "))
            .direction(Direction::Horizontal)
            .bar_width(1)
            .bar_gap(0)
            .bar_style(Style::default().fg(colors::BAR))
            .value_style(Style::default().fg(Color::Black).bg(colors::BAR))
            .data(BarGroup::default().bars(&bars));
        frame.render_widget(chart, area);
    }

    fn render_results(frame: &mut Frame, area: Rect, app: &App, eval: &Evaluation) {
        let state = app.state();
        let block = Block::default().borders(Borders::ALL).title(format!(
            " Results ({}) - {} ",
            eval.tools.len(),
            state.view_mode.label()
        ));

        if eval.tools.is_empty() {
            let empty = Paragraph::new(NO_MATCHES)
                .style(Style::default().fg(colors::DIM))
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let cursor = state.tool_cursor.min(eval.tools.len() - 1);
        match state.view_mode {
            ViewMode::Table => Self::render_table(frame, area, block, &eval.tools, cursor),
            ViewMode::Compact => Self::render_compact(frame, area, block, &eval.tools, cursor),
            ViewMode::Cards => {
                let inner = block.inner(area);
                frame.render_widget(block, area);
                Self::render_cards(frame, inner, app, &eval.tools, cursor);
            }
        }
    }

    fn render_table(frame: &mut Frame, area: Rect, block: Block, tools: &[&Tool], cursor: usize) {
        let header = Row::new(TABLE_HEADERS.iter().map(|h| Cell::from(*h)))
            .style(Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD));
        let rows: Vec<Row> = tools.iter().map(|t| Row::new(table_row(t))).collect();
        let widths = [
            Constraint::Min(20),
            Constraint::Length(8),
            Constraint::Length(10),
            Constraint::Min(16),
            Constraint::Length(12),
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        let mut table_state = TableState::default().with_selected(Some(cursor));
        frame.render_stateful_widget(table, area, &mut table_state);
    }

    fn render_compact(frame: &mut Frame, area: Rect, block: Block, tools: &[&Tool], cursor: usize) {
        let items: Vec<ListItem> = tools
            .iter()
            .map(|t| {
                ListItem::new(vec![
                    Line::from(Span::styled(
                        compact_headline(t),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(compact_detail(t), Style::default().fg(colors::DIM))),
                ])
            })
            .collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray));
        let mut list_state = ListState::default().with_selected(Some(cursor));
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn render_cards(frame: &mut Frame, area: Rect, app: &App, tools: &[&Tool], cursor: usize) {
        let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
        let cursor_row = cursor / CARDS_PER_ROW;
        let first_row = cursor_row.saturating_sub(visible_rows - 1);

        let row_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(CARD_HEIGHT); visible_rows])
            .split(area);

        for (row_area, chunk) in row_areas
            .iter()
            .zip(tools.chunks(CARDS_PER_ROW).skip(first_row).enumerate())
        {
            let (row_offset, row_tools) = chunk;
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Ratio(1, CARDS_PER_ROW as u32); CARDS_PER_ROW])
                .split(*row_area);
            for (col, tool) in row_tools.iter().enumerate() {
                let index = (first_row + row_offset) * CARDS_PER_ROW + col;
                Self::render_card(frame, cells[col], app, tool, index == cursor);
            }
        }
    }

    fn render_card(frame: &mut Frame, area: Rect, app: &App, tool: &Tool, selected: bool) {
        let logo = app.state().logo_status(&tool.name);
        let badges: Vec<Span> = tool
            .categories
            .iter()
            .flat_map(|c| {
                [
                    Span::styled(format!(" {} ", c), Style::default().fg(Color::Black).bg(colors::BADGE)),
                    Span::raw(" "),
                ]
            })
            .collect();

        let lines = vec![
            Line::from(vec![
                Span::raw(format!("{} ", logo.glyph())),
                Span::styled(tool.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
            ]),
            Line::from(Span::styled(
                format!("{} {:.1}", star_bar(tool.rating), tool.rating),
                Style::default().fg(colors::PENDING),
            )),
            Line::from(badges),
            Line::from(tool.description.clone()),
            Line::from(Span::styled(
                format!(
                    "👥 {} users  💰 {}  🗓️ Updated: {}",
                    format_users(tool.users),
                    tool.pricing,
                    tool.updated.format(DATE_FORMAT)
                ),
                Style::default().fg(colors::DIM),
            )),
        ];

        let border = if selected {
            Style::default().fg(colors::HIGHLIGHT).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let card = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).border_style(border));
        frame.render_widget(card, area);
    }
}

impl Screen for ToolsView {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let eval = app.evaluate();

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(32), Constraint::Min(0)])
            .split(area);
        Self::render_sidebar(frame, columns[0], app);

        let chart_height = (ranked(&eval.histogram).len() as u16).saturating_add(2).min(12);
        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(chart_height),
                Constraint::Min(0),
            ])
            .split(columns[1]);
        Self::render_metrics(frame, main[0], &eval);
        Self::render_chart(frame, main[1], &eval);
        Self::render_results(frame, main[2], app, &eval);
    }

    fn title(&self) -> &'static str {
        "Tools"
    }
}

/// Trending models and repositories
pub struct TrendingView;

impl Screen for TrendingView {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let tab = app.state().trending_tab;
        let tabs = Tabs::new(vec![Line::from(" 🤗 Hugging Face Models "), Line::from(" 🐙 GitHub Repositories ")])
            .select(tab.index())
            .highlight_style(Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL).title(format!(" {} ", self.title())));
        frame.render_widget(tabs, chunks[0]);

        let items: Vec<ListItem> = match tab {
            TrendingTab::Models => app
                .feeds()
                .trending_models()
                .into_iter()
                .map(|m| {
                    ListItem::new(vec![
                        Line::from(Span::styled(m.model_id, Style::default().add_modifier(Modifier::BOLD))),
                        Line::from(Span::styled(
                            format!("⬇️ {} downloads  ⭐ {} stars  {}", format_users(m.downloads), m.stars, m.url),
                            Style::default().fg(colors::DIM),
                        )),
                    ])
                })
                .collect(),
            TrendingTab::Repos => app
                .feeds()
                .trending_repos()
                .into_iter()
                .map(|r| {
                    let url = r.url();
                    ListItem::new(vec![
                        Line::from(vec![
                            Span::styled(r.name, Style::default().add_modifier(Modifier::BOLD)),
                            Span::styled(format!("  ⭐ {}", format_users(r.stars)), Style::default().fg(colors::PENDING)),
                        ]),
                        Line::from(r.description),
                        Line::from(Span::styled(url, Style::default().fg(colors::DIM))),
                    ])
                })
                .collect(),
        };
        let list = List::new(items).block(Block::default().borders(Borders::ALL));
        frame.render_widget(list, chunks[1]);
    }

    fn title(&self) -> &'static str {
        "Trending"
    }
}

/// Recent research papers, expandable
pub struct PapersView;

impl Screen for PapersView {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let state = app.state();
        let items: Vec<ListItem> = app
            .feeds()
            .papers()
            .iter()
            .enumerate()
            .map(|(i, paper)| {
                let expanded = state.expanded_papers.contains(&i);
                let marker = if expanded { "▼" } else { "▶" };
                let mut lines = vec![Line::from(Span::styled(
                    format!("{} {}", marker, paper.heading()),
                    Style::default().add_modifier(Modifier::BOLD),
                ))];
                if expanded {
                    lines.push(Line::from(format!("  Authors: {}", paper.authors)));
                    lines.push(Line::from(format!("  Conference: {}", paper.conference)));
                    lines.push(Line::from(Span::styled(
                        format!("  {}", paper.link),
                        Style::default().fg(colors::KEYBIND),
                    )));
                    lines.push(Line::from(Span::styled(
                        format!("  {}", paper.abstract_text()),
                        Style::default().fg(colors::DIM),
                    )));
                }
                lines.push(Line::from(""));
                ListItem::new(lines)
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" 📄 Latest Research Papers "))
            .highlight_style(Style::default().bg(Color::DarkGray));
        let mut list_state = ListState::default().with_selected(Some(state.paper_cursor));
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn title(&self) -> &'static str {
        "Papers"
    }
}

/// Centered rect taking the given percentages of `area`
fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

fn render_help(frame: &mut Frame, app: &App) {
    let area = centered(frame.area(), 70, 70);
    let heading = Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(Span::styled("About", heading)),
        Line::from(ABOUT),
        Line::from(""),
        Line::from(Span::styled("Resources", heading)),
    ];
    for (title, url) in RESOURCES {
        lines.push(Line::from(vec![
            Span::raw(format!("- {}: ", title)),
            Span::styled(url, Style::default().fg(colors::KEYBIND)),
        ]));
    }
    lines.extend([
        Line::from(""),
        Line::from(Span::styled("Keys", heading)),
        Line::from("Tab/1-3 switch view   / search   c categories   +/- min rating"),
        Line::from("s sort   v view mode   x clear filters   r refresh   q quit"),
        Line::from(""),
        Line::from(format!("Last updated: {}", app.state().last_updated())),
        Line::from(""),
        Line::from(Span::styled(DISCLAIMER, Style::default().add_modifier(Modifier::ITALIC))),
    ]);

    let help = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Help "));
    frame.render_widget(Clear, area);
    frame.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::feeds::StaticFeeds;
    use crate::query::Query;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    fn app() -> App {
        let catalog = Catalog::builtin().unwrap();
        App::new(catalog, Box::new(StaticFeeds::new()), &Query::default(), ViewMode::Cards)
    }

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(160, 60)).unwrap();
        terminal.draw(|f| render(app, f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_tools_view_renders_metrics_and_chart() {
        let screen = draw(&app());
        assert!(screen.contains("Total Tools"));
        assert!(screen.contains("Combined Users"));
        assert!(screen.contains("Tools by Category"));
        assert!(screen.contains("GPT-5 Code"));
    }

    #[test]
    fn test_every_view_mode_renders() {
        let mut app = app();
        for _ in 0..3 {
            press(&mut app, KeyCode::Char('v'));
            let screen = draw(&app);
            assert!(screen.contains(app.state().view_mode.label()));
            assert!(screen.contains("Midjourney v6"));
        }
    }

    #[test]
    fn test_empty_results_message() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        for c in "zzz".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert!(draw(&app).contains("No tools match your filters"));
    }

    #[test]
    fn test_trending_and_papers_views() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        assert!(draw(&app).contains("Hugging Face Models"));

        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Enter);
        let screen = draw(&app);
        assert!(screen.contains("Latest Research Papers"));
        assert!(screen.contains("This paper presents novel approaches"));
    }

    #[test]
    fn test_help_overlay() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        let screen = draw(&app);
        assert!(screen.contains("Resources"));
        assert!(screen.contains("Last updated:"));
    }

    #[test]
    fn test_screen_titles() {
        assert_eq!(ToolsView.title(), View::Tools.name());
        assert_eq!(TrendingView.title(), View::Trending.name());
        assert_eq!(PapersView.title(), View::Papers.name());
    }

    #[test]
    fn test_centered_is_inside() {
        let area = Rect::new(0, 0, 100, 50);
        let inner = centered(area, 70, 70);
        assert_eq!(inner.x, 15);
        assert_eq!(inner.width, 70);
        assert!(inner.bottom() <= area.bottom());
    }
}

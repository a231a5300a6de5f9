use crate::app::App;
use crate::data::{Tick, COLUMNS};
use crate::ui::widgets::tables::scroll_offset;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

pub fn render_ticks_view(app: &App, f: &mut Frame<'_>) {
    let area = f.area();

    if app.dataset.is_empty() {
        let block = Block::default()
            .title("Ticks")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));
        let paragraph = Paragraph::new("No ticks loaded. Set a profile URL (u) and refresh (r).")
            .block(block)
            .alignment(ratatui::layout::Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(COLUMNS.iter().map(|column| Cell::from(*column))).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let total_rows = app.dataset.len();
    let max_visible_rows = area.height.saturating_sub(7) as usize;
    let offset = scroll_offset(total_rows, max_visible_rows, app.selected_tick_index);

    let visible_ticks = app.dataset.ticks.iter().skip(offset).take(max_visible_rows);

    let rows = visible_ticks.enumerate().map(|(i, tick)| {
        let is_selected = i + offset == app.selected_tick_index;
        let style = if is_selected {
            Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        tick_row(tick).style(style)
    });

    let table = Table::new(rows, column_widths())
        .header(header)
        .block(
            Block::default()
                .title(format!(
                    "Ticks ({} of {})",
                    app.selected_tick_index + 1,
                    total_rows
                ))
                .borders(Borders::ALL),
        )
        .column_spacing(1);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(area);

    f.render_widget(table, chunks[0]);

    let help_text = vec![
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(": Main   "),
        Span::styled(
            "↑/↓ PgUp/PgDn Home/End",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(": Navigate   "),
        Span::styled(
            "r",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(": Refresh   "),
        Span::styled(
            "q",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(": Quit"),
    ];

    let help_paragraph = Paragraph::new(TextLine::from(help_text))
        .block(Block::default().borders(Borders::TOP))
        .alignment(ratatui::layout::Alignment::Center);

    f.render_widget(help_paragraph, chunks[1]);
}

/// One table row in the canonical column order.
pub fn tick_row(tick: &Tick) -> Row<'static> {
    Row::new(vec![
        Cell::from(tick.date.to_string()),
        Cell::from(tick.route.clone()),
        Cell::from(tick.style.clone()),
        Cell::from(tick.lead_style.clone()),
        Cell::from(tick.route_type.clone()),
        Cell::from(tick.grade.to_string()),
        Cell::from(tick.subgrade.map(String::from).unwrap_or_default()),
    ])
}

pub const fn column_widths() -> [Constraint; 7] {
    [
        Constraint::Length(10),
        Constraint::Min(20),
        Constraint::Length(8),
        Constraint::Length(10),
        Constraint::Length(14),
        Constraint::Length(5),
        Constraint::Length(8),
    ]
}

use crate::app::App;
use crate::data::COLUMNS;
use crate::ui::screens::ticks::{column_widths, tick_row};
use crate::ui::widgets::tables::scroll_offset;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

pub fn render_first_sends_view(app: &App, f: &mut Frame<'_>) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    render_filter_line(app, f, chunks[0]);

    if app.first_sends.is_empty() {
        let block = Block::default()
            .title("First Sends")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));
        let message = if app.dataset.is_empty() {
            "No ticks loaded. Set a profile URL (u) and refresh (r)."
        } else {
            "No first sends match. Clear or change the route type filter (f)."
        };
        let paragraph = Paragraph::new(message)
            .block(block)
            .alignment(ratatui::layout::Alignment::Center);
        f.render_widget(paragraph, chunks[1]);
    } else {
        render_sends_table(app, f, chunks[1]);
    }

    render_help_line(f, chunks[2]);
}

fn render_filter_line(app: &App, f: &mut Frame<'_>, area: ratatui::layout::Rect) {
    let editing = app.editing == Some(crate::app::EditTarget::RouteTypeFilter);
    let cursor = if editing && app.animation_counter.sin() > 0.0 {
        "█"
    } else {
        ""
    };

    let filter_display = if app.route_type_filter.is_empty() && !editing {
        Span::styled("(all route types)", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(format!("{}{cursor}", app.route_type_filter))
    };

    let line = TextLine::from(vec![
        Span::styled("Route type filter: ", Style::default().fg(Color::Green)),
        filter_display,
    ]);

    let block = Block::default()
        .title("Filter (f to edit, Enter to apply)")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if editing { Color::Green } else { Color::Gray }));

    f.render_widget(Paragraph::new(line).block(block), area);
}

fn render_sends_table(app: &App, f: &mut Frame<'_>, area: ratatui::layout::Rect) {
    let header = Row::new(COLUMNS.iter().map(|column| Cell::from(*column))).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let total_rows = app.first_sends.len();
    let max_visible_rows = area.height.saturating_sub(4) as usize;
    let offset = scroll_offset(total_rows, max_visible_rows, app.selected_send_index);

    let visible_sends = app.first_sends.iter().skip(offset).take(max_visible_rows);

    let rows = visible_sends.enumerate().map(|(i, send)| {
        let is_selected = i + offset == app.selected_send_index;
        let style = if is_selected {
            Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        tick_row(send).style(style)
    });

    let table = Table::new(rows, column_widths())
        .header(header)
        .block(
            Block::default()
                .title(format!(
                    "First Sends ({} of {})",
                    app.selected_send_index + 1,
                    total_rows
                ))
                .borders(Borders::ALL),
        )
        .column_spacing(1);

    f.render_widget(table, area);
}

fn render_help_line(f: &mut Frame<'_>, area: ratatui::layout::Rect) {
    let help_text = vec![
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(": Main   "),
        Span::styled(
            "f",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(": Filter   "),
        Span::styled(
            "↑/↓",
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

    f.render_widget(help_paragraph, area);
}

use crate::app::{App, EditTarget};
use crate::data::stats::sends_by_year;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_main(app: &mut App, f: &mut Frame<'_>) {
    let main_layout = build_main_layout(f);

    render_title_section(f, main_layout[0]);
    render_profile_section(app, f, main_layout[1]);
    render_summary_section(app, f, main_layout[2]);
    render_status_section(app, f, main_layout[3]);
    render_shortcuts(f, main_layout[4]);
}

fn build_main_layout(f: &Frame<'_>) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title area
            Constraint::Length(5), // Profile input area
            Constraint::Min(5),    // Summary area
            Constraint::Length(3), // Status area
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area().inner(Margin::new(2, 1)))
        .to_vec()
}

fn render_title_section(f: &mut Frame<'_>, area: Rect) {
    let title_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let title_paragraph = Paragraph::new(TextLine::from(vec![
        Span::styled(
            "Tick ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Dashboard",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .block(title_block)
    .alignment(Alignment::Center);

    f.render_widget(title_paragraph, area);
}

fn render_profile_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let editing = app.editing == Some(EditTarget::ProfileUrl);

    let content_block = Block::default()
        .title(" Profile URL (u to edit, Enter to load) ")
        .title_style(Style::default().fg(Color::Green))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if editing { Color::Green } else { Color::Gray }));

    let cursor = if editing && app.animation_counter.sin() > 0.0 {
        "█"
    } else {
        ""
    };

    let url_line = if app.profile_url.is_empty() && !editing {
        TextLine::from(Span::styled(
            "https://www.mountainproject.com/user/<user-id>/<first>-<last>",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        TextLine::from(Span::raw(format!("{}{cursor}", app.profile_url)))
    };

    let filter_line = TextLine::from(vec![
        Span::styled("Route type filter: ", Style::default().fg(Color::Green)),
        if app.route_type_filter.is_empty() {
            Span::styled("(all)", Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(app.route_type_filter.clone())
        },
    ]);

    let paragraph = Paragraph::new(Text::from(vec![url_line, TextLine::from(""), filter_line]))
        .block(content_block);

    f.render_widget(paragraph, area);
}

fn render_summary_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let summary_block = Block::default()
        .title(" Summary ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if app.dataset.is_empty() {
        let paragraph = Paragraph::new("No ticks loaded yet.")
            .block(summary_block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let mut lines = vec![
        TextLine::from(format!("Ticks:       {}", app.dataset.len())),
        TextLine::from(format!("First sends: {}", app.first_sends.len())),
    ];

    if let (Some(easiest), Some(hardest)) = (
        app.first_sends.iter().min_by_key(|send| send.grade),
        app.first_sends.iter().max_by_key(|send| send.grade),
    ) {
        lines.push(TextLine::from(format!(
            "Send grades: {} to {}",
            easiest.grade_label(),
            hardest.grade_label()
        )));
    }

    let years = sends_by_year(&app.first_sends);
    if let (Some((first_year, _)), Some((last_year, _))) = (years.first(), years.last()) {
        lines.push(TextLine::from(format!(
            "Seasons:     {first_year} to {last_year}"
        )));
    }

    if let Some(latest) = app.first_sends.last() {
        lines.push(TextLine::from(""));
        lines.push(TextLine::from(format!(
            "Latest send: {} ({}) on {}",
            latest.route,
            latest.grade_label(),
            latest.date
        )));
    }

    let paragraph = Paragraph::new(Text::from(lines)).block(summary_block);
    f.render_widget(paragraph, area);
}

fn render_status_section(app: &mut App, f: &mut Frame<'_>, area: Rect) {
    let status_block = Block::default()
        .title(" Status ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    if app.refreshing {
        let throbber = throbber_widgets_tui::Throbber::default()
            .label("Refreshing ticks...")
            .style(Style::default().fg(Color::Cyan))
            .throbber_set(throbber_widgets_tui::BRAILLE_SIX)
            .use_type(throbber_widgets_tui::WhichUse::Spin);
        let inner = area.inner(Margin::new(1, 1));
        f.render_widget(status_block, area);
        f.render_stateful_widget(throbber, inner, &mut app.throbber_state);
        return;
    }

    let refresh_label = app.last_refresh_label();
    let line = TextLine::from(vec![
        Span::raw(app.status_message.clone()),
        Span::raw("   "),
        if refresh_label.is_empty() {
            Span::raw("")
        } else {
            Span::styled(
                format!("Last refresh: {refresh_label}"),
                Style::default().fg(Color::DarkGray),
            )
        },
    ]);

    f.render_widget(Paragraph::new(line).block(status_block), area);
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect) {
    let shortcuts = TextLine::from(vec![
        Span::styled("u", Style::default().fg(Color::Yellow)),
        Span::raw(":url  "),
        Span::styled("r", Style::default().fg(Color::Yellow)),
        Span::raw(":refresh  "),
        Span::styled("t", Style::default().fg(Color::Yellow)),
        Span::raw(":ticks  "),
        Span::styled("s", Style::default().fg(Color::Yellow)),
        Span::raw(":first sends  "),
        Span::styled("c", Style::default().fg(Color::Yellow)),
        Span::raw(":charts  "),
        Span::styled("f", Style::default().fg(Color::Yellow)),
        Span::raw(":filter  "),
        Span::styled("F1", Style::default().fg(Color::Yellow)),
        Span::raw(":help  "),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(":quit"),
    ]);

    f.render_widget(Paragraph::new(shortcuts).alignment(Alignment::Center), area);
}

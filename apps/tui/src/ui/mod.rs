// UI module for ticklog-tui
// Handles all UI rendering functions

pub mod screens;
pub mod widgets;

use crate::app::state::AppScreen;
use crate::app::App;
use crate::ui::widgets::popup::centered_rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn ui(app: &mut App, f: &mut Frame<'_>) {
    match app.screen {
        AppScreen::Main => screens::main::render_main(app, f),
        AppScreen::Ticks => screens::ticks::render_ticks_view(app, f),
        AppScreen::FirstSends => screens::first_sends::render_first_sends_view(app, f),
        AppScreen::Charts => screens::charts::render_charts_view(app, f),
    }

    if app.show_help {
        render_help_popup(f);
    }
}

fn render_help_popup(f: &mut Frame<'_>) {
    let area = centered_rect(60, 60, f.area());
    f.render_widget(Clear, area);

    let lines = vec![
        TextLine::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from("u          Edit the profile URL (Enter loads it)"),
        TextLine::from("f          Edit the route type filter"),
        TextLine::from("r          Refresh the tick data"),
        TextLine::from("m / Esc    Main screen"),
        TextLine::from("t          Tick table"),
        TextLine::from("s          First sends"),
        TextLine::from("c          Charts (Tab switches panels)"),
        TextLine::from("↑/↓        Navigate tables (PgUp/PgDn jump 5)"),
        TextLine::from("F1         Toggle this help"),
        TextLine::from("q          Quit"),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Press Esc to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let popup = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(popup, area);
}

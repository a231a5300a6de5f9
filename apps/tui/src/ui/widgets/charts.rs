use crate::app::App;
use crate::data::stats::{grade_histogram, route_type_counts, sends_by_year, year_grade_counts};
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph, Tabs,
};
use ratatui::Frame;

pub fn render_chart_tabs(app: &App, f: &mut Frame<'_>, area: Rect) {
    let titles = ["Grades", "Years"]
        .iter()
        .map(|title| TextLine::from(*title))
        .collect::<Vec<_>>();

    let tabs = Tabs::new(titles)
        .select(app.chart_tab_index)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw("|"));

    f.render_widget(tabs, area);
}

pub fn render_chart_panel(app: &App, f: &mut Frame<'_>, area: Rect) {
    let chart_split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area.inner(Margin::new(0, 1)));

    if app.chart_tab_index == 0 {
        render_grade_histogram(app, f, chart_split[0]);
        render_route_type_barchart(app, f, chart_split[1]);
    } else {
        render_year_grade_scatter(app, f, chart_split[0]);
        render_year_barchart(app, f, chart_split[1]);
    }
}

fn render_empty(title: &'static str, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let paragraph = Paragraph::new("No first sends to chart")
        .block(block)
        .alignment(ratatui::layout::Alignment::Center);
    f.render_widget(paragraph, area);
}

/// Histogram of first-send counts per grade, zero-filled so the bars form a
/// contiguous axis from the easiest to the hardest send.
pub fn render_grade_histogram(app: &App, f: &mut Frame<'_>, area: Rect) {
    let histogram = grade_histogram(&app.first_sends);
    if histogram.is_empty() {
        render_empty("First Sends by Grade", f, area);
        return;
    }

    let labels: Vec<String> = histogram.iter().map(|(grade, _)| grade.to_string()).collect();
    let bars: Vec<Bar<'_>> = histogram
        .iter()
        .zip(&labels)
        .map(|((_, count), label)| {
            Bar::default()
                .value(*count)
                .label(TextLine::from(label.as_str()))
                .style(Style::default().fg(Color::Cyan))
                .value_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        })
        .collect();

    let max_value = histogram.iter().map(|(_, count)| *count).max().unwrap_or(0).max(1);

    let chart = BarChart::default()
        .block(
            Block::default()
                .title("First Sends by Grade")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .data(BarGroup::default().bars(&bars))
        .max(max_value)
        .bar_gap(1)
        .bar_width(4);

    f.render_widget(chart, area);
}

pub fn render_year_barchart(app: &App, f: &mut Frame<'_>, area: Rect) {
    let by_year = sends_by_year(&app.first_sends);
    if by_year.is_empty() {
        render_empty("First Sends by Year", f, area);
        return;
    }

    let labels: Vec<String> = by_year.iter().map(|(year, _)| year.to_string()).collect();
    let bars: Vec<Bar<'_>> = by_year
        .iter()
        .zip(&labels)
        .map(|((_, count), label)| {
            Bar::default()
                .value(*count)
                .label(TextLine::from(label.as_str()))
                .style(Style::default().fg(Color::Yellow))
                .value_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        })
        .collect();

    let max_value = by_year.iter().map(|(_, count)| *count).max().unwrap_or(0).max(1);

    let chart = BarChart::default()
        .block(
            Block::default()
                .title("First Sends by Year")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .data(BarGroup::default().bars(&bars))
        .max(max_value)
        .bar_gap(1)
        .bar_width(6);

    f.render_widget(chart, area);
}

pub fn render_route_type_barchart(app: &App, f: &mut Frame<'_>, area: Rect) {
    let counts = route_type_counts(&app.dataset.ticks);
    if counts.is_empty() {
        render_empty("Ticks by Route Type", f, area);
        return;
    }

    let bars: Vec<Bar<'_>> = counts
        .iter()
        .map(|(route_type, count)| {
            Bar::default()
                .value(*count)
                .label(TextLine::from(route_type.as_str()))
                .style(Style::default().fg(Color::Green))
                .value_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        })
        .collect();

    let max_value = counts.iter().map(|(_, count)| *count).max().unwrap_or(0).max(1);

    let chart = BarChart::default()
        .block(
            Block::default()
                .title("Ticks by Route Type")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .data(BarGroup::default().bars(&bars))
        .max(max_value)
        .bar_gap(1)
        .bar_width(8);

    f.render_widget(chart, area);
}

/// Terminal rendition of the year-by-grade surface: one scatter point per
/// (grade, year) cell that has at least one send.
pub fn render_year_grade_scatter(app: &App, f: &mut Frame<'_>, area: Rect) {
    let cells = year_grade_counts(&app.first_sends);
    if cells.is_empty() {
        render_empty("Grades over the Years", f, area);
        return;
    }

    let points: Vec<(f64, f64)> = cells
        .iter()
        .map(|(year, grade, _)| (f64::from(*grade), f64::from(*year)))
        .collect();

    let grade_min = cells.iter().map(|(_, grade, _)| *grade).min().unwrap_or(0);
    let grade_max = cells.iter().map(|(_, grade, _)| *grade).max().unwrap_or(0);
    let year_min = cells.iter().map(|(year, _, _)| *year).min().unwrap_or(0);
    let year_max = cells.iter().map(|(year, _, _)| *year).max().unwrap_or(0);

    let datasets = vec![Dataset::default()
        .name("sends")
        .marker(Marker::Dot)
        .graph_type(GraphType::Scatter)
        .style(Style::default().fg(Color::Cyan))
        .data(&points)];

    let x_labels = vec![
        Span::raw(grade_min.to_string()),
        Span::raw(grade_max.to_string()),
    ];
    let y_labels = vec![
        Span::raw(year_min.to_string()),
        Span::raw(year_max.to_string()),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title("Grades over the Years")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .x_axis(
            Axis::default()
                .title("Grade")
                .style(Style::default().fg(Color::Gray))
                .bounds([f64::from(grade_min) - 0.5, f64::from(grade_max) + 0.5])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Year")
                .style(Style::default().fg(Color::Gray))
                .bounds([f64::from(year_min) - 0.5, f64::from(year_max) + 0.5])
                .labels(y_labels),
        );

    f.render_widget(chart, area);
}

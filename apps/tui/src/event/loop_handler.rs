use color_eyre::Result;
use crossterm::event::{self, Event};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::fmt;
use std::io::Stdout;
use tokio::task::JoinHandle;

use crate::app::{handle_input, App, AppActions};
use crate::data::stats::{grade_histogram, route_type_counts, sends_by_year};
use crate::data::TickDataset;
use crate::error::DataError;
use crate::ui;

// Define states for the refresh cycle
#[derive(Clone, Copy, PartialEq, Debug)]
enum RefreshState {
    Idle,
    Fetching,
    Success,
    Error,
}

impl fmt::Display for RefreshState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Fetching => write!(f, "Fetching"),
            Self::Success => write!(f, "Success"),
            Self::Error => write!(f, "Error"),
        }
    }
}

// Define events for the refresh cycle
#[derive(Debug)]
enum RefreshEvent {
    Start,
    Finished(TickDataset),
    Failed(String),
    Reset,
}

impl fmt::Display for RefreshEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "Start"),
            Self::Finished(dataset) => write!(f, "Finished({} ticks)", dataset.len()),
            Self::Failed(msg) => write!(f, "Failed({msg})"),
            Self::Reset => write!(f, "Reset"),
        }
    }
}

// Custom error type for invalid state transitions
#[derive(Debug)]
struct StateTransitionError {
    from: RefreshState,
    event: String,
}

impl fmt::Display for StateTransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid transition from {} with event {}",
            self.from, self.event
        )
    }
}

impl std::error::Error for StateTransitionError {}

/// State machine serializing refreshes: while one fetch-rebuild cycle is in
/// flight another cannot start, which is the explicit single-flight
/// guarantee the UI relies on.
struct RefreshMachine {
    state: RefreshState,
}

impl RefreshMachine {
    const fn new() -> Self {
        Self {
            state: RefreshState::Idle,
        }
    }

    const fn state(&self) -> RefreshState {
        self.state
    }

    // Process an event, updating the machine and the app
    fn process_event(
        &mut self,
        event: RefreshEvent,
        app: &mut App,
    ) -> std::result::Result<(), StateTransitionError> {
        let next = match (self.state, event) {
            (RefreshState::Idle, RefreshEvent::Start) => {
                app.refreshing = true;
                app.status_message = "Refreshing ticks...".to_string();
                RefreshState::Fetching
            }
            (RefreshState::Fetching, RefreshEvent::Finished(dataset)) => {
                app.refreshing = false;
                app.apply_dataset(dataset);
                RefreshState::Success
            }
            (RefreshState::Fetching, RefreshEvent::Failed(msg)) => {
                // Previous dataset stays in place; only the status changes.
                app.refreshing = false;
                app.status_message = format!("Refresh failed: {msg} (showing previous data)");
                RefreshState::Error
            }
            (RefreshState::Success | RefreshState::Error, RefreshEvent::Reset) => {
                RefreshState::Idle
            }
            (state, event) => {
                return Err(StateTransitionError {
                    from: state,
                    event: event.to_string(),
                })
            }
        };

        self.state = next;
        Ok(())
    }
}

/// Run the application in headless mode (no UI)
pub async fn run_headless(app: &mut App, json: bool) -> Result<()> {
    let dataset = app.actions.refresh(&app.profile_url).await?;
    app.apply_dataset(dataset);

    if json {
        render_headless_json(app)?;
    } else {
        render_headless_stats(app);
    }

    Ok(())
}

fn render_headless_stats(app: &App) {
    let stats = build_headless_stats(app);

    println!("\nTick Dashboard Stats");
    println!("====================");
    println!("Total ticks: {}", stats.total_ticks);
    println!("First sends: {}", stats.total_first_sends);
    if let Some(filter) = &stats.route_type_filter {
        println!("Route type filter: {filter}");
    }

    println!("\nTicks by Route Type:");
    for (route_type, count) in &stats.by_route_type {
        println!("- {route_type}: {count}");
    }

    println!("\nFirst Sends by Grade:");
    for (grade, count) in &stats.by_grade {
        println!("- {grade}: {count}");
    }

    println!("\nFirst Sends by Year:");
    for (year, count) in &stats.by_year {
        println!("- {year}: {count}");
    }

    println!("\nRecent First Sends:");
    for send in &stats.recent_sends {
        println!(
            "- {} | {} | {} | {}",
            send.date, send.route, send.route_type, send.grade
        );
    }
}

fn render_headless_json(app: &App) -> Result<()> {
    let stats = build_headless_stats(app);
    let json = serde_json::to_string_pretty(&stats)?;
    println!("{json}");
    Ok(())
}

fn build_headless_stats(app: &App) -> HeadlessStats {
    let by_route_type = route_type_counts(&app.dataset.ticks);
    let by_grade = grade_histogram(&app.first_sends);
    let by_year = sends_by_year(&app.first_sends);

    let recent_sends = app
        .first_sends
        .iter()
        .rev()
        .take(5)
        .map(|send| HeadlessSend {
            date: send.date.to_string(),
            route: send.route.clone(),
            route_type: send.route_type.clone(),
            grade: send.grade_label(),
        })
        .collect();

    HeadlessStats {
        total_ticks: app.dataset.len(),
        total_first_sends: app.first_sends.len(),
        route_type_filter: app.route_type_query().map(ToString::to_string),
        by_route_type,
        by_grade,
        by_year,
        recent_sends,
    }
}

#[derive(serde::Serialize)]
struct HeadlessStats {
    total_ticks: usize,
    total_first_sends: usize,
    route_type_filter: Option<String>,
    by_route_type: Vec<(String, u64)>,
    by_grade: Vec<(u8, u64)>,
    by_year: Vec<(i32, u64)>,
    recent_sends: Vec<HeadlessSend>,
}

#[derive(serde::Serialize)]
struct HeadlessSend {
    date: String,
    route: String,
    route_type: String,
    grade: String,
}

/// Run the main application event loop
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    let mut refresh_machine = RefreshMachine::new();
    let mut in_flight: Option<JoinHandle<Result<TickDataset, DataError>>> = None;

    loop {
        // Update animations
        app.update();

        // Draw the UI with better error context
        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        // Handle events
        if matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) => {
                    handle_input(app, key.code);
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    // Force a redraw after resize
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        // Non-fatal redraw error
                    }
                }
                Ok(Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_))
                | Err(_) => {
                    // Ignore non-key events for now
                }
            }
        }

        // Start a refresh only when the machine is idle; requests arriving
        // while a fetch is in flight wait for the next pass.
        if app.refresh_requested && refresh_machine.state() == RefreshState::Idle {
            app.refresh_requested = false;

            if refresh_machine
                .process_event(RefreshEvent::Start, app)
                .is_err()
            {
                continue;
            }

            // Fetch and rebuild on a background task so the UI keeps
            // drawing the throbber.
            let client = app.actions.client();
            let profile_url = app.profile_url.clone();
            in_flight = Some(tokio::spawn(AppActions::refresh_with(client, profile_url)));
        }

        // Collect a finished refresh without blocking the draw loop
        if in_flight.as_ref().is_some_and(JoinHandle::is_finished) {
            if let Some(handle) = in_flight.take() {
                let refresh_event = match handle.await {
                    Ok(Ok(dataset)) => RefreshEvent::Finished(dataset),
                    Ok(Err(e)) => RefreshEvent::Failed(e.to_string()),
                    Err(e) => RefreshEvent::Failed(format!("refresh task panicked: {e}")),
                };

                if refresh_machine.process_event(refresh_event, app).is_err() {
                    // Non-fatal state transition error
                }
                if refresh_machine
                    .process_event(RefreshEvent::Reset, app)
                    .is_err()
                {
                    // Non-fatal reset error
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Tick;
    use chrono::NaiveDate;

    fn dataset() -> TickDataset {
        TickDataset {
            ticks: vec![Tick {
                date: NaiveDate::from_ymd_opt(2023, 5, 14).unwrap(),
                route: "Moonshine".to_string(),
                style: "lead".to_string(),
                lead_style: "onsight".to_string(),
                route_type: "sport".to_string(),
                grade: 11,
                subgrade: Some('a'),
            }],
        }
    }

    #[tokio::test]
    async fn refresh_cycle_walks_idle_fetching_success_idle() {
        let mut app = App::new();
        app.profile_url = "https://example.com/user/1/jane".to_string();
        let mut machine = RefreshMachine::new();

        machine.process_event(RefreshEvent::Start, &mut app).unwrap();
        assert_eq!(machine.state(), RefreshState::Fetching);
        assert!(app.refreshing);

        machine
            .process_event(RefreshEvent::Finished(dataset()), &mut app)
            .unwrap();
        assert_eq!(machine.state(), RefreshState::Success);
        assert!(!app.refreshing);
        assert_eq!(app.dataset.len(), 1);
        assert_eq!(app.first_sends.len(), 1);

        machine.process_event(RefreshEvent::Reset, &mut app).unwrap();
        assert_eq!(machine.state(), RefreshState::Idle);
    }

    #[tokio::test]
    async fn failed_refresh_keeps_the_previous_dataset() {
        let mut app = App::new();
        app.profile_url = "https://example.com/user/1/jane".to_string();
        app.apply_dataset(dataset());
        let mut machine = RefreshMachine::new();

        machine.process_event(RefreshEvent::Start, &mut app).unwrap();
        machine
            .process_event(RefreshEvent::Failed("connection refused".to_string()), &mut app)
            .unwrap();

        assert_eq!(machine.state(), RefreshState::Error);
        assert_eq!(app.dataset.len(), 1);
        assert!(app.status_message.contains("connection refused"));
    }

    #[tokio::test]
    async fn starting_while_fetching_is_rejected() {
        let mut app = App::new();
        let mut machine = RefreshMachine::new();

        machine.process_event(RefreshEvent::Start, &mut app).unwrap();
        assert!(machine.process_event(RefreshEvent::Start, &mut app).is_err());
        assert_eq!(machine.state(), RefreshState::Fetching);
    }

    #[tokio::test]
    async fn headless_stats_summarize_the_dataset() {
        let mut app = App::new();
        app.profile_url = "https://example.com/user/1/jane".to_string();
        app.apply_dataset(dataset());

        let stats = build_headless_stats(&app);
        assert_eq!(stats.total_ticks, 1);
        assert_eq!(stats.total_first_sends, 1);
        assert_eq!(stats.by_route_type, vec![("sport".to_string(), 1)]);
        assert_eq!(stats.by_grade, vec![(11, 1)]);
        assert_eq!(stats.recent_sends[0].grade, "5.11a");
    }
}

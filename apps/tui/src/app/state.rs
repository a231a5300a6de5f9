use std::time::Instant;

use chrono::{DateTime, Local};
use throbber_widgets_tui::ThrobberState;

use crate::app::actions::AppActions;
use crate::config::init_app_config;
use crate::data::{first_sends, Tick, TickDataset};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AppScreen {
    Main,
    Ticks,
    FirstSends,
    Charts,
}

/// Which text field is currently receiving keystrokes.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EditTarget {
    ProfileUrl,
    RouteTypeFilter,
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub screen: AppScreen,
    pub actions: AppActions,
    pub profile_url: String,
    pub route_type_filter: String,
    pub editing: Option<EditTarget>,
    pub dataset: TickDataset,
    pub first_sends: Vec<Tick>,
    pub status_message: String,
    pub last_refresh: Option<DateTime<Local>>,
    pub refresh_requested: bool,
    pub refreshing: bool,
    pub show_help: bool,
    pub selected_tick_index: usize,
    pub selected_send_index: usize,
    pub chart_tab_index: usize,
    pub animation_counter: f64,
    pub last_frame: Instant,
    pub throbber_state: ThrobberState,
}

impl App {
    pub fn new() -> Self {
        Self {
            running: true,
            screen: AppScreen::Main,
            actions: AppActions::new(),
            profile_url: String::new(),
            route_type_filter: String::new(),
            editing: None,
            dataset: TickDataset::default(),
            first_sends: Vec::new(),
            status_message: String::new(),
            last_refresh: None,
            refresh_requested: false,
            refreshing: false,
            show_help: false,
            selected_tick_index: 0,
            selected_send_index: 0,
            chart_tab_index: 0,
            animation_counter: 0.0,
            last_frame: Instant::now(),
            throbber_state: ThrobberState::default(),
        }
    }

    /// Pull the configured defaults and queue an initial refresh when a
    /// profile URL is already known.
    pub fn initialize_config(&mut self) {
        let (profile_url, route_type_filter) = init_app_config();
        self.profile_url = profile_url;
        self.route_type_filter = route_type_filter;

        if self.profile_url.trim().is_empty() {
            self.status_message = "Enter a profile URL (u) and refresh (r)".to_string();
        } else {
            self.refresh_requested = true;
        }
    }

    pub fn update(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        // Update animation counter (cycles between 0 and 2*PI)
        self.animation_counter += delta.as_secs_f64() * 2.0;
        if self.animation_counter > 2.0 * std::f64::consts::PI {
            self.animation_counter -= 2.0 * std::f64::consts::PI;
        }

        if self.refreshing {
            self.throbber_state.calc_next();
        }
    }

    pub fn request_refresh(&mut self) {
        self.refresh_requested = true;
    }

    /// Install a freshly built dataset, recompute the derived first sends
    /// and stamp the refresh time. An empty profile URL clears the stamp,
    /// matching the "no profile loaded" state.
    pub fn apply_dataset(&mut self, dataset: TickDataset) {
        self.dataset = dataset;
        self.recompute_first_sends();

        if self.profile_url.trim().is_empty() {
            self.last_refresh = None;
            self.status_message = "No profile loaded".to_string();
        } else {
            self.last_refresh = Some(Local::now());
            self.status_message = format!(
                "Loaded {} ticks, {} first sends",
                self.dataset.len(),
                self.first_sends.len()
            );
        }

        self.clamp_selection();
    }

    /// Derived view only. The dataset itself is untouched.
    pub fn recompute_first_sends(&mut self) {
        self.first_sends = first_sends(&self.dataset, self.route_type_query());
        self.clamp_selection();
    }

    /// An empty or blank filter means "all route types".
    pub fn route_type_query(&self) -> Option<&str> {
        let filter = self.route_type_filter.trim();
        (!filter.is_empty()).then_some(filter)
    }

    pub fn last_refresh_label(&self) -> String {
        self.last_refresh.map_or_else(String::new, |stamp| {
            stamp.format("%Y-%m-%d %H:%M:%S").to_string()
        })
    }

    fn clamp_selection(&mut self) {
        self.selected_tick_index = self
            .selected_tick_index
            .min(self.dataset.len().saturating_sub(1));
        self.selected_send_index = self
            .selected_send_index
            .min(self.first_sends.len().saturating_sub(1));
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

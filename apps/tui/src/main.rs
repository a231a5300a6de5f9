use clap::Parser;
use color_eyre::Result;
use ticklog_tui::app::App;
use ticklog_tui::{cli, event, terminal};

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = cli::CliArgs::parse();
    args.apply_env_overrides();

    // Initialize application state from the environment
    let mut app = App::new();
    app.initialize_config();

    // Run headless when asked to, or when there is no terminal to draw on
    if args.headless || !is_terminal() {
        return event::run_headless(&mut app, args.json).await;
    }

    // Setup terminal
    let mut terminal = terminal::setup_terminal()?;

    // Run the application
    let result = event::run(&mut terminal, &mut app).await;

    // Restore terminal
    terminal::cleanup_terminal_state(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}

use crate::api::{ApiClient, CardsApi, UsersApi};
use crate::config::Config;
use crate::logger::Logger;
use crate::storage::TokenStore;
use crate::ui::app_component::AppComponent;
use crate::ui::core::{actions::Action, Component, EventHandler, EventType};
use anyhow::Context;
use crossterm::{
    event::DisableMouseCapture,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::sync::Arc;

/// Build the API modules and run the dashboard until the user quits
pub async fn run_app(config: Config, logger: Logger, tokens: Arc<dyn TokenStore>) -> anyhow::Result<()> {
    let client = Arc::new(ApiClient::new(&config.api, tokens).context("Failed to build HTTP client")?);
    let users_api = Arc::new(UsersApi::new(Arc::clone(&client)));
    let cards_api = Arc::new(CardsApi::new(client));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppComponent::new(&config, users_api, cards_api, Some(logger));
    let mut event_handler = EventHandler::new();

    app.start();
    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| app.render(f, f.area()))?;
            needs_render = false;
        }

        let event = event_handler.next_event().await?;

        match event {
            EventType::Key(_) | EventType::Resize(_, _) => {
                app.handle_event(event);
                needs_render = true;
            }
            EventType::Tick => {
                let background_actions = app.process_background_actions();
                if !background_actions.is_empty() {
                    needs_render = true;
                }

                for action in background_actions {
                    // Process action through component hierarchy first
                    let processed_action = app.update(action);
                    if let Action::Quit = app.handle_app_action(processed_action) {
                        return Ok(());
                    }
                }
            }
            EventType::Other => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

use crate::api::{Card, CardsApi, User, UsersApi};
use crate::config::Config;
use crate::constants::{
    ERROR_CARD_DELETE_FAILED, ERROR_CARD_STATUS_FAILED, ERROR_LOAD_CARDS_FAILED, ERROR_LOAD_USERS_FAILED,
    ERROR_USER_DELETE_FAILED, ERROR_USER_STATUS_FAILED, ERROR_USER_UPDATE_FAILED, SUCCESS_CARD_ACTIVATED,
    SUCCESS_CARD_DEACTIVATED, SUCCESS_CARD_DELETED, SUCCESS_USER_ACTIVATED, SUCCESS_USER_BLOCKED,
    SUCCESS_USER_DELETED, SUCCESS_USER_UPDATED,
};
use crate::logger::Logger;
use crate::table::{DataSource, EntityKind, EntityRef, LoadStatus};
use crate::ui::components::{DataTableComponent, DialogComponent};
use crate::ui::core::{
    actions::{Action, DialogType, MutationOrigin, RequestId},
    event_handler::EventType,
    task_manager::TaskManager,
    Component,
};
use crate::ui::layout::LayoutManager;
use crate::ui::screens::{cards_table, users_table, SCREENS};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{debug, error, info};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::sync::Arc;
use tokio::sync::mpsc;

pub struct AppComponent {
    // Component composition
    users: DataTableComponent<User>,
    cards: DataTableComponent<Card>,
    dialog: DialogComponent,
    active: EntityKind,

    // Services
    users_api: Arc<UsersApi>,
    cards_api: Arc<CardsApi>,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,

    // Simple UI state
    status_message: Option<String>,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: &Config, users_api: Arc<UsersApi>, cards_api: Arc<CardsApi>, logger: Option<Logger>) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();
        let mut dialog = DialogComponent::new();
        if let Some(logger) = logger {
            dialog.set_logger(logger);
        }

        Self {
            users: users_table(&config.table, config.display.clone()),
            cards: cards_table(&config.table, config.display.clone()),
            dialog,
            active: EntityKind::User,
            users_api,
            cards_api,
            task_manager,
            background_action_rx,
            status_message: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn active_screen(&self) -> EntityKind {
        self.active
    }

    pub fn users(&self) -> &DataTableComponent<User> {
        &self.users
    }

    pub fn cards(&self) -> &DataTableComponent<Card> {
        &self.cards
    }

    pub fn dialog(&self) -> &DialogComponent {
        &self.dialog
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Get the number of active background tasks
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    /// Load the first screen on startup
    pub fn start(&mut self) {
        info!("Loading initial {} page", self.active);
        self.fetch(self.active);
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> Option<Action> {
        let action = match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Tab => Action::NextScreen,
            KeyCode::Char('1') | KeyCode::F(1) => Action::SwitchScreen(EntityKind::User),
            KeyCode::Char('2') | KeyCode::F(2) => Action::SwitchScreen(EntityKind::Card),
            _ => return None,
        };
        debug!("Global key {:?} -> {:?}", key.code, action);
        Some(action)
    }

    /// Issue a list request for the current query of `kind`
    fn fetch(&mut self, kind: EntityKind) {
        match kind {
            EntityKind::User => {
                let ticket = self.users.begin_fetch();
                let api = Arc::clone(&self.users_api);
                let description = format!("load users page {}", ticket.params.page);
                self.task_manager.spawn_fetch(description, move || async move {
                    let result = api.list(&ticket.params).await;
                    Action::UsersLoaded { ticket, result }
                });
            }
            EntityKind::Card => {
                let ticket = self.cards.begin_fetch();
                let api = Arc::clone(&self.cards_api);
                let description = format!("load cards page {}", ticket.params.page);
                self.task_manager.spawn_fetch(description, move || async move {
                    let result = api.list(&ticket.params).await;
                    Action::CardsLoaded { ticket, result }
                });
            }
        }
    }

    fn switch_screen(&mut self, kind: EntityKind) {
        if self.active == kind {
            return;
        }
        info!("Switching to {} screen", kind);
        self.active = kind;

        let never_loaded = match kind {
            EntityKind::User => self.users.controller().status() == LoadStatus::Idle,
            EntityKind::Card => self.cards.controller().status() == LoadStatus::Idle,
        };
        if never_loaded {
            self.fetch(kind);
        }
    }

    fn set_active(&mut self, entity: EntityRef, active: bool, request: RequestId) {
        let (failure, success) = match (entity.kind, active) {
            (EntityKind::User, true) => (ERROR_USER_STATUS_FAILED, SUCCESS_USER_ACTIVATED),
            (EntityKind::User, false) => (ERROR_USER_STATUS_FAILED, SUCCESS_USER_BLOCKED),
            (EntityKind::Card, true) => (ERROR_CARD_STATUS_FAILED, SUCCESS_CARD_ACTIVATED),
            (EntityKind::Card, false) => (ERROR_CARD_STATUS_FAILED, SUCCESS_CARD_DEACTIVATED),
        };
        info!("Setting {} {} active={}", entity.kind, entity.id, active);

        match entity.kind {
            EntityKind::User => {
                let api = Arc::clone(&self.users_api);
                self.task_manager
                    .spawn_mutation(entity.kind, MutationOrigin::Dialog(request), failure, move || async move {
                        api.set_active(&entity.id, active).await.map(|()| success.to_string())
                    });
            }
            EntityKind::Card => {
                let api = Arc::clone(&self.cards_api);
                self.task_manager
                    .spawn_mutation(entity.kind, MutationOrigin::Dialog(request), failure, move || async move {
                        api.set_active(&entity.id, active).await.map(|()| success.to_string())
                    });
            }
        }
    }

    fn delete(&mut self, entity: EntityRef) {
        info!("Deleting {} {}", entity.kind, entity.id);
        match entity.kind {
            EntityKind::User => {
                let api = Arc::clone(&self.users_api);
                self.task_manager.spawn_mutation(
                    entity.kind,
                    MutationOrigin::Direct,
                    ERROR_USER_DELETE_FAILED,
                    move || async move {
                        DataSource::delete(api.as_ref(), &entity.id)
                            .await
                            .map(|()| SUCCESS_USER_DELETED.to_string())
                    },
                );
            }
            EntityKind::Card => {
                let api = Arc::clone(&self.cards_api);
                self.task_manager.spawn_mutation(
                    entity.kind,
                    MutationOrigin::Direct,
                    ERROR_CARD_DELETE_FAILED,
                    move || async move {
                        DataSource::delete(api.as_ref(), &entity.id)
                            .await
                            .map(|()| SUCCESS_CARD_DELETED.to_string())
                    },
                );
            }
        }
    }

    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                info!("Quitting");
                self.users.controller_mut().unmount();
                self.cards.controller_mut().unmount();
                self.task_manager.cancel_all_tasks();
                self.should_quit = true;
                Action::None
            }
            Action::SwitchScreen(kind) => {
                self.switch_screen(kind);
                Action::None
            }
            Action::NextScreen => {
                let position = SCREENS.iter().position(|kind| *kind == self.active).unwrap_or(0);
                self.switch_screen(SCREENS[(position + 1) % SCREENS.len()]);
                Action::None
            }
            Action::FetchPage(kind) => {
                self.fetch(kind);
                Action::None
            }
            Action::UsersLoaded { ticket, result } => {
                if let Err(e) = &result {
                    error!("{}: {}", ERROR_LOAD_USERS_FAILED, e);
                }
                if !self.users.apply_result(&ticket, result) {
                    debug!("Discarded stale users response #{}", ticket.seq);
                }
                Action::None
            }
            Action::CardsLoaded { ticket, result } => {
                if let Err(e) = &result {
                    error!("{}: {}", ERROR_LOAD_CARDS_FAILED, e);
                }
                if !self.cards.apply_result(&ticket, result) {
                    debug!("Discarded stale cards response #{}", ticket.seq);
                }
                Action::None
            }
            Action::UpdateUser { id, patch, request } => {
                info!("Updating user {}", id);
                let api = Arc::clone(&self.users_api);
                self.task_manager.spawn_mutation(
                    EntityKind::User,
                    MutationOrigin::Dialog(request),
                    ERROR_USER_UPDATE_FAILED,
                    move || async move { api.update(&id, &patch).await.map(|()| SUCCESS_USER_UPDATED.to_string()) },
                );
                Action::None
            }
            Action::SetActive { entity, active, request } => {
                self.set_active(entity, active, request);
                Action::None
            }
            Action::DeleteEntity(entity) => {
                self.delete(entity);
                Action::None
            }
            Action::MutationSucceeded { kind, message, .. } => {
                info!("{}", message);
                self.status_message = Some(message);
                // refetch rather than patching rows locally
                self.fetch(kind);
                Action::None
            }
            Action::MutationFailed { message, .. } => {
                self.status_message = Some(message.clone());
                self.dialog.update(Action::ShowDialog(DialogType::Error(message)))
            }
            Action::ShowDialog(dialog_type) => {
                // normally consumed by the dialog component already
                self.dialog.update(Action::ShowDialog(dialog_type))
            }
            Action::HideDialog
            | Action::ApplyFilters { .. }
            | Action::ToggleColumn { .. }
            | Action::None => Action::None,
        }
    }

    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        // Process all available background actions
        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }

        let finished = self.task_manager.cleanup_finished_tasks();
        if finished > 0 {
            debug!("Background: cleaned up {} finished tasks", finished);
        }

        actions
    }

    pub fn handle_event(&mut self, event_type: EventType) -> Action {
        let action = match event_type {
            EventType::Key(key) => {
                if self.dialog.is_visible() {
                    // Dialog has priority when visible
                    self.dialog.handle_key_events(key)
                } else {
                    self.handle_key_events(key)
                }
            }
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        let action = self.update(action);
        self.handle_app_action(action)
    }

    fn render_tabs(&self, f: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for (index, kind) in SCREENS.iter().enumerate() {
            let label = match kind {
                EntityKind::User => " 1 Users ",
                EntityKind::Card => " 2 Cards ",
            };
            let style = if *kind == self.active {
                Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            if index > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(label, style));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_status_bar(&self, f: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        let running = self.task_manager.task_count();
        if running > 0 {
            spans.push(Span::styled(
                format!("⟳ {} request(s) • ", running),
                Style::default().fg(Color::Yellow),
            ));
        }
        match &self.status_message {
            Some(message) => spans.push(Span::raw(message.clone())),
            None => spans.push(Span::styled(
                "? help • / filter • s sort • e edit • b status • d delete • q quit",
                Style::default().fg(Color::Gray),
            )),
        }
        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if let Some(action) = self.handle_global_key(key) {
            return action;
        }
        match self.active {
            EntityKind::User => self.users.handle_key_events(key),
            EntityKind::Card => self.cards.handle_key_events(key),
        }
    }

    fn update(&mut self, action: Action) -> Action {
        // Process through component hierarchy
        let action = self.dialog.update(action);
        let action = self.users.update(action);
        self.cards.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let areas = LayoutManager::main_layout(rect);

        self.render_tabs(f, areas[0]);
        match self.active {
            EntityKind::User => self.users.render(f, areas[1]),
            EntityKind::Card => self.cards.render(f, areas[1]),
        }
        self.render_status_bar(f, areas[2]);

        // Render dialog on top if visible
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}

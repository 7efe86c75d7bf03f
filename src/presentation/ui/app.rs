//! Main application orchestrator.

use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::time::interval;
use tracing::info;

use crate::application::services::NotificationManager;
use crate::application::use_cases::{LoginUseCase, RegisterUseCase};
use crate::domain::{Role, Session};
use crate::infrastructure::config::AppConfig;
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::theme::Theme;
use crate::presentation::ui::{
    LoginAction, LoginScreen, RegisterAction, RegisterScreen, SplashScreen, StaffScreen,
    VisitorAction, VisitorScreen,
};
use crate::presentation::widgets::NotificationPopup;

const ANIMATION_TICK_RATE: Duration = Duration::from_millis(33);

const LOGIN_FAILED_MESSAGE: &str = "Die eingegebene Login-Nr. ist falsch.";
const REGISTRATION_FAILED_MESSAGE: &str = "Die eingegebene Login-Nr. ist falsch";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Access,
    Loading,
    Main,
    Exiting,
}

enum CurrentScreen {
    Login(LoginScreen),
    Register(RegisterScreen),
    Splash(SplashScreen),
    Visitor(Box<VisitorScreen>),
    Staff(StaffScreen),
}

pub struct App {
    state: AppState,
    screen: CurrentScreen,
    login_use_case: LoginUseCase,
    register_use_case: RegisterUseCase,
    notifications: NotificationManager,
    pending_session: Option<Session>,
    theme: Theme,
    enable_animations: bool,
    timestamp_format: String,
}

impl App {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            state: AppState::Access,
            screen: CurrentScreen::Login(LoginScreen::new()),
            login_use_case: LoginUseCase,
            register_use_case: RegisterUseCase,
            notifications: NotificationManager::new(Duration::from_secs(
                config.ui.notification_duration,
            )),
            pending_session: None,
            theme: Theme::new(&config.theme.accent_color),
            enable_animations: config.ui.enable_animations,
            timestamp_format: config.ui.timestamp_format.clone(),
        }
    }

    /// # Errors
    /// Returns error if the terminal cannot be drawn to.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut animation_interval = interval(ANIMATION_TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while self.state != AppState::Exiting {
            tokio::select! {
                _ = animation_interval.tick() => {
                    self.notifications.tick();

                    if let CurrentScreen::Splash(splash) = &mut self.screen {
                        splash.tick(ANIMATION_TICK_RATE);
                        if splash.state.animation_complete
                            && let Some(session) = self.pending_session.take()
                        {
                            self.enter_main(session);
                        }
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }

                Some(Ok(event)) = terminal_events.next() => {
                    if self.handle_terminal_event(event) == EventResult::Exit {
                        self.state = AppState::Exiting;
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }
            }
        }

        info!("application exiting normally");
        Ok(())
    }

    fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) => self.handle_key(key),
            _ => EventResult::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if EventHandler::is_force_quit_event(&key) {
            return EventResult::Exit;
        }

        match &mut self.screen {
            CurrentScreen::Login(screen) => {
                if key.code == crossterm::event::KeyCode::Esc {
                    return EventResult::Exit;
                }
                match screen.handle_key(key) {
                    LoginAction::Submit => self.submit_login(),
                    LoginAction::SwitchToRegister => {
                        self.screen = CurrentScreen::Register(RegisterScreen::new());
                    }
                    LoginAction::None => {}
                }
            }
            CurrentScreen::Register(screen) => {
                if key.code == crossterm::event::KeyCode::Esc {
                    return EventResult::Exit;
                }
                match screen.handle_key(key) {
                    RegisterAction::Submit => self.submit_registration(),
                    RegisterAction::SwitchToLogin => {
                        self.screen = CurrentScreen::Login(LoginScreen::new());
                    }
                    RegisterAction::None => {}
                }
            }
            CurrentScreen::Splash(_) => {}
            CurrentScreen::Visitor(screen) => match screen.handle_key(key) {
                VisitorAction::Quit => return EventResult::Exit,
                VisitorAction::OrderPlaced { total } => {
                    self.notifications.info(
                        "Bestellung",
                        format!("Bestellung über {total:.2} Gutscheine aufgegeben"),
                    );
                }
                VisitorAction::CreditsAdded { amount } => {
                    self.notifications.info(
                        "Guthaben",
                        format!("{amount:.2} Gutscheine aufgeladen"),
                    );
                }
                VisitorAction::None => {}
            },
            CurrentScreen::Staff(_) => {
                if matches!(
                    key.code,
                    crossterm::event::KeyCode::Char('q') | crossterm::event::KeyCode::Esc
                ) {
                    return EventResult::Exit;
                }
            }
        }

        EventResult::Continue
    }

    fn submit_login(&mut self) {
        let CurrentScreen::Login(ref mut screen) = self.screen else {
            return;
        };

        match self.login_use_case.execute(screen.login_number()) {
            Ok(session) => self.start_loading(session),
            Err(_) => {
                screen.clear();
                self.notifications.error("Anmeldung", LOGIN_FAILED_MESSAGE);
            }
        }
    }

    fn submit_registration(&mut self) {
        let CurrentScreen::Register(ref mut screen) = self.screen else {
            return;
        };

        match self.register_use_case.execute(screen.login_number()) {
            Ok(session) => self.start_loading(session),
            Err(_) => {
                screen.clear();
                self.notifications
                    .error("Registrierung", REGISTRATION_FAILED_MESSAGE);
            }
        }
    }

    fn start_loading(&mut self, session: Session) {
        if !self.enable_animations {
            self.enter_main(session);
            return;
        }

        self.state = AppState::Loading;
        let mut splash = SplashScreen::new();
        splash.set_data_ready();
        self.screen = CurrentScreen::Splash(splash);
        self.pending_session = Some(session);
    }

    fn enter_main(&mut self, session: Session) {
        info!(login_number = session.login_number(), role = %session.role(), "entering main view");
        self.state = AppState::Main;
        self.screen = match session.role() {
            Role::Visitor => CurrentScreen::Visitor(Box::new(VisitorScreen::new(
                session,
                self.timestamp_format.clone(),
                self.theme,
            ))),
            Role::Admin | Role::Vendor => CurrentScreen::Staff(StaffScreen::new(session)),
        };
    }

    fn render(&mut self, frame: &mut Frame) {
        match &mut self.screen {
            CurrentScreen::Login(screen) => frame.render_widget(&*screen, frame.area()),
            CurrentScreen::Register(screen) => frame.render_widget(&*screen, frame.area()),
            CurrentScreen::Splash(screen) => frame.render_widget(screen, frame.area()),
            CurrentScreen::Visitor(screen) => screen.render(frame.area(), frame.buffer_mut()),
            CurrentScreen::Staff(screen) => frame.render_widget(&*screen, frame.area()),
        }

        if let Some(notification) = self.notifications.current() {
            frame.render_widget(
                NotificationPopup::new(notification, &self.theme),
                frame.area(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn typed(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.handle_key(key(KeyCode::Char(ch)));
        }
    }

    fn login(app: &mut App, number: &str) {
        typed(app, number);
        app.handle_key(key(KeyCode::Tab));
        typed(app, "pw");
        app.handle_key(key(KeyCode::Enter));
    }

    fn register(app: &mut App, number: &str) {
        typed(app, number);
        app.handle_key(key(KeyCode::Tab));
        typed(app, "pw");
        app.handle_key(key(KeyCode::Tab));
        typed(app, "pw");
        app.handle_key(key(KeyCode::Enter));
    }

    fn app() -> App {
        let mut config = AppConfig::default();
        config.ui.enable_animations = false;
        App::new(&config)
    }

    #[test]
    fn test_starts_on_login_screen() {
        let app = app();
        assert_eq!(app.state, AppState::Access);
        assert!(matches!(app.screen, CurrentScreen::Login(_)));
    }

    #[test]
    fn test_visitor_login_reaches_landing_page() {
        let mut app = app();
        login(&mut app, "B-111-111");

        assert_eq!(app.state, AppState::Main);
        assert!(matches!(app.screen, CurrentScreen::Visitor(_)));
    }

    #[test]
    fn test_admin_login_reaches_staff_screen() {
        let mut app = app();
        login(&mut app, "A-000-001");

        assert!(matches!(app.screen, CurrentScreen::Staff(_)));
    }

    #[test]
    fn test_failed_login_clears_input_and_queues_toast() {
        let mut app = app();
        login(&mut app, "X-999-999");

        assert_eq!(app.state, AppState::Access);
        let CurrentScreen::Login(ref screen) = app.screen else {
            panic!("expected login screen");
        };
        assert!(screen.login_number().is_empty());

        let toast = app.notifications.current().expect("toast queued");
        assert_eq!(toast.message, "Die eingegebene Login-Nr. ist falsch.");
    }

    #[test]
    fn test_registration_is_case_sensitive() {
        let mut app = app();
        let ctrl_r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
        app.handle_key(ctrl_r);
        assert!(matches!(app.screen, CurrentScreen::Register(_)));

        // Lowercase works for login but not for registration.
        register(&mut app, "b-111-111");

        assert_eq!(app.state, AppState::Access);
        let toast = app.notifications.current().expect("toast queued");
        assert_eq!(toast.message, "Die eingegebene Login-Nr. ist falsch");
    }

    #[test]
    fn test_registration_reaches_landing_page() {
        let mut app = app();
        let ctrl_r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
        app.handle_key(ctrl_r);
        register(&mut app, "B-111-111");

        assert_eq!(app.state, AppState::Main);
        assert!(matches!(app.screen, CurrentScreen::Visitor(_)));
    }

    #[test]
    fn test_splash_shown_when_animations_enabled() {
        let config = AppConfig::default();
        let mut app = App::new(&config);
        login(&mut app, "B-111-111");

        assert_eq!(app.state, AppState::Loading);
        assert!(matches!(app.screen, CurrentScreen::Splash(_)));
    }

    #[test]
    fn test_ctrl_c_exits_everywhere() {
        let mut app = app();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.handle_key(ctrl_c), EventResult::Exit);
    }
}

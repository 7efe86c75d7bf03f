//! Screen composition and the application orchestrator.

mod app;
mod login_screen;
mod register_screen;
mod splash_screen;
mod staff_screen;
mod visitor_screen;

pub use app::App;
pub use login_screen::{LoginAction, LoginScreen};
pub use register_screen::{RegisterAction, RegisterScreen};
pub use splash_screen::SplashScreen;
pub use staff_screen::StaffScreen;
pub use visitor_screen::{ActivePage, VisitorAction, VisitorScreen};

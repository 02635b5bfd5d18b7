//! Screen routes targeted by navigation side effects.

/// Destinations the orchestrators can send the user to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    SignUp,
    Home,
}

impl Route {
    /// Router path as the presentation layer addresses it.
    pub fn as_path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::SignUp => "/signUp",
            Route::Home => "/home",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_path())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Stock,
    Profile,
}

/// Session state, owned by the caller of the session handlers rather than
/// held globally.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub authenticated: bool,
    pub page: Page,
}

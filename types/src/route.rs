//! Page routes of the landing site.

/// Whether a page is wrapped in navigation, footer and call-to-action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLayout {
    Chrome,
    Bare,
}

/// Strip a query/fragment suffix and trailing slashes from a request path.
///
/// The root keeps its single slash. A path without a leading slash that
/// trims to nothing stays empty.
#[must_use]
pub fn normalize_path(path: &str) -> &str {
    let path = path
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() && path.starts_with('/') {
        "/"
    } else {
        trimmed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Home,
    Privacy,
    DeleteAccount,
    DeleteData,
    NotFound,
}

impl Route {
    /// Routes reachable from the navigation bar, in display order.
    pub const NAVIGABLE: [Route; 4] = [
        Route::Home,
        Route::Privacy,
        Route::DeleteAccount,
        Route::DeleteData,
    ];

    /// Resolve a request path against the route table.
    ///
    /// Paths are compared after [`normalize_path`]; anything unmatched lands
    /// on [`Route::NotFound`].
    #[must_use]
    pub fn resolve(path: &str) -> Self {
        match normalize_path(path) {
            "/" => Route::Home,
            "/privacy" => Route::Privacy,
            "/delete-account" => Route::DeleteAccount,
            "/delete-data" => Route::DeleteData,
            _ => Route::NotFound,
        }
    }

    /// Canonical path for this route. `NotFound` has no canonical path.
    #[must_use]
    pub const fn path(self) -> Option<&'static str> {
        match self {
            Route::Home => Some("/"),
            Route::Privacy => Some("/privacy"),
            Route::DeleteAccount => Some("/delete-account"),
            Route::DeleteData => Some("/delete-data"),
            Route::NotFound => None,
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Route::Home => "Inicio",
            Route::Privacy => "Política de privacidad",
            Route::DeleteAccount => "Eliminar cuenta",
            Route::DeleteData => "Eliminar datos",
            Route::NotFound => "Página no encontrada",
        }
    }

    #[must_use]
    pub const fn layout(self) -> PageLayout {
        match self {
            Route::NotFound => PageLayout::Bare,
            _ => PageLayout::Chrome,
        }
    }

    /// Only the home page hosts the product showcase.
    #[must_use]
    pub const fn hosts_showcase(self) -> bool {
        matches!(self, Route::Home)
    }
}

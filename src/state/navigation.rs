//! Navigation routes and the side menu table
//!
//! A fixed set of hash-style routes, each mapping 1:1 to a page. Unknown
//! paths redirect to the dashboard.

use serde::{Deserialize, Serialize};

/// All navigable pages of the console
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    Dashboard,
    Messages,
    Content,
    Users,
    UserDetail(String),
    Finance,
    Media,
    Logs,
    Settings,
    Profile,
    Login,
}

impl Route {
    /// Resolve a path to a route; anything unrecognized falls back to the
    /// dashboard (the redirect behavior of the legacy router).
    pub fn parse(path: &str) -> Route {
        let trimmed = path.trim_start_matches('/');
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Dashboard,
            ["messages"] => Route::Messages,
            ["content"] => Route::Content,
            ["users"] => Route::Users,
            ["users", user_id] => Route::UserDetail(user_id.to_string()),
            ["finance"] => Route::Finance,
            ["media"] => Route::Media,
            ["logs"] => Route::Logs,
            ["settings"] => Route::Settings,
            ["profile"] => Route::Profile,
            ["login"] => Route::Login,
            _ => Route::Dashboard,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "/".to_string(),
            Route::Messages => "/messages".to_string(),
            Route::Content => "/content".to_string(),
            Route::Users => "/users".to_string(),
            Route::UserDetail(user_id) => format!("/users/{}", user_id),
            Route::Finance => "/finance".to_string(),
            Route::Media => "/media".to_string(),
            Route::Logs => "/logs".to_string(),
            Route::Settings => "/settings".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::Login => "/login".to_string(),
        }
    }

    /// Routes reachable without a session
    pub fn is_public(&self) -> bool {
        matches!(self, Route::Login)
    }
}

/// One entry of the side menu
#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

/// The side menu, in display order
pub const NAV_ITEMS: [NavItem; 8] = [
    NavItem { label: "Tableau de bord", path: "/" },
    NavItem { label: "Messages", path: "/messages" },
    NavItem { label: "Gestion Contenu", path: "/content" },
    NavItem { label: "Utilisateurs", path: "/users" },
    NavItem { label: "Finance & Abos", path: "/finance" },
    NavItem { label: "Médiathèque", path: "/media" },
    NavItem { label: "Logs & Système", path: "/logs" },
    NavItem { label: "Paramètres", path: "/settings" },
];

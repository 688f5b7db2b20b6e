use crate::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    Home,
    Map,
    Events,
    Profile,
    Quiz,
    Preferences,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Home => "/home",
            Route::Map => "/map",
            Route::Events => "/events",
            Route::Profile => "/profile",
            Route::Quiz => "/quiz",
            Route::Preferences => "/preferences",
        }
    }

    /// Unknown paths land on the landing page.
    pub fn from_path(path: &str) -> Route {
        match path.trim_end_matches('/') {
            "/home" => Route::Home,
            "/map" => Route::Map,
            "/events" => Route::Events,
            "/profile" => Route::Profile,
            "/quiz" => Route::Quiz,
            "/preferences" => Route::Preferences,
            _ => Route::Landing,
        }
    }

    pub fn requires_login(&self) -> bool {
        !matches!(self, Route::Landing)
    }

    /// Where a navigation to `self` ends up for `session`.
    pub fn resolve(self, session: &Session) -> Route {
        if self.requires_login() && !session.is_logged_in() {
            return Route::Landing;
        }

        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavItem {
    Link { route: Route, label: &'static str },
    Login,
    Register,
    Logout,
}

/// Navigation bar entries for the current session.
pub fn navbar(session: &Session) -> Vec<NavItem> {
    if !session.is_logged_in() {
        return vec![NavItem::Login, NavItem::Register];
    }

    vec![
        NavItem::Link {
            route: Route::Home,
            label: "Home",
        },
        NavItem::Link {
            route: Route::Map,
            label: "Map",
        },
        NavItem::Link {
            route: Route::Events,
            label: "My Events",
        },
        NavItem::Link {
            route: Route::Profile,
            label: "Profile",
        },
        NavItem::Logout,
    ]
}

use moodmeet_shared::user::{ApiStatus, AuthResponse};

use crate::{
    Api, ClientError, LoginForm, NavItem, RegisterForm, Result, Route, Session, SessionStore,
    navbar,
};

/// Application root: owns the session and the current route.
pub struct Shell<A, S> {
    api: A,
    store: S,
    session: Session,
    route: Route,
}

fn user_id(res: AuthResponse) -> Result<i64> {
    match (res.status, res.user_id) {
        (ApiStatus::Success, Some(id)) => Ok(id),
        (_, _) => Err(ClientError::Rejected(
            res.error.unwrap_or_else(|| "Unknown error".to_owned()),
        )),
    }
}

impl<A: Api, S: SessionStore> Shell<A, S> {
    /// Starts on the landing page, restoring a remembered session if any.
    pub fn new(api: A, store: S) -> Self {
        let session = store.load().unwrap_or_default();
        let route = if session.is_logged_in() {
            Route::Home
        } else {
            Route::Landing
        };

        Self {
            api,
            store,
            session,
            route,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn navbar(&self) -> Vec<NavItem> {
        navbar(&self.session)
    }

    pub fn navigate(&mut self, route: Route) -> Route {
        self.route = route.resolve(&self.session);
        self.route
    }

    #[tracing::instrument(skip_all, fields(email = %form.email))]
    pub async fn login(&mut self, form: &LoginForm) -> Result<()> {
        let request = form.submit()?;
        let id = user_id(self.api.login(&request).await?)?;

        self.session.login(id);

        if form.remember_me {
            if let Err(err) = self.store.save(&self.session) {
                tracing::warn!(error = %err, "failed to remember session");
            }
        }

        self.navigate(Route::Home);

        Ok(())
    }

    /// Registers, signs in and continues with the preference quiz.
    #[tracing::instrument(skip_all, fields(email = %form.email))]
    pub async fn register(&mut self, form: &RegisterForm) -> Result<()> {
        let request = form.submit()?;
        let id = user_id(self.api.register(&request).await?)?;

        self.session.login(id);
        self.navigate(Route::Quiz);

        Ok(())
    }

    /// Called once the preference flow has been submitted.
    pub fn complete_preferences(&mut self) {
        self.navigate(Route::Home);
    }

    pub fn logout(&mut self) {
        self.session.logout();

        if let Err(err) = self.store.clear() {
            tracing::warn!(error = %err, "failed to forget session");
        }

        self.navigate(Route::Landing);
    }
}

//! Per-client screen state
//!
//! A session owns the navigation shell, one instance of each screen, and the
//! notification surface they share. Every change goes through the
//! transition methods here; the HTTP layer only serializes [`SessionView`].

use serde::Serialize;

use crate::browser::{BrowseScreen, RecipeBrowser, LOAD_FAILURE_MESSAGE};
use crate::navigation::{FocusEvent, Tab, TabShell, SEARCH_PLACEHOLDER};
use crate::notification::{Notification, NotificationView};
use crate::recipe::NewRecipe;
use crate::store::{DocumentId, DocumentStore, StoreError};
use crate::submission::{submission_notification, RecipeForm, SubmitError};

#[derive(Debug, Clone, Default)]
pub struct Session {
    shell: TabShell,
    browser: RecipeBrowser,
    form: RecipeForm,
    notification: Notification,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tab(&self) -> Tab {
        self.shell.active()
    }

    pub fn browser(&self) -> &RecipeBrowser {
        &self.browser
    }

    pub fn browser_mut(&mut self) -> &mut RecipeBrowser {
        &mut self.browser
    }

    pub fn form(&self) -> &RecipeForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut RecipeForm {
        &mut self.form
    }

    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    /// Activate `tab` and dispatch the resulting focus event
    pub async fn navigate(&mut self, tab: Tab, store: &dyn DocumentStore) -> FocusEvent {
        let event = self.shell.activate(tab);
        self.dispatch_focus(event, store).await;
        event
    }

    /// Route a focus event to its screen
    ///
    /// Only the browse screen reacts: it re-fetches unconditionally. A failed
    /// fetch is reported through the notification surface.
    pub async fn dispatch_focus(&mut self, event: FocusEvent, store: &dyn DocumentStore) {
        if event.0 == Tab::Browse {
            if self.browser.on_focus(store).await.is_err() {
                self.notification = Notification::error(LOAD_FAILURE_MESSAGE);
            }
        }
    }

    pub fn dismiss_notification(&mut self) {
        self.notification.dismiss();
    }

    /// First half of a submit; failures are surfaced immediately
    pub fn begin_submit(&mut self) -> Result<NewRecipe, SubmitError> {
        let started = self.form.begin_submit();
        if let Err(e) = &started {
            self.notification = e.notification();
        }
        started
    }

    /// Second half of a submit; always surfaces the outcome
    pub fn finish_submit(&mut self, outcome: Result<DocumentId, StoreError>) -> Result<DocumentId, SubmitError> {
        let finished = self.form.finish_submit(outcome);
        self.notification = submission_notification(&finished);
        finished
    }

    pub fn view(&self) -> SessionView<'_> {
        SessionView {
            active_tab: self.shell.active(),
            browse: self.browser.screen(),
            submit: &self.form,
            search: SEARCH_PLACEHOLDER,
            notification: self.notification.view(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SessionView<'a> {
    pub active_tab: Tab,
    pub browse: BrowseScreen,
    pub submit: &'a RecipeForm,
    pub search: &'static str,
    pub notification: NotificationView<'a>,
}

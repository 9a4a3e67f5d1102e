use std::rc::Rc;

use crate::config::ThemeConfig;
use crate::error::ThemeError;
use crate::host::{PreferenceStore, SystemScheme, ThemeDocument};
use crate::theme::ThemePreference;

/// Owns theme resolution, application, persistence and toggle sync for one
/// page.
///
/// Cloning is cheap: every collaborator is a handle, and each event listener
/// captures its own clone of the controller.
#[derive(Clone)]
pub struct ThemeController<D, S, M> {
    document: D,
    store: S,
    scheme: M,
    config: Rc<ThemeConfig>,
}

impl<D, S, M> ThemeController<D, S, M>
where
    D: ThemeDocument,
    S: PreferenceStore,
    M: SystemScheme,
{
    pub fn new(document: D, store: S, scheme: M, config: Rc<ThemeConfig>) -> Self {
        Self {
            document,
            store,
            scheme,
            config,
        }
    }

    /// The explicit choice saved by an earlier toggle, if any.
    ///
    /// An unreadable store counts as "no choice". A stored value that is not
    /// `dark` still counts as an explicit choice and resolves to light.
    pub fn persisted_preference(&self) -> Option<ThemePreference> {
        match self.store.load(&self.config.storage_key) {
            Ok(Some(raw)) if !raw.is_empty() => match raw.parse() {
                Ok(theme) => Some(theme),
                Err(err) => {
                    log::warn!("{err} in storage, treating it as light");
                    Some(ThemePreference::Light)
                }
            },
            Ok(_) => None,
            Err(err) => {
                log::debug!("Could not read saved theme, following system: {err}");
                None
            }
        }
    }

    /// Saved choice if present, otherwise the system preference.
    pub fn resolve_preference(&self) -> ThemePreference {
        self.persisted_preference()
            .unwrap_or_else(|| self.scheme.current())
    }

    /// Reflect `theme` on the root node, the body and the toggle checkbox.
    ///
    /// Body and checkbox updates that cannot happen yet are deferred to the
    /// ready signal, one listener per call.
    pub fn apply_theme(&self, theme: ThemePreference) -> Result<(), ThemeError> {
        let dark = theme.is_dark();

        self.document.set_root_dark(dark)?;

        if !self.document.set_body_dark(dark)? {
            log::debug!("Body not parsed yet, deferring {theme} class");
            let document = self.document.clone();
            self.document
                .once_ready(Box::new(move || document.set_body_dark(dark).map(|_| ())))?;
        }

        if self.document.is_loading() {
            let document = self.document.clone();
            self.document
                .once_ready(Box::new(move || document.set_toggle_checked(dark)))?;
        } else {
            self.document.set_toggle_checked(dark)?;
        }

        Ok(())
    }

    pub fn persist_preference(&self, theme: ThemePreference) -> Result<(), ThemeError> {
        self.store.save(&self.config.storage_key, theme.as_str())
    }

    pub fn init_theme(&self) -> Result<(), ThemeError> {
        let theme = self.resolve_preference();
        self.apply_theme(theme)
    }

    /// `init_theme` that never fails: on error the page is forced light.
    pub fn safe_init(&self) {
        if let Err(err) = self.init_theme() {
            log::warn!("Dark mode initialization failed: {err}");
            if let Err(err) = self.document.set_root_dark(false) {
                log::warn!("Could not force light mode: {err}");
            }
        }
    }

    /// Flip the theme shown on the root node and save the result.
    ///
    /// The current theme is read from the live root class, not from the store,
    /// so a class changed behind the controller's back wins.
    pub fn toggle_theme(&self) -> Result<ThemePreference, ThemeError> {
        let current = ThemePreference::from_dark_flag(self.document.root_is_dark());
        let next = current.opposite();
        self.apply_theme(next)?;
        self.persist_preference(next)?;
        Ok(next)
    }

    /// Follow the system only while the user has made no explicit choice.
    pub fn handle_system_change(&self, theme: ThemePreference) -> Result<(), ThemeError> {
        if self.persisted_preference().is_some() {
            log::debug!("Ignoring system switch to {theme}, user choice is saved");
            return Ok(());
        }
        self.apply_theme(theme)
    }

    /// Wire the controller into the page: system listener, initialization and
    /// the toggle click listener.
    pub fn install(&self) -> Result<(), ThemeError> {
        let controller = self.clone();
        self.scheme
            .subscribe(Box::new(move |theme| controller.handle_system_change(theme)))?;

        if self.document.is_loading() {
            let controller = self.clone();
            self.document.once_ready(Box::new(move || {
                controller.safe_init();
                Ok(())
            }))?;
            let controller = self.clone();
            self.document.once_ready(Box::new(move || controller.wire_toggle()))?;
        } else {
            self.safe_init();
            self.wire_toggle()?;
        }

        log::info!("Theme controller installed");
        Ok(())
    }

    fn wire_toggle(&self) -> Result<(), ThemeError> {
        if !self.document.ensure_toggle()? {
            log::debug!("No theme toggle on this page");
            return Ok(());
        }
        // A control rendered just now has not seen the applied theme yet.
        self.document.set_toggle_checked(self.document.root_is_dark())?;

        let controller = self.clone();
        self.document
            .on_toggle_click(Box::new(move || controller.toggle_theme().map(|_| ())))
    }
}

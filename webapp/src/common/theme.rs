use tracing::{debug, warn};

use crate::common::storage::PreferenceStore;

pub const THEME_KEY: &str = "portfolioTheme";

// class set on <body> while the dark variant is active
pub const DARK_CLASS: &str = "dark";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    // only the literal "dark" selects the dark variant; anything else,
    // including values written by some other version of the page, is light
    pub fn from_stored(value: Option<&str>) -> Theme {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

pub fn load_theme<S: PreferenceStore>(store: &S) -> Theme {
    match store.load(THEME_KEY) {
        Ok(value) => Theme::from_stored(value.as_deref()),
        Err(err) => {
            warn!("failed to read theme preference, using light: {err}");
            Theme::Light
        }
    }
}

// side effects that follow every theme change
pub trait ThemeObserver {
    fn theme_changed(&self, theme: Theme);
}

// writes the preference back under THEME_KEY
//
// failures are logged and dropped so the toggle keeps working in memory
#[derive(Debug)]
pub struct PersistTheme<S: PreferenceStore> {
    store: S,
}

impl<S: PreferenceStore> PersistTheme<S> {
    pub fn new(store: S) -> Self {
        PersistTheme { store }
    }
}

impl<S: PreferenceStore> ThemeObserver for PersistTheme<S> {
    fn theme_changed(&self, theme: Theme) {
        if let Err(err) = self.store.save(THEME_KEY, theme.as_str()) {
            warn!("failed to persist theme preference: {err}");
        }
    }
}

// mirrors the preference onto document.body so that page-level css can
// key off body.dark
#[derive(Clone, Copy, Debug, Default)]
pub struct RootClass;

impl ThemeObserver for RootClass {
    fn theme_changed(&self, theme: Theme) {
        let Some(body) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
        else {
            debug!("no document body, skipping root class");
            return;
        };

        if let Err(err) = body
            .class_list()
            .toggle_with_force(DARK_CLASS, theme.is_dark())
        {
            warn!("failed to toggle root class: {err:?}");
        }
    }
}

#[derive(Default)]
pub struct ThemeController {
    theme: Theme,
    observers: Vec<Box<dyn ThemeObserver>>,
}

impl ThemeController {
    pub fn observe(mut self, observer: impl ThemeObserver + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    // reads the stored preference and immediately notifies every observer,
    // so the store and the root class agree with the state from the start
    pub fn mount<S: PreferenceStore>(mut self, store: &S) -> Self {
        self.theme = load_theme(store);
        debug!("mounting theme controller with {}", self.theme.as_str());

        self.notify();
        self
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle(&mut self) -> Theme {
        self.set(self.theme.toggled());
        self.theme
    }

    pub fn set(&mut self, theme: Theme) {
        if theme == self.theme {
            return;
        }

        self.theme = theme;
        self.notify();
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer.theme_changed(self.theme);
        }
    }
}

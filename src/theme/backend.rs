//! Browser seams used by the theme store.
//!
//! Every call here may run where the browser APIs are missing or locked down
//! (sandboxed iframes, storage disabled, pre-hydration), so each one degrades
//! to "nothing there" instead of failing.

use log::debug;

/// Durable string storage, i.e. `window.localStorage`.
pub trait PreferenceStorage {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

/// Live `prefers-color-scheme` signal. `None` when it cannot be queried.
pub trait ColorSchemeQuery {
    fn prefers_dark(&self) -> Option<bool>;
}

/// The `dark` class on the document root that global CSS keys off.
pub trait RootMarker {
    fn apply(&self, dark: bool);
}

pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl PreferenceStorage for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        let Some(storage) = Self::storage() else {
            debug!("local storage unavailable, no stored value for {}", key);
            return None;
        };
        storage.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    debug!("local storage rejected write of {}", key);
                }
            }
            None => debug!("local storage unavailable, {} not persisted", key),
        }
    }
}

pub struct MediaQuery;

impl ColorSchemeQuery for MediaQuery {
    fn prefers_dark(&self) -> Option<bool> {
        let list = web_sys::window()?
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()?;
        Some(list.matches())
    }
}

pub struct DocumentRoot;

impl RootMarker for DocumentRoot {
    fn apply(&self, dark: bool) {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let classes = root.class_list();
        let result = if dark {
            classes.add_1("dark")
        } else {
            classes.remove_1("dark")
        };
        if result.is_err() {
            debug!("could not update root theme class");
        }
    }
}

#[cfg(test)]
pub mod memory {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;

    use super::*;

    /// In-memory storage. Setting `unavailable` behaves like disabled storage.
    #[derive(Clone, Default)]
    pub struct MemoryStorage {
        pub values: Rc<RefCell<HashMap<String, String>>>,
        pub unavailable: Rc<Cell<bool>>,
    }

    impl MemoryStorage {
        pub fn with(key: &str, value: &str) -> Self {
            let storage = Self::default();
            storage
                .values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            storage
        }

        pub fn disabled() -> Self {
            let storage = Self::default();
            storage.unavailable.set(true);
            storage
        }
    }

    impl PreferenceStorage for MemoryStorage {
        fn read(&self, key: &str) -> Option<String> {
            if self.unavailable.get() {
                return None;
            }
            self.values.borrow().get(key).cloned()
        }

        fn write(&self, key: &str, value: &str) {
            if self.unavailable.get() {
                return;
            }
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }
    }

    #[derive(Clone, Default)]
    pub struct FixedScheme(pub Rc<Cell<Option<bool>>>);

    impl FixedScheme {
        pub fn new(prefers_dark: Option<bool>) -> Self {
            Self(Rc::new(Cell::new(prefers_dark)))
        }
    }

    impl ColorSchemeQuery for FixedScheme {
        fn prefers_dark(&self) -> Option<bool> {
            self.0.get()
        }
    }

    /// Records every root marker write.
    #[derive(Clone, Default)]
    pub struct RecordingRoot(pub Rc<RefCell<Vec<bool>>>);

    impl RootMarker for RecordingRoot {
        fn apply(&self, dark: bool) {
            self.0.borrow_mut().push(dark);
        }
    }
}

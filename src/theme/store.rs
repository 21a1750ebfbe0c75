//! Process-wide dark/light theme state.
//!
//! One [`ThemeStore`] instance owns the persisted preference and the list of
//! subscribers. Writes go through [`ThemeStore::set_stored_preference`], which
//! persists the value, updates the document root class and then calls every
//! subscriber synchronously, in subscription order, with the new [`Theme`].

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use log::{debug, info};

use super::backend::{
    ColorSchemeQuery, DocumentRoot, LocalStorage, MediaQuery, PreferenceStorage, RootMarker,
};
use crate::config::THEME_STORAGE_KEY;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Reads a raw stored value. An empty string counts as nothing stored and
    /// any value other than `"dark"` is treated as an explicit light choice.
    pub fn from_stored(raw: &str) -> Option<Self> {
        match raw {
            "" => None,
            "dark" => Some(Theme::Dark),
            _ => Some(Theme::Light),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored choice wins; with nothing stored, follow the system; with no
/// readable system signal either, light.
pub fn resolve(stored: Option<Theme>, system_prefers_dark: Option<bool>) -> Theme {
    match stored {
        Some(theme) => theme,
        None if system_prefers_dark.unwrap_or(false) => Theme::Dark,
        None => Theme::Light,
    }
}

type Listener = Rc<dyn Fn(Theme)>;

struct Entry {
    id: u64,
    active: Rc<Cell<bool>>,
    listener: Listener,
}

struct Inner {
    storage: Box<dyn PreferenceStorage>,
    scheme: Box<dyn ColorSchemeQuery>,
    root: Box<dyn RootMarker>,
    entries: RefCell<Vec<Entry>>,
    next_id: Cell<u64>,
    // Bumped on every write so a delivery can tell it was superseded.
    generation: Cell<u64>,
}

#[derive(Clone)]
pub struct ThemeStore {
    inner: Rc<Inner>,
}

impl PartialEq for ThemeStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

thread_local! {
    static GLOBAL: ThemeStore = ThemeStore::browser();
}

impl ThemeStore {
    pub fn new(
        storage: impl PreferenceStorage + 'static,
        scheme: impl ColorSchemeQuery + 'static,
        root: impl RootMarker + 'static,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                storage: Box::new(storage),
                scheme: Box::new(scheme),
                root: Box::new(root),
                entries: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
                generation: Cell::new(0),
            }),
        }
    }

    /// Store backed by `localStorage`, the color-scheme media query and `<html>`.
    pub fn browser() -> Self {
        Self::new(LocalStorage, MediaQuery, DocumentRoot)
    }

    /// The single store shared by every component on the page.
    pub fn global() -> Self {
        GLOBAL.with(Clone::clone)
    }

    pub fn stored_preference(&self) -> Option<Theme> {
        self.inner
            .storage
            .read(THEME_STORAGE_KEY)
            .and_then(|raw| Theme::from_stored(&raw))
    }

    pub fn system_prefers_dark(&self) -> bool {
        self.inner.scheme.prefers_dark().unwrap_or(false)
    }

    pub fn effective_theme(&self) -> Theme {
        resolve(self.stored_preference(), self.inner.scheme.prefers_dark())
    }

    pub fn set_stored_preference(&self, theme: Theme) {
        self.inner.storage.write(THEME_STORAGE_KEY, theme.as_str());
        self.inner.root.apply(theme.is_dark());
        self.notify(theme);
    }

    /// Flips the theme currently in effect and returns the new one.
    pub fn toggle(&self) -> Theme {
        let next = self.effective_theme().toggled();
        info!("Switching to {} theme ({} listeners)", next, self.subscriber_count());
        self.set_stored_preference(next);
        next
    }

    /// Brings the document root class in line with the effective theme
    /// without persisting anything. Called once at start-up.
    pub fn sync_root(&self) {
        let theme = self.effective_theme();
        debug!(
            "initial theme {} (stored {:?}, system prefers dark: {})",
            theme,
            self.stored_preference(),
            self.system_prefers_dark()
        );
        self.inner.root.apply(theme.is_dark());
    }

    pub fn subscribe(&self, listener: impl Fn(Theme) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        let active = Rc::new(Cell::new(true));
        self.inner.entries.borrow_mut().push(Entry {
            id,
            active: active.clone(),
            listener: Rc::new(listener),
        });
        Subscription {
            id,
            active,
            store: Rc::downgrade(&self.inner),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner
            .entries
            .borrow()
            .iter()
            .filter(|entry| entry.active.get())
            .count()
    }

    fn notify(&self, theme: Theme) {
        let generation = self.inner.generation.get() + 1;
        self.inner.generation.set(generation);

        // Snapshot so listeners can subscribe, unsubscribe or write while we deliver.
        let snapshot: Vec<(Rc<Cell<bool>>, Listener)> = {
            let mut entries = self.inner.entries.borrow_mut();
            entries.retain(|entry| entry.active.get());
            entries
                .iter()
                .map(|entry| (entry.active.clone(), entry.listener.clone()))
                .collect()
        };
        debug!("delivering {} theme to {} subscribers", theme, snapshot.len());

        for (active, listener) in snapshot {
            if self.inner.generation.get() != generation {
                // A listener wrote a newer value, which has already been delivered.
                break;
            }
            if active.get() {
                listener(theme);
            }
        }
    }
}

/// Handle for one subscriber. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    active: Rc<Cell<bool>>,
    store: Weak<Inner>,
}

impl Subscription {
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.active.set(false);
        if let Some(inner) = self.store.upgrade() {
            if let Ok(mut entries) = inner.entries.try_borrow_mut() {
                entries.retain(|entry| entry.id != self.id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::theme::backend::memory::{FixedScheme, MemoryStorage, RecordingRoot};

    fn store_with(storage: MemoryStorage, system: Option<bool>) -> ThemeStore {
        ThemeStore::new(storage, FixedScheme::new(system), RecordingRoot::default())
    }

    fn recorder(store: &ThemeStore) -> (Rc<RefCell<Vec<Theme>>>, Subscription) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let subscription = store.subscribe(move |theme| sink.borrow_mut().push(theme));
        (seen, subscription)
    }

    #[test]
    fn resolve_prefers_stored_then_system_then_light() {
        assert_eq!(resolve(Some(Theme::Dark), Some(false)), Theme::Dark);
        assert_eq!(resolve(Some(Theme::Light), Some(true)), Theme::Light);
        assert_eq!(resolve(None, Some(true)), Theme::Dark);
        assert_eq!(resolve(None, Some(false)), Theme::Light);
        assert_eq!(resolve(None, None), Theme::Light);
    }

    #[test]
    fn stored_values_are_interpreted_like_the_browser_did() {
        assert_eq!(Theme::from_stored("dark"), Some(Theme::Dark));
        assert_eq!(Theme::from_stored("light"), Some(Theme::Light));
        assert_eq!(Theme::from_stored("solarized"), Some(Theme::Light));
        assert_eq!(Theme::from_stored(""), None);
    }

    #[test]
    fn empty_store_follows_dark_system() {
        let store = store_with(MemoryStorage::default(), Some(true));
        assert_eq!(store.stored_preference(), None);
        assert_eq!(store.effective_theme(), Theme::Dark);
    }

    #[test]
    fn stored_light_beats_dark_system() {
        let store = store_with(MemoryStorage::with("theme", "light"), Some(true));
        assert_eq!(store.effective_theme(), Theme::Light);
    }

    #[test]
    fn unavailable_storage_reads_as_absent() {
        let store = store_with(MemoryStorage::disabled(), Some(true));
        assert_eq!(store.stored_preference(), None);
        assert_eq!(store.effective_theme(), Theme::Dark);
    }

    #[test]
    fn nothing_readable_defaults_to_light() {
        let store = store_with(MemoryStorage::disabled(), None);
        assert!(!store.system_prefers_dark());
        assert_eq!(store.effective_theme(), Theme::Light);
    }

    #[test]
    fn write_then_read_returns_written_value() {
        let storage = MemoryStorage::default();
        let store = store_with(storage.clone(), Some(false));
        store.set_stored_preference(Theme::Dark);
        assert_eq!(store.stored_preference(), Some(Theme::Dark));
        assert_eq!(
            storage.values.borrow().get("theme").map(String::as_str),
            Some("dark")
        );
    }

    #[test]
    fn repeated_writes_notify_every_time() {
        let store = store_with(MemoryStorage::default(), None);
        let (seen, _subscription) = recorder(&store);
        store.set_stored_preference(Theme::Dark);
        store.set_stored_preference(Theme::Dark);
        assert_eq!(store.stored_preference(), Some(Theme::Dark));
        assert_eq!(*seen.borrow(), vec![Theme::Dark, Theme::Dark]);
    }

    #[test]
    fn every_subscriber_sees_dark_in_subscription_order() {
        let store = store_with(MemoryStorage::default(), Some(false));
        let order = Rc::new(RefCell::new(Vec::new()));
        let subscriptions: Vec<Subscription> = (0..3)
            .map(|n| {
                let order = order.clone();
                store.subscribe(move |theme| order.borrow_mut().push((n, theme)))
            })
            .collect();

        store.set_stored_preference(Theme::Dark);

        assert_eq!(
            *order.borrow(),
            vec![(0, Theme::Dark), (1, Theme::Dark), (2, Theme::Dark)]
        );
        assert_eq!(store.subscriber_count(), subscriptions.len());
    }

    #[test]
    fn dropped_subscription_gets_no_more_calls() {
        let store = store_with(MemoryStorage::default(), None);
        let (seen, subscription) = recorder(&store);
        store.set_stored_preference(Theme::Dark);
        subscription.unsubscribe();
        store.set_stored_preference(Theme::Light);
        assert_eq!(*seen.borrow(), vec![Theme::Dark]);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn toggling_twice_restores_initial_value() {
        let store = store_with(MemoryStorage::with("theme", "light"), Some(true));
        let (seen, _subscription) = recorder(&store);
        assert_eq!(store.toggle(), Theme::Dark);
        assert_eq!(store.toggle(), Theme::Light);
        assert_eq!(store.stored_preference(), Some(Theme::Light));
        assert_eq!(*seen.borrow(), vec![Theme::Dark, Theme::Light]);
    }

    #[test]
    fn writes_update_root_marker() {
        let root = RecordingRoot::default();
        let store = ThemeStore::new(MemoryStorage::default(), FixedScheme::new(Some(true)), root.clone());
        store.sync_root();
        store.set_stored_preference(Theme::Light);
        assert_eq!(*root.0.borrow(), vec![true, false]);
    }

    #[test]
    fn unsubscribing_a_later_listener_mid_delivery_skips_it() {
        let store = store_with(MemoryStorage::default(), None);
        let victim: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let killer = {
            let victim = victim.clone();
            store.subscribe(move |_| {
                victim.borrow_mut().take();
            })
        };
        let (seen, subscription) = recorder(&store);
        *victim.borrow_mut() = Some(subscription);

        store.set_stored_preference(Theme::Dark);

        assert!(seen.borrow().is_empty());
        assert_eq!(store.subscriber_count(), 1);
        drop(killer);
    }

    #[test]
    fn listener_added_mid_delivery_waits_for_next_write() {
        let store = store_with(MemoryStorage::default(), None);
        let late_seen = Rc::new(RefCell::new(Vec::new()));
        let late: Rc<RefCell<Vec<Subscription>>> = Rc::new(RefCell::new(Vec::new()));
        let _adder = {
            let store_handle = store.clone();
            let late = late.clone();
            let late_seen = late_seen.clone();
            store.subscribe(move |_| {
                if late.borrow().is_empty() {
                    let sink = late_seen.clone();
                    let subscription =
                        store_handle.subscribe(move |theme| sink.borrow_mut().push(theme));
                    late.borrow_mut().push(subscription);
                }
            })
        };

        store.set_stored_preference(Theme::Dark);
        assert!(late_seen.borrow().is_empty());

        store.set_stored_preference(Theme::Light);
        assert_eq!(*late_seen.borrow(), vec![Theme::Light]);
    }

    #[test]
    fn write_from_listener_leaves_everyone_on_latest_value() {
        let store = store_with(MemoryStorage::default(), None);
        let _forcer = {
            let handle = store.clone();
            store.subscribe(move |theme| {
                if theme == Theme::Dark {
                    handle.set_stored_preference(Theme::Light);
                }
            })
        };
        let (seen, _subscription) = recorder(&store);

        store.set_stored_preference(Theme::Dark);

        assert_eq!(seen.borrow().last(), Some(&Theme::Light));
        assert_eq!(store.effective_theme(), Theme::Light);
    }

    #[test]
    fn cleared_store_falls_back_to_system_after_a_write() {
        let storage = MemoryStorage::default();
        let store = store_with(storage.clone(), Some(true));
        store.set_stored_preference(Theme::Light);
        assert_eq!(store.effective_theme(), Theme::Light);

        storage.values.borrow_mut().clear();
        assert_eq!(store.stored_preference(), None);
        assert_eq!(store.effective_theme(), Theme::Dark);
    }

    #[test]
    fn disabled_store_keeps_following_system_after_a_write() {
        let store = store_with(MemoryStorage::disabled(), Some(true));
        let (seen, _subscription) = recorder(&store);
        assert_eq!(store.toggle(), Theme::Light);
        assert_eq!(*seen.borrow(), vec![Theme::Light]);
        assert_eq!(store.stored_preference(), None);
        assert_eq!(store.effective_theme(), Theme::Dark);
    }
}

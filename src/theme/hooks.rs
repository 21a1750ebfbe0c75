use yew::prelude::*;

use super::palette::Palette;
use super::store::{Theme, ThemeStore};

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    #[prop_or_else(ThemeStore::global)]
    pub store: ThemeStore,
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    {
        use_effect_with_deps(
            |store: &ThemeStore| {
                store.sync_root();
                || ()
            },
            props.store.clone(),
        );
    }

    html! {
        <ContextProvider<ThemeStore> context={props.store.clone()}>
            { for props.children.iter() }
        </ContextProvider<ThemeStore>>
    }
}

#[hook]
pub fn use_theme_store() -> ThemeStore {
    use_context::<ThemeStore>().unwrap_or_else(ThemeStore::global)
}

/// Current theme for the calling component. Read on mount, kept in sync
/// through a store subscription that is dropped on unmount.
#[hook]
pub fn use_theme() -> Theme {
    let store = use_theme_store();
    let theme = use_state({
        let store = store.clone();
        move || store.effective_theme()
    });

    {
        let theme = theme.clone();
        use_effect_with_deps(
            move |store: &ThemeStore| {
                // A toggle may have landed between the first render and this effect.
                theme.set(store.effective_theme());
                let subscription = store.subscribe(move |next| theme.set(next));
                move || subscription.unsubscribe()
            },
            store,
        );
    }

    *theme
}

#[hook]
pub fn use_palette() -> &'static Palette {
    Palette::for_theme(use_theme())
}

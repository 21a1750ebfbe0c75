use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::scroll::use_scroll_y;
use crate::theme::hooks::{use_theme, use_theme_store};
use crate::Route;

const NAVIGATION: [(&str, Route); 7] = [
    ("Home", Route::Home),
    ("Products", Route::Products),
    ("Services", Route::Services),
    ("Blog", Route::Blog),
    ("Careers", Route::Careers),
    ("Support", Route::Support),
    ("Contact", Route::Contact),
];

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let store = use_theme_store();
    let theme = use_theme();

    let onclick = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        store.toggle();
    });

    let (icon, label) = if theme.is_dark() {
        ("☀", "Switch to light mode")
    } else {
        ("☾", "Switch to dark mode")
    };

    html! {
        <button class="theme-toggle" {onclick} aria-label={label} title={label}>
            {icon}
        </button>
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let scrolled = use_scroll_y() > 20.0;
    let current = use_route::<Route>();
    let theme = use_theme();

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let links = NAVIGATION.iter().map(|(name, route)| {
        let active = current.as_ref() == Some(route);
        html! {
            <div onclick={close_menu.clone()}>
                <Link<Route> to={route.clone()} classes={classes!("nav-link", active.then_some("active"))}>
                    {*name}
                </Link<Route>>
            </div>
        }
    });

    html! {
        <header class={classes!("site-nav", theme.as_str(), scrolled.then_some("scrolled"))}>
            <nav class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <img src="/bdtslogo.png" alt="Basel Dynamics Tech logo" />
                    <span>{"Basel Dynamics Tech"}</span>
                </Link<Route>>

                <div class={classes!("nav-right", (*menu_open).then_some("mobile-menu-open"))}>
                    { for links }
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Contact} classes="nav-demo-button">
                            {"Request Demo"}
                        </Link<Route>>
                    </div>
                </div>

                <div class="nav-actions">
                    <ThemeToggle />
                    <button class="burger-menu" onclick={toggle_menu} aria-label="Open main menu">
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </nav>
            <style>
                {r#"
                .site-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    padding: 1rem 0;
                    background: transparent;
                    transition: all 0.3s ease;
                }
                .site-nav.scrolled {
                    padding: 0.5rem 0;
                    background: var(--nav-scrolled-bg);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.25);
                }
                .nav-content {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    text-decoration: none;
                    font-weight: 700;
                    color: var(--accent);
                    text-shadow: var(--glow);
                }
                .nav-logo img {
                    height: 40px;
                    width: auto;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }
                .nav-link {
                    color: var(--text-muted);
                    text-decoration: none;
                    font-size: 0.9rem;
                    font-weight: 500;
                    transition: color 0.3s ease;
                }
                .nav-link:hover {
                    color: var(--text);
                }
                .nav-link.active {
                    color: var(--accent);
                    text-shadow: var(--glow);
                }
                .nav-demo-button {
                    background: var(--accent);
                    color: #fff;
                    padding: 0.5rem 1.25rem;
                    border-radius: 6px;
                    text-decoration: none;
                    font-size: 0.9rem;
                }
                .nav-demo-button:hover {
                    background: var(--accent-hover);
                }
                .nav-actions {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .theme-toggle {
                    background: var(--surface-alt);
                    border: 1px solid var(--border);
                    color: var(--accent);
                    border-radius: 9999px;
                    width: 2.25rem;
                    height: 2.25rem;
                    cursor: pointer;
                    font-size: 1.1rem;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: var(--text);
                }
                @media (max-width: 1024px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        display: none;
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        align-items: flex-start;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        padding: 1.5rem;
                        gap: 1rem;
                        background: var(--nav-scrolled-bg);
                        backdrop-filter: blur(12px);
                    }
                }
                "#}
            </style>
        </header>
    }
}

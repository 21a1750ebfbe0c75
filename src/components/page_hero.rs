use yew::prelude::*;

use crate::theme::hooks::use_theme;

#[derive(Properties, PartialEq)]
pub struct PageHeroProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub highlight: Option<AttrValue>,
    pub subtitle: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Banner at the top of every inner page. `highlight` is appended to the
/// title in the accent colour.
#[function_component(PageHero)]
pub fn page_hero(props: &PageHeroProps) -> Html {
    let theme = use_theme();

    html! {
        <section class={classes!("page-hero", theme.as_str())}>
            <div class="page-hero-glow"></div>
            <div class="page-hero-content">
                <h1>
                    {props.title.clone()}
                    if let Some(highlight) = &props.highlight {
                        {" "}
                        <span class="accent-text">{highlight.clone()}</span>
                    }
                </h1>
                <p>{props.subtitle.clone()}</p>
                { for props.children.iter() }
            </div>
            <style>
                {r#"
                .page-hero {
                    position: relative;
                    padding: 9rem 1.5rem 4rem;
                    text-align: center;
                    overflow: hidden;
                    background: var(--page-bg);
                }
                .page-hero-glow {
                    position: absolute;
                    inset: 0;
                    background: radial-gradient(circle at 50% 0%, var(--highlight), transparent 60%);
                    opacity: 0.25;
                    pointer-events: none;
                }
                .page-hero.light .page-hero-glow {
                    opacity: 0.12;
                }
                .page-hero-content {
                    position: relative;
                    max-width: 48rem;
                    margin: 0 auto;
                }
                .page-hero h1 {
                    font-size: clamp(2.25rem, 5vw, 3.5rem);
                    font-weight: 700;
                    color: var(--heading);
                    margin-bottom: 1.25rem;
                }
                .page-hero p {
                    font-size: 1.15rem;
                    color: var(--text-muted);
                }
                .accent-text {
                    color: var(--accent);
                }
                .page-hero.dark .accent-text {
                    text-shadow: var(--glow);
                }
                "#}
            </style>
        </section>
    }
}

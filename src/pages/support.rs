use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::filter_bar::{CategoryChips, SearchBox};
use crate::components::page_hero::PageHero;
use crate::components::scroll::use_page_title;
use crate::content::faq::{Faq, FAQS, FAQ_CATEGORIES};
use crate::search::{filter, toggle_open, ALL_CATEGORIES};
use crate::Route;

/// (icon, title, blurb, action label)
const SUPPORT_OPTIONS: [(&str, &str, &str, &str); 3] = [
    ("💬", "Live Chat Support", "Chat with our support team for immediate assistance with your questions or issues.", "Start Chat"),
    ("📄", "Submit a Ticket", "Create a support ticket for more complex issues requiring detailed attention.", "Create Ticket"),
    ("❔", "Knowledge Base", "Browse our comprehensive documentation, tutorials, and guides.", "View Articles"),
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    faq: &'static Faq,
    open: bool,
    on_toggle: Callback<&'static str>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let question = props.faq.question;
    let onclick = props.on_toggle.reform(move |e: MouseEvent| {
        e.prevent_default();
        question
    });

    html! {
        <div class={classes!("faq-item", props.open.then_some("open"))}>
            <button class="faq-question" {onclick}>
                <span class="question-text">{question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            if props.open {
                <div class="faq-answer">
                    <p>{props.faq.answer}</p>
                </div>
            }
        </div>
    }
}

#[function_component(Support)]
pub fn support() -> Html {
    use_page_title("Support".to_string());
    let query = use_state(String::new);
    let selected = use_state(|| ALL_CATEGORIES);
    let expanded = use_state(|| None::<&'static str>);

    let on_input = {
        let query = query.clone();
        Callback::from(move |value: String| query.set(value))
    };
    let on_select = {
        let selected = selected.clone();
        Callback::from(move |category: &'static str| selected.set(category))
    };
    let on_toggle = {
        let expanded = expanded.clone();
        Callback::from(move |question: &'static str| expanded.set(toggle_open(*expanded, question)))
    };

    let visible = filter(&FAQS, &query, *selected);

    html! {
        <div class="support-page">
            <PageHero
                title="How Can We"
                highlight={Some(AttrValue::from("Help?"))}
                subtitle="Find answers to common questions or reach out to our support team."
            />

            <section class="support-channels">
                { for SUPPORT_OPTIONS.iter().map(|(icon, title, blurb, action)| html! {
                    <div class="channel-card">
                        <span class="channel-icon">{*icon}</span>
                        <h3>{*title}</h3>
                        <p>{*blurb}</p>
                        <Link<Route> to={Route::Contact} classes="channel-action">{*action}</Link<Route>>
                    </div>
                }) }
            </section>

            <section class="faq-section">
                <h2>{"Frequently Asked Questions"}</h2>
                <SearchBox
                    value={AttrValue::from((*query).clone())}
                    placeholder="Search FAQs..."
                    {on_input}
                />
                <CategoryChips
                    categories={FAQ_CATEGORIES.to_vec()}
                    selected={AttrValue::from(*selected)}
                    {on_select}
                />
                <div class="faq-list">
                    if visible.is_empty() {
                        <p class="no-results">{"No matching questions. Try a different search term or category."}</p>
                    } else {
                        { for visible.into_iter().map(|faq| html! {
                            <FaqItem
                                key={faq.question}
                                {faq}
                                open={*expanded == Some(faq.question)}
                                on_toggle={on_toggle.clone()}
                            />
                        }) }
                    }
                </div>
            </section>

            <section class="support-cta">
                <h2>{"Need More "}<span class="accent-text">{"Help"}</span>{"?"}</h2>
                <p>{"Our support team is available to assist you with any questions or issues."}</p>
                <div class="support-contacts">
                    <div class="channel-card">
                        <span class="channel-icon">{"📞"}</span>
                        <h3>{"Call Us"}</h3>
                        <p>{"Technical Support"}</p>
                        <strong><a href="tel:+918012345678">{"+91 80 1234 5678"}</a></strong>
                        <p class="hours">{"Monday - Friday: 10 AM - 7 PM"}<br />{"Saturday - Sunday: Closed"}</p>
                    </div>
                    <div class="channel-card">
                        <span class="channel-icon">{"✉"}</span>
                        <h3>{"Email Us"}</h3>
                        <p>{"Support Inquiries"}</p>
                        <strong><a href="mailto:support@baseldtsolutions.com">{"support@baseldtsolutions.com"}</a></strong>
                        <p class="hours">{"We typically respond to email inquiries within 24 hours during business days."}</p>
                    </div>
                </div>
            </section>
            <style>
                {r#"
                .support-page {
                    background: var(--page-bg);
                    color: var(--text);
                }
                .support-channels {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem 4rem;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .channel-card {
                    background: var(--surface);
                    border: 1px solid var(--border);
                    border-radius: 12px;
                    padding: 2rem;
                    text-align: center;
                }
                .channel-icon {
                    font-size: 2rem;
                }
                .channel-card h3 {
                    color: var(--heading);
                    margin: 1rem 0 0.5rem;
                }
                .channel-card p {
                    color: var(--text-muted);
                    margin-bottom: 1rem;
                }
                .channel-card strong a {
                    color: var(--accent);
                    text-decoration: none;
                }
                .channel-card .hours {
                    margin-top: 1rem;
                    font-size: 0.9rem;
                }
                .channel-action {
                    display: inline-block;
                    padding: 0.6rem 1.4rem;
                    border-radius: 8px;
                    border: 1px solid var(--accent);
                    color: var(--accent);
                    text-decoration: none;
                }
                .channel-action:hover {
                    background: var(--surface-alt);
                }
                .accent-text {
                    color: var(--accent);
                }
                .faq-section {
                    max-width: 960px;
                    margin: 0 auto;
                    padding: 4rem 1.5rem;
                }
                .faq-section h2,
                .support-cta h2 {
                    text-align: center;
                    color: var(--heading);
                    font-size: 2rem;
                    margin-bottom: 2rem;
                }
                .faq-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    margin-top: 2.5rem;
                }
                .faq-item {
                    background: var(--surface);
                    border: 1px solid var(--border);
                    border-radius: 12px;
                    overflow: hidden;
                }
                .faq-item.open {
                    border-color: var(--accent);
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.25rem 1.5rem;
                    background: none;
                    border: none;
                    text-align: left;
                    cursor: pointer;
                    color: var(--heading);
                    font-size: 1.05rem;
                }
                .toggle-icon {
                    font-size: 1.5rem;
                    color: var(--accent);
                }
                .faq-answer {
                    padding: 0 1.5rem 1.25rem;
                    color: var(--text-muted);
                }
                .no-results {
                    text-align: center;
                    color: var(--text-muted);
                }
                .support-cta {
                    text-align: center;
                    padding: 4rem 1.5rem 6rem;
                    background: var(--surface);
                }
                .support-cta p {
                    color: var(--text-muted);
                    margin-bottom: 2rem;
                }
                .support-contacts {
                    max-width: 960px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                }
                @media (max-width: 1024px) {
                    .support-channels,
                    .support-contacts {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}

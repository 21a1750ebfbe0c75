use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::scroll::use_page_title;
use crate::content::services::detail_or_default;
use crate::pages::product_detail::DETAIL_STYLES;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ServiceDetailProps {
    pub id: String,
}

fn tag_list(items: &'static [&'static str]) -> Html {
    html! {
        <div class="tag-list">
            { for items.iter().map(|item| html! { <span class="tag">{*item}</span> }) }
        </div>
    }
}

#[function_component(ServiceDetailPage)]
pub fn service_detail(props: &ServiceDetailProps) -> Html {
    let service = detail_or_default(&props.id);
    use_page_title(service.title.to_string());

    html! {
        <div class="detail-page">
            <section class="detail-hero">
                <div class="detail-hero-grid">
                    <div>
                        <Link<Route> to={Route::Services} classes="back-link">
                            {"← Back to Services"}
                        </Link<Route>>
                        <h1>{service.title}</h1>
                        <p class="detail-tagline">{service.description}</p>
                        <p>{service.long_description}</p>
                        <div class="detail-actions">
                            <Link<Route> to={Route::Contact} classes="detail-button primary">
                                {"Get a Quote"}
                            </Link<Route>>
                        </div>
                    </div>
                    <img src={service.image} alt={service.title} class="detail-image" />
                </div>
            </section>

            <section class="stats-strip">
                { for service.stats.iter().map(|stat| html! {
                    <div class="stat">
                        <strong>{stat.value}</strong>
                        <span>{stat.label}</span>
                    </div>
                }) }
            </section>

            <section class="process">
                <h2>{"Our Process"}</h2>
                <div class="process-steps">
                    { for service.process.iter().enumerate().map(|(index, step)| html! {
                        <div class="process-step">
                            <span class="step-number">{(index + 1).to_string()}</span>
                            <h3>{step.title}</h3>
                            <p>{step.description}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="detail-body">
                <div class="detail-card">
                    <h2>{"Key Benefits"}</h2>
                    <ul class="detail-list">
                        { for service.benefits.iter().map(|benefit| html! {
                            <li><span class="check">{"✓"}</span>{*benefit}</li>
                        }) }
                    </ul>
                </div>
                <div class="detail-card">
                    <h2>{"Our Expertise"}</h2>
                    { tag_list(service.expertise) }
                    <h2 class="spaced">{"Technologies"}</h2>
                    { tag_list(service.technologies) }
                </div>
            </section>

            <section class="detail-cta">
                <h2>{"Let's build something together"}</h2>
                <p>{"Tell us about your project and our experts will get back to you within one business day."}</p>
                <Link<Route> to={Route::Contact} classes="detail-button primary">
                    {"Contact Us"}
                </Link<Route>>
            </section>
            <style>
                {DETAIL_STYLES}
                {r#"
                .stats-strip {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 3rem 1.5rem;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                    text-align: center;
                }
                .stat strong {
                    display: block;
                    font-size: 2.5rem;
                    color: var(--accent);
                }
                .stat span {
                    color: var(--text-muted);
                }
                .process {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 3rem 1.5rem;
                }
                .process h2 {
                    text-align: center;
                    color: var(--heading);
                    font-size: 2rem;
                    margin-bottom: 2.5rem;
                }
                .process-steps {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                }
                .process-step {
                    background: var(--surface);
                    border: 1px solid var(--border);
                    border-radius: 12px;
                    padding: 1.75rem;
                }
                .step-number {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    background: var(--accent);
                    color: #fff;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }
                .process-step h3 {
                    color: var(--heading);
                    margin-bottom: 0.5rem;
                }
                .process-step p {
                    color: var(--text-muted);
                }
                .tag-list {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }
                .tag {
                    padding: 0.35rem 0.9rem;
                    border-radius: 9999px;
                    background: var(--chip-idle-bg);
                    color: var(--chip-idle-text);
                    font-size: 0.85rem;
                }
                .detail-card h2.spaced {
                    margin-top: 2rem;
                }
                @media (max-width: 1024px) {
                    .stats-strip,
                    .process-steps {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                "#}
            </style>
        </div>
    }
}

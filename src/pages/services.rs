use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::page_hero::PageHero;
use crate::components::scroll::use_page_title;
use crate::content::services::SERVICES;
use crate::Route;

#[function_component(Services)]
pub fn services() -> Html {
    use_page_title("Services".to_string());

    html! {
        <div class="services-page">
            <PageHero
                title="Our"
                highlight={Some(AttrValue::from("Services"))}
                subtitle="Comprehensive technology services to help your business innovate, grow, and stay ahead of the competition."
            />

            <section class="service-list">
                { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                    <div class={classes!("service-row", (index % 2 == 1).then_some("reversed"))} key={service.id}>
                        <div class="service-image">
                            <img src={service.image} alt={service.title} />
                        </div>
                        <div class="service-text">
                            <span class="service-icon">{service.icon}</span>
                            <h2>{service.title}</h2>
                            <p>{service.description}</p>
                            <ul>
                                { for service.features.iter().map(|feature| html! {
                                    <li><span class="check">{"✓"}</span>{*feature}</li>
                                }) }
                            </ul>
                            <Link<Route>
                                to={Route::ServiceDetail { id: service.id.to_string() }}
                                classes="service-link"
                            >
                                {"Learn More"}
                            </Link<Route>>
                        </div>
                    </div>
                }) }
            </section>
            <style>
                {r#"
                .services-page {
                    background: var(--page-bg);
                }
                .service-list {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 2rem 1.5rem 6rem;
                    display: flex;
                    flex-direction: column;
                    gap: 6rem;
                }
                .service-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }
                .service-row.reversed .service-image {
                    order: 2;
                }
                .service-image img {
                    width: 100%;
                    border-radius: 12px;
                    border: 1px solid var(--border);
                }
                .service-icon {
                    display: inline-block;
                    font-size: 1.75rem;
                    color: var(--accent);
                    margin-bottom: 1rem;
                }
                .service-text h2 {
                    color: var(--heading);
                    font-size: 2rem;
                    margin-bottom: 1rem;
                }
                .service-text p {
                    color: var(--text-muted);
                    margin-bottom: 1.5rem;
                }
                .service-text ul {
                    list-style: none;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.6rem;
                    margin-bottom: 2rem;
                    color: var(--text);
                }
                .check {
                    color: var(--accent);
                    margin-right: 0.5rem;
                }
                .service-link {
                    display: inline-block;
                    padding: 0.75rem 1.5rem;
                    border-radius: 8px;
                    background: var(--accent);
                    color: #fff;
                    text-decoration: none;
                    font-weight: 600;
                }
                .service-link:hover {
                    background: var(--accent-hover);
                }
                @media (max-width: 1024px) {
                    .service-row {
                        grid-template-columns: 1fr;
                    }
                    .service-row.reversed .service-image {
                        order: 0;
                    }
                }
                "#}
            </style>
        </div>
    }
}

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::filter_bar::CategoryChips;
use crate::components::page_hero::PageHero;
use crate::components::scroll::use_page_title;
use crate::content::products::PRODUCTS;
use crate::search::{categories, filter, ALL_CATEGORIES};
use crate::Route;

#[function_component(Products)]
pub fn products() -> Html {
    use_page_title("Products".to_string());
    let selected = use_state(|| ALL_CATEGORIES);

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |category: &'static str| selected.set(category))
    };

    let visible = filter(&PRODUCTS, "", *selected);

    html! {
        <div class="products-page">
            <PageHero
                title="Our"
                highlight={Some(AttrValue::from("Products"))}
                subtitle="Discover our suite of innovative software solutions designed to transform your business operations."
            />

            <section class="listing-section">
                <CategoryChips
                    categories={categories(&PRODUCTS)}
                    selected={AttrValue::from(*selected)}
                    {on_select}
                />

                <div class="product-grid">
                    { for visible.into_iter().map(|product| html! {
                        <div class="product-card" key={product.id}>
                            <div class="product-image">
                                <img src={product.image} alt={product.name} />
                                <span class="product-category">{product.category}</span>
                            </div>
                            <div class="product-body">
                                <div class="product-title">
                                    <span class="product-icon">{product.icon}</span>
                                    <h3>{product.name}</h3>
                                </div>
                                <p>{product.description}</p>
                                <Link<Route>
                                    to={Route::ProductDetail { id: product.id.to_string() }}
                                    classes="card-link"
                                >
                                    {"Learn more →"}
                                </Link<Route>>
                            </div>
                        </div>
                    }) }
                </div>
            </section>
            <style>
                {r#"
                .products-page {
                    background: var(--page-bg);
                    min-height: 100vh;
                }
                .listing-section {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem 6rem;
                }
                .product-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    margin-top: 3rem;
                }
                .product-card {
                    background: var(--surface);
                    border: 1px solid var(--border);
                    border-radius: 12px;
                    overflow: hidden;
                    transition: transform 0.3s ease, border-color 0.3s ease;
                }
                .product-card:hover {
                    transform: translateY(-6px);
                    border-color: var(--accent);
                }
                .product-image {
                    position: relative;
                    height: 12rem;
                }
                .product-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .product-category {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: var(--accent);
                    color: #fff;
                    font-size: 0.75rem;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                }
                .product-body {
                    padding: 1.5rem;
                }
                .product-title {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 0.75rem;
                }
                .product-icon {
                    font-size: 1.5rem;
                }
                .product-title h3 {
                    color: var(--heading);
                    font-size: 1.25rem;
                }
                .product-body p {
                    color: var(--text-muted);
                    margin-bottom: 1.25rem;
                }
                .card-link {
                    color: var(--accent);
                    text-decoration: none;
                    font-weight: 600;
                }
                .card-link:hover {
                    color: var(--accent-hover);
                }
                @media (max-width: 1024px) {
                    .product-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (max-width: 640px) {
                    .product-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}

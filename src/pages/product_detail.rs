use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::scroll::use_page_title;
use crate::content::products::detail_or_default;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ProductDetailProps {
    pub id: String,
}

fn bullet_list(items: &'static [&'static str]) -> Html {
    html! {
        <ul class="detail-list">
            { for items.iter().map(|item| html! {
                <li><span class="check">{"✓"}</span>{*item}</li>
            }) }
        </ul>
    }
}

#[function_component(ProductDetailPage)]
pub fn product_detail(props: &ProductDetailProps) -> Html {
    let product = detail_or_default(&props.id);
    use_page_title(product.name.to_string());

    html! {
        <div class="detail-page">
            <section class="detail-hero">
                <div class="detail-hero-grid">
                    <div>
                        <Link<Route> to={Route::Products} classes="back-link">
                            {"← Back to Products"}
                        </Link<Route>>
                        <h1>{product.name}</h1>
                        <p class="detail-tagline">{product.tagline}</p>
                        <p>{product.description}</p>
                        <div class="detail-actions">
                            <Link<Route> to={Route::Contact} classes="detail-button primary">
                                {"Request Demo"}
                            </Link<Route>>
                            <Link<Route> to={Route::Contact} classes="detail-button secondary">
                                {"Contact Sales"}
                            </Link<Route>>
                        </div>
                    </div>
                    <img src={product.image} alt={product.name} class="detail-image" />
                </div>
            </section>

            <section class="detail-body">
                <div class="detail-card">
                    <h2>{"Key Features"}</h2>
                    { bullet_list(product.features) }
                </div>
                <div class="detail-card">
                    <h2>{"Benefits"}</h2>
                    { bullet_list(product.benefits) }
                </div>
                <div class="detail-card">
                    <h2>{"Use Cases"}</h2>
                    { bullet_list(product.use_cases) }
                </div>
                <div class="detail-card">
                    <h2>{"Technical Specifications"}</h2>
                    { bullet_list(product.tech_specs) }
                </div>
            </section>

            <section class="detail-cta">
                <h2>{"Ready to get started with "}{product.name}{"?"}</h2>
                <p>{"Contact our team to schedule a demo or discuss how this product fits your business."}</p>
                <Link<Route> to={Route::Contact} classes="detail-button primary">
                    {"Get in Touch"}
                </Link<Route>>
            </section>
            <style>
                {DETAIL_STYLES}
            </style>
        </div>
    }
}

/// Shared by the product and service detail pages.
pub const DETAIL_STYLES: &str = r#"
.detail-page {
    background: var(--page-bg);
    color: var(--text);
}
.detail-hero {
    padding: 9rem 1.5rem 4rem;
    background: var(--surface);
    border-bottom: 1px solid var(--border);
}
.detail-hero-grid {
    max-width: 1280px;
    margin: 0 auto;
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 4rem;
    align-items: center;
}
.back-link {
    display: inline-block;
    color: var(--accent);
    text-decoration: none;
    margin-bottom: 1.5rem;
}
.detail-hero h1 {
    font-size: clamp(2.25rem, 5vw, 3.5rem);
    font-weight: 700;
    color: var(--heading);
    margin-bottom: 1rem;
}
.detail-tagline {
    font-size: 1.25rem;
    color: var(--accent);
    margin-bottom: 1rem;
}
.detail-hero p {
    color: var(--text-muted);
    margin-bottom: 1rem;
}
.detail-image {
    width: 100%;
    border-radius: 12px;
    border: 1px solid var(--border);
}
.detail-actions {
    display: flex;
    gap: 1rem;
    margin-top: 2rem;
}
.detail-button {
    padding: 0.8rem 1.75rem;
    border-radius: 8px;
    font-weight: 600;
    text-decoration: none;
}
.detail-button.primary {
    background: var(--accent);
    color: #fff;
}
.detail-button.primary:hover {
    background: var(--accent-hover);
}
.detail-button.secondary {
    border: 1px solid var(--accent);
    color: var(--accent);
}
.detail-body {
    max-width: 1280px;
    margin: 0 auto;
    padding: 5rem 1.5rem;
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 2rem;
}
.detail-card {
    background: var(--surface);
    border: 1px solid var(--border);
    border-radius: 12px;
    padding: 2rem;
}
.detail-card h2 {
    color: var(--heading);
    font-size: 1.5rem;
    margin-bottom: 1.25rem;
}
.detail-list {
    list-style: none;
    padding: 0;
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
}
.check {
    color: var(--accent);
    margin-right: 0.5rem;
}
.detail-cta {
    text-align: center;
    padding: 5rem 1.5rem;
    background: var(--surface);
}
.detail-cta h2 {
    color: var(--heading);
    font-size: 2rem;
    margin-bottom: 1rem;
}
.detail-cta p {
    color: var(--text-muted);
    margin-bottom: 2rem;
}
@media (max-width: 1024px) {
    .detail-hero-grid,
    .detail-body {
        grid-template-columns: 1fr;
    }
}
"#;

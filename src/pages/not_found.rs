use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::scroll::use_page_title;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_page_title("Page Not Found".to_string());

    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <h2>{"Page Not Found"}</h2>
            <p>
                {"The page you are looking for might have been removed, had its name changed, or is temporarily unavailable."}
            </p>
            <Link<Route> to={Route::Home} classes="home-link">
                {"⌂ Back to Home"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 0 1rem;
                    background: var(--page-bg);
                }
                .not-found h1 {
                    font-size: 8rem;
                    font-weight: 700;
                    color: var(--accent);
                    text-shadow: var(--glow);
                }
                .not-found h2 {
                    font-size: 2.25rem;
                    color: var(--heading);
                    margin-bottom: 1.5rem;
                }
                .not-found p {
                    max-width: 28rem;
                    color: var(--text-muted);
                    margin-bottom: 2rem;
                }
                .home-link {
                    padding: 0.8rem 1.75rem;
                    border-radius: 8px;
                    background: var(--accent);
                    color: #fff;
                    text-decoration: none;
                }
                .home-link:hover {
                    background: var(--accent-hover);
                }
                "#}
            </style>
        </div>
    }
}

use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::services::SERVICES;
use crate::theme::hooks::use_theme;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let theme = use_theme();
    let current_year = chrono::Local::now().year();

    html! {
        <footer class={classes!("site-footer", theme.as_str())}>
            <div class="footer-grid">
                <div class="footer-company">
                    <Link<Route> to={Route::Home} classes="footer-logo">
                        <img src="/bdtslogo.png" alt="Basel Dynamics Tech logo" />
                        <span>{"Basel Dynamics Tech"}</span>
                    </Link<Route>>
                    <p>{"Leading technology company specializing in software applications and custom IT services."}</p>
                    <div class="footer-social">
                        <a href="#" aria-label="Facebook">{"f"}</a>
                        <a href="#" aria-label="Twitter">{"𝕏"}</a>
                        <a href="#" aria-label="LinkedIn">{"in"}</a>
                        <a href="#" aria-label="Instagram">{"ig"}</a>
                        <a href="#" aria-label="GitHub">{"gh"}</a>
                    </div>
                </div>

                <div>
                    <h3>{"Quick Links"}</h3>
                    <ul>
                        <li><Link<Route> to={Route::Products}>{"Products"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Services}>{"Services"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Blog}>{"Blog"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Careers}>{"Careers"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Support}>{"Support"}</Link<Route>></li>
                    </ul>
                </div>

                <div>
                    <h3>{"Services"}</h3>
                    <ul>
                        { for SERVICES.iter().map(|service| html! {
                            <li>
                                <Link<Route> to={Route::ServiceDetail { id: service.id.to_string() }}>
                                    {service.title}
                                </Link<Route>>
                            </li>
                        }) }
                    </ul>
                </div>

                <div>
                    <h3>{"Contact Us"}</h3>
                    <ul class="footer-contact">
                        <li>{"6th Floor, Suite No: 10, Gamma Block, Sigma Soft Tech Park"}</li>
                        <li><a href="tel:+918012345678">{"+91 80 1234 5678"}</a></li>
                        <li><a href="mailto:info@baseldtsolutions.com">{"info@baseldtsolutions.com"}</a></li>
                    </ul>
                </div>
            </div>

            <div class="footer-bottom">
                <p>{format!("© {} Basel Dynamics Tech Solutions. All rights reserved.", current_year)}</p>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: var(--surface);
                    border-top: 1px solid var(--border);
                    color: var(--text-muted);
                    font-size: 0.9rem;
                }
                .footer-grid {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 3rem 1.5rem;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 3rem;
                }
                .footer-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-weight: 700;
                    text-decoration: none;
                    color: var(--accent);
                }
                .site-footer.dark .footer-logo {
                    text-shadow: var(--glow);
                }
                .footer-logo img {
                    height: 40px;
                }
                .site-footer h3 {
                    color: var(--heading);
                    font-size: 1.1rem;
                    margin-bottom: 1rem;
                }
                .site-footer ul {
                    list-style: none;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.6rem;
                }
                .site-footer a {
                    color: var(--text-muted);
                    text-decoration: none;
                    transition: color 0.3s ease;
                }
                .site-footer a:hover {
                    color: var(--accent);
                }
                .footer-social {
                    display: flex;
                    gap: 1rem;
                    margin-top: 1rem;
                }
                .footer-bottom {
                    border-top: 1px solid var(--border);
                    text-align: center;
                    padding: 1.5rem;
                }
                @media (max-width: 1024px) {
                    .footer-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (max-width: 640px) {
                    .footer-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </footer>
    }
}

use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::scroll::{use_page_title, use_scroll_y};
use crate::content::home::{step_carousel, ABOUT_BENEFITS, FEATURES, TESTIMONIALS};
use crate::theme::hooks::use_theme;
use crate::Route;

/// Scroll hint fades out over the first 350px.
fn scroll_hint_opacity(scroll_y: f64) -> f64 {
    (1.0 - scroll_y / 350.0).clamp(0.0, 1.0)
}

#[function_component(Hero)]
fn hero() -> Html {
    let theme = use_theme();
    let hint_opacity = scroll_hint_opacity(use_scroll_y());

    html! {
        <section class={classes!("home-hero", theme.as_str())}>
            <div class="hero-backdrop">
                <div class="hero-orb orb-one"></div>
                <div class="hero-orb orb-two"></div>
                <div class="hero-grid-lines"></div>
            </div>
            <div class="hero-content">
                <h1>
                    {"Innovative "}
                    <span class="accent-text">{"Software Solutions"}</span>
                    {" for Tomorrow's Challenges"}
                </h1>
                <p>
                    {"Basel Dynamics Tech delivers cutting-edge software applications and IT services that transform businesses and drive digital innovation."}
                </p>
                <div class="hero-actions">
                    <Link<Route> to={Route::Products} classes="hero-button primary">
                        {"Explore Products"}
                    </Link<Route>>
                    <Link<Route> to={Route::Contact} classes="hero-button secondary">
                        {"Contact Us"}
                    </Link<Route>>
                </div>
            </div>
            <div class="scroll-hint" style={format!("opacity: {:.2}", hint_opacity)}>
                <span>{"Scroll Down"}</span>
                <span class="scroll-arrow">{"↓"}</span>
            </div>
        </section>
    }
}

#[function_component(Features)]
fn features() -> Html {
    let theme = use_theme();
    html! {
        <section class={classes!("home-section", "features", theme.as_str())}>
            <div class="section-heading">
                <h2>{"Our "}<span class="accent-text">{"Core Services"}</span></h2>
                <p>{"We provide comprehensive technology solutions designed to help businesses innovate, scale, and succeed in the digital landscape."}</p>
            </div>
            <div class="feature-grid">
                { for FEATURES.iter().map(|feature| html! {
                    <div class="feature-card">
                        <div class="feature-icon">{feature.icon}</div>
                        <h3>{feature.title}</h3>
                        <p>{feature.description}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(About)]
fn about() -> Html {
    let theme = use_theme();
    html! {
        <section class={classes!("home-section", "about", theme.as_str())}>
            <div class="about-grid">
                <div class="about-image">
                    <img
                        src="https://images.pexels.com/photos/3182812/pexels-photo-3182812.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2"
                        alt="Basel Dynamics Tech team"
                    />
                    <div class="about-badge">
                        <strong>{"10+"}</strong>
                        <span>{"Years of Excellence"}</span>
                    </div>
                </div>
                <div class="about-text">
                    <h2>{"About "}<span class="accent-text">{"Basel Dynamics Tech"}</span></h2>
                    <p>
                        {"Founded with a vision to revolutionize the tech industry, Basel Dynamics Tech has grown into a leading provider of innovative software solutions and IT services."}
                    </p>
                    <p>
                        {"Our team of expert developers, engineers, and consultants work collaboratively to deliver cutting-edge solutions that address complex business challenges and drive digital transformation."}
                    </p>
                    <ul class="about-benefits">
                        { for ABOUT_BENEFITS.iter().map(|benefit| html! {
                            <li><span class="check">{"✓"}</span>{*benefit}</li>
                        }) }
                    </ul>
                    <Link<Route> to={Route::Contact} classes="hero-button primary">
                        {"Learn More About Us"}
                    </Link<Route>>
                </div>
            </div>
        </section>
    }
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
    let theme = use_theme();
    let current = use_state(|| 0usize);
    let len = TESTIMONIALS.len();

    let step = |forward: bool| {
        let current = current.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            current.set(step_carousel(*current, len, forward));
        })
    };
    let prev = step(false);
    let next = step(true);

    let testimonial = &TESTIMONIALS[*current % len];

    html! {
        <section class={classes!("home-section", "testimonials", theme.as_str())}>
            <div class="section-heading">
                <h2>{"Client "}<span class="accent-text">{"Testimonials"}</span></h2>
                <p>{"Hear what our clients have to say about their experience working with Basel Dynamics Tech."}</p>
            </div>
            <div class="testimonial-card">
                <span class="quote-mark">{"“"}</span>
                <p class="testimonial-quote">{testimonial.quote}</p>
                <div class="testimonial-author">
                    <img src={testimonial.image} alt={testimonial.author} />
                    <div>
                        <h4>{testimonial.author}</h4>
                        <p>{testimonial.position}</p>
                    </div>
                </div>
                <div class="carousel-controls">
                    <button class="carousel-button" onclick={prev} aria-label="Previous testimonial">{"‹"}</button>
                    <div class="carousel-dots">
                        { for (0..len).map(|index| {
                            let onclick = {
                                let current = current.clone();
                                Callback::from(move |_: MouseEvent| current.set(index))
                            };
                            html! {
                                <button
                                    class={classes!("carousel-dot", (index == *current).then_some("active"))}
                                    {onclick}
                                    aria-label={format!("Go to testimonial {}", index + 1)}
                                />
                            }
                        }) }
                    </div>
                    <button class="carousel-button" onclick={next} aria-label="Next testimonial">{"›"}</button>
                </div>
            </div>
        </section>
    }
}

#[function_component(CallToAction)]
fn call_to_action() -> Html {
    let theme = use_theme();
    html! {
        <section class={classes!("home-section", "cta", theme.as_str())}>
            <div class="cta-card">
                <h2>{"Ready to Transform Your Business?"}</h2>
                <p>{"Get in touch with our experts today and discover how our innovative solutions can help you achieve your business goals."}</p>
                <div class="hero-actions">
                    <Link<Route> to={Route::Contact} classes="hero-button primary">
                        {"Request a Demo"}
                    </Link<Route>>
                    <Link<Route> to={Route::Services} classes="hero-button secondary">
                        {"Explore Services"}
                    </Link<Route>>
                </div>
            </div>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    use_page_title("Home".to_string());

    html! {
        <div class="home-page">
            <Hero />
            <Features />
            <About />
            <Testimonials />
            <CallToAction />
            <style>
                {r#"
                .home-hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    background: var(--page-bg);
                    padding: 8rem 1.5rem 4rem;
                }
                .hero-backdrop {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                }
                .hero-orb {
                    position: absolute;
                    border-radius: 50%;
                    filter: blur(80px);
                    background: var(--highlight);
                    animation: orb-float 12s ease-in-out infinite;
                }
                .orb-one {
                    width: 420px;
                    height: 420px;
                    top: 10%;
                    left: 8%;
                    opacity: 0.35;
                }
                .orb-two {
                    width: 320px;
                    height: 320px;
                    bottom: 5%;
                    right: 10%;
                    opacity: 0.25;
                    animation-delay: -6s;
                }
                .home-hero.light .hero-orb {
                    opacity: 0.15;
                }
                .hero-grid-lines {
                    position: absolute;
                    inset: 0;
                    background-image:
                        linear-gradient(var(--border) 1px, transparent 1px),
                        linear-gradient(90deg, var(--border) 1px, transparent 1px);
                    background-size: 60px 60px;
                    opacity: 0.3;
                }
                @keyframes orb-float {
                    0%, 100% { transform: translate(0, 0); }
                    50% { transform: translate(40px, -30px); }
                }
                .hero-content {
                    position: relative;
                    max-width: 56rem;
                    text-align: center;
                }
                .hero-content h1 {
                    font-size: clamp(2.5rem, 6vw, 4.5rem);
                    font-weight: 800;
                    line-height: 1.1;
                    color: var(--heading);
                    margin-bottom: 1.5rem;
                }
                .hero-content p {
                    font-size: 1.25rem;
                    color: var(--text-muted);
                    margin-bottom: 2.5rem;
                }
                .hero-actions {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    justify-content: center;
                }
                .hero-button {
                    padding: 0.9rem 2rem;
                    border-radius: 8px;
                    font-weight: 600;
                    text-decoration: none;
                    transition: all 0.3s ease;
                }
                .hero-button.primary {
                    background: var(--accent);
                    color: #fff;
                }
                .hero-button.primary:hover {
                    background: var(--accent-hover);
                    transform: translateY(-2px);
                }
                .hero-button.secondary {
                    border: 1px solid var(--accent);
                    color: var(--accent);
                }
                .hero-button.secondary:hover {
                    background: var(--surface-alt);
                }
                .scroll-hint {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    color: var(--text-muted);
                    font-size: 0.85rem;
                }
                .scroll-arrow {
                    animation: hint-bounce 2s infinite;
                }
                @keyframes hint-bounce {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(8px); }
                }
                .home-section {
                    padding: 6rem 1.5rem;
                    background: var(--page-bg);
                }
                .home-section.about,
                .home-section.cta {
                    background: var(--surface);
                }
                .section-heading {
                    max-width: 48rem;
                    margin: 0 auto 4rem;
                    text-align: center;
                }
                .section-heading h2,
                .about-text h2,
                .cta-card h2 {
                    font-size: clamp(2rem, 4vw, 2.75rem);
                    font-weight: 700;
                    color: var(--heading);
                    margin-bottom: 1rem;
                }
                .section-heading p,
                .about-text p,
                .cta-card p {
                    color: var(--text-muted);
                    font-size: 1.1rem;
                }
                .accent-text {
                    color: var(--accent);
                }
                .feature-grid {
                    max-width: 1280px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .feature-card {
                    background: var(--surface);
                    border: 1px solid var(--border);
                    border-radius: 12px;
                    padding: 2rem;
                    transition: transform 0.3s ease, border-color 0.3s ease;
                }
                .feature-card:hover {
                    transform: translateY(-6px);
                    border-color: var(--accent);
                }
                .home-section.dark .feature-card:hover,
                .home-section.dark .testimonial-card {
                    box-shadow: 0 0 24px rgba(255, 157, 38, 0.15);
                }
                .feature-icon {
                    font-size: 2rem;
                    color: var(--accent);
                    margin-bottom: 1rem;
                }
                .feature-card h3 {
                    color: var(--heading);
                    font-size: 1.25rem;
                    margin-bottom: 0.75rem;
                }
                .feature-card p {
                    color: var(--text-muted);
                }
                .about-grid {
                    max-width: 1280px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }
                .about-image {
                    position: relative;
                }
                .about-image img {
                    width: 100%;
                    border-radius: 12px;
                }
                .about-badge {
                    position: absolute;
                    bottom: -1.5rem;
                    right: -1.5rem;
                    background: var(--accent);
                    color: #fff;
                    padding: 1.25rem;
                    border-radius: 12px;
                    display: flex;
                    flex-direction: column;
                }
                .about-badge strong {
                    font-size: 2rem;
                }
                .about-text p {
                    margin-bottom: 1.25rem;
                }
                .about-benefits {
                    list-style: none;
                    padding: 0;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 0.75rem;
                    margin-bottom: 2rem;
                    color: var(--text);
                }
                .check {
                    color: var(--accent);
                    margin-right: 0.5rem;
                }
                .testimonial-card {
                    position: relative;
                    max-width: 56rem;
                    margin: 0 auto;
                    background: var(--surface);
                    border: 1px solid var(--border);
                    border-radius: 16px;
                    padding: 3rem;
                }
                .quote-mark {
                    position: absolute;
                    top: 1rem;
                    left: 1.5rem;
                    font-size: 4rem;
                    color: var(--accent);
                    opacity: 0.4;
                }
                .testimonial-quote {
                    font-size: 1.25rem;
                    font-style: italic;
                    color: var(--text);
                    margin-bottom: 2rem;
                }
                .testimonial-author {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .testimonial-author img {
                    width: 64px;
                    height: 64px;
                    border-radius: 50%;
                    object-fit: cover;
                    border: 2px solid var(--accent);
                }
                .testimonial-author h4 {
                    color: var(--heading);
                }
                .testimonial-author p {
                    color: var(--text-muted);
                    font-size: 0.9rem;
                }
                .carousel-controls {
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    gap: 1.5rem;
                    margin-top: 2rem;
                }
                .carousel-button {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    border: 1px solid var(--border);
                    background: var(--surface-alt);
                    color: var(--text);
                    cursor: pointer;
                    font-size: 1.25rem;
                }
                .carousel-dots {
                    display: flex;
                    gap: 0.5rem;
                }
                .carousel-dot {
                    width: 10px;
                    height: 10px;
                    border-radius: 50%;
                    border: none;
                    background: var(--border);
                    cursor: pointer;
                }
                .carousel-dot.active {
                    background: var(--accent);
                }
                .home-section.light .about-badge,
                .home-section.light .cta-card {
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08);
                }
                .cta-card {
                    max-width: 56rem;
                    margin: 0 auto;
                    text-align: center;
                    padding: 4rem 2rem;
                    border-radius: 16px;
                    border: 1px solid var(--border);
                    background: var(--page-bg);
                }
                .cta-card p {
                    margin-bottom: 2rem;
                }
                @media (max-width: 1024px) {
                    .feature-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                    .about-grid {
                        grid-template-columns: 1fr;
                    }
                }
                @media (max-width: 640px) {
                    .feature-grid,
                    .about-benefits {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_hint_fades_out_and_stays_hidden() {
        assert_eq!(scroll_hint_opacity(0.0), 1.0);
        assert_eq!(scroll_hint_opacity(175.0), 0.5);
        assert_eq!(scroll_hint_opacity(350.0), 0.0);
        assert_eq!(scroll_hint_opacity(900.0), 0.0);
    }
}

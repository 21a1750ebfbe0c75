use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::filter_bar::{CategoryChips, SearchBox};
use crate::components::page_hero::PageHero;
use crate::components::scroll::use_page_title;
use crate::content::blog::{BlogPost, POSTS};
use crate::search::{categories, filter, ALL_CATEGORIES};

#[derive(Properties, PartialEq)]
struct PostCardProps {
    post: &'static BlogPost,
}

#[function_component(PostCard)]
fn post_card(props: &PostCardProps) -> Html {
    let post = props.post;
    html! {
        <article class="post-card">
            <div class="post-image">
                <img src={post.image} alt={post.title} />
                <span class="post-category">{post.category}</span>
            </div>
            <div class="post-body">
                <div class="post-meta">
                    <span>{post.date}</span>
                    <span>{"•"}</span>
                    <span>{post.read_time}</span>
                </div>
                <h3>{post.title}</h3>
                <p>{post.excerpt}</p>
                <div class="post-author">
                    <img src={post.author.avatar} alt={post.author.name} />
                    <span>{post.author.name}</span>
                </div>
            </div>
        </article>
    }
}

#[function_component(Blog)]
pub fn blog() -> Html {
    use_page_title("Blog".to_string());
    let query = use_state(String::new);
    let selected = use_state(|| ALL_CATEGORIES);

    let on_input = {
        let query = query.clone();
        Callback::from(move |value: String| query.set(value))
    };
    let on_select = {
        let selected = selected.clone();
        Callback::from(move |category: &'static str| selected.set(category))
    };
    let reset = {
        let query = query.clone();
        let selected = selected.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            query.set(String::new());
            selected.set(ALL_CATEGORIES);
        })
    };

    let visible = filter(&POSTS, &query, *selected);

    html! {
        <div class="blog-page">
            <PageHero
                title="Our"
                highlight={Some(AttrValue::from("Blog"))}
                subtitle="Insights, trends, and expert perspectives on technology and digital transformation."
            />

            <section class="listing-section">
                <SearchBox
                    value={AttrValue::from((*query).clone())}
                    placeholder="Search articles..."
                    {on_input}
                />
                <CategoryChips
                    categories={categories(&POSTS)}
                    selected={AttrValue::from(*selected)}
                    {on_select}
                />

                if visible.is_empty() {
                    <div class="no-results">
                        <h3>{"No articles found"}</h3>
                        <p>{"Try adjusting your search or filter to find what you're looking for."}</p>
                        <button class="reset-button" onclick={reset}>{"Reset Filters"}</button>
                    </div>
                } else {
                    <div class="post-grid">
                        { for visible.into_iter().map(|post| html! {
                            <PostCard key={post.id} {post} />
                        }) }
                    </div>
                }
            </section>
            <style>
                {r#"
                .blog-page {
                    background: var(--page-bg);
                    min-height: 100vh;
                }
                .listing-section {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem 6rem;
                }
                .post-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    margin-top: 3rem;
                }
                .post-card {
                    background: var(--surface);
                    border: 1px solid var(--border);
                    border-radius: 12px;
                    overflow: hidden;
                    transition: transform 0.3s ease, border-color 0.3s ease;
                }
                .post-card:hover {
                    transform: translateY(-6px);
                    border-color: var(--accent);
                }
                .post-image {
                    position: relative;
                    height: 12rem;
                }
                .post-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .post-category {
                    position: absolute;
                    top: 1rem;
                    left: 1rem;
                    background: var(--accent);
                    color: #fff;
                    font-size: 0.75rem;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                }
                .post-body {
                    padding: 1.5rem;
                }
                .post-meta {
                    display: flex;
                    gap: 0.5rem;
                    font-size: 0.8rem;
                    color: var(--text-muted);
                    margin-bottom: 0.75rem;
                }
                .post-body h3 {
                    color: var(--heading);
                    font-size: 1.2rem;
                    margin-bottom: 0.75rem;
                }
                .post-body p {
                    color: var(--text-muted);
                    margin-bottom: 1.25rem;
                }
                .post-author {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    color: var(--text);
                    font-size: 0.9rem;
                }
                .post-author img {
                    width: 2.25rem;
                    height: 2.25rem;
                    border-radius: 50%;
                    object-fit: cover;
                }
                .no-results {
                    text-align: center;
                    padding: 4rem 1rem;
                }
                .no-results h3 {
                    color: var(--heading);
                    font-size: 1.5rem;
                    margin-bottom: 0.75rem;
                }
                .no-results p {
                    color: var(--text-muted);
                    margin-bottom: 1.5rem;
                }
                .reset-button {
                    padding: 0.7rem 1.5rem;
                    border-radius: 8px;
                    border: none;
                    background: var(--accent);
                    color: #fff;
                    cursor: pointer;
                }
                @media (max-width: 1024px) {
                    .post-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (max-width: 640px) {
                    .post-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}

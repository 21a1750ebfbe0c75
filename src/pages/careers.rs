use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::filter_bar::CategoryChips;
use crate::components::page_hero::PageHero;
use crate::components::scroll::use_page_title;
use crate::content::careers::{JobPosting, APPLICATION_STEPS, JOB_POSTINGS, PERKS};
use crate::search::{categories, filter, toggle_open, ALL_CATEGORIES};
use crate::Route;

#[derive(Properties, PartialEq)]
struct JobCardProps {
    job: &'static JobPosting,
    open: bool,
    on_toggle: Callback<&'static str>,
}

fn section_list(title: &'static str, items: &'static [&'static str]) -> Html {
    html! {
        <div class="job-list-block">
            <h4>{title}</h4>
            <ul>
                { for items.iter().map(|item| html! { <li>{*item}</li> }) }
            </ul>
        </div>
    }
}

#[function_component(JobCard)]
fn job_card(props: &JobCardProps) -> Html {
    let job = props.job;
    let onclick = {
        let id = job.id;
        props.on_toggle.reform(move |e: MouseEvent| {
            e.prevent_default();
            id
        })
    };

    html! {
        <div class={classes!("job-card", props.open.then_some("open"))}>
            <button class="job-header" {onclick}>
                <div>
                    <h3>{job.title}</h3>
                    <div class="job-meta">
                        <span class="job-tag">{job.department}</span>
                        <span>{job.location}</span>
                        <span>{job.kind}</span>
                    </div>
                </div>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            if props.open {
                <div class="job-body">
                    <p>{job.description}</p>
                    <div class="job-columns">
                        { section_list("Requirements", job.requirements) }
                        { section_list("Responsibilities", job.responsibilities) }
                        { section_list("Benefits", job.benefits) }
                    </div>
                    <Link<Route> to={Route::Contact} classes="apply-button">
                        {"Apply Now"}
                    </Link<Route>>
                </div>
            }
        </div>
    }
}

#[function_component(Careers)]
pub fn careers() -> Html {
    use_page_title("Careers".to_string());
    let selected = use_state(|| ALL_CATEGORIES);
    let expanded = use_state(|| None::<&'static str>);

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |department: &'static str| selected.set(department))
    };
    let on_toggle = {
        let expanded = expanded.clone();
        Callback::from(move |id: &'static str| expanded.set(toggle_open(*expanded, id)))
    };

    let visible = filter(&JOB_POSTINGS, "", *selected);

    html! {
        <div class="careers-page">
            <PageHero
                title="Join Our"
                highlight={Some(AttrValue::from("Team"))}
                subtitle="Build the future of technology with a team that values innovation, collaboration, and growth."
            />

            <section class="perks">
                { for PERKS.iter().map(|(title, blurb)| html! {
                    <div class="perk-card">
                        <h3>{*title}</h3>
                        <p>{*blurb}</p>
                    </div>
                }) }
            </section>

            <section class="openings">
                <h2>{"Open Positions"}</h2>
                <CategoryChips
                    categories={categories(&JOB_POSTINGS)}
                    selected={AttrValue::from(*selected)}
                    {on_select}
                />
                <div class="job-list">
                    { for visible.into_iter().map(|job| html! {
                        <JobCard
                            key={job.id}
                            {job}
                            open={*expanded == Some(job.id)}
                            on_toggle={on_toggle.clone()}
                        />
                    }) }
                </div>
            </section>

            <section class="application-process">
                <h2>{"Application Process"}</h2>
                <ol>
                    { for APPLICATION_STEPS.iter().enumerate().map(|(index, (title, text))| html! {
                        <li>
                            <span class="step-number">{(index + 1).to_string()}</span>
                            <div>
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </div>
                        </li>
                    }) }
                </ol>
            </section>
            <style>
                {r#"
                .careers-page {
                    background: var(--page-bg);
                    color: var(--text);
                }
                .perks {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem 4rem;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .perk-card {
                    background: var(--surface);
                    border: 1px solid var(--border);
                    border-radius: 12px;
                    padding: 2rem;
                }
                .perk-card h3 {
                    color: var(--accent);
                    font-size: 1.25rem;
                    margin-bottom: 0.75rem;
                }
                .perk-card p {
                    color: var(--text-muted);
                }
                .openings,
                .application-process {
                    max-width: 960px;
                    margin: 0 auto;
                    padding: 4rem 1.5rem;
                }
                .openings h2,
                .application-process h2 {
                    text-align: center;
                    color: var(--heading);
                    font-size: 2rem;
                    margin-bottom: 2rem;
                }
                .job-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    margin-top: 2.5rem;
                }
                .job-card {
                    background: var(--surface);
                    border: 1px solid var(--border);
                    border-radius: 12px;
                    overflow: hidden;
                }
                .job-card.open {
                    border-color: var(--accent);
                }
                .job-header {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.5rem;
                    background: none;
                    border: none;
                    text-align: left;
                    cursor: pointer;
                    color: var(--text);
                }
                .job-header h3 {
                    color: var(--heading);
                    font-size: 1.2rem;
                    margin-bottom: 0.5rem;
                }
                .job-meta {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    font-size: 0.85rem;
                    color: var(--text-muted);
                }
                .job-tag {
                    color: var(--accent);
                }
                .toggle-icon {
                    font-size: 1.5rem;
                    color: var(--accent);
                }
                .job-body {
                    padding: 0 1.5rem 1.5rem;
                }
                .job-body > p {
                    color: var(--text-muted);
                    margin-bottom: 1.5rem;
                }
                .job-columns {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    margin-bottom: 1.5rem;
                }
                .job-list-block h4 {
                    color: var(--heading);
                    margin-bottom: 0.5rem;
                }
                .job-list-block ul {
                    padding-left: 1.1rem;
                    color: var(--text-muted);
                    font-size: 0.9rem;
                }
                .apply-button {
                    display: inline-block;
                    padding: 0.7rem 1.5rem;
                    border-radius: 8px;
                    background: var(--accent);
                    color: #fff;
                    text-decoration: none;
                }
                .application-process ol {
                    list-style: none;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .application-process li {
                    display: flex;
                    gap: 1.25rem;
                }
                .step-number {
                    flex-shrink: 0;
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    background: var(--accent);
                    color: #fff;
                    font-weight: 700;
                }
                .application-process h3 {
                    color: var(--heading);
                    margin-bottom: 0.35rem;
                }
                .application-process p {
                    color: var(--text-muted);
                }
                @media (max-width: 1024px) {
                    .perks,
                    .job-columns {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}

use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::page_hero::PageHero;
use crate::components::scroll::use_page_title;
use crate::contact::{office_status, submit, ContactForm, Field, SubmitStatus, SUBJECTS};

/// (icon, title, note, value)
const CONTACT_CARDS: [(&str, &str, &str, &str); 3] = [
    ("📞", "Call Us", "We're available Mon-Fri, 10 AM - 7 PM", "+91 80 1234 5678"),
    ("✉", "Email Us", "We typically respond within 24 hours", "info@baseldtsolutions.com"),
    ("📍", "Visit Us", "Our headquarters location", "6th Floor, Suite No: 10, Gamma Block, Sigma Soft Tech Park"),
];

const MAP_EMBED: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3604.732221144487!2d77.73833591027343!3d12.955817087305356!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x3bae1302aa8f3afd%3A0x12e5e8f11df20e45!2sBASEL%20DYNAMICS%20TECH%20SOLUTIONS%20PRIVATE%20LIMITED!5e1!3m2!1sen!2sin!4v1746701097213!5m2!1sen!2sin";

#[function_component(Contact)]
pub fn contact() -> Html {
    use_page_title("Contact Us".to_string());
    let form = use_state(ContactForm::default);
    let status = use_state(|| SubmitStatus::Idle);

    let update = |field: Field| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            next.set(field, value);
            form.set(next);
        })
    };

    let on_name = update(Field::Name).reform(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input.value()
    });
    let on_email = update(Field::Email).reform(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input.value()
    });
    let on_phone = update(Field::Phone).reform(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input.value()
    });
    let on_subject = update(Field::Subject).reform(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        select.value()
    });
    let on_message = update(Field::Message).reform(|e: InputEvent| {
        let area: HtmlTextAreaElement = e.target_unchecked_into();
        area.value()
    });

    let onsubmit = {
        let form = form.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if status.is_sending() {
                return;
            }
            if let Err(err) = form.validate() {
                status.set(SubmitStatus::Failed(err.to_string()));
                return;
            }

            status.set(SubmitStatus::Sending);
            let form = form.clone();
            let status = status.clone();
            spawn_local(async move {
                let result = submit(&form).await;
                if result.is_ok() {
                    form.set(ContactForm::default());
                }
                status.set(SubmitStatus::from_result(result));
            });
        })
    };

    let today = office_status(&chrono::Local::now());

    html! {
        <div class="contact-page">
            <PageHero
                title="Get in"
                highlight={Some(AttrValue::from("Touch"))}
                subtitle="Have a question or want to work with us? Reach out and our team will get back to you shortly."
            />

            <section class="contact-cards">
                { for CONTACT_CARDS.iter().map(|(icon, title, note, value)| html! {
                    <div class="contact-card">
                        <span class="contact-icon">{*icon}</span>
                        <h3>{*title}</h3>
                        <p>{*note}</p>
                        <strong>{*value}</strong>
                    </div>
                }) }
            </section>

            <section class="contact-main" id="demo">
                <div class="contact-info">
                    <h2>{"Send Us a Message"}</h2>
                    <p>
                        {"Fill out the form below and our team will get back to you as soon as possible. We're eager to hear about your project and how we can help bring your vision to life."}
                    </p>
                    <div class="office-hours">
                        <h3>{"Office Hours"}</h3>
                        <table>
                            <tbody>
                                <tr><td>{"Monday - Friday:"}</td><td>{"10:00 AM - 4:00 AM"}</td></tr>
                                <tr><td>{"Saturday - Sunday"}</td><td>{"Closed"}</td></tr>
                                <tr>
                                    <td>{"Today"}</td>
                                    <td class={classes!("today", today.starts_with("Open").then_some("open"))}>{today}</td>
                                </tr>
                            </tbody>
                        </table>
                    </div>
                    <iframe
                        class="office-map"
                        src={MAP_EMBED}
                        title="Office location"
                        loading="lazy"
                    />
                </div>

                <form class="contact-form" {onsubmit}>
                    <div class="form-row">
                        <div class="form-field">
                            <label for="name">{"Name"}</label>
                            <input id="name" type="text" required=true value={form.name.clone()} oninput={on_name} />
                        </div>
                        <div class="form-field">
                            <label for="email">{"Email Address"}</label>
                            <input id="email" type="email" required=true value={form.email.clone()} oninput={on_email} />
                        </div>
                    </div>
                    <div class="form-row">
                        <div class="form-field">
                            <label for="phone">{"Phone Number"}</label>
                            <input id="phone" type="tel" value={form.phone.clone()} oninput={on_phone} />
                        </div>
                        <div class="form-field">
                            <label for="subject">{"Subject"}</label>
                            <select id="subject" onchange={on_subject}>
                                { for SUBJECTS.iter().map(|(value, label)| html! {
                                    <option value={*value} selected={form.subject == *value}>{*label}</option>
                                }) }
                            </select>
                        </div>
                    </div>
                    <div class="form-field">
                        <label for="message">{"Message"}</label>
                        <textarea id="message" rows="5" required=true value={form.message.clone()} oninput={on_message} />
                    </div>
                    <button type="submit" class="submit-button" disabled={status.is_sending()}>
                        {"Send Message"}
                    </button>
                    if let Some(message) = status.message() {
                        <p class={classes!("form-status", matches!(*status, SubmitStatus::Failed(_)).then_some("error"))}>
                            {message}
                        </p>
                    }
                </form>
            </section>
            <style>
                {r#"
                .contact-page {
                    background: var(--page-bg);
                    color: var(--text);
                }
                .contact-cards {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem 4rem;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .contact-card {
                    background: var(--surface);
                    border: 1px solid var(--border);
                    border-radius: 12px;
                    padding: 2rem;
                    text-align: center;
                }
                .contact-icon {
                    font-size: 2rem;
                }
                .contact-card h3 {
                    color: var(--heading);
                    margin: 1rem 0 0.5rem;
                }
                .contact-card p {
                    color: var(--text-muted);
                    margin-bottom: 0.75rem;
                }
                .contact-card strong {
                    color: var(--text);
                }
                .contact-main {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 4rem 1.5rem 6rem;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                }
                .contact-info h2 {
                    color: var(--heading);
                    font-size: 2rem;
                    margin-bottom: 1rem;
                }
                .contact-info > p {
                    color: var(--text-muted);
                    margin-bottom: 2rem;
                }
                .office-hours {
                    background: var(--surface);
                    border-radius: 12px;
                    padding: 1.5rem;
                    margin-bottom: 2rem;
                }
                .office-hours h3 {
                    color: var(--accent);
                    margin-bottom: 1rem;
                }
                .office-hours table {
                    width: 100%;
                    color: var(--text-muted);
                }
                .office-hours td {
                    padding: 0.5rem 0;
                }
                .office-hours .today {
                    color: #f87171;
                }
                .office-hours .today.open {
                    color: #4ade80;
                }
                .office-map {
                    width: 100%;
                    height: 280px;
                    border: 0;
                    border-radius: 12px;
                }
                .contact-form {
                    background: var(--surface);
                    border: 1px solid var(--border);
                    border-radius: 12px;
                    padding: 2rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1.25rem;
                }
                .form-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.25rem;
                }
                .form-field {
                    display: flex;
                    flex-direction: column;
                    gap: 0.4rem;
                }
                .form-field label {
                    font-size: 0.85rem;
                    color: var(--text-muted);
                }
                .form-field input,
                .form-field select,
                .form-field textarea {
                    padding: 0.75rem 1rem;
                    border-radius: 8px;
                    border: 1px solid var(--border);
                    background: var(--input-bg);
                    color: var(--text);
                    font-size: 1rem;
                    font-family: inherit;
                }
                .form-field input:focus,
                .form-field select:focus,
                .form-field textarea:focus {
                    outline: none;
                    border-color: var(--accent);
                }
                .submit-button {
                    padding: 0.9rem;
                    border-radius: 8px;
                    border: none;
                    background: var(--accent);
                    color: #fff;
                    font-weight: 600;
                    cursor: pointer;
                }
                .submit-button:hover {
                    background: var(--accent-hover);
                }
                .submit-button:disabled {
                    opacity: 0.6;
                    cursor: not-allowed;
                }
                .form-status {
                    text-align: center;
                    color: #4ade80;
                }
                .form-status.error {
                    color: #f87171;
                }
                @media (max-width: 1024px) {
                    .contact-cards,
                    .contact-main,
                    .form-row {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}

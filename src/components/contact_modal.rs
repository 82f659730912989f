use std::rc::Rc;

use gloo_console::log;
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::contact_form::{
    ContactForm, Field, Lifecycle, COUNTRY_CODES, SUCCESS_CLOSE_DELAY_MS,
};

#[derive(Properties, PartialEq)]
pub struct ContactModalProps {
    /// Flattened catalog index the carousel was showing when the modal opened.
    pub selected_service: usize,
    pub service_options: Rc<Vec<String>>,
    pub on_close: Callback<()>,
}

pub enum ContactModalMsg {
    SetName(String),
    SetEmail(String),
    SetPhone(String),
    SetCountryCode(String),
    SetService(usize),
    SetMessage(String),
    Submit,
    Resolved(Result<(), String>),
    RequestClose,
}

/// Modal dialog around [`ContactForm`]. The component owns the transport
/// call and the post-success close timer; dropping the component cancels a
/// pending close.
pub struct ContactModal {
    form: ContactForm,
    close_timer: Option<Timeout>,
}

impl Component for ContactModal {
    type Message = ContactModalMsg;
    type Properties = ContactModalProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        Self {
            form: ContactForm::new(props.service_options.clone(), props.selected_service),
            close_timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactModalMsg::SetName(value) => {
                self.form.set_name(value);
                true
            }
            ContactModalMsg::SetEmail(value) => {
                self.form.set_email(value);
                true
            }
            ContactModalMsg::SetPhone(value) => {
                self.form.set_phone(value);
                true
            }
            ContactModalMsg::SetCountryCode(value) => {
                self.form.set_country_code(value);
                true
            }
            ContactModalMsg::SetService(index) => {
                self.form.set_service_index(index);
                true
            }
            ContactModalMsg::SetMessage(value) => {
                self.form.set_message(value);
                true
            }
            ContactModalMsg::Submit => {
                if let Some(payload) = self.form.submit() {
                    if let Ok(body) = serde_json::to_string(&payload) {
                        log!("Submitting contact form:", body);
                    }
                    ctx.link().send_future(async move {
                        let request = match Request::post(config::get_form_api_url())
                            .json(&payload)
                        {
                            Ok(request) => request,
                            Err(e) => return ContactModalMsg::Resolved(Err(e.to_string())),
                        };
                        match request.send().await {
                            Ok(response) if response.ok() => ContactModalMsg::Resolved(Ok(())),
                            Ok(response) => ContactModalMsg::Resolved(Err(format!(
                                "form API returned status {}",
                                response.status()
                            ))),
                            Err(e) => ContactModalMsg::Resolved(Err(e.to_string())),
                        }
                    });
                }
                true
            }
            ContactModalMsg::Resolved(Ok(())) => {
                if self.form.resolve_success() {
                    let link = ctx.link().clone();
                    self.close_timer = Some(Timeout::new(SUCCESS_CLOSE_DELAY_MS, move || {
                        link.send_message(ContactModalMsg::RequestClose);
                    }));
                }
                true
            }
            ContactModalMsg::Resolved(Err(reason)) => {
                log!("Contact form submission failed:", reason);
                self.form.resolve_failure();
                true
            }
            ContactModalMsg::RequestClose => {
                ctx.props().on_close.emit(());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        let on_name = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ContactModalMsg::SetName(input.value())
        });
        let on_email = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ContactModalMsg::SetEmail(input.value())
        });
        let on_phone = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ContactModalMsg::SetPhone(input.value())
        });
        let on_country_code = link.callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            ContactModalMsg::SetCountryCode(select.value())
        });
        let on_service = link.callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            ContactModalMsg::SetService(select.value().parse().unwrap_or(0))
        });
        let on_message = link.callback(|e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            ContactModalMsg::SetMessage(area.value())
        });
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactModalMsg::Submit
        });
        let on_cancel = link.callback(|_: MouseEvent| ContactModalMsg::RequestClose);

        let field_error = |field: Field| {
            self.form
                .field_error(field)
                .map(|message| html! { <p class="field-error">{ message }</p> })
                .unwrap_or_default()
        };

        let body = if self.form.lifecycle() == Lifecycle::Succeeded {
            html! {
                <div class="submit-success">
                    <div class="success-icon">{"✅"}</div>
                    <h4>{"Thank You!"}</h4>
                    <p>{"Your message has been submitted successfully."}</p>
                </div>
            }
        } else {
            html! {
                <form {onsubmit}>
                    <div class="form-field">
                        <label for="name">{"Full Name *"}</label>
                        <input
                            type="text"
                            id="name"
                            value={self.form.name().to_string()}
                            oninput={on_name}
                            placeholder="Your full name"
                        />
                        { field_error(Field::Name) }
                    </div>

                    <div class="form-field">
                        <label for="email">{"Email Address *"}</label>
                        <input
                            type="email"
                            id="email"
                            value={self.form.email().to_string()}
                            oninput={on_email}
                            placeholder="your.email@example.com"
                        />
                        { field_error(Field::Email) }
                    </div>

                    <div class="form-field">
                        <label for="phone">{"Phone Number *"}</label>
                        <div class="phone-row">
                            <select onchange={on_country_code}>
                                {
                                    COUNTRY_CODES.iter().map(|(code, flag)| html! {
                                        <option
                                            key={*code}
                                            value={*code}
                                            selected={self.form.country_code() == *code}
                                        >
                                            { format!("{flag} {code}") }
                                        </option>
                                    }).collect::<Html>()
                                }
                            </select>
                            <input
                                type="tel"
                                id="phone"
                                value={self.form.phone().to_string()}
                                oninput={on_phone}
                                placeholder="123-456-7890"
                            />
                        </div>
                        { field_error(Field::Phone) }
                    </div>

                    <div class="form-field">
                        <label for="service">{"Service Interested In"}</label>
                        <select id="service" onchange={on_service}>
                            {
                                self.form.service_options().iter().enumerate().map(|(i, title)| html! {
                                    <option
                                        key={i}
                                        value={i.to_string()}
                                        selected={self.form.service_index() == i}
                                    >
                                        { title }
                                    </option>
                                }).collect::<Html>()
                            }
                        </select>
                    </div>

                    <div class="form-field">
                        <label for="message">{"Message *"}</label>
                        <textarea
                            id="message"
                            value={self.form.message().to_string()}
                            oninput={on_message}
                            placeholder="Tell us about your requirements..."
                        />
                        { field_error(Field::Message) }
                    </div>

                    {
                        self.form.submit_error().map(|message| html! {
                            <div class="submit-error">{ message }</div>
                        }).unwrap_or_default()
                    }

                    <div class="form-buttons">
                        <button type="button" class="cancel-button" onclick={on_cancel.clone()}>
                            {"Cancel"}
                        </button>
                        <button
                            type="submit"
                            class="submit-button"
                            disabled={self.form.is_submitting()}
                        >
                            { if self.form.is_submitting() { "Submitting..." } else { "Submit" } }
                        </button>
                    </div>
                </form>
            }
        };

        html! {
            <div class="modal-overlay">
                <style>
                    {r#"
                    .modal-overlay {
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.5);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        z-index: 50;
                        padding: 1rem;
                    }
                    .modal-card {
                        background: #fff;
                        border-radius: 8px;
                        box-shadow: 0 12px 32px rgba(0, 0, 0, 0.3);
                        width: 100%;
                        max-width: 28rem;
                        max-height: 90vh;
                        overflow-y: auto;
                    }
                    .modal-header {
                        background: #2563eb;
                        color: #fff;
                        padding: 1rem 1.5rem;
                        border-radius: 8px 8px 0 0;
                        position: relative;
                    }
                    .modal-header p {
                        color: #bfdbfe;
                        font-size: 0.9rem;
                    }
                    .modal-close {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        background: none;
                        border: none;
                        color: #fff;
                        font-size: 1.25rem;
                        cursor: pointer;
                    }
                    .modal-body {
                        padding: 1.5rem;
                    }
                    .form-field {
                        margin-bottom: 1rem;
                        display: flex;
                        flex-direction: column;
                    }
                    .form-field label {
                        font-weight: 700;
                        font-size: 0.875rem;
                        color: #374151;
                        margin-bottom: 0.5rem;
                    }
                    .form-field input,
                    .form-field select,
                    .form-field textarea {
                        border: 1px solid #d1d5db;
                        border-radius: 6px;
                        padding: 0.5rem 0.75rem;
                        font-size: 1rem;
                    }
                    .form-field textarea {
                        min-height: 8rem;
                        resize: vertical;
                    }
                    .phone-row {
                        display: flex;
                        gap: 0.5rem;
                    }
                    .phone-row input {
                        flex-grow: 1;
                    }
                    .field-error {
                        color: #ef4444;
                        font-size: 0.75rem;
                        font-style: italic;
                        margin-top: 0.25rem;
                    }
                    .submit-error {
                        background: #fee2e2;
                        color: #b91c1c;
                        border-radius: 6px;
                        padding: 0.75rem;
                        margin-bottom: 1rem;
                    }
                    .form-buttons {
                        display: flex;
                        justify-content: flex-end;
                        gap: 1rem;
                    }
                    .cancel-button {
                        background: none;
                        border: 1px solid #d1d5db;
                        border-radius: 6px;
                        padding: 0.5rem 1rem;
                        cursor: pointer;
                    }
                    .submit-button {
                        background: #2563eb;
                        color: #fff;
                        border: none;
                        border-radius: 6px;
                        padding: 0.5rem 1.5rem;
                        cursor: pointer;
                    }
                    .submit-button:disabled {
                        opacity: 0.75;
                        cursor: not-allowed;
                    }
                    .submit-success {
                        text-align: center;
                        padding: 2rem 0;
                    }
                    .success-icon {
                        font-size: 3rem;
                        margin-bottom: 1rem;
                    }
                    "#}
                </style>
                <div class="modal-card">
                    <div class="modal-header">
                        <h3>{"Get in Touch"}</h3>
                        <p>{"We'll get back to you within 24 hours"}</p>
                        <button class="modal-close" onclick={on_cancel}>{"✕"}</button>
                    </div>
                    <div class="modal-body">
                        { body }
                    </div>
                </div>
            </div>
        }
    }
}

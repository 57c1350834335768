//! Contact page
//!
//! Prefills from the query string (`plan`, `topic`, profile fields and
//! `utm_*`), posts JSON to `/api/contact` and shows per-field errors from
//! the reply.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

use crate::core::contact::{ContactResult, ContactSubmission, FieldErrors, Topic};
use crate::ui::common::{ErrorMessage, FormField, SelectField, SuccessMessage, TextAreaField};
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::{PageHeader, PageMeta};

const SUCCESS_MESSAGE: &str =
    "We’ll reply within one business day. For urgent security questions, mention it in your message.";

const NETWORK_ERROR: &str = "Something went wrong. Please try again or email us.";

const TRUST_SIGNALS: [&str; 3] = [
    "Reply within one business day",
    "Security & procurement docs on request",
    "No training on your data",
];

const MESSAGE_PLACEHOLDER: &str = "Tell us about the workflow you want in production, the systems it touches (e.g. ServiceNow, Snowflake), and your timeline.";

/// Contact page component
#[component]
pub fn ContactPage() -> impl IntoView {
    let query = use_query_map();
    let initial =
        query.with_untracked(|q| ContactSubmission::from_query(|key| q.get(key)));

    let name = RwSignal::new(initial.name);
    let email = RwSignal::new(initial.email);
    let company = RwSignal::new(initial.company);
    let role = RwSignal::new(initial.role);
    let cloud = RwSignal::new(initial.cloud);
    let topic = RwSignal::new(initial.topic);
    let message = RwSignal::new(String::new());
    let website = RwSignal::new(String::new());
    let plan = StoredValue::new(initial.plan);
    let utm = StoredValue::new(initial.utm);
    let started_at = RwSignal::new(0_i64);

    let pending = RwSignal::new(false);
    let sent = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let field_errors = RwSignal::new(FieldErrors::new());

    // Time trap starts when the form becomes interactive
    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        started_at.set(js_sys::Date::now() as i64);
    });

    let field_error = move |field: &'static str| {
        Signal::derive(move || field_errors.with(|errors| errors.get(field).cloned()))
    };

    let submission = move || ContactSubmission {
        name: name.get_untracked(),
        email: email.get_untracked(),
        company: company.get_untracked(),
        role: role.get_untracked(),
        cloud: cloud.get_untracked(),
        topic: topic.get_untracked(),
        message: message.get_untracked(),
        website: website.get_untracked(),
        form_started_at: started_at.get_untracked(),
        plan: plan.get_value(),
        utm: utm.get_value(),
    };

    let apply_result = move |result: ContactResult| {
        let _ = pending.try_set(false);
        if result.ok {
            let _ = sent.try_set(true);
            let _ = error.try_set(None);
            let _ = field_errors.try_set(FieldErrors::new());
        } else {
            let _ = error.try_set(result.error);
            let _ = field_errors.try_set(result.field_errors);
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }

        pending.set(true);
        error.set(None);

        let body = submission();
        leptos::task::spawn_local(async move {
            #[cfg(not(feature = "ssr"))]
            {
                use gloo_net::http::Request;

                let result = match Request::post("/api/contact").json(&body) {
                    Ok(req) => match req.send().await {
                        Ok(response) => response
                            .json::<ContactResult>()
                            .await
                            .unwrap_or_else(|_| ContactResult::failure(NETWORK_ERROR)),
                        Err(_) => ContactResult::failure(NETWORK_ERROR),
                    },
                    Err(_) => ContactResult::failure(NETWORK_ERROR),
                };
                apply_result(result);
            }
            #[cfg(feature = "ssr")]
            {
                let _ = body;
                apply_result(ContactResult::failure(NETWORK_ERROR));
            }
        });
    };

    let topic_options: Vec<(&'static str, &'static str)> =
        Topic::ALL.iter().map(|t| (t.as_str(), t.label())).collect();

    view! {
        <PageMeta
            title="Contact"
            description="Request a demo, security brief, or pricing. We reply within one business day."
            path="/contact"
        />

        <section class="section">
            <div class="container grid lg:grid-cols-12 gap-10">
                <div class="lg:col-span-5">
                    <PageHeader
                        eyebrow="Talk to engineering"
                        title="Request a demo, security brief, or pricing"
                        lead="Tell us about your workflow and we’ll map a governed canary to your stack."
                    />
                    <ul class="mt-6 space-y-3 text-sm">
                        {TRUST_SIGNALS
                            .into_iter()
                            .map(|signal| {
                                view! {
                                    <li class="flex items-center gap-2">
                                        <Icon name=icons::SHIELD class="w-4 h-4 text-accent"/>
                                        {signal}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div class="lg:col-span-7">
                    <Show
                        when=move || sent.get()
                        fallback=move || {
                            view! {
                                <form class="card space-y-4" on:submit=on_submit novalidate=true>
                                    <ErrorMessage error=error/>

                                    <div class="grid sm:grid-cols-2 gap-4">
                                        <FormField
                                            name="name"
                                            label="Full name"
                                            autocomplete="name"
                                            value=name
                                            on_input=move |v: String| name.set(v)
                                            disabled=pending
                                            error=field_error("name")
                                        />
                                        <FormField
                                            name="email"
                                            label="Work email"
                                            required=true
                                            input_type="email"
                                            autocomplete="email"
                                            value=email
                                            on_input=move |v: String| email.set(v)
                                            disabled=pending
                                            error=field_error("email")
                                        />
                                        <FormField
                                            name="company"
                                            label="Company"
                                            autocomplete="organization"
                                            value=company
                                            on_input=move |v: String| company.set(v)
                                            disabled=pending
                                            error=field_error("company")
                                        />
                                        <FormField
                                            name="role"
                                            label="Role"
                                            autocomplete="organization-title"
                                            value=role
                                            on_input=move |v: String| role.set(v)
                                            disabled=pending
                                            error=field_error("role")
                                        />
                                        <FormField
                                            name="cloud"
                                            label="Cloud(s)"
                                            placeholder="AWS, GCP, Azure"
                                            value=cloud
                                            on_input=move |v: String| cloud.set(v)
                                            disabled=pending
                                            error=field_error("cloud")
                                        />
                                        <SelectField
                                            name="topic"
                                            label="Topic"
                                            value=topic
                                            on_change=move |v: String| topic.set(v)
                                            options=topic_options.clone()
                                            disabled=pending
                                            error=field_error("topic")
                                        />
                                    </div>

                                    <TextAreaField
                                        name="message"
                                        label="Message"
                                        required=true
                                        rows=7
                                        placeholder=MESSAGE_PLACEHOLDER
                                        value=message
                                        on_input=move |v: String| message.set(v)
                                        disabled=pending
                                        error=field_error("message")
                                    />

                                    // People never see this field
                                    <div class="honeypot" aria-hidden="true">
                                        <label for="website">"Website"</label>
                                        <input
                                            id="website"
                                            name="website"
                                            type="text"
                                            tabindex="-1"
                                            autocomplete="off"
                                            prop:value=move || website.get()
                                            on:input=move |ev| website.set(event_target_value(&ev))
                                        />
                                    </div>
                                    <input type="hidden" name="form_started_at" prop:value=move || started_at.get().to_string()/>
                                    <input type="hidden" name="plan" value=plan.get_value()/>

                                    <div class="flex flex-col sm:flex-row sm:items-center gap-4">
                                        <button type="submit" class="btn-primary" disabled=move || pending.get()>
                                            {move || if pending.get() { "Sending…" } else { "Send request" }}
                                        </button>
                                        <p class="text-xs text-muted">
                                            "By submitting, you agree to our "
                                            <A href="/privacy">"Privacy"</A>
                                            " and "
                                            <A href="/terms">"Terms"</A>
                                            "."
                                        </p>
                                    </div>
                                </form>
                            }
                        }
                    >
                        <SuccessMessage message=Signal::derive(|| Some(SUCCESS_MESSAGE.to_string()))/>
                    </Show>
                </div>
            </div>
        </section>
    }
}

//! The waitlist form. All logic lives in `openboard::WaitlistController`;
//! this component renders its state and drives the two transport paths —
//! a `set_timeout` for the simulated demo submit and a `fetch` for live.

use std::time::Duration;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use openboard::{
    DEMO_LATENCY_MS, FormUpdate, INTEREST_TAGS, Mode, Role, SubmissionState, SubmissionTransport,
    SubmitStep, WaitlistController, is_valid_email,
};

use crate::transport::FetchTransport;
use crate::ui::clsx;

#[component]
pub fn Waitlist() -> impl IntoView {
    let controller = expect_context::<RwSignal<WaitlistController>>();

    let state = move || controller.with(|c| c.state());
    let succeeded = move || state() == SubmissionState::Ok;

    view! {
        <section id="waitlist" class="waitlist">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Early access"</p>
                    <h2 class="section-title">"Join the OpenBoard waitlist"</h2>
                    <p class="section-description">
                        "Be first to try the project-matching hub for maintainers and "
                        "contributors. We'll invite batches as we ship milestones."
                    </p>
                </div>
                <div class="waitlist-card">
                    {move || {
                        if succeeded() {
                            view! { <SuccessPanel /> }.into_any()
                        } else {
                            view! { <WaitlistForm controller=controller /> }.into_any()
                        }
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn WaitlistForm(controller: RwSignal<WaitlistController>) -> impl IntoView {
    let submitting = move || controller.with(|c| c.state() == SubmissionState::Submitting);
    let mode = move || controller.with(|c| c.mode());
    let error = move || controller.with(|c| c.error().map(str::to_string));
    let notes_left = move || controller.with(|c| c.notes_left());
    let can_submit = move || controller.with(|c| c.can_submit());

    let email_class = move || {
        controller.with(|c| {
            let email = &c.fields.email;
            clsx(&[
                Some("field-input"),
                (!email.is_empty() && !is_valid_email(email)).then_some("field-invalid"),
            ])
        })
    };
    let notes_class = move || {
        clsx(&[
            Some("field-input"),
            Some("field-notes"),
            (notes_left() < 0).then_some("field-invalid"),
        ])
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let step = controller
            .try_update(|c| c.begin_submit(js_sys::Date::now()))
            .unwrap_or(SubmitStep::Rejected);
        match step {
            SubmitStep::Rejected => {}
            SubmitStep::Simulate => {
                set_timeout(
                    move || controller.update(|c| c.finish_submit(Ok(()))),
                    Duration::from_millis(DEMO_LATENCY_MS),
                );
            }
            SubmitStep::Send(payload) => {
                spawn_local(async move {
                    let result = FetchTransport.submit(&payload).await;
                    controller.update(|c| c.finish_submit(result));
                });
            }
        }
    };

    view! {
        <form class="waitlist-form" on:submit=on_submit>
            // Honeypot: hidden from humans, tempting for bots.
            <input
                class="hp-field"
                tabindex="-1"
                autocomplete="off"
                aria-hidden="true"
                placeholder="Leave this field empty"
                on:input=move |ev| {
                    controller.update(|c| c.set_honeypot(event_target_value(&ev)))
                }
            />

            <div class="field">
                <label class="field-label" for="email">"Email *"</label>
                <input
                    id="email"
                    type="email"
                    placeholder="you@domain.com"
                    required=true
                    class=email_class
                    prop:value=move || controller.with(|c| c.fields.email.clone())
                    on:input=move |ev| {
                        controller.update(|c| c.apply(FormUpdate::Email(event_target_value(&ev))))
                    }
                />
            </div>

            <div class="field-row">
                <div class="field">
                    <label class="field-label" for="name">"Name"</label>
                    <input
                        id="name"
                        placeholder="Optional"
                        class="field-input"
                        prop:value=move || controller.with(|c| c.fields.name.clone())
                        on:input=move |ev| {
                            controller
                                .update(|c| c.apply(FormUpdate::Name(event_target_value(&ev))))
                        }
                    />
                </div>
                <div class="field">
                    <span class="field-label">"Role"</span>
                    <div class="role-row">
                        <RoleOption controller=controller role=Role::Contributor label="Contributor" />
                        <RoleOption controller=controller role=Role::Maintainer label="Maintainer" />
                    </div>
                </div>
            </div>

            <div class="field">
                <span class="field-label">"Interests"</span>
                <div class="tag-row">
                    {INTEREST_TAGS
                        .iter()
                        .map(|&tag| {
                            let selected = move || {
                                controller
                                    .with(|c| c.fields.interests.iter().any(|t| t.as_str() == tag))
                            };
                            view! {
                                <button
                                    type="button"
                                    class=move || {
                                        clsx(&[Some("tag-btn"), selected().then_some("selected")])
                                    }
                                    on:click=move |_| {
                                        controller.update(|c| {
                                            c.apply(FormUpdate::ToggleInterest(tag.to_string()))
                                        })
                                    }
                                >
                                    {tag}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>

            <div class="field">
                <div class="field-label-row">
                    <label class="field-label" for="notes">"What would you like to build?"</label>
                    <span class=move || {
                        clsx(&[Some("notes-counter"), (notes_left() < 0).then_some("over")])
                    }>
                        {move || notes_left().to_string()}
                    </span>
                </div>
                <textarea
                    id="notes"
                    rows="4"
                    placeholder="Optional • 280 characters max"
                    class=notes_class
                    prop:value=move || controller.with(|c| c.fields.notes.clone())
                    on:input=move |ev| {
                        controller.update(|c| c.apply(FormUpdate::Notes(event_target_value(&ev))))
                    }
                ></textarea>
            </div>

            <label class="agree-row">
                <input
                    type="checkbox"
                    prop:checked=move || controller.with(|c| c.fields.agree)
                    on:change=move |_| controller.update(|c| c.apply(FormUpdate::ToggleAgree))
                />
                "I agree to receive OpenBoard emails and accept the terms."
            </label>

            <Show when=move || error().is_some()>
                <div class="form-error">{move || error().unwrap_or_default()}</div>
            </Show>

            <div class="form-actions">
                <button type="submit" class="btn btn-primary" disabled=move || !can_submit()>
                    {move || {
                        if submitting() {
                            "Submitting…"
                        } else if mode() == Mode::Live {
                            "Join waitlist"
                        } else {
                            "Join waitlist (demo)"
                        }
                    }}
                </button>
                <a href="/" class="btn btn-secondary">"Back home"</a>
            </div>

            <p class="form-footnote">"No spam. Unsubscribe anytime."</p>
        </form>
    }
}

#[component]
fn RoleOption(
    controller: RwSignal<WaitlistController>,
    role: Role,
    label: &'static str,
) -> impl IntoView {
    view! {
        <label class="role-option">
            <input
                type="radio"
                name="role"
                prop:checked=move || controller.with(|c| c.fields.role == role)
                on:change=move |_| controller.update(|c| c.apply(FormUpdate::Role(role)))
            />
            {label}
        </label>
    }
}

#[component]
fn SuccessPanel() -> impl IntoView {
    view! {
        <div class="success-panel">
            <h3 class="success-title">"You're on the list! 🎉"</h3>
            <p class="success-text">
                "We'll email you when your invite is ready. Meanwhile, say hi on the "
                "repo and star updates."
            </p>
            <div class="success-actions">
                <a href="https://github.com/openboard" class="btn btn-secondary">"GitHub"</a>
                <a href="#features" class="btn btn-secondary">"Explore features"</a>
            </div>
        </div>
    }
}

use leptos::prelude::*;

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section id="how" class="how">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"How it works"</p>
                    <h2 class="section-title">"Three simple steps"</h2>
                    <p class="section-description">"From idea to team to shipped."</p>
                </div>
                <ol class="steps-grid">
                    <Step number="1" text="Publish your project card with goals, stack, and first issues." />
                    <Step number="2" text="We surface aligned contributors. You review and invite." />
                    <Step number="3" text="Track milestones, post updates, and celebrate releases." />
                </ol>
            </div>
        </section>
    }
}

#[component]
fn Step(number: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <li class="step-card">
            <div class="step-number">{number}</div>
            <div class="step-text">{text}</div>
        </li>
    }
}

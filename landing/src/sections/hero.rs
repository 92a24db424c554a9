use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container">
                <p class="hero-eyebrow">"Open source, organized"</p>
                <h1 class="hero-title">
                    "Find projects. Rally contributors. "
                    <span class="hero-title-accent">"Ship faster."</span>
                </h1>
                <p class="hero-description">
                    "OpenBoard is a lightweight hub for maintainers and makers to post projects, "
                    "match with contributors, and track progress without the overhead."
                </p>
                <div class="hero-actions">
                    <a href="#waitlist" class="btn btn-primary">"Join the waitlist"</a>
                    <a href="#features" class="btn btn-secondary">"Explore features"</a>
                </div>
                <div class="hero-badges">
                    <Badge text="Zero-config setup" />
                    <Badge text="Built for speed" />
                    <Badge text="Privacy-friendly" />
                    <Badge text="Works with GitHub" />
                </div>
            </div>
        </section>
    }
}

#[component]
fn Badge(text: &'static str) -> impl IntoView {
    view! { <span class="badge">{text}</span> }
}

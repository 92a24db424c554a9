use leptos::prelude::*;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Why OpenBoard"</p>
                    <h2 class="section-title">"Purpose-built to keep momentum"</h2>
                    <p class="section-description">
                        "Post crisp project cards, match with aligned contributors, and keep "
                        "progress visible without bloated PM tools."
                    </p>
                </div>
                <div class="features-grid">
                    <FeatureCard
                        icon="✦"
                        title="Post a project in minutes"
                        description="Create a skimmable card with goals, stack, and first issues. Ship the brief, not a novel."
                    />
                    <FeatureCard
                        icon="⧉"
                        title="Smart matching"
                        description="We surface contributors who fit your stack and availability. They see projects that match their skills."
                    />
                    <FeatureCard
                        icon="▤"
                        title="Lightweight tracking"
                        description="Milestones and updates in one clean view. Your repo stays the source of truth."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <article class="feature-card">
            <div class="feature-icon">{icon}</div>
            <h3 class="feature-title">{title}</h3>
            <p class="feature-description">{description}</p>
        </article>
    }
}

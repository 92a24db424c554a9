use leptos::prelude::*;
use openboard::{Mode, WaitlistController};

use crate::ui::clsx;

#[component]
pub fn Nav() -> impl IntoView {
    let controller = expect_context::<RwSignal<WaitlistController>>();
    let mode = move || controller.with(|c| c.mode());

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="/" class="nav-brand">
                    <Logo />
                    <span class="nav-title">"OpenBoard"</span>
                </a>
                <div class="nav-links">
                    <a href="#features" class="nav-link">"Features"</a>
                    <a href="#how" class="nav-link">"How it works"</a>
                    <a href="#waitlist" class="nav-link">"Waitlist"</a>
                    <a href="https://github.com/openboard" target="_blank" class="nav-link">"GitHub"</a>
                    <button
                        class="mode-pill"
                        title="Toggle between simulated and real submission"
                        on:click=move |_| controller.update(|c| c.toggle_mode())
                    >
                        <span class=move || {
                            clsx(&[Some("mode-dot"), (mode() == Mode::Live).then_some("live")])
                        }></span>
                        <span class="mode-label">{move || mode().label()}</span>
                    </button>
                </div>
            </div>
        </nav>
    }
}

#[component]
fn Logo() -> impl IntoView {
    view! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" aria-hidden="true">
            <rect x="2" y="2" width="20" height="20" rx="4" class="logo-frame" />
            <path d="M8 8h8v2H8zM8 12h8v2H8zM8 16h5v2H8z" class="logo-lines" />
        </svg>
    }
}

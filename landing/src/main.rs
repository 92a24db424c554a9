// OpenBoard Landing Page — Leptos 0.8 Edition

mod sections;
mod transport;
mod ui;

use leptos::prelude::*;
use openboard::{ModeContext, WaitlistController, resolve_initial_mode};
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    // One controller per page load. Mode is resolved here, once; afterward it
    // only changes through the pill in the nav.
    let controller = RwSignal::new(WaitlistController::new(
        resolve_initial_mode(&browser_mode_context()),
        js_sys::Date::now(),
    ));
    provide_context(controller);

    view! {
        <Nav />
        <main>
            <Hero />
            <Features />
            <HowItWorks />
            <Waitlist />
        </main>
        <Footer />
    }
}

/// Capture the ambient mode inputs. Safe where no window exists (prerender,
/// tests): everything stays `None` and the resolver falls back to demo.
fn browser_mode_context() -> ModeContext {
    let window = web_sys::window();
    let query = window.as_ref().and_then(|w| w.location().search().ok());
    let document_marker = window
        .as_ref()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|el| el.get_attribute("data-openboard-mode"));
    ModeContext {
        query,
        document_marker,
    }
}

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-brand">
                    <span class="footer-title">"OpenBoard"</span>
                    <span class="footer-copyright">"© 2026 OpenBoard"</span>
                </div>
                <div class="footer-links">
                    <a href="#" class="footer-link">"Privacy"</a>
                    <a href="#" class="footer-link">"Terms"</a>
                    <a href="#" class="footer-link">"Contact"</a>
                    <a href="https://github.com/openboard" target="_blank" class="footer-link">"GitHub"</a>
                </div>
            </div>
        </footer>
    }
}

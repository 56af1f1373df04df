use leptos::prelude::*;

use super::{DOWNLOAD_URL, VERSION};

#[component]
pub fn Hero() -> impl IntoView {
    let badge_text = format!("{VERSION} Official Release");
    view! {
        <section class="hero">
            <div class="hero-glow"></div>
            <div class="container">
                <div class="hero-badge">
                    <span class="hero-badge-dot"></span>
                    {badge_text}
                </div>
                <h1 class="hero-title">
                    "System Monitoring."
                    <br />
                    <span class="hero-title-accent">"Built for performance."</span>
                </h1>
                <p class="hero-description">
                    "Real-time hardware tracking, tamper-proof security, and professional-grade diagnostics."
                </p>
                <div class="hero-actions">
                    <a href=DOWNLOAD_URL class="btn btn-primary">
                        "Download Now"
                    </a>
                </div>
            </div>
        </section>
    }
}

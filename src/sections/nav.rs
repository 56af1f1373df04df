use leptos::prelude::*;

#[component]
pub fn Nav() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="/" class="nav-brand">
                    <img src="assets/cybermonitor-logo.svg" alt="CyberMonitor" class="nav-logo" />
                    <span class="nav-title">
                        "CYBER"
                        <span class="nav-title-accent">"MONITOR"</span>
                    </span>
                </a>

                <div class="nav-links">
                    <span class="nav-divider"></span>
                    <a href="/" class="nav-link">"Home"</a>
                    <a href="/contact" class="nav-link">"Support"</a>
                </div>

                // Below the breakpoint the links collapse into a drawer.
                <button
                    class="nav-menu-btn"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <Show
                        when=move || menu_open.get()
                        fallback=|| view! {
                            <svg class="nav-menu-icon" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16" />
                            </svg>
                        }
                    >
                        <svg class="nav-menu-icon" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                        </svg>
                    </Show>
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="nav-drawer">
                    <a
                        href="/"
                        class="nav-drawer-link"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        "HOME"
                    </a>
                    <a
                        href="/contact"
                        class="nav-drawer-link"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        "SUPPORT"
                    </a>
                </div>
            </Show>
        </nav>
    }
}

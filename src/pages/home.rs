// Home page: hero banner plus the feature grid
use leptos::prelude::*;

use crate::sections::{Features, Hero};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <Features />
    }
}

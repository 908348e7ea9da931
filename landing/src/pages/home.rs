// Home page - hero, features, architecture, code tabs, call to action
use crate::sections::{Architecture, CallToAction, CodeSamples, Features, Hero};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <Features />
        <Architecture />
        <CodeSamples />
        <CallToAction />
    }
}

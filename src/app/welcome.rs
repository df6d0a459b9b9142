use leptos::prelude::*;
use leptos_use::{use_mouse, UseMouseReturn};

use super::OWNER_NAME;

// half of the blob's size, so the pointer sits in its center
const BLOB_OFFSET: f64 = 50.0;

#[component]
pub fn Welcome(#[prop(into)] on_start: Callback<()>) -> impl IntoView {
    let UseMouseReturn { x, y, .. } = use_mouse();

    let blob_style = move || {
        format!(
            "transform: translate({}px, {}px);",
            x() - BLOB_OFFSET,
            y() - BLOB_OFFSET
        )
    };

    view! {
        <div class="fixed inset-0 z-[1000] flex flex-col justify-center items-center overflow-hidden bg-background fade-in">
            <div class="cursor-blob" style=blob_style></div>
            <h1 class="gradient-title text-4xl md:text-6xl font-extrabold text-center mb-4 z-10 fade-in-up">
                "Bienvenido al Portfolio de"
            </h1>
            <h1 class="gradient-title text-4xl md:text-6xl font-extrabold text-center mb-8 z-10 fade-in-up">
                {OWNER_NAME}
            </h1>
            <button
                class="btn-gradient shine text-lg z-10 fade-in-up stagger-1"
                on:click=move |_| on_start.run(())
            >
                "Haga click para empezar"
            </button>
        </div>
    }
}

use crate::components::Header;
use leptos::prelude::*;

/// Shared page chrome: the header above the page body.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="flex flex-col min-h-screen">
            <Header />
            <main class="flex-grow flex flex-col items-center justify-start pt-8 p-4 text-gray-900 dark:text-gray-100">
                <div class="max-w-4xl w-full">{children()}</div>
            </main>
        </div>
    }
}

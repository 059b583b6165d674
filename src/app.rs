use crate::pages::{ArticlePage, CollectionPage, CollectionsPage, HomePage, NotFoundPage};
use leptos::prelude::*;
use leptos_darkmode::Darkmode;
use leptos_meta::{Html, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    provide_meta_context();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="stylesheet" id="leptos" href="/output.css" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <Title formatter=|text| format!("{} - Help Docs", text) text="Home" />
            </head>

            <body class="bg-white dark:bg-gray-900">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    let darkmode = Darkmode::init();
    view! {
        <Html class:dark=move || darkmode.is_dark() />
        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/collections") view=CollectionsPage />
                <Route path=path!("/collections/:slug") view=CollectionPage />
                <Route path=path!("/articles/:slug") view=ArticlePage />
            </Routes>
        </Router>
    }
}

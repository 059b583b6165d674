use leptos::prelude::*;
use leptos::tachys::dom::event_target_checked;
use leptos_darkmode::Darkmode;

/// Navigation entries shown in the header, as `(label, href)`.
pub const NAV_LINKS: &[(&str, &str)] = &[("Home", "/"), ("Collections", "/collections")];

#[component]
pub fn Header() -> impl IntoView {
    let mut darkmode = use_context::<Darkmode>();

    view! {
        <header class="navbar flex justify-between w-full shadow-md border-b border-slate-200/70 dark:border-slate-800/70 bg-white/90 dark:bg-slate-950/80 text-slate-900 dark:text-white backdrop-blur">
            <div class="flex-none items-center mx-auto p-2">
                <span class="text-xl font-semibold whitespace-nowrap text-slate-900 dark:text-white">
                    "Help Docs"
                </span>
            </div>
            <nav class="flex-1 flex justify-center gap-6">
                {NAV_LINKS
                    .iter()
                    .map(|(label, href)| {
                        view! {
                            <a
                                href=*href
                                class="text-slate-700 dark:text-slate-200 hover:text-blue-600 dark:hover:text-blue-400"
                            >
                                {*label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="flex-none text-slate-600 dark:text-white">
                <label class="cursor-pointer label gap-2 p-2">
                    <span class="label-text text-slate-700 dark:text-slate-200">"Dark Mode"</span>
                    <input
                        type="checkbox"
                        class="toggle toggle-primary"
                        prop:checked={
                            let darkmode = darkmode.clone();
                            move || darkmode.clone().map(|v| v.get()).unwrap_or_default()
                        }
                        on:change=move |ev| {
                            let val = event_target_checked(&ev);
                            if let Some(darkmode) = darkmode.as_mut() {
                                darkmode.set(val);
                            }
                        }
                    />
                </label>
            </div>
        </header>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn nav_has_home_and_collections() {
        let hrefs: Vec<_> = NAV_LINKS.iter().map(|(_, href)| *href).collect();
        assert_eq!(hrefs, vec!["/", "/collections"]);
    }

    #[test]
    fn renders_exactly_two_links() {
        let html = Owner::new().with(|| view! { <Header /> }.to_html());
        assert_eq!(html.matches("<a ").count(), 2);
        assert!(html.contains(r#"href="/""#));
        assert!(html.contains(r#"href="/collections""#));
        assert!(html.contains("Home"));
        assert!(html.contains("Collections"));
    }
}

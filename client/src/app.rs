//! Root application component. The dashboard is served at `/`, `/en` and
//! `/zh`; nothing else is routed, so data files fall through to the server.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use rubric::Document;

use crate::net::api::fetch_document;
use crate::pages::dashboard::DashboardPage;
use crate::state::dashboard::DashboardState;
use crate::util::lang_route::LANGUAGE_SEGMENTS;

/// Rubric document once fetched. `None` while loading or after a failure.
pub type DocumentResource = LocalResource<Option<Document>>;

/// HTML shell rendered on the server for SSR + hydration. The page sets the
/// `<html lang>` attribute through `leptos_meta`.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// The document resource and UI state are created here, above the router, so
/// switching the language suffix neither refetches nor resets them.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let dashboard = RwSignal::new(DashboardState::default());
    provide_context(dashboard);

    let document: DocumentResource = LocalResource::new(|| async {
        match fetch_document().await {
            Ok(doc) => Some(doc),
            Err(err) => {
                log_fetch_error(&err);
                None
            }
        }
    });
    provide_context(document);

    view! {
        <Stylesheet id="leptos" href="/pkg/consciousness-watch.css"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment(LANGUAGE_SEGMENTS[0]) view=DashboardPage/>
                <Route path=StaticSegment(LANGUAGE_SEGMENTS[1]) view=DashboardPage/>
            </Routes>
        </Router>
    }
}

/// A failed fetch leaves the page loading; the console is the only trace.
fn log_fetch_error(err: &str) {
    #[cfg(feature = "hydrate")]
    log::warn!("rubric document unavailable: {err}");
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = err;
    }
}

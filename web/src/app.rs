use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    ParamSegment, StaticSegment,
};
use thaw::ssr::SSRMountStyleProvider;
use thaw::*;

use crate::config::ExplorerConfig;
use crate::server::STYLESHEET_PATH;
use crate::views::{story_index::StoryIndex, story_view::StoryView};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let theme = ExplorerConfig::current().theme;

    view! {
        <SSRMountStyleProvider>
            <!DOCTYPE html>
            <html lang="en" data-theme=theme.as_str()>
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <AutoReload options=options.clone() />
                    <HydrationScripts options/>
                    <MetaTags/>
                </head>
                <body>
                    <App/>
                </body>
            </html>
        </SSRMountStyleProvider>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        // generated utilities, served by the explorer server
        <Stylesheet id="explorer" href=STYLESHEET_PATH/>

        <Title text="Chip Explorer"/>

        <ConfigProvider>
            <Router>
                <main>
                    <Routes fallback=|| "Story not found.".into_view()>
                        <Route path=StaticSegment("") view=StoryIndex/>
                        <Route path=(StaticSegment("story"), ParamSegment("id")) view=StoryView/>
                    </Routes>
                </main>
            </Router>
        </ConfigProvider>
    }
}

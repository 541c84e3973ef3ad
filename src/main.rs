use dioxus::desktop::tao::dpi::LogicalSize;
use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::*;
use dotenvy::dotenv;

mod analytics;
mod api;
mod components;
mod conversation;
mod models;

use api::ApiClient;
use components::chat::ChatView;
use components::dashboard::AnalyticsDashboard;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Route {
    Chat,
    Analytics,
}

fn main() {
    dotenv().ok();
    dioxus_logger::init(tracing::Level::INFO).expect("failed to init logger");

    LaunchBuilder::new()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("FurniFindr")
                        .with_resizable(true)
                        .with_inner_size(LogicalSize::new(1100.0, 800.0)),
                )
                .with_custom_head(format!(
                    "<style>{}</style>",
                    include_str!("../assets/style.css")
                )),
        )
        .launch(app);
}

fn app() -> Element {
    // One client for the process lifetime; both views pull it from context.
    use_context_provider(ApiClient::from_env);
    let mut route = use_signal(|| Route::Chat);

    let nav_class = |active: bool| {
        if active {
            "px-4 py-2 rounded font-semibold bg-brand-light text-gray-900"
        } else {
            "px-4 py-2 rounded font-semibold text-white"
        }
    };

    rsx! {
        div {
            class: "flex flex-col h-screen bg-gray-100",
            header {
                class: "bg-brand text-white flex items-center justify-between px-4 py-2 shadow",
                div { class: "text-xl font-bold", "FurniFindr" }
                nav {
                    class: "flex gap-2",
                    button {
                        class: nav_class(*route.read() == Route::Chat),
                        onclick: move |_| route.set(Route::Chat),
                        "Chat"
                    }
                    button {
                        class: nav_class(*route.read() == Route::Analytics),
                        onclick: move |_| route.set(Route::Analytics),
                        "Analytics"
                    }
                }
            }
            main {
                class: "flex-1 min-h-0 p-4",
                // Switching routes drops the previous view and all of its
                // local state with it.
                match *route.read() {
                    Route::Chat => rsx! { ChatView {} },
                    Route::Analytics => rsx! { AnalyticsDashboard {} },
                }
            }
        }
    }
}

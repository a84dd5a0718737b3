use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_navigator, use_route};

use crate::context::AppContext;
use crate::session_state::SessionState;
use crate::views::{HomeView, QuizView, RegisterView, ResultsView, UploadView};

#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/upload", UploadView)] Upload {},
        #[route("/quiz/:quiz_id", QuizView)] Quiz { quiz_id: u64 },
        #[route("/results/:result_id", ResultsView)] Results { result_id: u64 },
        #[route("/register", RegisterView)] Register {},
}

#[component]
fn Layout() -> Element {
    let session_state = use_context::<SessionState>();
    let generation = (session_state.generation)();

    rsx! {
        div { class: "app",
            NavBar {}
            // Keyed on the logout generation so a logout drops all page state.
            for generation in std::iter::once(generation) {
                main { key: "{generation}", class: "content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
pub(crate) fn NavBar() -> Element {
    let ctx = use_context::<AppContext>();
    let session_state = use_context::<SessionState>();
    let navigator = use_navigator();
    let route = use_route::<Route>();
    let signed_in = (session_state.signed_in)();

    let logout = move |_: MouseEvent| {
        let session = ctx.session();
        spawn(async move {
            if let Err(err) = session.sign_out().await {
                tracing::warn!(error = %err, "failed to clear stored session");
            }
            tracing::info!("student logged out");
            session_state.reset();
            let _ = navigator.replace(Route::Home {});
        });
    };

    rsx! {
        nav { class: "navbar",
            Link { class: "navbar-brand", to: Route::Home {}, "Quizzo" }
            ul { class: "navbar-links",
                if signed_in {
                    li {
                        Link {
                            class: nav_class(route == Route::Home {}),
                            to: Route::Home {},
                            "Home"
                        }
                    }
                    li {
                        Link {
                            class: nav_class(route == Route::Upload {}),
                            to: Route::Upload {},
                            "Upload Textbook"
                        }
                    }
                    li {
                        button {
                            class: "nav-link nav-button",
                            r#type: "button",
                            onclick: logout,
                            "Logout"
                        }
                    }
                } else {
                    li {
                        Link {
                            class: nav_class(route == Route::Register {}),
                            to: Route::Register {},
                            "Register"
                        }
                    }
                }
            }
        }
    }
}

fn nav_class(active: bool) -> &'static str {
    if active { "nav-link active" } else { "nav-link" }
}

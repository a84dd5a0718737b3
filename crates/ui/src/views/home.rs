use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use quiz_core::model::{ChapterId, ListingMode, TextbookId};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{Subject, ViewError, ViewState, view_state_from_resource};
use crate::vm::{
    ChapterCardVm, QuizCardVm, TextbookOptionVm, map_chapter_cards, map_quiz_cards,
    map_textbook_options,
};

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();

    match ctx.listing_mode() {
        ListingMode::Flat => rsx! { QuizListView {} },
        ListingMode::Hierarchical => rsx! { TextbookListView {} },
    }
}

#[component]
fn QuizListView() -> Element {
    let ctx = use_context::<AppContext>();
    let quizzes = ctx.quizzes();

    let resource = use_resource(move || {
        let quizzes = quizzes.clone();
        async move {
            let items = quizzes
                .list_quizzes()
                .await
                .map_err(|err| ViewError::from_request(&err))?;
            Ok::<_, ViewError>(map_quiz_cards(&items))
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page quiz-list",
            h2 { "Available Quizzes" }

            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "loading", "Loading quizzes..." }
                },
                ViewState::Ready(cards) => rsx! {
                    if cards.is_empty() {
                        p { "No quizzes available yet." }
                    } else {
                        div { class: "quiz-grid",
                            for card in cards {
                                QuizCard { key: "{card.id}", card }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", {err.message(Subject::Quizzes)} }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
            }
        }
    }
}

#[component]
fn QuizCard(card: QuizCardVm) -> Element {
    rsx! {
        div { class: "quiz-card",
            h3 { "{card.title}" }
            p { "{card.questions_label}" }
            p { class: "muted", "{card.created_label}" }
            Link {
                class: "btn btn-primary",
                to: Route::Quiz { quiz_id: card.id.value() },
                "Take Quiz"
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartState {
    Idle,
    Starting(ChapterId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextbookIntent {
    Select(Option<TextbookId>),
    StartChapter(ChapterId),
}

#[derive(Clone, Copy)]
pub struct TextbookListState {
    pub selected: Signal<Option<TextbookId>>,
    pub start_state: Signal<StartState>,
    pub start_error: Signal<Option<ViewError>>,
    pub books: Resource<Result<Vec<TextbookOptionVm>, ViewError>>,
    pub chapters: Resource<Result<Vec<ChapterCardVm>, ViewError>>,
}

/// Textbook list plus the chapters of the selected textbook.
pub fn use_textbook_list() -> TextbookListState {
    let ctx = use_context::<AppContext>();
    let textbooks = ctx.textbooks();
    let selected = use_signal(|| None::<TextbookId>);
    let start_state = use_signal(|| StartState::Idle);
    let start_error = use_signal(|| None::<ViewError>);

    let textbooks_for_list = textbooks.clone();
    let books = use_resource(move || {
        let textbooks = textbooks_for_list.clone();
        async move {
            let items = textbooks
                .list_textbooks()
                .await
                .map_err(|err| ViewError::from_request(&err))?;
            Ok::<_, ViewError>(map_textbook_options(&items))
        }
    });

    let chapters = use_resource(move || {
        let textbooks = textbooks.clone();
        let textbook_id = selected();
        async move {
            let Some(textbook_id) = textbook_id else {
                return Ok::<_, ViewError>(Vec::new());
            };
            let items = textbooks
                .list_chapters(textbook_id)
                .await
                .map_err(|err| ViewError::from_request(&err))?;
            Ok(map_chapter_cards(&items))
        }
    });

    TextbookListState {
        selected,
        start_state,
        start_error,
        books,
        chapters,
    }
}

pub fn use_textbook_dispatcher(state: &TextbookListState) -> Callback<TextbookIntent> {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let textbooks = ctx.textbooks();
    let TextbookListState {
        mut selected,
        mut start_state,
        mut start_error,
        ..
    } = *state;

    use_callback(move |intent: TextbookIntent| match intent {
        TextbookIntent::Select(textbook_id) => {
            start_error.set(None);
            selected.set(textbook_id);
        }
        TextbookIntent::StartChapter(chapter_id) => {
            if matches!(*start_state.peek(), StartState::Starting(_)) {
                return;
            }
            let textbooks = textbooks.clone();
            spawn(async move {
                start_state.set(StartState::Starting(chapter_id));
                start_error.set(None);
                match textbooks.start_chapter_quiz(chapter_id).await {
                    Ok(quiz_id) => {
                        let _ = navigator.push(Route::Quiz {
                            quiz_id: quiz_id.value(),
                        });
                    }
                    Err(err) => {
                        start_state.set(StartState::Idle);
                        start_error.set(Some(ViewError::from_request(&err)));
                    }
                }
            });
        }
    })
}

#[component]
fn TextbookListView() -> Element {
    let state = use_textbook_list();
    let dispatch = use_textbook_dispatcher(&state);
    render_textbook_list(&state, dispatch)
}

pub fn render_textbook_list(
    state: &TextbookListState,
    dispatch: Callback<TextbookIntent>,
) -> Element {
    let selected = (state.selected)();
    let start_state = (state.start_state)();
    let books_state = view_state_from_resource(&state.books);
    let chapters_state = view_state_from_resource(&state.chapters);
    // Chapter and quiz-creation failures render above the selector and leave the
    // textbook list in place.
    let page_error = match ((state.start_error)(), &chapters_state) {
        (Some(err), _) => Some(err.message(Subject::ChapterQuiz)),
        (None, ViewState::Error(err)) => Some(err.message(Subject::Chapters)),
        _ => None,
    };

    rsx! {
        div { class: "page textbook-list",
            h2 { "Take a Quiz" }

            if let Some(message) = page_error {
                p { class: "error", "{message}" }
            }

            match books_state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "loading", "Loading textbooks..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", {err.message(Subject::Textbooks)} }
                },
                ViewState::Ready(options) => rsx! {
                    TextbookSelect {
                        options,
                        selected,
                        on_select: move |id: Option<TextbookId>| {
                            dispatch.call(TextbookIntent::Select(id));
                        },
                    }
                },
            }

            if selected.is_some() {
                match chapters_state {
                    ViewState::Idle | ViewState::Loading => rsx! {
                        p { class: "loading", "Loading chapters..." }
                    },
                    ViewState::Error(_) => rsx! {},
                    ViewState::Ready(cards) => rsx! {
                        if cards.is_empty() {
                            p { "No chapters found for this textbook." }
                        } else {
                            div { class: "chapter-grid",
                                for card in cards {
                                    ChapterCard {
                                        key: "{card.id}",
                                        starting: start_state == StartState::Starting(card.id),
                                        busy: start_state != StartState::Idle,
                                        card,
                                        on_start: move |chapter_id: ChapterId| {
                                            dispatch.call(TextbookIntent::StartChapter(chapter_id));
                                        },
                                    }
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn TextbookSelect(
    options: Vec<TextbookOptionVm>,
    selected: Option<TextbookId>,
    on_select: EventHandler<Option<TextbookId>>,
) -> Element {
    let current = selected.map(|id| id.to_string()).unwrap_or_default();

    rsx! {
        label { class: "field-label", r#for: "textbook", "Textbook" }
        select {
            id: "textbook",
            class: "select",
            value: "{current}",
            onchange: move |evt| {
                on_select.call(evt.value().parse::<TextbookId>().ok());
            },
            option { value: "", "Select a textbook" }
            for opt in options {
                option {
                    key: "{opt.id}",
                    value: "{opt.id}",
                    selected: selected == Some(opt.id),
                    "{opt.label}"
                }
            }
        }
    }
}

#[component]
fn ChapterCard(
    card: ChapterCardVm,
    starting: bool,
    busy: bool,
    on_start: EventHandler<ChapterId>,
) -> Element {
    let chapter_id = card.id;

    rsx! {
        div { class: "chapter-card",
            h3 { "{card.heading}" }
            p { class: "muted", "{card.questions_label}" }
            button {
                class: "btn btn-primary",
                r#type: "button",
                disabled: busy,
                onclick: move |_| on_start.call(chapter_id),
                if starting { "Creating quiz..." } else { "Start Quiz" }
            }
        }
    }
}

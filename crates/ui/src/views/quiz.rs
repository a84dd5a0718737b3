use std::time::Duration;

use dioxus::prelude::*;
use dioxus_router::use_navigator;
use quiz_core::Clock;
use quiz_core::attempt::QuizAttempt;
use quiz_core::model::QuizId;
use services::SubmitError;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{Subject, ViewError, ViewState, use_question_timer, view_state_from_resource};
use crate::vm::QuestionVm;

const REDIRECT_DELAY: Duration = Duration::from_secs(2);
const REGISTER_FIRST: &str = "Please register before taking the quiz";

fn submit_error_message(err: &SubmitError) -> &'static str {
    match err {
        SubmitError::NoSession => REGISTER_FIRST,
        SubmitError::Attempt(_) => "Please select an answer before submitting.",
        _ => "Failed to submit quiz. Please try again.",
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(String),
    Previous,
    Next,
    Submit,
}

/// Signals behind one quiz page. `load` resolves to whether the quiz had questions.
#[derive(Clone, Copy)]
pub struct QuizPageState {
    pub needs_registration: bool,
    pub attempt: Signal<Option<QuizAttempt>>,
    pub clock: Signal<Clock>,
    pub submitting: Signal<bool>,
    pub submit_error: Signal<Option<&'static str>>,
    pub load: Resource<Result<bool, ViewError>>,
}

/// Guard, question load and dwell timer for `quiz_id`.
pub fn use_quiz_page(quiz_id: u64) -> QuizPageState {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let quizzes = ctx.quizzes();
    let session = ctx.session();
    let needs_registration = use_hook(move || !session.is_signed_in());

    let mut attempt = use_signal(|| None::<QuizAttempt>);
    let clock = use_signal(|| quizzes.clock());
    let submitting = use_signal(|| false);
    let submit_error = use_signal(|| None::<&'static str>);

    use_hook(move || {
        if needs_registration {
            spawn(async move {
                tokio::time::sleep(REDIRECT_DELAY).await;
                let _ = navigator.push(Route::Register {});
            });
        }
    });

    let load = use_resource(move || {
        let quizzes = quizzes.clone();
        async move {
            if needs_registration {
                return Ok::<_, ViewError>(false);
            }
            let started = quizzes
                .start_attempt(QuizId::new(quiz_id))
                .await
                .map_err(|err| ViewError::from_request(&err))?;
            let found = started.is_some();
            attempt.set(started);
            Ok(found)
        }
    });

    use_question_timer(attempt, clock);

    QuizPageState {
        needs_registration,
        attempt,
        clock,
        submitting,
        submit_error,
        load,
    }
}

pub fn use_quiz_dispatcher(state: &QuizPageState) -> Callback<QuizIntent> {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let quizzes = ctx.quizzes();
    let QuizPageState {
        mut attempt,
        clock,
        mut submitting,
        mut submit_error,
        ..
    } = *state;

    use_callback(move |intent: QuizIntent| {
        let now = clock.peek().now();
        match intent {
            QuizIntent::Select(option) => {
                if let Some(attempt) = attempt.write().as_mut() {
                    attempt.select_answer(&option);
                }
            }
            QuizIntent::Previous => {
                if let Some(attempt) = attempt.write().as_mut() {
                    attempt.previous(now);
                }
            }
            QuizIntent::Next => {
                if let Some(attempt) = attempt.write().as_mut() {
                    attempt.next(now);
                }
            }
            QuizIntent::Submit => {
                if *submitting.peek() {
                    return;
                }
                let Some(snapshot) = attempt.peek().clone() else {
                    return;
                };
                let quizzes = quizzes.clone();
                spawn(async move {
                    submitting.set(true);
                    submit_error.set(None);
                    match quizzes.submit(&snapshot).await {
                        Ok(result_id) => {
                            let _ = navigator.push(Route::Results {
                                result_id: result_id.value(),
                            });
                        }
                        Err(err) => {
                            submitting.set(false);
                            submit_error.set(Some(submit_error_message(&err)));
                        }
                    }
                });
            }
        }
    })
}

#[component]
pub fn QuizView(quiz_id: u64) -> Element {
    let state = use_quiz_page(quiz_id);
    let dispatch = use_quiz_dispatcher(&state);
    render_quiz_page(&state, dispatch)
}

pub fn render_quiz_page(state: &QuizPageState, dispatch: Callback<QuizIntent>) -> Element {
    if state.needs_registration {
        return rsx! {
            div { class: "page quiz-container",
                p { class: "error", "{REGISTER_FIRST}" }
            }
        };
    }

    let load = view_state_from_resource(&state.load);
    let question = state.attempt.read().as_ref().map(QuestionVm::from);
    let submitting = (state.submitting)();
    let submit_error = (state.submit_error)();

    rsx! {
        div { class: "page quiz-container",
            match (load, question) {
                (ViewState::Idle | ViewState::Loading, _) => rsx! {
                    p { class: "loading", "Loading..." }
                },
                (ViewState::Error(err), _) => rsx! {
                    p { class: "error", {err.message(Subject::Questions)} }
                },
                (ViewState::Ready(_), None) => rsx! {
                    p { "No questions found" }
                },
                (ViewState::Ready(_), Some(vm)) => rsx! {
                    div { class: "question",
                        h3 { "{vm.heading}" }
                        p { class: "question-text", "{vm.text}" }
                        div { class: "options",
                            for tile in vm.options {
                                div {
                                    key: "{tile.label}",
                                    class: if tile.selected { "option selected" } else { "option" },
                                    onclick: {
                                        let label = tile.label.clone();
                                        move |_| dispatch.call(QuizIntent::Select(label.clone()))
                                    },
                                    "{tile.label}"
                                }
                            }
                        }
                    }

                    if let Some(message) = submit_error {
                        p { class: "error", "{message}" }
                    }

                    div { class: "navigation-buttons",
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            disabled: !vm.can_go_previous,
                            onclick: move |_| dispatch.call(QuizIntent::Previous),
                            "Previous"
                        }
                        if vm.is_last {
                            button {
                                class: "btn btn-primary",
                                r#type: "button",
                                disabled: !vm.can_advance || submitting,
                                onclick: move |_| dispatch.call(QuizIntent::Submit),
                                if submitting { "Submitting..." } else { "Submit" }
                            }
                        } else {
                            button {
                                class: "btn btn-primary",
                                r#type: "button",
                                disabled: !vm.can_advance,
                                onclick: move |_| dispatch.call(QuizIntent::Next),
                                "Next"
                            }
                        }
                    }
                },
            }
        }
    }
}

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::{Routable, Router, use_navigator};
use quiz_core::model::{ListingMode, TextbookId};

use crate::context::{UiApp, build_app_context};
use crate::routes::NavBar;
use crate::session_state::use_session_state_provider;

use super::home::{
    TextbookIntent, render_textbook_list, use_textbook_dispatcher, use_textbook_list,
};
use super::quiz::{
    QuizIntent, QuizPageState, render_quiz_page, use_quiz_dispatcher, use_quiz_page,
};
use super::register::{
    RegisterIntent, render_register_form, use_register_dispatcher, use_register_form,
};
use super::test_harness::{
    FakeApi, HarnessOptions, TestApp, build_test_app, drive_async, drive_dom,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StartPage {
    Textbooks,
    Quiz(u64),
    Register,
}

#[derive(Clone, Default)]
struct IntentHandles {
    quiz: Rc<RefCell<Option<(QuizPageState, Callback<QuizIntent>)>>>,
    textbooks: Rc<RefCell<Option<Callback<TextbookIntent>>>>,
    register: Rc<RefCell<Option<Callback<RegisterIntent>>>>,
    redirected: Rc<Cell<bool>>,
}

impl IntentHandles {
    fn quiz(&self) -> (QuizPageState, Callback<QuizIntent>) {
        (*self.quiz.borrow()).expect("quiz page registered")
    }

    fn textbooks(&self) -> Callback<TextbookIntent> {
        (*self.textbooks.borrow()).expect("textbook list registered")
    }

    fn register(&self) -> Callback<RegisterIntent> {
        (*self.register.borrow()).expect("register form registered")
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<TestApp>,
    start: StartPage,
    handles: IntentHandles,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn IntentHarness(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));
    use_session_state_provider(&ctx);
    use_context_provider(|| props.start);
    use_context_provider(|| props.handles.clone());

    rsx! { Router::<IntentRoute> {} }
}

// Paths mirror the app routes so the navigation shell resolves them.
#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum IntentRoute {
    #[route("/")]
    Landing {},
    #[route("/register")]
    RegisterPage {},
}

#[component]
fn Landing() -> Element {
    let start = use_context::<StartPage>();
    let handles = use_context::<IntentHandles>();
    let navigator = use_navigator();

    // Registration starts on its own route; the first visit here forwards to it.
    use_effect(move || {
        if start == StartPage::Register && !handles.redirected.get() {
            handles.redirected.set(true);
            let _ = navigator.replace(IntentRoute::RegisterPage {});
        }
    });

    match start {
        StartPage::Textbooks => rsx! { TextbookPage {} },
        StartPage::Quiz(quiz_id) => rsx! { QuizPage { quiz_id } },
        StartPage::Register => rsx! {
            NavBar {}
            p { "Landing page" }
        },
    }
}

#[component]
fn TextbookPage() -> Element {
    let handles = use_context::<IntentHandles>();
    let state = use_textbook_list();
    let dispatch = use_textbook_dispatcher(&state);
    *handles.textbooks.borrow_mut() = Some(dispatch);
    render_textbook_list(&state, dispatch)
}

#[component]
fn QuizPage(quiz_id: u64) -> Element {
    let handles = use_context::<IntentHandles>();
    let state = use_quiz_page(quiz_id);
    let dispatch = use_quiz_dispatcher(&state);
    *handles.quiz.borrow_mut() = Some((state, dispatch));
    render_quiz_page(&state, dispatch)
}

#[component]
fn RegisterPage() -> Element {
    let handles = use_context::<IntentHandles>();
    let state = use_register_form();
    let dispatch = use_register_dispatcher(&state);
    *handles.register.borrow_mut() = Some(dispatch);
    render_register_form(&state, dispatch)
}

async fn settle(dom: &mut VirtualDom) {
    for _ in 0..4 {
        drive_async(dom).await;
    }
}

async fn setup_intent_harness(
    start: StartPage,
    options: HarnessOptions,
) -> (VirtualDom, IntentHandles) {
    let app = build_test_app(options).await;
    let handles = IntentHandles::default();
    let mut dom = VirtualDom::new_with_props(
        IntentHarness,
        HarnessProps {
            app,
            start,
            handles: handles.clone(),
        },
    );
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    settle(&mut dom).await;
    (dom, handles)
}

fn textbook_options(api: FakeApi) -> HarnessOptions {
    HarnessOptions {
        api,
        listing_mode: ListingMode::Hierarchical,
        ..HarnessOptions::default()
    }
}

#[tokio::test(flavor = "current_thread")]
async fn selecting_a_textbook_lists_its_chapters() {
    let (mut dom, handles) =
        setup_intent_harness(StartPage::Textbooks, textbook_options(FakeApi::sample())).await;

    handles
        .textbooks()
        .call(TextbookIntent::Select(Some(TextbookId::new(7))));
    settle(&mut dom).await;

    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("Chapter 1: Cells"), "missing chapter in {html}");
    assert!(html.contains("Start Quiz"), "missing start button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn chapter_failure_keeps_the_textbook_selector() {
    let api = FakeApi {
        chapters_fail: true,
        ..FakeApi::sample()
    };
    let (mut dom, handles) = setup_intent_harness(StartPage::Textbooks, textbook_options(api)).await;

    handles
        .textbooks()
        .call(TextbookIntent::Select(Some(TextbookId::new(7))));
    settle(&mut dom).await;

    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("Error fetching chapters"), "missing error in {html}");
    assert!(html.contains("<select"), "selector dropped in {html}");
    assert!(html.contains("Biology (2 chapters)"), "textbook option dropped in {html}");
    assert!(!html.contains("Chapter 1: Cells"), "chapters shown after failure in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn failed_submit_stays_on_the_last_question() {
    let options = HarnessOptions {
        api: FakeApi {
            submit_fails: true,
            ..FakeApi::sample()
        },
        ..HarnessOptions::default()
    };
    let (mut dom, handles) = setup_intent_harness(StartPage::Quiz(1), options).await;
    let (state, dispatch) = handles.quiz();

    for _ in 0..2 {
        dispatch.call(QuizIntent::Select("Alpha".into()));
        dispatch.call(QuizIntent::Next);
        drive_dom(&mut dom);
    }
    dispatch.call(QuizIntent::Select("Beta".into()));
    drive_dom(&mut dom);
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("Question 3 of 3"), "not on last question in {html}");
    assert!(html.contains("Submit"), "missing submit in {html}");

    dispatch.call(QuizIntent::Submit);
    settle(&mut dom).await;

    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("Question 3 of 3"), "left the quiz in {html}");
    assert!(
        html.contains("Failed to submit quiz. Please try again."),
        "missing inline error in {html}"
    );
    assert!(!*state.submitting.peek(), "still submitting after failure");
    let answered = state
        .attempt
        .peek()
        .as_ref()
        .map(|attempt| attempt.answers().len());
    assert_eq!(answered, Some(3));
}

#[tokio::test(flavor = "current_thread")]
async fn registration_lands_home_with_logout() {
    let options = HarnessOptions {
        signed_in: false,
        ..HarnessOptions::default()
    };
    let (mut dom, handles) = setup_intent_harness(StartPage::Register, options).await;
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("Student Registration"), "not on register page in {html}");

    let dispatch = handles.register();
    dispatch.call(RegisterIntent::SetName("Ada".into()));
    dispatch.call(RegisterIntent::SetEmail("ada@example.com".into()));
    dispatch.call(RegisterIntent::Submit);
    settle(&mut dom).await;

    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("Landing page"), "did not return home in {html}");
    assert!(html.contains("Logout"), "navigation not signed in in {html}");
    assert!(!html.contains("Student Registration"), "form still shown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn blank_registration_stays_on_the_form() {
    let options = HarnessOptions {
        signed_in: false,
        ..HarnessOptions::default()
    };
    let (mut dom, handles) = setup_intent_harness(StartPage::Register, options).await;

    handles.register().call(RegisterIntent::Submit);
    settle(&mut dom).await;

    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("Please fill in all fields"), "missing error in {html}");
    assert!(html.contains("Student Registration"), "left the form in {html}");
}

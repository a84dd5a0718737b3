use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::attempt::AttemptSubmission;
use quiz_core::model::{
    Chapter, ChapterId, ListingMode, Question, QuestionId, QuizId, QuizRequest, QuizResult,
    QuizSummary, Registration, ResultId, StudentId, Textbook, TextbookId, TimeEntry,
};
use quiz_core::time::fixed_now;
use services::{
    AppServices, Clock, PdfUpload, QuizService, QuizzoApi, RegistrationService, RequestError,
    ResultService, StudentSession, TextbookService, UploadReceipt, UploadService,
};
use storage::Storage;

use crate::context::{UiApp, build_app_context};
use crate::routes::Route;
use crate::session_state::use_session_state_provider;
use crate::views::{HomeView, QuizView, RegisterView, ResultsView, UploadView};

/// Canned backend. `offline` makes every call fail at the transport level; the
/// other switches fail a single endpoint with a server error.
#[derive(Clone, Default)]
pub struct FakeApi {
    pub offline: bool,
    pub chapters_fail: bool,
    pub submit_fails: bool,
    pub result_missing: bool,
    pub quizzes: Vec<QuizSummary>,
    pub textbooks: Vec<Textbook>,
    pub chapters: Vec<Chapter>,
    pub questions: Vec<Question>,
    pub result: Option<QuizResult>,
}

impl FakeApi {
    pub fn sample() -> Self {
        Self {
            offline: false,
            chapters_fail: false,
            submit_fails: false,
            result_missing: false,
            quizzes: vec![QuizSummary {
                id: QuizId::new(1),
                title: "Cell Biology".into(),
                created_at: "2024-03-01T10:00:00".into(),
                question_count: 3,
            }],
            textbooks: vec![Textbook {
                id: TextbookId::new(7),
                title: "Biology".into(),
                chapter_count: 2,
            }],
            chapters: vec![Chapter {
                id: ChapterId::new(70),
                title: "Cells".into(),
                number: 1,
                question_count: 12,
            }],
            questions: (1..=3)
                .map(|id| Question {
                    id: QuestionId::new(id),
                    text: format!("What is fact {id}?"),
                    options: vec!["Alpha".into(), "Beta".into()],
                    correct_answer: "Alpha".into(),
                })
                .collect(),
            result: Some(QuizResult {
                id: ResultId::new(5),
                quiz_id: QuizId::new(1),
                student_id: "student-1".into(),
                score: 66.666,
                answers: vec![
                    ("1".into(), "Alpha".into()),
                    ("2".into(), "Beta".into()),
                ],
                question_times: vec![
                    TimeEntry::new("0", Some(2.0)),
                    TimeEntry::new("1", None),
                    TimeEntry::new("2", Some(4.26)),
                ],
                completed_at: "not a timestamp".into(),
            }),
        }
    }

    fn check(&self) -> Result<(), RequestError> {
        if self.offline {
            Err(RequestError::Transport("connection refused".into()))
        } else {
            Ok(())
        }
    }

    fn server_error() -> RequestError {
        RequestError::Status {
            status: services::StatusCode::INTERNAL_SERVER_ERROR,
            message: None,
        }
    }
}

#[async_trait]
impl QuizzoApi for FakeApi {
    async fn list_quizzes(&self) -> Result<Vec<QuizSummary>, RequestError> {
        self.check()?;
        Ok(self.quizzes.clone())
    }

    async fn list_textbooks(&self) -> Result<Vec<Textbook>, RequestError> {
        self.check()?;
        Ok(self.textbooks.clone())
    }

    async fn list_chapters(&self, _textbook_id: TextbookId) -> Result<Vec<Chapter>, RequestError> {
        self.check()?;
        if self.chapters_fail {
            return Err(Self::server_error());
        }
        Ok(self.chapters.clone())
    }

    async fn create_quiz(&self, _request: QuizRequest) -> Result<QuizId, RequestError> {
        self.check()?;
        Ok(QuizId::new(1))
    }

    async fn quiz_questions(&self, _quiz_id: QuizId) -> Result<Vec<Question>, RequestError> {
        self.check()?;
        Ok(self.questions.clone())
    }

    async fn submit_quiz(&self, _submission: &AttemptSubmission) -> Result<ResultId, RequestError> {
        self.check()?;
        if self.submit_fails {
            return Err(Self::server_error());
        }
        Ok(ResultId::new(5))
    }

    async fn get_result(&self, _result_id: ResultId) -> Result<Option<QuizResult>, RequestError> {
        self.check()?;
        if self.result_missing {
            return Err(RequestError::Status {
                status: services::StatusCode::NOT_FOUND,
                message: Some("Result not found".into()),
            });
        }
        Ok(self.result.clone())
    }

    async fn register(
        &self,
        _registration: &Registration,
    ) -> Result<Option<StudentId>, RequestError> {
        self.check()?;
        Ok(StudentId::new("student-1"))
    }

    async fn upload_textbook(&self, _upload: PdfUpload) -> Result<UploadReceipt, RequestError> {
        self.check()?;
        Ok(UploadReceipt { chapters: 3 })
    }
}

#[derive(Clone)]
pub struct TestApp {
    listing_mode: ListingMode,
    services: AppServices,
}

impl UiApp for TestApp {
    fn listing_mode(&self) -> ListingMode {
        self.listing_mode
    }

    fn session(&self) -> StudentSession {
        self.services.session()
    }

    fn registration(&self) -> Arc<RegistrationService> {
        self.services.registration()
    }

    fn quizzes(&self) -> Arc<QuizService> {
        self.services.quizzes()
    }

    fn textbooks(&self) -> Arc<TextbookService> {
        self.services.textbooks()
    }

    fn results(&self) -> Arc<ResultService> {
        self.services.results()
    }

    fn uploads(&self) -> Arc<UploadService> {
        self.services.uploads()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    /// The real router, navigation shell included, at `/`.
    Shell,
    Home,
    Quiz(u64),
    Results(u64),
    Register,
    Upload,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));
    use_session_state_provider(&ctx);
    use_context_provider(|| props.view);

    match props.view {
        ViewKind::Shell => rsx! { Router::<Route> {} },
        _ => rsx! { Router::<TestRoute> {} },
    }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Shell | ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Quiz(quiz_id) => rsx! { QuizView { quiz_id } },
        ViewKind::Results(result_id) => rsx! { ResultsView { result_id } },
        ViewKind::Register => rsx! { RegisterView {} },
        ViewKind::Upload => rsx! { UploadView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub services: AppServices,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        drive_async(&mut self.dom).await;
    }

    /// Rebuild, then let pending resources resolve and re-render.
    pub async fn settle(&mut self) {
        self.rebuild();
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

/// Wait briefly for spawned tasks or resources, then apply what they changed.
pub async fn drive_async(dom: &mut VirtualDom) {
    let _ = tokio::time::timeout(std::time::Duration::from_millis(50), dom.wait_for_work()).await;
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub struct HarnessOptions {
    pub api: FakeApi,
    pub listing_mode: ListingMode,
    pub signed_in: bool,
}

impl Default for HarnessOptions {
    fn default() -> Self {
        Self {
            api: FakeApi::sample(),
            listing_mode: ListingMode::Flat,
            signed_in: true,
        }
    }
}

pub async fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with(view, HarnessOptions::default()).await
}

pub async fn setup_view_harness_with(view: ViewKind, options: HarnessOptions) -> ViewHarness {
    let app = build_test_app(options).await;
    let services = app.services.clone();
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom, services }
}

/// Services over `options.api` and in-memory storage, signed in when asked.
pub async fn build_test_app(options: HarnessOptions) -> Arc<TestApp> {
    let api: Arc<dyn QuizzoApi> = Arc::new(options.api);
    let services = AppServices::new(Clock::fixed(fixed_now()), api, &Storage::in_memory())
        .await
        .expect("build services");

    if options.signed_in {
        services
            .session()
            .sign_in(StudentId::new("student-1").expect("student id"))
            .await
            .expect("sign in");
    }

    Arc::new(TestApp {
        listing_mode: options.listing_mode,
        services,
    })
}

use quiz_core::model::ListingMode;

use super::test_harness::{
    FakeApi, HarnessOptions, ViewKind, setup_view_harness, setup_view_harness_with,
};

#[tokio::test(flavor = "current_thread")]
async fn flat_listing_renders_quiz_cards() {
    let mut harness = setup_view_harness(ViewKind::Home).await;
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Available Quizzes"), "missing title in {html}");
    assert!(html.contains("Cell Biology"), "missing quiz in {html}");
    assert!(html.contains("Questions: 3"), "missing count in {html}");
    assert!(html.contains("Created: 2024-03-01"), "missing date in {html}");
    assert!(html.contains("Take Quiz"), "missing link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn flat_listing_shows_empty_message() {
    let api = FakeApi {
        quizzes: Vec::new(),
        ..FakeApi::sample()
    };
    let mut harness = setup_view_harness_with(
        ViewKind::Home,
        HarnessOptions {
            api,
            ..HarnessOptions::default()
        },
    )
    .await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("No quizzes available yet."), "missing empty state in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn flat_listing_renders_error_state() {
    let api = FakeApi {
        offline: true,
        ..FakeApi::sample()
    };
    let mut harness = setup_view_harness_with(
        ViewKind::Home,
        HarnessOptions {
            api,
            ..HarnessOptions::default()
        },
    )
    .await;
    harness.settle().await;
    let html = harness.render();
    assert!(
        html.contains("Failed to load quizzes: could not reach the quiz server."),
        "missing error in {html}"
    );
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn textbook_listing_renders_selector() {
    let mut harness = setup_view_harness_with(
        ViewKind::Home,
        HarnessOptions {
            listing_mode: ListingMode::Hierarchical,
            ..HarnessOptions::default()
        },
    )
    .await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Select a textbook"), "missing placeholder in {html}");
    assert!(html.contains("Biology (2 chapters)"), "missing option in {html}");
    assert!(!html.contains("Chapter 1: Cells"), "chapters shown before selection in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Quiz(1)).await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Question 1 of 3"), "missing heading in {html}");
    assert!(html.contains("What is fact 1?"), "missing text in {html}");
    assert!(html.contains("Alpha"), "missing option in {html}");
    assert!(html.contains("Previous"), "missing previous in {html}");
    assert!(html.contains("Next"), "missing next in {html}");
    assert!(!html.contains("Submit"), "submit shown on first question in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_without_questions() {
    let api = FakeApi {
        questions: Vec::new(),
        ..FakeApi::sample()
    };
    let mut harness = setup_view_harness_with(
        ViewKind::Quiz(1),
        HarnessOptions {
            api,
            ..HarnessOptions::default()
        },
    )
    .await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("No questions found"), "missing empty state in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_asks_unregistered_student_to_register() {
    let mut harness = setup_view_harness_with(
        ViewKind::Quiz(1),
        HarnessOptions {
            signed_in: false,
            ..HarnessOptions::default()
        },
    )
    .await;
    harness.settle().await;
    let html = harness.render();
    assert!(
        html.contains("Please register before taking the quiz"),
        "missing guard in {html}"
    );
    assert!(!html.contains("Question 1 of 3"), "questions leaked past guard in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_renders_score_chart_and_answers() {
    let mut harness = setup_view_harness(ViewKind::Results(5)).await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Quiz Results"), "missing title in {html}");
    assert!(html.contains("66.7%"), "missing score in {html}");
    assert!(html.contains("Completed on not a timestamp"), "missing date in {html}");
    assert!(html.contains("polyline"), "missing chart in {html}");
    assert!(html.contains("Question 2"), "missing chart label in {html}");
    assert!(!html.contains("Question 3"), "non-numeric time was charted in {html}");
    assert!(html.contains("N/A"), "missing N/A time in {html}");
    assert!(html.contains("4.3"), "missing rounded time in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_reports_empty_result() {
    let api = FakeApi {
        result: None,
        ..FakeApi::sample()
    };
    let mut harness = setup_view_harness_with(
        ViewKind::Results(9),
        HarnessOptions {
            api,
            ..HarnessOptions::default()
        },
    )
    .await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("No results found"), "missing empty state in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_treats_unknown_result_as_load_failure() {
    let api = FakeApi {
        result_missing: true,
        ..FakeApi::sample()
    };
    let mut harness = setup_view_harness_with(
        ViewKind::Results(9),
        HarnessOptions {
            api,
            ..HarnessOptions::default()
        },
    )
    .await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Failed to load results"), "missing load error in {html}");
    assert!(!html.contains("No results found"), "404 shown as empty in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn register_view_renders_form() {
    let mut harness = setup_view_harness(ViewKind::Register).await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Student Registration"), "missing title in {html}");
    assert!(html.contains("Name"), "missing name field in {html}");
    assert!(html.contains("Email"), "missing email field in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn upload_view_starts_without_file() {
    let mut harness = setup_view_harness(ViewKind::Upload).await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Upload Textbook"), "missing title in {html}");
    assert!(html.contains("No file selected"), "missing file label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn shell_offers_register_when_signed_out() {
    let mut harness = setup_view_harness_with(
        ViewKind::Shell,
        HarnessOptions {
            signed_in: false,
            ..HarnessOptions::default()
        },
    )
    .await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Register"), "missing register link in {html}");
    assert!(!html.contains("Logout"), "logout shown without session in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn shell_offers_logout_when_signed_in() {
    let mut harness = setup_view_harness(ViewKind::Shell).await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Logout"), "missing logout in {html}");
    assert!(html.contains("Upload Textbook"), "missing upload link in {html}");
    assert!(html.contains("nav-link active"), "home link not highlighted in {html}");
    assert!(html.contains("Cell Biology"), "home page not routed in {html}");
}

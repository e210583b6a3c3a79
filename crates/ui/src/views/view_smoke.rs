use quiz_core::model::{UserId, UserProfile};

use super::ViewError;
use super::test_harness::{
    FREE_QUIZ, PAID_QUIZ, SWITCH_AFTER, ViewHarness, ViewKind, setup_view_harness,
};

fn member() -> UserProfile {
    UserProfile::new(UserId::new("u-member").unwrap(), "Mia").with_email("mia@example.com")
}

fn admin() -> UserProfile {
    UserProfile::new(UserId::new("u-admin").unwrap(), "Ada").with_role("admin")
}

/// Signed-out visitors either see the sign-up form (after the redirect) or the
/// signed-out notice, never gated content.
fn assert_sent_to_sign_up(harness: &ViewHarness, html: &str) {
    let redirected = html.contains("Create account");
    let notice = html.contains(ViewError::SignedOut.message());
    assert!(redirected || notice, "neither sign-up form nor notice in {html}");
    assert_eq!(harness.reads.profile_reads(), 0, "role lookup ran for a signed-out visitor");
    assert_eq!(harness.reads.quiz_reads(), 0, "quiz loaded for a signed-out visitor");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_lists_published_quizzes() {
    let mut harness = setup_view_harness(ViewKind::Home, None).await;
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Rust Basics"), "missing free quiz in {html}");
    assert!(html.contains("World Capitals"), "missing paid quiz in {html}");
    assert!(html.contains("₹15.00"), "missing price in {html}");
    assert!(html.contains("Free"), "missing free label in {html}");
    assert!(html.contains("Sign up to get started"), "missing sign-up cta in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_shows_regular_tabs_for_member() {
    let mut harness = setup_view_harness(ViewKind::Dashboard, Some(member())).await;
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();

    for label in ["Profile", "My Quizzes", "Upload Video"] {
        assert!(html.contains(label), "missing {label} in {html}");
    }
    for label in ["Transactions", "Quiz List", "Users", "Questions"] {
        assert!(!html.contains(label), "unexpected {label} in {html}");
    }
    assert!(html.contains("Mia"), "missing profile name in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_shows_admin_tabs_after_role_lookup() {
    let mut harness = setup_view_harness(ViewKind::Dashboard, Some(admin())).await;
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();

    for label in ["Profile", "Transactions", "Quiz List", "Users", "Questions", "Quiz Videos"] {
        assert!(html.contains(label), "missing {label} in {html}");
    }
    assert!(!html.contains("My Quizzes"), "unexpected regular tab in {html}");
    assert!(html.contains("Administrator"), "missing role label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_renders_first_question_timer_and_progress() {
    let mut harness = setup_view_harness(ViewKind::Quiz(FREE_QUIZ), Some(member())).await;
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Rust Basics"), "missing title in {html}");
    assert!(html.contains("01:30"), "missing timer in {html}");
    assert!(html.contains("Question 1 of 2"), "missing question count in {html}");
    assert!(html.contains("Who frees a Box?"), "missing question text in {html}");
    assert!(html.contains("0 of 2 answered"), "missing progress in {html}");
    assert!(html.contains("width: 0%"), "missing progress width in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_asks_for_purchase_of_paid_quiz() {
    let mut harness = setup_view_harness(ViewKind::Quiz(PAID_QUIZ), Some(member())).await;
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Purchase this quiz to start it."), "missing gate in {html}");
    assert!(html.contains("Buy this quiz"), "missing checkout link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn admin_can_open_paid_quiz_without_purchase() {
    let mut harness = setup_view_harness(ViewKind::Quiz(PAID_QUIZ), Some(admin())).await;
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Capital of France?"), "missing question in {html}");
    assert!(html.contains("05:00"), "missing timer in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn checkout_view_shows_created_order() {
    let mut harness = setup_view_harness(ViewKind::Checkout(PAID_QUIZ), Some(member())).await;
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("order_capitals"), "missing order id in {html}");
    assert!(html.contains("₹15.00"), "missing amount in {html}");
    assert!(html.contains("Confirm payment"), "missing confirm button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn checkout_of_free_quiz_links_to_the_quiz() {
    let mut harness = setup_view_harness(ViewKind::Checkout(FREE_QUIZ), Some(member())).await;
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("This quiz is free"), "missing free notice in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn signed_out_dashboard_shows_no_tabs_and_resolves_no_role() {
    let mut harness = setup_view_harness(ViewKind::Dashboard, None).await;
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();

    assert_sent_to_sign_up(&harness, &html);
    assert!(!html.contains("class=\"tabs\""), "tabs rendered in {html}");
    for label in ["My Quizzes", "Transactions", "Checking permissions"] {
        assert!(!html.contains(label), "unexpected {label} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn signed_out_quiz_visit_starts_no_session() {
    let mut harness = setup_view_harness(ViewKind::Quiz(FREE_QUIZ), None).await;
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();

    assert_sent_to_sign_up(&harness, &html);
    assert!(!html.contains("Who frees a Box?"), "question rendered in {html}");
    assert!(!html.contains("01:30"), "timer rendered in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_reloads_when_its_quiz_id_changes() {
    let view = ViewKind::QuizSwitch {
        from: FREE_QUIZ,
        to: PAID_QUIZ,
    };
    let mut harness = setup_view_harness(view, Some(admin())).await;
    harness.rebuild();
    for _ in 0..3 {
        harness.drive_async().await;
    }
    let before = harness.render();
    assert!(before.contains("Who frees a Box?"), "missing first quiz in {before}");

    tokio::time::sleep(SWITCH_AFTER).await;
    harness.settle().await;
    let after = harness.render();
    assert!(after.contains("Capital of France?"), "stale quiz after switch: {after}");
    assert!(!after.contains("Who frees a Box?"), "first quiz still shown: {after}");
}

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::model::{
    CreateOrderRequest, Identity, OrderPayload, Question, QuestionId, Quiz, QuizDraft, QuizId,
    UserId, UserProfile, VerificationResult, VerifyPaymentRequest,
};
use quiz_core::time::fixed_clock;
use services::{
    AppServices, CheckoutService, DashboardService, IdentityHub, PaymentError, PaymentsApi,
    QuizFlowService, RoleGate,
};
use storage::repository::{
    InMemoryRepository, ProfileRepository, QuizRepository, Storage, StorageError,
};

use crate::context::{UiApp, build_app_context};
use crate::views::{CheckoutView, DashboardView, HomeView, QuizView, SignUpView};

pub const FREE_QUIZ: &str = "rust-basics";
pub const PAID_QUIZ: &str = "capitals";

/// How long `ViewKind::QuizSwitch` shows its first quiz.
pub const SWITCH_AFTER: Duration = Duration::from_millis(500);

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn identity(&self) -> IdentityHub {
        self.services.identity()
    }

    fn role_gate(&self) -> Arc<RoleGate> {
        self.services.role_gate()
    }

    fn quiz_flow(&self) -> Arc<QuizFlowService> {
        self.services.quiz_flow()
    }

    fn checkout(&self) -> Arc<CheckoutService> {
        self.services.checkout()
    }

    fn dashboard(&self) -> Arc<DashboardService> {
        self.services.dashboard()
    }
}

struct StubPayments;

#[async_trait]
impl PaymentsApi for StubPayments {
    async fn create_order(&self, request: &CreateOrderRequest) -> Result<OrderPayload, PaymentError> {
        Ok(OrderPayload {
            id: format!("order_{}", request.quiz_id),
            amount: u64::from(request.amount),
            currency: "INR".into(),
            receipt: None,
        })
    }

    async fn verify_payment(
        &self,
        _request: &VerifyPaymentRequest,
    ) -> Result<VerificationResult, PaymentError> {
        Ok(VerificationResult {
            success: true,
            message: None,
        })
    }
}

/// Profile and quiz lookups made by the views, for asserting that a
/// signed-out visitor triggers none.
#[derive(Clone, Default)]
pub struct ReadCounts {
    profile_reads: Arc<AtomicUsize>,
    quiz_reads: Arc<AtomicUsize>,
}

impl ReadCounts {
    pub fn profile_reads(&self) -> usize {
        self.profile_reads.load(Ordering::SeqCst)
    }

    pub fn quiz_reads(&self) -> usize {
        self.quiz_reads.load(Ordering::SeqCst)
    }
}

struct CountingRepository {
    inner: InMemoryRepository,
    counts: ReadCounts,
}

#[async_trait]
impl ProfileRepository for CountingRepository {
    async fn get_profile(&self, user_id: &UserId) -> Result<Option<UserProfile>, StorageError> {
        self.counts.profile_reads.fetch_add(1, Ordering::SeqCst);
        self.inner.get_profile(user_id).await
    }

    async fn upsert_profile(&self, profile: &UserProfile) -> Result<(), StorageError> {
        self.inner.upsert_profile(profile).await
    }

    async fn list_profiles(&self, limit: u32) -> Result<Vec<UserProfile>, StorageError> {
        self.inner.list_profiles(limit).await
    }
}

#[async_trait]
impl QuizRepository for CountingRepository {
    async fn get_quiz(&self, id: &QuizId) -> Result<Option<Quiz>, StorageError> {
        self.counts.quiz_reads.fetch_add(1, Ordering::SeqCst);
        self.inner.get_quiz(id).await
    }

    async fn list_quizzes(&self, limit: u32) -> Result<Vec<Quiz>, StorageError> {
        self.inner.list_quizzes(limit).await
    }

    async fn upsert_quiz(&self, quiz: &Quiz) -> Result<(), StorageError> {
        self.inner.upsert_quiz(quiz).await
    }
}

fn counted_storage() -> (Storage, ReadCounts) {
    let repo = InMemoryRepository::new();
    let counts = ReadCounts::default();
    let counting = Arc::new(CountingRepository {
        inner: repo.clone(),
        counts: counts.clone(),
    });
    let storage = Storage {
        profiles: counting.clone(),
        quizzes: counting,
        purchases: Arc::new(repo.clone()),
        results: Arc::new(repo),
    };
    (storage, counts)
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Dashboard,
    Quiz(&'static str),
    Checkout(&'static str),
    /// Mounts `QuizView` on `from`, then swaps its prop to `to` after
    /// [`SWITCH_AFTER`].
    QuizSwitch {
        from: &'static str,
        to: &'static str,
    },
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

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
    #[route("/signup")]
    SignUp {},
}

#[component]
fn SignUp() -> Element {
    rsx! { SignUpView {} }
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Dashboard => rsx! { DashboardView {} },
        ViewKind::Quiz(quiz_id) => rsx! { QuizView { quiz_id: quiz_id.to_string() } },
        ViewKind::Checkout(quiz_id) => rsx! { CheckoutView { quiz_id: quiz_id.to_string() } },
        ViewKind::QuizSwitch { from, to } => rsx! { QuizSwitcher { from, to } },
    }
}

#[component]
fn QuizSwitcher(from: &'static str, to: &'static str) -> Element {
    let current = use_signal(|| from.to_string());
    use_future(move || async move {
        let mut current = current;
        tokio::time::sleep(SWITCH_AFTER).await;
        current.set(to.to_string());
    });
    rsx! { QuizView { quiz_id: current() } }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub reads: ReadCounts,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drives enough rounds for chained resources and effects to finish.
    pub async fn settle(&mut self) {
        for _ in 0..8 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

fn question(id: &str, text: &str, options: &[&str], correct: &str) -> Question {
    Question::new(
        QuestionId::new(id).unwrap(),
        text,
        options.iter().map(|o| (*o).to_string()).collect(),
        correct,
    )
}

async fn seed_quizzes(storage: &Storage) {
    let free = QuizDraft {
        id: QuizId::new(FREE_QUIZ).unwrap(),
        title: "Rust Basics".into(),
        description: Some("Ownership and borrowing".into()),
        price: 0,
        duration_secs: 90,
        questions: vec![
            question("own", "Who frees a Box?", &["Its owner", "The GC"], "Its owner"),
            question("ref", "How many &mut at once?", &["One", "Many"], "One"),
        ],
    }
    .validate()
    .unwrap();
    let paid = QuizDraft {
        id: QuizId::new(PAID_QUIZ).unwrap(),
        title: "World Capitals".into(),
        description: None,
        price: 1500,
        duration_secs: 300,
        questions: vec![question("fr", "Capital of France?", &["Paris", "Lyon"], "Paris")],
    }
    .validate()
    .unwrap();
    storage.quizzes.upsert_quiz(&free).await.unwrap();
    storage.quizzes.upsert_quiz(&paid).await.unwrap();
}

/// Builds a harness over seeded in-memory storage. With `profile`, that user
/// is stored and signed in before the first render.
pub async fn setup_view_harness(view: ViewKind, profile: Option<UserProfile>) -> ViewHarness {
    let (storage, reads) = counted_storage();
    seed_quizzes(&storage).await;

    let services = AppServices::with_payments(&storage, Arc::new(StubPayments), false, fixed_clock());
    if let Some(profile) = profile {
        storage.profiles.upsert_profile(&profile).await.unwrap();
        services
            .identity()
            .sign_in(Identity::new(profile.user_id.clone(), profile.email.clone()));
    }

    let app = Arc::new(TestApp { services });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom, storage, reads }
}

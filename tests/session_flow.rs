//! End-to-end session flows against a scripted generator.
//!
//! Every generator call parks on its own reply channel and is handed to the
//! test, which picks the call it wants by ingredients or title. Each test
//! decides exactly when text and image results land relative to user
//! commands, whatever order the worker tasks happen to run in.

use async_trait::async_trait;
use fridgechef::app::state::EMPTY_INVENTORY_MESSAGE;
use fridgechef::domain::error::UNREADABLE_RECIPE_MESSAGE;
use fridgechef::ui::{ImageStatus, Screen};
use fridgechef::{
    AppState, Event, FridgeChefError, MealType, Recipe, RecipeGenerator, RequestState, Session,
    Theme,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};

const IMAGE_URL: &str = "data:image/png;base64,aGVsbG8=";

/// A text call waiting for the test to answer it.
struct TextCall {
    ingredients: Vec<String>,
    reply: oneshot::Sender<fridgechef::Result<Recipe>>,
}

/// An image call waiting for the test to answer it.
struct ImageCall {
    title: String,
    reply: oneshot::Sender<Option<String>>,
}

/// Generator that hands each call to the test and waits for its reply.
struct ScriptedGenerator {
    text_calls_tx: mpsc::UnboundedSender<TextCall>,
    image_calls_tx: mpsc::UnboundedSender<ImageCall>,
    text_calls: AtomicUsize,
    image_calls: AtomicUsize,
}

#[async_trait]
impl RecipeGenerator for ScriptedGenerator {
    async fn request_recipe_text(
        &self,
        ingredients: &[String],
        _meal_type: MealType,
    ) -> fridgechef::Result<Recipe> {
        self.text_calls.fetch_add(1, Ordering::SeqCst);
        let (reply, rx) = oneshot::channel();
        let call = TextCall { ingredients: ingredients.to_vec(), reply };
        if self.text_calls_tx.send(call).is_err() {
            return Err(FridgeChefError::Transport("script ended".to_string()));
        }
        rx.await
            .unwrap_or_else(|_| Err(FridgeChefError::Transport("script ended".to_string())))
    }

    async fn request_recipe_image(&self, title: &str, _ingredients: &[String]) -> Option<String> {
        self.image_calls.fetch_add(1, Ordering::SeqCst);
        let (reply, rx) = oneshot::channel();
        let call = ImageCall { title: title.to_string(), reply };
        self.image_calls_tx.send(call).ok()?;
        rx.await.ok().flatten()
    }
}

struct Harness {
    session: Session,
    generator: Arc<ScriptedGenerator>,
    text_calls_rx: mpsc::UnboundedReceiver<TextCall>,
    image_calls_rx: mpsc::UnboundedReceiver<ImageCall>,
    parked_text: Vec<TextCall>,
    parked_images: Vec<ImageCall>,
}

/// Waits for the next item on `rx`, failing the test if none arrives.
async fn recv_call<T>(rx: &mut mpsc::UnboundedReceiver<T>) -> T {
    tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("generator call timed out")
        .expect("generator dropped")
}

impl Harness {
    fn new() -> Self {
        let (text_calls_tx, text_calls_rx) = mpsc::unbounded_channel();
        let (image_calls_tx, image_calls_rx) = mpsc::unbounded_channel();
        let generator = Arc::new(ScriptedGenerator {
            text_calls_tx,
            image_calls_tx,
            text_calls: AtomicUsize::new(0),
            image_calls: AtomicUsize::new(0),
        });

        Self {
            session: Session::new(AppState::new(Theme::default()), generator.clone()),
            generator,
            text_calls_rx,
            image_calls_rx,
            parked_text: Vec::new(),
            parked_images: Vec::new(),
        }
    }

    fn send(&mut self, event: Event) -> bool {
        self.session.dispatch(&event).unwrap()
    }

    fn add(&mut self, ingredient: &str) {
        self.send(Event::AddIngredient(ingredient.to_string()));
    }

    /// Next pending text call whose ingredients match, in any arrival order.
    async fn text_call_for(&mut self, ingredients: &[&str]) -> TextCall {
        loop {
            if let Some(i) = self.parked_text.iter().position(|c| c.ingredients == ingredients) {
                return self.parked_text.remove(i);
            }
            let call = recv_call(&mut self.text_calls_rx).await;
            self.parked_text.push(call);
        }
    }

    /// Next pending image call for `title`, in any arrival order.
    async fn image_call_for(&mut self, title: &str) -> ImageCall {
        loop {
            if let Some(i) = self.parked_images.iter().position(|c| c.title == title) {
                return self.parked_images.remove(i);
            }
            let call = recv_call(&mut self.image_calls_rx).await;
            self.parked_images.push(call);
        }
    }

    /// Answers the only outstanding text call.
    async fn reply_text(&mut self, reply: fridgechef::Result<Recipe>) {
        let call = match self.parked_text.pop() {
            Some(call) => call,
            None => recv_call(&mut self.text_calls_rx).await,
        };
        let _ = call.reply.send(reply);
    }

    /// Answers the only outstanding image call.
    async fn reply_image(&mut self, reply: Option<&str>) {
        let call = match self.parked_images.pop() {
            Some(call) => call,
            None => recv_call(&mut self.image_calls_rx).await,
        };
        let _ = call.reply.send(reply.map(ToString::to_string));
    }

    /// Applies the next worker response, returning whether it changed anything.
    async fn apply_next(&mut self) -> bool {
        tokio::time::timeout(Duration::from_secs(5), self.session.process_next_response())
            .await
            .expect("worker response timed out")
            .unwrap()
    }

    /// Asserts no worker response arrives within a short window.
    async fn assert_quiet(&mut self) {
        let next = tokio::time::timeout(Duration::from_millis(50), self.session.next_response()).await;
        assert!(next.is_err(), "unexpected worker response: {next:?}");
    }

    fn state(&self) -> &AppState {
        self.session.state()
    }

    fn text_calls(&self) -> usize {
        self.generator.text_calls.load(Ordering::SeqCst)
    }

    fn image_calls(&self) -> usize {
        self.generator.image_calls.load(Ordering::SeqCst)
    }
}

fn recipe(title: &str) -> Recipe {
    Recipe::from_json(&format!(
        r#"{{
            "title": "{title}",
            "estimatedTime": "20 minutes",
            "difficulty": "Easy",
            "ingredients": [{{"item": "egg", "amount": "2"}}],
            "instructions": ["Cook it."],
            "chefTip": "Season well."
        }}"#
    ))
    .unwrap()
}

#[tokio::test]
async fn text_then_image_reaches_ready() {
    let mut h = Harness::new();
    h.add("Egg");
    h.add("spinach");
    assert!(h.send(Event::Generate));

    let snapshot = h.state().snapshot();
    assert!(snapshot.is_loading);
    assert!(snapshot.recipe.is_none());
    assert!(matches!(h.state().compute_viewmodel().screen, Screen::Loading(_)));

    h.reply_text(Ok(recipe("Green Eggs"))).await;
    assert!(h.apply_next().await);

    let snapshot = h.state().snapshot();
    assert!(!snapshot.is_loading);
    assert!(snapshot.is_image_loading);
    assert_eq!(snapshot.recipe.as_ref().map(|r| r.title.as_str()), Some("Green Eggs"));
    assert_eq!(snapshot.recipe.as_ref().and_then(|r| r.image_url.clone()), None);
    match h.state().compute_viewmodel().screen {
        Screen::Recipe(view) => assert_eq!(view.image, ImageStatus::Pending),
        other => panic!("expected recipe card, got {other:?}"),
    }

    let call = h.image_call_for("Green Eggs").await;
    call.reply.send(Some(IMAGE_URL.to_string())).unwrap();
    assert!(h.apply_next().await);

    let snapshot = h.state().snapshot();
    assert!(!snapshot.is_image_loading);
    assert_eq!(snapshot.recipe.and_then(|r| r.image_url).as_deref(), Some(IMAGE_URL));
    assert_eq!(snapshot.ingredients, ["egg", "spinach"]);
    assert_eq!(h.text_calls(), 1);
    assert_eq!(h.image_calls(), 1);
}

#[tokio::test]
async fn generate_with_empty_inventory_never_calls_client() {
    let mut h = Harness::new();
    h.send(Event::Generate);

    assert_eq!(
        h.state().request,
        RequestState::Failed(EMPTY_INVENTORY_MESSAGE.to_string())
    );
    h.assert_quiet().await;
    assert_eq!(h.text_calls(), 0);
}

#[tokio::test]
async fn reset_discards_late_image() {
    let mut h = Harness::new();
    h.add("egg");
    h.send(Event::SetMealType(MealType::Appetizer));
    h.send(Event::Generate);
    h.reply_text(Ok(recipe("Deviled Eggs"))).await;
    h.apply_next().await;

    h.send(Event::Reset);
    h.reply_image(Some(IMAGE_URL)).await;
    assert!(!h.apply_next().await);

    let snapshot = h.state().snapshot();
    assert_eq!(h.state().request, RequestState::Idle);
    assert!(snapshot.recipe.is_none());
    assert!(!snapshot.is_loading && !snapshot.is_image_loading);
    assert_eq!(snapshot.ingredients, ["egg"]);
    assert_eq!(snapshot.meal_type, MealType::Appetizer);
}

#[tokio::test]
async fn reset_during_text_generation_drops_result() {
    let mut h = Harness::new();
    h.add("rice");
    h.send(Event::Generate);
    h.send(Event::Reset);

    h.reply_text(Ok(recipe("Fried Rice"))).await;
    assert!(!h.apply_next().await);

    assert_eq!(h.state().request, RequestState::Idle);
    h.assert_quiet().await;
    assert_eq!(h.image_calls(), 0);
}

#[tokio::test]
async fn newer_generation_wins() {
    let mut h = Harness::new();
    h.add("egg");
    h.send(Event::Generate);
    h.add("ham");
    h.send(Event::Generate);

    let first = h.text_call_for(&["egg"]).await;
    let second = h.text_call_for(&["egg", "ham"]).await;
    first.reply.send(Ok(recipe("First Try"))).unwrap();
    second.reply.send(Ok(recipe("Second Try"))).unwrap();
    let applied = [h.apply_next().await, h.apply_next().await];
    assert_eq!(applied.iter().filter(|changed| **changed).count(), 1);

    assert_eq!(
        h.state().request.recipe().map(|r| r.title.as_str()),
        Some("Second Try")
    );

    let image = h.image_call_for("Second Try").await;
    image.reply.send(None).unwrap();
    assert!(h.apply_next().await);
    assert_eq!(h.image_calls(), 1);
    assert!(matches!(h.state().request, RequestState::Ready(_)));
}

#[tokio::test]
async fn image_from_superseded_generation_is_dropped() {
    let mut h = Harness::new();
    h.add("egg");
    h.send(Event::Generate);
    h.reply_text(Ok(recipe("First Plate"))).await;
    h.apply_next().await;

    h.send(Event::Generate);
    h.reply_text(Ok(recipe("Second Plate"))).await;
    assert!(h.apply_next().await);

    let stale = h.image_call_for("First Plate").await;
    let current = h.image_call_for("Second Plate").await;

    stale.reply.send(Some(IMAGE_URL.to_string())).unwrap();
    assert!(!h.apply_next().await);
    match &h.state().request {
        RequestState::AwaitingImage(recipe) => {
            assert_eq!(recipe.title, "Second Plate");
            assert!(recipe.image_url.is_none());
        }
        other => panic!("expected image wait, got {other:?}"),
    }

    current.reply.send(None).unwrap();
    assert!(h.apply_next().await);
    match &h.state().request {
        RequestState::Ready(recipe) => {
            assert_eq!(recipe.title, "Second Plate");
            assert!(recipe.image_url.is_none());
        }
        other => panic!("expected ready, got {other:?}"),
    }
    assert_eq!(h.image_calls(), 2);
}

#[tokio::test]
async fn text_failure_keeps_inventory_and_allows_retry() {
    let mut h = Harness::new();
    h.add("egg");
    h.send(Event::SetMealType(MealType::Salad));
    h.send(Event::Generate);

    h.reply_text(Err(FridgeChefError::Transport(
        "API error 429 Too Many Requests: quota exceeded".to_string(),
    )))
    .await;
    assert!(h.apply_next().await);

    let snapshot = h.state().snapshot();
    assert_eq!(
        snapshot.error.as_deref(),
        Some("API error 429 Too Many Requests: quota exceeded")
    );
    assert!(!snapshot.is_loading);
    assert!(snapshot.recipe.is_none());
    assert_eq!(snapshot.ingredients, ["egg"]);
    assert_eq!(snapshot.meal_type, MealType::Salad);
    assert!(matches!(h.state().compute_viewmodel().screen, Screen::Error { .. }));
    h.assert_quiet().await;
    assert_eq!(h.image_calls(), 0);

    h.send(Event::Generate);
    assert!(h.state().snapshot().error.is_none());
    h.reply_text(Ok(recipe("Second Wind"))).await;
    assert!(h.apply_next().await);
    assert_eq!(h.text_calls(), 2);
}

#[tokio::test]
async fn malformed_recipe_shows_generic_message() {
    let mut h = Harness::new();
    h.add("egg");
    h.send(Event::Generate);

    h.reply_text(Err(FridgeChefError::ResponseFormat(
        "missing field `instructions`".to_string(),
    )))
    .await;
    h.apply_next().await;

    assert_eq!(
        h.state().request,
        RequestState::Failed(UNREADABLE_RECIPE_MESSAGE.to_string())
    );
}

#[tokio::test]
async fn missing_image_still_shows_recipe() {
    let mut h = Harness::new();
    h.add("egg");
    h.send(Event::Generate);
    h.reply_text(Ok(recipe("Plain Omelette"))).await;
    h.apply_next().await;

    h.reply_image(None).await;
    assert!(h.apply_next().await);

    assert!(matches!(h.state().request, RequestState::Ready(_)));
    assert!(h.state().snapshot().error.is_none());
    match h.state().compute_viewmodel().screen {
        Screen::Recipe(view) => assert_eq!(view.image, ImageStatus::Unavailable),
        other => panic!("expected recipe card, got {other:?}"),
    }
}

#[tokio::test]
async fn editing_inventory_clears_error() {
    let mut h = Harness::new();
    h.send(Event::Generate);
    assert!(h.state().snapshot().error.is_some());

    h.add("tomato");
    assert!(h.state().snapshot().error.is_none());

    h.send(Event::Generate);
    h.send(Event::RemoveIngredient(0));
    assert!(h.state().snapshot().is_loading);
}

#[tokio::test]
async fn quit_stops_session() {
    let mut h = Harness::new();
    assert!(!h.session.should_quit());
    h.send(Event::Quit);
    assert!(h.session.should_quit());
}

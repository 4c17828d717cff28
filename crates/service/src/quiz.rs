//! Quiz rounds: draw a random question the player has not seen yet.

use rand::seq::SliceRandom;
use tracing::{info, instrument};

use crate::domain::Question;
use crate::errors::ServiceError;
use crate::store::TriviaStore;

/// Pick the next quiz question.
///
/// `category` of `None` plays across all categories. A category with no
/// questions at all is Unprocessable; a round that has used up every
/// candidate yields `Ok(None)` so the client can end the game.
///
/// # Examples
/// ```
/// use service::domain::NewQuestion;
/// use service::store::{mock::MemoryStore, TriviaStore};
/// let store = MemoryStore::default();
/// tokio_test::block_on(store.insert_category("Science")).unwrap();
/// tokio_test::block_on(store.insert_question(NewQuestion {
///     question: "What gas do plants absorb?".into(),
///     answer: "Carbon dioxide".into(),
///     difficulty: 1,
///     category: 1,
/// })).unwrap();
/// let q = tokio_test::block_on(service::quiz::next_question(&store, None, &[])).unwrap();
/// assert_eq!(q.unwrap().id, 1);
/// ```
#[instrument(skip(store, previous), fields(excluded = previous.len()))]
pub async fn next_question(
    store: &dyn TriviaStore,
    category: Option<i32>,
    previous: &[i32],
) -> Result<Option<Question>, ServiceError> {
    let candidates = match category {
        Some(id) => store.list_questions_in_category(id).await?,
        None => store.list_questions().await?,
    };
    if candidates.is_empty() {
        return Err(ServiceError::Unprocessable("no questions to play".into()));
    }
    let picked = pick_unseen(candidates, previous);
    info!(chosen = picked.as_ref().map(|q| q.id), "quiz pick");
    Ok(picked)
}

/// Uniform random choice among candidates not played yet; `None` when the
/// round exhausted them all.
fn pick_unseen(candidates: Vec<Question>, previous: &[i32]) -> Option<Question> {
    let remaining: Vec<Question> =
        candidates.into_iter().filter(|q| !previous.contains(&q.id)).collect();
    remaining.choose(&mut rand::thread_rng()).cloned()
}

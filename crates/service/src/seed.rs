//! Starter fixtures: the six stock categories and their questions.

use std::collections::HashMap;

use tracing::info;

use crate::domain::NewQuestion;
use crate::errors::ServiceError;
use crate::store::TriviaStore;

/// Stock category labels, inserted in this order (ids 1 through 6 on a
/// fresh database).
pub const CATEGORY_LABELS: [&str; 6] =
    ["Science", "Art", "Geography", "History", "Entertainment", "Sports"];

/// (question, answer, category label, difficulty)
const STARTER_QUESTIONS: [(&str, &str, &str, i32); 19] = [
    (
        "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?",
        "Apollo 13",
        "Entertainment",
        4,
    ),
    (
        "What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?",
        "Tom Cruise",
        "Entertainment",
        4,
    ),
    (
        "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?",
        "Maya Angelou",
        "History",
        2,
    ),
    (
        "What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?",
        "Edward Scissorhands",
        "Entertainment",
        3,
    ),
    ("What boxer's original name is Cassius Clay?", "Muhammad Ali", "History", 1),
    (
        "Which is the only team to play in every soccer World Cup tournament?",
        "Brazil",
        "Sports",
        3,
    ),
    ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", "Sports", 4),
    ("Who invented Peanut Butter?", "George Washington Carver", "History", 2),
    ("What is the largest lake in Africa?", "Lake Victoria", "Geography", 2),
    (
        "In which royal palace would you find the Hall of Mirrors?",
        "The Palace of Versailles",
        "Geography",
        3,
    ),
    ("The Taj Mahal is located in which Indian city?", "Agra", "Geography", 2),
    (
        "Which Dutch graphic artist-initials M C was a creator of optical illusions?",
        "Escher",
        "Art",
        1,
    ),
    ("La Giaconda is better known as what?", "Mona Lisa", "Art", 3),
    ("How many paintings did Van Gogh sell in his lifetime?", "One", "Art", 4),
    (
        "Which American artist was a pioneer of Abstract Expressionism, and a leading exponent of action painting?",
        "Jackson Pollock",
        "Art",
        2,
    ),
    ("What is the heaviest organ in the human body?", "The Liver", "Science", 4),
    ("Who discovered penicillin?", "Alexander Fleming", "Science", 3),
    ("Hematology is a branch of medicine involving the study of what?", "Blood", "Science", 4),
    ("Which dung beetle was worshipped by the ancient Egyptians?", "The Scarab", "History", 4),
];

/// Outcome of a seed run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub categories: usize,
    pub questions: usize,
}

/// Load the fixtures into an empty store. A store that already has
/// categories is left untouched, so the run is safe to repeat.
pub async fn run(store: &dyn TriviaStore) -> Result<SeedReport, ServiceError> {
    if !store.list_categories().await?.is_empty() {
        info!("categories already present, skipping seed");
        return Ok(SeedReport::default());
    }

    let mut report = SeedReport::default();
    let mut ids: HashMap<&str, i32> = HashMap::new();
    for label in CATEGORY_LABELS {
        let created = store.insert_category(label).await?;
        ids.insert(label, created.id);
        report.categories += 1;
    }

    for (question, answer, label, difficulty) in STARTER_QUESTIONS {
        let category = *ids
            .get(label)
            .ok_or_else(|| ServiceError::Invalid(format!("unknown category label {label}")))?;
        store
            .insert_question(NewQuestion {
                question: question.to_string(),
                answer: answer.to_string(),
                difficulty,
                category,
            })
            .await?;
        report.questions += 1;
    }

    info!(categories = report.categories, questions = report.questions, "seed complete");
    Ok(report)
}

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::categories::list,
        crate::routes::questions::list,
        crate::routes::questions::by_category,
        crate::routes::questions::create_or_search,
        crate::routes::questions::remove,
        crate::routes::quizzes::play,
    ),
    components(
        schemas(
            crate::routes::questions::QuestionPayload,
            crate::routes::quizzes::QuizPayload,
            crate::routes::quizzes::QuizCategory,
        )
    ),
    tags(
        (name = "health"),
        (name = "categories"),
        (name = "questions"),
        (name = "quizzes")
    )
)]
pub struct ApiDoc;

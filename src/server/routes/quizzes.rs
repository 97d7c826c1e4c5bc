use axum::{extract::State, routing::post, Json, Router};
use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::{
    db::{queries::questions, Question},
    server::{app::AppState, deserializers::LenientI64, extractors::ApiJson},
    telemetry::QUIZ_QUESTIONS_CNTR,
};

use super::ApiResponse;

/// Quiz category id selecting questions from every category.
pub const ALL_CATEGORIES_ID: i64 = 0;

#[derive(Deserialize)]
struct QuizCategory {
    id: LenientI64,
}

#[derive(Deserialize)]
struct QuizBody {
    quiz_category: QuizCategory,
    #[serde(default)]
    previous_questions: Option<Vec<LenientI64>>,
    // singular spelling sent by older front-ends, the plural wins when both are set
    #[serde(default)]
    previous_question: Option<Vec<LenientI64>>,
}

#[derive(Serialize)]
struct QuizQuestion {
    success: bool,
    // null once the quiz pool is exhausted
    question: Option<Question>,
}

/// Picks the next quiz question from `pool`, which is ordered by id.
///
/// Without a history the first question is returned. With one, a question not
/// in `previous` is drawn uniformly at random. `None` means the pool is
/// exhausted.
fn next_question<R: Rng + ?Sized>(
    pool: Vec<Question>,
    previous: Option<&[i64]>,
    rng: &mut R,
) -> Option<Question> {
    match previous {
        None => pool.into_iter().next(),
        Some(previous) => {
            let survivors: Vec<Question> = pool
                .into_iter()
                .filter(|q| !previous.contains(&q.id))
                .collect();
            survivors.choose(rng).cloned()
        }
    }
}

async fn play_quiz(
    State(pool): State<SqlitePool>,
    ApiJson(body): ApiJson<QuizBody>,
) -> ApiResponse<QuizQuestion> {
    let category = body.quiz_category.id.0;
    let candidates = if category == ALL_CATEGORIES_ID {
        questions::get_all_questions(&pool).await?
    } else {
        questions::get_questions_for_category(&pool, category).await?
    };
    let previous: Option<Vec<i64>> = body
        .previous_questions
        .or(body.previous_question)
        .map(|ids| ids.into_iter().map(|id| id.0).collect());

    let question = next_question(candidates, previous.as_deref(), &mut rand::thread_rng());
    match &question {
        Some(q) => {
            QUIZ_QUESTIONS_CNTR
                .with_label_values(&[category.to_string().as_str()])
                .inc();
            tracing::debug!("Serving question {} for category {category}", q.id);
        }
        None => tracing::info!("Quiz pool for category {category} is exhausted"),
    }

    Ok(Json(QuizQuestion {
        success: true,
        question,
    }))
}

pub fn quizzes_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(play_quiz))
        .with_state(state)
}

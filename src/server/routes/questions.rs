use std::collections::BTreeMap;

use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{categories::get_all_categories, questions},
        NewQuestion, Question,
    },
    server::{
        app::AppState,
        deserializers::LenientI64,
        error::ApiError,
        extractors::{ApiJson, ApiPath, ApiQuery},
    },
    telemetry::QUESTIONS_MODIFIED_CNTR,
};

use super::{category_map, paginate, ApiResponse, PageQuery, ALL_CATEGORIES};

#[derive(Deserialize)]
struct NewQuestionBody {
    #[serde(default)]
    question: Option<String>,
    #[serde(default)]
    answer: Option<String>,
    #[serde(default)]
    category: Option<LenientI64>,
    #[serde(default)]
    difficulty: Option<LenientI64>,
}

impl From<NewQuestionBody> for NewQuestion {
    fn from(body: NewQuestionBody) -> Self {
        NewQuestion {
            question: body.question,
            answer: body.answer,
            category: body.category.map(|v| v.0),
            difficulty: body.difficulty.map(|v| v.0),
        }
    }
}

#[derive(Deserialize)]
struct SearchBody {
    #[serde(default, rename = "searchTerm")]
    search_term: Option<String>,
}

#[derive(Serialize)]
struct QuestionsPage {
    success: bool,
    questions: Vec<Question>,
    total_questions: i64,
    current_category: &'static str,
    categories: BTreeMap<i64, String>,
}

#[derive(Serialize)]
struct SearchResults {
    success: bool,
    questions: Vec<Question>,
    total_questions: i64,
    current_category: &'static str,
}

#[derive(Serialize)]
struct Deleted {
    success: bool,
    deleted: i64,
}

#[derive(Serialize)]
struct Created {
    success: bool,
}

async fn list_questions(
    State(pool): State<SqlitePool>,
    ApiQuery(query): ApiQuery<PageQuery>,
) -> ApiResponse<QuestionsPage> {
    let all_questions = questions::get_all_questions(&pool).await?;
    let total_questions = all_questions.len() as i64;
    let current_questions = paginate(all_questions, query.page());
    if current_questions.is_empty() {
        return Err(ApiError::NotFound);
    }
    let categories = get_all_categories(&pool).await?;

    Ok(Json(QuestionsPage {
        success: true,
        questions: current_questions,
        total_questions,
        current_category: ALL_CATEGORIES,
        categories: category_map(categories),
    }))
}

async fn create_question(
    State(pool): State<SqlitePool>,
    ApiJson(body): ApiJson<NewQuestionBody>,
) -> ApiResponse<Created> {
    let new_question = NewQuestion::from(body);
    let id = questions::create_question(&pool, &new_question)
        .await
        .map_err(ApiError::unprocessable)?;
    QUESTIONS_MODIFIED_CNTR.with_label_values(&["create"]).inc();
    tracing::info!("Created question {id}");

    Ok(Json(Created { success: true }))
}

// a missing id is reported like any other deletion failure
async fn delete_question(
    State(pool): State<SqlitePool>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResponse<Deleted> {
    let deleted = questions::delete_question(&pool, id)
        .await
        .map_err(ApiError::unprocessable)?;
    if deleted == 0 {
        return Err(ApiError::Unprocessable(format!(
            "Question {id} does not exist"
        )));
    }
    QUESTIONS_MODIFIED_CNTR.with_label_values(&["delete"]).inc();
    tracing::info!("Deleted question {id}");

    Ok(Json(Deleted {
        success: true,
        deleted: id,
    }))
}

async fn search_questions(
    State(pool): State<SqlitePool>,
    ApiJson(body): ApiJson<SearchBody>,
) -> ApiResponse<SearchResults> {
    let term = match body.search_term.as_deref() {
        Some(term) if !term.is_empty() => term,
        _ => return Err(ApiError::NotFound),
    };
    let found = questions::search_questions(&pool, term).await?;
    // counts every stored question, not only the matches
    let total_questions = questions::count_questions(&pool).await?;

    Ok(Json(SearchResults {
        success: true,
        questions: found,
        total_questions,
        current_category: ALL_CATEGORIES,
    }))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/search", post(search_questions))
        .route("/questions/{id}", delete(delete_question))
        .with_state(state)
}

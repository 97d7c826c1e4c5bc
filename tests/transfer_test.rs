mod common;

use common::spawn_app;
use trivia_api::db::queries::categories::get_all_categories;
use trivia_api::db::queries::questions::get_all_questions;
use trivia_api::transfer::{export_data, import_data, CATEGORIES_FILE, QUESTIONS_FILE};

#[tokio::test]
async fn export_then_import_round_trips_into_fresh_database() {
    let source = spawn_app().await;
    source.insert_question("What is H2O?", 1).await;
    source.insert_question("Who painted the Mona Lisa?", 2).await;
    let deleted = source.insert_question("Gone before export", 3).await;
    source.delete(&format!("/api/questions/{deleted}")).await;
    let dir = tempfile::tempdir().unwrap();
    let export_dir = dir.path().join("export");

    export_data(&source.pool, &export_dir).await.unwrap();

    assert!(export_dir.join(CATEGORIES_FILE).is_file());
    assert!(export_dir.join(QUESTIONS_FILE).is_file());

    let target = spawn_app().await;
    target.insert_question("Overwritten on import", 6).await;
    import_data(&target.pool, &export_dir).await.unwrap();

    assert_eq!(
        get_all_categories(&target.pool).await.unwrap(),
        get_all_categories(&source.pool).await.unwrap()
    );
    assert_eq!(
        get_all_questions(&target.pool).await.unwrap(),
        get_all_questions(&source.pool).await.unwrap()
    );
}

#[tokio::test]
async fn import_fails_without_files() {
    let app = spawn_app().await;
    let dir = tempfile::tempdir().unwrap();

    assert!(import_data(&app.pool, dir.path()).await.is_err());
}

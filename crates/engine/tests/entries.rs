use sea_orm::{Database, DatabaseConnection};

use engine::{Engine, EngineError, Entry, NewEntry, Totals, totals, validation};
use migration::MigratorTrait;
use uuid::Uuid;

async fn engine_with_db() -> (Engine, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder()
        .database(db.clone())
        .build()
        .await
        .unwrap();
    (engine, db)
}

async fn engine_with_file_db() -> (Engine, std::path::PathBuf) {
    let root = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../target/test_dbs");
    std::fs::create_dir_all(&root).unwrap();

    let path = root.join(format!("engine_{}.db", Uuid::new_v4()));
    let url = format!("sqlite:{}?mode=rwc", path.display());

    let db = Database::connect(&url).await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder().database(db).build().await.unwrap();

    (engine, path)
}

#[tokio::test]
async fn create_stores_rounded_amounts_and_tax() {
    let (engine, _db) = engine_with_db().await;

    let entry = engine
        .create(
            NewEntry::new(5000.0, 1500.0)
                .tax_rate(24.0)
                .description("Test entry"),
        )
        .await
        .unwrap();

    assert_eq!(entry.income, 5000.0);
    assert_eq!(entry.expenses, 1500.0);
    assert_eq!(entry.tax_rate, 24.0);
    assert_eq!(entry.tax_amount, 360.0);
    assert_eq!(entry.description.as_deref(), Some("Test entry"));

    let all = engine.list_all().await.unwrap();
    assert_eq!(all, vec![entry.clone()]);
    assert_eq!(
        totals(&all),
        Totals {
            total_income: 5000.0,
            total_expenses: 1500.0,
            total_tax: 360.0,
        }
    );
}

#[tokio::test]
async fn create_rounds_before_storing() {
    let (engine, _db) = engine_with_db().await;

    let entry = engine
        .create(NewEntry::new(1234.567, 99.994).tax_rate(10.0))
        .await
        .unwrap();

    assert_eq!(entry.income, 1234.57);
    assert_eq!(entry.expenses, 99.99);
    assert_eq!(entry.tax_amount, 10.0);
    assert_eq!(entry.description, None);

    let stored = engine.get(entry.id).await.unwrap().unwrap();
    assert_eq!(stored, entry);
}

#[tokio::test]
async fn ids_are_unique_and_listed_in_order() {
    let (engine, _db) = engine_with_db().await;

    let first = engine.create(NewEntry::new(1.0, 1.0)).await.unwrap();
    let second = engine.create(NewEntry::new(2.0, 2.0)).await.unwrap();
    assert_ne!(first.id, second.id);

    let ids: Vec<i32> = engine
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[tokio::test]
async fn delete_removes_only_the_given_entry() {
    let (engine, _db) = engine_with_db().await;

    let keep = engine
        .create(NewEntry::new(2000.0, 500.0).description("Keep entry"))
        .await
        .unwrap();
    let gone = engine
        .create(NewEntry::new(2000.0, 500.0).description("Delete entry"))
        .await
        .unwrap();

    assert!(engine.delete(gone.id).await.unwrap());
    assert_eq!(engine.get(gone.id).await.unwrap(), None);
    assert_eq!(engine.list_all().await.unwrap(), vec![keep]);
}

#[tokio::test]
async fn delete_missing_id_is_a_noop() {
    let (engine, _db) = engine_with_db().await;

    let entry = engine.create(NewEntry::new(10.0, 5.0)).await.unwrap();
    let before = engine.list_all().await.unwrap();

    assert!(!engine.delete(entry.id + 1000).await.unwrap());
    assert_eq!(engine.list_all().await.unwrap(), before);
}

#[tokio::test]
async fn clear_empties_the_ledger() {
    let (engine, _db) = engine_with_db().await;

    engine
        .create(NewEntry::new(1000.0, 300.0).description("Entry 1"))
        .await
        .unwrap();
    engine
        .create(NewEntry::new(1500.0, 400.0).description("Entry 2"))
        .await
        .unwrap();

    assert_eq!(engine.clear().await.unwrap(), 2);
    assert!(engine.list_all().await.unwrap().is_empty());
    assert_eq!(totals(&engine.list_all().await.unwrap()), Totals::ZERO);

    assert_eq!(engine.clear().await.unwrap(), 0);
}

/// Validate then store, the same order the submit handler uses.
async fn submit(engine: &Engine, new: NewEntry) -> Result<Entry, EngineError> {
    validation::validate_income(new.income)?;
    validation::validate_expenses(new.expenses)?;
    engine.create(new).await
}

#[tokio::test]
async fn negative_income_is_rejected_before_any_write() {
    let (engine, _db) = engine_with_db().await;
    let kept = submit(&engine, NewEntry::new(100.0, 50.0)).await.unwrap();

    let err = submit(&engine, NewEntry::new(-100.0, 50.0))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Income must be a positive number");

    let err = submit(&engine, NewEntry::new(100.0, -0.01))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Expenses must be a positive number");

    assert_eq!(engine.list_all().await.unwrap(), vec![kept]);
}

#[tokio::test]
async fn create_rounds_ties_to_even() {
    let (engine, _db) = engine_with_db().await;

    let entry = engine
        .create(NewEntry::new(0.125, 1.0).tax_rate(12.5))
        .await
        .unwrap();

    assert_eq!(entry.income, 0.12);
    assert_eq!(entry.expenses, 1.0);
    assert_eq!(entry.tax_amount, 0.12);
}

#[tokio::test]
async fn create_keeps_huge_amounts_finite() {
    let (engine, _db) = engine_with_db().await;

    let entry = engine.create(NewEntry::new(1e307, 0.0)).await.unwrap();

    assert_eq!(entry.income, 1e307);
    assert_eq!(entry.tax_amount, 0.0);
    assert_eq!(engine.get(entry.id).await.unwrap(), Some(entry));
}

#[tokio::test]
async fn concurrent_creates_get_distinct_ids() {
    let (engine, path) = engine_with_file_db().await;

    let mut tasks = tokio::task::JoinSet::new();
    for i in 0..16 {
        let engine = engine.clone();
        tasks.spawn(async move { engine.create(NewEntry::new(f64::from(i), 1.0)).await });
    }

    let mut ids = Vec::new();
    while let Some(res) = tasks.join_next().await {
        ids.push(res.unwrap().unwrap().id);
    }
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 16);
    assert_eq!(engine.list_all().await.unwrap().len(), 16);

    let _ = std::fs::remove_file(path);
}

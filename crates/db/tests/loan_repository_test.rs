//! Integration tests for the loan repository against in-memory SQLite.

use chrono::NaiveDate;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, Statement};

use peminjaman_core::dates;
use peminjaman_core::loan::{LoanDraft, LoanState, LoanStatus, LoanUpdate};
use peminjaman_db::{LoanRepository, LoanRepositoryError, connect_url, ensure_schema};
use peminjaman_shared::LoanId;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Fresh in-memory database with the loan table.
async fn setup() -> (DatabaseConnection, LoanRepository) {
    let db = connect_url("sqlite::memory:", 1)
        .await
        .expect("Failed to open in-memory database");
    ensure_schema(&db).await.expect("Failed to create schema");
    let repo = LoanRepository::new(db.clone());
    (db, repo)
}

fn draft(borrower: &str, item: &str, quantity: i32, loan_date: NaiveDate) -> LoanDraft {
    LoanDraft {
        borrower_name: borrower.to_string(),
        item_name: item.to_string(),
        quantity,
        loan_date,
    }
}

async fn raw_status(db: &DatabaseConnection, id: LoanId) -> String {
    let row = db
        .query_one(Statement::from_sql_and_values(
            DbBackend::Sqlite,
            "SELECT status FROM loan WHERE id = ?",
            [id.into_inner().into()],
        ))
        .await
        .unwrap()
        .expect("row should exist");
    row.try_get("", "status").unwrap()
}

#[tokio::test]
async fn test_schema_bootstrap_is_idempotent() {
    let (db, repo) = setup().await;
    ensure_schema(&db).await.expect("second bootstrap should succeed");
    assert!(repo.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_then_get_is_borrowed() {
    let (db, repo) = setup().await;

    let id = repo
        .create(draft("Alice", "Microscope", 2, date(2024, 3, 1)))
        .await
        .expect("Failed to create loan");

    let loan = repo.get(id).await.expect("Failed to get loan");
    assert_eq!(loan.id, id);
    assert_eq!(loan.borrower_name, "Alice");
    assert_eq!(loan.item_name, "Microscope");
    assert_eq!(loan.quantity, 2);
    assert_eq!(loan.loan_date, Some(date(2024, 3, 1)));
    assert_eq!(loan.state, LoanState::Active);
    assert_eq!(loan.status(), LoanStatus::Borrowed);
    assert_eq!(raw_status(&db, id).await, "borrowed");
}

#[tokio::test]
async fn test_list_scenario_single_record() {
    let (_db, repo) = setup().await;
    repo.create(draft("Alice", "Microscope", 2, date(2024, 3, 1)))
        .await
        .unwrap();

    let loans = repo.list().await.unwrap();
    assert_eq!(loans.len(), 1);
    assert_eq!(loans[0].status(), LoanStatus::Borrowed);
    assert_eq!(loans[0].return_date(), None);
    assert_eq!(dates::display_return_date(loans[0].return_date()), "-");
    assert_eq!(dates::display_date(loans[0].loan_date), "01 Mar 2024");
    assert_eq!(dates::form_date(loans[0].loan_date), "2024-03-01");
}

#[tokio::test]
async fn test_list_orders_descending_and_export_ascending() {
    let (_db, repo) = setup().await;
    let mut created = Vec::new();
    for name in ["Alice", "Bob", "Carol"] {
        created.push(
            repo.create(draft(name, "Tripod", 1, date(2024, 1, 1)))
                .await
                .unwrap(),
        );
    }

    let listed: Vec<LoanId> = repo.list().await.unwrap().iter().map(|l| l.id).collect();
    let exported: Vec<LoanId> = repo
        .list_for_export()
        .await
        .unwrap()
        .iter()
        .map(|l| l.id)
        .collect();

    let mut descending = created.clone();
    descending.reverse();
    assert_eq!(listed, descending);
    assert_eq!(exported, created);
}

#[tokio::test]
async fn test_update_with_return_date_marks_returned() {
    let (db, repo) = setup().await;
    let id = repo
        .create(draft("Alice", "Microscope", 2, date(2024, 3, 1)))
        .await
        .unwrap();

    let update = LoanUpdate::new(
        draft("Alice", "Microscope", 3, date(2024, 3, 1)),
        Some(date(2024, 3, 10)),
    );
    repo.update(id, update).await.expect("Failed to update loan");

    let loan = repo.get(id).await.unwrap();
    assert_eq!(loan.quantity, 3);
    assert_eq!(loan.state, LoanState::Returned(date(2024, 3, 10)));
    assert_eq!(loan.status(), LoanStatus::Returned);
    assert_eq!(raw_status(&db, id).await, "returned");
}

#[tokio::test]
async fn test_update_without_return_date_reverts_to_borrowed() {
    let (db, repo) = setup().await;
    let id = repo
        .create(draft("Bob", "Tripod", 1, date(2024, 1, 5)))
        .await
        .unwrap();
    repo.update(
        id,
        LoanUpdate::new(draft("Bob", "Tripod", 1, date(2024, 1, 5)), Some(date(2024, 1, 9))),
    )
    .await
    .unwrap();

    repo.update(
        id,
        LoanUpdate::new(draft("Bob", "Tripod", 1, date(2024, 1, 5)), None),
    )
    .await
    .unwrap();

    let loan = repo.get(id).await.unwrap();
    assert_eq!(loan.state, LoanState::Active);
    assert_eq!(raw_status(&db, id).await, "borrowed");
}

#[tokio::test]
async fn test_update_missing_id_is_not_found() {
    let (_db, repo) = setup().await;
    let result = repo
        .update(
            LoanId::new(404),
            LoanUpdate::new(draft("Nobody", "Nothing", 1, date(2024, 1, 1)), None),
        )
        .await;
    assert!(matches!(result, Err(LoanRepositoryError::NotFound(id)) if id == LoanId::new(404)));
}

#[tokio::test]
async fn test_get_missing_id_is_not_found() {
    let (_db, repo) = setup().await;
    let result = repo.get(LoanId::new(1)).await;
    assert!(matches!(result, Err(LoanRepositoryError::NotFound(_))));
}

#[tokio::test]
async fn test_delete_removes_row() {
    let (_db, repo) = setup().await;
    let id = repo
        .create(draft("Carol", "Projector", 1, date(2024, 5, 2)))
        .await
        .unwrap();

    assert!(repo.delete(id).await.unwrap());
    assert!(matches!(
        repo.get(id).await,
        Err(LoanRepositoryError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_delete_missing_id_is_a_no_op() {
    let (_db, repo) = setup().await;
    let id = repo
        .create(draft("Carol", "Projector", 1, date(2024, 5, 2)))
        .await
        .unwrap();

    let removed = repo
        .delete(LoanId::new(id.into_inner() + 100))
        .await
        .expect("deleting a missing id should not fail");

    assert!(!removed);
    assert_eq!(repo.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_legacy_timestamp_rows_are_normalized() {
    let (db, repo) = setup().await;
    db.execute_unprepared(
        "INSERT INTO loan (borrower_name, item_name, quantity, loan_date, return_date, status) \
         VALUES ('Dana', 'Oscilloscope', 1, '2024-03-01T00:00:00Z', '2024-03-10 00:00:00+00:00', 'Dikembalikan')",
    )
    .await
    .unwrap();

    let loans = repo.list().await.unwrap();
    assert_eq!(loans.len(), 1);
    assert_eq!(loans[0].loan_date, Some(date(2024, 3, 1)));
    assert_eq!(loans[0].state, LoanState::Returned(date(2024, 3, 10)));
}

#[tokio::test]
async fn test_unreadable_return_date_is_absent() {
    let (db, repo) = setup().await;
    db.execute_unprepared(
        "INSERT INTO loan (borrower_name, item_name, quantity, loan_date, return_date, status) \
         VALUES ('Eve', 'Laptop', 1, '2024-04-01', 'sometime', 'returned')",
    )
    .await
    .unwrap();

    let loans = repo.list().await.unwrap();
    assert_eq!(loans[0].state, LoanState::Active);
    assert_eq!(loans[0].status(), LoanStatus::Borrowed);
}

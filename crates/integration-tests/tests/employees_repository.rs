//! Repository tests against a real database.
//!
//! Run with: cargo test -p employee-registry-integration-tests -- --ignored

use uuid::Uuid;

use employee_registry_api::db::{EmployeeRepository, RepositoryError};
use employee_registry_api::models::EmployeeFields;
use employee_registry_core::EmployeeId;
use employee_registry_integration_tests::test_pool;

fn fields(local: &str) -> EmployeeFields {
    EmployeeFields {
        name: local.to_string(),
        email: format!("{local}@{}.test", Uuid::new_v4().simple()),
        department: "Eng".to_string(),
        age: 30,
        salary: 90000.0,
    }
}

#[tokio::test]
#[ignore = "Requires a PostgreSQL test database"]
async fn test_insert_and_get_by_id() {
    let pool = test_pool().await;
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    let mut repo = EmployeeRepository::new(&mut conn);

    let ann = fields("ann");
    let created = repo.insert(&ann).await.expect("Insert failed");
    assert_eq!(created.fields, ann);

    let fetched = repo.get_by_id(created.id).await.expect("Get failed");
    assert_eq!(fetched, Some(created));
}

#[tokio::test]
#[ignore = "Requires a PostgreSQL test database"]
async fn test_insert_duplicate_email_is_conflict() {
    let pool = test_pool().await;
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    let mut repo = EmployeeRepository::new(&mut conn);

    let ann = fields("ann");
    repo.insert(&ann).await.expect("Insert failed");

    let err = repo
        .insert(&ann)
        .await
        .expect_err("Duplicate insert succeeded");
    assert!(matches!(err, RepositoryError::Conflict(_)), "{err}");
}

#[tokio::test]
#[ignore = "Requires a PostgreSQL test database"]
async fn test_replace_and_delete_missing_id() {
    let pool = test_pool().await;
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    let mut repo = EmployeeRepository::new(&mut conn);
    let missing = EmployeeId::new(-1);

    assert_eq!(repo.get_by_id(missing).await.expect("Get failed"), None);
    assert_eq!(
        repo.replace_by_id(missing, &fields("ghost"))
            .await
            .expect("Replace failed"),
        None
    );
    assert!(!repo.delete_by_id(missing).await.expect("Delete failed"));
}

#[tokio::test]
#[ignore = "Requires a PostgreSQL test database"]
async fn test_replace_keeps_id_and_own_email() {
    let pool = test_pool().await;
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    let mut repo = EmployeeRepository::new(&mut conn);

    let created = repo.insert(&fields("ann")).await.expect("Insert failed");

    // Same email, other fields changed: not a conflict with itself
    let mut changed = created.fields.clone();
    changed.age = 31;
    changed.department = "Research".to_string();
    let updated = repo
        .replace_by_id(created.id, &changed)
        .await
        .expect("Replace failed")
        .expect("Employee vanished");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.fields, changed);
}

#[tokio::test]
#[ignore = "Requires a PostgreSQL test database"]
async fn test_delete_removes_from_list() {
    let pool = test_pool().await;
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    let mut repo = EmployeeRepository::new(&mut conn);

    let created = repo.insert(&fields("ann")).await.expect("Insert failed");
    assert!(repo.delete_by_id(created.id).await.expect("Delete failed"));

    let all = repo.list_all().await.expect("List failed");
    assert!(all.iter().all(|e| e.id != created.id));
    assert!(all.windows(2).all(|w| w[0].id < w[1].id));
}

/// Command-line admin commands against a real database
use roster_server::{cli, config::StorageSettings, AppState};
use tempfile::TempDir;

async fn create_test_state() -> (AppState, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let storage = StorageSettings {
        database_url: format!("sqlite://{}", temp_dir.path().join("users.db").display()),
        max_connections: 2,
    };

    let app_state = AppState::connect(&storage).await.unwrap();
    (app_state, temp_dir)
}

fn output(buf: Vec<u8>) -> String {
    String::from_utf8(buf).unwrap()
}

#[tokio::test]
async fn test_add_user_prints_success() {
    let (state, _temp_dir) = create_test_state().await;

    let mut out = Vec::new();
    let id = cli::add_user(&state.users, "Alice", "alice@example.com", &mut out)
        .await
        .unwrap();

    assert_eq!(output(out), "User added successfully!\n");
    assert_eq!(state.users.list_users().await.unwrap()[0].id, id);
}

#[tokio::test]
async fn test_add_user_missing_fields_fails() {
    let (state, _temp_dir) = create_test_state().await;

    let mut out = Vec::new();
    let result = cli::add_user(&state.users, "", "alice@example.com", &mut out).await;

    assert!(result.is_err());
    assert_eq!(output(out), "Name and email are required!\n");
    assert!(state.users.list_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_add_user_duplicate_fails() {
    let (state, _temp_dir) = create_test_state().await;

    cli::add_user(&state.users, "Alice", "alice@example.com", &mut Vec::new())
        .await
        .unwrap();

    let mut out = Vec::new();
    let err = cli::add_user(&state.users, "Bob", "alice@example.com", &mut out)
        .await
        .unwrap_err();

    assert_eq!(output(out), "Email already exists!\n");
    assert!(err.to_string().contains("Email already exists!"));
    assert_eq!(state.users.list_users().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_users_newest_first() {
    let (state, _temp_dir) = create_test_state().await;

    let alice = cli::add_user(&state.users, "Alice", "alice@example.com", &mut Vec::new())
        .await
        .unwrap();
    let bob = cli::add_user(&state.users, "Bob", "bob@example.com", &mut Vec::new())
        .await
        .unwrap();

    let mut out = Vec::new();
    cli::list_users(&state.users, &mut out).await.unwrap();
    let out = output(out);

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Users:");
    assert!(lines[1].starts_with(&format!("  {} - Bob <bob@example.com> (", bob)));
    assert!(lines[2].starts_with(&format!("  {} - Alice <alice@example.com> (", alice)));
}

#[tokio::test]
async fn test_list_users_empty() {
    let (state, _temp_dir) = create_test_state().await;

    let mut out = Vec::new();
    cli::list_users(&state.users, &mut out).await.unwrap();

    assert_eq!(output(out), "Users:\n");
}

#[tokio::test]
async fn test_delete_user_reports_match() {
    let (state, _temp_dir) = create_test_state().await;

    let id = cli::add_user(&state.users, "Alice", "alice@example.com", &mut Vec::new())
        .await
        .unwrap();

    let mut out = Vec::new();
    assert!(cli::delete_user(&state.users, id, &mut out).await.unwrap());
    assert_eq!(output(out), "User deleted successfully!\n");

    let mut out = Vec::new();
    assert!(!cli::delete_user(&state.users, id, &mut out).await.unwrap());
    assert_eq!(output(out), format!("No user with id {}\n", id));
}

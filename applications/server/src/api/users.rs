/// User pages and form actions
use crate::{
    error::Result,
    notice::{Notice, NoticeRedirect, Page},
    services::users::USER_DELETED,
    state::AppState,
    views,
};
use axum::{
    extract::{Path, State},
    Form,
};
use roster_core::UserId;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AddUserForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// GET /
pub async fn index(State(app_state): State<AppState>, notice: Notice) -> Result<Page> {
    let users = app_state.users.list_users().await?;
    let html = views::user_list(&users, notice.message());
    Ok(Page::new(notice, html))
}

/// GET /add_user
pub async fn add_user_form(notice: Notice) -> Page {
    let html = views::add_user_form(notice.message());
    Page::new(notice, html)
}

/// POST /add_user
/// Redirects to the list on success, back to the form otherwise
pub async fn add_user(
    State(app_state): State<AppState>,
    Form(form): Form<AddUserForm>,
) -> Result<NoticeRedirect> {
    let outcome = app_state.users.add_user(&form.name, &form.email).await?;
    let location = if outcome.is_added() { "/" } else { "/add_user" };

    Ok(NoticeRedirect::new(location, outcome.notice()))
}

/// GET /delete_user/:id
/// Deleting an id that does not exist still reports success
pub async fn delete_user(
    Path(id): Path<UserId>,
    State(app_state): State<AppState>,
) -> Result<NoticeRedirect> {
    app_state.users.delete_user(id).await?;
    Ok(NoticeRedirect::new("/", USER_DELETED))
}

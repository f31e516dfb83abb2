//! Server-rendered HTML pages

use roster_core::User;
use std::fmt::Write;

/// Escape text for use in HTML element content and attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, notice: Option<&str>, body: &str) -> String {
    let notice = notice
        .map(|n| format!("<div class=\"notice\">{}</div>\n", escape(n)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<h1>User Management System</h1>
{notice}{body}
</body>
</html>
"#,
        title = escape(title),
    )
}

/// GET / - all users, newest first
pub fn user_list(users: &[User], notice: Option<&str>) -> String {
    let mut body = String::from("<p><a href=\"/add_user\">Add New User</a></p>\n");

    if users.is_empty() {
        body.push_str("<p>No users yet.</p>\n");
    } else {
        body.push_str(
            "<table>\n<tr><th>ID</th><th>Name</th><th>Email</th><th>Created</th><th></th></tr>\n",
        );
        for user in users {
            // Writing to a String cannot fail
            let _ = writeln!(
                body,
                "<tr><td>{id}</td><td>{name}</td><td>{email}</td><td>{created}</td>\
                 <td><a href=\"/delete_user/{id}\">Delete</a></td></tr>",
                id = user.id,
                name = escape(&user.name),
                email = escape(&user.email),
                created = user.created_at.format("%Y-%m-%d %H:%M:%S"),
            );
        }
        body.push_str("</table>\n");
    }

    layout("Users", notice, &body)
}

/// GET /add_user - empty form
pub fn add_user_form(notice: Option<&str>) -> String {
    let body = r#"<h2>Add New User</h2>
<form method="post" action="/add_user">
<p><label for="name">Name:</label> <input type="text" id="name" name="name"></p>
<p><label for="email">Email:</label> <input type="email" id="email" name="email"></p>
<p><button type="submit">Add User</button></p>
</form>
<p><a href="/">Back to users</a></p>
"#;

    layout("Add New User", notice, body)
}

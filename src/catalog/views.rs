/**
 * HTML Views
 *
 * Inline rendering for the server-rendered pages. The pages are small
 * enough that a template engine would outweigh them; each view is a
 * function from records to an HTML string. All record-sourced text passes
 * through `escape`.
 */

use crate::store::Item;

/// Escape text for safe interpolation into HTML
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, nav: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} - Bookrack</title>
<link rel="stylesheet" href="/static/style.css">
</head>
<body>
<header><h1>Bookrack</h1>{nav}</header>
<main>
{body}
</main>
</body>
</html>
"#
    )
}

fn nav_for(display_name: &str) -> String {
    format!(
        r#"<nav>Signed in as {}
<form method="post" action="/logout"><button type="submit">Log out</button></form>
</nav>"#,
        escape(display_name)
    )
}

/// Login page, with an error indicator after a failed attempt
pub fn login_page(error: bool) -> String {
    let error_html = if error {
        r#"<p class="error">Invalid credentials</p>"#
    } else {
        ""
    };
    let body = format!(
        r#"{error_html}
<form method="post" action="/login">
<label>Username <input type="text" name="username"></label>
<label>Password <input type="password" name="password"></label>
<button type="submit">Log in</button>
</form>
<p><a href="/auth/google">Log in with Google</a></p>"#
    );
    layout("Login", "", &body)
}

/// Catalog list page with the search box
pub fn items_page(items: &[Item], search: &str, display_name: &str) -> String {
    let mut rows = String::new();
    for item in items {
        rows.push_str(&format!(
            r#"<tr><td>{}</td><td>{}</td><td>{}</td>
<td><a href="/items/edit/{id}">Edit</a>
<form method="post" action="/items/delete/{id}"><button type="submit">Delete</button></form></td></tr>
"#,
            escape(&item.title),
            escape(&item.author),
            escape(&item.isbn),
            id = item.id,
        ));
    }

    let body = format!(
        r#"<form method="get" action="/items">
<input type="text" name="search" value="{search}" placeholder="Search title or author">
<button type="submit">Search</button>
</form>
<p><a href="/items/create">Add a book</a></p>
<table>
<thead><tr><th>Title</th><th>Author</th><th>ISBN</th><th></th></tr></thead>
<tbody>
{rows}</tbody>
</table>"#,
        search = escape(search),
    );
    layout("Catalog", &nav_for(display_name), &body)
}

fn item_form(action: &str, title: &str, author: &str, isbn: &str, submit: &str) -> String {
    format!(
        r#"<form method="post" action="{action}">
<label>Title <input type="text" name="title" value="{}"></label>
<label>Author <input type="text" name="author" value="{}"></label>
<label>ISBN <input type="text" name="isbn" value="{}"></label>
<button type="submit">{submit}</button>
</form>
<p><a href="/items">Back to catalog</a></p>"#,
        escape(title),
        escape(author),
        escape(isbn),
    )
}

/// Blank create form
pub fn create_page(display_name: &str) -> String {
    layout(
        "Add a book",
        &nav_for(display_name),
        &item_form("/items", "", "", "", "Create"),
    )
}

/// Pre-filled edit form
pub fn edit_page(item: &Item, display_name: &str) -> String {
    layout(
        "Edit book",
        &nav_for(display_name),
        &item_form(
            &format!("/items/update/{}", item.id),
            &item.title,
            &item.author,
            &item.isbn,
            "Save",
        ),
    )
}

/// 404 page
pub fn not_found_page() -> String {
    layout("Not found", "", "<p>Not found.</p>")
}

/// Confirmation page for the setup route
pub fn setup_done_page(username: &str) -> String {
    layout(
        "Setup",
        "",
        &format!("<p>User created: {}</p>", escape(username)),
    )
}

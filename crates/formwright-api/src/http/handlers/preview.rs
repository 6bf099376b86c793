//! POST /preview -- render assistant text as an HTML form fragment.
//!
//! The body is raw assistant text. Text that is not a schema renders the
//! placeholder, exactly like the form pane would.

use axum::response::Html;

use formwright_core::render::html::to_html;
use formwright_core::render::render;
use formwright_core::schema::extract;

pub async fn preview(body: String) -> Html<String> {
    let schema = extract(&body);
    Html(to_html(&render(schema.as_ref(), false)))
}

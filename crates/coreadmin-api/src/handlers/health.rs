//! Public landing route.

use axum::response::Html;

/// GET on the bare API prefix.
pub async fn landing() -> Html<&'static str> {
    Html("<h1>API</h1>")
}

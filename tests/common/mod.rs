//! Common test utilities for integration tests.
//!
//! Fixtures shaped like the demo API's payloads, an [`App`] wired to a
//! [`MockHttpClient`], and a helper that renders to a string.
//!
//! ```ignore
//! let (mut app, http) = mock_app(AppConfig::default());
//! http.set_default_response(MockResponse::json(users_page(0, 5, 12)));
//! ```
#![allow(dead_code)]

use std::sync::Arc;

use listdeck::adapters::MockHttpClient;
use listdeck::api::{CollectionClient, PageResponse};
use listdeck::app::{App, AppMessage, Route};
use listdeck::models::Record;
use listdeck::startup::AppConfig;
use ratatui::{backend::TestBackend, Terminal};
use serde_json::{json, Value};

pub const MOCK_BASE_URL: &str = "http://mock.test";

pub fn user_json(id: usize) -> Value {
    json!({
        "id": id,
        "firstName": format!("First{id}"),
        "lastName": format!("Last{id}"),
        "email": format!("user{id}@example.com"),
        "phone": "+1 555 0100",
        "birthDate": "1990-1-1",
        "age": 30 + id % 20,
        "gender": if id % 2 == 0 { "female" } else { "male" },
    })
}

pub fn product_json(id: usize) -> Value {
    json!({
        "id": id,
        "title": format!("Product {id}"),
        "description": "A fine product",
        "price": 9.99 + id as f64,
        "category": "beauty",
        "stock": 10 + id,
        "brand": "Acme",
        "thumbnail": format!("https://cdn.example.com/{id}.png"),
        "rating": 4.5,
    })
}

/// `{"users": [...], "total", "skip", "limit"}` with ids `skip+1..`.
pub fn users_page(skip: usize, n: usize, total: usize) -> Value {
    let users: Vec<Value> = (skip + 1..=skip + n).map(user_json).collect();
    json!({ "users": users, "total": total, "skip": skip, "limit": n })
}

pub fn products_page(skip: usize, n: usize, total: usize) -> Value {
    let products: Vec<Value> = (skip + 1..=skip + n).map(product_json).collect();
    json!({ "products": products, "total": total, "skip": skip, "limit": n })
}

/// Typed page for feeding messages straight into an [`App`].
pub fn page_response(route: Route, skip: usize, n: usize, total: usize) -> PageResponse {
    let make: fn(usize) -> Value = match route {
        Route::Users => user_json,
        Route::Products => product_json,
    };
    PageResponse {
        items: (skip + 1..=skip + n).map(|i| Record::from(make(i))).collect(),
        total,
        skip,
        limit: n,
    }
}

pub fn mock_app(config: AppConfig) -> (App, MockHttpClient) {
    let http = MockHttpClient::new();
    let client = CollectionClient::with_http(MOCK_BASE_URL, Arc::new(http.clone()));
    (App::with_client(config, client), http)
}

/// Complete `route`'s pending fetch synchronously with a page of `total`.
pub fn load_page(app: &mut App, route: Route, total: usize) {
    let ticket = app
        .list_mut(route)
        .take_fetch()
        .expect("a fetch should be pending");
    let n = ticket
        .request
        .limit
        .min(total.saturating_sub(ticket.request.skip));
    app.handle_message(AppMessage::PageLoaded {
        route,
        seq: ticket.seq,
        result: Ok(page_response(route, ticket.request.skip, n, total)),
    });
}

/// Render `app` at `width`x`height` and return the screen, one line per row.
pub fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| listdeck::ui::render(f, app))
        .unwrap();

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..height {
        for x in 0..width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

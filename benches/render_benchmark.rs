//! Performance benchmarks for screen rendering
//!
//! Measures a full frame for the user table and for the product grid at
//! different accumulated sizes.
//! Run with: cargo bench

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use listdeck::adapters::MockHttpClient;
use listdeck::api::{CollectionClient, PageResponse};
use listdeck::app::{App, AppMessage, Route};
use listdeck::models::Record;
use listdeck::startup::AppConfig;
use ratatui::{backend::TestBackend, Terminal};
use serde_json::json;

fn record(route: Route, id: usize) -> Record {
    let value = match route {
        Route::Users => json!({
            "id": id,
            "firstName": format!("First{id}"),
            "lastName": format!("Last{id}"),
            "email": format!("user{id}@example.com"),
            "phone": "+1 555 0100",
            "birthDate": "1990-1-1",
            "age": 30,
            "gender": "female",
        }),
        Route::Products => json!({
            "id": id,
            "title": format!("Product {id}"),
            "description": "An item with a description long enough to need truncating",
            "price": 19.99,
            "category": "groceries",
            "stock": 42,
            "brand": "Acme",
            "rating": 4.2,
        }),
    };
    Record::from(value)
}

/// App on `route` with `count` records loaded (in pages for products).
fn app_with(route: Route, count: usize, page_size: usize) -> App {
    let client = CollectionClient::with_http("http://bench", Arc::new(MockHttpClient::new()));
    let config = AppConfig::default()
        .with_initial_route(route)
        .with_users_page_size(page_size)
        .with_products_page_size(page_size);
    let mut app = App::with_client(config, client);

    let mut loaded = 0;
    while loaded < count {
        let Some(ticket) = app.list_mut(route).take_fetch() else {
            if !app.list_mut(route).load_more() {
                break;
            }
            continue;
        };
        let n = ticket.request.limit.min(count - loaded);
        let items = (loaded..loaded + n).map(|i| record(route, i + 1)).collect();
        app.handle_message(AppMessage::PageLoaded {
            route,
            seq: ticket.seq,
            result: Ok(PageResponse {
                items,
                total: count,
                skip: ticket.request.skip,
                limit: ticket.request.limit,
            }),
        });
        loaded += n;
    }
    app
}

fn bench_user_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("user_table_render");

    for page_size in [5, 10, 15] {
        let mut app = app_with(Route::Users, 208, page_size);
        let mut terminal = Terminal::new(TestBackend::new(160, 40)).unwrap();
        group.throughput(Throughput::Elements(page_size as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_rows", page_size)),
            &page_size,
            |b, _| {
                b.iter(|| {
                    terminal
                        .draw(|f| listdeck::ui::render(f, black_box(&mut app)))
                        .unwrap();
                });
            },
        );
    }

    group.finish();
}

fn bench_product_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("product_grid_render");

    for count in [20, 100, 194] {
        let mut app = app_with(Route::Products, count, 20);
        let mut terminal = Terminal::new(TestBackend::new(160, 40)).unwrap();
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_items", count)),
            &count,
            |b, _| {
                b.iter(|| {
                    terminal
                        .draw(|f| listdeck::ui::render(f, black_box(&mut app)))
                        .unwrap();
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_user_table, bench_product_grid);
criterion_main!(benches);

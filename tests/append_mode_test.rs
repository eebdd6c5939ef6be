//! Infinite-scroll accumulation over a real HTTP round trip.

mod common;

use common::users_page;
use listdeck::api::CollectionClient;
use listdeck::models::Resource;
use listdeck::view_model::{ApplyOutcome, FetchKind, FetchState, ListMode, RemoteList};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mount one mock per page of a 45-record collection served 20 at a time.
async fn mount_45_users(server: &MockServer) {
    for (skip, n) in [(0, 20), (20, 20), (40, 5)] {
        Mock::given(method("GET"))
            .and(path("/users"))
            .and(query_param("skip", skip.to_string()))
            .and(query_param("limit", "20"))
            .respond_with(ResponseTemplate::new(200).set_body_json(users_page(skip, n, 45)))
            .expect(1)
            .mount(server)
            .await;
    }
}

/// Drive `list` until it stops asking for pages; returns requests issued.
async fn drain(list: &mut RemoteList, client: &CollectionClient) -> usize {
    let mut issued = 0;
    loop {
        let Some(ticket) = list.take_fetch() else {
            if !list.load_more() {
                return issued;
            }
            continue;
        };
        issued += 1;
        let outcome = client.fetch_page(&ticket.request).await;
        assert_eq!(list.apply(ticket.seq, outcome), ApplyOutcome::Applied);
    }
}

#[tokio::test]
async fn test_accumulates_all_records_then_stops() {
    let server = MockServer::start().await;
    mount_45_users(&server).await;

    let client = CollectionClient::with_base_url(server.uri());
    let mut list = RemoteList::new(Resource::Users, ListMode::Append, 20);

    let issued = drain(&mut list, &client).await;

    assert_eq!(issued, 3);
    assert_eq!(list.items().len(), 45);
    assert_eq!(list.total_count(), 45);
    assert!(!list.has_more());
    assert_eq!(list.state(), &FetchState::Success);

    let ids: Vec<u64> = list.items().iter().filter_map(|r| r.id()).collect();
    assert_eq!(ids, (1..=45).collect::<Vec<u64>>());

    // Exhausted: further load-more requests are refused.
    assert!(!list.load_more());
    assert!(list.take_fetch().is_none());
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_reset_starts_over_from_first_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("skip", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_page(0, 20, 45)))
        .expect(2)
        .mount(&server)
        .await;

    let client = CollectionClient::with_base_url(server.uri());
    let mut list = RemoteList::new(Resource::Users, ListMode::Append, 20);

    let ticket = list.take_fetch().unwrap();
    let outcome = client.fetch_page(&ticket.request).await;
    list.apply(ticket.seq, outcome);
    assert_eq!(list.items().len(), 20);

    list.reset();
    assert!(list.items().is_empty());
    let ticket = list.take_fetch().unwrap();
    assert_eq!(ticket.kind, FetchKind::Reload);
    assert_eq!(ticket.request.skip, 0);
    let outcome = client.fetch_page(&ticket.request).await;
    list.apply(ticket.seq, outcome);
    assert_eq!(list.items().len(), 20);
}

#[tokio::test]
async fn test_failed_load_more_keeps_accumulated_items() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("skip", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_page(0, 20, 45)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("skip", "20"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = CollectionClient::with_base_url(server.uri());
    let mut list = RemoteList::new(Resource::Users, ListMode::Append, 20);

    let ticket = list.take_fetch().unwrap();
    let outcome = client.fetch_page(&ticket.request).await;
    list.apply(ticket.seq, outcome);

    assert!(list.load_more());
    let ticket = list.take_fetch().unwrap();
    let outcome = client.fetch_page(&ticket.request).await;
    list.apply(ticket.seq, outcome);

    assert_eq!(list.items().len(), 20);
    assert_eq!(list.error(), Some("The requested resource was not found."));
    // The user can try again.
    assert!(list.load_more());
}

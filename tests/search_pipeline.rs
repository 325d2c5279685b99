mod common;

use cinesearch::app::{Store, ViewMode};
use cinesearch::domain::top_rated;
use cinesearch::search::{DetailFetcher, SearchCoordinator, SearchRequest, SearchSettings};
use cinesearch::CineSearchError;
use common::{batman_begins, movie, past_window, seeded_store, FakeApi, Failure};
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn coordinator(store: &Arc<Store>, api: &Arc<FakeApi>) -> SearchCoordinator {
    SearchCoordinator::new(Arc::clone(store), api.clone(), SearchSettings::default())
        .expect("inside a runtime")
}

fn bat_results(api: &FakeApi) {
    api.respond(
        "bat",
        1,
        vec![movie("tt0372784", "Batman Begins"), movie("tt0096895", "Batman")],
        25,
    );
}

#[tokio::test(start_paused = true)]
async fn short_terms_never_call_the_api() {
    let store = seeded_store();
    let api = FakeApi::new();
    let search = coordinator(&store, &api);

    for term in ["", "b", "ba"] {
        search.on_term_changed(term);
        past_window().await;
    }

    assert!(api.search_calls().is_empty());
    assert!(!search.is_pending());
}

#[tokio::test(start_paused = true)]
async fn burst_fires_one_lookup_with_last_term() {
    let store = seeded_store();
    let api = FakeApi::new();
    let search = coordinator(&store, &api);

    search.on_term_changed("bat");
    tokio::time::sleep(Duration::from_millis(300)).await;
    search.on_term_changed("batm");
    tokio::time::sleep(Duration::from_millis(300)).await;
    search.on_term_changed("batman");
    assert!(search.is_pending());
    past_window().await;

    assert_eq!(api.search_calls(), vec![("batman".to_string(), 1)]);
    assert!(!search.is_pending());
}

#[tokio::test(start_paused = true)]
async fn bat_scenario_fills_results() {
    let store = seeded_store();
    let api = FakeApi::new();
    bat_results(&api);
    let search = coordinator(&store, &api);

    search.on_term_changed("bat");
    past_window().await;

    let state = store.snapshot();
    assert_eq!(state.query.term, "bat");
    assert_eq!(state.query.page, 1);
    assert_eq!(state.query.results.len(), 2);
    assert_eq!(state.query.results[0].title, "Batman Begins");
    assert_eq!(state.query.total_results, 25);
    assert!(!state.query.loading);
    assert!(state.has_next_page(10));
    assert_eq!(state.page_count(10), 3);
}

#[tokio::test(start_paused = true)]
async fn xx_scenario_leaves_results_alone() {
    let store = seeded_store();
    let api = FakeApi::new();
    let search = coordinator(&store, &api);

    search.on_term_changed("xx");
    tokio::time::sleep(Duration::from_secs(3)).await;

    let state = store.snapshot();
    assert!(api.search_calls().is_empty());
    assert_eq!(state.query.term, "xx");
    assert_eq!(state.query.results, top_rated());
    assert!(!state.query.loading);
}

#[tokio::test(start_paused = true)]
async fn term_length_counts_characters() {
    let store = seeded_store();
    let api = FakeApi::new();
    let search = coordinator(&store, &api);

    search.on_term_changed("été");
    past_window().await;

    assert_eq!(api.search_calls(), vec![("été".to_string(), 1)]);
}

#[tokio::test(start_paused = true)]
async fn term_change_resets_page() {
    let store = seeded_store();
    let api = FakeApi::new();
    let search = coordinator(&store, &api);

    search.on_page_changed(4).unwrap();
    assert_eq!(store.snapshot().query.page, 4);

    search.on_term_changed("alien");
    assert_eq!(store.snapshot().query.page, 1);
    past_window().await;

    assert_eq!(api.search_calls(), vec![("alien".to_string(), 1)]);
}

#[tokio::test(start_paused = true)]
async fn page_zero_is_rejected() {
    let store = seeded_store();
    let api = FakeApi::new();
    let search = coordinator(&store, &api);

    search.on_term_changed("bat");
    past_window().await;
    let before = store.snapshot();

    let result = search.on_page_changed(0);

    assert!(matches!(result, Err(CineSearchError::InvalidPage(0))));
    assert_eq!(store.snapshot(), before);
    assert!(!search.is_pending());
}

#[tokio::test(start_paused = true)]
async fn quick_page_changes_collapse_to_last() {
    let store = seeded_store();
    let api = FakeApi::new();
    bat_results(&api);
    api.respond("bat", 3, vec![movie("tt0112462", "Batman Forever")], 25);
    let search = coordinator(&store, &api);

    search.on_term_changed("bat");
    past_window().await;

    search.on_page_changed(2).unwrap();
    tokio::time::sleep(Duration::from_millis(200)).await;
    search.on_page_changed(3).unwrap();
    past_window().await;

    assert_eq!(
        api.search_calls(),
        vec![("bat".to_string(), 1), ("bat".to_string(), 3)]
    );
    let state = store.snapshot();
    assert_eq!(state.query.page, 3);
    assert_eq!(state.query.results[0].title, "Batman Forever");
}

#[tokio::test(start_paused = true)]
async fn failures_are_silent_and_clear_loading() {
    let store = seeded_store();
    let api = FakeApi::new();
    api.set_failing(true);
    let search = coordinator(&store, &api);

    search.on_term_changed("bat");
    past_window().await;

    let state = store.snapshot();
    assert_eq!(api.search_calls().len(), 1);
    assert_eq!(state.query.results, top_rated());
    assert!(!state.query.loading);
}

#[tokio::test(start_paused = true)]
async fn malformed_payloads_are_silent_and_clear_loading() {
    let store = seeded_store();
    let api = FakeApi::new();
    bat_results(&api);
    api.fail_with(Some(Failure::Malformed));
    let search = coordinator(&store, &api);

    search.on_term_changed("bat");
    past_window().await;

    let state = store.snapshot();
    assert_eq!(api.search_calls(), vec![("bat".to_string(), 1)]);
    assert_eq!(state.query.results, top_rated());
    assert_eq!(state.query.total_results, 0);
    assert!(!state.query.loading);
}

#[tokio::test(start_paused = true)]
async fn fired_lookup_returns_to_results_view() {
    let store = seeded_store();
    let api = FakeApi::new();
    bat_results(&api);
    let search = coordinator(&store, &api);

    store.toggle_favorites_view();
    assert_eq!(store.snapshot().view_mode, ViewMode::Favorites);

    search.on_term_changed("bat");
    assert_eq!(store.snapshot().view_mode, ViewMode::Favorites);
    past_window().await;

    let state = store.snapshot();
    assert_eq!(state.view_mode, ViewMode::Results);
    assert_eq!(state.query.results.len(), 2);
}

#[tokio::test(start_paused = true)]
async fn loading_is_set_while_request_in_flight() {
    let store = seeded_store();
    let api = FakeApi::new();
    bat_results(&api);
    api.delay_page(1, Duration::from_secs(2));
    let search = coordinator(&store, &api);

    search.on_term_changed("bat");
    past_window().await;
    assert!(store.snapshot().query.loading);

    tokio::time::sleep(Duration::from_secs(2)).await;
    let state = store.snapshot();
    assert!(!state.query.loading);
    assert_eq!(state.query.results.len(), 2);
}

#[tokio::test(start_paused = true)]
async fn stale_response_is_discarded() {
    let store = seeded_store();
    let api = FakeApi::new();
    bat_results(&api);
    api.respond("bat", 2, vec![movie("tt0103776", "Batman Returns")], 25);
    api.respond("bat", 3, vec![movie("tt0112462", "Batman Forever")], 25);
    api.delay_page(2, Duration::from_secs(5));
    let search = coordinator(&store, &api);

    search.on_term_changed("bat");
    past_window().await;

    search.on_page_changed(2).unwrap();
    past_window().await;
    assert!(store.snapshot().query.loading);

    search.on_page_changed(3).unwrap();
    past_window().await;
    let state = store.snapshot();
    assert_eq!(state.query.results[0].title, "Batman Forever");
    assert!(!state.query.loading);

    tokio::time::sleep(Duration::from_secs(5)).await;
    let state = store.snapshot();
    assert_eq!(api.search_calls().len(), 3);
    assert_eq!(state.query.page, 3);
    assert_eq!(state.query.results[0].title, "Batman Forever");
    assert!(!state.query.loading);
}

#[tokio::test(start_paused = true)]
async fn short_term_keeps_earlier_lookup_pending() {
    let store = seeded_store();
    let api = FakeApi::new();
    let search = coordinator(&store, &api);

    search.on_term_changed("bat");
    tokio::time::sleep(Duration::from_millis(200)).await;
    search.on_term_changed("ba");
    past_window().await;

    assert_eq!(api.search_calls(), vec![("bat".to_string(), 1)]);
    assert_eq!(store.snapshot().query.term, "ba");
}

#[tokio::test(start_paused = true)]
async fn cancel_pending_drops_scheduled_lookup() {
    let store = seeded_store();
    let api = FakeApi::new();
    let search = coordinator(&store, &api);

    search.on_term_changed("bat");
    let dropped = search.cancel_pending();
    past_window().await;

    assert_eq!(
        dropped,
        Some(SearchRequest {
            term: "bat".into(),
            page: 1
        })
    );
    assert!(api.search_calls().is_empty());
    assert_eq!(search.cancel_pending(), None);
}

#[tokio::test(start_paused = true)]
async fn observers_see_loading_toggle() {
    let store = seeded_store();
    let api = FakeApi::new();
    bat_results(&api);
    let search = coordinator(&store, &api);

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    store.subscribe(move |state| sink.lock().unwrap().push(state.query.loading));

    search.on_term_changed("bat");
    past_window().await;

    let seen = seen.lock().unwrap().clone();
    assert!(seen.contains(&true));
    assert_eq!(seen.last(), Some(&false));
}

#[tokio::test(start_paused = true)]
async fn detail_fetch_opens_known_movie() {
    let store = seeded_store();
    let api = FakeApi::new();
    api.add_detail(batman_begins());
    let details = DetailFetcher::new(Arc::clone(&store), api.clone());

    assert!(details.fetch_detail("tt0372784").await);

    let state = store.snapshot();
    assert_eq!(state.selected, Some(batman_begins()));
    assert!(!state.query.loading);
    assert_eq!(state.query.results, top_rated());

    details.close_detail();
    assert!(!store.snapshot().is_detail_open());
}

#[tokio::test(start_paused = true)]
async fn detail_fetch_of_unknown_id_is_silent() {
    let store = seeded_store();
    let api = FakeApi::new();
    let details = DetailFetcher::new(Arc::clone(&store), api.clone());

    assert!(!details.fetch_detail("tt0000000").await);

    let state = store.snapshot();
    assert_eq!(api.detail_calls(), vec!["tt0000000".to_string()]);
    assert!(state.selected.is_none());
    assert!(!state.query.loading);
}

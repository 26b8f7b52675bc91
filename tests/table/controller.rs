use admindash::api::{ApiError, User};
use admindash::table::{DataSource, LoadStatus, SortOrder, TableController};

use super::fake_source::FakeUsers;

fn controller() -> TableController<User> {
    TableController::default()
}

#[tokio::test]
async fn test_pages_of_25_rows_hold_10_10_5() {
    let source = FakeUsers::with_users(25);
    let mut table = controller();

    assert!(table.fetch(&source).await);
    assert_eq!(table.page_count(), 3);
    assert_eq!(table.rows().len(), 10);

    assert!(table.next_page());
    table.fetch(&source).await;
    assert_eq!(table.rows().len(), 10);

    assert!(table.next_page());
    table.fetch(&source).await;
    assert_eq!(table.rows().len(), 5);
    assert_eq!(table.current_page(), 3);

    // already on the last page
    assert!(!table.next_page());
}

#[tokio::test]
async fn test_every_page_is_full_except_the_last() {
    for (total, size) in [(1usize, 5usize), (9, 3), (10, 4), (47, 10), (50, 50)] {
        let source = FakeUsers::with_users(total);
        let mut table = controller();
        table.set_page_size(size);
        table.fetch(&source).await;

        let pages = table.page_count();
        assert_eq!(pages, total.div_ceil(size));
        for index in 0..pages {
            table.set_page(index);
            table.fetch(&source).await;
            let expected = if index + 1 < pages { size } else { total - size * (pages - 1) };
            assert_eq!(table.rows().len(), expected, "total {total} size {size} page {index}");
        }
    }
}

#[tokio::test]
async fn test_empty_collection_has_no_pages() {
    let source = FakeUsers::with_users(0);
    let mut table = controller();
    table.fetch(&source).await;

    assert_eq!(table.page_count(), 0);
    assert!(table.rows().is_empty());
    assert!(!table.next_page());
    assert!(!table.last_page());
    assert_eq!(table.selection_summary(), "0 of 0 row(s) selected.");
}

#[tokio::test]
async fn test_sort_twice_is_descending_on_same_page() {
    let source = FakeUsers::with_users(25);
    let mut table = controller();
    table.fetch(&source).await;
    table.next_page();
    table.fetch(&source).await;

    table.toggle_sort("full_name");
    table.fetch(&source).await;
    table.toggle_sort("full_name");
    table.fetch(&source).await;

    assert_eq!(table.sort_direction_of("full_name"), Some(SortOrder::Desc));
    assert_eq!(table.page_index(), 1);

    let last = source.requests.lock().unwrap().last().cloned().unwrap();
    assert_eq!(last.sort_field, "full_name");
    assert_eq!(last.sort_order, SortOrder::Desc);
    assert_eq!(last.page, 2);
}

#[tokio::test]
async fn test_email_filter_then_clear_restores_initial_result() {
    let source = FakeUsers::with_users(25);
    let mut table = controller();
    table.fetch(&source).await;
    let initial: Vec<String> = table.rows().iter().map(|u| u.id.clone()).collect();
    let initial_total = table.total();

    assert!(table.set_filter("email", "user07"));
    table.fetch(&source).await;
    assert_eq!(table.total(), 1);

    assert!(table.set_filter("email", ""));
    table.fetch(&source).await;
    let restored: Vec<String> = table.rows().iter().map(|u| u.id.clone()).collect();

    assert_eq!(restored, initial);
    assert_eq!(table.total(), initial_total);
    assert!(source.requests.lock().unwrap().last().unwrap().filter("email").is_none());
}

#[tokio::test]
async fn test_refetch_without_mutation_keeps_rows() {
    let source = FakeUsers::with_users(12);
    let mut table = controller();
    table.fetch(&source).await;
    let before: Vec<String> = table.rows().iter().map(|u| u.id.clone()).collect();
    let requests = source.request_count();

    table.fetch(&source).await;

    let after: Vec<String> = table.rows().iter().map(|u| u.id.clone()).collect();
    assert_eq!(before, after);
    assert_eq!(table.total(), 12);
    assert_eq!(source.request_count(), requests + 1);
}

#[tokio::test]
async fn test_confirmed_delete_then_refetch_drops_row() {
    let source = FakeUsers::with_users(12);
    let mut table = controller();
    table.fetch(&source).await;
    let victim = table.rows()[0].id.clone();

    source.delete(&victim).await.unwrap();
    table.fetch(&source).await;

    assert_eq!(table.total(), 11);
    assert!(table.row(&victim).is_none());
}

#[tokio::test]
async fn test_status_change_is_visible_after_refetch() {
    let source = FakeUsers::with_users(3);
    let mut table = controller();
    table.fetch(&source).await;
    let id = table.rows()[0].id.clone();

    source.set_active(&id, false).await.unwrap();
    table.fetch(&source).await;
    assert!(!table.row(&id).unwrap().is_active);
}

#[tokio::test]
async fn test_stale_response_for_old_page_is_ignored() {
    let source = FakeUsers::with_users(25);
    let mut table = controller();
    table.fetch(&source).await;

    // request page 2, then move on to page 3 before it answers
    table.next_page();
    let page_two = table.begin_fetch();
    let page_two_response = source.list(&page_two.params).await.unwrap();

    table.next_page();
    let page_three = table.begin_fetch();
    let page_three_response = source.list(&page_three.params).await.unwrap();

    assert!(table.apply_response(&page_three, page_three_response));
    assert!(!table.apply_response(&page_two, page_two_response));
    assert_eq!(table.current_page(), 3);
    assert_eq!(table.rows().len(), 5);
    assert_eq!(table.status(), LoadStatus::Success);
}

#[tokio::test]
async fn test_error_after_success_keeps_rows() {
    let source = FakeUsers::with_users(5);
    let mut table = controller();
    table.fetch(&source).await;

    let ticket = table.begin_fetch();
    assert!(table.apply_error(&ticket, ApiError::Network("connection reset".to_string())));

    assert_eq!(table.status(), LoadStatus::Error);
    assert_eq!(table.rows().len(), 5);
    assert!(matches!(table.error(), Some(ApiError::Network(_))));
}

#[tokio::test]
async fn test_selection_resets_when_page_changes() {
    let source = FakeUsers::with_users(25);
    let mut table = controller();
    table.fetch(&source).await;

    table.toggle_select_page();
    assert_eq!(table.selection_summary(), "10 of 25 row(s) selected.");

    table.next_page();
    table.fetch(&source).await;
    assert!(table.selection().is_empty());
}

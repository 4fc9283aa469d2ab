use teammanager::config::PaginationConfig;
use teammanager::{Page, PageRequest};

#[test]
fn test_page_totals_round_up() {
    let page = Page::new(vec![21, 22, 23, 24, 25], PageRequest::new(2, 10), 25);

    assert_eq!(page.total_pages, 3);
    assert_eq!(page.len(), 5);
    assert!(page.is_last());
    assert!(page.has_previous());
    assert!(!page.is_first());
}

#[test]
fn test_exact_multiple_has_no_partial_page() {
    let page: Page<i32> = Page::new(vec![1; 10], PageRequest::first(10), 20);

    assert_eq!(page.total_pages, 2);
    assert!(page.has_next());
    assert!(!page.is_last());
}

#[test]
fn test_empty_page() {
    let page: Page<i32> = Page::empty(PageRequest::first(10));

    assert!(page.is_empty());
    assert_eq!(page.total_pages, 0);
    assert!(page.is_first());
    assert!(page.is_last());
}

#[test]
fn test_map_keeps_metadata() {
    let page = Page::new(vec![1, 2], PageRequest::new(1, 2), 4).map(|n| n * 10);

    assert_eq!(page.items, vec![10, 20]);
    assert_eq!(page.page, 1);
    assert_eq!(page.total_items, 4);
    assert_eq!(page.total_pages, 2);
}

#[test]
fn test_page_request_navigation() {
    let request = PageRequest::first(25);
    assert_eq!(request.offset(), 0);
    assert_eq!(request.next().next().offset(), 50);
}

#[test]
fn test_navigation_saturates_at_last_page_number() {
    let request = PageRequest::new(u64::MAX, 10);
    assert_eq!(request.next().page, u64::MAX);

    let page: Page<i32> = Page::new(Vec::new(), request, 5);
    assert!(!page.has_next());
    assert!(page.is_last());
}

#[test]
fn test_clamped_request_uses_pagination_config() {
    let config = PaginationConfig {
        default_page_size: 20,
        max_page_size: 50,
    };

    assert_eq!(PageRequest::clamped(3, None, &config), PageRequest::new(3, 20));
    assert_eq!(PageRequest::clamped(0, Some(500), &config), PageRequest::new(0, 50));
    assert_eq!(PageRequest::clamped(1, Some(0), &config), PageRequest::new(1, 1));
}

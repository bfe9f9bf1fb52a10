use opsdesk::paginator::{paginate, total_pages, Paginator};

#[test]
fn test_forty_five_records_twenty_per_page() {
    let items: Vec<u32> = (1..=45).collect();
    assert_eq!(total_pages(items.len(), 20), 3);

    let page = paginate(&items, 20, 3);
    assert_eq!(page.items.len(), 5);
    assert_eq!(page.items, &[41, 42, 43, 44, 45]);
    assert_eq!(page.first_index(), 41);
    assert_eq!(page.last_index(), 45);
    assert!(!page.has_next());
    assert!(page.has_previous());
}

#[test]
fn test_pages_cover_every_item_once() {
    let items: Vec<u32> = (0..45).collect();
    for page_size in 1..=50 {
        let pages = total_pages(items.len(), page_size);
        let mut seen = Vec::new();
        for page in 1..=pages {
            seen.extend_from_slice(paginate(&items, page_size, page).items);
        }
        assert_eq!(seen, items, "page size {}", page_size);
    }
}

#[test]
fn test_out_of_range_pages_clamp() {
    let items: Vec<u32> = (1..=45).collect();

    let below = paginate(&items, 20, 0);
    assert_eq!(below.page, 1);
    assert_eq!(below.items.len(), 20);

    let above = paginate(&items, 20, 99);
    assert_eq!(above.page, 3);
    assert_eq!(above.items.len(), 5);
}

#[test]
fn test_empty_list_has_single_empty_page() {
    let items: Vec<u32> = Vec::new();
    let page = paginate(&items, 20, 4);
    assert_eq!(page.page, 1);
    assert_eq!(page.total_pages, 1);
    assert!(page.items.is_empty());
    assert_eq!(page.first_index(), 0);
    assert_eq!(page.last_index(), 0);
}

#[test]
fn test_navigation_noops_at_boundaries() {
    let mut paginator = Paginator::new(20);
    assert!(!paginator.previous(45));
    assert_eq!(paginator.page(), 1);

    assert!(paginator.next(45));
    assert!(paginator.next(45));
    assert!(!paginator.next(45));
    assert_eq!(paginator.page(), 3);

    assert!(!paginator.go_to(0, 45));
    assert!(!paginator.go_to(4, 45));
    assert_eq!(paginator.page(), 3);

    assert!(paginator.go_to(1, 45));
    assert!(paginator.last(45));
    assert_eq!(paginator.page(), 3);
}

#[test]
fn test_clamp_after_list_shrinks() {
    let mut paginator = Paginator::new(20);
    paginator.last(45);
    paginator.clamp(21);
    assert_eq!(paginator.page(), 2);
    paginator.clamp(0);
    assert_eq!(paginator.page(), 1);
}

#[test]
fn test_zero_page_size_is_treated_as_one() {
    let paginator = Paginator::new(0);
    assert_eq!(paginator.page_size(), 1);
    let items = [1, 2, 3];
    assert_eq!(paginator.view(&items).total_pages, 3);
}

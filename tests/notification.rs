use opsdesk::notification::{NotificationCenter, NotificationKind, NotificationState, Notifier};
use std::time::{Duration, Instant};

fn center() -> NotificationCenter {
    NotificationCenter::new(Duration::from_millis(4000), 2)
}

#[test]
fn test_notifications_start_queued() {
    let mut center = center();
    let id = center.notify(NotificationKind::Success, "Saved", "Role 3 updated");

    let entry = center.active().next().unwrap();
    assert_eq!(entry.id, id);
    assert_eq!(entry.state, NotificationState::Queued);
    assert_eq!(entry.kind, NotificationKind::Success);
    assert_eq!(entry.title, "Saved");
    assert_eq!(entry.message, "Role 3 updated");
    assert!(center.visible().is_empty());
}

#[test]
fn test_tick_promotes_up_to_max_visible() {
    let mut center = center();
    let now = Instant::now();
    center.notify(NotificationKind::Info, "a", "first");
    center.notify(NotificationKind::Info, "b", "second");
    let third = center.notify(NotificationKind::Error, "c", "third");

    center.tick(now);
    assert_eq!(center.visible().len(), 2);
    assert!(center.visible().iter().all(|n| n.state == NotificationState::Visible));
    assert_eq!(center.len(), 3);

    let queued: Vec<_> = center.active().filter(|n| n.state == NotificationState::Queued).collect();
    assert_eq!(queued.len(), 1);
    assert_eq!(queued[0].id, third);
}

#[test]
fn test_timeout_dismisses_and_frees_slot() {
    let mut center = center();
    let start = Instant::now();
    let first = center.notify(NotificationKind::Info, "a", "first");
    center.notify(NotificationKind::Info, "b", "second");
    center.notify(NotificationKind::Info, "c", "third");
    center.tick(start);

    assert!(center.tick(start + Duration::from_millis(3999)).is_empty());

    let expired = center.tick(start + Duration::from_millis(4000));
    assert_eq!(expired.len(), 2);
    assert_eq!(expired[0].id, first);
    assert!(expired.iter().all(|n| n.state == NotificationState::Dismissed));

    // The queued third one took a free slot
    assert_eq!(center.visible().len(), 1);
    assert_eq!(center.visible()[0].message, "third");
}

#[test]
fn test_explicit_dismiss() {
    let mut center = center();
    let now = Instant::now();
    let first = center.notify(NotificationKind::Info, "a", "first");
    let queued = {
        center.notify(NotificationKind::Info, "b", "second");
        center.notify(NotificationKind::Info, "c", "third")
    };
    center.tick(now);

    let dismissed = center.dismiss(first).unwrap();
    assert_eq!(dismissed.state, NotificationState::Dismissed);
    assert!(center.dismiss(first).is_none());

    // Queued entries can be dismissed before they are shown
    assert!(center.dismiss(queued).is_some());
    assert_eq!(center.len(), 1);

    let latest = center.dismiss_latest().unwrap();
    assert_eq!(latest.message, "second");
    assert!(center.is_empty());
    assert!(center.dismiss_latest().is_none());
}

#[test]
fn test_ids_are_unique() {
    let mut center = center();
    let a = center.notify(NotificationKind::Info, "a", "");
    let b = center.notify(NotificationKind::Info, "a", "");
    assert_ne!(a, b);
}

#[test]
fn test_kind_display() {
    assert_eq!(NotificationKind::Error.to_string(), "error");
    assert_eq!(NotificationKind::Success.to_string(), "success");
}

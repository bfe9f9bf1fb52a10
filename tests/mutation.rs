use opsdesk::domains::{integration, role, Integration, Role};
use opsdesk::mutation::{apply, duplicate, fresh_id, Command, MutationError, OptimisticMutator, Patch};
use opsdesk::record::{Record, RecordId};
use serde_json::json;
use std::sync::Arc;

fn rows<R>(records: Vec<R>) -> Vec<Arc<R>> {
    records.into_iter().map(Arc::new).collect()
}

fn patch(value: serde_json::Value) -> Patch {
    value.as_object().cloned().unwrap()
}

#[test]
fn test_toggle_flips_only_the_target_field() {
    let before = rows(integration::seed());
    let target = RecordId::from("stripe");

    let after = apply(
        &before,
        &Command::Toggle {
            id: target.clone(),
            field: "enabled".to_string(),
        },
    )
    .unwrap();

    assert_eq!(after.len(), before.len());
    for (old, new) in before.iter().zip(&after) {
        if old.id() == target {
            assert!(!Arc::ptr_eq(old, new));
            assert_eq!(new.enabled, !old.enabled);
            let mut expected: Integration = (**old).clone();
            expected.enabled = !old.enabled;
            assert_eq!(**new, expected);
        } else {
            assert!(Arc::ptr_eq(old, new));
        }
    }
    // The input list is untouched
    assert!(before.iter().find(|r| r.id() == target).unwrap().enabled);
}

#[test]
fn test_toggle_rejects_non_boolean_and_unknown_fields() {
    let list = rows(integration::seed());
    let id = RecordId::from("stripe");

    let err = apply(&list, &Command::Toggle { id: id.clone(), field: "status".to_string() }).unwrap_err();
    assert!(matches!(err, MutationError::NotBoolean(_)));

    let err = apply(&list, &Command::Toggle { id, field: "nope".to_string() }).unwrap_err();
    assert!(matches!(err, MutationError::UnknownField(_)));
}

#[test]
fn test_create_appends_and_checks_duplicates() {
    let list = rows(role::seed());
    let mut new_role: Role = (*list[0]).clone();
    new_role.id = 42;
    new_role.name = "Observer".to_string();

    let next = apply(&list, &Command::Create(new_role.clone())).unwrap();
    assert_eq!(next.len(), list.len() + 1);
    assert_eq!(*next[next.len() - 1], new_role);
    assert!(list.iter().zip(&next).all(|(a, b)| Arc::ptr_eq(a, b)));

    let err = apply(&next, &Command::Create(new_role)).unwrap_err();
    assert!(matches!(err, MutationError::DuplicateId(RecordId::Number(42))));
}

#[test]
fn test_validation_failure_aborts() {
    let list = rows(role::seed());
    let mut invalid: Role = (*list[0]).clone();
    invalid.id = 99;
    invalid.name = "  ".to_string();

    let err = apply(&list, &Command::Create(invalid)).unwrap_err();
    assert!(matches!(err, MutationError::Validation(_)));

    let err = apply(
        &list,
        &Command::Update {
            id: RecordId::Number(1),
            patch: patch(json!({ "permissions": [] })),
        },
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "A role needs at least one permission");
}

#[test]
fn test_update_merges_patch() {
    let list = rows(role::seed());
    let next = apply(
        &list,
        &Command::Update {
            id: RecordId::Number(3),
            patch: patch(json!({ "user_count": 9, "description": "Invoices only" })),
        },
    )
    .unwrap();

    let updated = next.iter().find(|r| r.id == 3).unwrap();
    assert_eq!(updated.user_count, 9);
    assert_eq!(updated.description, "Invoices only");
    assert_eq!(updated.name, "Billing Manager");
    assert!(Arc::ptr_eq(&list[0], &next[0]));
}

#[test]
fn test_update_rejects_bad_patches() {
    let list = rows(role::seed());
    let id = RecordId::Number(3);

    let unknown = apply(&list, &Command::Update { id: id.clone(), patch: patch(json!({ "color": "red" })) });
    assert!(matches!(unknown, Err(MutationError::UnknownField(_))));

    let renumbered = apply(&list, &Command::Update { id: id.clone(), patch: patch(json!({ "id": 100 })) });
    assert!(matches!(renumbered, Err(MutationError::IdChanged)));

    let wrong_type = apply(&list, &Command::Update { id, patch: patch(json!({ "user_count": "many" })) });
    assert!(matches!(wrong_type, Err(MutationError::Patch(_))));

    let missing = apply(&list, &Command::Update { id: RecordId::Number(77), patch: Patch::new() });
    assert!(matches!(missing, Err(MutationError::NotFound(_))));
}

#[test]
fn test_delete_removes_only_target() {
    let list = rows(role::seed());
    let next = apply(&list, &Command::Delete(RecordId::Number(2))).unwrap();
    assert_eq!(next.len(), list.len() - 1);
    assert!(next.iter().all(|r| r.id != 2));

    let err = apply(&next, &Command::Delete(RecordId::Number(2))).unwrap_err();
    assert!(matches!(err, MutationError::NotFound(_)));
}

#[test]
fn test_mutator_logs_applied_commands_only() {
    let mut mutator: OptimisticMutator<Integration> = OptimisticMutator::new();
    let list = rows(integration::seed());

    let list = mutator.toggle(&list, RecordId::from("slack"), "enabled").unwrap();
    let list = mutator.remove(&list, RecordId::from("gdrive")).unwrap();
    assert!(mutator.remove(&list, RecordId::from("gdrive")).is_err());

    let verbs: Vec<&str> = mutator.pending().iter().map(|e| e.command.verb()).collect();
    assert_eq!(verbs, vec!["toggled", "deleted"]);

    let drained = mutator.drain();
    assert_eq!(drained.len(), 2);
    assert!(mutator.pending().is_empty());
    assert_eq!(drained[1].command.target(), RecordId::from("gdrive"));
}

#[test]
fn test_fresh_ids() {
    let roles = rows(role::seed());
    assert_eq!(fresh_id(&roles), RecordId::Number(8));

    let empty: Vec<Arc<Role>> = Vec::new();
    assert_eq!(fresh_id(&empty), RecordId::Number(1));

    let integrations = rows(integration::seed());
    assert!(matches!(fresh_id(&integrations), RecordId::Text(_)));
}

#[test]
fn test_fresh_id_past_largest_integer() {
    let mut last = role::seed().remove(0);
    last.id = i64::MAX;
    let roles = rows(vec![last]);
    assert!(matches!(fresh_id(&roles), RecordId::Text(_)));
}

#[test]
fn test_duplicate_copies_fields_under_new_id() {
    let original = role::seed().remove(1);
    let copy = duplicate(&original, &RecordId::Number(8)).unwrap();
    assert_eq!(copy.id, 8);
    assert_eq!(copy.name, original.name);
    assert_eq!(copy.permissions, original.permissions);
}

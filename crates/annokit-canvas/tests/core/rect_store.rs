use annokit_canvas::{RectPatch, RectStore, Rectangle};
use proptest::prelude::*;

fn filled(count: usize) -> RectStore {
    (0..count)
        .map(|i| {
            let offset = i as f64 * 12.0;
            Rectangle::new(offset, offset * 0.5, offset + 30.0, offset + 20.0)
        })
        .collect()
}

proptest! {
    #[test]
    fn delete_leaves_others_unchanged(count in 1usize..20, pick in 0usize..20) {
        let mut store = filled(count);
        let ids = store.ids();
        let victim = ids[pick % count];
        let before = store.clone();

        prop_assert!(store.remove(victim).is_some());
        prop_assert_eq!(store.len(), count - 1);
        for &id in ids.iter().filter(|&&id| id != victim) {
            prop_assert_eq!(store.get(id), before.get(id));
        }
    }

    #[test]
    fn rename_keeps_geometry_and_visibility(name in "[a-z]{0,12}", hidden in any::<bool>()) {
        let mut store = filled(3);
        let id = store.ids()[1];
        store.update(id, &RectPatch::hide(hidden));
        let before = store.get(id).cloned();

        store.rename(id, name.clone());
        let after = store.get(id).cloned();
        prop_assert_eq!(after.as_ref().map(Rectangle::corners), before.as_ref().map(Rectangle::corners));
        prop_assert_eq!(after.as_ref().map(|r| r.hide), Some(hidden));
        prop_assert_eq!(after.and_then(|r| r.name), Some(name));
    }
}

#[test]
fn test_hide_toggle_keeps_geometry_and_name() {
    let mut store = filled(2);
    let id = store.ids()[0];
    store.rename(id, "person");
    let before = store.get(id).cloned().expect("exists");

    store.toggle_hidden(id);
    let after = store.get(id).cloned().expect("exists");
    assert_eq!(after.corners(), before.corners());
    assert_eq!(after.name, before.name);
    assert!(after.hide);
}

#[test]
fn test_update_after_delete_hits_right_rectangle() {
    let mut store = filled(3);
    let ids = store.ids();
    store.remove(ids[0]);

    store.rename(ids[2], "last");
    assert_eq!(store.label(ids[1]).as_deref(), Some("Selection-1"));
    assert_eq!(store.label(ids[2]).as_deref(), Some("last"));
}

use crate::*;

use alloc::vec;
use alloc::vec::Vec;

use item_animator::{ItemAnimatorOptions, ItemVisual, KindCounts};

fn controller() -> Controller<u64> {
    Controller::new(ItemAnimatorOptions::new().with_duration(100))
}

fn column(keys: &[u64]) -> Vec<Placement<u64>> {
    keys.iter()
        .enumerate()
        .map(|(i, &k)| Placement::new(k, 0, i as i32 * 10))
        .collect()
}

#[test]
fn apply_layout_classifies_adds_removes_and_moves() {
    let mut c = controller();
    // 1 2 3 -> 3 1 4
    let requested = c.apply_layout(&column(&[1, 2, 3]), &column(&[3, 1, 4]), &[]);
    assert_eq!(
        requested,
        KindCounts {
            adds: 1,
            removes: 1,
            moves: 2,
            changes: 0,
        }
    );
    assert!(!c.is_settled());

    // Key 3 moved up from y = 20 to y = 0, so it starts 20 below its new slot.
    assert_eq!(c.visual(&3).offset_y, 20.0);
    assert_eq!(c.visual(&1).offset_y, -10.0);
    assert_eq!(c.visual(&4).opacity, 0.0);

    c.run_pending(0);
    let mut now = 0;
    while c.tick(now) {
        now += 16;
    }
    assert!(c.is_settled());
    for key in [1, 3, 4] {
        assert_eq!(c.visual(&key), ItemVisual::RESTING);
    }
    // The removed row stays invisible until it is handed back for reuse.
    assert_eq!(c.visual(&2), ItemVisual::HIDDEN);
    assert_eq!(c.take_recyclable(), vec![2]);
    assert_eq!(c.visual(&2), ItemVisual::RESTING);
    assert!(c.take_recyclable().is_empty());
}

#[test]
fn apply_layout_without_differences_requests_nothing() {
    let mut c = controller();
    let layout = column(&[1, 2, 3]);
    assert!(c.apply_layout(&layout, &layout, &[]).is_empty());
    assert!(c.is_settled());
    assert!(!c.tick(0));
}

#[test]
fn changed_items_cross_fade_and_recycle_the_old_handle() {
    let mut c = controller();
    let pre = column(&[1, 2]);
    let post = vec![Placement::new(1, 0, 0), Placement::new(9, 0, 10)];
    let requested = c.apply_layout(
        &pre,
        &post,
        &[ChangedItem {
            old: Some(2),
            new: Some(9),
        }],
    );
    assert_eq!(requested.changes, 1);
    assert_eq!(requested.removes, 0);
    assert_eq!(requested.adds, 0);
    assert_eq!(c.visual(&9).opacity, 0.0);

    c.run_pending(0);
    c.tick(50);
    assert!(c.visual(&2).opacity < 1.0);
    assert!(c.visual(&9).opacity > 0.0);
    assert!(!c.tick(100));

    assert!(c.is_settled());
    assert_eq!(c.visual(&2), ItemVisual::HIDDEN);
    assert_eq!(c.take_recyclable(), vec![2]);
}

#[test]
fn declined_change_still_recycles_the_old_handle() {
    let mut c = controller();
    let pre = column(&[1, 2]);
    let post = vec![Placement::new(1, 0, 0), Placement::new(9, 0, 10)];
    let change = [ChangedItem {
        old: Some(2),
        new: Some(9),
    }];
    assert_eq!(c.apply_layout(&pre, &post, &change).changes, 1);

    // The same pair again is declined; handle 2 is still fading out, so it is not handed back yet.
    assert_eq!(c.apply_layout(&pre, &post, &change).changes, 0);
    assert!(c.take_recyclable().is_empty());

    c.run_pending(0);
    assert!(!c.tick(100));
    assert_eq!(c.take_recyclable(), vec![2]);
    assert!(c.take_recyclable().is_empty());
}

#[test]
fn re_laid_out_handles_are_not_recyclable() {
    let mut c = controller();
    c.apply_layout(&column(&[1, 2]), &column(&[1]), &[]);
    c.run_pending(0);
    c.tick(10);

    // Key 2 comes back before its removal finished: the removal is finalized, then it fades in.
    c.apply_layout(&column(&[1]), &column(&[1, 2]), &[]);
    assert!(c.take_recyclable().is_empty());
    assert_eq!(c.visual(&2).opacity, 0.0);

    c.run_pending(20);
    assert!(!c.tick(200));
    assert_eq!(c.visual(&2), ItemVisual::RESTING);
}

#[test]
fn teardown_finalizes_everything() {
    let mut c = controller();
    c.apply_layout(&column(&[1, 2, 3]), &column(&[3, 4]), &[]);
    c.run_pending(0);
    c.tick(10);
    c.teardown();

    assert!(c.is_settled());
    assert!(!c.animator().is_running());
    let mut recycled = c.take_recyclable();
    recycled.sort_unstable();
    assert_eq!(recycled, vec![1, 2]);
    for key in [1, 2, 3, 4] {
        assert_eq!(c.visual(&key), ItemVisual::RESTING);
    }
}

#[test]
fn placeholders_report_rows_for_absent_and_empty_data() {
    let p = Placeholders::default();
    let items = [1, 2, 3];

    assert_eq!(p.item_count::<i32>(None), 1);
    assert_eq!(p.item_count::<i32>(Some(&[])), 1);
    assert_eq!(p.item_count(Some(&items[..])), 3);

    assert_eq!(p.view_type::<i32>(None), ViewType::Loading);
    assert_eq!(p.view_type::<i32>(Some(&[])), ViewType::Empty);
    assert_eq!(p.view_type(Some(&items[..])), ViewType::Item);

    let none = Placeholders::NONE;
    assert_eq!(none.item_count::<i32>(None), 0);
    assert_eq!(none.item_count::<i32>(Some(&[])), 0);

    let loading_only = Placeholders::new(true, false);
    assert_eq!(loading_only.diff_list_size::<i32>(None), 1);
    assert_eq!(loading_only.diff_list_size::<i32>(Some(&[])), 0);
    assert_eq!(p.diff_list_size::<i32>(Some(&[])), 1);
    assert_eq!(p.diff_list_size(Some(&items[..])), 3);
}

#[test]
fn placeholder_rows_never_match_items() {
    let old = [1, 2];
    let new = [2, 1];
    assert!(Placeholders::items_same(Some(&old[..]), Some(&new[..]), 0, 1));
    assert!(!Placeholders::items_same(Some(&old[..]), Some(&new[..]), 0, 0));
    assert!(!Placeholders::items_same(None, Some(&new[..]), 0, 0));
    assert!(!Placeholders::items_same(Some(&old[..]), Some(&[][..]), 0, 0));
    assert!(!Placeholders::items_same(Some(&old[..]), Some(&new[..]), 2, 0));
}

#[test]
fn diff_result_replays_updates_in_order() {
    let updates = vec![
        ListUpdate::Removed {
            position: 0,
            count: 1,
        },
        ListUpdate::Inserted {
            position: 2,
            count: 2,
        },
        ListUpdate::Moved { from: 1, to: 0 },
        ListUpdate::Changed {
            position: 1,
            count: 1,
            payload: Some("title"),
        },
    ];
    let result = DiffResult::new(vec!['b', 'a', 'x', 'y'], updates.clone());
    assert!(!result.is_unchanged());
    assert_eq!(result.data(), &vec!['b', 'a', 'x', 'y']);

    let mut collected: Vec<ListUpdate<&str>> = Vec::new();
    result.dispatch_updates_to(&mut collected);
    assert_eq!(collected, updates);
    assert_eq!(result.updates(), &updates[..]);
    assert_eq!(result.into_data().len(), 4);
}

#[test]
fn touch_builder_enables_only_requested_directions() {
    let helper = TouchHelperBuilder::new().drag(true, false).build();
    assert!(helper.is_long_press_drag_enabled());
    assert!(!helper.is_swipe_enabled());
    assert!(helper.flags().drag_up && !helper.flags().drag_down);

    let helper = TouchHelper::builder().swipe_both().build();
    assert!(!helper.is_long_press_drag_enabled());
    assert!(helper.is_swipe_enabled());

    let helper = TouchHelper::builder().drag_both().swipe(false, true).build();
    assert_eq!(
        helper.flags(),
        MovementFlags {
            drag_up: true,
            drag_down: true,
            swipe_start: false,
            swipe_end: true,
        }
    );

    assert_eq!(TouchHelper::default().flags(), MovementFlags::ALL);
    assert!(!TouchHelper::simple(false, true).flags().can_swipe());
}

#[test]
fn touch_helper_routes_gestures_to_the_adapter() {
    let mut items = vec!['a', 'b', 'c'];
    let helper = TouchHelper::default();

    assert!(helper.on_move(&mut items, 0, 2));
    assert_eq!(items, vec!['b', 'c', 'a']);
    helper.on_swiped(&mut items, 1);
    assert_eq!(items, vec!['b', 'a']);

    // Out of range: the adapter refuses and the helper reports it.
    assert!(!helper.on_move(&mut items, 0, 5));
    assert_eq!(items, vec!['b', 'a']);

    let locked = TouchHelperBuilder::new().build();
    assert!(!locked.on_move(&mut items, 0, 1));
    locked.on_swiped(&mut items, 0);
    assert_eq!(items, vec!['b', 'a']);
}

#[test]
fn span_count_fits_whole_columns() {
    assert_eq!(span_count(1000, 300), 3);
    assert_eq!(span_count(899, 300), 2);
    assert_eq!(span_count(100, 300), 1);
    assert_eq!(span_count(0, 300), 1);
    assert_eq!(span_count(1000, 0), 1);
}

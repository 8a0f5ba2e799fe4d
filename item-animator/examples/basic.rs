use item_animator::{AnimatorEvent, EventLog, ItemAnimator, ItemAnimatorOptions};

fn main() {
    // Example: a list removes one row, the row below slides up, and a new row fades in.
    //
    // An adapter would:
    // - issue request_* calls while re-laying out after a dataset change
    // - call run_pending_animations(now_ms) once the new layout is committed
    // - call tick(now_ms) each frame and draw every row with its visual()
    let mut a = ItemAnimator::with_listener(
        ItemAnimatorOptions::new().with_duration(120),
        EventLog::new(),
    );

    a.request_remove(1u32);
    a.request_move(2, 0, 40, 0, 0);
    a.request_add(3);
    a.run_pending_animations(0);

    let mut now_ms = 0u64;
    while a.tick(now_ms) {
        if now_ms % 48 == 0 {
            println!(
                "t={now_ms} removed={:?} moved={:?} added={:?}",
                a.visual(&1),
                a.visual(&2),
                a.visual(&3)
            );
        }
        now_ms += 16;
    }

    for event in a.listener().events() {
        match event {
            AnimatorEvent::AnimationsFinished => println!("all finished at t={now_ms}"),
            other => println!("{other:?}"),
        }
    }
}

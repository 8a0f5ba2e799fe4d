use item_animator::ItemAnimatorOptions;
use item_animator_adapter::{ChangedItem, Controller, Placement};

fn column(keys: &[u64]) -> Vec<Placement<u64>> {
    keys.iter()
        .enumerate()
        .map(|(i, &k)| Placement::new(k, 0, i as i32 * 48))
        .collect()
}

fn main() {
    // Example: the controller derives requests from two layout passes, then hands removed
    // handles back for reuse once their exit animation is done.
    let mut c = Controller::new(ItemAnimatorOptions::new().with_duration(150));

    // Rows 1..=4; row 2 is deleted, row 4 moves to the top, row 3 is rebound to handle 30.
    let pre = column(&[1, 2, 3, 4]);
    let post = column(&[4, 1, 30]);
    let requested = c.apply_layout(
        &pre,
        &post,
        &[ChangedItem {
            old: Some(3),
            new: Some(30),
        }],
    );
    println!("requested={requested:?}");

    c.run_pending(0);
    let mut now_ms = 0u64;
    while c.tick(now_ms) {
        if now_ms % 64 == 0 {
            println!(
                "t={now_ms} top={:?} recyclable_so_far={:?}",
                c.visual(&4),
                c.animator().listener().recyclable()
            );
        }
        now_ms += 16;
    }

    println!("settled={} recycle={:?}", c.is_settled(), c.take_recyclable());
}

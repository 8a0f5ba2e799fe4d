use item_animator::{Edge, ItemAnimator, ItemAnimatorOptions, SlideIn};

fn main() {
    // Example: staggered entrance of a freshly loaded page, each row sliding up from below.
    let mut a = ItemAnimator::new(
        ItemAnimatorOptions::new()
            .with_add_duration(200)
            .with_add_stagger(40)
            .with_style(SlideIn::new(Edge::Bottom, 32.0)),
    );

    for key in 0..5u32 {
        a.request_add(key);
    }
    a.run_pending_animations(0);

    let mut now_ms = 0u64;
    while a.tick(now_ms) {
        let rows: Vec<String> = (0..5u32)
            .map(|k| {
                let v = a.visual(&k);
                format!("{:>5.1}/{:.2}", v.offset_y, v.opacity)
            })
            .collect();
        println!("t={now_ms:>3} {}", rows.join("  "));
        now_ms += 40;
    }
}

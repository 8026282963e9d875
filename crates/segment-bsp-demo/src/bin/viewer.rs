use macroquad::prelude::*;
use segment_bsp::BspTree;
use segment_bsp_demo::{sample_segments, TreeNavigator, Viewport};

#[macroquad::main("Segment BSP Viewer")]
async fn main() {
    let segments = sample_segments();
    let input = segments.len();
    let tree = match BspTree::from_segments(segments) {
        Ok(tree) => tree,
        Err(err) => {
            eprintln!("failed to build BSP tree: {err}");
            return;
        }
    };
    println!(
        "BSP tree built: {} segments from {} inputs, depth {}",
        tree.segment_count(),
        input,
        tree.depth()
    );

    let mut navigator = TreeNavigator::new();

    loop {
        navigator.update(&tree);

        clear_background(Color::from_rgba(20, 20, 30, 255));

        let viewport = Viewport::fit(
            &tree.collect_segments(),
            vec2(screen_width(), screen_height()),
            60.0,
        );
        navigator.render(&tree, &viewport);

        draw_text(
            &format!("Segment BSP - Total: {} segments", tree.segment_count()),
            10.0,
            25.0,
            20.0,
            WHITE,
        );
        draw_text(
            &format!("Tree depth: {} | Original: {}", tree.depth(), input),
            10.0,
            45.0,
            18.0,
            GRAY,
        );

        navigator.draw_ui(&tree, 70.0);

        next_frame().await
    }
}

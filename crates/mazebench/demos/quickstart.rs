//! Build a generated maze, roll a ball along its solution and score a
//! brick stack.
//!
//! Run with `RUST_LOG=debug cargo run --example quickstart` to see the
//! build log.

use mazebench::prelude::*;
use mazebench_test_utils::MockScene;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let task = MazeTask::generated(11, 11, 7, TaskConfig::tabletop())?;
    println!("{}", task.layout().render());
    println!(
        "solution: {} cells, {:.3} m; geometry: {} primitives",
        task.grid_path().len(),
        task.path().total_length(),
        task.geometry().len(),
    );
    for region in task.regions().iter() {
        let (x0, y0, x1, y1) = region.ranges();
        println!("{:<20} ({x0:+.3}, {y0:+.3}) .. ({x1:+.3}, {y1:+.3})", region.name);
    }

    // Walk the ball along the waypoints in world coordinates.
    let offset = task.config().progress.maze_offset;
    let policy = task.push_policy();
    let mut episode = task.new_episode();
    for w in task.path().points() {
        let ball = *w + offset;
        let reward = episode.step(ball);
        let action = policy.to_osc_action(ball, ball);
        println!("step {:>3}: reward {reward:.3}, action {:?}", episode.steps(), &action[..3]);
    }

    // Hold a three-brick stack still until the detector fires.
    let mut scene = MockScene::new();
    scene.set_body("brick_cube_3_main", Vec3::new(0.0, 0.0, 0.85));
    scene.set_body("brick_cube_2_main", Vec3::new(0.0, 0.0, 0.9));
    scene.set_body("brick_cube_1_main", Vec3::new(0.0, 0.0, 0.95));
    scene.add_contact("brick_cube_1_col", "brick_cube_2_col");
    scene.add_contact("brick_cube_2_col", "brick_cube_3_col");
    let mut held = 0;
    while !episode.evaluate_success(&scene)? {
        held += 1;
    }
    println!("stack succeeded after {} passing steps", held + 1);

    let out = std::env::temp_dir().join("mazebench_quickstart.mzwp");
    task.save_path_artifact(&out)?;
    println!("wrote path artifact to {}", out.display());
    Ok(())
}

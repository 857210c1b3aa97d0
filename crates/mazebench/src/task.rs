//! A fully built maze task and its per-episode state.
//!
//! [`MazeTask`] is constructed in one step from a layout and a
//! [`TaskConfig`]: parse, solve, lift the path, emit geometry and compute
//! regions. Any failure aborts the whole build, so a task that exists is
//! always internally consistent. To change the maze, build a new task.
//!
//! Run-time state lives in [`Episode`], which borrows the task and owns
//! the success hold counter.

use std::path::Path;

use mazebench_artifact::{save_path, PathArtifact};
use mazebench_core::{Cell, SceneQuery, Vec3};
use mazebench_eval::{
    EvalError, HoldState, ProgressTracker, PushPolicy, SuccessDetector, WaypointPath,
};
use mazebench_grid::{
    generate_layout, load_definition, parse_definition, solve, CoordinateMapper, Layout,
};
use mazebench_scene::{agent_body, emit_maze, task_regions, Mjcf, SceneGeometry, TaskRegions};

use crate::config::TaskConfig;
use crate::error::BuildError;

/// Height above the first waypoint at which the ball is spawned.
pub const SPAWN_CLEARANCE: f64 = 0.01;

/// Everything derived from one maze layout, built atomically.
#[derive(Debug)]
pub struct MazeTask {
    config: TaskConfig,
    layout: Layout,
    mapper: CoordinateMapper,
    cells: Vec<Cell>,
    tracker: ProgressTracker,
    policy: PushPolicy,
    detector: SuccessDetector,
    geometry: SceneGeometry,
    agent: SceneGeometry,
    regions: TaskRegions,
}

impl MazeTask {
    /// Build a task by solving `layout`.
    pub fn build(layout: Layout, config: TaskConfig) -> Result<Self, BuildError> {
        config.validate()?;
        let mapper = CoordinateMapper::for_layout(&layout, &config.maze)?;
        let cells = solve(&layout)?;
        let path = WaypointPath::from_cells(&cells, &mapper, config.maze.rest_elevation())?;
        Self::assemble(layout, mapper, cells, path, config)
    }

    /// Parse a definition and build from it.
    pub fn from_definition(text: &str, config: TaskConfig) -> Result<Self, BuildError> {
        Self::build(parse_definition(text)?, config)
    }

    /// Read a definition file and build from it.
    pub fn load(path: impl AsRef<Path>, config: TaskConfig) -> Result<Self, BuildError> {
        Self::build(load_definition(path)?, config)
    }

    /// Generate a random perfect maze and build from it.
    pub fn generated(
        rows: u32,
        cols: u32,
        seed: u64,
        config: TaskConfig,
    ) -> Result<Self, BuildError> {
        Self::build(generate_layout(rows, cols, seed)?, config)
    }

    /// Build from waypoints computed offline instead of solving again.
    ///
    /// Every waypoint must map back to an open cell of `layout`.
    pub fn with_artifact(
        layout: Layout,
        artifact: PathArtifact,
        config: TaskConfig,
    ) -> Result<Self, BuildError> {
        config.validate()?;
        let mapper = CoordinateMapper::for_layout(&layout, &config.maze)?;
        let rest_z = config.maze.rest_elevation();
        if artifact.rest_z() != rest_z {
            log::warn!(
                "path artifact rest_z {} differs from agent rest elevation {rest_z}",
                artifact.rest_z()
            );
        }
        let mut cells = Vec::with_capacity(artifact.len());
        for (index, p) in artifact.points().iter().enumerate() {
            match mapper.to_cell(p.x, p.y) {
                Some(cell) if layout.is_open(cell) => cells.push(cell),
                _ => return Err(BuildError::ArtifactMismatch { index }),
            }
        }
        let path = WaypointPath::new(artifact.into_points())?;
        Self::assemble(layout, mapper, cells, path, config)
    }

    fn assemble(
        layout: Layout,
        mapper: CoordinateMapper,
        cells: Vec<Cell>,
        path: WaypointPath,
        config: TaskConfig,
    ) -> Result<Self, BuildError> {
        let policy = PushPolicy::new(&path, config.push.clone())?;
        let tracker = ProgressTracker::new(path, config.progress.clone())?;
        let detector = SuccessDetector::new(config.success.clone())?;
        let geometry = emit_maze(&layout, &mapper, &config.maze, &config.geometry);
        let agent = agent_body(&config.maze, &config.geometry.palette);
        let regions = task_regions(&layout, &mapper, &config.regions);

        log::info!(
            "built {}x{} maze: {} path cells, path length {:.4}, {} primitives",
            layout.rows(),
            layout.cols(),
            cells.len(),
            tracker.path().total_length(),
            geometry.len(),
        );

        Ok(Self {
            config,
            layout,
            mapper,
            cells,
            tracker,
            policy,
            detector,
            geometry,
            agent,
            regions,
        })
    }

    // ── Build products ──────────────────────────────────────────────

    /// The configuration the task was built with.
    pub fn config(&self) -> &TaskConfig {
        &self.config
    }

    /// The maze layout.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The grid-to-world mapping shared by every product.
    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    /// Grid cells of the shortest path, start first.
    pub fn grid_path(&self) -> &[Cell] {
        &self.cells
    }

    /// Waypoints in maze-local coordinates.
    pub fn path(&self) -> &WaypointPath {
        self.tracker.path()
    }

    /// Static maze geometry.
    pub fn geometry(&self) -> &SceneGeometry {
        &self.geometry
    }

    /// The ball agent's geometry.
    pub fn agent_geometry(&self) -> &SceneGeometry {
        &self.agent
    }

    /// Placement regions.
    pub fn regions(&self) -> &TaskRegions {
        &self.regions
    }

    /// The maze geometry rendered as an MJCF document.
    pub fn mjcf(&self) -> String {
        Mjcf(&self.geometry).to_string()
    }

    /// The scripted demonstration controller for this maze.
    pub fn push_policy(&self) -> &PushPolicy {
        &self.policy
    }

    /// World position at which the ball is spawned.
    pub fn spawn_position(&self) -> Vec3 {
        let lift = Vec3::new(0.0, 0.0, SPAWN_CLEARANCE);
        self.path().first() + self.config.progress.maze_offset + lift
    }

    /// The waypoints packaged for hand-off to a run-time process.
    pub fn path_artifact(&self) -> Result<PathArtifact, BuildError> {
        let points = self.path().points().iter().copied();
        Ok(PathArtifact::new(points, self.config.maze.rest_elevation())?)
    }

    /// Write [`Self::path_artifact`] to `path`.
    pub fn save_path_artifact(&self, path: impl AsRef<Path>) -> Result<(), BuildError> {
        save_path(path, &self.path_artifact()?)?;
        Ok(())
    }

    // ── Run-time queries ────────────────────────────────────────────

    /// Fraction of the path covered by a ball at world position `ball`.
    pub fn progress(&self, ball: Vec3) -> f64 {
        self.tracker.progress(ball)
    }

    /// Dense reward: equal to [`Self::progress`].
    pub fn reward(&self, ball: Vec3) -> f64 {
        self.progress(ball)
    }

    /// Start a fresh episode with a zeroed hold counter.
    pub fn new_episode(&self) -> Episode<'_> {
        Episode {
            task: self,
            steps: 0,
            hold: HoldState::new(),
            best_progress: 0.0,
        }
    }
}

/// Per-episode state: step count, best progress and the success hold
/// counter.
///
/// One episode must never be shared between concurrently running
/// simulations; create one per rollout with [`MazeTask::new_episode`].
#[derive(Debug)]
pub struct Episode<'t> {
    task: &'t MazeTask,
    steps: u64,
    hold: HoldState,
    best_progress: f64,
}

impl Episode<'_> {
    /// Record one simulated step with the ball at `ball` and return its
    /// reward.
    pub fn step(&mut self, ball: Vec3) -> f64 {
        self.steps += 1;
        let p = self.task.progress(ball);
        if p > self.best_progress {
            self.best_progress = p;
        }
        log::trace!("step {}: progress {p:.4}", self.steps);
        p
    }

    /// Evaluate the debounced success signal against the current scene.
    ///
    /// Once success has fired the scene is no longer queried and every
    /// later call returns `Ok(true)` until [`Self::reset`].
    pub fn evaluate_success(&mut self, scene: &dyn SceneQuery) -> Result<bool, EvalError> {
        if self.hold.succeeded() {
            return Ok(true);
        }
        self.task.detector.evaluate(scene, &mut self.hold)
    }

    /// Steps recorded so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Highest progress seen this episode.
    pub fn best_progress(&self) -> f64 {
        self.best_progress
    }

    /// The success hold state.
    pub fn hold(&self) -> &HoldState {
        &self.hold
    }

    /// Whether success has fired this episode.
    pub fn succeeded(&self) -> bool {
        self.hold.succeeded()
    }

    /// Start over: zero the step count, progress and hold counter.
    pub fn reset(&mut self) {
        self.steps = 0;
        self.best_progress = 0.0;
        self.hold.reset();
    }
}

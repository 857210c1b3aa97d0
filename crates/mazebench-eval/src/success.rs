//! Stability-gated success detection.
//!
//! A single simulated step can satisfy every geometric condition by
//! accident: a brick bouncing through the right pose, or one still pinched
//! by the gripper. The detector therefore only reports success after the
//! instantaneous checks have passed for `hold_steps` consecutive steps.
//!
//! The debounce counter lives in a [`HoldState`] owned by the episode, not
//! in the detector, so one detector can judge any number of episodes.

use crate::error::EvalError;
use mazebench_core::config::require_positive;
use mazebench_core::{ConfigError, SceneQuery, Vec3};
use serde::{Deserialize, Serialize};
use std::fmt;

// ── Criteria ───────────────────────────────────────────────────────

/// One object in the required vertical ordering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackMember {
    /// Body whose position and velocity are checked.
    pub body: String,
    /// Prefix shared by the names of every geom on this body.
    pub geom_prefix: String,
}

impl StackMember {
    /// Create a member.
    pub fn new(body: impl Into<String>, geom_prefix: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            geom_prefix: geom_prefix.into(),
        }
    }
}

/// Thresholds and names for the success checks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuccessCriteria {
    /// Required ordering, top first. Default: three bricks.
    pub members: Vec<StackMember>,
    /// Maximum horizontal offset between adjacent members. Default: 0.03.
    pub xy_tol: f64,
    /// Minimum height of a member above the one below. Default: 0.035.
    pub min_z_gap: f64,
    /// Maximum height of a member above the one below. Default: 0.08.
    pub max_z_gap: f64,
    /// Maximum linear speed of every member except the bottom one.
    /// Default: 0.03.
    pub vel_tol: f64,
    /// Consecutive passing steps before success fires. Default: 10.
    pub hold_steps: u32,
    /// Geom prefix of the end effector that must not touch the top
    /// member. Default: `"gripper0_"`.
    pub end_effector_prefix: String,
}

impl Default for SuccessCriteria {
    fn default() -> Self {
        Self::three_brick_stack()
    }
}

impl SuccessCriteria {
    /// `brick_cube_1` on `brick_cube_2` on `brick_cube_3`.
    pub fn three_brick_stack() -> Self {
        Self {
            members: (1..=3)
                .map(|i| {
                    StackMember::new(format!("brick_cube_{i}_main"), format!("brick_cube_{i}_"))
                })
                .collect(),
            xy_tol: 0.03,
            min_z_gap: 0.035,
            max_z_gap: 0.08,
            vel_tol: 0.03,
            hold_steps: 10,
            end_effector_prefix: "gripper0_".into(),
        }
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.members.len() < 2 {
            return Err(ConfigError::Inconsistent {
                reason: format!(
                    "a stack needs at least 2 members, got {}",
                    self.members.len()
                ),
            });
        }
        require_positive("xy_tol", self.xy_tol)?;
        require_positive("min_z_gap", self.min_z_gap)?;
        require_positive("max_z_gap", self.max_z_gap)?;
        require_positive("vel_tol", self.vel_tol)?;
        if self.min_z_gap > self.max_z_gap {
            return Err(ConfigError::Inconsistent {
                reason: format!(
                    "min_z_gap ({}) exceeds max_z_gap ({})",
                    self.min_z_gap, self.max_z_gap
                ),
            });
        }
        if self.hold_steps == 0 {
            return Err(ConfigError::InvalidValue {
                name: "hold_steps",
                value: 0.0,
                expected: "at least 1",
            });
        }
        Ok(())
    }
}

// ── Verdicts ───────────────────────────────────────────────────────

/// The first condition that failed on a step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum FailReason {
    /// Adjacent members are too far apart horizontally.
    Misaligned {
        /// Upper member's body.
        upper: String,
        /// Lower member's body.
        lower: String,
        /// Horizontal offset.
        offset: f64,
    },
    /// Height difference between adjacent members is out of range.
    GapOutOfRange {
        /// Upper member's body.
        upper: String,
        /// Lower member's body.
        lower: String,
        /// Upper height minus lower height.
        gap: f64,
    },
    /// Adjacent members are not touching.
    NoContact {
        /// Upper member's body.
        upper: String,
        /// Lower member's body.
        lower: String,
    },
    /// The end effector is touching the top member.
    EndEffectorContact,
    /// A member is moving too fast.
    Moving {
        /// The moving body.
        body: String,
        /// Its linear speed.
        speed: f64,
    },
}

impl fmt::Display for FailReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Misaligned {
                upper,
                lower,
                offset,
            } => write!(f, "{upper} is {offset:.4} off {lower} horizontally"),
            Self::GapOutOfRange { upper, lower, gap } => {
                write!(f, "{upper} sits {gap:.4} above {lower}")
            }
            Self::NoContact { upper, lower } => write!(f, "{upper} is not touching {lower}"),
            Self::EndEffectorContact => write!(f, "end effector is touching the top member"),
            Self::Moving { body, speed } => write!(f, "{body} is moving at {speed:.4}"),
        }
    }
}

/// Outcome of the instantaneous checks on one step.
#[derive(Clone, Debug, PartialEq)]
pub enum Verdict {
    /// Every condition holds.
    Pass,
    /// The first failing condition.
    Fail(FailReason),
}

impl Verdict {
    /// Whether this is [`Verdict::Pass`].
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }
}

// ── HoldState ──────────────────────────────────────────────────────

/// Per-episode debounce state.
///
/// Create one at every episode start; never share one between episodes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HoldState {
    counter: u32,
    last_fail: Option<FailReason>,
    succeeded: bool,
}

impl HoldState {
    /// Fresh state for a new episode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consecutive passing steps so far.
    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// Why the most recent failing step failed.
    pub fn last_fail(&self) -> Option<&FailReason> {
        self.last_fail.as_ref()
    }

    /// Whether success has fired this episode. Never reverts.
    pub fn succeeded(&self) -> bool {
        self.succeeded
    }

    /// Back to the episode-start state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// ── SuccessDetector ────────────────────────────────────────────────

/// Debounced multi-condition success detector.
#[derive(Clone, Debug)]
pub struct SuccessDetector {
    criteria: SuccessCriteria,
}

impl SuccessDetector {
    /// Create a detector after validating `criteria`.
    pub fn new(criteria: SuccessCriteria) -> Result<Self, ConfigError> {
        criteria.validate()?;
        Ok(Self { criteria })
    }

    /// The criteria this detector applies.
    pub fn criteria(&self) -> &SuccessCriteria {
        &self.criteria
    }

    /// Run the checks for one step without touching any hold state.
    ///
    /// Checks run in order (spatial relation of every adjacent pair,
    /// contact of every adjacent pair, end effector clear of the top
    /// member, speed) and stop at the first failure.
    pub fn instantaneous(&self, scene: &dyn SceneQuery) -> Result<Verdict, EvalError> {
        let members = &self.criteria.members;
        let positions = members
            .iter()
            .map(|m| position(scene, &m.body))
            .collect::<Result<Vec<_>, _>>()?;

        for (pair, pos) in members.windows(2).zip(positions.windows(2)) {
            let (upper, lower) = (&pair[0], &pair[1]);
            let offset = pos[0].distance_xy(pos[1]);
            if offset > self.criteria.xy_tol {
                return Ok(Verdict::Fail(FailReason::Misaligned {
                    upper: upper.body.clone(),
                    lower: lower.body.clone(),
                    offset,
                }));
            }
            let gap = pos[0].z - pos[1].z;
            if !(self.criteria.min_z_gap..=self.criteria.max_z_gap).contains(&gap) {
                return Ok(Verdict::Fail(FailReason::GapOutOfRange {
                    upper: upper.body.clone(),
                    lower: lower.body.clone(),
                    gap,
                }));
            }
        }

        for pair in members.windows(2) {
            if !scene.in_contact(&pair[0].geom_prefix, &pair[1].geom_prefix) {
                return Ok(Verdict::Fail(FailReason::NoContact {
                    upper: pair[0].body.clone(),
                    lower: pair[1].body.clone(),
                }));
            }
        }

        if scene.in_contact(&self.criteria.end_effector_prefix, &members[0].geom_prefix) {
            return Ok(Verdict::Fail(FailReason::EndEffectorContact));
        }

        for m in &members[..members.len() - 1] {
            let speed = scene
                .body_linear_velocity(&m.body)
                .ok_or_else(|| unknown(&m.body))?
                .length();
            if speed > self.criteria.vel_tol {
                return Ok(Verdict::Fail(FailReason::Moving {
                    body: m.body.clone(),
                    speed,
                }));
            }
        }

        Ok(Verdict::Pass)
    }

    /// Fold one step's verdict into `hold`. Returns the sticky episode
    /// success flag.
    pub fn observe(&self, hold: &mut HoldState, verdict: Verdict) -> bool {
        match verdict {
            Verdict::Pass => {
                hold.counter = hold.counter.saturating_add(1);
                if hold.counter >= self.criteria.hold_steps && !hold.succeeded {
                    log::trace!("success after {} stable steps", hold.counter);
                    hold.succeeded = true;
                }
            }
            Verdict::Fail(reason) => {
                if hold.counter > 0 {
                    log::trace!("hold reset after {} steps: {reason}", hold.counter);
                }
                hold.counter = 0;
                hold.last_fail = Some(reason);
            }
        }
        hold.succeeded
    }

    /// Check the scene and update `hold` in one call.
    pub fn evaluate(
        &self,
        scene: &dyn SceneQuery,
        hold: &mut HoldState,
    ) -> Result<bool, EvalError> {
        let verdict = self.instantaneous(scene)?;
        Ok(self.observe(hold, verdict))
    }
}

fn position(scene: &dyn SceneQuery, body: &str) -> Result<Vec3, EvalError> {
    scene.body_position(body).ok_or_else(|| unknown(body))
}

fn unknown(body: &str) -> EvalError {
    EvalError::UnknownBody {
        name: body.to_string(),
    }
}

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::runtime::VbaError;

/// Host stack one counted level may take in the worst case: a debug build recursing through
/// `eval_arg` into a procedure call and back.
pub const STACK_BYTES_PER_LEVEL: usize = 8 * 1024;

/// Thread stack the default limits are sized for. Rust gives spawned threads and the test
/// harness 2 MiB.
pub const DEFAULT_STACK_SIZE: usize = 2 * 1024 * 1024;

/// Resource limits for a single emulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmulationLimits {
    /// Maximum evaluation nesting. The governor trips at three quarters of this value, so a
    /// depth sized with [`EmulationLimits::with_stack_size`] leaves a quarter of the stack free.
    pub max_recursion_depth: usize,
    /// Wall-clock budget, measured from the moment the run's context is created.
    pub max_emulation_time: Option<Duration>,
}

impl Default for EmulationLimits {
    fn default() -> Self {
        Self {
            max_recursion_depth: DEFAULT_STACK_SIZE / STACK_BYTES_PER_LEVEL,
            max_emulation_time: None,
        }
    }
}

impl EmulationLimits {
    pub fn with_max_recursion_depth(mut self, depth: usize) -> Self {
        self.max_recursion_depth = depth;
        self
    }

    /// Size the depth limit for a thread with `bytes` of stack. Use this instead of a raw depth
    /// when running on a thread spawned with a larger stack.
    pub fn with_stack_size(mut self, bytes: usize) -> Self {
        self.max_recursion_depth = (bytes / STACK_BYTES_PER_LEVEL).max(1);
        self
    }

    pub fn with_max_emulation_time(mut self, time: Duration) -> Self {
        self.max_emulation_time = Some(time);
        self
    }
}

/// Recursion-depth and wall-clock guard consulted on every recursive evaluation step.
///
/// Depth is an explicit counter: each recursive entry point holds a [`DepthGuard`] for the
/// duration of its work.
#[derive(Debug)]
pub struct Governor {
    max_depth: usize,
    deadline: Option<Instant>,
    depth: Cell<usize>,
}

impl Governor {
    pub fn new(limits: EmulationLimits) -> Self {
        Self::with_deadline(
            limits.max_recursion_depth,
            limits.max_emulation_time.map(|t| Instant::now() + t),
        )
    }

    pub fn with_deadline(max_depth: usize, deadline: Option<Instant>) -> Self {
        Self {
            max_depth,
            deadline,
            depth: Cell::new(0),
        }
    }

    pub fn depth(&self) -> usize {
        self.depth.get()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Bump the depth counter until the returned guard is dropped.
    pub fn enter(self: &Rc<Self>) -> DepthGuard {
        self.depth.set(self.depth.get().saturating_add(1));
        DepthGuard {
            governor: Rc::clone(self),
        }
    }

    fn recursion_exceeded(&self) -> bool {
        // depth > 0.75 * max, without going through floats.
        self.depth.get().saturating_mul(4) > self.max_depth.saturating_mul(3)
    }

    fn time_exceeded(&self) -> bool {
        self.deadline.is_some_and(|deadline| Instant::now() > deadline)
    }

    /// Report whether a limit has been hit. With `fatal` set, a violation is returned as the
    /// corresponding terminating error instead.
    pub fn limits_exceeded(&self, fatal: bool) -> Result<bool, VbaError> {
        let recursion = self.recursion_exceeded();
        let time = self.time_exceeded();

        if recursion {
            log::error!(
                "call recursion depth approaching limit (depth={} max={})",
                self.depth.get(),
                self.max_depth
            );
            if fatal {
                return Err(VbaError::RecursionLimitExceeded);
            }
        }
        if time {
            log::error!("emulation time exceeded");
            if fatal {
                return Err(VbaError::TimeLimitExceeded);
            }
        }
        Ok(recursion || time)
    }

    /// Fatal check: `Ok(())` when within limits.
    pub fn check(&self) -> Result<(), VbaError> {
        self.limits_exceeded(true).map(|_| ())
    }
}

/// Decrements the governor's depth counter on drop.
#[derive(Debug)]
pub struct DepthGuard {
    governor: Rc<Governor>,
}

impl Drop for DepthGuard {
    fn drop(&mut self) {
        let depth = &self.governor.depth;
        depth.set(depth.get().saturating_sub(1));
    }
}

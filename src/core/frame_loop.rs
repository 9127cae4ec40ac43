use instant::{Duration, Instant};

use super::constants::STATS_REPORT_EVERY;

/// Request handle returned by the host's display-refresh API.
pub type FrameId = i32;

/// Host hook for display-refresh callbacks. Each request fires at most once.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> Option<FrameId>;
    fn cancel_frame(&mut self, id: FrameId);
}

/// Cancellable frame-driven loop.
///
/// The host calls [`RenderLoop::tick`] from its refresh callback; the loop
/// runs the frame body and asks for the next frame only while it is live.
pub struct RenderLoop<S> {
    scheduler: S,
    live: bool,
    pending: Option<FrameId>,
    stats: FrameStats,
}

impl<S: FrameScheduler> RenderLoop<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            live: false,
            pending: None,
            stats: FrameStats::new(),
        }
    }

    pub fn start(&mut self) {
        if self.live {
            return;
        }
        self.live = true;
        self.stats = FrameStats::new();
        self.pending = self.scheduler.request_frame();
    }

    /// Run one frame. Returns whether the loop is still live afterwards.
    pub fn tick(&mut self, body: impl FnOnce()) -> bool {
        self.pending = None;
        if !self.live {
            return false;
        }
        body();
        if let Some(fps) = self.stats.record(Instant::now()) {
            log::debug!("[frame] {:.1} fps over {} frames", fps, STATS_REPORT_EVERY);
        }
        if self.live {
            self.pending = self.scheduler.request_frame();
        }
        self.live
    }

    /// Stop scheduling and drop any outstanding request. Idempotent.
    pub fn cancel(&mut self) {
        self.live = false;
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel_frame(id);
        }
    }

    #[inline]
    pub fn is_live(&self) -> bool {
        self.live
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.stats.frames
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}

struct FrameStats {
    frames: u64,
    window_start: Option<Instant>,
}

impl FrameStats {
    fn new() -> Self {
        Self {
            frames: 0,
            window_start: None,
        }
    }

    fn record(&mut self, now: Instant) -> Option<f32> {
        self.frames += 1;
        let start = *self.window_start.get_or_insert(now);
        if self.frames % STATS_REPORT_EVERY != 0 {
            return None;
        }
        self.window_start = Some(now);
        let elapsed = now.duration_since(start).max(Duration::from_millis(1));
        Some(STATS_REPORT_EVERY as f32 / elapsed.as_secs_f32())
    }
}

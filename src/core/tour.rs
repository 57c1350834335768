//! Timed tour of the demo control panel
//!
//! The tour walks an unattended visitor through the product story:
//! Summary, a simulated canary, the Policy tab, then a simulated promotion,
//! and loops. Any interaction pauses it for a while; the most recent
//! interaction decides when it resumes.
//!
//! # Timers
//!
//! The orchestrator never touches a clock itself. It asks a [`TimerHost`]
//! to deliver a [`TourAction`] after a delay and keeps every handle it gets
//! back, so "cancel everything" is a drain of that list. The browser host
//! wraps `gloo_timers`; tests use a virtual clock.
//!
//! ```text
//!  Idle ──start──▶ Touring ──interaction──▶ Paused
//!   ▲                 │  ▲                    │
//!   │   reduced       │  └──────resume────────┘
//!   └─motion/shutdown─┘
//! ```

use super::panel::{CanaryPercent, PanelState, PanelTab, PolicyView, SdkLanguage};

/// How long an interaction suppresses the tour
pub const DEFAULT_PAUSE_MS: u32 = 15_000;

/// Extra wait after the last step before the tour loops
pub const LOOP_GAP_MS: u32 = 900;

/// Spacing between simulated canary ticks
pub const CANARY_TICK_MS: u32 = 320;

/// Side effect of a tour step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEffect {
    None,
    SimulateCanary,
    SimulatePromotion,
}

/// One entry of the tour script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TourStep {
    pub tab: PanelTab,
    pub effect: StepEffect,
    /// How long the step stays on screen before the next one
    pub dwell_ms: u32,
}

/// The fixed, cyclic tour
pub const TOUR_SCRIPT: [TourStep; 4] = [
    TourStep {
        tab: PanelTab::Summary,
        effect: StepEffect::None,
        dwell_ms: 4_200,
    },
    TourStep {
        tab: PanelTab::Sdk,
        effect: StepEffect::SimulateCanary,
        dwell_ms: 4_200,
    },
    TourStep {
        tab: PanelTab::Policy,
        effect: StepEffect::None,
        dwell_ms: 5_400,
    },
    TourStep {
        tab: PanelTab::Sdk,
        effect: StepEffect::SimulatePromotion,
        dwell_ms: 4_800,
    },
];

/// Offset of each step from the start of a tour generation
pub fn step_offsets() -> [u32; TOUR_SCRIPT.len()] {
    let mut offsets = [0; TOUR_SCRIPT.len()];
    let mut t = 0;
    for (i, step) in TOUR_SCRIPT.iter().enumerate() {
        offsets[i] = t;
        t += step.dwell_ms;
    }
    offsets
}

/// Delay from `start()` until the tour schedules itself again
pub fn loop_length_ms() -> u32 {
    TOUR_SCRIPT.iter().map(|s| s.dwell_ms).sum::<u32>() + LOOP_GAP_MS
}

/// Deferred work the orchestrator asks its host to deliver back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourAction {
    /// Apply `TOUR_SCRIPT[n]`
    Step(usize),
    /// Apply tick `n` of the canary ramp
    CanaryTick(usize),
    /// End of a tour generation
    Restart,
    /// End of a pause
    Resume,
}

/// Something that can run a [`TourAction`] later
pub trait TimerHost {
    type Handle;

    /// Arrange for `action` to be passed to [`TourOrchestrator::fire`]
    /// after `delay_ms`
    fn set_timeout(&mut self, delay_ms: u32, action: TourAction) -> Self::Handle;

    /// Cancel a pending action; cancelling one that already ran is a no-op
    fn clear_timeout(&mut self, handle: Self::Handle);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TourPhase {
    #[default]
    Idle,
    Touring,
    Paused,
}

/// Drives [`PanelState`] through the tour
pub struct TourOrchestrator<H: TimerHost> {
    host: H,
    /// Tour steps and simulation ticks
    pending: Vec<H::Handle>,
    resume: Option<H::Handle>,
    phase: TourPhase,
    reduced_motion: bool,
    state: PanelState,
}

impl<H: TimerHost> TourOrchestrator<H> {
    pub fn new(host: H, reduced_motion: bool) -> Self {
        Self {
            host,
            pending: Vec::new(),
            resume: None,
            phase: TourPhase::Idle,
            reduced_motion,
            state: PanelState::new(),
        }
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn phase(&self) -> TourPhase {
        self.phase
    }

    pub fn is_paused(&self) -> bool {
        self.phase == TourPhase::Paused
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Schedule a full tour generation, replacing whatever was pending.
    /// Does nothing while paused or with reduced motion.
    pub fn start(&mut self) {
        if self.is_paused() || self.reduced_motion {
            return;
        }
        self.clear_pending();

        for (i, offset) in step_offsets().into_iter().enumerate() {
            self.schedule(offset, TourAction::Step(i));
        }
        self.schedule(loop_length_ms(), TourAction::Restart);

        self.phase = TourPhase::Touring;
    }

    /// Cancel every scheduled transition and resume after `duration_ms`.
    /// A later call replaces the pending resume.
    pub fn pause_for(&mut self, duration_ms: u32) {
        self.cancel_resume();
        self.clear_pending();
        self.phase = TourPhase::Paused;
        self.resume = Some(self.host.set_timeout(duration_ms, TourAction::Resume));
    }

    /// Pointer or keyboard activity on the panel
    pub fn interact(&mut self) {
        self.pause_for(DEFAULT_PAUSE_MS);
    }

    /// Deliver a previously scheduled action
    pub fn fire(&mut self, action: TourAction) {
        match action {
            TourAction::Step(index) => {
                if self.phase != TourPhase::Touring {
                    return;
                }
                if let Some(step) = TOUR_SCRIPT.get(index).copied() {
                    self.state.tab = step.tab;
                    match step.effect {
                        StepEffect::None => {}
                        StepEffect::SimulateCanary => self.simulate_canary(),
                        StepEffect::SimulatePromotion => self.state.promote(),
                    }
                }
            }
            TourAction::CanaryTick(index) => self.state.record_canary_tick(index),
            TourAction::Restart => {
                if self.phase == TourPhase::Touring && !self.reduced_motion {
                    self.start();
                }
            }
            TourAction::Resume => {
                self.resume = None;
                if self.phase != TourPhase::Paused {
                    return;
                }
                self.phase = TourPhase::Idle;
                self.state.reset_simulation();
                self.start();
            }
        }
    }

    pub fn select_tab(&mut self, tab: PanelTab) {
        self.interact();
        self.state.tab = tab;
    }

    pub fn set_canary_percent(&mut self, value: i64) {
        self.interact();
        self.state.canary = CanaryPercent::new(value);
    }

    pub fn set_policy_view(&mut self, view: PolicyView) {
        self.interact();
        self.state.policy_view = view;
    }

    pub fn set_sdk_language(&mut self, language: SdkLanguage) {
        self.interact();
        self.state.sdk_language = language;
    }

    /// "Start canary" button
    pub fn run_canary(&mut self) {
        self.interact();
        self.state.tab = PanelTab::Sdk;
        self.simulate_canary();
    }

    /// "Promote" button
    pub fn run_promotion(&mut self) {
        self.interact();
        self.state.tab = PanelTab::Sdk;
        self.state.promote();
    }

    /// Follow the `prefers-reduced-motion` media query. Turning it on freezes
    /// the panel where it is; turning it off restarts an idle tour.
    pub fn set_reduced_motion(&mut self, reduced: bool) {
        if self.reduced_motion == reduced {
            return;
        }
        self.reduced_motion = reduced;

        if reduced {
            self.shutdown();
        } else if self.phase == TourPhase::Idle {
            self.start();
        }
    }

    /// Cancel every timer, including a pending resume
    pub fn shutdown(&mut self) {
        self.cancel_resume();
        self.clear_pending();
        self.phase = TourPhase::Idle;
    }

    fn simulate_canary(&mut self) {
        self.state.begin_canary();
        for i in 0..self.state.canary.ramp().len() {
            self.schedule(CANARY_TICK_MS * (i as u32 + 1), TourAction::CanaryTick(i));
        }
    }

    fn schedule(&mut self, delay_ms: u32, action: TourAction) {
        let handle = self.host.set_timeout(delay_ms, action);
        self.pending.push(handle);
    }

    fn clear_pending(&mut self) {
        for handle in self.pending.drain(..) {
            self.host.clear_timeout(handle);
        }
    }

    fn cancel_resume(&mut self) {
        if let Some(handle) = self.resume.take() {
            self.host.clear_timeout(handle);
        }
    }
}

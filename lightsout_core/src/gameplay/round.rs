use lightsout_data::{Millis, RoundResult, LIGHT_COUNT};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::config::{DifficultyConfig, ANTI_CHEAT_FLOOR_MS};
use crate::gameplay::cosmetics::{plan_cosmetics, EffectKind};
use crate::gameplay::lights::LightBank;
use crate::input::events::{InputEvent, Signal};
use crate::time::scheduler::{Fired, Scheduler};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundPhase {
    ArmWait,
    Sequencing,
    Holding,
    Go,
    Finished,
}

/// Why a round ended the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Clean,
    /// Responded before the lights went out.
    Premature,
    /// Responded after go, but faster than the anti-cheat floor.
    Implausible,
}

/// Read-only stream for whoever draws the gantry or plays sounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoundSignal {
    Phase(RoundPhase),
    Lights(LightBank),
    Shake(bool),
    Classified { result: RoundResult, verdict: Verdict },
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum RoundEvent {
    LightOn(usize),
    BeginHold,
    Cosmetic(EffectKind),
    Go,
}

// A round holds at most one result: the one stored in `Finished`.
#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    ArmWait,
    Sequencing,
    Holding { go_at: Millis },
    Go { go_at: Millis },
    Finished { result: RoundResult },
}

impl State {
    fn phase(&self) -> RoundPhase {
        match self {
            State::ArmWait => RoundPhase::ArmWait,
            State::Sequencing => RoundPhase::Sequencing,
            State::Holding { .. } => RoundPhase::Holding,
            State::Go { .. } => RoundPhase::Go,
            State::Finished { .. } => RoundPhase::Finished,
        }
    }
}

pub struct RoundEngine {
    config: DifficultyConfig,
    floor_ms: u32,
    state: State,
    lights: LightBank,
    shaking: bool,
    hold_ms: Option<Millis>,
    scheduler: Scheduler<RoundEvent>,
    rng: StdRng,
    signals: Vec<RoundSignal>,
}

impl RoundEngine {
    pub fn new(config: DifficultyConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Deterministic hold draws, for replays and tests.
    pub fn with_seed(config: DifficultyConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(config: DifficultyConfig, rng: StdRng) -> Self {
        Self {
            config,
            floor_ms: ANTI_CHEAT_FLOOR_MS,
            state: State::ArmWait,
            lights: LightBank::default(),
            shaking: false,
            hold_ms: None,
            scheduler: Scheduler::new(),
            rng,
            signals: Vec::new(),
        }
    }

    pub fn with_floor(mut self, floor_ms: u32) -> Self {
        self.floor_ms = floor_ms;
        self
    }

    pub fn config(&self) -> &DifficultyConfig {
        &self.config
    }

    pub fn phase(&self) -> RoundPhase {
        self.state.phase()
    }

    pub fn lights(&self) -> LightBank {
        self.lights
    }

    pub fn is_shaking(&self) -> bool {
        self.shaking
    }

    /// Known once the lights have gone out.
    pub fn go_timestamp(&self) -> Option<Millis> {
        match self.state {
            State::Go { go_at } => Some(go_at),
            _ => None,
        }
    }

    /// Length of the random hold, once drawn.
    pub fn hold_ms(&self) -> Option<Millis> {
        self.hold_ms
    }

    pub fn result(&self) -> Option<RoundResult> {
        match self.state {
            State::Finished { result } => Some(result),
            _ => None,
        }
    }

    pub fn next_deadline(&mut self) -> Option<Millis> {
        self.scheduler.next_deadline()
    }

    pub fn drain_signals(&mut self) -> Vec<RoundSignal> {
        std::mem::take(&mut self.signals)
    }

    /// Start the light sequence. No-op unless waiting to be armed.
    pub fn arm(&mut self, now: Millis) -> bool {
        if self.state != State::ArmWait {
            return false;
        }

        let step = self.config.light_delay_ms;
        for lamp in 0..LIGHT_COUNT {
            self.scheduler.schedule(now, lamp as u64 * step, RoundEvent::LightOn(lamp));
        }
        self.scheduler
            .schedule(now, LIGHT_COUNT as u64 * step, RoundEvent::BeginHold);
        self.enter(State::Sequencing);

        // The first lamp is due immediately.
        self.advance(now);
        true
    }

    /// Fire every scheduled event due at or before `now`, in order.
    pub fn advance(&mut self, now: Millis) {
        while let Some(fired) = self.scheduler.pop_due(now) {
            self.apply(fired);
        }
    }

    /// Player response. Returns the result the first time the round finishes.
    pub fn respond(&mut self, now: Millis) -> Option<RoundResult> {
        if matches!(self.state, State::ArmWait | State::Finished { .. }) {
            return None;
        }

        // Anything that was due before the response happened first.
        self.advance(now);

        let (result, verdict) = match self.state {
            // Polled past go, but pressed before it.
            State::Go { go_at } if now < go_at => (RoundResult::false_start(), Verdict::Premature),
            State::Go { go_at } => {
                let elapsed = (now - go_at).round();
                if elapsed < self.floor_ms as Millis {
                    (RoundResult::false_start(), Verdict::Implausible)
                } else {
                    (RoundResult::valid(elapsed as u32), Verdict::Clean)
                }
            }
            _ => (RoundResult::false_start(), Verdict::Premature),
        };

        self.finish(result, verdict);
        Some(result)
    }

    pub fn handle(&mut self, event: InputEvent) -> Option<RoundResult> {
        match event.signal {
            Signal::Arm => {
                self.arm(event.timestamp);
                None
            }
            Signal::Respond => self.respond(event.timestamp),
        }
    }

    /// Back to `ArmWait` for a fresh round.
    pub fn reset(&mut self) {
        self.scheduler.cancel_all();
        self.hold_ms = None;
        self.shaking = false;
        self.lights.extinguish();
        self.enter(State::ArmWait);
        self.signals.push(RoundSignal::Lights(self.lights));
    }

    fn apply(&mut self, fired: Fired<RoundEvent>) {
        match (fired.event, self.state) {
            (RoundEvent::LightOn(lamp), State::Sequencing) => self.set_lamp(lamp, true),
            (RoundEvent::BeginHold, State::Sequencing) => self.begin_hold(fired.fire_at),
            (RoundEvent::Go, State::Holding { go_at }) => {
                self.lights.extinguish();
                self.signals.push(RoundSignal::Lights(self.lights));
                self.enter(State::Go { go_at });
            }
            (RoundEvent::Cosmetic(effect), state) => self.apply_cosmetic(effect, state),
            (event, state) => debug!(?event, phase = ?state.phase(), "stale timer ignored"),
        }
    }

    fn begin_hold(&mut self, start: Millis) {
        let lo = self.config.min_hold_ms.min(self.config.max_hold_ms) as Millis;
        let hi = self.config.min_hold_ms.max(self.config.max_hold_ms) as Millis;
        let hold = self.rng.random_range(lo..=hi);
        let go_at = start + hold;

        self.hold_ms = Some(hold);
        self.scheduler.schedule_at(go_at, RoundEvent::Go);
        for effect in plan_cosmetics(&self.config, hold, &mut self.rng) {
            self.scheduler
                .schedule_at(start + effect.offset_ms, RoundEvent::Cosmetic(effect.kind));
        }
        debug!(hold_ms = hold, go_at, "hold drawn");
        self.enter(State::Holding { go_at });
    }

    fn apply_cosmetic(&mut self, effect: EffectKind, state: State) {
        let holding = matches!(state, State::Holding { .. });
        match effect {
            EffectKind::FlickerOff(lamp) if holding => self.set_lamp(lamp, false),
            EffectKind::FlickerOn(lamp) if holding => self.set_lamp(lamp, true),
            EffectKind::ShakeStart if holding => self.set_shake(true),
            // A shake may straddle the go signal; it still has to stop.
            EffectKind::ShakeEnd => self.set_shake(false),
            _ => {}
        }
    }

    fn set_lamp(&mut self, lamp: usize, on: bool) {
        if self.lights.set(lamp, on) {
            self.signals.push(RoundSignal::Lights(self.lights));
        }
    }

    fn set_shake(&mut self, on: bool) {
        if self.shaking != on {
            self.shaking = on;
            self.signals.push(RoundSignal::Shake(on));
        }
    }

    fn finish(&mut self, result: RoundResult, verdict: Verdict) {
        self.scheduler.cancel_all();
        self.set_shake(false);
        self.enter(State::Finished { result });
        info!(
            false_start = result.false_start,
            reaction_ms = result.reaction_time,
            ?verdict,
            "round classified"
        );
        self.signals.push(RoundSignal::Classified { result, verdict });
    }

    fn enter(&mut self, state: State) {
        let from = self.state.phase();
        self.state = state;
        let to = state.phase();
        debug!(?from, ?to, "round phase");
        self.signals.push(RoundSignal::Phase(to));
    }
}

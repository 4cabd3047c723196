//! Hold-phase distractions.
//!
//! The whole table is drawn once when the hold starts, after the hold length
//! itself, so the go instant is fixed before any of this is decided.

use lightsout_data::{Millis, LIGHT_COUNT};
use rand::Rng;

use crate::config::{DifficultyConfig, SHAKE_DURATION_MS};

const FLICKER_LEAD_MS: f64 = 200.0;
const FLICKER_TAIL_MS: f64 = 300.0;
const SHAKE_MARGIN_MS: f64 = 150.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    /// Lamp briefly drops out.
    FlickerOff(usize),
    FlickerOn(usize),
    ShakeStart,
    ShakeEnd,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CosmeticEffect {
    /// Offset from the start of the hold.
    pub offset_ms: Millis,
    pub kind: EffectKind,
}

pub fn plan_cosmetics<R: Rng>(
    config: &DifficultyConfig,
    hold_ms: Millis,
    rng: &mut R,
) -> Vec<CosmeticEffect> {
    let mut plan = Vec::new();

    for _ in 0..config.flicker_count {
        let at = draw(rng, FLICKER_LEAD_MS, hold_ms - FLICKER_TAIL_MS);
        let lamp = rng.random_range(0..LIGHT_COUNT);
        plan.push(CosmeticEffect {
            offset_ms: at,
            kind: EffectKind::FlickerOff(lamp),
        });
        plan.push(CosmeticEffect {
            offset_ms: at + config.flicker_duration_ms as Millis,
            kind: EffectKind::FlickerOn(lamp),
        });
    }

    if config.shake {
        let at = draw(rng, SHAKE_MARGIN_MS, hold_ms - SHAKE_MARGIN_MS);
        plan.push(CosmeticEffect {
            offset_ms: at,
            kind: EffectKind::ShakeStart,
        });
        plan.push(CosmeticEffect {
            offset_ms: at + SHAKE_DURATION_MS as Millis,
            kind: EffectKind::ShakeEnd,
        });
    }

    plan
}

// Uniform in [lo, hi]; collapses to `lo` when the window is empty.
fn draw<R: Rng>(rng: &mut R, lo: Millis, hi: Millis) -> Millis {
    if hi <= lo {
        lo
    } else {
        rng.random_range(lo..=hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lightsout_data::Difficulty;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn chaos_plan_has_flickers_and_one_shake_inside_the_hold() {
        let config = DifficultyConfig::for_difficulty(Difficulty::Chaos);
        let mut rng = StdRng::seed_from_u64(7);
        let plan = plan_cosmetics(&config, 3000.0, &mut rng);

        let offs = plan.iter().filter(|e| matches!(e.kind, EffectKind::FlickerOff(_))).count();
        let shakes = plan.iter().filter(|e| e.kind == EffectKind::ShakeStart).count();
        assert_eq!(offs, 3);
        assert_eq!(shakes, 1);

        for effect in &plan {
            match effect.kind {
                EffectKind::FlickerOff(lamp) => {
                    assert!(lamp < LIGHT_COUNT);
                    assert!(effect.offset_ms >= 200.0 && effect.offset_ms <= 2700.0);
                }
                EffectKind::ShakeStart => {
                    assert!(effect.offset_ms >= 150.0 && effect.offset_ms <= 2850.0);
                }
                _ => {}
            }
        }
    }

    #[test]
    fn no_cosmetics_when_disabled() {
        let config = DifficultyConfig::for_difficulty(Difficulty::Chaos).without_cosmetics();
        let mut rng = StdRng::seed_from_u64(7);
        assert!(plan_cosmetics(&config, 3000.0, &mut rng).is_empty());
    }
}

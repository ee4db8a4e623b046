//! Damage calculation.

use crate::env::RandomSource;

/// Defense-adjusted damage before random perturbation.
///
/// # Formula
///
/// ```text
/// effective = floor(attack * 100 / (100 + defense))
/// ```
///
/// Defense has diminishing returns and never cancels an attack completely:
/// any positive attack deals at least 1.
pub fn effective_damage(attack: u32, defense: u32) -> u32 {
    if attack == 0 {
        return 0;
    }
    let reduced = u64::from(attack) * 100 / (100 + u64::from(defense));
    (reduced as u32).max(1)
}

/// Effective damage plus a caller-supplied perturbation.
///
/// The result is non-negative whenever `random_factor >= -effective_damage(attack, defense)`
/// and saturates at `i32::MAX`.
pub fn final_damage(attack: u32, defense: u32, random_factor: i32) -> i32 {
    let total = i64::from(effective_damage(attack, defense)) + i64::from(random_factor);
    i32::try_from(total).unwrap_or(if total < 0 { i32::MIN } else { i32::MAX })
}

/// Sample a perturbation in `[-variance, variance]`, clamped so the hit stays non-negative.
///
/// A zero variance consumes no randomness and returns 0.
pub fn roll_random_factor(
    rng: &mut (impl RandomSource + ?Sized),
    effective: u32,
    variance: u32,
) -> i32 {
    if variance == 0 {
        return 0;
    }
    let roll = rng.range(0, variance.saturating_mul(2));
    let offset = (i64::from(roll) - i64::from(variance)).max(-i64::from(effective));
    i32::try_from(offset).unwrap_or(if offset < 0 { i32::MIN } else { i32::MAX })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRolls;

    #[test]
    fn effective_damage_matches_reference_values() {
        assert_eq!(effective_damage(120, 30), 92);
        assert_eq!(effective_damage(20, 2), 19);
        assert_eq!(effective_damage(10, 5), 9);
        assert_eq!(effective_damage(100, 0), 100);
    }

    #[test]
    fn zero_attack_deals_nothing_positive_attack_always_lands() {
        assert_eq!(effective_damage(0, 0), 0);
        assert_eq!(effective_damage(0, 500), 0);
        assert_eq!(effective_damage(1, 10_000), 1);
    }

    #[test]
    fn defense_never_increases_damage() {
        for attack in [1, 7, 15, 120, 999] {
            let mut previous = effective_damage(attack, 0);
            for defense in 1..400 {
                let current = effective_damage(attack, defense);
                assert!(current <= previous, "atk {attack} def {defense}");
                previous = current;
            }
        }
        assert!(effective_damage(120, 30) < effective_damage(120, 10));
    }

    #[test]
    fn final_damage_without_perturbation_is_effective_damage() {
        for attack in [0, 5, 20, 120] {
            for defense in [0, 3, 30, 250] {
                assert_eq!(
                    final_damage(attack, defense, 0),
                    effective_damage(attack, defense) as i32
                );
            }
        }
        assert_eq!(final_damage(120, 30, -2), 90);
    }

    #[test]
    fn random_factor_is_clamped_to_keep_damage_non_negative() {
        let mut rng = ScriptedRolls::new().with_ranges([0, 10, 5]);
        // range(0, 10) - 5
        assert_eq!(roll_random_factor(&mut rng, 3, 5), -3);
        assert_eq!(roll_random_factor(&mut rng, 3, 5), 5);
        assert_eq!(roll_random_factor(&mut rng, 3, 5), 0);
        assert_eq!(roll_random_factor(&mut rng, 3, 0), 0);
    }

    #[test]
    fn huge_attack_saturates_instead_of_wrapping() {
        assert_eq!(effective_damage(u32::MAX, 0), u32::MAX);
        assert_eq!(final_damage(u32::MAX, 0, 0), i32::MAX);
        assert_eq!(final_damage(u32::MAX, 0, -5), i32::MAX);
        assert!(final_damage(u32::MAX, u32::MAX, 0) >= 0);
    }

    #[test]
    fn huge_variance_stays_in_range() {
        let variance = u32::MAX / 2 + 1;
        let mut rng = ScriptedRolls::new().with_ranges([0, u32::MAX]);
        assert_eq!(roll_random_factor(&mut rng, 5, variance), -5);
        assert_eq!(roll_random_factor(&mut rng, 5, variance), i32::MAX);
    }
}

//! Dice engine: rolling and evaluating a fixed set of five dice.

use rand::Rng;

/// Number of dice in a set.
pub const DICE_COUNT: usize = 5;

/// Highest face value on a die.
pub const MAX_FACE: u8 = 6;

/// An ordered set of five die-face values, each in `1..=6`.
///
/// A `DiceSet` is only ever replaced wholesale: there is no way to
/// mutate a single die, so a set and anything derived from it stay
/// consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceSet([u8; DICE_COUNT]);

impl DiceSet {
    pub fn new(values: [u8; DICE_COUNT]) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[u8; DICE_COUNT] {
        &self.0
    }

    /// True when all five dice show the same face.
    pub fn all_matching(&self) -> bool {
        self.0.iter().all(|&v| v == self.0[0])
    }
}

impl Default for DiceSet {
    /// The pre-roll display: all sixes.
    fn default() -> Self {
        Self([MAX_FACE; DICE_COUNT])
    }
}

/// Roll five independent uniform dice.
pub fn roll_dice<R: Rng>(rng: &mut R) -> DiceSet {
    let mut values = [0u8; DICE_COUNT];
    for value in &mut values {
        *value = rng.random_range(1..=MAX_FACE);
    }
    DiceSet(values)
}

/// Produce the headline for a dice set.
///
/// Total and deterministic: the same set always yields the same text.
pub fn evaluate_dice(dice: &DiceSet) -> String {
    let values = dice.values();
    if dice.all_matching() {
        format!("Five of a kind! All dice show {}.", values[0])
    } else {
        format!(
            "You rolled {}, {}, {}, {} and {}.",
            values[0], values[1], values[2], values[3], values[4]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roll_produces_five_values_in_range() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            let dice = roll_dice(&mut rng);
            assert_eq!(dice.values().len(), DICE_COUNT);
            for &value in dice.values() {
                assert!((1..=MAX_FACE).contains(&value), "out of range: {value}");
            }
        }
    }

    #[test]
    fn evaluate_is_deterministic() {
        let dice = DiceSet::new([3, 1, 4, 1, 5]);
        assert_eq!(evaluate_dice(&dice), evaluate_dice(&dice));
    }

    #[test]
    fn all_matching_set_gets_special_headline() {
        let dice = DiceSet::new([6, 6, 6, 6, 6]);
        assert_eq!(evaluate_dice(&dice), "Five of a kind! All dice show 6.");
    }

    #[test]
    fn mixed_set_gets_generic_headline() {
        let dice = DiceSet::new([1, 2, 3, 4, 5]);
        assert_eq!(evaluate_dice(&dice), "You rolled 1, 2, 3, 4 and 5.");
    }

    #[test]
    fn default_set_is_all_sixes() {
        assert_eq!(DiceSet::default().values(), &[6, 6, 6, 6, 6]);
        assert!(DiceSet::default().all_matching());
    }
}

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Rules of Conway's Game of Life.
pub const B3S23: RuleSet = RuleSet::new(0b1000, 0b1100);

/// # Representation
/// Life rules are represented as
/// ```notrust
/// |------birth------|
/// 0000_0000_0000_0000_0000_0000_0000_0000
///                     |----survival-----|
/// ```
///
/// # Examples
/// ```notrust
/// b3s23:                0000_0000_0000_1000_0000_0000_0000_1100
///
/// b0s0:                 0000_0000_0000_0000_0000_0000_0000_0000
/// b012345678s012345678: 0000_0001_1111_1111_0000_0001_1111_1111
/// ```
///
/// See: https://conwaylife.com/wiki/Rulestring
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RuleSet {
    rule: u32,
}

impl Default for RuleSet {
    fn default() -> Self {
        B3S23
    }
}

impl RuleSet {
    /// Create a new `RuleSet` for the given births and survivals. For both `b` and
    /// `s`, numbers are set on a bit basis. For instance if bit `i` in `b` is on, it
    /// means `i` is included in the set of births. Any bit past the 8th is ignored.
    pub const fn new(b: u16, s: u16) -> Self {
        let b = b & 0x1FF;
        let s = s & 0x1FF;

        Self {
            rule: (b as u32) << 16 | s as u32,
        }
    }

    pub fn births(&self) -> u16 {
        ((self.rule & 0x1FF0000) >> 0x10) as u16
    }

    pub fn survivals(&self) -> u16 {
        (self.rule & 0x1FF) as u16
    }

    /// The state of a cell in the next generation, given whether it is alive now and how many of
    /// its neighbors are alive now.
    pub fn next_state(&self, alive: bool, living_neighbors: usize) -> bool {
        // more than 8 neighbors can't happen on a Moore neighborhood
        if living_neighbors > 8 {
            return false;
        }

        let n = 1u16 << living_neighbors;

        if alive {
            self.survivals() & n == n
        } else {
            self.births() & n == n
        }
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RuleSet({self})")
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = |mask: u16| -> String {
            (0..=8u8)
                .filter(|i| mask & (1 << i) != 0)
                .map(|i| char::from(b'0' + i))
                .collect()
        };

        write!(f, "B{}/S{}", digits(self.births()), digits(self.survivals()))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleSetError {
    #[error("Unexpected character '{0}' in rulestring")]
    InvalidChar(char),

    #[error("Neighbor count {0} is larger than 8")]
    CountTooLarge(u32),

    #[error("Rulestring is empty")]
    Empty,
}

/// Parses rulestrings such as `b3/s23`, `B3/S23` or `b3s23`.
impl FromStr for RuleSet {
    type Err = RuleSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        enum State {
            Birth,
            Survival,
        }

        let s = s.trim();
        if s.is_empty() {
            return Err(RuleSetError::Empty);
        }

        let mut state = State::Birth;
        let (mut b, mut s_mask) = (0u16, 0u16);

        for c in s.chars() {
            match c {
                'b' | 'B' => {
                    state = State::Birth;
                }
                's' | 'S' => {
                    state = State::Survival;
                }
                '/' => {}
                c => {
                    let n = c.to_digit(10).ok_or(RuleSetError::InvalidChar(c))?;

                    if n > 8 {
                        return Err(RuleSetError::CountTooLarge(n));
                    }

                    match state {
                        State::Survival => s_mask |= 1 << n,
                        State::Birth => b |= 1 << n,
                    }
                }
            }
        }

        Ok(RuleSet::new(b, s_mask))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conway_rules() {
        let rules = B3S23;

        // survival
        assert!(rules.next_state(true, 2));
        assert!(rules.next_state(true, 3));
        assert!(!rules.next_state(true, 1));
        assert!(!rules.next_state(true, 4));

        // birth
        assert!(rules.next_state(false, 3));
        assert!(!rules.next_state(false, 2));
        assert!(!rules.next_state(false, 6));
    }

    #[test]
    fn parse_rulestrings() {
        assert_eq!("b3/s23".parse::<RuleSet>(), Ok(B3S23));
        assert_eq!("B3/S23".parse::<RuleSet>(), Ok(B3S23));
        assert_eq!("b3s23".parse::<RuleSet>(), Ok(B3S23));

        let highlife: RuleSet = "B36/S23".parse().unwrap();
        assert_eq!(highlife.births(), 0b100_1000);
        assert_eq!(highlife.survivals(), 0b1100);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!("b3/x23".parse::<RuleSet>(), Err(RuleSetError::InvalidChar('x')));
        assert_eq!("b9/s23".parse::<RuleSet>(), Err(RuleSetError::CountTooLarge(9)));
        assert_eq!("  ".parse::<RuleSet>(), Err(RuleSetError::Empty));
    }

    #[test]
    fn display_round_trips() {
        assert_eq!(B3S23.to_string(), "B3/S23");
        assert_eq!(RuleSet::new(0, 0).to_string(), "B/S");
    }
}

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::ScreenSize;
use crate::rule_set::RuleSet;
use crate::seed::SeedPolicy;

/// Conway's Game of Life in the terminal.
///
/// A `width` by `height` window is shown on top of a larger simulated grid: `overflow` hidden
/// cells extend past every side of the window so that patterns leaving the screen keep evolving
/// for a while.
#[derive(Parser, Debug, Clone)]
#[command(name = "lifegrid", version)]
pub struct Config {
    /// Number of visible columns
    #[arg(long, default_value_t = 78, value_parser = clap::value_parser!(u16).range(1..))]
    pub width: ScreenSize,

    /// Number of visible rows
    #[arg(long, default_value_t = 58, value_parser = clap::value_parser!(u16).range(1..))]
    pub height: ScreenSize,

    /// Hidden cells simulated past each edge of the visible window
    #[arg(long, default_value_t = 20)]
    pub overflow: ScreenSize,

    /// Probability that a visible cell starts alive
    #[arg(long, default_value_t = 0.3, value_parser = parse_probability)]
    pub probability: f64,

    /// Seed for the random number generator. Fresh entropy is used when absent.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Target frames per second. One generation is computed per frame.
    #[arg(long, default_value_t = 8, value_parser = clap::value_parser!(u32).range(1..))]
    pub fps: u32,

    /// Birth/survival rulestring
    #[arg(long, default_value = "b3/s23")]
    pub rule: RuleSet,

    /// Run this many generations without a terminal UI, then print the final grid
    #[arg(long)]
    pub generations: Option<u64>,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 78,
            height: 58,
            overflow: 20,
            probability: 0.3,
            seed: None,
            fps: 8,
            rule: RuleSet::default(),
            generations: None,
            log_file: None,
        }
    }
}

impl Config {
    /// Width of the simulated grid, overflow included
    pub fn grid_width(&self) -> usize {
        self.width as usize + 2 * self.overflow as usize
    }

    /// Height of the simulated grid, overflow included
    pub fn grid_height(&self) -> usize {
        self.height as usize + 2 * self.overflow as usize
    }

    /// Whether grid coordinate `(x, y)` lies inside the visible window
    pub fn is_visible(&self, x: usize, y: usize) -> bool {
        let o = self.overflow as usize;

        (o..o + self.width as usize).contains(&x) && (o..o + self.height as usize).contains(&y)
    }

    /// How the visible window is populated at startup
    pub fn seed_policy(&self) -> SeedPolicy {
        SeedPolicy::RandomWithProbability(self.probability)
    }

    /// Time budget of a single frame. An `fps` of 0 is treated as 1.
    pub fn frame_time(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }
}

fn parse_probability(s: &str) -> Result<f64, String> {
    let p: f64 = s.parse().map_err(|e| format!("{e}"))?;

    if !(0f64..=1f64).contains(&p) {
        return Err(format!("{p} is not in [0, 1]"));
    }

    Ok(p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_setup() {
        let config = Config::try_parse_from(["lifegrid"]).unwrap();

        assert_eq!(config.width, 78);
        assert_eq!(config.height, 58);
        assert_eq!(config.overflow, 20);
        assert_eq!(config.probability, 0.3);
        assert_eq!(config.fps, 8);
        assert_eq!(config.rule, RuleSet::default());
        assert_eq!(config.generations, None);

        assert_eq!(config.grid_width(), 118);
        assert_eq!(config.grid_height(), 98);
        assert_eq!(config.frame_time(), Duration::from_millis(125));
    }

    #[test]
    fn visible_window() {
        let args = ["lifegrid", "--width", "3", "--height", "2", "--overflow", "1"];
        let config = Config::try_parse_from(args).unwrap();

        assert!(config.is_visible(1, 1));
        assert!(config.is_visible(3, 2));
        assert!(!config.is_visible(0, 1));
        assert!(!config.is_visible(4, 1));
        assert!(!config.is_visible(1, 3));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Config::try_parse_from(["lifegrid", "--probability", "1.5"]).is_err());
        assert!(Config::try_parse_from(["lifegrid", "--fps", "0"]).is_err());
        assert!(Config::try_parse_from(["lifegrid", "--width", "0"]).is_err());
        assert!(Config::try_parse_from(["lifegrid", "--rule", "b3/s2x"]).is_err());
    }

    #[test]
    fn zero_fps_does_not_divide_by_zero() {
        let config = Config {
            fps: 0,
            ..Config::default()
        };

        assert_eq!(config.frame_time(), Duration::from_secs(1));
    }

    #[test]
    fn parses_rule() {
        let config = Config::try_parse_from(["lifegrid", "--rule", "B36/S23"]).unwrap();

        assert_eq!(config.rule.to_string(), "B36/S23");
    }
}

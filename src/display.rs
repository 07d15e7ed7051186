use std::io;
use std::io::Write;
use std::time::Instant;

use crossterm::cursor;
use crossterm::event;
use crossterm::execute;
use crossterm::queue;
use crossterm::style;
use crossterm::style::Color;
use crossterm::terminal;
use rand::Rng;
use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::camera::Camera;
use crate::config::Config;
use crate::error::GridError;
use crate::events::AppEvent;
use crate::events::EngineEvent;
use crate::events::Event;
use crate::grid::Grid;
use crate::io::convert_event;

const ALIVE_COLOR: Color = Color::Rgb { r: 0, g: 255, b: 0 };
const DEAD_COLOR: Color = Color::Rgb {
    r: 255,
    g: 255,
    b: 255,
};

/// Build the grid described by `config`. Only the visible window is seeded, the overflow margin
/// starts dead.
pub fn seed_grid<R>(config: &Config, rng: &mut R) -> Result<Grid, GridError>
where
    R: Rng + ?Sized,
{
    let policy = config.seed_policy();
    policy.validate()?;

    let grid = Grid::from_fn(config.grid_width(), config.grid_height(), |x, y| {
        config.is_visible(x, y) && policy.sample(rng)
    })?;

    Ok(grid.with_rules(config.rule))
}

/// Drives a [`Grid`], one generation per frame, and draws its visible window.
pub struct App {
    config: Config,
    grid: Grid,
    cam: Camera,
    paused: bool,
    extinct: bool,
}

impl App {
    pub fn new<R>(config: Config, rng: &mut R) -> Result<Self, GridError>
    where
        R: Rng + ?Sized,
    {
        let grid = seed_grid(&config, rng)?;

        let mut cam = Camera::new(config.width as usize, config.height as usize);
        cam.look_at(config.overflow as usize, config.overflow as usize);

        info!(
            width = grid.width(),
            height = grid.height(),
            population = grid.population(),
            rule = %grid.rules(),
            "Seeded grid"
        );

        Ok(Self {
            config,
            grid,
            cam,
            paused: false,
            extinct: false,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Advance the grid by one generation
    pub fn step(&mut self) {
        self.grid.advance();

        let population = self.grid.population();
        debug!(generation = self.grid.generation(), population, "Advanced");

        if population == 0 && !self.extinct {
            warn!(generation = self.grid.generation(), "Every cell is dead");
        }
        self.extinct = population == 0;
    }

    /// Returns `true` if the app should exit
    pub fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::AppEvent(AppEvent::Exit) => return true,
            Event::AppEvent(AppEvent::TogglePause) => {
                self.paused = !self.paused;
                info!(paused = self.paused, "Toggled pause");
            }
            Event::AppEvent(AppEvent::Resize { cols, rows }) => {
                debug!(cols, rows, "Terminal resized");
            }
            Event::EngineEvent(EngineEvent::Advance(n)) => {
                for _ in 0..n {
                    self.step();
                }
            }
        }

        false
    }

    /// Run `generations` generations, then print the visible window and a summary to `out`.
    pub fn run_headless<W: Write>(&mut self, generations: u64, out: &mut W) -> io::Result<()> {
        for _ in 0..generations {
            self.step();
        }

        let o = self.config.overflow as usize;
        for y in o..o + self.config.height as usize {
            let line: String = (o..o + self.config.width as usize)
                .map(|x| if self.grid.is_alive(x, y) { 'O' } else { '.' })
                .collect();
            writeln!(out, "{line}")?;
        }

        writeln!(
            out,
            "generation {}, population {}",
            self.grid.generation(),
            self.grid.population()
        )?;

        Ok(())
    }

    /// Take over the terminal and animate the grid until the user exits.
    pub fn run(&mut self) -> io::Result<()> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

        let res = self.frame_loop(&mut stdout);

        // Restore the terminal even if the loop failed
        execute!(stdout, style::ResetColor, cursor::Show, terminal::LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;

        res
    }

    fn frame_loop<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let frame_time = self.config.frame_time();

        loop {
            let t = Instant::now();

            self.draw(out)?;

            if !self.paused {
                self.step();
            }

            // Poll events for whatever is left of the frame
            while let Some(time_left) = frame_time.checked_sub(t.elapsed()) {
                if !event::poll(time_left)? {
                    break;
                }

                let Some(event) = convert_event(event::read()?) else {
                    continue;
                };

                if self.handle_event(event) {
                    return Ok(());
                }
            }
        }
    }

    fn draw<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        self.cam.reset();
        self.cam.draw_grid(&self.grid);
        let frame = self.cam.render();

        queue!(
            out,
            cursor::MoveTo(0, 0),
            style::SetForegroundColor(ALIVE_COLOR),
            style::SetBackgroundColor(DEAD_COLOR),
        )?;

        for line in frame.lines() {
            queue!(out, style::Print(line), cursor::MoveToNextLine(1))?;
        }

        let status = if self.paused { " (paused)" } else { "" };
        queue!(
            out,
            style::ResetColor,
            terminal::Clear(terminal::ClearType::CurrentLine),
            style::Print(format!(
                "generation {}, population {}{status}",
                self.grid.generation(),
                self.grid.population()
            )),
        )?;

        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn config(width: u16, height: u16, overflow: u16, probability: f64) -> Config {
        Config {
            width,
            height,
            overflow,
            probability,
            ..Config::default()
        }
    }

    #[test]
    fn only_the_visible_window_is_seeded() {
        let config = config(4, 3, 2, 1.0);
        let grid = seed_grid(&config, &mut StdRng::seed_from_u64(1)).unwrap();

        assert_eq!(grid.width(), 8);
        assert_eq!(grid.height(), 7);
        assert_eq!(grid.population(), 12);

        for (x, y) in grid.live_cells() {
            assert!(config.is_visible(x, y), "({x}, {y}) is in the overflow");
        }
    }

    #[test]
    fn seeding_is_reproducible() {
        let config = config(20, 20, 5, 0.3);

        let a = seed_grid(&config, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = seed_grid(&config, &mut StdRng::seed_from_u64(42)).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn invalid_probability_is_rejected() {
        let config = config(4, 4, 0, 2.0);

        assert_eq!(
            seed_grid(&config, &mut StdRng::seed_from_u64(0)),
            Err(GridError::InvalidProbability(2.0))
        );
    }

    #[test]
    fn pause_and_step_events() {
        let mut app = App::new(config(5, 5, 0, 0.5), &mut StdRng::seed_from_u64(3)).unwrap();

        assert!(!app.handle_event(Event::AppEvent(AppEvent::TogglePause)));
        assert!(app.is_paused());

        assert!(!app.handle_event(Event::EngineEvent(EngineEvent::Advance(3))));
        assert_eq!(app.grid().generation(), 3);

        assert!(app.handle_event(Event::AppEvent(AppEvent::Exit)));
    }

    #[test]
    fn headless_prints_visible_window() {
        // a blinker in the middle of a 5x5 window, with a 1 cell margin
        let mut app = App::new(config(5, 5, 1, 0.0), &mut StdRng::seed_from_u64(0)).unwrap();
        app.grid = Grid::from_live_cells(7, 7, &[(2, 3), (3, 3), (4, 3)]).unwrap();

        let mut out = Vec::new();
        app.run_headless(1, &mut out).unwrap();

        insta::assert_snapshot!(String::from_utf8(out).unwrap(), @r"
        .....
        ..O..
        ..O..
        ..O..
        .....
        generation 1, population 3
        ");
    }
}

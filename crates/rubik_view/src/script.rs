use rubik_core::Move;
use rubik_prefs::{Preferences, ScriptClockMode};
use web_time::{Duration, Instant};

use crate::CubeSimulation;

/// Plays a move string on a clock, forward and then backward.
///
/// A script of `n` characters repeats every `2n` steps. Step `k < n` plays
/// character `k`; step `k >= n` plays the reverse of character `2n - 1 - k`,
/// so each full cycle returns the cube to where it started. Characters that
/// are not moves take up a step without doing anything.
#[derive(Debug, Clone)]
pub struct ScriptPlayer {
    moves: Vec<char>,
    /// Time between steps.
    step: Duration,
    clock_mode: ScriptClockMode,

    /// Time that the clock started.
    start_time: Instant,
    /// Number of steps issued since the clock started.
    steps_issued: u64,
}

impl ScriptPlayer {
    /// Constructs a player for `moves` with one step per `step`. The clock
    /// starts now.
    pub fn new(moves: &str, step: Duration, clock_mode: ScriptClockMode) -> Self {
        Self {
            moves: moves.chars().collect(),
            step,
            clock_mode,

            start_time: Instant::now(),
            steps_issued: 0,
        }
    }
    /// Constructs a player for the default script in `prefs`.
    pub fn from_prefs(prefs: &Preferences) -> Self {
        Self::new(
            &prefs.script.moves,
            prefs.script.step(),
            prefs.animation.script_clock,
        )
    }

    /// Returns the script.
    pub fn moves(&self) -> String {
        self.moves.iter().collect()
    }
    /// Returns the number of steps in one full cycle of the script.
    pub fn cycle_len(&self) -> u64 {
        2 * self.moves.len() as u64
    }
    /// Returns the number of steps issued since the clock started.
    pub fn steps_issued(&self) -> u64 {
        self.steps_issued
    }

    /// Replaces the script.
    ///
    /// With [`ScriptClockMode::Restart`], the clock and step count are reset
    /// so the new script begins at its first character. With
    /// [`ScriptClockMode::Persistent`], both keep running.
    pub fn restart(&mut self, moves: &str) {
        self.moves = moves.chars().collect();
        match self.clock_mode {
            ScriptClockMode::Persistent => (),
            ScriptClockMode::Restart => {
                self.start_time = Instant::now();
                self.steps_issued = 0;
            }
        }
        log::debug!("restarted script {moves:?} ({} clock)", self.clock_mode);
    }

    /// Returns the character played at step `index`, or `None` if the script is
    /// empty.
    pub fn char_at_step(&self, index: u64) -> Option<char> {
        let n = self.moves.len() as u64;
        if n == 0 {
            return None;
        }
        let k = index % (2 * n);
        Some(if k < n {
            self.moves[k as usize]
        } else {
            reverse_char(self.moves[(2 * n - 1 - k) as usize])
        })
    }

    /// Issues the next step if it is due. Step `k` is due once `elapsed` (the
    /// time since the clock started) reaches `k` steps, so the first step is
    /// due immediately.
    ///
    /// At most one step is issued per call, so a long pause is caught up one
    /// call at a time.
    pub fn run_script(&mut self, sim: &mut CubeSimulation, elapsed: Duration) -> Option<ScriptStep> {
        let due = elapsed.as_secs_f64() / self.step.as_secs_f64();
        if due.is_nan() || due < self.steps_issued as f64 {
            return None;
        }
        let index = self.steps_issued;
        let ch = self.char_at_step(index)?;
        self.steps_issued += 1;

        let twist = Move::from_char(ch);
        if let Some(twist) = twist {
            sim.do_move(twist);
        }
        log::trace!("script step {index}: {ch:?}");
        Some(ScriptStep { index, ch, twist })
    }
    /// Calls [`Self::run_script()`] with the time since the player's clock
    /// started.
    pub fn tick(&mut self, sim: &mut CubeSimulation) -> Option<ScriptStep> {
        self.run_script(sim, self.start_time.elapsed())
    }
}

/// Step issued by a [`ScriptPlayer`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ScriptStep {
    /// Number of steps issued before this one.
    pub index: u64,
    /// Character played.
    pub ch: char,
    /// Move applied, or `None` if `ch` is not a move.
    pub twist: Option<Move>,
}

fn reverse_char(ch: char) -> char {
    match Move::from_char(ch) {
        Some(twist) => twist.rev().to_char(),
        None => ch,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    fn player(moves: &str, clock_mode: ScriptClockMode) -> ScriptPlayer {
        ScriptPlayer::new(moves, SECOND, clock_mode)
    }

    #[test]
    fn test_step_order() {
        let p = player(" urdtfl", ScriptClockMode::Persistent);
        let cycle: String = (0..p.cycle_len())
            .filter_map(|i| p.char_at_step(i))
            .collect();
        assert_eq!(cycle, " urdtflLFtDRU ");
        assert_eq!(p.char_at_step(14), Some(' '));
        assert_eq!(p.char_at_step(15), Some('u'));
    }

    #[test]
    fn test_empty_script() {
        let mut sim = CubeSimulation::default();
        let mut p = player("", ScriptClockMode::Persistent);
        assert_eq!(p.run_script(&mut sim, SECOND * 10), None);
        assert_eq!(p.steps_issued(), 0);
    }

    #[test]
    fn test_one_step_per_call() {
        let mut sim = CubeSimulation::default();
        sim.set_move_duration(Duration::ZERO);
        let mut p = player("ur", ScriptClockMode::Persistent);

        let step = p.run_script(&mut sim, Duration::ZERO).unwrap();
        assert_eq!(step.index, 0);
        assert_eq!(step.twist, Move::from_char('u'));
        assert_eq!(p.run_script(&mut sim, SECOND / 2), None);

        let step = p.run_script(&mut sim, SECOND * 5).unwrap();
        assert_eq!(step.ch, 'r');
        let step = p.run_script(&mut sim, SECOND * 5).unwrap();
        assert_eq!((step.index, step.ch), (2, 'R'));
        assert_eq!(sim.history().len(), 3);
    }

    #[test]
    fn test_restart_clock_modes() {
        let mut sim = CubeSimulation::default();

        let mut p = player("ur", ScriptClockMode::Persistent);
        p.run_script(&mut sim, SECOND);
        p.restart("fb");
        assert_eq!(p.steps_issued(), 1);
        assert_eq!(p.run_script(&mut sim, SECOND * 2).unwrap().ch, 'b');

        let mut p = player("ur", ScriptClockMode::Restart);
        p.run_script(&mut sim, SECOND);
        p.restart("fb");
        assert_eq!(p.steps_issued(), 0);
        assert_eq!(p.moves(), "fb");
        assert_eq!(p.run_script(&mut sim, Duration::ZERO).unwrap().ch, 'f');
    }
}

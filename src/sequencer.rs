pub mod script;

pub use script::{Script, ScriptBlock, ScriptError};

use std::time::Duration;

/// Which half of a block the sequencer is currently animating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    TypingCommand,
    TypingOutput,
}

/// Timing knobs for the replay loop. Defaults are tuned to read like a person
/// typing a command and the machine answering faster than they can type.
#[derive(Debug, Clone)]
pub struct SequencerConfig {
    /// Delay before the very first character appears.
    pub start_delay: Duration,
    /// Base delay between command characters.
    pub typing_delay: Duration,
    /// Command typing wobbles by up to this much in either direction.
    pub typing_jitter: Duration,
    /// Delay between output characters.
    pub output_delay: Duration,
    /// Pause after a command finishes typing and between output lines.
    pub line_pause: Duration,
    /// Pause between blocks.
    pub block_pause: Duration,
    /// How long the finished transcript stays on screen before it clears.
    pub end_pause: Duration,
    /// Delay between the clear and the first character of the next cycle.
    pub restart_delay: Duration,
    /// Cursor blink period, independent of typing progress.
    pub cursor_blink: Duration,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            start_delay: Duration::from_millis(1000),
            typing_delay: Duration::from_millis(40),
            typing_jitter: Duration::from_millis(20),
            output_delay: Duration::from_millis(10),
            line_pause: Duration::from_millis(100),
            block_pause: Duration::from_millis(400),
            end_pause: Duration::from_millis(2500),
            restart_delay: Duration::from_millis(500),
            cursor_blink: Duration::from_millis(530),
        }
    }
}

/// Deterministic per-character delay wobble. Splitmix-style hash over a step
/// counter, so a given seed always produces the same delay sequence.
#[derive(Debug, Clone)]
pub struct TypingJitter {
    seed: u64,
    step: u64,
}

impl TypingJitter {
    pub fn new(seed: u64) -> Self {
        Self { seed, step: 0 }
    }

    fn next_u64(&mut self) -> u64 {
        self.step = self.step.wrapping_add(1);
        let mut z = self
            .seed
            .wrapping_add(self.step.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// `base` plus a wobble drawn from `[-spread, +spread]`, floored at zero.
    fn jittered(&mut self, base: Duration, spread: Duration) -> Duration {
        let spread_ms = spread.as_millis() as u64;
        if spread_ms == 0 {
            return base;
        }
        let span = spread_ms * 2 + 1;
        let offset = (self.next_u64() % span) as i64 - spread_ms as i64;
        let millis = (base.as_millis() as i64 + offset).max(0);
        Duration::from_millis(millis as u64)
    }
}

/// The partially revealed block currently being animated. `None` in the
/// snapshot means the cycle is complete and the transcript is being held
/// on screen before the reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveBlock {
    pub prompt: String,
    pub command: String,
    pub output: Vec<String>,
}

/// Read-only view of the replay at a point in time. Handed to the
/// presentation layer after every state change; never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub history: Vec<ScriptBlock>,
    pub active: Option<ActiveBlock>,
    pub phase: Phase,
    pub loop_count: u32,
    pub cursor_visible: bool,
}

const DEFAULT_JITTER_SEED: u64 = 0x5DEECE66D;

/// Replays a fixed script as a typing animation, forever.
///
/// The sequencer is a pure state machine: `tick` advances exactly one step
/// and reports how long the caller should wait before the next one. The
/// caller owns the timers; `stop` makes every later call inert so a stray
/// callback after teardown cannot mutate anything.
#[derive(Debug)]
pub struct Sequencer {
    script: Script,
    config: SequencerConfig,
    jitter: TypingJitter,
    phase: Phase,
    block_index: usize,
    command_chars: usize,
    output_line: usize,
    output_chars: usize,
    loop_count: u32,
    cursor_visible: bool,
    awaiting_reset: bool,
    halted: bool,
    history: Vec<ScriptBlock>,
}

impl Sequencer {
    pub fn new(script: Script, config: SequencerConfig) -> Self {
        Self::with_seed(script, config, DEFAULT_JITTER_SEED)
    }

    /// Like `new` but with a caller-chosen jitter seed, so tests can assert
    /// exact delay sequences.
    pub fn with_seed(script: Script, config: SequencerConfig, seed: u64) -> Self {
        Self {
            script,
            config,
            jitter: TypingJitter::new(seed),
            phase: Phase::TypingCommand,
            block_index: 0,
            command_chars: 0,
            output_line: 0,
            output_chars: 0,
            loop_count: 1,
            cursor_visible: true,
            awaiting_reset: false,
            halted: false,
            history: Vec::new(),
        }
    }

    pub fn config(&self) -> &SequencerConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn loop_count(&self) -> u32 {
        self.loop_count
    }

    /// Advance one step. Returns the delay until the next tick, or `None`
    /// once the sequencer has been stopped.
    pub fn tick(&mut self) -> Option<Duration> {
        if self.halted {
            return None;
        }

        // Cycle boundary: the first tick past the last block arms the
        // end-of-cycle hold; the one after it performs the whole reset in a
        // single step (clear history, zero indices, then bump the counter).
        if self.block_index >= self.script.len() {
            if !self.awaiting_reset {
                self.awaiting_reset = true;
                return Some(self.config.end_pause);
            }
            self.history.clear();
            self.block_index = 0;
            self.command_chars = 0;
            self.output_line = 0;
            self.output_chars = 0;
            self.phase = Phase::TypingCommand;
            self.awaiting_reset = false;
            self.loop_count += 1;
            log::debug!("script replay starting loop {}", self.loop_count);
            return Some(self.config.restart_delay);
        }

        let delay = match self.phase {
            Phase::TypingCommand => self.tick_command(),
            Phase::TypingOutput => self.tick_output(),
        };
        Some(delay)
    }

    fn tick_command(&mut self) -> Duration {
        let command_len = self.script.blocks()[self.block_index]
            .command
            .chars()
            .count();
        if self.command_chars < command_len {
            self.command_chars += 1;
            self.jitter
                .jittered(self.config.typing_delay, self.config.typing_jitter)
        } else {
            self.phase = Phase::TypingOutput;
            self.output_line = 0;
            self.output_chars = 0;
            self.config.line_pause
        }
    }

    fn tick_output(&mut self) -> Duration {
        let block = &self.script.blocks()[self.block_index];
        match block.output.get(self.output_line) {
            Some(line) => {
                if self.output_chars < line.chars().count() {
                    self.output_chars += 1;
                    self.config.output_delay
                } else {
                    self.output_line += 1;
                    self.output_chars = 0;
                    self.config.line_pause
                }
            }
            None => {
                // Block finished: move it to history and start the next one.
                self.history.push(block.clone());
                self.block_index += 1;
                self.phase = Phase::TypingCommand;
                self.command_chars = 0;
                self.output_line = 0;
                self.output_chars = 0;
                self.config.block_pause
            }
        }
    }

    /// Flip cursor visibility. Driven by its own timer; deliberately ignorant
    /// of typing progress.
    pub fn toggle_cursor(&mut self) {
        if self.halted {
            return;
        }
        self.cursor_visible = !self.cursor_visible;
    }

    /// Make every later `tick`/`toggle_cursor` a no-op. Called on teardown
    /// before the pending timer handles are cleared.
    pub fn stop(&mut self) {
        self.halted = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.halted
    }

    pub fn snapshot(&self) -> Snapshot {
        let active = self.script.block(self.block_index).map(|block| {
            let mut output = Vec::new();
            if self.phase == Phase::TypingOutput {
                for (i, line) in block.output.iter().enumerate() {
                    if i < self.output_line {
                        output.push(line.clone());
                    } else if i == self.output_line && self.output_chars > 0 {
                        output.push(line.chars().take(self.output_chars).collect());
                    }
                }
            }
            ActiveBlock {
                prompt: block.prompt.clone(),
                command: block.command.chars().take(self.command_chars).collect(),
                output,
            }
        });
        Snapshot {
            history: self.history.clone(),
            active,
            phase: self.phase,
            loop_count: self.loop_count,
            cursor_visible: self.cursor_visible,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SEED: u64 = 7;

    fn script_of(blocks: &[(&str, &[&str])]) -> Script {
        Script::new(
            blocks
                .iter()
                .map(|(cmd, out)| ScriptBlock::new("~/site", *cmd, out.iter().copied()))
                .collect(),
        )
        .expect("test scripts should be non-empty")
    }

    fn sequencer_of(blocks: &[(&str, &[&str])]) -> Sequencer {
        Sequencer::with_seed(script_of(blocks), SequencerConfig::default(), TEST_SEED)
    }

    /// Tick until `pred` holds, panicking if it never does.
    fn tick_until(seq: &mut Sequencer, pred: impl Fn(&Sequencer) -> bool) {
        for _ in 0..10_000 {
            if pred(seq) {
                return;
            }
            seq.tick().expect("sequencer should keep running");
        }
        panic!("sequencer never reached the expected state");
    }

    #[test]
    fn test_command_reveal_is_monotonic() {
        let mut seq = sequencer_of(&[("whoami", &["chetan"])]);
        let mut prev = 0;
        while seq.phase() == Phase::TypingCommand {
            seq.tick().expect("running sequencer should tick");
            let snap = seq.snapshot();
            let active = snap.active.expect("block should be in progress");
            let revealed = active.command.chars().count();
            assert!(revealed >= prev, "reveal went backwards: {revealed} < {prev}");
            assert!(revealed <= "whoami".len());
            prev = revealed;
        }
        assert_eq!(prev, "whoami".len());
    }

    #[test]
    fn test_command_completion_enters_output() {
        let mut seq = sequencer_of(&[("ls", &["a", "b"])]);
        tick_until(&mut seq, |s| s.phase() == Phase::TypingOutput);
        let snap = seq.snapshot();
        let active = snap.active.expect("block should be in progress");
        assert_eq!(active.command, "ls");
        // both output indices start from zero: nothing revealed yet
        assert!(active.output.is_empty());
    }

    #[test]
    fn test_output_lines_reveal_in_order() {
        let lines = ["alpha", "beta", "gamma"];
        let mut seq = sequencer_of(&[("run", &lines)]);
        tick_until(&mut seq, |s| s.phase() == Phase::TypingOutput);
        loop {
            seq.tick().expect("running sequencer should tick");
            let snap = seq.snapshot();
            let Some(active) = snap.active else {
                break;
            };
            if seq.phase() != Phase::TypingOutput {
                break;
            }
            // every line before the last revealed one must be complete, and
            // the last must be a prefix of the script line
            for (i, line) in active.output.iter().enumerate() {
                if i + 1 < active.output.len() {
                    assert_eq!(line, lines[i], "line {} started before line {i} finished", i + 1);
                } else {
                    assert!(
                        lines[i].starts_with(line.as_str()),
                        "line {i} revealed {line:?}, not a prefix of {:?}",
                        lines[i]
                    );
                }
            }
        }
    }

    #[test]
    fn test_history_matches_script_after_cycle() {
        let blocks = [("whoami", &["chetan"][..]), ("ls", &["a.txt", "b.txt"][..])];
        let mut seq = sequencer_of(&blocks);
        tick_until(&mut seq, |s| s.snapshot().history.len() == blocks.len());
        let snap = seq.snapshot();
        assert_eq!(snap.history, script_of(&blocks).blocks());
        // cycle complete: no in-progress block while the transcript is held
        assert!(snap.active.is_none());
        assert_eq!(snap.loop_count, 1);
    }

    #[test]
    fn test_cycle_reset_clears_history_and_bumps_loop() {
        let mut seq = sequencer_of(&[("hi", &["ok"])]);
        tick_until(&mut seq, |s| s.snapshot().active.is_none());

        // first tick past the end arms the hold and keeps the transcript
        let hold = seq.tick().expect("running sequencer should tick");
        assert_eq!(hold, seq.config().end_pause);
        assert_eq!(seq.snapshot().history.len(), 1);

        // the next tick performs the reset in one step
        let restart = seq.tick().expect("running sequencer should tick");
        assert_eq!(restart, seq.config().restart_delay);
        let snap = seq.snapshot();
        assert!(snap.history.is_empty());
        assert_eq!(snap.loop_count, 2);
        let active = snap.active.expect("a fresh block should be in progress");
        assert_eq!(active.command, "");
        assert!(active.output.is_empty());
    }

    #[test]
    fn test_delay_contract_single_block() {
        let mut seq = sequencer_of(&[("hi", &["ok"])]);
        let cfg = seq.config().clone();
        let typing_range = |d: Duration| {
            d >= cfg.typing_delay - cfg.typing_jitter && d <= cfg.typing_delay + cfg.typing_jitter
        };

        assert!(typing_range(seq.tick().unwrap())); // h
        assert!(typing_range(seq.tick().unwrap())); // i
        assert_eq!(seq.tick().unwrap(), cfg.line_pause); // command done
        assert_eq!(seq.tick().unwrap(), cfg.output_delay); // o
        assert_eq!(seq.tick().unwrap(), cfg.output_delay); // k
        assert_eq!(seq.tick().unwrap(), cfg.line_pause); // line done
        assert_eq!(seq.tick().unwrap(), cfg.block_pause); // block into history
        assert_eq!(seq.tick().unwrap(), cfg.end_pause); // transcript held
        assert_eq!(seq.tick().unwrap(), cfg.restart_delay); // reset
        assert!(typing_range(seq.tick().unwrap())); // h again
    }

    #[test]
    fn test_cursor_toggle_leaves_typing_state_alone() {
        let mut seq = sequencer_of(&[("whoami", &["chetan"])]);
        seq.tick().expect("running sequencer should tick");
        seq.tick().expect("running sequencer should tick");
        let before = seq.snapshot();
        seq.toggle_cursor();
        let after = seq.snapshot();
        assert_eq!(before.cursor_visible, !after.cursor_visible);
        assert_eq!(before.history, after.history);
        assert_eq!(before.active, after.active);
        assert_eq!(before.phase, after.phase);
        assert_eq!(before.loop_count, after.loop_count);
    }

    #[test]
    fn test_cursor_keeps_blinking_through_the_hold() {
        let mut seq = sequencer_of(&[("hi", &[])]);
        tick_until(&mut seq, |s| s.snapshot().active.is_none());
        seq.tick().expect("running sequencer should tick"); // arm the hold
        let before = seq.snapshot().cursor_visible;
        seq.toggle_cursor();
        assert_eq!(seq.snapshot().cursor_visible, !before);
    }

    #[test]
    fn test_single_block_replays_from_scratch() {
        let mut seq = sequencer_of(&[("whoami", &["root"])]);
        tick_until(&mut seq, |s| s.snapshot().history.len() == 1);
        assert_eq!(
            seq.snapshot().history,
            vec![ScriptBlock::new("~/site", "whoami", ["root"])]
        );
        tick_until(&mut seq, |s| s.loop_count() == 2);
        // first typing tick of the new cycle starts from an empty string
        seq.tick().expect("running sequencer should tick");
        let active = seq.snapshot().active.expect("block should be in progress");
        assert_eq!(active.command, "w");
    }

    #[test]
    fn test_block_with_no_output_advances() {
        let mut seq = sequencer_of(&[("cd /tmp", &[]), ("ls", &["x"])]);
        // must reach the second block without hanging in TypingOutput
        tick_until(&mut seq, |s| s.snapshot().history.len() == 1);
        assert_eq!(seq.phase(), Phase::TypingCommand);
        let active = seq.snapshot().active.expect("second block should be next");
        assert_eq!(active.command, "");
        tick_until(&mut seq, |s| s.snapshot().history.len() == 2);
    }

    #[test]
    fn test_empty_command_goes_straight_to_output() {
        let mut seq = sequencer_of(&[("", &["quiet"])]);
        let delay = seq.tick().expect("running sequencer should tick");
        assert_eq!(delay, seq.config().line_pause);
        assert_eq!(seq.phase(), Phase::TypingOutput);
    }

    #[test]
    fn test_stop_freezes_all_state() {
        let mut seq = sequencer_of(&[("hello", &["world"])]);
        seq.tick().expect("running sequencer should tick");
        seq.tick().expect("running sequencer should tick");
        let frozen = seq.snapshot();
        assert_eq!(
            frozen
                .active
                .as_ref()
                .map(|a| a.command.chars().count()),
            Some(2)
        );

        seq.stop();
        assert!(seq.is_stopped());
        assert_eq!(seq.tick(), None);
        assert_eq!(seq.tick(), None);
        seq.toggle_cursor();
        assert_eq!(seq.snapshot(), frozen);
    }

    #[test]
    fn test_jitter_is_deterministic_per_seed() {
        let blocks = [("abcdefghij", &[][..])];
        let delays = |seed| {
            let mut seq =
                Sequencer::with_seed(script_of(&blocks), SequencerConfig::default(), seed);
            (0..10)
                .map(|_| seq.tick().expect("running sequencer should tick"))
                .collect::<Vec<_>>()
        };
        assert_eq!(delays(TEST_SEED), delays(TEST_SEED));
        assert_ne!(delays(TEST_SEED), delays(TEST_SEED + 1));
    }

    #[test]
    fn test_multibyte_output_reveals_whole_chars() {
        let line = "🛠 Rust";
        let mut seq = sequencer_of(&[("x", &[line])]);
        tick_until(&mut seq, |s| s.phase() == Phase::TypingOutput);
        seq.tick().expect("running sequencer should tick");
        let active = seq.snapshot().active.expect("block should be in progress");
        assert_eq!(active.output, vec!["🛠".to_string()]);
        tick_until(&mut seq, |s| {
            s.snapshot()
                .active
                .is_some_and(|a| a.output.first().map(String::as_str) == Some(line))
        });
    }
}

use crate::timeline::Millis;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CounterId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CounterState {
    Idle,
    Running,
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterStart {
    Started,
    AlreadyRunning,
    AlreadyFinished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterStep {
    Continue,
    Done,
}

/// Counts a displayed integer up from zero to `target` in fixed ticks, then
/// pins it to `"{target}+"`.
#[derive(Clone, Debug)]
pub struct CounterTask {
    target: u64,
    current: f64,
    increment: f64,
    state: CounterState,
    display: String,
}

impl CounterTask {
    pub fn new(target: u64) -> Self {
        Self {
            target,
            current: 0.0,
            increment: 0.0,
            state: CounterState::Idle,
            display: "0".to_string(),
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    /// Starting twice never runs two animations: a running counter keeps
    /// going and a finished one just redisplays its pinned value.
    pub fn start(&mut self, duration_ms: Millis, tick_ms: Millis) -> CounterStart {
        match self.state {
            CounterState::Running => CounterStart::AlreadyRunning,
            CounterState::Finished => {
                self.display = self.pinned();
                CounterStart::AlreadyFinished
            }
            CounterState::Idle => {
                let ticks = (duration_ms as f64 / tick_ms.max(1) as f64).max(1.0);
                self.increment = self.target as f64 / ticks;
                self.current = 0.0;
                self.state = CounterState::Running;
                CounterStart::Started
            }
        }
    }

    pub fn tick(&mut self) -> CounterStep {
        if self.state != CounterState::Running {
            return CounterStep::Done;
        }

        self.current += self.increment;

        if self.current >= self.target as f64 {
            self.current = self.target as f64;
            self.state = CounterState::Finished;
            self.display = self.pinned();
            CounterStep::Done
        } else {
            self.display = (self.current.floor() as u64).to_string();
            CounterStep::Continue
        }
    }

    fn pinned(&self) -> String {
        format!("{}+", self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(counter: &mut CounterTask) -> Vec<String> {
        let mut frames = Vec::new();
        loop {
            let step = counter.tick();
            frames.push(counter.display().to_string());
            if step == CounterStep::Done {
                return frames;
            }
        }
    }

    #[test]
    fn counts_monotonically_and_pins_target() {
        let mut counter = CounterTask::new(50);
        assert_eq!(counter.start(2_000, 16), CounterStart::Started);

        let frames = run_to_end(&mut counter);
        let (last, body) = frames.split_last().expect("at least one frame");

        assert_eq!(last, "50+");
        let values: Vec<u64> = body.iter().map(|f| f.parse().expect("numeric frame")).collect();
        assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(values.iter().all(|value| *value < 50));
        assert!((125..=126).contains(&frames.len()));
    }

    #[test]
    fn restarting_a_finished_counter_keeps_the_pinned_value() {
        let mut counter = CounterTask::new(50);
        counter.start(2_000, 16);
        run_to_end(&mut counter);

        assert_eq!(counter.start(2_000, 16), CounterStart::AlreadyFinished);
        assert_eq!(counter.display(), "50+");
        assert_eq!(counter.tick(), CounterStep::Done);
        assert_eq!(counter.display(), "50+");
    }

    #[test]
    fn restarting_a_running_counter_does_not_reset_it() {
        let mut counter = CounterTask::new(100);
        counter.start(2_000, 16);
        for _ in 0..10 {
            counter.tick();
        }
        let before = counter.display().to_string();

        assert_eq!(counter.start(2_000, 16), CounterStart::AlreadyRunning);
        assert_eq!(counter.display(), before);
    }

    #[test]
    fn zero_target_finishes_on_first_tick() {
        let mut counter = CounterTask::new(0);
        counter.start(2_000, 16);

        assert_eq!(counter.tick(), CounterStep::Done);
        assert_eq!(counter.display(), "0+");
    }

    #[test]
    fn idle_counter_ignores_ticks() {
        let mut counter = CounterTask::new(10);

        assert_eq!(counter.tick(), CounterStep::Done);
        assert_eq!(counter.display(), "0");
        assert_eq!(counter.start(2_000, 16), CounterStart::Started);
    }
}

//! Runner - Agent を RunSpec に従って駆動するループ
//!
//! step（choose → perform）を `max_ticks` 回繰り返し、
//! `reevaluate_every` tick ごとに history をリプレイする。
//! 最後の step で修正していなければ、終了時にもう一度リプレイする。

use tracing::info;

use crate::app::Agent;
use crate::domain::{AgentResult, RunReport, RunSpec};
use crate::ports::{Clock, IdGenerator, Problem, Solver};

pub struct Runner<C, G> {
    spec: RunSpec,
    clock: C,
    ids: G,
}

impl<C: Clock, G: IdGenerator> Runner<C, G> {
    pub fn new(spec: RunSpec, clock: C, ids: G) -> Self {
        Self { spec, clock, ids }
    }

    pub fn spec(&self) -> &RunSpec {
        &self.spec
    }

    pub fn run<P, S>(&self, agent: &mut Agent<P, S>) -> AgentResult<RunReport<P::State, P::Action>>
    where
        P: Problem,
        P::State: Clone,
        P::Action: Clone,
        S: Solver<P::State, P::Action>,
    {
        let run_id = self.ids.generate_run_id();
        let started_at = self.clock.now();
        let interval = self.spec.reevaluation_interval();
        info!(%run_id, max_ticks = self.spec.max_ticks, "run started");

        let mut ticks = 0u64;
        let mut corrections = 0u64;
        let mut corrected_last_tick = false;
        while ticks < self.spec.max_ticks {
            agent.step()?;
            ticks += 1;

            corrected_last_tick = match interval {
                Some(n) if ticks % n == 0 => {
                    corrections += agent.reevaluate_actions()? as u64;
                    true
                }
                _ => false,
            };
        }
        if !corrected_last_tick {
            corrections += agent.reevaluate_actions()? as u64;
        }

        let finished_at = self.clock.now();
        info!(%run_id, ticks, corrections, "run finished");

        Ok(RunReport {
            run_id,
            started_at,
            finished_at,
            ticks,
            corrections,
            history: agent.history().clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ApproximatorSpec, HistoryEntry};
    use crate::impls::{Direction, FunctionApproximator, LineWorld, Position};
    use crate::ports::{FixedClock, UlidGenerator};
    use chrono::{TimeZone, Utc};
    use rstest::rstest;

    fn runner(max_ticks: u64, reevaluate_every: Option<u64>) -> Runner<FixedClock, UlidGenerator<FixedClock>> {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap());
        let spec = RunSpec {
            max_ticks,
            reevaluate_every,
            ..RunSpec::default()
        };
        Runner::new(spec, clock, UlidGenerator::new(clock))
    }

    fn agent() -> Agent<LineWorld, FunctionApproximator<Position>> {
        let mut fa = FunctionApproximator::new(ApproximatorSpec {
            seed: Some(11),
            ..ApproximatorSpec::default()
        });
        fa.add_value_function(fa.create_value_function(|p: &Position| p.x as f64));
        Agent::new(Some(LineWorld::new(0, 3).unwrap()), Some(fa))
    }

    // corrections = Σ history 長（修正を行った時点ごと）
    #[rstest]
    #[case::every_two(4, Some(2), 2 + 4)]
    #[case::final_only(4, None, 4)]
    #[case::periodic_plus_final(5, Some(2), 2 + 4 + 5)]
    #[case::zero_interval(3, Some(0), 3)]
    #[case::no_ticks(0, Some(2), 0)]
    fn corrections_follow_the_schedule(
        #[case] max_ticks: u64,
        #[case] every: Option<u64>,
        #[case] expected: u64,
    ) {
        let mut agent = agent();
        let report = runner(max_ticks, every).run(&mut agent).unwrap();
        assert_eq!(report.ticks, max_ticks);
        assert_eq!(report.corrections, expected);
        assert_eq!(agent.ticked(), max_ticks);
    }

    #[test]
    fn runner_exposes_its_spec() {
        let r = runner(7, Some(0));
        assert_eq!(r.spec().max_ticks, 7);
        assert_eq!(r.spec().reevaluate_every, Some(0));
        assert_eq!(r.spec().reevaluation_interval(), None);
    }

    #[test]
    fn report_carries_history_and_clock() {
        let mut agent = agent();
        let report = runner(2, None).run(&mut agent).unwrap();

        // greedy は常に右を選び、LineWorld は右へ drift する
        assert_eq!(
            report.history.as_slice(),
            &[
                HistoryEntry::new(Position { x: 1 }, Direction::Right),
                HistoryEntry::new(Position { x: 2 }, Direction::Right),
            ]
        );
        assert_eq!(report.elapsed_ms(), 0);
        assert!(report.run_id.to_string().starts_with("run-"));
    }

    #[test]
    fn report_serializes_history_entries() {
        let mut agent = agent();
        let report = runner(1, None).run(&mut agent).unwrap();

        let v = serde_json::to_value(&report).unwrap();
        assert_eq!(v["ticks"], 1);
        assert_eq!(v["history"][0]["action"], "right");
        assert_eq!(v["history"][0]["state"]["x"], 1);
    }

    #[test]
    fn solver_failure_stops_the_run() {
        // 一点だけの世界では候補が無く、FunctionApproximator が失敗する
        let mut fa = FunctionApproximator::new(ApproximatorSpec::default());
        fa.add_value_function(fa.create_value_function(|p: &Position| p.x as f64));
        let mut agent = Agent::new(Some(LineWorld::new(5, 5).unwrap()), Some(fa));

        let err = runner(3, None).run(&mut agent).unwrap_err();
        assert_eq!(err.to_string(), "no candidates to evaluate");
        assert_eq!(agent.ticked(), 0);
    }
}

//! Agent - Problem と Solver を束ねるオーケストレータ
//!
//! # プロトコル
//! - `possible_actions`: Problem の候補をそのまま返す
//! - `choose_action`: 候補を Solver に渡し、選ばれた一つをそのまま返す
//! - `perform_action`: tick → current_state → history へ追記 → tick カウンタ +1（この順序）
//! - `reevaluate_actions`: history の全エントリについて `Solver::correct` を一回ずつ呼ぶ
//!
//! history と tick を変更するのは `perform_action` だけで、
//! 常に `ticked() == history().len()` が成り立つ。
//!
//! # Collaborator 不在時
//! 構築時には検査しない。不在の collaborator が実際に必要になった時点で
//! `AgentError::MissingCollaborator` を返す。事前検証が欲しい場合は `AgentBuilder` を使う。

use tracing::{debug, trace, warn};

use crate::domain::{AgentError, AgentResult, Candidate, Collaborator, History, HistoryEntry};
use crate::impls::{Detached, Unwired};
use crate::ports::{Problem, Solver};

type CandidateOf<P> = Candidate<<P as Problem>::State, <P as Problem>::Action>;

pub struct Agent<P: Problem, S = Unwired> {
    problem: Option<P>,
    solver: Option<S>,
    history: History<P::State, P::Action>,
    tick: u64,
}

impl<P, S> Agent<P, S>
where
    P: Problem,
    S: Solver<P::State, P::Action>,
{
    pub fn new(problem: Option<P>, solver: Option<S>) -> Self {
        Self {
            problem,
            solver,
            history: History::new(),
            tick: 0,
        }
    }

    /// Problem の候補をそのまま返す（コピー・加工なし）
    pub fn possible_actions(&self) -> AgentResult<Vec<CandidateOf<P>>> {
        let problem = self
            .problem
            .as_ref()
            .ok_or(AgentError::MissingCollaborator(Collaborator::Problem))?;
        let candidates = problem.possible_actions().map_err(|e| {
            warn!(error = %e, "problem failed to enumerate candidates");
            AgentError::problem(e)
        })?;
        trace!(count = candidates.len(), "enumerated candidates");
        Ok(candidates)
    }

    /// 候補を Solver に評価させ、選ばれた候補をそのまま返す
    ///
    /// Agent 自身は検証・フィルタ・タイブレークを一切しない。
    pub fn choose_action(&mut self) -> AgentResult<CandidateOf<P>> {
        let candidates = self.possible_actions()?;
        let solver = self
            .solver
            .as_mut()
            .ok_or(AgentError::MissingCollaborator(Collaborator::Solver))?;
        solver.evaluate(candidates).map_err(|e| {
            warn!(error = %e, "solver failed to evaluate candidates");
            AgentError::solver(e)
        })
    }

    /// 行動を実行する
    ///
    /// `action` は `choose_action` の結果である必要はない。
    /// 記録される state は tick **後** の状態。tick か current_state が失敗した場合、
    /// history と tick カウンタは変化しない。
    pub fn perform_action(&mut self, action: P::Action) -> AgentResult<()> {
        let problem = self
            .problem
            .as_mut()
            .ok_or(AgentError::MissingCollaborator(Collaborator::Problem))?;

        problem.tick().map_err(|e| {
            warn!(error = %e, "problem failed to tick");
            AgentError::problem(e)
        })?;
        let new_state = problem.current_state().map_err(|e| {
            warn!(error = %e, "problem failed to report current state");
            AgentError::problem(e)
        })?;

        self.history.push(HistoryEntry::new(new_state, action));
        self.tick += 1;
        debug!(tick = self.tick, "performed action");
        Ok(())
    }

    /// `choose_action` で選んだ行動をそのまま `perform_action` する
    pub fn step(&mut self) -> AgentResult<CandidateOf<P>>
    where
        P::Action: Clone,
    {
        let chosen = self.choose_action()?;
        self.perform_action(chosen.action.clone())?;
        Ok(chosen)
    }

    pub fn ticked(&self) -> u64 {
        self.tick
    }

    pub fn history(&self) -> &History<P::State, P::Action> {
        &self.history
    }

    /// history の全エントリについて `Solver::correct` を呼ぶ
    ///
    /// 前回どこまで修正したかは覚えない（毎回全件リプレイ）。
    /// 戻り値は今回発行した correct の回数 = 呼び出し時点の history 長。
    pub fn reevaluate_actions(&mut self) -> AgentResult<usize> {
        let mut corrections = 0;
        for _entry in self.history.iter() {
            let solver = self
                .solver
                .as_mut()
                .ok_or(AgentError::MissingCollaborator(Collaborator::Solver))?;
            solver.correct().map_err(|e| {
                warn!(error = %e, corrections, "solver failed to correct");
                AgentError::solver(e)
            })?;
            corrections += 1;
        }
        debug!(corrections, "reevaluated history");
        Ok(corrections)
    }

    pub fn problem(&self) -> Option<&P> {
        self.problem.as_ref()
    }

    pub fn problem_mut(&mut self) -> Option<&mut P> {
        self.problem.as_mut()
    }

    pub fn solver(&self) -> Option<&S> {
        self.solver.as_ref()
    }

    pub fn solver_mut(&mut self) -> Option<&mut S> {
        self.solver.as_mut()
    }

    pub fn into_parts(self) -> (Option<P>, Option<S>, History<P::State, P::Action>) {
        (self.problem, self.solver, self.history)
    }
}

impl<P: Problem> Agent<P, Unwired> {
    /// Solver なしの Agent（行動の実行と history の記録だけができる）
    pub fn with_problem(problem: P) -> Self {
        Self::new(Some(problem), None)
    }
}

impl<St, Ac, S: Solver<St, Ac>> Agent<Detached<St, Ac>, S> {
    /// Problem なしの Agent（State/Action は Solver に合わせて決まる）
    pub fn with_solver(solver: S) -> Self {
        Self::new(None, Some(solver))
    }
}

impl Agent<Unwired, Unwired> {
    /// collaborator を一つも持たない Agent
    pub fn unwired() -> Self {
        Self::new(None, None)
    }
}

impl<P, S> Default for Agent<P, S>
where
    P: Problem,
    S: Solver<P::State, P::Action>,
{
    fn default() -> Self {
        Self::new(None, None)
    }
}

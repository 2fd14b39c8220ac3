//! AgentBuilder - Agent の構築とワイヤリング
//!
//! # 学習ポイント
//! - Builder パターンの実装
//! - 起動時検証（Fail-fast 設計）
//!
//! `Agent::new` は collaborator 不在を初回使用時まで報告しない。
//! 構築時点で失敗させたい場合は `expect()` で必要な collaborator を宣言する。

use crate::app::Agent;
use crate::domain::Collaborator;
use crate::ports::{Problem, Solver};

/// AgentBuilder は Agent を構築
///
/// # 使用例
/// ```ignore
/// let agent = AgentBuilder::new()
///     .problem(LineWorld::new(0, 10)?)
///     .solver(approximator)
///     .expect(&[Collaborator::Problem, Collaborator::Solver])
///     .build()?;
/// ```
pub struct AgentBuilder<P, S> {
    problem: Option<P>,
    solver: Option<S>,
    expected: Vec<Collaborator>,
}

/// BuildError は Agent 構築時のエラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Missing collaborators: {0:?}. These were expected but not wired in.")]
    MissingCollaborators(Vec<Collaborator>),
}

impl<P, S> AgentBuilder<P, S>
where
    P: Problem,
    S: Solver<P::State, P::Action>,
{
    pub fn new() -> Self {
        Self {
            problem: None,
            solver: None,
            expected: Vec::new(),
        }
    }

    pub fn problem(mut self, problem: P) -> Self {
        self.problem = Some(problem);
        self
    }

    pub fn solver(mut self, solver: S) -> Self {
        self.solver = Some(solver);
        self
    }

    /// build() 時に存在を要求する collaborator を設定
    pub fn expect(mut self, collaborators: &[Collaborator]) -> Self {
        for &c in collaborators {
            if !self.expected.contains(&c) {
                self.expected.push(c);
            }
        }
        self
    }

    /// Agent を構築
    ///
    /// expect() で宣言した collaborator が欠けていれば、欠けている全てを列挙して失敗する。
    pub fn build(self) -> Result<Agent<P, S>, BuildError> {
        let missing: Vec<Collaborator> = self
            .expected
            .iter()
            .copied()
            .filter(|c| match c {
                Collaborator::Problem => self.problem.is_none(),
                Collaborator::Solver => self.solver.is_none(),
            })
            .collect();
        if !missing.is_empty() {
            return Err(BuildError::MissingCollaborators(missing));
        }
        Ok(Agent::new(self.problem, self.solver))
    }
}

impl<P, S> Default for AgentBuilder<P, S>
where
    P: Problem,
    S: Solver<P::State, P::Action>,
{
    fn default() -> Self {
        Self::new()
    }
}

//! FunctionApproximator - 線形価値関数による Solver 実装
//!
//! value(s) = Σ weight_i * feature_i(s)
//!
//! - evaluate: ε の確率でランダムに、それ以外は価値最大の候補を選ぶ（同値なら先頭）
//! - correct: 選んだ状態の trace を cursor で巡回し、TD(0) で重みを一回更新する

use std::collections::VecDeque;
use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::domain::{ApproximatorSpec, Candidate};
use crate::ports::Solver;

type Feature<S> = Box<dyn Fn(&S) -> f64>;

#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("no candidates to evaluate")]
    NoCandidates,
}

/// 特徴量一つとその重み
pub struct ValueFunction<S> {
    feature: Feature<S>,
    weight: f64,
}

impl<S> ValueFunction<S> {
    pub fn weight(&self) -> f64 {
        self.weight
    }

    fn feature(&self, state: &S) -> f64 {
        (self.feature)(state)
    }

    fn value(&self, state: &S) -> f64 {
        self.weight * self.feature(state)
    }
}

impl<S> fmt::Debug for ValueFunction<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueFunction")
            .field("weight", &self.weight)
            .finish_non_exhaustive()
    }
}

pub struct FunctionApproximator<S> {
    spec: ApproximatorSpec,
    value_functions: Vec<ValueFunction<S>>,
    reward: Feature<S>,
    trace: VecDeque<S>,
    cursor: usize,
    rng: StdRng,
}

impl<S> FunctionApproximator<S> {
    pub fn new(spec: ApproximatorSpec) -> Self {
        let rng = match spec.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            spec,
            value_functions: Vec::new(),
            reward: Box::new(|_| 0.0),
            trace: VecDeque::new(),
            cursor: 0,
            rng,
        }
    }

    /// 報酬関数を設定（既定は常に 0）
    pub fn with_reward(mut self, reward: impl Fn(&S) -> f64 + 'static) -> Self {
        self.reward = Box::new(reward);
        self
    }

    /// 初期重み `initial_weight` の ValueFunction を作る（登録はしない）
    pub fn create_value_function(&self, feature: impl Fn(&S) -> f64 + 'static) -> ValueFunction<S> {
        ValueFunction {
            feature: Box::new(feature),
            weight: self.spec.initial_weight,
        }
    }

    pub fn add_value_function(&mut self, value_function: ValueFunction<S>) {
        self.value_functions.push(value_function);
    }

    pub fn value(&self, state: &S) -> f64 {
        self.value_functions.iter().map(|vf| vf.value(state)).sum()
    }

    pub fn weights(&self) -> Vec<f64> {
        self.value_functions.iter().map(ValueFunction::weight).collect()
    }

    pub fn trace_len(&self) -> usize {
        self.trace.len()
    }

    pub fn spec(&self) -> &ApproximatorSpec {
        &self.spec
    }

    fn explore(&mut self) -> bool {
        let rate = self.spec.exploration_rate;
        rate > 0.0 && self.rng.gen_bool(rate.min(1.0))
    }

    fn best_index<A>(&self, candidates: &[Candidate<S, A>]) -> usize {
        let mut best = 0;
        let mut best_value = f64::NEG_INFINITY;
        for (i, candidate) in candidates.iter().enumerate() {
            let v = self.value(&candidate.state);
            if v > best_value {
                best = i;
                best_value = v;
            }
        }
        best
    }

    fn remember(&mut self, state: S) {
        self.trace.push_back(state);
        while self.trace.len() > self.spec.max_trace.max(1) {
            self.trace.pop_front();
            self.cursor = self.cursor.saturating_sub(1);
        }
    }
}

impl<S: Clone, A> Solver<S, A> for FunctionApproximator<S> {
    type Error = SolverError;

    fn evaluate(&mut self, mut candidates: Vec<Candidate<S, A>>) -> Result<Candidate<S, A>, SolverError> {
        if candidates.is_empty() {
            return Err(SolverError::NoCandidates);
        }

        let index = if self.explore() {
            self.rng.gen_range(0..candidates.len())
        } else {
            self.best_index(&candidates)
        };
        trace!(index, count = candidates.len(), "evaluated candidates");

        let chosen = candidates.swap_remove(index);
        self.remember(chosen.state.clone());
        Ok(chosen)
    }

    fn correct(&mut self) -> Result<(), SolverError> {
        if self.trace.is_empty() {
            trace!("nothing to correct");
            return Ok(());
        }

        let i = self.cursor % self.trace.len();
        let state = &self.trace[i];
        let bootstrap = match self.trace.get(i + 1) {
            Some(next) => self.spec.discount * self.value(next),
            None => 0.0,
        };
        let target = (self.reward)(state) + bootstrap;
        let delta = target - self.value(state);
        let features: Vec<f64> = self.value_functions.iter().map(|vf| vf.feature(state)).collect();

        let step = self.spec.learning_rate * delta;
        for (vf, phi) in self.value_functions.iter_mut().zip(features) {
            vf.weight += step * phi;
        }
        self.cursor = (i + 1) % self.trace.len();

        debug!(index = i, delta, "corrected value estimate");
        Ok(())
    }
}

//! Unwired - collaborator が配線されていない位置を埋めるマーカー型
//!
//! 値を持たない enum なので、Unwired のメソッドが呼ばれることはありません。
//! `Agent<MyProblem, Unwired>` のように型引数を埋めるためだけに使います。
//!
//! Problem 側を空けたまま Solver の State/Action を指定したい場合は
//! `Detached<S, A>` を使います（こちらも値を作れない）。

use std::convert::Infallible;
use std::marker::PhantomData;

use crate::domain::Candidate;
use crate::ports::{Problem, Solver};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unwired {}

impl Problem for Unwired {
    type State = ();
    type Action = ();
    type Error = Infallible;

    fn possible_actions(&self) -> Result<Vec<Candidate<(), ()>>, Infallible> {
        match *self {}
    }

    fn tick(&mut self) -> Result<(), Infallible> {
        match *self {}
    }

    fn current_state(&self) -> Result<(), Infallible> {
        match *self {}
    }
}

impl<S, A> Solver<S, A> for Unwired {
    type Error = Infallible;

    fn evaluate(&mut self, _candidates: Vec<Candidate<S, A>>) -> Result<Candidate<S, A>, Infallible> {
        match *self {}
    }

    fn correct(&mut self) -> Result<(), Infallible> {
        match *self {}
    }
}

/// State と Action だけを決めた、値を持たない Problem
pub struct Detached<S, A> {
    never: Infallible,
    _types: PhantomData<fn() -> (S, A)>,
}

impl<S, A> Problem for Detached<S, A> {
    type State = S;
    type Action = A;
    type Error = Infallible;

    fn possible_actions(&self) -> Result<Vec<Candidate<S, A>>, Infallible> {
        match self.never {}
    }

    fn tick(&mut self) -> Result<(), Infallible> {
        match self.never {}
    }

    fn current_state(&self) -> Result<S, Infallible> {
        match self.never {}
    }
}

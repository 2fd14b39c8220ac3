//! Solver port - 意思決定・価値推定の抽象化
//!
//! 手書きのモックでも関数近似器でも、この二つのメソッドさえあれば
//! Agent からは区別できません。

use crate::domain::Candidate;

/// Solver は候補の順位付けと自己修正を行う
///
/// # 契約
/// - `evaluate()`: 与えられた候補からちょうど一つを選ぶ。選び方（greedy / 探索）は実装次第
/// - `correct()`: 内部推定を一単位だけ修正する。Agent からは何も渡さない
pub trait Solver<S, A> {
    type Error: std::error::Error + Send + Sync + 'static;

    fn evaluate(&mut self, candidates: Vec<Candidate<S, A>>) -> Result<Candidate<S, A>, Self::Error>;

    fn correct(&mut self) -> Result<(), Self::Error>;
}

impl<S, A, T: Solver<S, A> + ?Sized> Solver<S, A> for &mut T {
    type Error = T::Error;

    fn evaluate(&mut self, candidates: Vec<Candidate<S, A>>) -> Result<Candidate<S, A>, Self::Error> {
        (**self).evaluate(candidates)
    }

    fn correct(&mut self) -> Result<(), Self::Error> {
        (**self).correct()
    }
}

impl<S, A, T: Solver<S, A> + ?Sized> Solver<S, A> for Box<T> {
    type Error = T::Error;

    fn evaluate(&mut self, candidates: Vec<Candidate<S, A>>) -> Result<Candidate<S, A>, Self::Error> {
        (**self).evaluate(candidates)
    }

    fn correct(&mut self) -> Result<(), Self::Error> {
        (**self).correct()
    }
}

//! Problem port - 環境の抽象化
//!
//! Problem は Agent が操作する環境です。
//! Agent は具体的な型を知らず、この trait だけを通して環境に触れます。

use crate::domain::Candidate;

/// Problem は次の一手の列挙・一歩の前進・現在状態の取得を提供
///
/// # 契約
/// - `possible_actions()`: 純粋な問い合わせ。空の列も許される
/// - `tick()`: 内部状態を一歩進める（副作用あり、戻り値なし）
/// - `current_state()`: 直近の `tick()` を反映した状態を返す
///
/// Agent はどの呼び出しにも検証を挟まず、エラーはそのまま呼び出し元へ返す。
pub trait Problem {
    type State;
    type Action;
    type Error: std::error::Error + Send + Sync + 'static;

    fn possible_actions(&self) -> Result<Vec<Candidate<Self::State, Self::Action>>, Self::Error>;

    fn tick(&mut self) -> Result<(), Self::Error>;

    fn current_state(&self) -> Result<Self::State, Self::Error>;
}

impl<P: Problem + ?Sized> Problem for &mut P {
    type State = P::State;
    type Action = P::Action;
    type Error = P::Error;

    fn possible_actions(&self) -> Result<Vec<Candidate<Self::State, Self::Action>>, Self::Error> {
        (**self).possible_actions()
    }

    fn tick(&mut self) -> Result<(), Self::Error> {
        (**self).tick()
    }

    fn current_state(&self) -> Result<Self::State, Self::Error> {
        (**self).current_state()
    }
}

impl<P: Problem + ?Sized> Problem for Box<P> {
    type State = P::State;
    type Action = P::Action;
    type Error = P::Error;

    fn possible_actions(&self) -> Result<Vec<Candidate<Self::State, Self::Action>>, Self::Error> {
        (**self).possible_actions()
    }

    fn tick(&mut self) -> Result<(), Self::Error> {
        (**self).tick()
    }

    fn current_state(&self) -> Result<Self::State, Self::Error> {
        (**self).current_state()
    }
}

//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **Unwired** / **Detached**: collaborator 不在を表すマーカー型
//! - **FunctionApproximator**: 線形価値関数の Solver
//! - **LineWorld**: 一次元の Problem（デモ用）

pub mod unwired;
pub mod function_approximator;
pub mod line_world;

pub use self::unwired::{Detached, Unwired};
pub use self::function_approximator::{FunctionApproximator, SolverError, ValueFunction};
pub use self::line_world::{Direction, LineWorld, LineWorldError, Position};

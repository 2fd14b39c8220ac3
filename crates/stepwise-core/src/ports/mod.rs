//! Ports - 抽象化レイヤー
//!
//! Agent が依存する外部 collaborator のインターフェースを定義します。
//! 具体的な環境・推定器は impls（またはクレート利用者）が実装します。
//!
//! - Problem / Solver: Agent のプロトコルそのもの
//! - Clock / IdGenerator: Runner のレポートを決定的にするため

pub mod problem;
pub mod solver;
pub mod clock;
pub mod id_generator;

pub use self::problem::Problem;
pub use self::solver::Solver;
pub use self::clock::{Clock, SystemClock, FixedClock};
pub use self::id_generator::{IdGenerator, UlidGenerator};

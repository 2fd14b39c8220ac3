//! App - アプリケーション層
//!
//! ports を組み合わせてアプリケーションロジックを実装します。
//!
//! # 主要コンポーネント
//! - **Agent**: Problem と Solver を束ねるプロトコルの本体
//! - **AgentBuilder**: Agent の構築とワイヤリング（Fail-fast 検証つき）
//! - **Runner**: RunSpec に従った step / reevaluate のループ

pub mod agent;
pub mod builder;
pub mod runner;

pub use self::agent::Agent;
pub use self::builder::{AgentBuilder, BuildError};
pub use self::runner::Runner;

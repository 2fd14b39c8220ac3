//! stepwise-core
//!
//! Core building blocks for a minimal decision-making agent.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（candidate, history, errors, ids, spec, report）
//! - **ports**: 抽象化レイヤー（Problem, Solver, Clock, IdGenerator）
//! - **app**: アプリケーションロジック（Agent, AgentBuilder, Runner）
//! - **impls**: 実装（Unwired, Detached, FunctionApproximator, LineWorld）

pub mod domain;
pub mod ports;
pub mod app;
pub mod impls;

pub use app::{Agent, AgentBuilder, BuildError, Runner};
pub use domain::{AgentError, AgentResult, Candidate, Collaborator, History, HistoryEntry};
pub use ports::{Problem, Solver};

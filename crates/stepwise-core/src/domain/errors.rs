//! Errors - エラー型と分類
//!
//! Agent は collaborator の失敗を翻訳しない。
//! Problem / Solver が返したエラーはそのまま（transparent に）呼び出し元へ届く。

use std::fmt;

use serde::{Deserialize, Serialize};

/// 型消去された collaborator エラー
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type AgentResult<T> = Result<T, AgentError>;

/// Collaborator は Agent が依存する二つの役割
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collaborator {
    Problem,
    Solver,
}

impl fmt::Display for Collaborator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collaborator::Problem => f.write_str("problem"),
            Collaborator::Solver => f.write_str("solver"),
        }
    }
}

/// AgentError は Agent 操作のエラー
///
/// # 分類
/// - MissingCollaborator: 必要な collaborator が配線されていない（初回使用時に検出）
/// - Problem: Problem が返したエラー（メッセージ・source はそのまま）
/// - Solver: Solver が返したエラー（メッセージ・source はそのまま）
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("no {0} is wired into this agent")]
    MissingCollaborator(Collaborator),

    #[error(transparent)]
    Problem(BoxError),

    #[error(transparent)]
    Solver(BoxError),
}

impl AgentError {
    pub(crate) fn problem<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Problem(Box::new(err))
    }

    pub(crate) fn solver<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Solver(Box::new(err))
    }

    /// どの collaborator に起因するエラーか
    pub fn collaborator(&self) -> Collaborator {
        match self {
            AgentError::MissingCollaborator(c) => *c,
            AgentError::Problem(_) => Collaborator::Problem,
            AgentError::Solver(_) => Collaborator::Solver,
        }
    }

    /// Collaborator が返した元のエラーを取り出す
    pub fn downcast_ref<E: std::error::Error + 'static>(&self) -> Option<&E> {
        match self {
            AgentError::MissingCollaborator(_) => None,
            AgentError::Problem(err) | AgentError::Solver(err) => err.downcast_ref::<E>(),
        }
    }
}

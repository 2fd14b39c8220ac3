//! LineWorld - 一次元の環境（デモ・結合テスト用の Problem 実装）
//!
//! 位置は `[min, max]` の整数。Problem port は行動を受け取らないので、
//! `tick()` は自律的に `drift` だけ進み、範囲外に出たら反対側へ回り込む。

use std::convert::Infallible;

use serde::{Deserialize, Serialize};

use crate::domain::Candidate;
use crate::ports::Problem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Left,
    Right,
}

#[derive(Debug, thiserror::Error)]
pub enum LineWorldError {
    #[error("empty range: min={min} > max={max}")]
    EmptyRange { min: i64, max: i64 },
}

#[derive(Debug, Clone)]
pub struct LineWorld {
    min: i64,
    max: i64,
    drift: i64,
    position: Position,
}

impl LineWorld {
    /// `min` から始まる LineWorld を作る
    pub fn new(min: i64, max: i64) -> Result<Self, LineWorldError> {
        if min > max {
            return Err(LineWorldError::EmptyRange { min, max });
        }
        Ok(Self {
            min,
            max,
            drift: 1,
            position: Position { x: min },
        })
    }

    /// 開始位置を指定（範囲外は端に丸める）
    pub fn starting_at(mut self, x: i64) -> Self {
        self.position = Position {
            x: x.clamp(self.min, self.max),
        };
        self
    }

    pub fn with_drift(mut self, drift: i64) -> Self {
        self.drift = drift;
        self
    }

    pub fn position(&self) -> Position {
        self.position
    }

    // span は最大 2^64 なので i128 なら溢れない。結果は [min, max] に収まる
    fn wrap(&self, x: i128) -> i64 {
        let min = i128::from(self.min);
        let span = i128::from(self.max) - min + 1;
        (min + (x - min).rem_euclid(span)) as i64
    }
}

impl Problem for LineWorld {
    type State = Position;
    type Action = Direction;
    type Error = Infallible;

    fn possible_actions(&self) -> Result<Vec<Candidate<Position, Direction>>, Infallible> {
        let x = self.position.x;
        let mut candidates = Vec::with_capacity(2);
        if x > self.min {
            candidates.push(Candidate::new(Position { x: x - 1 }, Direction::Left));
        }
        if x < self.max {
            candidates.push(Candidate::new(Position { x: x + 1 }, Direction::Right));
        }
        Ok(candidates)
    }

    fn tick(&mut self) -> Result<(), Infallible> {
        self.position.x = self.wrap(i128::from(self.position.x) + i128::from(self.drift));
        Ok(())
    }

    fn current_state(&self) -> Result<Position, Infallible> {
        Ok(self.position)
    }
}

//! HandleGenerator port - ファイルハンドルの生成
//!
//! # 実装
//! - **UlidGenerator**: ULID ベース（時刻でソート可能、調整不要）

use ulid::Ulid;

use crate::ports::Clock;

/// Opaque, unique handles for registered files.
pub trait HandleGenerator: Send + Sync {
    fn generate(&self) -> Ulid;
}

/// UlidGenerator は Clock の時刻をタイムスタンプ部に使います。
/// FixedClock と組み合わせると、タイムスタンプ部だけが決定的になります。
pub struct UlidGenerator<C> {
    clock: C,
}

impl<C: Clock> UlidGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> HandleGenerator for UlidGenerator<C> {
    fn generate(&self) -> Ulid {
        let timestamp_ms = self.clock.now().timestamp_millis() as u64;
        Ulid::from_parts(timestamp_ms, rand::random())
    }
}

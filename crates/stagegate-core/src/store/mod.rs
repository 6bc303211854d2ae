//! Store - 可変状態（完了記録・タスク詳細・営業ステージ）と、その上の評価器
//!
//! ここにある型はすべて同期的で永続化を知りません。
//! 読み込みと書き込みは app 層が `KeyValueStore` を使って行います。

pub mod completion;
pub mod detail;
pub mod sales;
pub mod unlock;

pub use self::completion::CompletionStore;
pub use self::detail::TaskDetailStore;
pub use self::sales::SalesStageTracker;
pub use self::unlock::UnlockEvaluator;

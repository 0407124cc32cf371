//! ブログのJSONフィードと投稿統計からREADMEを再生成するライブラリ
//!
//! 取得 → 解析 → タグ選択 → テンプレート置換 → 書き出し を一度だけ順に実行する。

pub mod app;
pub mod domain;
pub mod infra;
pub mod types;

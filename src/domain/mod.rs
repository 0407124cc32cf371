//! ドメイン層
//!
//! - フィード: 最新記事の取得
//! - 投稿統計: 総語数の取得と整形
//! - タグ: 文中で使うタグの選択と整形
//! - テンプレート: プレースホルダの置換とREADMEの入出力

pub mod feed;
pub mod stats;
pub mod tag;
pub mod template;

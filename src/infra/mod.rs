//! インフラストラクチャ層
//!
//! HTTP通信、JSON解析、ファイル入出力など外部とのやり取りを担当します。

pub mod api;
pub mod parser;
pub mod storage;

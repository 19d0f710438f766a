//! # 态密度输出模块
//!
//! 提供态密度数据的导出与绘图功能。
//!
//! ## 子模块
//! - `export`: 数据导出 (CSV)
//! - `plot`: 图表生成 (PNG/SVG)
//!
//! ## 依赖关系
//! - 被 `commands/dos.rs` 使用
//! - 使用 `models/dos.rs`

pub mod export;
pub mod plot;

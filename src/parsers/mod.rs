//! # 解析器模块
//!
//! 提供行式文本输出格式的解析器。二进制波函数解码在 `wavecar/`。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: doscar

pub mod doscar;

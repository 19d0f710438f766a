//! # WAVECAR 解码模块
//!
//! 解码平面波 DFT 程序写出的二进制波函数文件。文件按固定长度记录
//! 组织，头字段以 f64 编码，平面波系数为单精度复数；系数不携带
//! 倒格矢指标，须按写出端的隐式枚举顺序重推。
//!
//! ## 子模块
//! - `records`: 定长记录访问器
//! - `geometry`: 动能与包围盒运算
//! - `gvectors`: G 矢量里程计与逐系数查找
//! - `decoder`: 装配完整波函数的解码入口
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型

pub mod decoder;
pub mod geometry;
pub mod gvectors;
pub mod records;

pub use decoder::{decode, decode_file, read_header, WavecarHeader, SUPPORTED_FORMAT_TAG};

//! # coeffs 子命令 CLI 定义
//!
//! 导出单条能带的平面波系数及其 G 矢量指标。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/coeffs.rs`

use crate::cli::CenteringArg;
use clap::Args;
use std::path::PathBuf;

/// coeffs 子命令参数
#[derive(Args, Debug)]
pub struct CoeffsArgs {
    /// Path to the WAVECAR file
    pub input: PathBuf,

    /// Spin channel index (0-based)
    #[arg(long, default_value_t = 0)]
    pub spin: usize,

    /// K-point index (0-based)
    #[arg(long, default_value_t = 0)]
    pub kpoint: usize,

    /// Band index (0-based)
    #[arg(long, default_value_t = 0)]
    pub band: usize,

    /// Output CSV path
    #[arg(short, long, default_value = "coeffs.csv")]
    pub output: PathBuf,

    /// Lattice centering tag recorded on the decoded lattice
    #[arg(long, value_enum, default_value_t = CenteringArg::Primitive)]
    pub centering: CenteringArg,
}

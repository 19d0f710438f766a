//! # info 子命令 CLI 定义
//!
//! WAVECAR 文件摘要。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/info.rs`

use crate::cli::CenteringArg;
use clap::Args;
use std::path::PathBuf;

/// info 子命令参数
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Path to the WAVECAR file
    pub input: PathBuf,

    /// Lattice centering tag recorded on the decoded lattice
    #[arg(long, value_enum, default_value_t = CenteringArg::Primitive)]
    pub centering: CenteringArg,

    /// Also print the band table of one k-point
    #[arg(long, default_value_t = false)]
    pub bands: bool,

    /// K-point index for the band table (0-based)
    #[arg(long, default_value_t = 0)]
    pub kpoint: usize,
}

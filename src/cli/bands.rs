//! # bands 子命令 CLI 定义
//!
//! 导出能带能量与占据数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/bands.rs`

use crate::cli::CenteringArg;
use clap::Args;
use std::path::PathBuf;

/// bands 子命令参数
#[derive(Args, Debug)]
pub struct BandsArgs {
    /// Path to the WAVECAR file
    pub input: PathBuf,

    /// Output CSV path
    #[arg(short, long, default_value = "bands.csv")]
    pub output: PathBuf,

    /// Lattice centering tag recorded on the decoded lattice
    #[arg(long, value_enum, default_value_t = CenteringArg::Primitive)]
    pub centering: CenteringArg,

    /// Skip the terminal table, only write CSV
    #[arg(long, default_value_t = false)]
    pub no_table: bool,
}

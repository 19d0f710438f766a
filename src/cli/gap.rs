//! # gap 子命令 CLI 定义
//!
//! 由占据数提取带隙，支持单文件和批量目录扫描。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/gap.rs`

use crate::cli::CenteringArg;
use clap::Args;
use std::path::PathBuf;

/// gap 子命令参数
#[derive(Args, Debug)]
pub struct GapArgs {
    /// Input: a WAVECAR file, or a directory to scan for WAVECAR files
    pub input: PathBuf,

    /// Glob pattern for WAVECAR discovery in batch mode (comma-separated)
    #[arg(long, default_value = "WAVECAR*")]
    pub pattern: String,

    /// Recurse into subdirectories (batch mode)
    #[arg(long, default_value_t = false)]
    pub recursive: bool,

    /// Number of parallel jobs (0 = auto, batch mode only)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Occupancy threshold separating valence from conduction bands
    #[arg(long, default_value_t = 0.5)]
    pub occ_threshold: f64,

    /// Number of top structures to print in the ranking (batch mode)
    #[arg(long, default_value_t = 10)]
    pub top_n: usize,

    /// Filename for the CSV output (batch mode)
    #[arg(long)]
    pub output_csv: Option<PathBuf>,

    /// Lattice centering tag recorded on the decoded lattice
    #[arg(long, value_enum, default_value_t = CenteringArg::Primitive)]
    pub centering: CenteringArg,
}

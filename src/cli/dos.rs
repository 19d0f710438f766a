//! # dos 子命令 CLI 定义
//!
//! DOSCAR 态密度导出与绘图。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/dos.rs`

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 态密度输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum DosOutputFormat {
    /// PNG image
    Png,
    /// SVG vector image
    Svg,
    /// CSV data file
    Csv,
}

impl std::fmt::Display for DosOutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DosOutputFormat::Png => write!(f, "png"),
            DosOutputFormat::Svg => write!(f, "svg"),
            DosOutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// dos 子命令参数
#[derive(Args, Debug)]
pub struct DosArgs {
    /// Path to the DOSCAR file
    pub input: PathBuf,

    /// Output file path
    #[arg(short, long, default_value = "dos.png")]
    pub output: PathBuf,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<DosOutputFormat>,

    /// Plot energies relative to the Fermi level
    #[arg(long, default_value_t = false)]
    pub relative: bool,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Title for the plot (default: system name from the file)
    #[arg(long)]
    pub title: Option<String>,
}

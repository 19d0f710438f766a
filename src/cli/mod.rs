//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `info`: WAVECAR 文件摘要
//! - `bands`: 导出能带能量与占据数
//! - `coeffs`: 导出单条能带的平面波系数
//! - `gap`: 带隙提取（单文件或批量目录）
//! - `dos`: DOSCAR 态密度导出与绘图
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: info, bands, coeffs, gap, dos

pub mod bands;
pub mod coeffs;
pub mod dos;
pub mod gap;
pub mod info;

use crate::models::LatticeCentering;
use clap::{Parser, Subcommand, ValueEnum};

/// Wavekit - VASP 波函数解码与分析工具箱
#[derive(Parser)]
#[command(name = "wavekit")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "A VASP wavefunction (WAVECAR) decoding and analysis toolkit", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Show a summary of a WAVECAR file (lattice, cutoff, k-points, bands)
    Info(info::InfoArgs),

    /// Export band energies and occupancies to a table and CSV
    Bands(bands::BandsArgs),

    /// Dump the plane-wave coefficients of one band with their G-vector indices
    Coeffs(coeffs::CoeffsArgs),

    /// Extract band gaps from occupancies (single file or batch directory scan)
    Gap(gap::GapArgs),

    /// Parse a DOSCAR file and export or plot the density of states
    Dos(dos::DosArgs),
}

/// 晶格居中标签参数
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum CenteringArg {
    /// Primitive cell
    #[default]
    Primitive,
    /// Conventional cell
    Conventional,
}

impl From<CenteringArg> for LatticeCentering {
    fn from(arg: CenteringArg) -> Self {
        match arg {
            CenteringArg::Primitive => LatticeCentering::Primitive,
            CenteringArg::Conventional => LatticeCentering::Conventional,
        }
    }
}

impl std::fmt::Display for CenteringArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CenteringArg::Primitive => write!(f, "primitive"),
            CenteringArg::Conventional => write!(f, "conventional"),
        }
    }
}

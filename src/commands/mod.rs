//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `wavecar/`, `parsers/`, `models/`, `utils/`
//! - 子模块: info, bands, coeffs, gap, dos

pub mod bands;
pub mod coeffs;
pub mod dos;
pub mod gap;
pub mod info;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Info(args) => info::execute(args),
        Commands::Bands(args) => bands::execute(args),
        Commands::Coeffs(args) => coeffs::execute(args),
        Commands::Gap(args) => gap::execute(args),
        Commands::Dos(args) => dos::execute(args),
    }
}

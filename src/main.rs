//! # Wavekit - VASP 波函数解码与分析工具箱
//!
//! 解码平面波 DFT 程序写出的二进制 WAVECAR 文件，恢复平面波系数、
//! 能带能量、占据数、k 点与晶格几何，并提供配套的分析导出命令。
//!
//! ## 子命令
//! - `info`   - WAVECAR 文件摘要
//! - `bands`  - 导出能带能量与占据数
//! - `coeffs` - 导出单条能带的平面波系数
//! - `gap`    - 带隙提取（单文件或批量）
//! - `dos`    - DOSCAR 态密度导出与绘图
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── wavecar/   (WAVECAR 二进制解码核心)
//!   │     ├── parsers/   (文本格式解析器)
//!   │     ├── dos/       (态密度导出与绘图)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod dos;
mod error;
mod models;
mod parsers;
mod utils;
mod wavecar;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}

//! # 美化输出工具
//!
//! 提供统一的终端输出样式。
//!
//! ## 依赖关系
//! - 被所有 `commands/` 模块使用
//! - 使用 `colored` 与 `console` crate

use colored::Colorize;
use console::Term;

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印键值字段（info 摘要用）
pub fn print_field(label: &str, value: &str) {
    println!("  {:<24} {}", format!("{}:", label).bold(), value);
}

/// 分隔线宽度：跟随终端宽度，限制在 40-80 列
fn rule_width() -> usize {
    let (_, cols) = Term::stdout().size();
    (cols as usize).clamp(40, 80)
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(rule_width());
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 打印分隔线
pub fn print_separator() {
    println!("{}", "─".repeat(rule_width()).dimmed());
}

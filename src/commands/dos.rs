//! # dos 子命令实现
//!
//! 解析 DOSCAR 并导出 CSV 或绘制态密度图。
//!
//! ## 依赖关系
//! - 使用 `cli/dos.rs` 定义的参数
//! - 使用 `parsers/doscar.rs`
//! - 使用 `dos/export.rs`, `dos/plot.rs`
//! - 使用 `utils/output.rs`

use crate::cli::dos::{DosArgs, DosOutputFormat};
use crate::dos::{export, plot};
use crate::error::{Result, WavekitError};
use crate::parsers::doscar;
use crate::utils::output;

/// 执行 dos
pub fn execute(args: DosArgs) -> Result<()> {
    output::print_header("Density of States");

    if !args.input.exists() {
        return Err(WavekitError::FileNotFound {
            path: args.input.display().to_string(),
        });
    }

    let dos = doscar::parse_doscar_file(&args.input)?;

    output::print_field("System", &dos.system_name);
    output::print_field("Fermi energy", &format!("{:.6} eV", dos.fermi_energy));
    output::print_field(
        "Energy grid",
        &format!("{} points in [{:.3}, {:.3}] eV", dos.nedos, dos.emin, dos.emax),
    );
    output::print_field(
        "Spin polarized",
        if dos.is_spin_polarized() { "yes" } else { "no" },
    );

    let format = match args.format {
        Some(f) => f,
        None => detect_format(&args)?,
    };

    match format {
        DosOutputFormat::Csv => {
            export::to_csv(&dos, &args.output)?;
        }
        DosOutputFormat::Png | DosOutputFormat::Svg => {
            let title = args
                .title
                .clone()
                .unwrap_or_else(|| dos.system_name.clone());
            plot::generate_dos_plot(
                &dos,
                &args.output,
                &title,
                args.width,
                args.height,
                args.relative,
                format == DosOutputFormat::Svg,
            )?;
        }
    }

    output::print_success(&format!("Wrote {} output to '{}'", format, args.output.display()));

    Ok(())
}

/// 从输出扩展名推断格式
fn detect_format(args: &DosArgs) -> Result<DosOutputFormat> {
    let ext = args
        .output
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "png" => Ok(DosOutputFormat::Png),
        "svg" => Ok(DosOutputFormat::Svg),
        "csv" => Ok(DosOutputFormat::Csv),
        _ => Err(WavekitError::InvalidArgument(format!(
            "Cannot determine output format for '{}'; use --format",
            args.output.display()
        ))),
    }
}

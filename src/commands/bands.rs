//! # bands 子命令实现
//!
//! 解码 WAVECAR，导出全部 (自旋, k 点, 能带) 的能量与占据数。
//!
//! ## 依赖关系
//! - 使用 `cli/bands.rs` 定义的参数
//! - 使用 `wavecar/decoder.rs`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::cli::bands::BandsArgs;
use crate::error::{Result, WavekitError};
use crate::utils::{output, progress};
use crate::wavecar;

use serde::Serialize;
use tabled::{Table, Tabled};

/// CSV 导出行
#[derive(Debug, Serialize)]
struct BandCsvRow {
    spin: usize,
    kpoint: usize,
    kx: f64,
    ky: f64,
    kz: f64,
    band: usize,
    energy_ev: f64,
    occupancy: f64,
}

/// 终端表格行（首个 k 点）
#[derive(Debug, Tabled)]
struct BandTableRow {
    #[tabled(rename = "Spin")]
    spin: usize,
    #[tabled(rename = "Band")]
    band: usize,
    #[tabled(rename = "Energy (eV)")]
    energy: String,
    #[tabled(rename = "Occupancy")]
    occupancy: String,
}

/// 执行 bands
pub fn execute(args: BandsArgs) -> Result<()> {
    output::print_header("Band Energies");

    if !args.input.exists() {
        return Err(WavekitError::FileNotFound {
            path: args.input.display().to_string(),
        });
    }

    let spinner = progress::create_spinner(&format!("Decoding {}", args.input.display()));
    let wf = wavecar::decode_file(&args.input, Some(args.centering.into()))?;
    spinner.finish_and_clear();

    let mut wtr = csv::Writer::from_path(&args.output).map_err(WavekitError::CsvError)?;
    let mut n_rows = 0usize;

    for (ispin, spin) in wf.spins.iter().enumerate() {
        for (ik, kpt) in spin.kpoints.iter().enumerate() {
            for (ib, band) in kpt.bands.iter().enumerate() {
                wtr.serialize(BandCsvRow {
                    spin: ispin,
                    kpoint: ik,
                    kx: kpt.kpoint[0],
                    ky: kpt.kpoint[1],
                    kz: kpt.kpoint[2],
                    band: ib,
                    energy_ev: band.energy,
                    occupancy: band.occupancy,
                })
                .map_err(WavekitError::CsvError)?;
                n_rows += 1;
            }
        }
    }

    wtr.flush().map_err(|e| WavekitError::FileWriteError {
        path: args.output.display().to_string(),
        source: e,
    })?;

    if !args.no_table {
        // 终端只展示首个 k 点，完整数据看 CSV
        let rows: Vec<BandTableRow> = wf
            .spins
            .iter()
            .enumerate()
            .filter_map(|(ispin, spin)| spin.kpoints.first().map(|kpt| (ispin, kpt)))
            .flat_map(|(ispin, kpt)| {
                kpt.bands.iter().enumerate().map(move |(ib, band)| BandTableRow {
                    spin: ispin,
                    band: ib,
                    energy: format!("{:.6}", band.energy),
                    occupancy: format!("{:.4}", band.occupancy),
                })
            })
            .collect();

        if !rows.is_empty() {
            output::print_info("Bands at the first k-point:");
            println!("{}", Table::new(rows));
            println!();
        }
    }

    output::print_success(&format!(
        "Wrote {} band entries to '{}'",
        n_rows,
        args.output.display()
    ));

    Ok(())
}

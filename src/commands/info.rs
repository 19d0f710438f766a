//! # info 子命令实现
//!
//! 解码 WAVECAR 并打印结构化摘要。
//!
//! ## 依赖关系
//! - 使用 `cli/info.rs` 定义的参数
//! - 使用 `wavecar/decoder.rs`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::cli::info::InfoArgs;
use crate::error::{Result, WavekitError};
use crate::utils::{output, progress};
use crate::wavecar;

use tabled::{Table, Tabled};

/// k 点摘要行
#[derive(Debug, Tabled)]
struct KPointRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "kx")]
    kx: String,
    #[tabled(rename = "ky")]
    ky: String,
    #[tabled(rename = "kz")]
    kz: String,
    #[tabled(rename = "Plane waves")]
    n_plane_waves: usize,
}

/// 能带表行
#[derive(Debug, Tabled)]
struct BandRow {
    #[tabled(rename = "Band")]
    band: usize,
    #[tabled(rename = "Energy (eV)")]
    energy: String,
    #[tabled(rename = "Occupancy")]
    occupancy: String,
}

/// 执行 info
pub fn execute(args: InfoArgs) -> Result<()> {
    output::print_header("WAVECAR Summary");

    if !args.input.exists() {
        return Err(WavekitError::FileNotFound {
            path: args.input.display().to_string(),
        });
    }

    let spinner = progress::create_spinner(&format!("Decoding {}", args.input.display()));
    let wf = wavecar::decode_file(&args.input, Some(args.centering.into()))?;
    spinner.finish_and_clear();

    let (a, b, c, alpha, beta, gamma) = wf.real_lattice.parameters();

    output::print_field("File", &args.input.display().to_string());
    output::print_field("Spin channels", &wf.n_spins().to_string());
    output::print_field("K-points", &wf.n_kpoints().to_string());
    output::print_field("Bands per k-point", &wf.n_bands().to_string());
    output::print_field("Energy cutoff", &format!("{:.3} eV", wf.cutoff_ev));
    output::print_field(
        "Lattice a, b, c",
        &format!("{:.6}  {:.6}  {:.6} Å", a, b, c),
    );
    output::print_field(
        "Lattice angles",
        &format!("{:.3}  {:.3}  {:.3} °", alpha, beta, gamma),
    );
    output::print_field(
        "Cell volume",
        &format!("{:.4} Å³", wf.real_lattice.volume().abs()),
    );
    output::print_field("Centering", &wf.centering.to_string());

    if let Some(edges) = wf.band_edges(0.5) {
        if edges.is_metallic() {
            output::print_field("Band gap", "metallic (bands overlap)");
        } else {
            output::print_field(
                "Band gap",
                &format!("{:.4} eV (VBM {:.4}, CBM {:.4})", edges.gap(), edges.vbm, edges.cbm),
            );
        }
    }

    if let Some(spin) = wf.spins.first() {
        println!();
        let rows: Vec<KPointRow> = spin
            .kpoints
            .iter()
            .enumerate()
            .map(|(i, kpt)| KPointRow {
                index: i,
                kx: format!("{:.6}", kpt.kpoint[0]),
                ky: format!("{:.6}", kpt.kpoint[1]),
                kz: format!("{:.6}", kpt.kpoint[2]),
                n_plane_waves: kpt.n_plane_waves,
            })
            .collect();
        println!("{}", Table::new(rows));
    }

    if args.bands {
        let spin = wf
            .spins
            .first()
            .ok_or_else(|| WavekitError::Other("Empty wavefunction".to_string()))?;
        let kpt = spin.kpoints.get(args.kpoint).ok_or_else(|| {
            WavekitError::InvalidArgument(format!(
                "K-point index {} out of range (file has {})",
                args.kpoint,
                spin.kpoints.len()
            ))
        })?;

        println!();
        output::print_info(&format!("Bands at k-point {}", args.kpoint));
        let rows: Vec<BandRow> = kpt
            .bands
            .iter()
            .enumerate()
            .map(|(i, band)| BandRow {
                band: i,
                energy: format!("{:.6}", band.energy),
                occupancy: format!("{:.4}", band.occupancy),
            })
            .collect();
        println!("{}", Table::new(rows));
    }

    Ok(())
}

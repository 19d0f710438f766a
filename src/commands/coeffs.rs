//! # coeffs 子命令实现
//!
//! 导出指定 (自旋, k 点, 能带) 的平面波系数：每行一个系数，带重推的
//! G 矢量指标、复振幅和模方。
//!
//! ## 依赖关系
//! - 使用 `cli/coeffs.rs` 定义的参数
//! - 使用 `wavecar/decoder.rs`, `wavecar/geometry.rs`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::cli::coeffs::CoeffsArgs;
use crate::error::{Result, WavekitError};
use crate::utils::{output, progress};
use crate::wavecar::{self, geometry};

use serde::Serialize;

/// CSV 导出行
#[derive(Debug, Serialize)]
struct CoeffCsvRow {
    index: usize,
    h: i32,
    k: i32,
    l: i32,
    kinetic_energy_ev: f64,
    re: f32,
    im: f32,
    norm_sq: f32,
}

/// 执行 coeffs
pub fn execute(args: CoeffsArgs) -> Result<()> {
    output::print_header("Plane-Wave Coefficients");

    if !args.input.exists() {
        return Err(WavekitError::FileNotFound {
            path: args.input.display().to_string(),
        });
    }

    let spinner = progress::create_spinner(&format!("Decoding {}", args.input.display()));
    let wf = wavecar::decode_file(&args.input, Some(args.centering.into()))?;
    spinner.finish_and_clear();

    let spin = wf.spins.get(args.spin).ok_or_else(|| {
        WavekitError::InvalidArgument(format!(
            "Spin index {} out of range (file has {})",
            args.spin,
            wf.n_spins()
        ))
    })?;
    let kpt = spin.kpoints.get(args.kpoint).ok_or_else(|| {
        WavekitError::InvalidArgument(format!(
            "K-point index {} out of range (file has {})",
            args.kpoint,
            spin.kpoints.len()
        ))
    })?;
    let band = kpt.bands.get(args.band).ok_or_else(|| {
        WavekitError::InvalidArgument(format!(
            "Band index {} out of range (k-point has {})",
            args.band,
            kpt.bands.len()
        ))
    })?;

    output::print_field(
        "Selection",
        &format!("spin {}, k-point {}, band {}", args.spin, args.kpoint, args.band),
    );
    output::print_field(
        "K-point",
        &format!(
            "({:.6}, {:.6}, {:.6})",
            kpt.kpoint[0], kpt.kpoint[1], kpt.kpoint[2]
        ),
    );
    output::print_field("Band energy", &format!("{:.6} eV", band.energy));
    output::print_field("Plane waves", &kpt.n_plane_waves.to_string());

    let mut wtr = csv::Writer::from_path(&args.output).map_err(WavekitError::CsvError)?;

    for (i, coeff) in band.coefficients.iter().enumerate() {
        let ke = geometry::kinetic_energy(
            &kpt.kpoint,
            coeff.hkl.as_array(),
            &wf.reciprocal_lattice,
        );
        wtr.serialize(CoeffCsvRow {
            index: i,
            h: coeff.hkl.h,
            k: coeff.hkl.k,
            l: coeff.hkl.l,
            kinetic_energy_ev: ke,
            re: coeff.value.re,
            im: coeff.value.im,
            norm_sq: coeff.value.norm_sqr(),
        })
        .map_err(WavekitError::CsvError)?;
    }

    wtr.flush().map_err(|e| WavekitError::FileWriteError {
        path: args.output.display().to_string(),
        source: e,
    })?;

    output::print_success(&format!(
        "Wrote {} coefficients to '{}'",
        band.coefficients.len(),
        args.output.display()
    ));

    Ok(())
}

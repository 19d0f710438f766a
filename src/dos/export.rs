//! # 态密度数据导出
//!
//! 导出态密度数据到 CSV 格式。
//!
//! ## 支持格式
//! - CSV: energy, energy-E_F, dos, integrated（自旋极化时上/下分列）
//!
//! ## 依赖关系
//! - 被 `commands/dos.rs` 调用
//! - 使用 `models/dos.rs` 的 DosData 结构
//! - 使用 `csv` 库写入 CSV 文件

use crate::error::{Result, WavekitError};
use crate::models::DosData;

use std::path::Path;

/// 导出态密度为 CSV 格式
pub fn to_csv(dos: &DosData, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path).map_err(WavekitError::CsvError)?;

    let header: Vec<&str> = if dos.is_spin_polarized() {
        vec![
            "energy",
            "energy_minus_ef",
            "dos_up",
            "dos_down",
            "integrated_up",
            "integrated_down",
        ]
    } else {
        vec!["energy", "energy_minus_ef", "dos", "integrated"]
    };
    wtr.write_record(&header).map_err(WavekitError::CsvError)?;

    for i in 0..dos.nedos {
        let mut row = vec![
            format!("{:.6}", dos.energies[i]),
            format!("{:.6}", dos.energies[i] - dos.fermi_energy),
            format!("{:.6}", dos.total[i]),
        ];

        if let (Some(down), Some(int_down)) = (&dos.total_down, &dos.integrated_down) {
            row.push(format!("{:.6}", down[i]));
            row.push(format!("{:.6}", dos.integrated[i]));
            row.push(format!("{:.6}", int_down[i]));
        } else {
            row.push(format!("{:.6}", dos.integrated[i]));
        }

        wtr.write_record(&row).map_err(WavekitError::CsvError)?;
    }

    wtr.flush().map_err(|e| WavekitError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

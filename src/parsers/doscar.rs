//! # VASP DOSCAR 解析器
//!
//! 解析 VASP 输出的 DOSCAR 文本文件，提取总态密度。
//!
//! ## DOSCAR 格式说明
//! ```text
//! natoms natoms 1 ncdij        # 原子数等头信息
//! volume a b c ...             # 晶胞信息
//! POTIM
//! TEBEG
//! System name                  # 体系名称
//! EMAX EMIN NEDOS EFERMI 1.0   # 能量网格与费米能
//! E dos int                    # NEDOS 行（非自旋极化，3 列）
//! E dos_up dos_dn int_up int_dn  # 或自旋极化，5 列
//! ...
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/dos.rs` 使用
//! - 使用 `models/dos.rs`

use crate::error::{Result, WavekitError};
use crate::models::DosData;
use std::fs;
use std::path::Path;

/// 解析 DOSCAR 文件
pub fn parse_doscar_file(path: &Path) -> Result<DosData> {
    let content = fs::read_to_string(path).map_err(|e| WavekitError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_doscar_content(
        &content,
        path.file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("DOSCAR"),
    )
}

/// 从字符串内容解析 DOSCAR 格式
pub fn parse_doscar_content(content: &str, source_name: &str) -> Result<DosData> {
    let lines: Vec<&str> = content.lines().collect();

    if lines.len() < 7 {
        return Err(parse_error(source_name, "File too short"));
    }

    // Line 4: 体系名称
    let system_name = lines[4].trim().to_string();

    // Line 5: EMAX EMIN NEDOS EFERMI
    let grid: Vec<f64> = lines[5]
        .split_whitespace()
        .filter_map(|s| s.parse().ok())
        .collect();
    if grid.len() < 4 {
        return Err(parse_error(
            source_name,
            "Invalid energy grid line (expected EMAX EMIN NEDOS EFERMI)",
        ));
    }

    let emax = grid[0];
    let emin = grid[1];
    let nedos = grid[2] as usize;
    let fermi_energy = grid[3];

    if nedos == 0 || grid[2].fract() != 0.0 {
        return Err(parse_error(
            source_name,
            &format!("Invalid NEDOS value: {}", grid[2]),
        ));
    }

    if lines.len() < 6 + nedos {
        return Err(parse_error(
            source_name,
            &format!(
                "Expected {} DOS rows, found {}",
                nedos,
                lines.len().saturating_sub(6)
            ),
        ));
    }

    // 首行数据决定列数：3 列非极化，5 列自旋极化
    let first_row: Vec<f64> = lines[6]
        .split_whitespace()
        .filter_map(|s| s.parse().ok())
        .collect();
    let spin_polarized = match first_row.len() {
        3 => false,
        5 => true,
        n => {
            return Err(parse_error(
                source_name,
                &format!("Unexpected column count in DOS row: {}", n),
            ))
        }
    };

    let mut energies = Vec::with_capacity(nedos);
    let mut total = Vec::with_capacity(nedos);
    let mut total_down = Vec::new();
    let mut integrated = Vec::with_capacity(nedos);
    let mut integrated_down = Vec::new();

    for (i, line) in lines[6..6 + nedos].iter().enumerate() {
        let fields: Vec<f64> = line
            .split_whitespace()
            .filter_map(|s| s.parse().ok())
            .collect();

        let expected = if spin_polarized { 5 } else { 3 };
        if fields.len() != expected {
            return Err(parse_error(
                source_name,
                &format!("Malformed DOS row at line {}", 7 + i),
            ));
        }

        energies.push(fields[0]);
        if spin_polarized {
            total.push(fields[1]);
            total_down.push(fields[2]);
            integrated.push(fields[3]);
            integrated_down.push(fields[4]);
        } else {
            total.push(fields[1]);
            integrated.push(fields[2]);
        }
    }

    Ok(DosData {
        system_name,
        emax,
        emin,
        nedos,
        fermi_energy,
        energies,
        total,
        total_down: spin_polarized.then_some(total_down),
        integrated,
        integrated_down: spin_polarized.then_some(integrated_down),
    })
}

fn parse_error(path: &str, reason: &str) -> WavekitError {
    WavekitError::ParseError {
        format: "doscar".to_string(),
        path: path.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_doscar_non_spin() {
        let content = r#"   4   4   1   0
  0.1173E+03  0.4046E-09  0.4046E-09  0.4046E-09  0.5000E-15
  1.0000000
  300.0
 Si8
   10.00000000  -10.00000000   4   5.17712906   1.00000000
  -10.000   0.0000   0.0000
   -2.500   1.2000   2.4000
    2.500   0.8000   4.0000
   10.000   0.0000   4.0000
"#;
        let dos = parse_doscar_content(content, "DOSCAR").unwrap();

        assert_eq!(dos.system_name, "Si8");
        assert_eq!(dos.nedos, 4);
        assert!((dos.emax - 10.0).abs() < 1e-9);
        assert!((dos.emin - (-10.0)).abs() < 1e-9);
        assert!((dos.fermi_energy - 5.17712906).abs() < 1e-9);
        assert!(!dos.is_spin_polarized());
        assert_eq!(dos.energies.len(), 4);
        assert!((dos.total[1] - 1.2).abs() < 1e-12);
        assert!((dos.integrated[2] - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_parse_doscar_spin_polarized() {
        let content = r#"   2   2   1   2
  0.1173E+03  0.4046E-09  0.4046E-09  0.4046E-09  0.5000E-15
  1.0000000
  300.0
 Fe2
    8.00000000   -8.00000000   2   1.23400000   1.00000000
   -8.000   0.5000   0.4000   1.0000   0.8000
    8.000   0.1000   0.2000   1.2000   1.1000
"#;
        let dos = parse_doscar_content(content, "DOSCAR").unwrap();

        assert!(dos.is_spin_polarized());
        assert_eq!(dos.nedos, 2);
        assert!((dos.total[0] - 0.5).abs() < 1e-12);
        assert!((dos.total_down.as_ref().unwrap()[0] - 0.4).abs() < 1e-12);
        assert!((dos.integrated[1] - 1.2).abs() < 1e-12);
        assert!((dos.integrated_down.as_ref().unwrap()[1] - 1.1).abs() < 1e-12);
    }

    #[test]
    fn test_parse_doscar_too_short() {
        let content = "1 1 1 0\njunk\n";
        assert!(matches!(
            parse_doscar_content(content, "DOSCAR"),
            Err(WavekitError::ParseError { .. })
        ));
    }

    #[test]
    fn test_parse_doscar_missing_rows() {
        let content = r#"   1   1   1   0
 junk
 junk
 junk
 X
    5.0   -5.0   10   0.0   1.0
   -5.000   0.0000   0.0000
"#;
        match parse_doscar_content(content, "DOSCAR") {
            Err(WavekitError::ParseError { reason, .. }) => {
                assert!(reason.contains("Expected 10 DOS rows"));
            }
            other => panic!("expected ParseError, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_parse_doscar_bad_column_count() {
        let content = r#"   1   1   1   0
 junk
 junk
 junk
 X
    5.0   -5.0   1   0.0   1.0
   -5.000   0.0000
"#;
        match parse_doscar_content(content, "DOSCAR") {
            Err(WavekitError::ParseError { reason, .. }) => {
                assert!(reason.contains("column count"));
            }
            other => panic!("expected ParseError, got {:?}", other.map(|_| ())),
        }
    }
}

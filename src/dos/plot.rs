//! # 态密度图表生成
//!
//! 使用 `plotters` 库生成总态密度图。
//!
//! ## 功能
//! - 总态密度曲线（自旋极化时向下通道画为负值）
//! - 费米能竖直参考线
//! - 支持 PNG 和 SVG 输出
//!
//! ## 依赖关系
//! - 被 `commands/dos.rs` 调用
//! - 使用 `models/dos.rs` 的 DosData 结构
//! - 使用 `plotters` 渲染图表

use crate::error::{Result, WavekitError};
use crate::models::DosData;

use plotters::prelude::*;
use std::path::Path;

/// 生成态密度图
pub fn generate_dos_plot(
    dos: &DosData,
    output_path: &Path,
    title: &str,
    width: u32,
    height: u32,
    relative_to_fermi: bool,
    use_svg: bool,
) -> Result<()> {
    if use_svg {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        draw_dos_chart(&root, dos, title, relative_to_fermi)?;
        root.present()
            .map_err(|e| WavekitError::Other(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        draw_dos_chart(&root, dos, title, relative_to_fermi)?;
        root.present()
            .map_err(|e| WavekitError::Other(e.to_string()))?;
    }
    Ok(())
}

/// 绘制态密度图表
fn draw_dos_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    dos: &DosData,
    title: &str,
    relative_to_fermi: bool,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| WavekitError::Other(format!("{:?}", e)))?;

    let energies = if relative_to_fermi {
        dos.energies_relative_to_fermi()
    } else {
        dos.energies.clone()
    };
    let fermi_x = if relative_to_fermi {
        0.0
    } else {
        dos.fermi_energy
    };

    let x_min = energies.first().copied().unwrap_or(-10.0);
    let x_max = energies.last().copied().unwrap_or(10.0);

    let max_dos = dos
        .total
        .iter()
        .chain(dos.total_down.iter().flatten())
        .cloned()
        .fold(0.0f64, f64::max)
        .max(1e-6);

    let y_min = if dos.is_spin_polarized() {
        -1.1 * max_dos
    } else {
        0.0
    };
    let y_max = 1.1 * max_dos;

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| WavekitError::Other(format!("{:?}", e)))?;

    let x_desc = if relative_to_fermi {
        "E - E_F (eV)"
    } else {
        "Energy (eV)"
    };
    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc("DOS (states/eV)")
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| WavekitError::Other(format!("{:?}", e)))?;

    // 总态密度（自旋向上）
    let line_color = RGBColor(0, 102, 204);
    chart
        .draw_series(LineSeries::new(
            energies.iter().cloned().zip(dos.total.iter().cloned()),
            line_color.stroke_width(2),
        ))
        .map_err(|e| WavekitError::Other(format!("{:?}", e)))?;

    chart
        .draw_series(AreaSeries::new(
            energies.iter().cloned().zip(dos.total.iter().cloned()),
            0.0,
            line_color.mix(0.2),
        ))
        .map_err(|e| WavekitError::Other(format!("{:?}", e)))?;

    // 自旋向下通道画为负值
    if let Some(down) = &dos.total_down {
        let down_color = RGBColor(204, 51, 51);
        chart
            .draw_series(LineSeries::new(
                energies.iter().cloned().zip(down.iter().map(|d| -d)),
                down_color.stroke_width(2),
            ))
            .map_err(|e| WavekitError::Other(format!("{:?}", e)))?;

        chart
            .draw_series(AreaSeries::new(
                energies.iter().cloned().zip(down.iter().map(|d| -d)),
                0.0,
                down_color.mix(0.2),
            ))
            .map_err(|e| WavekitError::Other(format!("{:?}", e)))?;
    }

    // 费米能参考线
    if fermi_x >= x_min && fermi_x <= x_max {
        chart
            .draw_series(LineSeries::new(
                [(fermi_x, y_min), (fermi_x, y_max)],
                BLACK.mix(0.6).stroke_width(1),
            ))
            .map_err(|e| WavekitError::Other(format!("{:?}", e)))?;

        chart
            .draw_series(std::iter::once(Text::new(
                "E_F",
                (fermi_x, y_max * 0.95),
                ("sans-serif", 14).into_font().color(&BLACK),
            )))
            .map_err(|e| WavekitError::Other(format!("{:?}", e)))?;
    }

    Ok(())
}

//! # WAVECAR 解码器
//!
//! 驱动记录访问器、晶格几何与 G 矢量枚举器，把整个文件装配成
//! [`Wavefunction`]。
//!
//! 固定解码顺序：记录 0（记录长度、自旋数、格式标签）→ 记录 1
//! （k 点数、能带数、截断能、3×3 实空间晶格）→ 倒格子与包围盒 →
//! 逐自旋、逐 k 点读头记录（平面波数、k 坐标、能带能量/占据数），
//! 再逐能带读一条系数记录。记录下标在整个解码过程中严格单调 +1
//! 递增。每条能带从盒最小角重置一个新的里程计。
//!
//! 解码要么完整成功，要么以类型化错误失败；失败不返回部分结果。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块调用
//! - 使用 `wavecar/records.rs`, `wavecar/geometry.rs`, `wavecar/gvectors.rs`
//! - 使用 `models/` 数据模型

use crate::error::{Result, WavekitError};
use crate::models::{
    BandState, KPointStates, Lattice, LatticeCentering, PlaneWaveCoefficient, SpinChannel,
    Wavefunction,
};
use crate::wavecar::geometry::bounding_indices;
use crate::wavecar::gvectors::GVectorSearch;
use crate::wavecar::records::{read_record_length, RecordCursor};

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

/// 唯一支持的 WAVECAR 格式标签（单精度系数布局）
pub const SUPPORTED_FORMAT_TAG: f64 = 45200.0;

/// 全局头信息（记录 0 与记录 1）
#[derive(Debug, Clone)]
pub struct WavecarHeader {
    /// 记录长度（字节）
    pub record_length: u64,

    /// 自旋通道数
    pub spin_count: usize,

    /// 格式标签
    pub format_tag: f64,

    /// k 点数
    pub kpoint_count: usize,

    /// 每个 k 点的能带数
    pub band_count: usize,

    /// 平面波动能截断 (eV)
    pub cutoff_ev: f64,

    /// 实空间晶格
    pub real_lattice: Lattice,
}

/// 读取全局头（记录 0 与记录 1），不触碰任何系数记录
pub fn read_header<R: Read + Seek>(stream: &mut R) -> Result<WavecarHeader> {
    let record_length = read_record_length(stream)?;
    let mut cursor = RecordCursor::new(stream, record_length)?;

    // 记录 0: [record_length, spin_count, format_tag]
    cursor.read_usize("record_length")?;
    let spin_count = cursor.read_usize("spin_count")?;
    let format_tag = cursor.read_f64()?;

    if format_tag != SUPPORTED_FORMAT_TAG {
        return Err(WavekitError::UnsupportedFormatTag {
            tag: format_tag,
            expected: SUPPORTED_FORMAT_TAG,
        });
    }

    // 记录 1: [kpoint_count, band_count, energy_cutoff, 3×3 晶格]
    cursor.seek_to(1)?;
    let kpoint_count = cursor.read_usize("kpoint_count")?;
    let band_count = cursor.read_usize("band_count")?;
    let cutoff_ev = cursor.read_f64()?;
    if !cutoff_ev.is_finite() {
        return Err(WavekitError::FieldOutOfRange {
            record: 1,
            field: "energy_cutoff",
            value: cutoff_ev,
        });
    }

    let mut matrix = [[0.0f64; 3]; 3];
    for row in &mut matrix {
        for value in row.iter_mut() {
            *value = cursor.read_f64()?;
        }
    }

    Ok(WavecarHeader {
        record_length,
        spin_count,
        format_tag,
        kpoint_count,
        band_count,
        cutoff_ev,
        real_lattice: Lattice::from_vectors(matrix),
    })
}

/// 从可读可寻址的流解码完整波函数
///
/// 流由调用方持有并负责关闭；解码期间只借用。`centering` 仅作为
/// 元数据记录在结果上，缺省为原胞。
pub fn decode<R: Read + Seek>(
    stream: &mut R,
    centering: Option<LatticeCentering>,
) -> Result<Wavefunction> {
    let header = read_header(stream)?;

    let reciprocal = header.real_lattice.reciprocal()?;
    let half_widths = bounding_indices(&reciprocal, header.cutoff_ev);

    let mut cursor = RecordCursor::new(stream, header.record_length)?;
    let mut record = 2u64;

    let mut spins = Vec::with_capacity(header.spin_count);
    for spin in 0..header.spin_count {
        let mut kpoints = Vec::with_capacity(header.kpoint_count);

        for ik in 0..header.kpoint_count {
            // k 点头记录: [plane_wave_count, kx, ky, kz,
            //             (band_energy, <8 字节空位>, occupancy) × band_count]
            cursor.seek_to(record)?;
            record += 1;

            let n_plane_waves = cursor.read_usize("plane_wave_count")?;
            let kpoint = [cursor.read_f64()?, cursor.read_f64()?, cursor.read_f64()?];

            let mut band_meta = Vec::with_capacity(header.band_count);
            for _ in 0..header.band_count {
                let energy = cursor.read_f64()?;
                cursor.skip_f64()?;
                let occupancy = cursor.read_f64()?;
                band_meta.push((energy, occupancy));
            }

            let mut bands = Vec::with_capacity(header.band_count);
            for (ib, (energy, occupancy)) in band_meta.into_iter().enumerate() {
                cursor.seek_to(record)?;
                record += 1;

                let mut search =
                    GVectorSearch::new(kpoint, header.cutoff_ev, &reciprocal, half_widths);
                let mut coefficients = Vec::with_capacity(n_plane_waves);

                for ic in 0..n_plane_waves {
                    let value = cursor.read_complex32()?;
                    let g = search
                        .next_index()
                        .ok_or(WavekitError::GVectorExhausted {
                            spin,
                            kpoint: ik,
                            band: ib,
                            coefficient: ic,
                        })?;
                    coefficients.push(PlaneWaveCoefficient {
                        hkl: g.into(),
                        value,
                    });
                }

                bands.push(BandState {
                    energy,
                    occupancy,
                    coefficients,
                });
            }

            kpoints.push(KPointStates {
                kpoint,
                n_plane_waves,
                bands,
            });
        }

        spins.push(SpinChannel { kpoints });
    }

    Ok(Wavefunction {
        real_lattice: header.real_lattice,
        centering: centering.unwrap_or_default(),
        reciprocal_lattice: reciprocal,
        cutoff_ev: header.cutoff_ev,
        spins,
    })
}

/// 从文件路径解码的便捷入口
pub fn decode_file(path: &Path, centering: Option<LatticeCentering>) -> Result<Wavefunction> {
    let file = File::open(path).map_err(|e| WavekitError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    let mut reader = BufReader::new(file);
    decode(&mut reader, centering)
}

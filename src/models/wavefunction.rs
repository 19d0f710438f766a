//! # 波函数数据模型
//!
//! 定义从 WAVECAR 解码得到的完整内存结构：倒格子、k 点、能带
//! 以及每条能带的平面波系数列表。
//!
//! 系数按文件内顺序保存为 (HKL 指标, 复振幅) 对，三层显式所有权
//! 容器：自旋通道 → k 点 → 能带。解码完成后所有实体不可变。
//!
//! ## 依赖关系
//! - 被 `wavecar/decoder.rs` 构造
//! - 被 `commands/` 模块消费

use crate::models::{Lattice, LatticeCentering};
use num_complex::Complex32;
use serde::{Deserialize, Serialize};

/// 倒格矢整数指标 (h, k, l)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HklIndex {
    pub h: i32,
    pub k: i32,
    pub l: i32,
}

impl From<[i32; 3]> for HklIndex {
    fn from(v: [i32; 3]) -> Self {
        HklIndex {
            h: v[0],
            k: v[1],
            l: v[2],
        }
    }
}

impl HklIndex {
    pub fn as_array(&self) -> [i32; 3] {
        [self.h, self.k, self.l]
    }
}

impl std::fmt::Display for HklIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.h, self.k, self.l)
    }
}

/// 单个平面波系数
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlaneWaveCoefficient {
    /// 所属倒格矢指标
    pub hkl: HklIndex,
    /// 单精度复振幅
    pub value: Complex32,
}

/// 一条能带：本征能量、占据数与平面波系数
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BandState {
    /// 本征能量 (eV)
    pub energy: f64,

    /// 占据数
    pub occupancy: f64,

    /// 平面波系数，按文件存储顺序
    pub coefficients: Vec<PlaneWaveCoefficient>,
}

/// 一个 k 点及其全部能带
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KPointStates {
    /// k 点坐标（倒格子分数坐标）
    pub kpoint: [f64; 3],

    /// 该 k 点的平面波数
    pub n_plane_waves: usize,

    /// 能带列表
    pub bands: Vec<BandState>,
}

/// 一个自旋通道
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpinChannel {
    pub kpoints: Vec<KPointStates>,
}

/// 能带边缘（由占据数推导）
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BandEdges {
    /// 价带顶 (eV)
    pub vbm: f64,
    /// 导带底 (eV)
    pub cbm: f64,
}

impl BandEdges {
    /// 带隙 (eV)，金属情形返回 0
    pub fn gap(&self) -> f64 {
        (self.cbm - self.vbm).max(0.0)
    }

    /// 价带与导带是否交叠
    pub fn is_metallic(&self) -> bool {
        self.cbm <= self.vbm
    }
}

/// 解码得到的完整波函数
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wavefunction {
    /// 实空间晶格
    pub real_lattice: Lattice,

    /// 晶格居中标签
    pub centering: LatticeCentering,

    /// 倒格子（解码时计算一次）
    pub reciprocal_lattice: Lattice,

    /// 平面波动能截断 (eV)
    pub cutoff_ev: f64,

    /// 自旋通道列表
    pub spins: Vec<SpinChannel>,
}

impl Wavefunction {
    /// 自旋通道数
    pub fn n_spins(&self) -> usize {
        self.spins.len()
    }

    /// k 点数
    pub fn n_kpoints(&self) -> usize {
        self.spins.first().map(|s| s.kpoints.len()).unwrap_or(0)
    }

    /// 每个 k 点的能带数
    pub fn n_bands(&self) -> usize {
        self.spins
            .first()
            .and_then(|s| s.kpoints.first())
            .map(|k| k.bands.len())
            .unwrap_or(0)
    }

    /// 由占据数推导能带边缘
    ///
    /// 占据数大于 `occ_threshold` 的能带计入价带，否则计入导带。
    /// 任一侧为空（全占据或全空）时返回 None。
    pub fn band_edges(&self, occ_threshold: f64) -> Option<BandEdges> {
        let mut vbm: Option<f64> = None;
        let mut cbm: Option<f64> = None;

        for spin in &self.spins {
            for kpt in &spin.kpoints {
                for band in &kpt.bands {
                    if band.occupancy > occ_threshold {
                        vbm = Some(vbm.map_or(band.energy, |v: f64| v.max(band.energy)));
                    } else {
                        cbm = Some(cbm.map_or(band.energy, |v: f64| v.min(band.energy)));
                    }
                }
            }
        }

        match (vbm, cbm) {
            (Some(vbm), Some(cbm)) => Some(BandEdges { vbm, cbm }),
            _ => None,
        }
    }
}

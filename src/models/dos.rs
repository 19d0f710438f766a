//! # 态密度数据模型
//!
//! 存储从 DOSCAR 文本文件解析出的总态密度数据。
//!
//! 自旋极化计算的每个能量点给出上/下两列态密度，非极化只有一列；
//! 两种情形统一到同一结构，自旋向下列用 Option 表示。
//!
//! ## 依赖关系
//! - 被 `parsers/doscar.rs` 构造
//! - 被 `dos/` 与 `commands/dos.rs` 消费

use serde::{Deserialize, Serialize};

/// 态密度数据
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DosData {
    /// 体系名称（DOSCAR 第 5 行注释）
    pub system_name: String,

    /// 能量网格上限 (eV)
    pub emax: f64,

    /// 能量网格下限 (eV)
    pub emin: f64,

    /// 能量网格点数 (NEDOS)
    pub nedos: usize,

    /// 费米能 (eV)
    pub fermi_energy: f64,

    /// 能量网格 (eV)
    pub energies: Vec<f64>,

    /// 总态密度（自旋极化时为自旋向上通道）
    pub total: Vec<f64>,

    /// 自旋向下态密度（仅自旋极化）
    pub total_down: Option<Vec<f64>>,

    /// 积分态密度（自旋极化时为自旋向上通道）
    pub integrated: Vec<f64>,

    /// 自旋向下积分态密度（仅自旋极化）
    pub integrated_down: Option<Vec<f64>>,
}

impl DosData {
    /// 是否为自旋极化数据
    pub fn is_spin_polarized(&self) -> bool {
        self.total_down.is_some()
    }

    /// 相对费米能的能量网格
    pub fn energies_relative_to_fermi(&self) -> Vec<f64> {
        self.energies.iter().map(|e| e - self.fermi_energy).collect()
    }
}

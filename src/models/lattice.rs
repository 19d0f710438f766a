//! # 晶格数据模型
//!
//! 定义实空间/倒空间晶格的统一表示与基础线性代数运算。
//!
//! 倒格矢采用 2π 约定：b1 = 2π (a2 × a3) / V，依此轮换，满足
//! aᵢ · bⱼ = 2π δᵢⱼ。
//!
//! ## 依赖关系
//! - 被 `wavecar/` 和 `commands/` 使用
//! - 无外部模块依赖

use crate::error::{Result, WavekitError};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// 奇异晶格判定容差（Å³）
const VOLUME_TOL: f64 = 1e-10;

/// 晶格居中类型标签
///
/// 仅作为元数据随晶格保存，不参与解码运算。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LatticeCentering {
    /// 原胞 (primitive cell)
    #[default]
    Primitive,
    /// 惯用胞 (conventional cell)
    Conventional,
}

impl std::fmt::Display for LatticeCentering {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LatticeCentering::Primitive => write!(f, "primitive"),
            LatticeCentering::Conventional => write!(f, "conventional"),
        }
    }
}

/// 晶格表示
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lattice {
    /// 晶格向量矩阵 (3x3)，行向量表示 a, b, c
    /// [[a1, a2, a3], [b1, b2, b3], [c1, c2, c3]]
    pub matrix: [[f64; 3]; 3],
}

impl Lattice {
    /// 从晶格向量矩阵创建
    pub fn from_vectors(matrix: [[f64; 3]; 3]) -> Self {
        Lattice { matrix }
    }

    /// 获取晶格参数 (a, b, c, alpha, beta, gamma)，角度单位：度
    pub fn parameters(&self) -> (f64, f64, f64, f64, f64, f64) {
        let a_vec = self.matrix[0];
        let b_vec = self.matrix[1];
        let c_vec = self.matrix[2];

        let a = norm(&a_vec);
        let b = norm(&b_vec);
        let c = norm(&c_vec);

        let alpha = (dot(&b_vec, &c_vec) / (b * c)).acos().to_degrees();
        let beta = (dot(&a_vec, &c_vec) / (a * c)).acos().to_degrees();
        let gamma = (dot(&a_vec, &b_vec) / (a * b)).acos().to_degrees();

        (a, b, c, alpha, beta, gamma)
    }

    /// 计算晶格体积 (a x b) . c
    pub fn volume(&self) -> f64 {
        let ab = cross(&self.matrix[0], &self.matrix[1]);
        dot(&ab, &self.matrix[2])
    }

    /// 计算倒格子（2π 约定）
    ///
    /// 体积低于容差视为奇异晶格，报告为格式错误（文件损坏的表现）。
    pub fn reciprocal(&self) -> Result<Lattice> {
        let volume = self.volume();
        if volume.abs() < VOLUME_TOL {
            return Err(WavekitError::SingularLattice { volume });
        }

        let factor = 2.0 * PI / volume;

        let b1 = scaled(&cross(&self.matrix[1], &self.matrix[2]), factor);
        let b2 = scaled(&cross(&self.matrix[2], &self.matrix[0]), factor);
        let b3 = scaled(&cross(&self.matrix[0], &self.matrix[1]), factor);

        Ok(Lattice {
            matrix: [b1, b2, b3],
        })
    }

    /// 获取第 i 个基矢 (i = 0, 1, 2)
    pub fn vector(&self, i: usize) -> [f64; 3] {
        self.matrix[i]
    }
}

/// 点积
fn dot(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// 叉积
fn cross(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// 向量模长
fn norm(a: &[f64; 3]) -> f64 {
    dot(a, a).sqrt()
}

fn scaled(a: &[f64; 3], f: f64) -> [f64; 3] {
    [a[0] * f, a[1] * f, a[2] * f]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lattice_volume_cubic() {
        let lattice = Lattice::from_vectors([[5.0, 0.0, 0.0], [0.0, 5.0, 0.0], [0.0, 0.0, 5.0]]);

        // 5^3 = 125
        assert!((lattice.volume() - 125.0).abs() < 1e-6);
    }

    #[test]
    fn test_lattice_parameters_cubic() {
        let lattice = Lattice::from_vectors([[4.0, 0.0, 0.0], [0.0, 4.0, 0.0], [0.0, 0.0, 4.0]]);
        let (a, b, c, alpha, beta, gamma) = lattice.parameters();

        assert!((a - 4.0).abs() < 1e-6);
        assert!((b - 4.0).abs() < 1e-6);
        assert!((c - 4.0).abs() < 1e-6);
        assert!((alpha - 90.0).abs() < 1e-6);
        assert!((beta - 90.0).abs() < 1e-6);
        assert!((gamma - 90.0).abs() < 1e-6);
    }

    #[test]
    fn test_reciprocal_duality() {
        // 任意非正交晶格也必须满足 a_i . b_j = 2π δ_ij
        let lattice = Lattice::from_vectors([[3.1, 0.1, 0.0], [0.0, 2.9, 0.2], [0.3, 0.0, 4.2]]);
        let recip = lattice.reciprocal().unwrap();

        for i in 0..3 {
            for j in 0..3 {
                let d = dot(&lattice.matrix[i], &recip.matrix[j]);
                let expected = if i == j { 2.0 * PI } else { 0.0 };
                assert!(
                    (d - expected).abs() < 1e-9,
                    "a_{} . b_{} = {}, expected {}",
                    i,
                    j,
                    d,
                    expected
                );
            }
        }
    }

    #[test]
    fn test_reciprocal_cubic_magnitude() {
        let a = 5.0;
        let lattice = Lattice::from_vectors([[a, 0.0, 0.0], [0.0, a, 0.0], [0.0, 0.0, a]]);
        let recip = lattice.reciprocal().unwrap();

        // |b| = 2π/a
        let b_len = norm(&recip.matrix[0]);
        assert!((b_len - 2.0 * PI / a).abs() < 1e-9);
    }

    #[test]
    fn test_singular_lattice_rejected() {
        // 两个平行基矢 → 体积为零
        let lattice = Lattice::from_vectors([[1.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);

        match lattice.reciprocal() {
            Err(WavekitError::SingularLattice { .. }) => {}
            other => panic!("expected SingularLattice, got {:?}", other.map(|_| ())),
        }
    }
}

//! # 平面波几何运算
//!
//! 动能计算与 G 矢量包围盒推导。
//!
//! 动能以 eV 计：E(k+G) = |Σᵢ (kᵢ+gᵢ) bᵢ|² / C，其中 C 为固定的
//! 物理换算常数（2mₑ/ħ²，eV⁻¹Å⁻²），与文件中的截断能字段同单位。
//!
//! ## 依赖关系
//! - 被 `wavecar/gvectors.rs` 与 `wavecar/decoder.rs` 使用
//! - 使用 `models/lattice.rs`

use crate::models::Lattice;

/// 倒空间长度平方到动能的换算常数 2mₑ/ħ² (eV⁻¹ Å⁻²)
pub const KINETIC_ENERGY_SCALE: f64 = 0.262465831;

/// 计算 k+G 的动能 (eV)
///
/// `k` 为倒格子分数坐标，`g` 为整数指标，`recip` 为倒格子。
pub fn kinetic_energy(k: &[f64; 3], g: [i32; 3], recip: &Lattice) -> f64 {
    let mut cart = [0.0f64; 3];

    for i in 0..3 {
        let coeff = k[i] + g[i] as f64;
        let b = recip.vector(i);
        cart[0] += coeff * b[0];
        cart[1] += coeff * b[1];
        cart[2] += coeff * b[2];
    }

    (cart[0] * cart[0] + cart[1] * cart[1] + cart[2] * cart[2]) / KINETIC_ENERGY_SCALE
}

/// 推导 G 矢量包围盒的对称半宽
///
/// 对每个倒格子方向独立求最小非负整数 n，使纯轴向矢量 n·bᵢ 的动能
/// 超过截断能，返回该 n 本身。得到的 [-nᵢ, nᵢ] 盒是保守包络：任何
/// 可能通过 k+G 精确截断判据的整数三元组都落在盒内，精确判据仍由
/// 枚举器逐候选施加。
pub fn bounding_indices(recip: &Lattice, cutoff: f64) -> [i32; 3] {
    let mut half_widths = [0i32; 3];

    for axis in 0..3 {
        let b = recip.vector(axis);
        let b_sq = b[0] * b[0] + b[1] * b[1] + b[2] * b[2];

        let mut n = 0i32;
        while (n as f64) * (n as f64) * b_sq / KINETIC_ENERGY_SCALE <= cutoff {
            n += 1;
        }
        half_widths[axis] = n;
    }

    half_widths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Lattice;
    use std::f64::consts::PI;

    /// |b| = 1 Å⁻¹ 的立方晶格（a = 2π Å）
    fn unit_recip_lattice() -> Lattice {
        let a = 2.0 * PI;
        Lattice::from_vectors([[a, 0.0, 0.0], [0.0, a, 0.0], [0.0, 0.0, a]])
    }

    #[test]
    fn test_kinetic_energy_at_gamma() {
        let recip = unit_recip_lattice().reciprocal().unwrap();
        let e = kinetic_energy(&[0.0, 0.0, 0.0], [0, 0, 0], &recip);
        assert_eq!(e, 0.0);
    }

    #[test]
    fn test_kinetic_energy_axis_vector() {
        let a = 4.0;
        let lattice = Lattice::from_vectors([[a, 0.0, 0.0], [0.0, a, 0.0], [0.0, 0.0, a]]);
        let recip = lattice.reciprocal().unwrap();

        let e = kinetic_energy(&[0.0, 0.0, 0.0], [1, 0, 0], &recip);
        let expected = (2.0 * PI / a).powi(2) / KINETIC_ENERGY_SCALE;
        assert!((e - expected).abs() < 1e-9);
    }

    #[test]
    fn test_kinetic_energy_includes_kpoint_offset() {
        let recip = unit_recip_lattice().reciprocal().unwrap();

        // k = (0.5, 0, 0), g = (-1, 0, 0) → |k+g| = 0.5
        let e = kinetic_energy(&[0.5, 0.0, 0.0], [-1, 0, 0], &recip);
        let expected = 0.25 / KINETIC_ENERGY_SCALE;
        assert!((e - expected).abs() < 1e-9);
    }

    #[test]
    fn test_kinetic_energy_axis_relabel_invariance() {
        let lattice = Lattice::from_vectors([[3.1, 0.1, 0.0], [0.0, 2.9, 0.2], [0.3, 0.0, 4.2]]);
        let recip = lattice.reciprocal().unwrap();

        let k = [0.1, -0.2, 0.3];
        let g = [2, -1, 1];
        let e = kinetic_energy(&k, g, &recip);

        // 轴标签循环置换 (0,1,2) → (1,2,0)，同时作用于 k、g 与倒格子行
        let perm = [1, 2, 0];
        let k_p = [k[perm[0]], k[perm[1]], k[perm[2]]];
        let g_p = [g[perm[0]], g[perm[1]], g[perm[2]]];
        let recip_p = Lattice::from_vectors([
            recip.matrix[perm[0]],
            recip.matrix[perm[1]],
            recip.matrix[perm[2]],
        ]);

        let e_p = kinetic_energy(&k_p, g_p, &recip_p);
        assert!((e - e_p).abs() < 1e-9);
    }

    #[test]
    fn test_bounding_indices_cubic() {
        // |b| = 1 Å⁻¹：E(n) = n²/C；cutoff = 10 eV → n=1 不超过，n=2 超过
        let recip = unit_recip_lattice().reciprocal().unwrap();
        let cutoff = 10.0;

        assert!(1.0 / KINETIC_ENERGY_SCALE <= cutoff);
        assert!(4.0 / KINETIC_ENERGY_SCALE > cutoff);
        assert_eq!(bounding_indices(&recip, cutoff), [2, 2, 2]);
    }

    #[test]
    fn test_bounding_indices_zero_cutoff() {
        // E(0) = 0 不超过 0 → 半宽至少为 1
        let recip = unit_recip_lattice().reciprocal().unwrap();
        assert_eq!(bounding_indices(&recip, 0.0), [1, 1, 1]);
    }

    #[test]
    fn test_bounding_indices_anisotropic() {
        // c 轴远长于 a/b → 第三方向的倒格矢更短，半宽更大
        let lattice = Lattice::from_vectors([[3.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 12.0]]);
        let recip = lattice.reciprocal().unwrap();

        let box_widths = bounding_indices(&recip, 50.0);
        assert!(box_widths[2] > box_widths[0]);
        assert_eq!(box_widths[0], box_widths[1]);
    }
}

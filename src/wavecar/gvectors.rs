//! # G 矢量枚举器
//!
//! WAVECAR 的系数记录只存复振幅，不存倒格矢指标；系数与 G 矢量的
//! 对应关系完全由写出端的枚举顺序隐含。本模块以里程计方式在包围盒
//! 内走出与写出端完全一致的候选序列，并对每个系数执行截断能查找，
//! 重推其 HKL 指标。
//!
//! 里程计推进规则：先加轴 0；数字越过上界即回绕到下界；仅当新产生
//! 的数字恰好为 0 时才向下一轴进位（即 -1→0 的翻转触发进位，而非
//! 越过上界）。这一进位门控决定整条候选序列，因而决定每个系数绑定
//! 到哪个 G 矢量，不可更改。
//!
//! ## 依赖关系
//! - 被 `wavecar/decoder.rs` 使用
//! - 使用 `wavecar/geometry.rs` 的动能判据

use crate::models::Lattice;
use crate::wavecar::geometry::kinetic_energy;

/// 包围盒内的候选指标里程计
///
/// 状态是当前整数三元组与每轴对称半宽；初始位于盒的最小角
/// (-n₀, -n₁, -n₂)。
#[derive(Debug, Clone)]
pub struct GVectorOdometer {
    current: [i32; 3],
    half_widths: [i32; 3],
}

impl GVectorOdometer {
    /// 创建里程计，置于盒的最小角
    pub fn new(half_widths: [i32; 3]) -> Self {
        GVectorOdometer {
            current: [-half_widths[0], -half_widths[1], -half_widths[2]],
            half_widths,
        }
    }

    /// 当前指标三元组
    pub fn current(&self) -> [i32; 3] {
        self.current
    }

    /// 盒内状态总数 (2n₀+1)(2n₁+1)(2n₂+1)
    pub fn box_volume(&self) -> u64 {
        self.half_widths
            .iter()
            .map(|&n| 2 * n as u64 + 1)
            .product()
    }

    /// 按进位规则推进一步
    ///
    /// 进位仅在新数字恰为 0 时向高轴传播；(2n+1)³ 步后回到起点。
    pub fn advance(&mut self) {
        for axis in 0..3 {
            self.current[axis] += 1;
            if self.current[axis] > self.half_widths[axis] {
                self.current[axis] = -self.half_widths[axis];
            }
            if self.current[axis] != 0 {
                break;
            }
        }
    }
}

/// 单条能带的逐系数 G 矢量查找
///
/// 每条能带构造一个新实例（里程计重置到盒最小角），按系数在文件中
/// 的顺序依次调用 [`next_index`](GVectorSearch::next_index)。
pub struct GVectorSearch<'a> {
    odometer: GVectorOdometer,
    kpoint: [f64; 3],
    cutoff: f64,
    recip: &'a Lattice,
}

impl<'a> GVectorSearch<'a> {
    pub fn new(kpoint: [f64; 3], cutoff: f64, recip: &'a Lattice, half_widths: [i32; 3]) -> Self {
        GVectorSearch {
            odometer: GVectorOdometer::new(half_widths),
            kpoint,
            cutoff,
            recip,
        }
    }

    /// 查找下一个截断能以下的指标
    ///
    /// 从里程计当前位置起逐候选测试 E(k+G) < 截断能；命中即接受该
    /// 三元组并多推进一步，保证同一能带内不会重访已接受的指标。
    /// 整个盒测试完仍无命中返回 None（文件损坏或截断能/晶格不符），
    /// 绝不无限循环。
    pub fn next_index(&mut self) -> Option<[i32; 3]> {
        let capacity = self.odometer.box_volume();
        let mut tested = 0u64;

        loop {
            let g = self.odometer.current();
            if kinetic_energy(&self.kpoint, g, self.recip) < self.cutoff {
                self.odometer.advance();
                return Some(g);
            }

            self.odometer.advance();
            tested += 1;
            if tested >= capacity {
                return None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Lattice;
    use crate::wavecar::geometry::{bounding_indices, KINETIC_ENERGY_SCALE};
    use std::collections::HashSet;
    use std::f64::consts::PI;

    #[test]
    fn test_odometer_full_cycle_closure() {
        for n in 0..=2i32 {
            let start = [-n, -n, -n];
            let mut odo = GVectorOdometer::new([n, n, n]);
            let steps = (2 * n as u64 + 1).pow(3);

            for _ in 0..steps {
                odo.advance();
            }
            assert_eq!(odo.current(), start, "half-width {}", n);
        }
    }

    #[test]
    fn test_odometer_visits_every_state_once() {
        let n = 2i32;
        let mut odo = GVectorOdometer::new([n, n, n]);
        let steps = (2 * n as u64 + 1).pow(3);

        let mut seen = HashSet::new();
        for _ in 0..steps {
            assert!(seen.insert(odo.current()));
            odo.advance();
        }
        assert_eq!(seen.len() as u64, steps);
    }

    #[test]
    fn test_odometer_carry_fires_on_zero_not_overflow() {
        // 从 (-1,-1,-1) 推进：轴 0 的 -1→0 翻转立即向高轴进位
        let mut odo = GVectorOdometer::new([1, 1, 1]);
        odo.advance();
        assert_eq!(odo.current(), [0, 0, 0]);

        // 之后轴 0 独走：1，回绕 -1，再到 0 时才再次进位
        odo.advance();
        assert_eq!(odo.current(), [1, 0, 0]);
        odo.advance();
        assert_eq!(odo.current(), [-1, 0, 0]);
        odo.advance();
        assert_eq!(odo.current(), [0, 1, 0]);
    }

    #[test]
    fn test_odometer_degenerate_box() {
        let mut odo = GVectorOdometer::new([0, 0, 0]);
        assert_eq!(odo.box_volume(), 1);
        odo.advance();
        assert_eq!(odo.current(), [0, 0, 0]);
    }

    /// |b| = 1 Å⁻¹ 的立方倒格子
    fn unit_reciprocal() -> Lattice {
        let a = 2.0 * PI;
        Lattice::from_vectors([[a, 0.0, 0.0], [0.0, a, 0.0], [0.0, 0.0, a]])
            .reciprocal()
            .unwrap()
    }

    #[test]
    fn test_search_accepts_seven_triples_in_order() {
        // 截断能取 1.5×E(1,0,0)：恰好 Γ 点加六个最近邻通过判据
        let recip = unit_reciprocal();
        let e1 = 1.0 / KINETIC_ENERGY_SCALE;
        let cutoff = 1.5 * e1;

        let half_widths = bounding_indices(&recip, cutoff);
        assert_eq!(half_widths, [2, 2, 2]);

        let mut search = GVectorSearch::new([0.0, 0.0, 0.0], cutoff, &recip, half_widths);

        // 从盒最小角 (-2,-2,-2) 起步，进位门控决定 (0,0,-1) 先于
        // (0,0,0) 被访问到
        let expected = [
            [0, 0, -1],
            [0, 0, 0],
            [1, 0, 0],
            [-1, 0, 0],
            [0, 1, 0],
            [0, -1, 0],
            [0, 0, 1],
        ];
        for want in expected {
            assert_eq!(search.next_index(), Some(want));
        }
    }

    #[test]
    fn test_search_count_matches_brute_force() {
        let recip = unit_reciprocal();
        let cutoff = 25.0;
        let half_widths = bounding_indices(&recip, cutoff);
        let [n0, n1, n2] = half_widths;

        let mut expected = 0usize;
        for h in -n0..=n0 {
            for k in -n1..=n1 {
                for l in -n2..=n2 {
                    if kinetic_energy(&[0.0; 3], [h, k, l], &recip) < cutoff {
                        expected += 1;
                    }
                }
            }
        }
        assert!(expected > 7);

        let mut search = GVectorSearch::new([0.0, 0.0, 0.0], cutoff, &recip, half_widths);
        let mut seen = HashSet::new();
        for _ in 0..expected {
            let g = search.next_index().expect("search exhausted early");
            assert!(seen.insert(g), "index {:?} accepted twice", g);
            assert!(g[0].abs() <= n0 && g[1].abs() <= n1 && g[2].abs() <= n2);
        }
    }

    #[test]
    fn test_search_exhaustion_returns_none() {
        // 负截断能：任何候选都不可能通过
        let recip = unit_reciprocal();
        let mut search = GVectorSearch::new([0.0, 0.0, 0.0], -1.0, &recip, [1, 1, 1]);
        assert_eq!(search.next_index(), None);
    }
}

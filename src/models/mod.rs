//! # 数据模型模块
//!
//! 定义晶格、波函数与态密度的统一数据模型。
//!
//! ## 依赖关系
//! - 被 `wavecar/`, `parsers/` 和 `commands/` 使用
//! - 子模块: lattice, wavefunction, dos

pub mod dos;
pub mod lattice;
pub mod wavefunction;

pub use dos::DosData;
pub use lattice::{Lattice, LatticeCentering};
pub use wavefunction::{
    BandEdges, BandState, HklIndex, KPointStates, PlaneWaveCoefficient, SpinChannel, Wavefunction,
};

//! # 统一错误处理模块
//!
//! 定义 Wavekit 的所有错误类型，使用 `thiserror` 派生。
//!
//! 错误分为两大类：格式错误（记录越界、格式标签不符、晶格奇异、
//! G 矢量搜索耗尽等，对一次解码是致命的，不做内部重试）和 I/O 错误
//! （底层流失败，原样向上传播，不做二次解释）。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// Wavekit 统一错误类型
#[derive(Error, Debug)]
pub enum WavekitError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // WAVECAR 格式错误
    // ─────────────────────────────────────────────────────────────
    #[error("Unsupported WAVECAR format tag: {tag} (only {expected} is supported)")]
    UnsupportedFormatTag { tag: f64, expected: f64 },

    #[error("Record {record}, field '{field}': expected an integral value, found {value}")]
    NonIntegralField {
        record: u64,
        field: &'static str,
        value: f64,
    },

    #[error("Record {record}, field '{field}': value {value} out of range")]
    FieldOutOfRange {
        record: u64,
        field: &'static str,
        value: f64,
    },

    #[error("Read past end of record {record}: offset {offset} + {requested} bytes exceeds record length {record_length}")]
    RecordOverrun {
        record: u64,
        offset: u64,
        requested: u64,
        record_length: u64,
    },

    #[error("Truncated stream while reading record {record}")]
    TruncatedStream { record: u64 },

    #[error("Singular real-space lattice: cell volume {volume:e} below tolerance")]
    SingularLattice { volume: f64 },

    #[error("G-vector search exhausted the bounding box at coefficient {coefficient} (spin {spin}, k-point {kpoint}, band {band}); cutoff/lattice mismatch or corrupt file")]
    GVectorExhausted {
        spin: usize,
        kpoint: usize,
        band: usize,
        coefficient: usize,
    },

    // ─────────────────────────────────────────────────────────────
    // 文本解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {format} file: {path}\nReason: {reason}")]
    ParseError {
        format: String,
        path: String,
        reason: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("No matching files found with pattern: {pattern}")]
    NoFilesFound { pattern: String },

    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, WavekitError>;

//! # gap 子命令实现
//!
//! 由占据数提取带隙。单文件模式打印 VBM/CBM/带隙；批量模式扫描
//! 作业目录中的 WAVECAR 文件，并行解码后按带隙排名。
//!
//! ## 依赖关系
//! - 使用 `cli/gap.rs` 定义的参数
//! - 使用 `wavecar/decoder.rs`, `models/wavefunction.rs`
//! - 使用 `utils/output.rs`, `utils/progress.rs`
//! - 使用 `walkdir` + `glob` 收集文件，`rayon` 并行解码

use crate::cli::gap::GapArgs;
use crate::error::{Result, WavekitError};
use crate::models::{LatticeCentering, Wavefunction};
use crate::utils::{output, progress};
use crate::wavecar;

use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tabled::{Table, Tabled};
use walkdir::WalkDir;

/// 单个结构的带隙记录
#[derive(Debug, Clone, Serialize)]
struct GapRecord {
    structure: String,
    vbm_ev: Option<f64>,
    cbm_ev: Option<f64>,
    gap_ev: Option<f64>,
    metallic: bool,
}

/// 排名表行
#[derive(Debug, Tabled)]
struct GapRow {
    #[tabled(rename = "Rank")]
    rank: usize,
    #[tabled(rename = "Structure")]
    structure: String,
    #[tabled(rename = "Gap (eV)")]
    gap: String,
    #[tabled(rename = "VBM (eV)")]
    vbm: String,
    #[tabled(rename = "CBM (eV)")]
    cbm: String,
    #[tabled(rename = "Character")]
    character: String,
}

/// 执行 gap
pub fn execute(args: GapArgs) -> Result<()> {
    if args.input.is_file() {
        execute_single(&args)
    } else if args.input.is_dir() {
        execute_batch(&args)
    } else {
        Err(WavekitError::FileNotFound {
            path: args.input.display().to_string(),
        })
    }
}

/// 单文件模式
fn execute_single(args: &GapArgs) -> Result<()> {
    output::print_header("Band Gap");

    let spinner = progress::create_spinner(&format!("Decoding {}", args.input.display()));
    let wf = wavecar::decode_file(&args.input, Some(args.centering.into()))?;
    spinner.finish_and_clear();

    match wf.band_edges(args.occ_threshold) {
        Some(edges) if edges.is_metallic() => {
            output::print_warning("Valence and conduction bands overlap: metallic");
            output::print_field("VBM", &format!("{:.6} eV", edges.vbm));
            output::print_field("CBM", &format!("{:.6} eV", edges.cbm));
        }
        Some(edges) => {
            output::print_field("VBM", &format!("{:.6} eV", edges.vbm));
            output::print_field("CBM", &format!("{:.6} eV", edges.cbm));
            output::print_field("Band gap", &format!("{:.6} eV", edges.gap()));
        }
        None => {
            output::print_warning(
                "All bands fall on one side of the occupancy threshold; band edges undefined",
            );
        }
    }

    Ok(())
}

/// 批量模式：扫描目录、并行解码、按带隙排名
fn execute_batch(args: &GapArgs) -> Result<()> {
    output::print_header("Band Gap Ranking");

    output::print_info(&format!(
        "Scanning '{}' for files matching '{}'...",
        args.input.display(),
        args.pattern
    ));

    let files = collect_wavecar_files(&args.input, &args.pattern, args.recursive)?;
    if files.is_empty() {
        return Err(WavekitError::NoFilesFound {
            pattern: args.pattern.clone(),
        });
    }
    output::print_info(&format!("Found {} file(s)", files.len()));

    let jobs = if args.jobs == 0 {
        num_cpus::get()
    } else {
        args.jobs
    };
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .map_err(|e| WavekitError::Other(e.to_string()))?;

    let pb = progress::create_progress_bar(files.len() as u64, "Decoding");
    let centering: LatticeCentering = args.centering.into();
    let threshold = args.occ_threshold;
    let root = args.input.clone();

    let results: Vec<(PathBuf, std::result::Result<GapRecord, String>)> = pool.install(|| {
        files
            .par_iter()
            .map(|file| {
                let result = wavecar::decode_file(file, Some(centering))
                    .map(|wf| build_record(&root, file, &wf, threshold))
                    .map_err(|e| e.to_string());
                pb.inc(1);
                (file.clone(), result)
            })
            .collect()
    });
    pb.finish_and_clear();

    let mut records = Vec::new();
    let mut failures = Vec::new();
    for (file, result) in results {
        match result {
            Ok(record) => records.push(record),
            Err(reason) => failures.push((file, reason)),
        }
    }

    // 带隙降序；无法判定边缘的结构排最后
    records.sort_by(|a, b| {
        b.gap_ev
            .partial_cmp(&a.gap_ev)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let rows: Vec<GapRow> = records
        .iter()
        .take(args.top_n)
        .enumerate()
        .map(|(i, r)| GapRow {
            rank: i + 1,
            structure: r.structure.clone(),
            gap: r.gap_ev.map_or("-".to_string(), |g| format!("{:.4}", g)),
            vbm: r.vbm_ev.map_or("-".to_string(), |v| format!("{:.4}", v)),
            cbm: r.cbm_ev.map_or("-".to_string(), |c| format!("{:.4}", c)),
            character: if r.metallic {
                "metallic".to_string()
            } else if r.gap_ev.is_some() {
                "insulating".to_string()
            } else {
                "unknown".to_string()
            },
        })
        .collect();
    println!("{}", Table::new(rows));
    println!();

    if let Some(csv_path) = &args.output_csv {
        let mut wtr = csv::Writer::from_path(csv_path).map_err(WavekitError::CsvError)?;
        for record in &records {
            wtr.serialize(record).map_err(WavekitError::CsvError)?;
        }
        wtr.flush().map_err(|e| WavekitError::FileWriteError {
            path: csv_path.display().to_string(),
            source: e,
        })?;
        output::print_success(&format!(
            "Wrote {} records to '{}'",
            records.len(),
            csv_path.display()
        ));
    }

    if !failures.is_empty() {
        output::print_warning(&format!("{} file(s) failed to decode:", failures.len()));
        for (file, reason) in &failures {
            output::print_warning(&format!("  {}: {}", file.display(), reason));
        }
    }

    output::print_success(&format!(
        "Processed {} file(s), {} succeeded",
        records.len() + failures.len(),
        records.len()
    ));

    Ok(())
}

/// 收集匹配的 WAVECAR 文件
fn collect_wavecar_files(root: &Path, pattern: &str, recursive: bool) -> Result<Vec<PathBuf>> {
    let patterns: Vec<glob::Pattern> = pattern
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(glob::Pattern::new)
        .collect::<std::result::Result<_, _>>()
        .map_err(|e| WavekitError::InvalidArgument(format!("Bad glob pattern: {}", e)))?;

    // 非递归模式也深入一层，覆盖 job_dir/structure/WAVECAR 布局
    let max_depth = if recursive { usize::MAX } else { 2 };

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.file_name()
                .to_str()
                .map(|name| patterns.iter().any(|p| p.matches(name)))
                .unwrap_or(false)
        })
        .map(|e| e.path().to_path_buf())
        .collect();

    files.sort();
    Ok(files)
}

/// 从解码结果构造带隙记录
fn build_record(root: &Path, file: &Path, wf: &Wavefunction, threshold: f64) -> GapRecord {
    let structure = file
        .strip_prefix(root)
        .unwrap_or(file)
        .display()
        .to_string();

    match wf.band_edges(threshold) {
        Some(edges) => GapRecord {
            structure,
            vbm_ev: Some(edges.vbm),
            cbm_ev: Some(edges.cbm),
            gap_ev: Some(edges.gap()),
            metallic: edges.is_metallic(),
        },
        None => GapRecord {
            structure,
            vbm_ev: None,
            cbm_ev: None,
            gap_ev: None,
            metallic: false,
        },
    }
}

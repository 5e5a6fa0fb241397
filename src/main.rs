use adjustscreen::adjust::{self, AdjustReport};
use adjustscreen::config::{AdjustConfig, GateMode, Strategy, check_viewport};
use adjustscreen::file::{self, GgbFile};
use adjustscreen::model::ViewSize;
use anyhow::{Context, Result, anyhow, bail};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::{error, info};
use rayon::prelude::*;
use serde::Serialize;
use walkdir::WalkDir;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Move overlapping sliders and buttons in .ggb files to fit the current screen",
    long_about = None
)]
struct Cli {
    /// .ggb archives, geogebra.xml files, or directories to search for them
    #[arg(value_name = "INPUT", required = true)]
    inputs: Vec<String>,

    /// Width of the current viewport in pixels
    #[arg(long)]
    width: Option<i32>,

    /// Height of the current viewport in pixels
    #[arg(long)]
    height: Option<i32>,

    /// TOML file with adjuster settings; flags override it
    #[arg(long, value_name = "TOML")]
    config: Option<String>,

    #[arg(long, value_enum)]
    strategy: Option<Strategy>,

    /// Skip files whose saved view size equals the current viewport
    #[arg(long)]
    only_when_resized: bool,

    /// Pull widgets back inside the viewport before separating them
    #[arg(long)]
    clamp: bool,

    /// Output path (single input only)
    #[arg(short, long, conflicts_with = "in_place")]
    output: Option<String>,

    /// Overwrite the input files
    #[arg(long)]
    in_place: bool,

    /// Report what would move without writing anything
    #[arg(long)]
    dry_run: bool,
}

#[derive(Debug, Serialize)]
struct FileReport {
    path: String,
    file_size: Option<ViewSize>,
    written: Option<String>,
    #[serde(flatten)]
    report: AdjustReport,
}

fn collect_inputs(inputs: &[String]) -> Result<Vec<Utf8PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        let path = Utf8PathBuf::from(input);
        if path.is_dir() {
            let mut found: Vec<Utf8PathBuf> = Vec::new();
            for entry in WalkDir::new(path.as_std_path()) {
                let entry = entry.with_context(|| format!("Walk {}", path))?;
                if !entry.file_type().is_file() {
                    continue;
                }
                let p = Utf8PathBuf::from_path_buf(entry.into_path())
                    .map_err(|p| anyhow!("Non-UTF8 path {}", p.display()))?;
                if file::is_supported(&p) {
                    found.push(p);
                }
            }
            found.sort();
            files.extend(found);
        } else {
            files.push(path);
        }
    }
    Ok(files)
}

/// `foo.ggb` -> `foo.adjusted.ggb`
fn default_output(path: &Utf8Path) -> Utf8PathBuf {
    let stem = path.file_stem().unwrap_or("out");
    let name = match path.extension() {
        Some(ext) => format!("{}.adjusted.{}", stem, ext),
        None => format!("{}.adjusted", stem),
    };
    path.with_file_name(name)
}

fn process(
    path: &Utf8Path,
    config: &AdjustConfig,
    viewport: ViewSize,
    cli: &Cli,
) -> Result<FileReport> {
    let mut ggb = GgbFile::open(path)?;
    let doc = ggb.document_mut()?;
    let file_size = doc.file_size;
    let report = adjust::adjust_document(doc, config.clone(), viewport, cli.clamp);

    let target = if cli.dry_run {
        None
    } else if let Some(out) = &cli.output {
        Some(Utf8PathBuf::from(out))
    } else if report.moves.is_empty() {
        None
    } else if cli.in_place {
        Some(path.to_path_buf())
    } else {
        Some(default_output(path))
    };
    if let Some(target) = &target {
        ggb.save(target)
            .with_context(|| format!("Failed to save {}", target))?;
        info!("{}: wrote {}", path, target);
    }

    Ok(FileReport {
        path: path.to_string(),
        file_size,
        written: target.map(|t| t.to_string()),
        report,
    })
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env().init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(p) => AdjustConfig::load(p)?,
        None => AdjustConfig::default(),
    };
    if let Some(s) = cli.strategy {
        config.strategy = s;
    }
    if cli.only_when_resized {
        config.gate = GateMode::WhenResized;
    }
    let viewport = match (cli.width, cli.height, config.viewport) {
        (Some(w), Some(h), _) => ViewSize::new(w, h),
        (None, None, Some(v)) => v,
        (w, h, Some(v)) => ViewSize::new(w.unwrap_or(v.width), h.unwrap_or(v.height)),
        _ => bail!("Viewport size required: pass --width and --height or set [viewport] in the config"),
    };
    let viewport = check_viewport(viewport)?;

    let files = collect_inputs(&cli.inputs)?;
    if files.is_empty() {
        bail!("No .ggb or .xml files found");
    }
    if cli.output.is_some() && files.len() != 1 {
        bail!("--output needs exactly one input file, got {}", files.len());
    }

    let results: Vec<(Utf8PathBuf, Result<FileReport>)> = files
        .par_iter()
        .map(|p| (p.clone(), process(p, &config, viewport, &cli)))
        .collect();

    let mut reports = Vec::new();
    let mut failed = 0usize;
    for (path, res) in results {
        match res {
            Ok(r) => reports.push(r),
            Err(e) => {
                error!("{}: {:#}", path, e);
                failed += 1;
            }
        }
    }

    let json = serde_json::to_string_pretty(&reports)?;
    println!("{}", json);
    if failed > 0 {
        bail!("{} of {} file(s) failed", failed, files.len());
    }
    Ok(())
}

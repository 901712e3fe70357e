//! structsel - replay structural selections over a document dump
//!
//! A command line tool that loads a document dump (JSON), wires it into the
//! selection engine through in-memory providers, replays seed / exclusion /
//! column-toggle operations, and prints the resulting selection as ids,
//! grouped text, or JSON.
//!
//! The dump stands in for the external page/block/workbook collaborators;
//! this tool never parses a container format itself.

use clap::{ArgAction, Parser, ValueEnum};
use itertools::Itertools;
use serde::Deserialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use structsel_core::model::{DocumentKind, PageNode};
use structsel_core::provider::{
    ProviderRegistry, RawBlock, RawSheet, RawTextItem, StaticBlockProvider, StaticPageProvider,
    StaticSheetProvider,
};
use structsel_core::{MatchParams, Result, SelectError, Session};

/// Output type for the selection report.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputType {
    /// One highlighted node id (or sheet:column pair) per line (default)
    #[default]
    Ids,
    /// Highlighted text, grouped by visual line / block / sheet row
    Text,
    /// Full selection state as JSON
    Json,
}

/// A command line tool for replaying structural pattern selections over a
/// document dump and printing the resulting selection.
#[derive(Parser, Debug)]
#[command(name = "structsel")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the document dump (JSON)
    file: PathBuf,

    /// Seed node id to propagate from (repeatable)
    #[arg(short = 's', long = "seed")]
    seeds: Vec<String>,

    /// Node id to exclude from highlighting (repeatable)
    #[arg(short = 'x', long = "exclude")]
    excludes: Vec<String>,

    /// Column to toggle on a tabular document, as SHEET:COLUMN (repeatable)
    #[arg(short = 'c', long = "toggle-column")]
    toggles: Vec<String>,

    /// Output type
    #[arg(short = 't', long = "output-type", value_enum, default_value = "ids")]
    output_type: OutputType,

    /// Output file name, `-` for stdout
    #[arg(short = 'o', long = "outfile", default_value = "-")]
    outfile: String,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,

    // === Pattern parameters ===
    /// Vertical bucket size used to group text runs into visual lines
    #[arg(long = "line-tolerance", default_value = "3.0")]
    line_tolerance: f64,

    /// Divisor applied to horizontal positions in feature vectors
    #[arg(long = "x-norm", default_value = "1000.0")]
    x_norm: f64,

    /// Divisor applied to font sizes in feature vectors
    #[arg(long = "font-norm", default_value = "100.0")]
    font_norm: f64,

    /// Divisor applied to text lengths in feature vectors
    #[arg(long = "len-norm", default_value = "500.0")]
    len_norm: f64,

    /// Raw dot-product score a node must exceed to count as a match
    #[arg(long = "similarity-threshold", default_value = "0.985")]
    similarity_threshold: f64,

    /// Maximum horizontal-offset difference for flowing-block alignment
    #[arg(long = "x-tolerance", default_value = "15")]
    x_tolerance: i64,
}

// === Document dump format ===

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum DocumentDump {
    Paginated { pages: Vec<Vec<ItemDump>> },
    Flowing { blocks: Vec<BlockDump> },
    Tabular { sheets: Vec<SheetDump> },
}

#[derive(Debug, Deserialize)]
struct ItemDump {
    text: String,
    x: f64,
    y: f64,
    #[serde(default)]
    width: f64,
    height: f64,
}

#[derive(Debug, Deserialize)]
struct BlockDump {
    text: String,
    left: f64,
}

#[derive(Debug, Deserialize)]
struct SheetDump {
    name: String,
    rows: Vec<Vec<String>>,
}

/// Builds pattern parameters from the command line, rejecting values the
/// engine would panic on.
fn build_params(args: &Args) -> std::result::Result<MatchParams, String> {
    if args.line_tolerance <= 0.0 {
        return Err("--line-tolerance must be positive".to_string());
    }
    if args.x_norm <= 0.0 || args.font_norm <= 0.0 || args.len_norm <= 0.0 {
        return Err("normalization constants must be positive".to_string());
    }
    if args.x_tolerance <= 0 {
        return Err("--x-tolerance must be positive".to_string());
    }
    Ok(MatchParams {
        line_tolerance: args.line_tolerance,
        x_norm: args.x_norm,
        font_norm: args.font_norm,
        len_norm: args.len_norm,
        similarity_threshold: args.similarity_threshold,
        x_match_tolerance: args.x_tolerance,
    })
}

/// Parses `SHEET:COLUMN` toggle specs.
fn parse_toggles(specs: &[String]) -> std::result::Result<Vec<(usize, usize)>, String> {
    specs
        .iter()
        .map(|spec| {
            spec.split_once(':')
                .and_then(|(s, c)| Some((s.parse().ok()?, c.parse().ok()?)))
                .ok_or_else(|| format!("invalid --toggle-column '{spec}': expected SHEET:COLUMN"))
        })
        .collect()
}

/// Loads the dump and builds a session of the matching document kind.
fn open_session(path: &PathBuf, params: MatchParams) -> Result<Session> {
    let raw = std::fs::read_to_string(path)?;
    let dump: DocumentDump = serde_json::from_str(&raw)
        .map_err(|e| SelectError::Provider(format!("invalid document dump: {e}")))?;

    let mut registry = ProviderRegistry::new();
    match dump {
        DocumentDump::Paginated { pages } => {
            let pages = pages
                .into_iter()
                .map(|items| {
                    items
                        .into_iter()
                        .map(|i| RawTextItem {
                            text: i.text,
                            x: i.x,
                            y: i.y,
                            width: i.width,
                            height: i.height,
                        })
                        .collect()
                })
                .collect();
            registry.register_pages(Box::new(StaticPageProvider::new(pages)));
            Session::paginated(&registry, params)
        }
        DocumentDump::Flowing { blocks } => {
            let blocks = blocks
                .into_iter()
                .map(|b| RawBlock {
                    text: b.text,
                    left: b.left,
                })
                .collect();
            registry.register_blocks(Box::new(StaticBlockProvider::new(blocks)));
            Session::flowing(&registry, params)
        }
        DocumentDump::Tabular { sheets } => {
            let sheets = sheets
                .into_iter()
                .map(|s| RawSheet {
                    name: s.name,
                    rows: s.rows,
                })
                .collect();
            registry.register_sheets(Box::new(StaticSheetProvider::new(sheets)));
            Session::tabular(&registry, params)
        }
    }
}

fn write_ids(session: &Session, out: &mut dyn Write) -> io::Result<()> {
    let selection = session.selection();
    if session.document_kind() == DocumentKind::Tabular {
        for (sheet, columns) in selection
            .selected_columns()
            .sorted_by_key(|&(sheet, _)| sheet)
        {
            for column in columns.iter().sorted() {
                writeln!(out, "{sheet}:{column}")?;
            }
        }
        return Ok(());
    }
    for id in selection.selected_ids() {
        if selection.is_highlighted(id) {
            writeln!(out, "{id}")?;
        }
    }
    Ok(())
}

fn write_text(session: &Session, out: &mut dyn Write) -> io::Result<()> {
    let selection = session.selection();
    match session.document_kind() {
        DocumentKind::Paginated => {
            let tolerance = session.params().line_tolerance;
            let highlighted: Vec<&PageNode> = session
                .page_nodes()
                .iter()
                .filter(|n| selection.is_highlighted(n.id()))
                .sorted_by_key(|n| (n.page(), (n.y() / tolerance).round() as i64))
                .collect();
            for (_, line) in &highlighted.into_iter().chunk_by(|n| n.line_key(tolerance)) {
                writeln!(out, "{}", line.map(PageNode::text).join(" "))?;
            }
        }
        DocumentKind::Flowing => {
            for node in session.block_nodes() {
                if selection.is_highlighted(node.id()) {
                    writeln!(out, "{}", node.text())?;
                }
            }
        }
        DocumentKind::Tabular => {
            for (sheet_index, columns) in selection
                .selected_columns()
                .sorted_by_key(|&(sheet, _)| sheet)
            {
                let Some(sheet) = session.sheets().get(sheet_index) else {
                    continue;
                };
                let columns: Vec<usize> = columns.iter().copied().sorted().collect();
                writeln!(out, "# {}", sheet.name())?;
                for row in 0..sheet.rows().len() {
                    let cells: Vec<&str> = columns.iter().map(|&c| sheet.cell(row, c)).collect();
                    writeln!(out, "{}", cells.join("\t"))?;
                }
            }
        }
    }
    Ok(())
}

fn write_json(session: &Session, out: &mut dyn Write) -> io::Result<()> {
    let selection = session.selection();
    let highlighted: Vec<&str> = selection
        .selected_ids()
        .map(|id| id.as_str())
        .filter(|id| selection.is_highlighted(id))
        .collect();
    let excluded: Vec<&str> = selection.excluded_ids().map(|id| id.as_str()).collect();
    let columns: serde_json::Map<String, serde_json::Value> = selection
        .selected_columns()
        .sorted_by_key(|&(sheet, _)| sheet)
        .map(|(sheet, cols)| {
            let cols: Vec<usize> = cols.iter().copied().sorted().collect();
            (sheet.to_string(), serde_json::json!(cols))
        })
        .collect();

    let report = serde_json::json!({
        "kind": session.document_kind().as_str(),
        "highlighted": highlighted,
        "highlighted_count": selection.highlighted_count(),
        "excluded": excluded,
        "columns": columns,
    });
    writeln!(out, "{}", serde_json::to_string_pretty(&report)?)
}

fn run(args: &Args, toggles: &[(usize, usize)], out: &mut dyn Write) -> Result<()> {
    let params = build_params(args).map_err(SelectError::Provider)?;
    let mut session = open_session(&args.file, params)?;

    for seed in &args.seeds {
        let added = session.select_by_seed(seed);
        if added == 0 && args.debug {
            eprintln!("seed {seed}: no new matches");
        }
    }
    for id in &args.excludes {
        session.exclude_node(id);
    }
    for &(sheet, column) in toggles {
        session.toggle_column(sheet, column);
    }

    match args.output_type {
        OutputType::Ids => write_ids(&session, out)?,
        OutputType::Text => write_text(&session, out)?,
        OutputType::Json => write_json(&session, out)?,
    }
    Ok(())
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .with_writer(io::stderr)
            .init();
    }

    let toggles = match parse_toggles(&args.toggles) {
        Ok(toggles) => toggles,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    if !args.file.exists() {
        eprintln!("Error: File not found: {}", args.file.display());
        std::process::exit(1);
    }

    let mut output: Box<dyn Write> = if args.outfile == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        let file = File::create(&args.outfile)
            .map_err(|e| format!("Failed to create output file {}: {}", args.outfile, e))?;
        Box::new(BufWriter::new(file))
    };

    if let Err(e) = run(&args, &toggles, &mut output) {
        eprintln!("Error processing {}: {}", args.file.display(), e);
        std::process::exit(1);
    }

    output.flush()?;
    Ok(())
}

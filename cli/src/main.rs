//! pagenorm CLI - page-text cleanup tool

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pagenorm::normalize::{DEFAULT_FOOTER_MARKER, DEFAULT_FOOTER_MAX_DIGITS};
use pagenorm::{
    open_source, FooterPattern, JsonFormat, NormalizeOptions, NormalizeStats, PageSelection,
    PageTextNormalizer, RenderOptions, SourceOptions,
};

#[derive(Parser)]
#[command(name = "pagenorm")]
#[command(version)]
#[command(about = "Clean per-page text extracted from PDF documents", long_about = None)]
struct Cli {
    /// Input file (PDF, form-feed separated text, or JSON page list)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(flatten)]
    normalize: NormalizeArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean several files, writing text and JSON for each
    Clean {
        /// Input files
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        #[command(flatten)]
        normalize: NormalizeArgs,
    },

    /// Clean a file and print plain text
    Text {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Text between pages (supports \n, \t and \f escapes)
        #[arg(long, default_value = "\\n\\n")]
        separator: String,

        /// Print a "--- page N ---" line before each page
        #[arg(long)]
        page_markers: bool,

        /// Leave out pages that are blank after cleaning
        #[arg(long)]
        skip_empty: bool,

        #[command(flatten)]
        normalize: NormalizeArgs,
    },

    /// Clean a file and print JSON
    Json {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        #[command(flatten)]
        normalize: NormalizeArgs,
    },

    /// Show input format and cleanup statistics
    Info {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        normalize: NormalizeArgs,
    },

    /// Show version information
    Version,
}

/// Extraction and normalization flags shared by every command.
#[derive(Args, Clone)]
struct NormalizeArgs {
    /// Page range (e.g., "1-10", "1,3,5")
    #[arg(long)]
    pages: Option<String>,

    /// Substitute empty text for pages that fail to extract
    #[arg(long)]
    lenient: bool,

    /// Trim the space left at the start and end of each page
    #[arg(long)]
    trim: bool,

    /// Keep footer markers instead of stripping them
    #[arg(long)]
    keep_footers: bool,

    /// Footer marker text
    #[arg(long, value_name = "TEXT", default_value = DEFAULT_FOOTER_MARKER)]
    marker: String,

    /// Maximum page-number digits removed after the marker
    #[arg(long, value_name = "N", default_value_t = DEFAULT_FOOTER_MAX_DIGITS)]
    max_digits: u8,

    /// Apply Unicode NFC normalization
    #[arg(long)]
    nfc: bool,
}

impl Default for NormalizeArgs {
    fn default() -> Self {
        Self {
            pages: None,
            lenient: false,
            trim: false,
            keep_footers: false,
            marker: DEFAULT_FOOTER_MARKER.to_string(),
            max_digits: DEFAULT_FOOTER_MAX_DIGITS,
            nfc: false,
        }
    }
}

impl NormalizeArgs {
    fn page_selection(&self) -> Result<PageSelection, Box<dyn std::error::Error>> {
        match self.pages.as_deref() {
            Some(p) => Ok(PageSelection::parse(p)?),
            None => Ok(PageSelection::All),
        }
    }

    fn source_options(&self) -> Result<SourceOptions, Box<dyn std::error::Error>> {
        let mut options = SourceOptions::new().with_pages(self.page_selection()?);
        if self.lenient {
            options = options.lenient();
        }
        Ok(options)
    }

    fn normalizer(&self) -> Result<PageTextNormalizer, Box<dyn std::error::Error>> {
        let options = NormalizeOptions::new()
            .with_strip_footers(!self.keep_footers)
            .with_footer(FooterPattern::new(self.marker.clone(), self.max_digits))
            .with_trim(self.trim)
            .with_unicode_normalization(self.nfc);
        Ok(PageTextNormalizer::new(options)?)
    }

    /// Extract and normalize one input file.
    fn clean(&self, input: &Path) -> Result<pagenorm::CleanedDocument, Box<dyn std::error::Error>> {
        let normalizer = self.normalizer()?;
        let source = open_source(input, self.source_options()?)?;
        let doc = source.extract()?;
        log::info!("{}: {} pages", source.name(), doc.page_count());
        Ok(normalizer.normalize_document(&doc))
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Clean {
            inputs,
            output,
            normalize,
        }) => cmd_clean(&inputs, output.as_deref(), &normalize),
        Some(Commands::Text {
            input,
            output,
            separator,
            page_markers,
            skip_empty,
            normalize,
        }) => {
            let render_options = RenderOptions::new()
                .with_separator(unescape(&separator))
                .with_page_markers(page_markers)
                .with_skip_empty(skip_empty);
            cmd_text(&input, output.as_deref(), render_options, &normalize)
        }
        Some(Commands::Json {
            input,
            output,
            compact,
            normalize,
        }) => cmd_json(&input, output.as_deref(), compact, &normalize),
        Some(Commands::Info { input, normalize }) => cmd_info(&input, &normalize),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: clean to text if input is provided
            if let Some(input) = cli.input {
                cmd_text(
                    &input,
                    cli.output.as_deref(),
                    RenderOptions::default(),
                    &cli.normalize,
                )
            } else {
                println!("{}", "Usage: pagenorm <FILE> [OUTPUT]".yellow());
                println!("       pagenorm --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_clean(
    inputs: &[PathBuf],
    output: Option<&Path>,
    normalize: &NormalizeArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("pagenorm_output"));
    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let render_options = RenderOptions::default();
    let mut totals = NormalizeStats::new();

    for (input, stem) in inputs.iter().zip(output_stems(inputs)) {
        pb.set_message(stem.clone());

        let doc = normalize.clean(input)?;
        totals.merge(&NormalizeStats::from_document(&doc));

        let text = pagenorm::render::to_text(&doc, &render_options)?;
        fs::write(output_dir.join(format!("{}.txt", stem)), &text)?;

        let json = pagenorm::render::to_json(&doc, JsonFormat::Pretty)?;
        fs::write(output_dir.join(format!("{}.json", stem)), &json)?;

        pb.inc(1);
    }

    pb.finish_with_message("Done!");

    println!(
        "\n{} {} files, {} pages, {} footers removed",
        "Cleaned".green().bold(),
        inputs.len(),
        totals.page_count,
        totals.footers_removed
    );
    println!("  {} {}", "└─".dimmed(), output_dir.display());

    Ok(())
}

/// Output file stems for a batch, suffixing `_2`, `_3`, ... when two
/// inputs share a stem so no output overwrites another.
fn output_stems(inputs: &[PathBuf]) -> Vec<String> {
    let mut used = HashSet::new();
    inputs
        .iter()
        .map(|input| {
            let base = input
                .file_stem()
                .unwrap_or_default()
                .to_string_lossy()
                .into_owned();
            let mut stem = base.clone();
            let mut n = 2;
            while !used.insert(stem.clone()) {
                stem = format!("{}_{}", base, n);
                n += 1;
            }
            if stem != base {
                log::warn!(
                    "{} shares its name with an earlier input, writing {}",
                    input.display(),
                    stem
                );
            }
            stem
        })
        .collect()
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    render_options: RenderOptions,
    normalize: &NormalizeArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = normalize.clean(input)?;
    let text = pagenorm::render::to_text(&doc, &render_options)?;
    write_output(output, &text)
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    normalize: &NormalizeArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = normalize.clean(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = pagenorm::render::to_json(&doc, format)?;
    write_output(output, &json)
}

fn cmd_info(input: &Path, normalize: &NormalizeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let format = pagenorm::detect_format_from_path(input)?;
    let doc = normalize.clean(input)?;
    let stats = NormalizeStats::from_document(&doc);

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Format".bold(), format);
    println!("{}: {}", "Pages".bold(), stats.page_count);
    println!("{}: {}", "Empty pages".bold(), stats.empty_pages);

    println!();
    println!("{}", "Cleanup Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Characters in".bold(), stats.chars_in);
    println!("{}: {}", "Characters out".bold(), stats.chars_out);
    println!(
        "{}: {:.1}%",
        "Reduction".bold(),
        stats.reduction_ratio() * 100.0
    );
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Whitespace runs".bold(), stats.whitespace_runs);
    println!("{}: {}", "Footers removed".bold(), stats.footers_removed);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pagenorm".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Page-text cleanup tool");
    println!();
    println!("License: MIT");
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

/// Expand `\n`, `\t`, `\f` and `\\` in a command-line separator.
fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('f') => out.push('\x0C'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unescape() {
        assert_eq!(unescape("\\n\\n"), "\n\n");
        assert_eq!(unescape("a\\tb\\f"), "a\tb\x0C");
        assert_eq!(unescape("\\\\"), "\\");
        assert_eq!(unescape("\\x"), "\\x");
        assert_eq!(unescape("end\\"), "end\\");
    }

    #[test]
    fn test_cli_parses_text_command() {
        let cli = Cli::try_parse_from([
            "pagenorm",
            "text",
            "in.txt",
            "--trim",
            "--max-digits",
            "4",
            "--pages",
            "2-3",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Text { normalize, .. }) => {
                assert!(normalize.trim);
                assert_eq!(normalize.max_digits, 4);
                assert_eq!(normalize.marker, "& /en");
                assert_eq!(
                    normalize.page_selection().unwrap(),
                    PageSelection::Range(2..=3)
                );
            }
            _ => panic!("Expected text command"),
        }
    }

    #[test]
    fn test_clean_text_dump() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("debate.txt");
        fs::write(&input, "Opening\n\nremarks & /en 1\x0cClosing\t remarks & /en 2\x0c").unwrap();

        let mut args = NormalizeArgs::default();
        args.trim = true;
        let doc = args.clean(&input).unwrap();

        assert_eq!(doc.texts(), vec!["Opening remarks", "Closing remarks"]);
    }

    #[test]
    fn test_cmd_clean_writes_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("pages.json");
        fs::write(&input, r#"["one\ntwo & /en 9", "three"]"#).unwrap();
        let out = dir.path().join("out");

        cmd_clean(&[input], Some(&out), &NormalizeArgs::default()).unwrap();

        let text = fs::read_to_string(out.join("pages.txt")).unwrap();
        assert_eq!(text, "one two \n\nthree");
        assert!(out.join("pages.json").exists());
    }

    #[test]
    fn test_default_args_match_library_defaults() {
        let args = NormalizeArgs::default();
        assert_eq!(args.marker, "& /en");
        assert_eq!(args.max_digits, 3);

        let normalizer = args.normalizer().unwrap();
        assert_eq!(normalizer.normalize("Item 7 & /en 12 done"), "Item 7 done");
    }

    #[test]
    fn test_output_stems_unique() {
        let inputs = vec![
            PathBuf::from("a/x.pdf"),
            PathBuf::from("b/x.pdf"),
            PathBuf::from("c/x.txt"),
            PathBuf::from("y.json"),
        ];
        assert_eq!(output_stems(&inputs), vec!["x", "x_2", "x_3", "y"]);
    }

    #[test]
    fn test_cmd_clean_same_stem_keeps_both() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a")).unwrap();
        fs::create_dir_all(dir.path().join("b")).unwrap();
        let first = dir.path().join("a").join("x.txt");
        let second = dir.path().join("b").join("x.txt");
        fs::write(&first, "first").unwrap();
        fs::write(&second, "second").unwrap();
        let out = dir.path().join("out");

        cmd_clean(&[first, second], Some(&out), &NormalizeArgs::default()).unwrap();

        assert_eq!(fs::read_to_string(out.join("x.txt")).unwrap(), "first");
        assert_eq!(fs::read_to_string(out.join("x_2.txt")).unwrap(), "second");
    }
}

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use hashscope::analysis::{compare, CollisionAnalyzer, CollisionReport};
use hashscope::dataset::generate::DEFAULT_SIZES;
use hashscope::dataset::{generate, load, Dataset, DatasetFormat, GeneratorConfig};
use hashscope::hash::{HashKernel, KernelKind, KernelParams};
use hashscope::HashScopeError;
use serde_json::json;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

type CliResult<T> = std::result::Result<T, Box<dyn Error>>;

#[derive(Debug, Parser)]
#[command(
    name = "hashscope",
    version,
    about = "Measure how string hash functions collide on keyed datasets",
    after_help = "\
Datasets are JSON objects (key -> value), JSON arrays of keys, or text files
with one key per line. Relative dataset paths are resolved against
--dataset-dir (or $HASHSCOPE_DATASET_DIR) when set.

  $ hashscope generate --out-dir datasets
  $ hashscope analyze murmur3 datasets/dataset_5k.json --seed 42
  $ hashscope compare datasets/dataset_5k.json datasets/dataset_20k.json"
)]
struct Cli {
    /// Verbose logging mode (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Silence all log output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Hash one dataset with one kernel and report collisions.
    Analyze {
        /// Kernel name or alias (see `hashscope kernels`)
        kernel: KernelKind,

        /// Dataset file
        dataset: PathBuf,

        #[command(flatten)]
        params: KernelArgs,

        #[command(flatten)]
        input: InputArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Also print the first N keys with their hash values (text output)
        #[arg(long, value_name = "N", default_value_t = 0)]
        preview: usize,
    },

    /// Run every kernel over one or more datasets.
    Compare {
        /// Dataset files
        #[arg(required = true)]
        datasets: Vec<PathBuf>,

        #[command(flatten)]
        params: KernelArgs,

        #[command(flatten)]
        input: InputArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Write reproducible random datasets as JSON.
    Generate {
        /// Directory to write into
        #[arg(long, env = "HASHSCOPE_DATASET_DIR", default_value = "datasets")]
        out_dir: PathBuf,

        /// Dataset sizes, comma separated
        #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SIZES)]
        sizes: Vec<usize>,

        /// RNG seed
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Characters per key
        #[arg(long, default_value_t = 10)]
        key_len: usize,

        /// Characters per value
        #[arg(long, default_value_t = 10)]
        value_len: usize,
    },

    /// List available kernels.
    Kernels,
}

#[derive(Debug, Args)]
struct KernelArgs {
    /// Seed for murmur3 (32-bit) and seeded
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Modulus for sum-modulo
    #[arg(long, default_value_t = 1000, allow_negative_numbers = true)]
    modulo: i64,

    /// Output width of djb2, in bits
    #[arg(long, default_value_t = 16)]
    bits: u32,
}

impl KernelArgs {
    fn params(&self) -> KernelParams {
        KernelParams::new()
            .with_seed(self.seed)
            .with_modulus(self.modulo)
            .with_djb2_bits(self.bits)
    }
}

#[derive(Debug, Args)]
struct InputArgs {
    /// Dataset file format: auto, json or lines
    #[arg(long, default_value = "auto")]
    input: DatasetFormat,

    /// Base directory for relative dataset paths
    #[arg(long, env = "HASHSCOPE_DATASET_DIR")]
    dataset_dir: Option<PathBuf>,
}

impl InputArgs {
    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.dataset_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }

    fn load(&self, path: &Path) -> hashscope::Result<(PathBuf, Dataset)> {
        let path = self.resolve(path);
        let dataset = load(&path, self.input)?;
        Ok((path, dataset))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "off"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> CliResult<ExitCode> {
    match command {
        Command::Analyze {
            kernel,
            dataset,
            params,
            input,
            format,
            preview,
        } => analyze(kernel, &dataset, &params, &input, format, preview),
        Command::Compare {
            datasets,
            params,
            input,
            format,
        } => compare_all(&datasets, &params, &input, format),
        Command::Generate {
            out_dir,
            sizes,
            seed,
            key_len,
            value_len,
        } => {
            let base = GeneratorConfig::new(0)
                .with_seed(seed)
                .with_key_len(key_len)
                .with_value_len(value_len);
            generate_all(&out_dir, &sizes, base)
        }
        Command::Kernels => {
            list_kernels()?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn analyze(
    kind: KernelKind,
    dataset: &Path,
    params: &KernelArgs,
    input: &InputArgs,
    format: OutputFormat,
    preview: usize,
) -> CliResult<ExitCode> {
    // Parameters are checked before the dataset is touched.
    let kernel = kind.build(&params.params())?;
    let (path, dataset) = input.load(dataset)?;
    tracing::info!(kernel = %kind, path = %path.display(), keys = dataset.len(), "analyzing");

    let report = CollisionAnalyzer::new(kernel.as_ref()).analyze(&dataset)?;

    match format {
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Text => {
            println!("dataset:               {}", path.display());
            println!("{report}");
            if preview > 0 {
                print_preview(&report, kernel.as_ref(), &dataset, preview)?;
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn print_preview(
    report: &CollisionReport,
    kernel: &dyn HashKernel,
    dataset: &Dataset,
    count: usize,
) -> hashscope::Result<()> {
    println!("first {} hashes:", count.min(dataset.len()));
    for entry in dataset.iter().take(count) {
        let hash = kernel.hash(entry.key())?;
        println!("  {} {:?}", report.format_hash(hash), entry.key_lossy());
    }
    Ok(())
}

fn compare_all(
    datasets: &[PathBuf],
    params: &KernelArgs,
    input: &InputArgs,
    format: OutputFormat,
) -> CliResult<ExitCode> {
    let kernels = KernelKind::build_all(&params.params())?;

    // Load everything first so an unreadable file produces no partial table.
    let loaded = datasets
        .iter()
        .map(|path| input.load(path))
        .collect::<hashscope::Result<Vec<_>>>()?;

    let mut failed = false;
    let mut documents = Vec::with_capacity(loaded.len());

    for (path, dataset) in &loaded {
        tracing::info!(path = %path.display(), keys = dataset.len(), "comparing kernels");
        let results = compare(dataset, &kernels);
        failed |= results.iter().any(Result::is_err);

        match format {
            OutputFormat::Json => {
                let reports = kernels
                    .iter()
                    .zip(&results)
                    .map(|(kernel, result)| match result {
                        Ok(report) => report.to_json_value(),
                        Err(e) => Ok(json!({ "kernel": kernel.name(), "error": e.to_string() })),
                    })
                    .collect::<serde_json::Result<Vec<_>>>()?;
                documents.push(json!({
                    "dataset": path.display().to_string(),
                    "keys": dataset.len(),
                    "reports": reports,
                }));
            }
            OutputFormat::Text => print_comparison(path, dataset, &kernels, &results),
        }
    }

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&documents)?);
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn print_comparison(
    path: &Path,
    dataset: &Dataset,
    kernels: &[Box<dyn HashKernel>],
    results: &[hashscope::Result<CollisionReport>],
) {
    println!("{} ({} keys)", path.display(), dataset.len());
    println!(
        "  {:<12} {:>7} {:>10} {:>10} {:>10} {:>8} {:>12}",
        "kernel", "width", "distinct", "colliding", "excess", "largest", "ns/key"
    );
    for (kernel, result) in kernels.iter().zip(results) {
        match result {
            Ok(r) => println!(
                "  {:<12} {:>7} {:>10} {:>10} {:>10} {:>8} {:>12}",
                r.kernel,
                r.width.to_string(),
                r.distinct_hashes,
                r.colliding_buckets,
                r.excess_colliding_keys,
                r.max_bucket_size,
                r.nanos_per_key()
                    .map_or_else(|| "-".to_owned(), |ns| format!("{ns:.1}")),
            ),
            Err(e) => println!("  {:<12} error: {e}", kernel.name()),
        }
    }
    println!();
}

fn generate_all(out_dir: &Path, sizes: &[usize], base: GeneratorConfig) -> CliResult<ExitCode> {
    std::fs::create_dir_all(out_dir)
        .map_err(|e| HashScopeError::dataset_unavailable(out_dir.display().to_string(), e))?;

    for &size in sizes {
        let config = GeneratorConfig { size, ..base };
        let dataset = generate(&config)?;
        let path = out_dir.join(config.file_name());
        dataset.write_json(&path)?;
        println!("wrote {} keys to {}", dataset.len(), path.display());
    }
    Ok(ExitCode::SUCCESS)
}

fn list_kernels() -> CliResult<()> {
    let params = KernelParams::default();
    println!("{:<12} {:>7}  aliases", "kernel", "width");
    for kind in KernelKind::ALL {
        let kernel = kind.build(&params)?;
        println!(
            "{:<12} {:>7}  {}",
            kind.name(),
            kernel.width().to_string(),
            kind.aliases().join(", ")
        );
    }
    Ok(())
}

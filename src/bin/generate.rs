use std::{
    error::Error,
    fs::File,
    io::{self, BufWriter, ErrorKind, Write},
    path::{Path, PathBuf},
    process::exit,
};

use clap::{Parser, ValueEnum};
use tracing_subscriber::filter::LevelFilter;

use sample_records::{Generator, OutputFormat, setup_logging, write_records};

/// A utility for generating random sample products and operations.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The kind of record to generate.
    #[arg(long, short, value_enum, default_value_t = RecordKind::Product)]
    kind: RecordKind,

    /// How many records to generate.
    #[arg(long, short = 'n', default_value_t = 10)]
    count: usize,

    /// Creation timestamp to give every record, used as is.
    ///
    /// When omitted, each record gets a random timestamp between 2020-01-01 and now.
    #[arg(long)]
    created_at: Option<String>,

    /// Seed for the random source, for reproducible output.
    #[arg(long)]
    seed: Option<u64>,

    /// The format to write the records in.
    #[arg(long, short, value_enum, default_value_t = FormatArg::Json)]
    format: FormatArg,

    /// File path to write the records to instead of stdout.
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Log debug messages. `RUST_LOG` overrides this.
    #[arg(long, short)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RecordKind {
    Product,
    Operation,
}

/// Command-line names for [OutputFormat].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Json,
    Ndjson,
    Csv,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Ndjson => OutputFormat::Ndjson,
            FormatArg::Csv => OutputFormat::Csv,
        }
    }
}

/// Generate records and write them to stdout or a file.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    setup_logging(if args.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    });

    let mut writer: Box<dyn Write> = match &args.output {
        Some(output_path) => match open_output(output_path) {
            Ok(file) => Box::new(BufWriter::new(file)),
            Err(error) if error.kind() == ErrorKind::AlreadyExists => {
                eprintln!("File already exists at {output_path:#?}!");
                exit(1);
            }
            Err(error) => return Err(error.into()),
        },
        None => Box::new(io::stdout().lock()),
    };

    let mut generator = match args.seed {
        Some(seed) => Generator::seeded(seed),
        None => Generator::from_entropy(),
    };
    let created_at = args.created_at.as_deref();
    let format = OutputFormat::from(args.format);

    match args.kind {
        RecordKind::Product => write_records(
            &generator.products(args.count, created_at),
            format,
            &mut writer,
        )?,
        RecordKind::Operation => write_records(
            &generator.operations(args.count, created_at),
            format,
            &mut writer,
        )?,
    }

    writer.flush()?;

    tracing::info!(
        "Generated {} {:?} records as {format:?}",
        args.count,
        args.kind
    );

    Ok(())
}

/// Create the file at `path` for writing.
///
/// # Errors
///
/// Returns an error of kind [ErrorKind::AlreadyExists] if a file is already at
/// `path`, which is left untouched.
fn open_output(path: &Path) -> io::Result<File> {
    File::create_new(path)
}

#[cfg(test)]
mod tests {
    use std::{
        fs,
        io::{ErrorKind, Write},
        path::PathBuf,
    };

    use clap::Parser;
    use sample_records::OutputFormat;

    use super::{Args, FormatArg, open_output};

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("sample_records_{}_{name}", std::process::id()))
    }

    #[test]
    fn open_output_refuses_existing_file() {
        let path = temp_path("existing.json");
        fs::write(&path, "x").unwrap();

        let result = open_output(&path);

        let error = result.expect_err("want an error for an existing file");
        assert_eq!(error.kind(), ErrorKind::AlreadyExists);
        assert_eq!(fs::read_to_string(&path).unwrap(), "x");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn open_output_creates_new_file() {
        let path = temp_path("new.json");
        let _ = fs::remove_file(&path);

        let mut file = open_output(&path).unwrap();
        file.write_all(b"[]\n").unwrap();
        drop(file);

        assert_eq!(fs::read_to_string(&path).unwrap(), "[]\n");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn format_args_map_to_output_formats() {
        assert_eq!(OutputFormat::from(FormatArg::Json), OutputFormat::Json);
        assert_eq!(OutputFormat::from(FormatArg::Ndjson), OutputFormat::Ndjson);
        assert_eq!(OutputFormat::from(FormatArg::Csv), OutputFormat::Csv);
    }

    #[test]
    fn args_default_to_ten_json_products() {
        let args = Args::try_parse_from(["generate"]).unwrap();

        assert_eq!(args.count, 10);
        assert_eq!(args.format, FormatArg::Json);
        assert!(matches!(args.kind, super::RecordKind::Product));
        assert!(args.output.is_none());
    }

    #[test]
    fn args_parse_format_names() {
        let args = Args::try_parse_from(["generate", "--format", "ndjson", "-k", "operation"])
            .unwrap();

        assert_eq!(args.format, FormatArg::Ndjson);
        assert!(matches!(args.kind, super::RecordKind::Operation));
    }
}

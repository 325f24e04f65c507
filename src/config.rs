use clap::{self, ArgAction, Parser, ValueHint};
use errors::*;
use std::ffi::OsString;
use std::io::BufRead;
use std::iter;
use std::path::{Path, PathBuf};

/// Where neighbor colors are read from while a pass is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeighborSource {
    /// The grid as it is right now, including cells already blurred this pass.
    Live,
    /// The colors the grid had when the pass started.
    Snapshot,
}

impl Default for NeighborSource {
    fn default() -> Self {
        NeighborSource::Live
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlurConfig {
    pub iterations: u32,
    pub seed: Option<u64>,
    pub neighbors: NeighborSource,
    pub quiet: bool,
}

/// Everything needed for one run of the command line tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// `None` when the iteration count has to be asked for.
    pub iterations: Option<u32>,
    pub config: BlurConfig,
}

const SAVE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

pub fn parse_iterations(s: &str) -> Result<u32> {
    let n: i64 = s
        .trim()
        .parse()
        .map_err(|_| invalid_config(format!("iteration count {:?} is not an integer", s.trim())))?;
    if n < 0 {
        bail!(invalid_config(format!(
            "iteration count must not be negative, got {}",
            n
        )));
    }
    if n > u32::max_value() as i64 {
        bail!(invalid_config(format!("iteration count {} is too large", n)));
    }
    Ok(n as u32)
}

pub fn check_output_path(path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());
    match extension {
        Some(ref e) if SAVE_EXTENSIONS.contains(&e.as_str()) => Ok(()),
        _ => Err(invalid_config(format!(
            "output {} must end in .jpg or .png",
            path.display()
        ))),
    }
}

/// Command line of the `scatter-blur` binary.
#[derive(Parser, Debug)]
#[command(name = "scatter-blur", version, about = "Randomized iterative 3x3 box blur")]
pub struct Cli {
    /// Image to blur
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: PathBuf,
    /// Where to save the blurred image (.jpg or .png)
    #[arg(value_hint = ValueHint::FilePath)]
    pub output: PathBuf,
    /// Number of full blur passes, asked for on stdin when omitted
    #[arg(allow_negative_numbers = true)]
    pub iterations: Option<String>,
    /// Seed for the random visiting order
    #[arg(long = "seed")]
    pub seed: Option<u64>,
    /// Average the colors each pass started with instead of the live grid
    #[arg(long = "snapshot", action = ArgAction::SetTrue)]
    pub snapshot: bool,
    /// No progress or timing output
    #[arg(short = 'q', long = "quiet", action = ArgAction::SetTrue)]
    pub quiet: bool,
}

fn build_config(cli: &Cli) -> BlurConfig {
    let mut config = BlurConfig::default();
    config.seed = cli.seed;
    if cli.snapshot {
        config.neighbors = NeighborSource::Snapshot;
    }
    config.quiet = cli.quiet;
    config
}

impl Invocation {
    /// Parses command line arguments, not including the program name.
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let args = iter::once(OsString::from("scatter-blur"))
            .chain(args.into_iter().map(Into::<OsString>::into));
        let cli = Cli::try_parse_from(args).map_err(|e| invalid_config(e.to_string()))?;
        Self::from_cli(cli)
    }

    /// Parses the process arguments. `--help`, `--version` and usage errors
    /// exit the process the way clap does.
    pub fn from_env() -> Result<Self> {
        Self::from_cli(Cli::parse())
    }

    pub fn from_cli(cli: Cli) -> Result<Self> {
        let iterations = match cli.iterations {
            Some(ref s) => Some(parse_iterations(s)?),
            None => None,
        };
        check_output_path(&cli.output)?;
        let config = build_config(&cli);

        Ok(Self {
            input_path: cli.input,
            output_path: cli.output,
            iterations,
            config,
        })
    }

    /// Fills in the iteration count, asking on `input` if it was not given.
    pub fn resolve<R: BufRead>(mut self, input: R) -> Result<(PathBuf, PathBuf, BlurConfig)> {
        self.config.iterations = match self.iterations {
            Some(n) => n,
            None => prompt_iterations(input)?,
        };
        Ok((self.input_path, self.output_path, self.config))
    }
}

pub fn prompt_iterations<R: BufRead>(mut input: R) -> Result<u32> {
    println!("Enter how many total blur iterations");
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .chain_err(|| "Could not read iteration count")?;
    if read == 0 {
        bail!(invalid_config("no iteration count given"));
    }
    parse_iterations(&line)
}

use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use sweeper_core::{BoardConfig, CellCount, Coord, Difficulty};

mod repl;
mod session;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// Board preset: easy, normal or hard
    #[arg(short, long, default_value_t = Difficulty::Easy)]
    difficulty: Difficulty,

    /// Custom number of rows, overrides the preset
    #[arg(long, requires_all = ["cols", "mines"])]
    rows: Option<Coord>,

    /// Custom number of columns, overrides the preset
    #[arg(long, requires_all = ["rows", "mines"])]
    cols: Option<Coord>,

    /// Custom number of mines, overrides the preset
    #[arg(long, requires_all = ["rows", "cols"])]
    mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print status as JSON after every command
    #[arg(long)]
    json: bool,
}

impl Args {
    fn custom_config(&self) -> Option<BoardConfig> {
        Some(BoardConfig::new((self.rows?, self.cols?), self.mines?))
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;
    log::debug!("seed: {:?}", args.seed);

    let mut session = match args.custom_config() {
        Some(config) => session::Session::custom(config, args.seed),
        None => session::Session::new(args.difficulty, args.seed),
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    repl::run(&mut session, stdin.lock(), stdout.lock(), args.json)
}

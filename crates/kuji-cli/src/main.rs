use kuji::render::{
    LabelOrientation, LayoutOptions, RingVariant, SvgRenderOptions, layout_seating, render_svg,
};
use kuji::{Assignment, Engine, HistoryStore, KujiConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::io::Read;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Core(kuji::Error),
    Render(kuji::render::HeadlessError),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Core(err) => write!(f, "{err}"),
            CliError::Render(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<kuji::Error> for CliError {
    fn from(value: kuji::Error) -> Self {
        Self::Core(value)
    }
}

impl From<kuji::render::HeadlessError> for CliError {
    fn from(value: kuji::render::HeadlessError) -> Self {
        Self::Render(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Draw,
    Layout,
    Render,
    History,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    history_path: String,
    no_history: bool,
    csv: bool,
    seed: Option<u64>,
    single_ring: bool,
    upright: bool,
    no_groups: bool,
    group_size: Option<u32>,
    json: bool,
    pretty: bool,
    background: Option<String>,
    out: Option<String>,
}

fn usage() -> &'static str {
    "kuji-cli\n\
\n\
USAGE:\n\
  kuji-cli [draw] [--seed <n>] [--json] [--pretty] [<path>|-]\n\
  kuji-cli layout [--seed <n>] [--ring single|double] [--upright] [--no-groups] [--pretty] [<path>|-]\n\
  kuji-cli render [--seed <n>] [--ring single|double] [--upright] [--no-groups] [--background <css-color>] [--out <path>] [<path>|-]\n\
  kuji-cli history [--pretty]\n\
\n\
OPTIONS:\n\
  --history <path>    history file (default: lottery_history.json)\n\
  --no-history        do not read or write the history file\n\
  --csv               input is a CSV table; names come from the second column\n\
  --group-size <n>    seats per group band (default: 6)\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', names are read from stdin, one per line.\n\
  - draw prints the numbered list by default; --json prints the assignment.\n\
  - render prints SVG to stdout by default; use --out to write a file.\n\
  - A roster identical to a past draw is reshuffled up to 100 times before\n\
    the last shuffle is accepted anyway.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args {
        history_path: "lottery_history.json".to_string(),
        ..Default::default()
    };

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "draw" => args.command = Command::Draw,
            "layout" => args.command = Command::Layout,
            "render" => args.command = Command::Render,
            "history" => args.command = Command::History,
            "--history" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.history_path = path.clone();
            }
            "--no-history" => args.no_history = true,
            "--csv" => args.csv = true,
            "--seed" => {
                let Some(seed) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.seed = Some(seed.parse::<u64>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--ring" => {
                let Some(ring) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.single_ring = match ring.as_str() {
                    "single" => true,
                    "double" => false,
                    _ => return Err(CliError::Usage(usage())),
                };
            }
            "--upright" => args.upright = true,
            "--no-groups" => args.no_groups = true,
            "--group-size" => {
                let Some(size) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                let size = size.parse::<u32>().map_err(|_| CliError::Usage(usage()))?;
                if size < 1 {
                    return Err(CliError::Usage(usage()));
                }
                args.group_size = Some(size);
            }
            "--json" => args.json = true,
            "--pretty" => args.pretty = true,
            "--background" => {
                let Some(bg) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                if !bg.trim().is_empty() {
                    args.background = Some(bg.trim().to_string());
                }
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_names(args: &Args) -> Result<Vec<String>, CliError> {
    if args.csv {
        let Some(path) = args.input.as_deref().filter(|p| *p != "-") else {
            return Err(CliError::Usage(usage()));
        };
        return Ok(kuji::roster::import_table(std::path::Path::new(path))?);
    }

    let text = match args.input.as_deref() {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
        Some(path) => std::fs::read_to_string(path)?,
    };
    Ok(kuji::roster::normalize_names(text.lines()))
}

fn build_engine(args: &Args) -> Engine {
    let history = if args.no_history {
        HistoryStore::in_memory()
    } else {
        HistoryStore::load(&args.history_path)
    };
    let mut engine = Engine::new().with_history(history);
    if let Some(size) = args.group_size {
        let mut overrides = KujiConfig::empty_object();
        overrides.set_value("seating.groupSize", serde_json::json!(size));
        engine = engine.with_site_config(overrides);
    }
    engine
}

fn run_draw(engine: &mut Engine, args: &Args) -> Result<Assignment, CliError> {
    let names = read_names(args)?;
    let assignment = match args.seed {
        Some(seed) => engine.draw_with_rng(&names, &mut StdRng::seed_from_u64(seed))?,
        None => engine.draw(&names)?,
    };
    Ok(assignment)
}

fn layout_options(args: &Args) -> LayoutOptions {
    LayoutOptions {
        variant: if args.single_ring {
            RingVariant::SingleRing
        } else {
            RingVariant::DoubleRing
        },
        orientation: if args.upright {
            LabelOrientation::Upright
        } else {
            LabelOrientation::FixedHorizontal
        },
        show_groups: !args.no_groups,
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    match args.command {
        Command::Draw => {
            let mut engine = build_engine(&args);
            let assignment = run_draw(&mut engine, &args)?;
            if args.json {
                write_json(&assignment, args.pretty)?;
            } else {
                for seat in assignment.sorted_by_number() {
                    println!("{:>2}: {}", seat.number, seat.name);
                }
            }
            Ok(())
        }
        Command::Layout => {
            let mut engine = build_engine(&args);
            let assignment = run_draw(&mut engine, &args)?;
            let layout = layout_seating(
                &assignment,
                engine.effective_config().as_value(),
                &layout_options(&args),
            )
            .map_err(kuji::render::HeadlessError::from)?;
            write_json(&layout, args.pretty)?;
            Ok(())
        }
        Command::Render => {
            let mut engine = build_engine(&args);
            let assignment = run_draw(&mut engine, &args)?;
            let layout = layout_seating(
                &assignment,
                engine.effective_config().as_value(),
                &layout_options(&args),
            )
            .map_err(kuji::render::HeadlessError::from)?;
            let svg_options = SvgRenderOptions {
                background: args.background.clone(),
            };
            let svg = render_svg(&layout, &svg_options);
            write_text(&svg, args.out.as_deref())?;
            Ok(())
        }
        Command::History => {
            let engine = build_engine(&args);
            write_json(&engine.history().records(), args.pretty)?;
            Ok(())
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(args) {
        match err {
            CliError::Usage(msg) => {
                eprintln!("{msg}");
                std::process::exit(2);
            }
            err => {
                eprintln!("{err}");
                std::process::exit(1);
            }
        }
    }
}

use std::path::PathBuf;

use eduverse::{options::Options, SubjectId, Viewer};

const USAGE: &str = "Usage: eduverse [SUBJECT] [MODEL_INDEX] [--options FILE]";

/// Parsed command line.
#[derive(Default)]
struct Args {
    subject: Option<String>,
    model_index: usize,
    options: Option<PathBuf>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut parsed = Args::default();
    let mut positional = 0;
    while let Some(arg) = args.next() {
        if arg == "--options" {
            let path = args.next().ok_or("--options needs a file path")?;
            parsed.options = Some(PathBuf::from(path));
            continue;
        }
        match positional {
            0 => parsed.subject = Some(arg),
            1 => {
                parsed.model_index = arg
                    .parse()
                    .map_err(|e| format!("bad model index {arg:?}: {e}"))?;
            }
            _ => return Err(format!("unexpected argument {arg:?}")),
        }
        positional += 1;
    }
    Ok(parsed)
}

fn main() {
    env_logger::init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            log::error!("{e}");
            log::error!("{USAGE}");
            std::process::exit(1);
        }
    };

    let options = match &args.options {
        Some(path) => match Options::load(path) {
            Ok(options) => options,
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    let mut builder = Viewer::builder().with_options(options);
    if let Some(id) = &args.subject {
        match id.parse::<SubjectId>() {
            Ok(subject) => {
                builder = builder.with_subject(subject, args.model_index);
            }
            Err(e) => log::error!("{e}, opening the subject picker"),
        }
    }

    if let Err(e) = builder.build().run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

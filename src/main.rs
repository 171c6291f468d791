use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use log::{info, LevelFilter};
use structopt::StructOpt;

use tracer::parsing::{load_json, ConfigData, Reply};
use tracer::{Frame, TraceConfig, Worker};

#[derive(Debug, StructOpt)]
#[structopt(name = "tracer", about = "Single-bounce ray tracer driven by JSON commands")]
struct Opt {
    /// Newline-delimited JSON commands. Reads stdin when omitted.
    #[structopt(short, long, parse(from_os_str))]
    input: Option<PathBuf>,

    /// Save rendered frames as PNG instead of echoing their pixels.
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,

    /// JSON file with tolerance, light and shading settings.
    #[structopt(short, long, parse(from_os_str))]
    config: Option<PathBuf>,

    /// Render threads, defaults to the number of logical cpus.
    #[structopt(short, long)]
    threads: Option<usize>,

    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,
}

/// `out.png` for the first frame, then `out-1.png`, `out-2.png`, ...
fn frame_path(base: &Path, index: usize) -> PathBuf {
    if index == 0 {
        return base.to_path_buf();
    }
    let stem = base
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("frame"));
    let name = match base.extension() {
        Some(ext) => format!("{}-{}.{}", stem, index, ext.to_string_lossy()),
        None => format!("{}-{}", stem, index),
    };
    base.with_file_name(name)
}

fn main() -> Result<(), Box<dyn Error>> {
    let opt = Opt::from_args();

    env_logger::Builder::new()
        .filter_level(opt.log_level)
        .parse_default_env()
        .init();

    let threads = opt.threads.unwrap_or_else(num_cpus::get);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()?;

    let config: TraceConfig = match &opt.config {
        Some(path) => TraceConfig::try_from(load_json::<ConfigData, _>(path)?)?,
        None => TraceConfig::default(),
    };
    info!("starting with {} threads, {:?}", threads, config);

    let input: Box<dyn BufRead> = match &opt.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut worker = Worker::new(config);
    let mut frames = 0;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let mut reply = worker.handle_json(&line);

        let saved = match (&opt.output, &reply) {
            (Some(base), Reply::Result { width, height, data }) => {
                let path = frame_path(base, frames);
                frames += 1;
                let frame = Frame {
                    width: *width,
                    height: *height,
                    buffer: data.clone(),
                };
                Some(match frame.save_png(&path) {
                    Ok(()) => Reply::notification(format!("Saved frame to {}", path.display())),
                    Err(e) => Reply::error(format!("failed to save {}: {}", path.display(), e)),
                })
            }
            _ => None,
        };
        if let Some(saved) = saved {
            reply = saved;
        }

        serde_json::to_writer(&mut out, &reply)?;
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_frame_path() {
        let base = Path::new("out/render.png");
        assert_eq!(frame_path(base, 0), PathBuf::from("out/render.png"));
        assert_eq!(frame_path(base, 2), PathBuf::from("out/render-2.png"));
        assert_eq!(frame_path(Path::new("render"), 1), PathBuf::from("render-1"));
    }
}

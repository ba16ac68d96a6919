//! `icn-studio`: renders an ICN program to an SVG or PNG file.

mod raster;
mod svg;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use icn_engine::logging::{LoggingConfig, init_logging};
use icn_engine::{Color, DrawList, IconRenderer, Vec2};

use crate::svg::SvgCanvas;

/// Wireframe cube, drawn with default settings when no source is given.
const SAMPLE: &str = "w 2 \
    line -12.1 -5.4 2.2 -7.6 line -12.1 10.3 2.2 12.5 line -2.7 7.3 6.8 8.1 \
    line -2.7 -2.4 6.8 -3.2 line -12.1 -5.4 -12.1 10.3 line 2.2 -7.6 2.2 12.5 \
    line -2.7 -2.4 -2.7 7.3 line 6.8 -3.2 6.8 8.1 line -12.1 -5.4 -2.7 -2.4 \
    line 2.2 -7.6 6.8 -3.2 line 2.2 12.5 6.8 8.1 line -12.1 10.3 -2.7 7.3";

#[derive(Debug, Parser)]
#[command(name = "icn-studio", version, about = "Render an ICN icon to SVG or PNG")]
struct Args {
    /// ICN source text. Falls back to --file, then to a built-in sample.
    source: Option<String>,

    /// Read ICN source from a file.
    #[arg(short, long, conflicts_with = "source")]
    file: Option<PathBuf>,

    /// Output path; `.svg` writes vector output, anything else PNG.
    #[arg(short, long, default_value = "icon.png")]
    out: PathBuf,

    #[arg(long, default_value_t = 800)]
    width: u32,

    #[arg(long, default_value_t = 800)]
    height: u32,

    /// Icon origin X in pixels [default: canvas center].
    #[arg(short = 'x', long, allow_hyphen_values = true)]
    origin_x: Option<f32>,

    /// Icon origin Y in pixels [default: canvas center].
    #[arg(short = 'y', long, allow_hyphen_values = true)]
    origin_y: Option<f32>,

    /// Pixels per authored unit.
    #[arg(short, long, default_value_t = 10.0)]
    scale: f32,

    /// Background color (`rgb` / `rrggbb`, optional `#`).
    #[arg(long, default_value = "#000000")]
    background: String,

    /// Leave the background transparent.
    #[arg(long, conflicts_with = "background")]
    transparent: bool,

    /// Print the parsed program and the recorded draw stream.
    #[arg(long)]
    dump: bool,

    /// Log filter in env_logger syntax (overrides RUST_LOG).
    #[arg(long)]
    log: Option<String>,

    /// Hide malformed-input warnings.
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn logging(&self) -> LoggingConfig {
        let mut config = LoggingConfig::default();
        if let Some(filter) = &self.log {
            config = config.with_filter(filter.clone());
        }
        if self.quiet {
            config = config.quiet_diagnostics();
        }
        config
    }

    fn load_source(&self) -> Result<String> {
        match (&self.source, &self.file) {
            (Some(src), _) => Ok(src.clone()),
            (None, Some(path)) => std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display())),
            (None, None) => Ok(SAMPLE.to_string()),
        }
    }

    fn origin(&self) -> Vec2 {
        Vec2::new(
            self.origin_x.unwrap_or(self.width as f32 / 2.0),
            self.origin_y.unwrap_or(self.height as f32 / 2.0),
        )
    }

    fn background(&self) -> Result<Option<Color>> {
        if self.transparent {
            return Ok(None);
        }
        let color = Color::from_hex(&self.background)
            .with_context(|| format!("--background {:?}", self.background))?;
        Ok(Some(color))
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.logging());

    let source = args.load_source()?;
    let renderer = IconRenderer::new();
    let program = renderer.parse(&source);
    if !program.diagnostics().is_empty() {
        log::info!("{} problem(s) recovered while parsing", program.diagnostics().len());
    }

    let mut list = DrawList::new();
    renderer.render(&mut list, &source, args.origin(), args.scale);
    log::info!("{} command(s) → {} primitive(s)", program.len(), list.len());

    if args.dump {
        println!("{}", program);
        println!();
        for cmd in list.items() {
            println!("{:?}", cmd);
        }
    }

    let mut svg = SvgCanvas::new(args.width, args.height, args.background()?);
    list.replay(&mut svg);
    write_output(&args.out, svg.finish())?;

    log::info!("wrote {}", args.out.display());
    Ok(())
}

fn write_output(path: &Path, svg: String) -> Result<()> {
    let is_svg = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

    if is_svg {
        std::fs::write(path, svg).with_context(|| format!("writing {}", path.display()))
    } else {
        raster::rasterize(&svg)?
            .save(path)
            .with_context(|| format!("writing {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["icn-studio"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults_center_the_icon() {
        let a = args(&[]);
        assert_eq!(a.origin(), Vec2::new(400.0, 400.0));
        assert_eq!(a.scale, 10.0);
        assert_eq!(a.load_source().unwrap(), SAMPLE);
        assert_eq!(a.background().unwrap(), Some(Color::BLACK));
    }

    #[test]
    fn explicit_source_and_origin() {
        let a = args(&["dot 0 0", "-x", "-5", "-y", "12", "--transparent"]);
        assert_eq!(a.load_source().unwrap(), "dot 0 0");
        assert_eq!(a.origin(), Vec2::new(-5.0, 12.0));
        assert_eq!(a.background().unwrap(), None);
    }

    #[test]
    fn bad_background_is_reported() {
        assert!(args(&["--background", "#12"]).background().is_err());
    }

    #[test]
    fn sample_parses_cleanly() {
        let list = icn_lang::parse_str(SAMPLE);
        assert_eq!(list.len(), 13);
        assert!(list.diagnostics().is_empty());
    }

    #[test]
    fn sample_renders_to_svg() {
        let renderer = IconRenderer::new();
        let mut svg = SvgCanvas::new(800, 800, None);
        renderer.render(&mut svg, SAMPLE, Vec2::new(400.0, 400.0), 10.0);
        // 12 edges, each a stroke plus two round caps.
        assert_eq!(svg.element_count(), 36);
    }
}

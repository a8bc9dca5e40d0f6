use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

use smart_tooltip::input::InputEvent;
use smart_tooltip::tooltip::{anchor_rect, arrow, clamp_to_viewport, Arrow, Phase, Side, Viewport};
use smart_tooltip::ui::widgets::{MonospaceMetrics, Tooltip};
use smart_tooltip::{Rect, TooltipConfig};

const USAGE: &str = "\
usage:
  smart-tooltip [--config <path>] place --trigger x,y,w,h --tooltip w,h --viewport w,h[,sx,sy]
  smart-tooltip [--config <path>] replay <script.json>";

/// Parsed command line
#[derive(Default)]
struct CliArgs {
    config: Option<PathBuf>,
    command: Option<String>,
    trigger: Option<String>,
    tooltip: Option<String>,
    viewport: Option<String>,
    script: Option<PathBuf>,
}

fn parse_args() -> CliArgs {
    let mut args = CliArgs::default();
    let mut iter = std::env::args().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => args.config = iter.next().map(PathBuf::from),
            "--trigger" => args.trigger = iter.next(),
            "--tooltip" => args.tooltip = iter.next(),
            "--viewport" => args.viewport = iter.next(),
            other if !other.starts_with('-') => {
                if args.command.is_none() {
                    args.command = Some(other.to_string());
                } else {
                    // Positional arg after the command = script path
                    args.script = Some(PathBuf::from(other));
                }
            }
            _ => {}
        }
    }

    args
}

/// Parse "a,b,c" into exactly `N` numbers
fn parse_numbers<const N: usize>(flag: &str, value: Option<&str>) -> Result<[f32; N]> {
    let Some(value) = value else {
        bail!("missing {flag}\n{USAGE}");
    };
    let numbers = value
        .split(',')
        .map(|part| part.trim().parse::<f32>())
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("{flag} expects comma-separated numbers, got '{value}'"))?;
    numbers
        .try_into()
        .map_err(|v: Vec<f32>| anyhow::anyhow!("{flag} expects {N} numbers, got {}", v.len()))
}

fn parse_viewport(value: Option<&str>) -> Result<Viewport> {
    if let Some(v) = value.filter(|v| v.split(',').count() == 4) {
        let [w, h, sx, sy] = parse_numbers::<4>("--viewport", Some(v))?;
        return Ok(Viewport::new(w, h).with_scroll(sx, sy));
    }
    let [w, h] = parse_numbers::<2>("--viewport", value)?;
    Ok(Viewport::new(w, h))
}

#[derive(Serialize)]
struct PlaceReport {
    side: Side,
    rect: Rect,
    arrow: Arrow,
}

fn run_place(args: &CliArgs, config: &TooltipConfig) -> Result<()> {
    let [x, y, w, h] = parse_numbers::<4>("--trigger", args.trigger.as_deref())?;
    let [tw, th] = parse_numbers::<2>("--tooltip", args.tooltip.as_deref())?;
    let viewport = parse_viewport(args.viewport.as_deref())?;

    let trigger = Rect::new(x, y, w, h);
    let side = config.placement.resolve(&trigger, &Rect::from_size(tw, th), &viewport, config.margin);
    let mut rect = anchor_rect(side, &trigger, tw, th, config.offset);
    if let Some(inset) = config.clamp_inset {
        rect = clamp_to_viewport(&rect, &viewport, inset);
    }
    let report = PlaceReport {
        side,
        rect,
        arrow: arrow(side, &rect, &trigger, config.arrow_size),
    };
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}

/// Timed event script for `replay`
#[derive(Deserialize)]
struct Script {
    content: String,
    /// Absent while the trigger is not attached
    #[serde(default)]
    trigger: Option<Rect>,
    viewport: Viewport,
    steps: Vec<ScriptStep>,
}

#[derive(Deserialize)]
struct ScriptStep {
    at_ms: u64,
    /// A step without an event only advances the clock
    #[serde(default)]
    event: Option<InputEvent>,
}

#[derive(Serialize)]
struct StepReport {
    at_ms: u64,
    event: Option<&'static str>,
    phase: Option<Phase>,
    side: Option<Side>,
    rect: Option<Rect>,
}

fn run_replay(args: &CliArgs, config: &TooltipConfig) -> Result<()> {
    let Some(path) = args.script.as_ref() else {
        bail!("missing script path\n{USAGE}");
    };
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let mut script: Script = serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    script.steps.sort_by_key(|s| s.at_ms);

    let metrics = MonospaceMetrics::default();
    let mut tooltip = Tooltip::new(script.content, config);
    let mut viewport = script.viewport;
    let start = Instant::now();

    for step in &script.steps {
        let now = start + Duration::from_millis(step.at_ms);
        tooltip.update(now);
        if let Some(event) = &step.event {
            if let InputEvent::ViewportChanged(v) = event {
                viewport = *v;
            }
            tooltip.handle_event(event, now);
        }
        let layout = tooltip.layout(&metrics, script.trigger, viewport);
        let report = StepReport {
            at_ms: step.at_ms,
            event: step.event.as_ref().map(InputEvent::name),
            phase: tooltip.phase(),
            side: layout.map(|l| l.side),
            rect: layout.map(|l| l.rect),
        };
        println!("{}", serde_json::to_string(&report)?);
    }

    tooltip.unmount();
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args();
    let config = match &args.config {
        Some(path) => TooltipConfig::load_from(path)?,
        None => TooltipConfig::load(),
    };

    match args.command.as_deref() {
        Some("place") => run_place(&args, &config),
        Some("replay") => run_replay(&args, &config),
        Some(other) => bail!("unknown command '{other}'\n{USAGE}"),
        None => bail!("{USAGE}"),
    }
}

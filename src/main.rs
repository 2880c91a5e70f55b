//! Ring Runner entry point
//!
//! The browser build is driven from JavaScript through `platform::web::WebWorld`.
//! Natively this runs a headless scripted flight: full thrust straight ahead
//! at a synthetic 60 Hz until the run finishes, the world resets, or the tick
//! budget runs out.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;

    use anyhow::{Context, Result, bail};
    use clap::Parser;

    use ring_runner::platform::{SyntheticClock, init_logging};
    use ring_runner::renderer::{FrameData, Renderer};
    use ring_runner::sim::{TimerEvent, keys};
    use ring_runner::{FrameOrchestrator, InputState, WorldConfig, WorldPreset};

    #[derive(Parser, Debug)]
    #[command(name = "ring-runner")]
    #[command(about = "Headless checkpoint flight", long_about = None)]
    struct Cli {
        /// World config (JSON); defaults to the chosen preset
        config: Option<PathBuf>,
        /// Preset used when no config file is given (glider, arcade, free)
        #[arg(long, default_value = "glider")]
        preset: String,
        /// Maximum number of ticks to simulate
        #[arg(long, default_value_t = 3600)]
        ticks: u32,
        /// Tick rate of the synthetic clock
        #[arg(long, default_value_t = 60.0)]
        rate: f64,
        /// Print the resolved config and exit
        #[arg(long)]
        dump_config: bool,
    }

    /// Counts frames and triangles instead of drawing
    #[derive(Default)]
    struct TallyRenderer {
        frames: u64,
        triangles: u64,
    }

    impl Renderer for TallyRenderer {
        fn submit(&mut self, frame: &FrameData) {
            self.frames += 1;
            self.triangles += frame.triangle_count() as u64;
        }
    }

    fn resolve_config(cli: &Cli) -> Result<WorldConfig> {
        if let Some(path) = &cli.config {
            return WorldConfig::load(path)
                .with_context(|| format!("loading {}", path.display()));
        }
        let Some(preset) = WorldPreset::from_str(&cli.preset) else {
            bail!("unknown preset `{}`", cli.preset);
        };
        Ok(WorldConfig::from_preset(preset))
    }

    pub fn run() -> Result<()> {
        init_logging();
        let cli = Cli::parse();
        let config = resolve_config(&cli)?;

        if cli.dump_config {
            println!("{}", config.to_json()?);
            return Ok(());
        }

        let mut world = FrameOrchestrator::new(config);
        let mut renderer = TallyRenderer::default();
        let mut clock = SyntheticClock::new(cli.rate);
        let input = InputState::with_pressed([keys::THRUST]);

        for _ in 0..cli.ticks {
            let now = clock.advance();
            let report = world.run_frame(&input, now, &mut renderer);

            if let Some(TimerEvent::Finished { duration }) = report.timer_event {
                log::info!("All checkpoints cleared in {:.2}s", duration);
                break;
            }
            if report.reset {
                log::info!("Flew out of the world after {} ticks", clock.ticks());
                break;
            }
        }

        let state = world.state();
        log::info!(
            "{} frames, {:.0} triangles/frame, {} checkpoints left",
            renderer.frames,
            renderer.triangles as f64 / renderer.frames.max(1) as f64,
            state.targets.len()
        );
        println!("{}", world.frame().timer_text);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    headless::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::WebWorld, this is just to satisfy the compiler
}

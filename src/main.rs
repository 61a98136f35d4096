//! Tilt Table entry point
//!
//! Headless driver: racks the table, feeds it a slowly circling tilt at 60 Hz
//! and reports the score and where the balls ended up.
//!
//! Usage: `tilt-table [config.json|-] [seed] [frames]`

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use glam::Vec2;

    use tilt_table::{FrameInput, ParticleSystem, ScoreTally, TableConfig, Viewport};

    /// 60 Hz in nanoseconds
    const FRAME_NS: i64 = 16_666_667;
    const DEFAULT_SEED: u64 = 0x7117_7ab1e;
    const DEFAULT_FRAMES: u64 = 3600;

    /// A 10-inch tablet, used when no config file is given. Small phone
    /// screens put the pocket thresholds outside the table.
    fn demo_viewport() -> Viewport {
        Viewport::new(1600, 2560, 160.0, 160.0)
    }

    pub fn run() -> tilt_table::Result<()> {
        let mut args = std::env::args().skip(1);

        let config = match args.next().as_deref() {
            Some(path) if path != "-" => TableConfig::load(path)?,
            _ => {
                let mut config = TableConfig::default();
                config.fit_to_viewport(&demo_viewport());
                config
            }
        };
        let seed = args
            .next()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_SEED);
        let frames = args
            .next()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_FRAMES);

        let mut system = ParticleSystem::seeded(config, seed)?;
        log::info!("Table initialized with seed: {}", seed);

        let mut tally = ScoreTally::new();
        for frame in 0..frames {
            let t = frame as f32 / 60.0;
            // Tilt sweeps around the table, leaning hardest every few seconds
            let strength = 3.0 + 2.0 * (t * 0.7).sin();
            let tilt = Vec2::from_angle(t * 0.5) * strength;
            let input = FrameInput {
                tilt,
                timestamp_ns: frame as i64 * FRAME_NS,
            };
            system.update(&input, &mut tally);

            if frame % 600 == 0 {
                log::info!(
                    "t={:.1}s score={} pocketed={}",
                    t,
                    tally.score,
                    tally.pocket_hits
                );
            }
        }

        println!(
            "score: {} ({} pocketed, {} right, {} wrong)",
            tally.score,
            tally.pocket_hits,
            tally.matches,
            tally.misses()
        );
        for (i, ball) in system.particles().iter().enumerate() {
            println!(
                "ball {:2} {:>6}  ({:+.4}, {:+.4})",
                i,
                ball.tag.as_str(),
                ball.pos.x,
                ball.pos.y
            );
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Tilt Table (native) starting...");

    if let Err(e) = native::run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The library is the product on wasm; this only satisfies the compiler
}

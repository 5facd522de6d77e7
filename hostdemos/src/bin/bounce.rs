//! Particles bouncing around a headless display.

use anyhow::Context;
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use hostdemos::{Args, Sim};
use xfb::host::{HeadlessDisplay, VoicePool};
use xfb::shutdown::ShutdownFlag;
use xfb_fx_particles::bounce::Bounce;

static SHUTDOWN: ShutdownFlag = ShutdownFlag::new();

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let display = HeadlessDisplay::new(args.width, args.height);
    let (width, height) = xfb::display::dimensions(&display)?;

    let mut rng = SmallRng::seed_from_u64(args.seed);
    let demo = Bounce::new(&args.field_config(), width, height, &mut rng)
        .context("setting up particle field")?;

    let mut sim = Sim::new(
        demo,
        display,
        args.input(width, height),
        VoicePool::new(args.hold),
        &SHUTDOWN,
    )?
    .with_frame_limit(Some(args.frames));

    let reason = sim.run();
    let demo = sim.demo();
    println!(
        "{:?} after {} frames: {} collisions, {} tones played, {} dropped",
        reason,
        sim.frames_shown(),
        demo.collisions(),
        sim.audio().triggered(),
        demo.dropped(),
    );
    Ok(())
}

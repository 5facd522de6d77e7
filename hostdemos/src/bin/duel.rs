//! Two simulated remotes steering tokens while particles bounce between them.

use anyhow::Context;
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use hostdemos::{Args, Sim};
use xfb::host::{HeadlessDisplay, VoicePool};
use xfb::shutdown::ShutdownFlag;
use xfb_fx_particles::duel::Duel;

static SHUTDOWN: ShutdownFlag = ShutdownFlag::new();

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    if args.remotes < 2 {
        log::warn!("only {} remote(s); some tokens won't move", args.remotes);
    }

    let display = HeadlessDisplay::new(args.width, args.height);
    let (width, height) = xfb::display::dimensions(&display)?;

    let mut rng = SmallRng::seed_from_u64(args.seed);
    let demo = Duel::new(&args.field_config(), width, height, &mut rng)
        .context("setting up duel")?;

    let mut sim = Sim::new(
        demo,
        display,
        args.input(width, height),
        VoicePool::new(args.hold),
        &SHUTDOWN,
    )?
    .with_frame_limit(Some(args.frames));

    let reason = sim.run();
    let tokens = sim.demo().field().tokens();
    println!(
        "{:?} after {} frames: {} collisions ({} unheard), tokens at y={} and y={}",
        reason,
        sim.frames_shown(),
        sim.demo().collisions(),
        sim.demo().dropped(),
        tokens[0].pos_y,
        tokens[1].pos_y,
    );
    Ok(())
}

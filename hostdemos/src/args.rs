use clap::Parser;

use xfb::host::SweepInput;
use xfb_fx_particles::FieldConfig;

/// Command line shared by the demo binaries.
#[derive(Parser, Debug)]
#[command(version, about = "Bouncing particles, headless", long_about = None)]
pub struct Args {
    /// Display width in pixels (even)
    #[arg(long, default_value_t = 640)]
    pub width: usize,

    /// Display height in pixels
    #[arg(long, default_value_t = 480)]
    pub height: usize,

    /// Number of particles
    #[arg(long, default_value_t = 10)]
    pub particles: usize,

    /// Random seed for the initial field
    #[arg(long, default_value_t = 11181981)]
    pub seed: u64,

    /// Stop after this many frames
    #[arg(long, default_value_t = 600)]
    pub frames: usize,

    /// Margin around the play area, in percent of the screen size
    #[arg(long, default_value_t = 0)]
    pub margin: u32,

    /// Number of simulated remotes
    #[arg(long, default_value_t = 2)]
    pub remotes: usize,

    /// Frames a collision tone holds its voice
    #[arg(long, default_value_t = 20)]
    pub hold: u32,
}

impl Args {
    pub fn field_config(&self) -> FieldConfig {
        FieldConfig {
            count: self.particles,
            margin_percent: self.margin,
            ..FieldConfig::default()
        }
    }

    pub fn input(&self, width: usize, height: usize) -> SweepInput {
        SweepInput::new(width, height, self.remotes)
    }
}

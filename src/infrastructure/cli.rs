use std::path::PathBuf;

use clap::Parser;

use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 30.0
    )]
    pub frame_rate: f64,

    #[arg(
        short,
        long,
        value_name = "PATH",
        help = "Start at a route, e.g. /movies/27205"
    )]
    pub route: Option<String>,

    #[arg(
        long,
        value_name = "FILE",
        help = "Read now-playing movies from a JSON file instead of TMDB"
    )]
    pub fixture: Option<PathBuf>,

    #[arg(long, help = "Disable mouse capture")]
    pub no_mouse: bool,
}

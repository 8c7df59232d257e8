use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Interactive N×N Rubik's cube for the terminal
#[derive(Debug, Clone, Parser)]
#[command(version, about)]
pub struct Args {
    /// Stickers along each edge of the cube
    #[arg(short = 'n', long, default_value_t = 3)]
    pub size: usize,

    /// Frame rate cap
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..=120))]
    pub fps: u32,

    /// Moves applied before the first frame, e.g. "R U R' U'"
    #[arg(long)]
    pub scramble: Option<String>,

    /// Print the cube state and exit instead of opening the viewer
    #[arg(long)]
    pub print: bool,

    /// Start in the flat net view
    #[arg(long)]
    pub net: bool,

    /// Camera rotation in degrees per terminal cell dragged
    #[arg(long, default_value_t = 2.0)]
    pub sensitivity: f64,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn frame_time(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.fps))
    }

    pub fn controls(&self) -> Controls {
        Controls {
            rotate_sensitivity: self.sensitivity,
            ..Controls::default()
        }
    }
}

/// Gesture tuning, in terminal cells
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Controls {
    /// Degrees of camera rotation per cell dragged
    pub rotate_sensitivity: f64,
    /// Viewer distance per row dragged
    pub zoom_sensitivity: f64,
    /// Columns a right-button drag must cover to turn the front face
    pub face_drag_threshold: u16,
}

impl Default for Controls {
    fn default() -> Self {
        Controls {
            rotate_sensitivity: 2.0,
            zoom_sensitivity: 0.1,
            face_drag_threshold: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a_plain_invocation() {
        let args = Args::try_parse_from(["rcube"]).unwrap();
        assert_eq!(args.size, 3);
        assert_eq!(args.fps, 30);
        assert!(!args.print && !args.net);
        assert_eq!(args.controls(), Controls::default());
    }

    #[test]
    fn parses_scramble_and_size() {
        let args =
            Args::try_parse_from(["rcube", "-n", "5", "--scramble", "R U R'", "--print"]).unwrap();
        assert_eq!(args.size, 5);
        assert_eq!(args.scramble.as_deref(), Some("R U R'"));
        assert!(args.print);
    }

    #[test]
    fn rejects_out_of_range_fps() {
        assert!(Args::try_parse_from(["rcube", "--fps", "0"]).is_err());
        assert!(Args::try_parse_from(["rcube", "--fps", "500"]).is_err());
    }

    #[test]
    fn frame_time_follows_fps() {
        let args = Args::try_parse_from(["rcube", "--fps", "20"]).unwrap();
        assert_eq!(args.frame_time(), Duration::from_millis(50));
    }
}

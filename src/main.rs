//! Liquid Bridge entry point
//!
//! Evaluates one animation frame from the command line and prints the bridge
//! state, neck radii, opacity and SVG path.

#[cfg(not(target_arch = "wasm32"))]
use clap::Parser;
#[cfg(not(target_arch = "wasm32"))]
use liquid_bridge::{
    BridgePhase, BridgeState, Circle, compute_bridge_opacity, compute_neck_radius,
    physics_metaball_path, simple_metaball_path,
};

/// Evaluate one frame of a liquid bridge between two circles
#[cfg(not(target_arch = "wasm32"))]
#[derive(Parser, Debug)]
#[command(name = "liquid-bridge")]
#[command(about = "Liquid bridge geometry for one animation frame", long_about = None)]
#[command(allow_negative_numbers = true)]
struct FrameArgs {
    /// Circle 1 center x
    x1: f32,
    /// Circle 1 center y
    y1: f32,
    /// Circle 1 radius
    r1: f32,
    /// Circle 2 center x
    x2: f32,
    /// Circle 2 center y
    y2: f32,
    /// Circle 2 radius
    r2: f32,
    /// Distance beyond which the bridge ruptures
    stretch_limit: f32,

    /// Transition phase (merge or bud)
    #[arg(default_value = "merge", value_parser = parse_phase)]
    phase: BridgePhase,

    /// Use the simple (non-necking) outline
    #[arg(long)]
    simple: bool,
}

#[cfg(not(target_arch = "wasm32"))]
impl FrameArgs {
    fn circles(&self) -> (Circle, Circle) {
        (
            Circle::new(self.x1, self.y1, self.r1),
            Circle::new(self.x2, self.y2, self.r2),
        )
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn parse_phase(s: &str) -> Result<BridgePhase, String> {
    BridgePhase::from_str(s).ok_or_else(|| format!("unknown phase {s:?} (expected merge or bud)"))
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let frame = FrameArgs::parse();
    log::debug!("Evaluating frame: {:?}", frame);

    let (a, b) = frame.circles();
    let distance = a.distance_to(&b);
    let state = BridgeState::classify(distance, frame.stretch_limit);
    let path = if frame.simple {
        simple_metaball_path(a, b, frame.stretch_limit)
    } else {
        physics_metaball_path(a, b, frame.stretch_limit)
    };
    if path.is_empty() {
        log::info!("No bridge to draw ({})", state.as_str());
    }

    println!("distance: {:.3}", distance);
    println!("state:    {}", state.as_str());
    println!(
        "neck:     {:.3} / {:.3}",
        compute_neck_radius(a.r, distance, frame.stretch_limit),
        compute_neck_radius(b.r, distance, frame.stretch_limit)
    );
    println!(
        "opacity:  {:.3} ({})",
        compute_bridge_opacity(distance, frame.stretch_limit, frame.phase),
        frame.phase.as_str()
    );
    println!("path:     {}", path);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm::init, this is just to satisfy the compiler
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<FrameArgs, clap::Error> {
        FrameArgs::try_parse_from(std::iter::once("liquid-bridge").chain(args.iter().copied()))
    }

    #[test]
    fn test_parse_full() {
        let frame = parse(&["0", "0", "20", "100", "0", "20", "150", "bud", "--simple"]).unwrap();
        let (_, b) = frame.circles();
        assert_eq!(b, Circle::new(100.0, 0.0, 20.0));
        assert_eq!(frame.stretch_limit, 150.0);
        assert_eq!(frame.phase, BridgePhase::Bud);
        assert!(frame.simple);
    }

    #[test]
    fn test_parse_defaults_to_merge() {
        let frame = parse(&["0", "0", "20", "100", "0", "20", "150"]).unwrap();
        assert_eq!(frame.phase, BridgePhase::Merge);
        assert!(!frame.simple);
    }

    #[test]
    fn test_parse_negative_coordinates() {
        let frame = parse(&["-10", "-5.5", "20", "40", "-5.5", "20", "150"]).unwrap();
        let (a, _) = frame.circles();
        assert_eq!(a, Circle::new(-10.0, -5.5, 20.0));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse(&["0", "0", "20"]).unwrap_err().kind(),
            ErrorKind::MissingRequiredArgument
        );
        assert_eq!(
            parse(&["0", "0", "20", "x", "0", "20", "150"]).unwrap_err().kind(),
            ErrorKind::ValueValidation
        );
        assert_eq!(
            parse(&["0", "0", "20", "100", "0", "20", "150", "pop"]).unwrap_err().kind(),
            ErrorKind::ValueValidation
        );
        assert_eq!(
            parse(&["0", "0", "20", "100", "0", "20", "150", "--simpel"]).unwrap_err().kind(),
            ErrorKind::UnknownArgument
        );
    }

    #[test]
    fn test_help_is_not_a_parse_failure() {
        assert_eq!(parse(&["--help"]).unwrap_err().kind(), ErrorKind::DisplayHelp);
    }
}

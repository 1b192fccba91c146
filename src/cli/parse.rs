use galaxy_core::format::OutputFormat;
use galaxy_core::idea::{IdeaStatus, Position};

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse idea status from string
pub fn parse_status(s: &str) -> std::result::Result<IdeaStatus, String> {
    s.parse::<IdeaStatus>().map_err(|e| e.to_string())
}

/// Parse a canvas position written as `x,y`
pub fn parse_position(s: &str) -> std::result::Result<Position, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("invalid position '{}' (expected x,y)", s))?;
    let x: f64 = x
        .trim()
        .parse()
        .map_err(|_| format!("invalid position x '{}'", x.trim()))?;
    let y: f64 = y
        .trim()
        .parse()
        .map_err(|_| format!("invalid position y '{}'", y.trim()))?;
    Position::new(x, y).map_err(|e| e.to_string())
}

//! Built-in guide constants and angle units (DrawingML conventions)

/// OOXML angles are stored in 60000ths of a degree
pub const ANGLE_UNITS_PER_DEGREE: f64 = 60_000.0;

/// 180°
pub const CD2: f64 = 10_800_000.0;
/// 90°
pub const CD4: f64 = 5_400_000.0;
/// 45°
pub const CD8: f64 = 2_700_000.0;
/// 270°
pub const THREE_CD4: f64 = 16_200_000.0;
/// 135°
pub const THREE_CD8: f64 = 8_100_000.0;
/// 225°
pub const FIVE_CD8: f64 = 13_500_000.0;
/// 315°
pub const SEVEN_CD8: f64 = 18_900_000.0;

/// `wdN` built-ins: width divided by N
pub const WIDTH_DIVISORS: [(&str, f64); 9] = [
    ("wd2", 2.0),
    ("wd3", 3.0),
    ("wd4", 4.0),
    ("wd5", 5.0),
    ("wd6", 6.0),
    ("wd8", 8.0),
    ("wd10", 10.0),
    ("wd12", 12.0),
    ("wd32", 32.0),
];

/// `hdN` built-ins: height divided by N
pub const HEIGHT_DIVISORS: [(&str, f64); 6] = [
    ("hd2", 2.0),
    ("hd3", 3.0),
    ("hd4", 4.0),
    ("hd5", 5.0),
    ("hd6", 6.0),
    ("hd8", 8.0),
];

/// `ssdN` built-ins: short side divided by N
pub const SHORT_SIDE_DIVISORS: [(&str, f64); 6] = [
    ("ssd2", 2.0),
    ("ssd4", 4.0),
    ("ssd6", 6.0),
    ("ssd8", 8.0),
    ("ssd16", 16.0),
    ("ssd32", 32.0),
];

/// Arcs sweeping less than this (radians) are dropped
pub const MIN_ARC_SWEEP_RAD: f64 = 1e-10;

use indexmap::IndexMap;
use smallvec::SmallVec;
use tracing::warn;

use crate::config::family::TrackFamily;

/// Named colors shared across the default track tables.
pub mod palette {
    pub const BLUE: &str = "royalblue";
    pub const RED: &str = "tomato";
    pub const ORANGE: &str = "#FF9900";
    pub const GREEN: &str = "#109618";
    pub const PURPLE: &str = "#990099";
    pub const CYAN: &str = "#0099C6";
    pub const MAGENTA: &str = "#DD4477";
    pub const SAGE: &str = "#66AA00";
    pub const MAROON: &str = "#B82E2E";
    pub const NAVY: &str = "#316395";
    pub const GRAY: &str = "gray";
    pub const LIGHT_GRAY: &str = "lightgray";
    pub const INK: &str = "rgba(62, 62, 62, 1)";
}

type StringList = SmallVec<[String; 4]>;
type RangeList = SmallVec<[[f64; 2]; 4]>;

/// Static configuration for one track key: the channels it reads, their
/// colors and display ranges, and everything family-specific (threshold,
/// flag maps, width ratio).
///
/// Ranges may be inverted (`[0.6, 0.0]`) to flip the axis direction.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackConfig {
    pub family: TrackFamily,
    pub channels: StringList,
    pub colors: StringList,
    pub ranges: RangeList,
    pub units: StringList,
    pub threshold: Option<f64>,
    pub flag_names: Option<IndexMap<u32, String>>,
    pub flag_colors: Option<IndexMap<u32, String>>,
    pub log_scale: bool,
    pub width_ratio: f64,
}

impl TrackConfig {
    #[must_use]
    pub fn new(family: TrackFamily) -> Self {
        Self {
            family,
            channels: SmallVec::new(),
            colors: SmallVec::new(),
            ranges: SmallVec::new(),
            units: SmallVec::new(),
            threshold: None,
            flag_names: None,
            flag_colors: None,
            log_scale: false,
            width_ratio: 1.0,
        }
    }

    #[must_use]
    pub fn with_channels<I, S>(mut self, channels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.channels = channels.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_ranges<I>(mut self, ranges: I) -> Self
    where
        I: IntoIterator<Item = [f64; 2]>,
    {
        self.ranges = ranges.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_units<I, S>(mut self, units: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.units = units.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Static code maps for bounded flag tracks; dynamic flag tracks leave
    /// these unset and run through the categorical encoder instead.
    #[must_use]
    pub fn with_flags<'a, I>(mut self, flags: I) -> Self
    where
        I: IntoIterator<Item = (u32, &'a str, &'a str)>,
    {
        let mut names = IndexMap::new();
        let mut colors = IndexMap::new();
        for (code, name, color) in flags {
            names.insert(code, name.to_owned());
            colors.insert(code, color.to_owned());
        }
        self.flag_names = Some(names);
        self.flag_colors = Some(colors);
        self
    }

    #[must_use]
    pub fn with_log_scale(mut self) -> Self {
        self.log_scale = true;
        self
    }

    #[must_use]
    pub fn with_width_ratio(mut self, ratio: f64) -> Self {
        self.width_ratio = ratio;
        self
    }

    #[must_use]
    pub fn channel(&self, index: usize) -> Option<&str> {
        self.channels.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn color(&self, index: usize) -> Option<&str> {
        self.colors.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn range(&self, index: usize) -> Option<[f64; 2]> {
        self.ranges.get(index).copied()
    }

    #[must_use]
    pub fn unit(&self, index: usize) -> Option<&str> {
        self.units.get(index).map(String::as_str)
    }
}

/// Per-deployment track table, keyed by track key.
#[derive(Debug, Clone, Default)]
pub struct ConfigRegistry {
    tracks: IndexMap<String, TrackConfig>,
}

impl ConfigRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a track configuration. List-length disagreements between
    /// channels, colors, and ranges are logged but accepted; accessors
    /// degrade to `None` past the shorter list.
    pub fn insert(&mut self, key: impl Into<String>, config: TrackConfig) {
        let key = key.into();
        let channels = config.channels.len();
        if (!config.colors.is_empty() && config.colors.len() != channels)
            || (!config.ranges.is_empty() && config.ranges.len() != channels)
        {
            warn!(
                key = %key,
                channels,
                colors = config.colors.len(),
                ranges = config.ranges.len(),
                "track configuration lists disagree in length"
            );
        }
        self.tracks.insert(key, config);
    }

    #[must_use]
    pub fn track(&self, key: &str) -> Option<&TrackConfig> {
        self.tracks.get(key)
    }

    #[must_use]
    pub fn family(&self, key: &str) -> Option<TrackFamily> {
        self.track(key).map(|config| config.family)
    }

    #[must_use]
    pub fn width_ratio(&self, key: &str) -> f64 {
        self.track(key).map_or(1.0, |config| config.width_ratio)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.tracks.keys().map(String::as_str)
    }

    /// The standard well-log deployment table: gamma ray, resistivity,
    /// porosity/density, saturation, shale-volume, and GSA anomaly tracks,
    /// with the crossover and flag tracks derived from them.
    #[must_use]
    pub fn default_logs() -> Self {
        use TrackFamily::*;
        use palette::*;

        let mut registry = Self::new();

        registry.insert(
            "MARKER",
            TrackConfig::new(Flag)
                .with_channels(["MARKER"])
                .with_colors([INK])
                .with_units([""])
                .with_width_ratio(0.5),
        );
        registry.insert(
            "GR",
            TrackConfig::new(Line)
                .with_channels(["GR"])
                .with_colors(["darkgreen"])
                .with_ranges([[0.0, 250.0]])
                .with_units(["GAPI"]),
        );
        registry.insert(
            "GR_NORM",
            TrackConfig::new(Line)
                .with_channels(["GR_NORM"])
                .with_colors(["orange"])
                .with_ranges([[0.0, 250.0]])
                .with_units(["GAPI"]),
        );
        registry.insert(
            "GR_DUAL",
            TrackConfig::new(DualOverlay)
                .with_channels(["GR", "GR_NORM"])
                .with_colors(["darkgreen", "orange"])
                .with_ranges([[0.0, 250.0], [0.0, 250.0]])
                .with_units(["GAPI", "GAPI"]),
        );
        registry.insert(
            "RT",
            TrackConfig::new(Line)
                .with_channels(["RT"])
                .with_colors([RED])
                .with_ranges([[0.02, 2000.0]])
                .with_units(["OHMM"])
                .with_log_scale(),
        );
        registry.insert(
            "RT_RO",
            TrackConfig::new(Crossover)
                .with_channels(["RT", "RO"])
                .with_colors([RED, PURPLE])
                .with_ranges([[0.02, 2000.0], [0.02, 2000.0]])
                .with_units(["OHMM", "OHMM"])
                .with_log_scale(),
        );
        registry.insert(
            "X_RT_RO",
            TrackConfig::new(ThresholdCrossover)
                .with_channels(["RT_RO"])
                .with_colors([INK])
                .with_ranges([[0.0, 4.0]])
                .with_units(["V/V"])
                .with_threshold(1.0)
                .with_width_ratio(0.5),
        );
        registry.insert(
            "NPHI_RHOB_NON_NORM",
            TrackConfig::new(DualOverlay)
                .with_channels(["NPHI", "RHOB"])
                .with_colors([BLUE, RED])
                .with_ranges([[0.6, 0.0], [1.71, 2.71]])
                .with_units(["V/V", "G/C3"]),
        );
        registry.insert(
            "NPHI_RHOB",
            TrackConfig::new(NormalizedCrossover)
                .with_channels(["NPHI", "RHOB", "NPHI_NORM", "RHOB_NORM_NPHI"])
                .with_colors([BLUE, RED, BLUE, RED])
                .with_ranges([[0.6, 0.0], [1.71, 2.71], [1.0, 0.0], [1.0, 0.0]])
                .with_units(["V/V", "G/C3", "V/V", "G/C3"]),
        );
        registry.insert(
            "RHOB",
            TrackConfig::new(Line)
                .with_channels(["RHOB"])
                .with_colors([RED])
                .with_ranges([[1.71, 2.71]])
                .with_units(["G/C3"]),
        );
        registry.insert(
            "SW",
            TrackConfig::new(Line)
                .with_channels(["SW"])
                .with_colors([BLUE])
                .with_ranges([[1.0, 0.0]])
                .with_units(["DEC"]),
        );
        registry.insert(
            "PHIE_PHIT",
            TrackConfig::new(DualOverlay)
                .with_channels(["PHIE", "PHIT"])
                .with_colors(["darkblue", CYAN])
                .with_ranges([[0.5, 0.0], [0.5, 0.0]])
                .with_units(["V/V", "V/V"]),
        );
        registry.insert(
            "PERM",
            TrackConfig::new(Line)
                .with_channels(["PERM"])
                .with_colors([BLUE])
                .with_ranges([[0.02, 2000.0]])
                .with_units(["mD"])
                .with_log_scale(),
        );
        registry.insert(
            "VCL",
            TrackConfig::new(Line)
                .with_channels(["VCL"])
                .with_colors([INK])
                .with_ranges([[0.0, 1.0]])
                .with_units(["V/V"]),
        );
        registry.insert(
            "RWAPP_RW",
            TrackConfig::new(Crossover)
                .with_channels(["RWAPP", "RW"])
                .with_colors([INK, BLUE])
                .with_ranges([[0.01, 1000.0], [0.01, 1000.0]])
                .with_units(["OHMM", "OHMM"])
                .with_log_scale(),
        );
        registry.insert(
            "X_RWA_RW",
            TrackConfig::new(ThresholdCrossover)
                .with_channels(["RWA_RW"])
                .with_colors([INK])
                .with_ranges([[0.0, 4.0]])
                .with_units(["V/V"])
                .with_threshold(1.4)
                .with_width_ratio(0.5),
        );
        registry.insert(
            "RT_F",
            TrackConfig::new(Crossover)
                .with_channels(["RT", "F"])
                .with_colors([RED, CYAN])
                .with_ranges([[0.02, 2000.0], [0.02, 2000.0]])
                .with_units(["OHMM", "V/V"])
                .with_log_scale(),
        );
        registry.insert(
            "X_RT_F",
            TrackConfig::new(ThresholdCrossover)
                .with_channels(["RT_F"])
                .with_colors([INK])
                .with_ranges([[0.0, 2.0]])
                .with_units(["V/V"])
                .with_threshold(0.7)
                .with_width_ratio(0.5),
        );
        registry.insert(
            "RT_RHOB",
            TrackConfig::new(NormalizedCrossover)
                .with_channels(["RT", "RHOB", "RT_NORM", "RHOB_NORM_RT"])
                .with_colors([RED, INK, RED, GREEN])
                .with_ranges([[0.01, 1000.0], [1.71, 2.71], [0.0, 1.0], [0.0, 1.0]])
                .with_units(["OHMM", "G/C3", "OHMM", "G/C3"])
                .with_log_scale(),
        );
        registry.insert(
            "X_RT_RHOB",
            TrackConfig::new(ThresholdCrossover)
                .with_channels(["RT_RHOB"])
                .with_colors([INK])
                .with_ranges([[-0.5, 0.5]])
                .with_units(["V/V"])
                .with_threshold(0.02)
                .with_width_ratio(0.5),
        );
        registry.insert(
            "TEST",
            TrackConfig::new(Flag)
                .with_channels(["TEST"])
                .with_colors([INK])
                .with_units(["V/V"])
                .with_flags([
                    (0, "", "rgba(0,0,0,0)"),
                    (1, "Water", CYAN),
                    (3, "Gas", GREEN),
                ]),
        );
        registry.insert(
            "CLASS",
            TrackConfig::new(Flag)
                .with_channels(["CLASS"])
                .with_colors([INK])
                .with_units(["V/V"])
                .with_flags([
                    (0, "Non Reservoir", "#d9d9d9"),
                    (1, "Water", "#00bfff"),
                    (2, "LRLC-Potential", "#ffb6c1"),
                    (3, "LRLC-Proven", "#a020f0"),
                    (4, "LC-Res", "#ffa600"),
                    (5, "Non-LCRes", "#8b1a1a"),
                    (6, "Coal", "#000000"),
                ]),
        );
        registry.insert(
            "XPT",
            TrackConfig::new(PointMarker)
                .with_channels(["XPT"])
                .with_colors([INK])
                .with_ranges([[0.0, 1.0]])
                .with_units([""]),
        );
        registry.insert(
            "RT_RGSA",
            TrackConfig::new(GsaCrossover)
                .with_channels(["RT", "RGSA"])
                .with_colors([RED, BLUE])
                .with_ranges([[0.02, 2000.0], [0.02, 2000.0]])
                .with_units(["OHMM", ""])
                .with_log_scale(),
        );
        registry.insert(
            "NPHI_NGSA",
            TrackConfig::new(GsaCrossover)
                .with_channels(["NPHI", "NGSA"])
                .with_colors([RED, GREEN])
                .with_ranges([[0.6, 0.0], [0.6, 0.0]])
                .with_units(["V/V", ""]),
        );
        registry.insert(
            "RHOB_DGSA",
            TrackConfig::new(GsaCrossover)
                .with_channels(["RHOB", "DGSA"])
                .with_colors([RED, GREEN])
                .with_ranges([[1.71, 2.71], [1.71, 2.71]])
                .with_units(["G/C3", ""]),
        );
        registry.insert(
            "ZONA",
            TrackConfig::new(Flag)
                .with_channels(["ZONA"])
                .with_colors([INK])
                .with_units([""])
                .with_flags([
                    (0, "Zona Prospek Kuat", RED),
                    (1, "Zona Menarik", ORANGE),
                    (2, "Zona Lemah", "yellow"),
                    (3, "Non Prospek", INK),
                ]),
        );
        registry.insert(
            "VSH",
            TrackConfig::new(Line)
                .with_channels(["VSH"])
                .with_colors(["darkblue"])
                .with_ranges([[0.0, 1.0]])
                .with_units(["V/V"]),
        );
        registry.insert(
            "SP",
            TrackConfig::new(Line)
                .with_channels(["SP"])
                .with_colors(["darkblue"])
                .with_ranges([[-160.0, 40.0]])
                .with_units(["MV"]),
        );
        registry.insert(
            "VSH_LINEAR",
            TrackConfig::new(Line)
                .with_channels(["VSH_LINEAR"])
                .with_colors(["darkblue"])
                .with_ranges([[0.0, 1.0]])
                .with_units(["V/V"]),
        );
        registry.insert(
            "VSH_DN",
            TrackConfig::new(Line)
                .with_channels(["VSH_DN"])
                .with_colors(["darkblue"])
                .with_ranges([[0.0, 1.0]])
                .with_units(["V/V"]),
        );
        registry.insert(
            "VSH_SP",
            TrackConfig::new(Line)
                .with_channels(["VSH_SP"])
                .with_colors(["darkblue"])
                .with_ranges([[0.0, 1.0]])
                .with_units(["V/V"]),
        );
        registry.insert(
            "PHIE_DEN",
            TrackConfig::new(DualOverlay)
                .with_channels(["PHIE", "PHIE_DEN"])
                .with_colors(["darkblue", BLUE])
                .with_ranges([[0.0, 1.0], [0.0, 1.0]])
                .with_units(["", ""]),
        );
        registry.insert(
            "PHIT_DEN",
            TrackConfig::new(DualOverlay)
                .with_channels(["PHIT", "PHIT_DEN"])
                .with_colors([RED, ORANGE])
                .with_ranges([[0.0, 1.0], [0.0, 1.0]])
                .with_units(["", ""]),
        );
        registry.insert(
            "RESERVOIR_CLASS",
            TrackConfig::new(Flag)
                .with_channels(["RESERVOIR_CLASS"])
                .with_colors([INK])
                .with_units([""])
                .with_flags([
                    (0, "Zona Prospek Kuat", "green"),
                    (1, "Zona Menarik", "yellow"),
                    (2, "Zona Lemah", "orange"),
                    (3, "Non Prospek", "black"),
                    (4, "No Data", "gray"),
                ]),
        );
        registry.insert(
            "RWA",
            TrackConfig::new(TripleOverlay)
                .with_channels(["RWA_FULL", "RWA_SIMPLE", "RWA_TAR"])
                .with_colors(["darkblue", "darkgreen", RED])
                .with_ranges([[0.0, 60.0], [0.0, 60.0], [0.0, 60.0]])
                .with_units(["OHMM", "OHMM", "OHMM"]),
        );
        registry.insert(
            "PHIE",
            TrackConfig::new(Line)
                .with_channels(["PHIE"])
                .with_colors(["darkblue"])
                .with_ranges([[0.6, 0.0]])
                .with_units([""]),
        );
        registry.insert(
            "RT_GR",
            TrackConfig::new(NormalizedCrossover)
                .with_channels(["RT", "GR", "RT_NORM", "GR_NORM_RT"])
                .with_colors([RED, "darkgreen", RED, "darkgreen"])
                .with_ranges([[0.02, 2000.0], [0.0, 250.0], [0.02, 2000.0], [0.0, 250.0]])
                .with_units(["OHMM", "GAPI", "OHMM", "GAPI"])
                .with_log_scale(),
        );
        registry.insert(
            "RT_PHIE",
            TrackConfig::new(DualOverlay)
                .with_channels(["RT", "PHIE"])
                .with_colors([RED, "darkblue"])
                .with_ranges([[0.02, 2000.0], [0.6, 0.0]])
                .with_units(["OHMM", ""])
                .with_log_scale(),
        );
        registry.insert(
            "RGBE",
            TrackConfig::new(Flag)
                .with_channels(["RGBE"])
                .with_colors([INK])
                .with_units([""]),
        );
        registry.insert(
            "RPBE",
            TrackConfig::new(Flag)
                .with_channels(["RPBE"])
                .with_colors([INK])
                .with_units([""]),
        );
        registry.insert(
            "IQUAL",
            TrackConfig::new(Flag)
                .with_channels(["IQUAL"])
                .with_colors([INK])
                .with_units([""])
                .with_flags([(1, "1", "green")]),
        );
        registry.insert(
            "SWARRAY",
            TrackConfig::new(StackedFill)
                .with_channels(["SWARRAY_10", "SWARRAY_25"])
                .with_colors(["darkblue", "orange"])
                .with_ranges([[1.0, 0.0], [1.0, 0.0]])
                .with_units(["V/V", "V/V"]),
        );
        registry.insert(
            "SWGRAD",
            TrackConfig::new(Line)
                .with_channels(["SWGRAD"])
                .with_colors(["darkgreen"])
                .with_ranges([[-2.0, 2.0]])
                .with_units(["V/V"]),
        );
        registry.insert(
            "DNS",
            TrackConfig::new(Line)
                .with_channels(["DNS"])
                .with_colors(["darkgreen"])
                .with_units([""]),
        );

        registry
    }
}

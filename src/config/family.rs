use serde::{Deserialize, Serialize};

/// Closed set of track families the composer knows how to build.
///
/// Every configured track key maps to exactly one family; the family
/// decides which composer path runs and which crossover labeling rule
/// applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackFamily {
    /// Single curve on its own primary axis.
    Line,
    /// Single curve filled toward the upper bound of its display range.
    FillToLimit,
    /// Single curve filled toward zero.
    FillToZero,
    /// N curves stacked by filling each to the previous one.
    StackedFill,
    /// Two curves, the second on an overlay axis.
    DualOverlay,
    /// Three independently scaled curves (solid/dash/dot).
    TripleOverlay,
    /// Four independently scaled curves.
    QuadOverlay,
    /// Two curves sharing one scale, crossover zones shaded.
    Crossover,
    /// One curve against a configured scalar threshold, exceedance shaded.
    ThresholdCrossover,
    /// Raw pair plus precomputed normalized pair; shading runs on the
    /// normalized columns.
    NormalizedCrossover,
    /// Measured curve against its GSA baseline with red/blue conditional
    /// shading.
    GsaCrossover,
    /// Categorical column rendered as a discrete heatmap.
    Flag,
    /// Sparse values rendered as open markers on a fixed [0, 1] axis.
    PointMarker,
    /// No curve; per-group text labels at mean depth.
    TextLabels,
}

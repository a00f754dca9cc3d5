use indexmap::IndexMap;
use rand::Rng;
use tracing::warn;

use crate::compose::axis::AxisEntry;
use crate::compose::state::CompositionState;
use crate::compose::trace::{TRANSPARENT, TraceDescriptor};
use crate::compose::{TrackComposer, TrackSlot};
use crate::core::color::{Rgb, discrete_colorscale, pick_distinct_color};
use crate::core::encode::encode_with_null;
use crate::core::types::LogRow;

impl TrackComposer<'_> {
    /// Categorical column rendered as a one-column discrete heatmap.
    ///
    /// Tracks with static flag maps use their configured code names and
    /// colors; unbounded columns (formation markers and the like) run
    /// through the categorical encoder and get one maximin-distinct color
    /// per discovered category, with code 0 forced transparent.
    #[must_use]
    pub fn flag<R: Rng>(
        &self,
        mut state: CompositionState,
        rows: &[LogRow],
        key: &str,
        slot: TrackSlot,
        rng: &mut R,
    ) -> CompositionState {
        let Some(config) = self.registry().track(key) else {
            warn!(key, "no track configuration, skipping flag track");
            return state;
        };
        let Some(channel) = config.channel(0).map(str::to_owned) else {
            warn!(key, "flag track has no channel configured, skipping");
            return state;
        };

        let (encoded_rows, names, colors) = match (&config.flag_names, &config.flag_colors) {
            (Some(names), Some(colors)) => (None, names.clone(), static_colors(names, colors)),
            _ => {
                let (encoded, names) = encode_with_null(rows, &channel);
                let colors = generated_colors(names.len(), rng);
                (Some(encoded), names, colors)
            }
        };
        let rows = encoded_rows.as_deref().unwrap_or(rows);

        let max_code = colors.len() as u32;
        if max_code == 0 {
            warn!(key, "flag track resolved no categories, skipping");
            return state;
        }

        let z: Vec<Option<f64>> = rows
            .iter()
            .map(|row| row.number(&channel).map(|code| code / f64::from(max_code)))
            .collect();
        let hover_text: Vec<String> = rows
            .iter()
            .map(|row| {
                row.number(&channel)
                    .and_then(|code| names.get(&(code as u32)).cloned())
                    .unwrap_or_default()
            })
            .collect();

        let boundaries: Vec<f64> = (0..=max_code).map(f64::from).collect();
        let colorscale = discrete_colorscale(&boundaries, &colors);

        let axis_id = self.primary_axis(slot);
        state.push_trace(TraceDescriptor::heatmap(
            key,
            vec![z],
            rows.iter().map(|row| row.depth).collect(),
            colorscale,
            hover_text,
            axis_id,
        ));
        state.insert_axis(
            axis_id,
            AxisEntry::primary(slot.domain)
                .without_tick_labels()
                .without_zero_line(),
        );
        state
    }
}

/// Flattens a static flag color map into one color per code in
/// `0..=max_code`; codes without an entry render transparent so sparse
/// code tables still yield a valid stepped colorscale.
fn static_colors(names: &IndexMap<u32, String>, colors: &IndexMap<u32, String>) -> Vec<String> {
    let max_code = names.keys().chain(colors.keys()).copied().max().unwrap_or(0);
    (0..=max_code)
        .map(|code| {
            colors
                .get(&code)
                .cloned()
                .unwrap_or_else(|| TRANSPARENT.to_owned())
        })
        .collect()
}

/// One maximin-distinct color per category; code 0 stays transparent.
fn generated_colors<R: Rng>(count: usize, rng: &mut R) -> Vec<String> {
    let mut existing: Vec<Rgb> = Vec::with_capacity(count);
    let mut colors = Vec::with_capacity(count);
    for code in 0..count {
        let color = pick_distinct_color(&existing, rng, 0.0);
        existing.push(color);
        if code == 0 {
            colors.push(TRANSPARENT.to_owned());
        } else {
            colors.push(color.to_hex());
        }
    }
    colors
}

//! Bar Chart Geometry
//!
//! Scales labelled values into SVG bar rectangles.

/// Space reserved under the bars for labels
pub const LABEL_BAND: f64 = 28.0;
const BAR_GAP_RATIO: f64 = 0.25;

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Lay out vertical bars scaled to the largest value.
/// Negative values are drawn as zero.
pub fn bar_layout(data: &[(String, f64)], width: f64, height: f64) -> Vec<Bar> {
    if data.is_empty() || width <= 0.0 {
        return Vec::new();
    }
    let plot_height = (height - LABEL_BAND).max(0.0);
    let max = data.iter().map(|(_, v)| v.max(0.0)).fold(0.0_f64, f64::max);
    let slot = width / data.len() as f64;
    let gap = slot * BAR_GAP_RATIO;

    data.iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let h = if max > 0.0 {
                value.max(0.0) / max * plot_height
            } else {
                0.0
            };
            Bar {
                label: label.clone(),
                value: *value,
                x: i as f64 * slot + gap / 2.0,
                y: plot_height - h,
                width: slot - gap,
                height: h,
            }
        })
        .collect()
}

/// Shorten long axis labels
pub fn short_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        label.to_string()
    } else {
        let mut s: String = label.chars().take(max_chars.saturating_sub(1)).collect();
        s.push('…');
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(values: &[f64]) -> Vec<(String, f64)> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| (format!("g{}", i), *v))
            .collect()
    }

    #[test]
    fn test_tallest_bar_fills_plot() {
        let bars = bar_layout(&data(&[50.0, 100.0, 25.0]), 300.0, 228.0);
        assert_eq!(bars.len(), 3);
        assert_eq!(bars[1].height, 200.0);
        assert_eq!(bars[1].y, 0.0);
        assert_eq!(bars[0].height, 100.0);
        assert_eq!(bars[2].y, 150.0);
    }

    #[test]
    fn test_bars_do_not_overlap() {
        let bars = bar_layout(&data(&[1.0, 2.0, 3.0, 4.0]), 400.0, 128.0);
        for pair in bars.windows(2) {
            assert!(pair[0].x + pair[0].width < pair[1].x);
        }
        let last = bars.last().unwrap();
        assert!(last.x + last.width <= 400.0);
    }

    #[test]
    fn test_all_zero_and_empty() {
        let bars = bar_layout(&data(&[0.0, 0.0]), 200.0, 100.0);
        assert!(bars.iter().all(|b| b.height == 0.0));
        assert!(bar_layout(&[], 200.0, 100.0).is_empty());
        let neg = bar_layout(&data(&[-5.0, 10.0]), 200.0, 128.0);
        assert_eq!(neg[0].height, 0.0);
    }

    #[test]
    fn test_short_label() {
        assert_eq!(short_label("Furniture", 12), "Furniture");
        assert_eq!(short_label("Laboratory Equipment", 8), "Laborat…");
    }
}

//! Tiny SVG sparklines rendered as data URIs.

use base64::Engine;

const RISING_COLOR: &str = "#22c55e";
const FALLING_COLOR: &str = "#ef4444";

/// A price series rendered as an SVG polyline.
#[derive(Debug, Clone)]
pub struct Sparkline {
    values: Vec<f64>,
    width: u32,
}

impl Sparkline {
    /// `width` is the SVG width in pixels; the height is `width / 2.5`.
    /// Non-finite values are dropped.
    pub fn new(values: &[f64], width: u32) -> Self {
        Self {
            values: values.iter().copied().filter(|v| v.is_finite()).collect(),
            width: width.max(1),
        }
    }

    fn height(&self) -> f64 {
        f64::from(self.width) / 2.5
    }

    /// Polyline points, `x,y` pairs separated by spaces.
    fn points(&self) -> String {
        let width = f64::from(self.width);
        let height = self.height();
        let min = self.values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let range = max - min;
        let steps = self.values.len().saturating_sub(1).max(1) as f64;

        self.values
            .iter()
            .enumerate()
            .map(|(i, value)| {
                let x = i as f64 * width / steps;
                let y = if range > 0.0 {
                    height - (value - min) / range * height
                } else {
                    height / 2.0
                };
                format!("{x:.2},{y:.2}")
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn svg(&self) -> String {
        let rising = match (self.values.first(), self.values.last()) {
            (Some(first), Some(last)) => last >= first,
            _ => true,
        };
        let color = if rising { RISING_COLOR } else { FALLING_COLOR };
        let height = self.height();

        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{height:.2}" viewBox="0 0 {w} {height:.2}"><polyline fill="none" stroke="{color}" stroke-width="1" points="{points}"/></svg>"#,
            w = self.width,
            points = self.points(),
        )
    }

    /// `data:image/svg+xml;base64,...`, or an empty string for an empty series.
    pub fn data_uri(&self) -> String {
        if self.values.is_empty() {
            return String::new();
        }
        let encoded = base64::engine::general_purpose::STANDARD.encode(self.svg());
        format!("data:image/svg+xml;base64,{encoded}")
    }
}

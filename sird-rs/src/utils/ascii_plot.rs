use std::iter;

use crate::prelude::{Real, INF};

/// ASCII plot of a sequence of positive values.
///
/// Draw each point as a column filled with '*'s up to the maximum height.
pub fn plot_vbars(values: &[Real], height: usize) -> String {
    let max = values.iter().cloned().fold(-INF, Real::max);
    if values.is_empty() || height == 0 || max <= 0.0 {
        return String::new();
    }
    let step = max / height as Real;

    let mut lines = Vec::with_capacity(height);
    for i in 0..height {
        let h = (height - i) as Real * step;
        let ln: String = values
            .iter()
            .map(|&x| if x >= h - 0.5 * step { '*' } else { ' ' })
            .collect();
        lines.push(ln.trim_end().to_string());
    }
    lines.join("\n")
}

/// ASCII plot of labeled positive values drawn horizontally.
///
/// Draw each value as a row filled with '='s up to the maximum width.
pub fn plot_hbars(values: &[(&str, Real)], width: usize) -> String {
    let max = values.iter().map(|v| v.1).fold(-INF, Real::max);
    if values.is_empty() || max <= 0.0 {
        return String::new();
    }
    let step = max / width as Real;
    let pad = values.iter().map(|v| v.0.len()).max().unwrap_or(0);

    let mut lines = Vec::with_capacity(values.len());
    for &(label, x) in values {
        let n = (x.max(0.0) / step).round() as usize;
        let mut ln = format!("{:>pad$} |", label, pad = pad);
        ln.extend(iter::repeat('=').take(n));
        ln.push_str(&format!(" {:.4}", x));
        lines.push(ln);
    }
    lines.join("\n")
}

/// Subsample a curve to at most n points by taking evenly spaced values.
pub fn subsample(values: &[Real], n: usize) -> Vec<Real> {
    if n == 0 || values.len() <= n {
        return values.to_vec();
    }
    let stride = values.len() as Real / n as Real;
    (0..n)
        .map(|i| values[(i as Real * stride) as usize])
        .collect()
}

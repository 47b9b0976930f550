use crate::formula::Term;

/// Strongest contribution in full, every other one at its weight.
///
/// Formula: `max_i((1 − w_i) × v_i) + Σ_i w_i × v_i`, computed as the
/// selected term's full value plus `w_j × v_j` for the rest. Monotone even
/// when weights differ between terms.
pub fn contributions(terms: &[Term]) -> Vec<f64> {
    let strongest = strongest_index(terms);
    terms
        .iter()
        .enumerate()
        .map(|(i, term)| {
            if Some(i) == strongest {
                term.value
            } else {
                term.weight * term.value
            }
        })
        .collect()
}

/// First term maximizing `(1 − w) × v`.
fn strongest_index(terms: &[Term]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, term) in terms.iter().enumerate() {
        let residual = (1.0 - term.weight) * term.value;
        match best {
            Some((_, r)) if r >= residual => {}
            _ => best = Some((i, residual)),
        }
    }
    best.map(|(i, _)| i)
}

/// Compute cosine similarity between two vectors
///
/// # Arguments
///
/// * `x` - First vector
/// * `y` - Second vector (must have same length as `x`)
///
/// # Returns
///
/// Cosine similarity in [-1.0, 1.0] for non-degenerate input. If either
/// vector is all-zero the denominator is zero and the result is NaN; this
/// function performs no guarding beyond the length check.
///
/// # Panics
///
/// Panics if vectors have different lengths
pub fn cosine(x: &[f64], y: &[f64]) -> f64 {
    assert_eq!(
        x.len(),
        y.len(),
        "Vectors must have same length for cosine similarity"
    );

    let dot: f64 = x.iter().zip(y.iter()).map(|(a, b)| a * b).sum();
    let norm_x: f64 = x.iter().map(|a| a * a).sum::<f64>().sqrt();
    let norm_y: f64 = y.iter().map(|a| a * a).sum::<f64>().sqrt();

    dot / (norm_x * norm_y)
}

/// Compute a simplified Jaccard similarity between two equal-length vectors
///
/// Counts positions where the two vectors hold exactly equal values and
/// divides that count by `x.len() + y.len() - count`. For binary-style
/// encodings this behaves like a set Jaccard over positions; for arbitrary
/// real values it is an approximation, not a strict set Jaccard.
///
/// Two empty vectors produce 0/0 = NaN.
///
/// # Panics
///
/// Panics if vectors have different lengths
pub fn jaccard(x: &[f64], y: &[f64]) -> f64 {
    assert_eq!(
        x.len(),
        y.len(),
        "Vectors must have same length for jaccard similarity"
    );

    // Exact equality is intentional: positions are compared as encoded values
    let matching = x.iter().zip(y.iter()).filter(|(a, b)| a == b).count();
    matching as f64 / (x.len() + y.len() - matching) as f64
}

/// Compute Euclidean (L2) distance between two vectors
///
/// # Panics
///
/// Panics if vectors have different lengths
pub fn euclidean(x: &[f64], y: &[f64]) -> f64 {
    assert_eq!(
        x.len(),
        y.len(),
        "Vectors must have same length for euclidean distance"
    );

    x.iter()
        .zip(y.iter())
        .map(|(a, b)| (a - b).powi(2))
        .sum::<f64>()
        .sqrt()
}

/// Compute Minkowski distance of order `n` between two vectors
///
/// `(sum(|x_i - y_i|^n))^(1/n)`. Order 2.0 reproduces [`euclidean`] and
/// order 1.0 the Manhattan distance. The order must be positive; zero or
/// negative orders are not validated and yield meaningless values (inf/NaN).
///
/// # Panics
///
/// Panics if vectors have different lengths
pub fn minkowski(x: &[f64], y: &[f64], n: f64) -> f64 {
    assert_eq!(
        x.len(),
        y.len(),
        "Vectors must have same length for minkowski distance"
    );

    x.iter()
        .zip(y.iter())
        .map(|(a, b)| (a - b).abs().powf(n))
        .sum::<f64>()
        .powf(1.0 / n)
}

/// Compute the Pearson correlation coefficient between two vectors
///
/// Covariance over the product of standard deviations, both with population
/// divisor N. Returns a value in [-1.0, 1.0] for non-constant input; when
/// either vector is constant the variance is zero and the result is NaN.
/// Empty input also yields NaN.
///
/// # Panics
///
/// Panics if vectors have different lengths
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    assert_eq!(
        x.len(),
        y.len(),
        "Vectors must have same length for pearson correlation"
    );

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (a, b) in x.iter().zip(y.iter()) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    (cov / n) / ((var_x / n) * (var_y / n)).sqrt()
}

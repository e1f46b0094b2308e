// src/noyau/format.rs

/// Précision d'affichage par défaut (chiffres après la virgule).
pub const DIGITS_DEFAUT: usize = 12;

/// Au-delà, un f64 n'a plus de chiffres significatifs à montrer.
pub const DIGITS_MAX: usize = 17;

/// Affichage “joli” d'un résultat flottant :
/// - arrondi à `digits` décimales, zéros finaux retirés (2.50 -> 2.5, 14.0 -> 14)
/// - ∞, -∞, et NaN -> "indéfini"
/// - jamais de "-0"
pub fn format_nombre(v: f64, digits: usize) -> String {
    if v.is_nan() {
        return "indéfini".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "∞".into() } else { "-∞".into() };
    }

    let digits = digits.min(DIGITS_MAX);
    let mut s = format!("{v:.digits$}");

    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }

    if s == "-0" {
        s = "0".to_string();
    }
    s
}

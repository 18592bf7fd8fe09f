// src/noyau/format.rs
//
// Affichage des nombres (résultat + description).
// Règle : 0 à `decimales_max` décimales, zéros finaux retirés, pas de
// séparateur de milliers, point décimal quelle que soit la locale.

/// Nombre de décimales par défaut.
pub const DECIMALES_DEFAUT: usize = 6;

/// Garde-fou : au-delà, f64 n'a plus de chiffres significatifs à montrer.
pub const DECIMALES_MAX: usize = 15;

/// Réglages d'affichage du noyau.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reglages {
    pub decimales_max: usize,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            decimales_max: DECIMALES_DEFAUT,
        }
    }
}

impl Reglages {
    pub fn avec_decimales(decimales: usize) -> Self {
        Self {
            decimales_max: decimales.min(DECIMALES_MAX),
        }
    }
}

/// Formate un f64 pour l'affichage.
///
/// Les valeurs non finies ont un rendu stable : "NaN", "∞", "-∞".
pub fn format_nombre(x: f64, reglages: &Reglages) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let decimales = reglages.decimales_max.min(DECIMALES_MAX);
    let mut s = format!("{x:.decimales$}");

    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }

    // -0.0000001 arrondi => "-0"
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

/// Relit un texte d'affichage (saisie ou résultat) en f64.
/// Accepte les rendus non finis produits par `format_nombre`.
pub fn lire_nombre(s: &str) -> Option<f64> {
    match s.trim() {
        "" => None,
        "NaN" => Some(f64::NAN),
        "∞" => Some(f64::INFINITY),
        "-∞" => Some(f64::NEG_INFINITY),
        t => t.parse::<f64>().ok(),
    }
}

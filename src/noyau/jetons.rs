// src/noyau/jetons.rs
//
// Jetons du programme enregistré.
// Le programme est la seule forme de persistance : le rejouer depuis un état
// vidé doit redonner exactement le même accumulateur et la même description.

use super::format::{format_nombre, Reglages};

#[derive(Clone, Debug, PartialEq)]
pub enum Jeton {
    Nombre(f64),

    // Opérateur, constante, variable ou "=".
    // NOTE: un symbole inconnu de la table reste enregistré tel quel.
    Symbole(String),
}

impl Jeton {
    pub fn symbole(s: impl Into<String>) -> Self {
        Jeton::Symbole(s.into())
    }
}

impl From<f64> for Jeton {
    fn from(x: f64) -> Self {
        Jeton::Nombre(x)
    }
}

impl From<&str> for Jeton {
    fn from(s: &str) -> Self {
        Jeton::Symbole(s.to_string())
    }
}

/// Format utilitaire (debug/journal) : programme en texte, séparé par des espaces.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    let reglages = Reglages::default();
    let mut out = Vec::with_capacity(jetons.len());
    for j in jetons {
        let s = match j {
            Jeton::Nombre(x) => format_nombre(*x, &reglages),
            Jeton::Symbole(s) => s.clone(),
        };
        out.push(s);
    }
    out.join(" ")
}

// src/noyau/operations.rs
//
// Table des symboles : symbole -> Operation.
// Construite une fois, immuable ensuite. La table standard est partagée
// par tous les cerveaux du processus (Arc + lazy_static).

use std::collections::HashMap;
use std::f64::consts::{E, PI};
use std::sync::Arc;

use lazy_static::lazy_static;

/// Rendu d'une opération unaire dans la description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Gabarit {
    /// `nom(x)` : sin(x), ln(x), √(x)…
    Prefixe(String),
    /// `(x)s` : (x)², (x)³
    Suffixe(String),
    /// `1/(x)`
    Inverse,
    /// `-(x)`
    Oppose,
}

impl Gabarit {
    pub fn appliquer(&self, x: &str) -> String {
        match self {
            Gabarit::Prefixe(nom) => format!("{nom}({x})"),
            Gabarit::Suffixe(s) => format!("({x}){s}"),
            Gabarit::Inverse => format!("1/({x})"),
            Gabarit::Oppose => format!("-({x})"),
        }
    }
}

/// Famille de priorité d'un opérateur binaire (heuristique de parenthèses).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Priorite {
    Additive,
    Multiplicative,
    /// Ne s'enchaîne qu'avec lui-même.
    Isolee,
}

#[derive(Clone, Debug)]
pub enum Operation {
    Constante(f64),
    Unaire {
        fonction: fn(f64) -> f64,
        gabarit: Gabarit,
    },
    Binaire {
        fonction: fn(f64, f64) -> f64,
        priorite: Priorite,
    },
    Egal,
    Variable(String),
}

#[derive(Clone, Debug, Default)]
pub struct TableSymboles {
    operations: HashMap<String, Operation>,
}

lazy_static! {
    static ref TABLE_STANDARD: Arc<TableSymboles> =
        Arc::new(TableSymboles::standard_builder().construire());
}

impl TableSymboles {
    /// Table standard de la calculatrice (partagée).
    pub fn standard() -> Arc<TableSymboles> {
        Arc::clone(&TABLE_STANDARD)
    }

    pub fn builder() -> ConstructeurTable {
        ConstructeurTable::default()
    }

    /// Constructeur pré-rempli avec la table standard (pour l'étendre).
    pub fn standard_builder() -> ConstructeurTable {
        fn prefixe(nom: &str) -> Gabarit {
            Gabarit::Prefixe(nom.to_string())
        }

        Self::builder()
            .constante("π", PI)
            .constante("e", E)
            .unaire("cos", f64::cos, prefixe("cos"))
            .unaire("sin", f64::sin, prefixe("sin"))
            .unaire("tan", f64::tan, prefixe("tan"))
            .unaire("sinh", f64::sinh, prefixe("sinh"))
            .unaire("cosh", f64::cosh, prefixe("cosh"))
            .unaire("tanh", f64::tanh, prefixe("tanh"))
            .unaire("ln", f64::ln, prefixe("ln"))
            .unaire("log₁₀", f64::log10, prefixe("log₁₀"))
            .unaire("1/⒳", |x| 1.0 / x, Gabarit::Inverse)
            .unaire("⒳²", |x| x.powi(2), Gabarit::Suffixe("²".into()))
            .unaire("⒳³", |x| x.powi(3), Gabarit::Suffixe("³".into()))
            .unaire("√", f64::sqrt, prefixe("√"))
            .unaire("∛", f64::cbrt, prefixe("∛"))
            .unaire("±", |x| -x, Gabarit::Oppose)
            .binaire("✕", |a, b| a * b, Priorite::Multiplicative)
            .binaire("÷", |a, b| a / b, Priorite::Multiplicative)
            .binaire("+", |a, b| a + b, Priorite::Additive)
            .binaire("-", |a, b| a - b, Priorite::Additive)
            .egal("=")
            .variable("M")
    }

    pub fn get(&self, symbole: &str) -> Option<&Operation> {
        self.operations.get(symbole)
    }

    pub fn contient(&self, symbole: &str) -> bool {
        self.operations.contains_key(symbole)
    }

    /// Deux opérateurs binaires s'enchaînent sans parenthèses si c'est le même
    /// symbole, ou la même famille additive (+ -) / multiplicative (✕ ÷).
    pub fn est_enchainable(&self, precedent: &str, suivant: &str) -> bool {
        if precedent == suivant {
            return true;
        }
        match (self.priorite(precedent), self.priorite(suivant)) {
            (Some(Priorite::Additive), Some(Priorite::Additive)) => true,
            (Some(Priorite::Multiplicative), Some(Priorite::Multiplicative)) => true,
            _ => false,
        }
    }

    fn priorite(&self, symbole: &str) -> Option<Priorite> {
        match self.get(symbole) {
            Some(Operation::Binaire { priorite, .. }) => Some(*priorite),
            _ => None,
        }
    }
}

/// Construction de table (pour les tables personnalisées).
#[derive(Default)]
pub struct ConstructeurTable {
    operations: HashMap<String, Operation>,
}

impl ConstructeurTable {
    pub fn constante(self, symbole: &str, valeur: f64) -> Self {
        self.avec(symbole, Operation::Constante(valeur))
    }

    pub fn unaire(self, symbole: &str, fonction: fn(f64) -> f64, gabarit: Gabarit) -> Self {
        self.avec(symbole, Operation::Unaire { fonction, gabarit })
    }

    pub fn binaire(self, symbole: &str, fonction: fn(f64, f64) -> f64, priorite: Priorite) -> Self {
        self.avec(symbole, Operation::Binaire { fonction, priorite })
    }

    pub fn egal(self, symbole: &str) -> Self {
        self.avec(symbole, Operation::Egal)
    }

    /// La variable est lue dans la table des valeurs sous le même nom.
    pub fn variable(self, nom: &str) -> Self {
        self.avec(nom, Operation::Variable(nom.to_string()))
    }

    pub fn construire(self) -> TableSymboles {
        TableSymboles {
            operations: self.operations,
        }
    }

    fn avec(mut self, symbole: &str, op: Operation) -> Self {
        self.operations.insert(symbole.to_string(), op);
        self
    }
}

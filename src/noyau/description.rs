// src/noyau/description.rs
//
// Reconstruction de la description ("3 + 4 =", "(3 + 4) ✕ 5 …", "√(√(9)) =")
// par rejeu du programme. Pas de grammaire : heuristique par paires
// d'opérateurs binaires (voir TableSymboles::est_enchainable).
//
// Le rejeu tourne sur une Evaluation jetable : les opérandes implicites
// ("3 + =" vaut 3 + 3) sont rendus avec la valeur réelle de l'accumulateur.

use std::collections::HashMap;

use super::cerveau::Evaluation;
use super::format::{format_nombre, Reglages};
use super::jetons::Jeton;
use super::operations::{Gabarit, Operation, TableSymboles};

/// Marqueur : expression complète.
pub const MARQUEUR_FINAL: &str = "=";

/// Marqueur : opération binaire encore en attente.
pub const MARQUEUR_PARTIEL: &str = "…";

#[derive(Debug)]
struct Trace {
    segments: Vec<String>,
    // vrai juste après "=" : le prochain opérande démarre une nouvelle expression
    est_final: bool,
    // vrai au début et après un binaire : aucun opérande saisi depuis
    attend_operande: bool,
    dernier_binaire: Option<String>,
}

impl Default for Trace {
    fn default() -> Self {
        Self {
            segments: Vec::new(),
            est_final: false,
            attend_operande: true,
            dernier_binaire: None,
        }
    }
}

impl Trace {
    fn tout(&self) -> String {
        self.segments.join(" ")
    }

    fn operande(&mut self, texte: String) {
        if self.est_final {
            self.segments.clear();
            self.dernier_binaire = None;
            self.est_final = false;
        }
        self.segments.push(texte);
        self.attend_operande = false;
    }

    fn unaire(&mut self, gabarit: &Gabarit, accumulateur: String) {
        if self.attend_operande || self.segments.is_empty() {
            self.segments.push(gabarit.appliquer(&accumulateur));
            self.attend_operande = false;
        } else if self.est_final {
            let tout = self.tout();
            self.segments = vec![gabarit.appliquer(&tout)];
        } else if let Some(dernier) = self.segments.pop() {
            // seulement le dernier opérande : sin(cos(3)), 2 + √(9)
            self.segments.push(gabarit.appliquer(&dernier));
        }
    }

    fn binaire(&mut self, symbole: &str, accumulateur: String, table: &TableSymboles) {
        if self.attend_operande || self.segments.is_empty() {
            self.segments.push(accumulateur);
        }

        if let Some(precedent) = &self.dernier_binaire {
            if !table.est_enchainable(precedent, symbole) {
                let tout = self.tout();
                self.segments = vec![format!("({tout})")];
            }
        }

        self.segments.push(symbole.to_string());
        self.dernier_binaire = Some(symbole.to_string());
        self.est_final = false;
        self.attend_operande = true;
    }

    fn egal(&mut self, en_attente: bool, accumulateur: String) {
        if en_attente && self.attend_operande {
            self.segments.push(accumulateur);
        }
        self.est_final = true;
        self.attend_operande = false;
    }

    fn terminer(self, partiel: bool) -> String {
        let marqueur = if partiel {
            MARQUEUR_PARTIEL
        } else {
            MARQUEUR_FINAL
        };
        if self.segments.is_empty() {
            marqueur.to_string()
        } else {
            format!("{} {marqueur}", self.tout())
        }
    }
}

/// Décrit une suite de jetons rejouée depuis un état vide.
pub fn decrire(
    jetons: &[Jeton],
    table: &TableSymboles,
    variables: &HashMap<String, f64>,
    reglages: &Reglages,
) -> String {
    let mut trace = Trace::default();
    let mut eval = Evaluation::default();

    for jeton in jetons {
        let symbole = match jeton {
            Jeton::Nombre(x) => {
                trace.operande(format_nombre(*x, reglages));
                eval.appliquer_nombre(*x);
                continue;
            }
            Jeton::Symbole(s) => s,
        };

        // symbole inconnu : rien à décrire
        let Some(op) = table.get(symbole) else {
            continue;
        };

        let accumulateur = format_nombre(eval.accumulateur, reglages);
        match op {
            Operation::Constante(_) | Operation::Variable(_) => trace.operande(symbole.clone()),
            Operation::Unaire { gabarit, .. } => trace.unaire(gabarit, accumulateur),
            Operation::Binaire { .. } => trace.binaire(symbole, accumulateur, table),
            Operation::Egal => trace.egal(eval.en_attente.is_some(), accumulateur),
        }

        eval.appliquer_operation(op, variables);
    }

    trace.terminer(eval.en_attente.is_some())
}

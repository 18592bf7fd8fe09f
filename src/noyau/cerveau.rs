//! Noyau — cerveau de la calculatrice (accumulateur + opération en attente)
//!
//! Modèle :
//! - un accumulateur (dernière valeur saisie ou calculée),
//! - au plus UNE opération binaire en attente (fonction + premier opérande),
//! - un programme de jetons, rejouable, qui est la seule forme de sauvegarde,
//! - une table de variables modifiable de l'extérieur (bouton →M).
//!
//! Aucune opération n'échoue : symbole inconnu => ignoré (mais enregistré),
//! division par zéro / domaine invalide => NaN ou ∞ dans l'accumulateur.

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, trace};

use super::description::decrire;
use super::format::{format_nombre, Reglages};
use super::jetons::{format_jetons, Jeton};
use super::operations::{Operation, TableSymboles};

#[derive(Clone, Copy, Debug)]
pub(crate) struct OperationEnAttente {
    fonction: fn(f64, f64) -> f64,
    premier_operande: f64,
}

/// État numérique pur (sans programme) : partagé entre le cerveau
/// et la reconstruction de la description.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Evaluation {
    pub accumulateur: f64,
    pub en_attente: Option<OperationEnAttente>,
}

impl Evaluation {
    pub fn appliquer_nombre(&mut self, x: f64) {
        self.accumulateur = x;
    }

    pub fn appliquer_operation(&mut self, op: &Operation, variables: &HashMap<String, f64>) {
        match op {
            Operation::Constante(v) => self.accumulateur = *v,
            Operation::Unaire { fonction, .. } => self.accumulateur = fonction(self.accumulateur),
            Operation::Binaire { fonction, .. } => {
                // d'abord résoudre l'attente, puis installer la nouvelle
                self.executer_en_attente();
                self.en_attente = Some(OperationEnAttente {
                    fonction: *fonction,
                    premier_operande: self.accumulateur,
                });
            }
            Operation::Egal => self.executer_en_attente(),
            Operation::Variable(nom) => {
                self.accumulateur = variables.get(nom).copied().unwrap_or(0.0);
            }
        }
    }

    fn executer_en_attente(&mut self) {
        if let Some(p) = self.en_attente.take() {
            self.accumulateur = (p.fonction)(p.premier_operande, self.accumulateur);
        }
    }
}

#[derive(Clone, Debug)]
pub struct Cerveau {
    evaluation: Evaluation,
    programme: Vec<Jeton>,
    // Position du programme où commence la description affichée
    // (avancée par purger_operations_en_attente).
    debut_trace: usize,
    valeurs_variables: HashMap<String, f64>,
    table: Arc<TableSymboles>,
    reglages: Reglages,
}

impl Default for Cerveau {
    fn default() -> Self {
        Self::avec_table(TableSymboles::standard())
    }
}

impl Cerveau {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn avec_table(table: Arc<TableSymboles>) -> Self {
        Self {
            evaluation: Evaluation::default(),
            programme: Vec::new(),
            debut_trace: 0,
            valeurs_variables: HashMap::new(),
            table,
            reglages: Reglages::default(),
        }
    }

    pub fn avec_reglages(mut self, reglages: Reglages) -> Self {
        self.reglages = reglages;
        self
    }

    /* ------------------------ Entrées ------------------------ */

    /// Pose un opérande numérique (aucune évaluation déclenchée).
    pub fn definir_operande(&mut self, valeur: f64) {
        trace!("operande {valeur}");
        self.evaluation.appliquer_nombre(valeur);
        self.programme.push(Jeton::Nombre(valeur));
    }

    /// Pose une variable comme opérande : passe par le même chemin que les
    /// symboles, pour que le rejeu du programme la réévalue.
    pub fn definir_operande_variable(&mut self, nom: &str) {
        self.effectuer_operation(nom);
    }

    pub fn effectuer_operation(&mut self, symbole: &str) {
        self.programme.push(Jeton::symbole(symbole));

        match self.table.get(symbole) {
            Some(op) => {
                trace!("operation {symbole}");
                self.evaluation.appliquer_operation(op, &self.valeurs_variables);
            }
            None => debug!("symbole inconnu ignoré: {symbole:?}"),
        }
    }

    /* ------------------------ Remises à zéro ------------------------ */

    /// Remise à zéro totale : attente, accumulateur, programme ET variables.
    pub fn vider(&mut self) {
        debug!(
            "vider ({} jetons, {} variables)",
            self.programme.len(),
            self.valeurs_variables.len()
        );
        self.evaluation = Evaluation::default();
        self.programme.clear();
        self.debut_trace = 0;
        self.valeurs_variables.clear();
    }

    /// Remise à zéro légère : attente + accumulateur + description affichée.
    /// Le programme enregistré et les variables sont conservés ; le rejeu
    /// repart de ce point (voir `programme_courant`).
    pub fn purger_operations_en_attente(&mut self) {
        self.evaluation = Evaluation::default();
        self.debut_trace = self.programme.len();
    }

    /* ------------------------ Lectures ------------------------ */

    pub fn est_resultat_partiel(&self) -> bool {
        self.evaluation.en_attente.is_some()
    }

    /// Accumulateur formaté pour l'affichage.
    pub fn resultat(&self) -> String {
        format_nombre(self.evaluation.accumulateur, &self.reglages)
    }

    /// Accumulateur brut (mode numérique strict).
    pub fn valeur(&self) -> f64 {
        self.evaluation.accumulateur
    }

    /// Reconstruite à chaque appel par rejeu : un jeton peut changer le rendu
    /// des entrées précédentes (parenthèses).
    pub fn description(&self) -> String {
        decrire(
            &self.programme[self.debut_trace..],
            &self.table,
            &self.valeurs_variables,
            &self.reglages,
        )
    }

    /* ------------------------ Programme ------------------------ */

    /// Programme complet, purges comprises.
    pub fn programme(&self) -> Vec<Jeton> {
        self.programme.clone()
    }

    /// Jetons saisis depuis la dernière purge : les rejouer depuis un
    /// cerveau neuf redonne l'état courant.
    pub fn programme_courant(&self) -> Vec<Jeton> {
        self.programme[self.debut_trace..].to_vec()
    }

    /// Restaure un programme : remet l'état à zéro (variables conservées)
    /// puis rejoue chaque jeton comme s'il était saisi en direct.
    pub fn restaurer_programme(&mut self, programme: &[Jeton]) {
        debug!("restauration: {}", format_jetons(programme));

        self.evaluation = Evaluation::default();
        self.programme.clear();
        self.debut_trace = 0;

        for jeton in programme {
            match jeton {
                Jeton::Nombre(x) => self.definir_operande(*x),
                Jeton::Symbole(s) => self.effectuer_operation(s),
            }
        }
    }

    /* ------------------------ Variables ------------------------ */

    pub fn valeurs_variables(&self) -> &HashMap<String, f64> {
        &self.valeurs_variables
    }

    pub fn valeurs_variables_mut(&mut self) -> &mut HashMap<String, f64> {
        &mut self.valeurs_variables
    }

    pub fn definir_variable(&mut self, nom: impl Into<String>, valeur: f64) {
        self.valeurs_variables.insert(nom.into(), valeur);
    }

    /// Évalue le programme courant comme une fonction de `nom`, sans toucher
    /// à l'état.
    pub fn evaluer_avec(&self, nom: &str, x: f64) -> f64 {
        let mut variables = self.valeurs_variables.clone();
        variables.insert(nom.to_string(), x);

        let mut eval = Evaluation::default();
        for jeton in &self.programme[self.debut_trace..] {
            match jeton {
                Jeton::Nombre(v) => eval.appliquer_nombre(*v),
                Jeton::Symbole(s) => {
                    if let Some(op) = self.table.get(s) {
                        eval.appliquer_operation(op, &variables);
                    }
                }
            }
        }
        eval.accumulateur
    }
}

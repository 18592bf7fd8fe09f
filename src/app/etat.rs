//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : traduire les appuis de touches en appels au cerveau et garder ce
//! que l'écran affiche (saisie en cours, résultat, description).
//!
//! Contrats :
//! - Aucun rendu ici, aucun calcul ici : tout passe par le cerveau.
//! - Le programme du cerveau est sauvegardé après chaque opération ; →M le
//!   rejoue pour réévaluer avec la nouvelle valeur de M.
//! - Un affichage illisible (ex: "NaN.") donne une erreur, jamais une panique.

use calculatrice_graphe::noyau::format::lire_nombre;
use calculatrice_graphe::noyau::{Cerveau, Jeton};
use log::debug;
use thiserror::Error;

/// Variable des boutons M / →M.
pub const VARIABLE_MEMOIRE: &str = "M";

const AFFICHAGE_ZERO: &str = "0";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErreurSaisie {
    #[error("affichage illisible comme nombre : {0:?}")]
    Illisible(String),
}

/// Saisie chiffre par chiffre (l'écran de la calculatrice).
#[derive(Clone, Debug)]
pub struct Saisie {
    pub texte: String,
    pub en_cours: bool,
}

impl Default for Saisie {
    fn default() -> Self {
        Self {
            texte: AFFICHAGE_ZERO.to_string(),
            en_cours: false,
        }
    }
}

impl Saisie {
    pub fn appuyer_chiffre(&mut self, chiffre: char) {
        if self.en_cours {
            self.texte.push(chiffre);
        } else {
            self.texte = chiffre.to_string();
        }
        self.en_cours = true;
    }

    /// Un seul point décimal par nombre.
    pub fn appuyer_point(&mut self) {
        if !self.en_cours {
            self.texte = AFFICHAGE_ZERO.to_string();
        }
        if !self.texte.contains('.') {
            self.texte.push('.');
        }
        self.en_cours = true;
    }

    pub fn effacer_dernier(&mut self) {
        if !self.en_cours {
            return;
        }
        self.texte.pop();
        if self.texte.is_empty() || self.texte == "-" {
            *self = Self::default();
        }
    }

    /// Remplace l'écran par un résultat (fin de frappe).
    pub fn afficher(&mut self, texte: impl Into<String>) {
        self.texte = texte.into();
        self.en_cours = false;
    }

    pub fn valeur(&self) -> Result<f64, ErreurSaisie> {
        lire_nombre(&self.texte).ok_or_else(|| ErreurSaisie::Illisible(self.texte.clone()))
    }
}

#[derive(Debug, Default)]
pub struct AppCalc {
    pub cerveau: Cerveau,
    pub saisie: Saisie,

    // --- sorties ---
    pub description: String,
    pub erreur: String,

    // dernier programme sauvegardé (rejoué par →M)
    programme: Vec<Jeton>,
}

impl AppCalc {
    /* ------------------------ Actions “boutons” ------------------------ */

    pub fn appuyer_chiffre(&mut self, chiffre: char) {
        self.saisie.appuyer_chiffre(chiffre);
    }

    pub fn appuyer_point(&mut self) {
        self.saisie.appuyer_point();
    }

    pub fn effacer_dernier(&mut self) {
        self.saisie.effacer_dernier();
    }

    /// Opérateur, constante ou "=" : pousse d'abord le nombre en cours de frappe.
    pub fn appuyer_operation(&mut self, symbole: &str) {
        if let Err(e) = self.pousser_saisie() {
            self.set_erreur(e);
            return;
        }
        self.cerveau.effectuer_operation(symbole);
        self.sauver_programme();
        self.rafraichir();
    }

    /// Bouton M : insère la variable comme opérande.
    pub fn inserer_variable(&mut self) {
        self.cerveau.definir_operande_variable(VARIABLE_MEMOIRE);
        self.saisie.en_cours = false;
        self.sauver_programme();
        self.rafraichir();
    }

    /// Bouton →M : mémorise l'écran dans M puis rejoue le programme.
    pub fn memoriser_variable(&mut self) {
        match self.saisie.valeur() {
            Ok(v) => {
                self.cerveau.definir_variable(VARIABLE_MEMOIRE, v);
                self.restaurer_programme();
            }
            Err(e) => self.set_erreur(e),
        }
    }

    /// AC : remise à zéro totale (programme + variables).
    pub fn tout_effacer(&mut self) {
        self.cerveau.vider();
        self.programme.clear();
        self.saisie = Saisie::default();
        self.description.clear();
        self.erreur.clear();
    }

    /// C : annule le calcul en cours, garde programme et variables.
    pub fn purger(&mut self) {
        self.cerveau.purger_operations_en_attente();
        self.sauver_programme();
        self.saisie = Saisie::default();
        self.description.clear();
        self.erreur.clear();
    }

    /* ------------------------ Interne ------------------------ */

    fn pousser_saisie(&mut self) -> Result<(), ErreurSaisie> {
        if self.saisie.en_cours {
            let x = self.saisie.valeur()?;
            self.cerveau.definir_operande(x);
            self.saisie.en_cours = false;
        }
        Ok(())
    }

    fn sauver_programme(&mut self) {
        self.programme = self.cerveau.programme_courant();
    }

    fn restaurer_programme(&mut self) {
        debug!("→{VARIABLE_MEMOIRE} : rejeu de {} jetons", self.programme.len());
        self.cerveau.restaurer_programme(&self.programme);
        self.rafraichir();
    }

    fn rafraichir(&mut self) {
        self.description = self.cerveau.description();
        self.saisie.afficher(self.cerveau.resultat());
        self.erreur.clear();
    }

    fn set_erreur(&mut self, e: ErreurSaisie) {
        self.erreur = e.to_string();
        self.saisie.en_cours = false;
    }
}

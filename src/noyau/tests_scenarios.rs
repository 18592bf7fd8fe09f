//! Tests scénarios : séquences de touches comme les enverrait l'UI.
//!
//! Une séquence est écrite en texte, séparée par des espaces :
//! un nombre => definir_operande, sinon => effectuer_operation.

use pretty_assertions::assert_eq;

use super::format::Reglages;
use super::operations::{Gabarit, Priorite, TableSymboles};
use super::{Cerveau, Jeton};

fn saisir(c: &mut Cerveau, touches: &str) {
    for t in touches.split_whitespace() {
        match t.parse::<f64>() {
            Ok(x) => c.definir_operande(x),
            Err(_) => c.effectuer_operation(t),
        }
    }
}

fn calcule(touches: &str) -> Cerveau {
    let mut c = Cerveau::new();
    saisir(&mut c, touches);
    c
}

fn assert_proche(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-12, "attendu {b}, obtenu {a}");
}

/* ------------------------ Chaînes et priorités ------------------------ */

#[test]
fn chaine_gauche_a_droite() {
    let c = calcule("3 + 4 + 5 =");
    assert_eq!(c.valeur(), 12.0);
    assert_eq!(c.description(), "3 + 4 + 5 =");
    assert_eq!(c.resultat(), "12");
}

#[test]
fn changement_de_priorite() {
    let c = calcule("3 + 4 ✕ 5 =");
    // pas de vraie priorité : (3 + 4) ✕ 5
    assert_eq!(c.valeur(), 35.0);
    assert_eq!(c.description(), "(3 + 4) ✕ 5 =");
}

#[test]
fn resultat_partiel() {
    let c = calcule("3 + 4 ✕");
    assert!(c.est_resultat_partiel());
    assert_eq!(c.valeur(), 7.0);
    assert_eq!(c.description(), "(3 + 4) ✕ …");
}

#[test]
fn unaires_enchaines() {
    let c = calcule("9 √ √ =");
    assert_eq!(c.description(), "√(√(9)) =");
    assert_proche(c.valeur(), 9f64.sqrt().sqrt());
    assert_eq!(c.resultat(), "1.732051");
}

#[test]
fn soustraction_correcte() {
    let c = calcule("10 - 4 =");
    assert_eq!(c.valeur(), 6.0);
    assert_eq!(c.description(), "10 - 4 =");
}

#[test]
fn fonctions_standard() {
    assert_proche(calcule("e ln").valeur(), 1.0);
    assert_proche(calcule("1000 log₁₀").valeur(), 3.0);
    assert_proche(calcule("4 1/⒳").valeur(), 0.25);
    assert_proche(calcule("27 ∛").valeur(), 3.0);
    assert_proche(calcule("0 sinh").valeur(), 0.0);
    assert_proche(calcule("0 cosh").valeur(), 1.0);
    assert_proche(calcule("0 tanh").valeur(), 0.0);
    assert_proche(calcule("0 tan").valeur(), 0.0);
    assert_eq!(calcule("4 1/⒳").description(), "1/(4) =");
    assert_eq!(calcule("2 ± ⒳³").description(), "(-(2))³ =");
}

/* ------------------------ Variables ------------------------ */

#[test]
fn variable_par_defaut_puis_memorisee() {
    let mut c = Cerveau::new();
    c.definir_operande_variable("M");
    assert_eq!(c.valeur(), 0.0);

    // bouton →M : on écrit la table puis on rejoue le programme
    c.valeurs_variables_mut().insert("M".into(), 5.0);
    let p = c.programme();
    c.restaurer_programme(&p);
    assert_eq!(c.valeur(), 5.0);

    saisir(&mut c, "✕ 2 =");
    assert_eq!(c.valeur(), 10.0);
    assert_eq!(c.description(), "M ✕ 2 =");
}

#[test]
fn reevaluation_retroactive() {
    let mut c = calcule("3 + M =");
    assert_eq!(c.valeur(), 3.0);

    c.definir_variable("M", 4.0);
    let p = c.programme();
    c.restaurer_programme(&p);
    assert_eq!(c.valeur(), 7.0);
    assert_eq!(c.description(), "3 + M =");
}

/* ------------------------ Remises à zéro ------------------------ */

#[test]
fn vider_efface_programme_et_variables() {
    let mut c = calcule("3 + M");
    c.definir_variable("M", 2.0);

    c.vider();
    assert!(c.programme().is_empty());
    assert!(c.valeurs_variables().is_empty());
    assert_eq!(c.valeur(), 0.0);
    assert!(!c.est_resultat_partiel());
    assert_eq!(c.description(), "=");
}

#[test]
fn purger_conserve_programme_et_variables() {
    let mut c = calcule("3 + 4");
    c.definir_variable("M", 2.0);

    c.purger_operations_en_attente();
    assert_eq!(c.programme().len(), 3);
    assert_eq!(c.valeurs_variables().get("M"), Some(&2.0));
    assert_eq!(c.valeur(), 0.0);
    assert!(!c.est_resultat_partiel());

    // la description repart de zéro
    assert_eq!(c.description(), "=");
    saisir(&mut c, "5 ✕ 2");
    assert_eq!(c.description(), "5 ✕ 2 …");
    assert_eq!(c.programme().len(), 6);
}

#[test]
fn rejeu_apres_purge_sans_le_calcul_annule() {
    let mut c = calcule("3 +");
    c.purger_operations_en_attente();
    saisir(&mut c, "4 =");
    assert_eq!(c.valeur(), 4.0);
    assert_eq!(c.description(), "4 =");
    assert_eq!(c.programme_courant(), vec![Jeton::Nombre(4.0), Jeton::symbole("=")]);

    let p = c.programme_courant();
    c.restaurer_programme(&p);
    assert_eq!(c.valeur(), 4.0);
    assert_eq!(c.description(), "4 =");
    assert_eq!(c.programme(), p);
}

/* ------------------------ Robustesse ------------------------ */

#[test]
fn symbole_inconnu_enregistre_et_rejoue() {
    let mut c = calcule("2 + bidule 3 =");
    assert_eq!(c.valeur(), 5.0);
    assert_eq!(c.programme()[2], Jeton::symbole("bidule"));

    let p = c.programme();
    c.restaurer_programme(&p);
    assert_eq!(c.programme(), p);
    assert_eq!(c.valeur(), 5.0);
}

#[test]
fn domaine_invalide_se_propage() {
    let c = calcule("1 ± ln + 3 =");
    assert!(c.valeur().is_nan());
    assert_eq!(c.resultat(), "NaN");
    assert_eq!(c.description(), "ln(-(1)) + 3 =");

    let c = calcule("0 1/⒳");
    assert_eq!(c.resultat(), "∞");
}

/* ------------------------ Tables personnalisées ------------------------ */

#[test]
fn table_etendue() {
    let table = TableSymboles::standard_builder()
        .binaire("^", f64::powf, Priorite::Isolee)
        .unaire("abs", f64::abs, Gabarit::Prefixe("|".into()))
        .variable("X")
        .construire();
    let mut c = Cerveau::avec_table(table.into());

    c.definir_variable("X", -3.0);
    saisir(&mut c, "2 ^ 3 + X =");
    assert_eq!(c.valeur(), 5.0);
    assert_eq!(c.description(), "(2 ^ 3) + X =");

    saisir(&mut c, "abs");
    assert_eq!(c.valeur(), 5.0);
    assert_eq!(c.description(), "|((2 ^ 3) + X) =");
}

#[test]
fn reglages_dans_la_description() {
    let mut c = Cerveau::new().avec_reglages(Reglages::avec_decimales(2));
    saisir(&mut c, "1 ÷ 3 =");
    assert_eq!(c.resultat(), "0.33");
    assert_eq!(c.description(), "1 ÷ 3 =");

    c.definir_operande(0.127);
    assert_eq!(c.description(), "0.13 =");
}

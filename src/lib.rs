//! Calculatrice grapheur : noyau d'évaluation réutilisable (sans UI).

pub mod noyau;

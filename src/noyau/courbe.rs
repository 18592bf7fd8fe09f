// src/noyau/courbe.rs
//
// Échantillonnage d'une fonction y = f(x) pour le grapheur.
// Pas de dessin ici : on produit des segments de points continus.
// Un segment est coupé :
// - sur un point non fini (NaN / ∞), qui est écarté,
// - sur une pente trop forte entre deux points (discontinuité, ex: tan).

use log::debug;

/// Pente au-delà de laquelle deux points consécutifs ne sont pas reliés.
pub const PENTE_MAX_DEFAUT: f64 = 100.0;

/// Garde-fou : nombre maximal d'échantillons par tracé.
pub const ECHANTILLONS_MAX: usize = 100_000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Echantillonnage {
    pub x_min: f64,
    pub x_max: f64,
    pub pas: f64,
    pub pente_max: f64,
}

impl Echantillonnage {
    pub fn new(x_min: f64, x_max: f64, pas: f64) -> Self {
        Self {
            x_min,
            x_max,
            pas,
            pente_max: PENTE_MAX_DEFAUT,
        }
    }

    /// Comme un écran : `largeur` points, `points_par_unite` points pour 1,
    /// origine au centre.
    pub fn ecran(largeur: f64, points_par_unite: f64) -> Self {
        let demi = largeur / 2.0 / points_par_unite;
        Self::new(-demi, demi, 1.0 / points_par_unite)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Segment {
    pub points: Vec<(f64, f64)>,
}

/// Échantillonne `f` sur [x_min, x_max].
/// Un intervalle vide ou un pas invalide donne une liste vide.
pub fn echantillonner(f: impl Fn(f64) -> f64, e: &Echantillonnage) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();

    if e.pas.is_nan()
        || e.pas <= 0.0
        || !e.x_min.is_finite()
        || !e.x_max.is_finite()
        || e.x_max < e.x_min
    {
        return segments;
    }

    // pas élargi si besoin : on couvre toujours [x_min, x_max]
    let etendue = e.x_max - e.x_min;
    let mut pas = e.pas;
    if etendue / pas > ECHANTILLONS_MAX as f64 {
        pas = etendue / ECHANTILLONS_MAX as f64;
        debug!("pas {} trop fin, élargi à {pas}", e.pas);
    }

    let n = ((etendue / pas).floor() as usize).min(ECHANTILLONS_MAX);
    let mut courant = Segment::default();

    for i in 0..=n {
        let x = e.x_min + i as f64 * pas;
        let y = f(x);

        if !y.is_finite() {
            fermer(&mut segments, &mut courant);
            continue;
        }

        if let Some(&(x0, y0)) = courant.points.last() {
            let pente = (y - y0) / (x - x0);
            if pente.abs() >= e.pente_max {
                fermer(&mut segments, &mut courant);
            }
        }
        courant.points.push((x, y));
    }

    fermer(&mut segments, &mut courant);
    segments
}

fn fermer(segments: &mut Vec<Segment>, courant: &mut Segment) {
    if !courant.points.is_empty() {
        segments.push(std::mem::take(courant));
    }
}

// src/noyau/format.rs
//
// Frontière d’affichage : le noyau rend un Decimal exact, l’écran veut du texte court.

use super::decimal::Decimal;

/// Affichage final : zéros fractionnaires retirés, jamais d’exposant.
/// Ce texte sert aussi de nouvelle entrée après "=".
pub fn format_resultat(d: &Decimal) -> String {
    d.sans_zeros_inutiles().to_plain_string()
}

//! Spreadsheet and PDF rendering for requests and attestations.
//!
//! Formatters take domain models and return the file bytes; controllers attach the
//! download headers. Missing values are left as empty cells in spreadsheets and printed as
//! `N/A` on receipts.

pub mod excel;
pub mod pdf;

/// Human-readable label for an attestation type code. Unknown codes are returned as-is.
pub fn attestation_type_label(code: &str) -> &str {
    match code {
        "revenu_globale" => "Attestation de Revenu Globale",
        "tva_logement_social" => "Attestation d'Assujettissement au TVA Logement Social",
        "renseignement_deces" => "Attestation Renseignement Décès",
        "depart_definitif" => "Attestation Départ Définitif",
        other => other,
    }
}

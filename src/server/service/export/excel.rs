use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook, Worksheet, XlsxError};

use crate::server::{
    error::export::ExportError,
    model::{attestation::Attestation, request::Request},
    service::export::attestation_type_label,
    util::format::format_date,
};

pub const REQUESTS_FILENAME: &str = "Tableau de TP.xlsx";
pub const ATTESTATIONS_FILENAME: &str = "attestations.xlsx";

const REQUEST_HEADERS: [&str; 18] = [
    "ID",
    "Date d'entrée",
    "Nom/Entreprise",
    "Identifiant",
    "Type",
    "Objet",
    "Date de traitement",
    "Statut",
    "IF",
    "ICE",
    "Secteur",
    "Agent",
    "Motif de rejet",
    "TP",
    "Email",
    "GSM",
    "Fix",
    "Remarque",
];

const ATTESTATION_HEADERS: [&str; 12] = [
    "ID",
    "CIN",
    "IF",
    "Nom",
    "Prénom",
    "Email",
    "Téléphone",
    "Type d'attestation",
    "Statut",
    "Date de création",
    "Date de mise à jour",
    "Créé par",
];

const TIMESTAMP_MINUTES: &str = "%Y-%m-%d %H:%M";

/// Renders the request register as a single `Requests` sheet.
pub fn requests_workbook(requests: &[Request]) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Requests")?;
    write_header(sheet, &REQUEST_HEADERS)?;

    for (i, request) in requests.iter().enumerate() {
        let row = i as RowNum + 1;
        let date_entree = request.date_entree.as_ref().map(format_date);
        let date_traitement = request.date_traitement.as_ref().map(format_date);

        sheet.write_number(row, 0, request.id)?;
        let cells: [Option<&str>; 17] = [
            date_entree.as_deref(),
            Some(request.raison_sociale_noms_prenom.as_str()),
            request.primary_identifier(),
            request.pm_pp.as_deref(),
            request.objet.as_deref(),
            date_traitement.as_deref(),
            request.etat.as_deref(),
            request.if_value.as_deref(),
            request.ice.as_deref(),
            request.secteur.as_deref(),
            request.agent_username.as_deref(),
            request.motif_rejet.as_deref(),
            request.tp.as_deref(),
            request.email.as_deref(),
            request.gsm.as_deref(),
            request.fix.as_deref(),
            request.remarque.as_deref(),
        ];
        write_row(sheet, row, 1, &cells)?;
    }

    sheet.autofit();
    Ok(workbook.save_to_buffer()?)
}

/// Renders attestations as a single `Attestations` sheet.
pub fn attestations_workbook(attestations: &[Attestation]) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Attestations")?;
    write_header(sheet, &ATTESTATION_HEADERS)?;

    for (i, attestation) in attestations.iter().enumerate() {
        let row = i as RowNum + 1;
        let created = attestation.created_at.format(TIMESTAMP_MINUTES).to_string();
        let updated = attestation.updated_at.format(TIMESTAMP_MINUTES).to_string();

        sheet.write_number(row, 0, attestation.id)?;
        let cells: [Option<&str>; 11] = [
            Some(attestation.cin.as_str()),
            Some(attestation.if_value.as_str()),
            Some(attestation.nom.as_str()),
            Some(attestation.prenom.as_str()),
            attestation.email.as_deref(),
            attestation.phone.as_deref(),
            Some(attestation_type_label(&attestation.attestation_type)),
            Some(attestation.status.as_str()),
            Some(created.as_str()),
            Some(updated.as_str()),
            attestation.creator_username.as_deref(),
        ];
        write_row(sheet, row, 1, &cells)?;
    }

    sheet.autofit();
    Ok(workbook.save_to_buffer()?)
}

fn write_header(sheet: &mut Worksheet, headers: &[&str]) -> Result<(), XlsxError> {
    let bold = Format::new().set_bold();
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string_with_format(0, col as ColNum, *header, &bold)?;
    }
    Ok(())
}

/// Writes string cells starting at `first_col`; `None` leaves the cell empty.
fn write_row(
    sheet: &mut Worksheet,
    row: RowNum,
    first_col: ColNum,
    cells: &[Option<&str>],
) -> Result<(), XlsxError> {
    for (offset, cell) in cells.iter().enumerate() {
        if let Some(value) = cell {
            sheet.write_string(row, first_col + offset as ColNum, *value)?;
        }
    }
    Ok(())
}

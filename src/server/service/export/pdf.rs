//! One-page A4 receipts rendered with the built-in Helvetica fonts.

use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
};

use crate::server::{
    error::export::ExportError,
    model::{attestation::Attestation, request::Request},
    service::export::attestation_type_label,
    util::format::format_receipt_date,
};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 20.0;
const VALUE_COLUMN: f32 = 75.0;
const ROW_GAP: f32 = 4.0;
const MISSING: &str = "N/A";

const TITLE_SIZE: f32 = 15.0;
const BODY_SIZE: f32 = 11.0;
const FOOTER_SIZE: f32 = 9.0;

/// Millimetres per point.
const PT_TO_MM: f32 = 0.3528;
/// Upper bound on Helvetica glyph advance, as a fraction of the font size. Generous for
/// mixed-case text so wrapped lines stay inside their column.
const GLYPH_WIDTH_EM: f32 = 0.6;
/// Baseline-to-baseline distance, as a multiple of the font size.
const LINE_SPACING: f32 = 1.3;

const REQUEST_FOOTER: &str = "Ce reçu confirme le dépôt de votre demande d'inscription à la TP. \
                              Veuillez conserver ce document.";
const ATTESTATION_FOOTER: &str =
    "Ce reçu confirme la création de votre attestation. Veuillez conserver ce document.";

pub fn request_receipt_filename(id: i32) -> String {
    format!("recu_demande_{id}.pdf")
}

pub fn attestation_receipt_filename(id: i32) -> String {
    format!("attestation_receipt_{id}.pdf")
}

/// Renders the deposit receipt for a TP registration request.
pub fn request_receipt(request: &Request) -> Result<Vec<u8>, ExportError> {
    let kind = match request.pm_pp.as_deref() {
        Some("PP") => "Personne Physique",
        _ => "Personne Morale",
    };
    let id = request.id.to_string();
    let rows = [
        ("Numéro d'Ordre", Some(id.as_str())),
        ("Nom/Entreprise", Some(request.raison_sociale_noms_prenom.as_str())),
        ("Type", Some(kind)),
        ("Objet", request.objet.as_deref()),
        ("CIN", request.cin.as_deref()),
        ("IF", request.if_value.as_deref()),
    ];

    render(Receipt {
        title: "Reçu de Dépôt de la demande à l'inscription à la TP".to_string(),
        date: request.date_entree.as_ref().map(format_receipt_date),
        rows: &rows,
        footer: REQUEST_FOOTER,
    })
}

/// Renders the filing receipt for an attestation.
pub fn attestation_receipt(attestation: &Attestation) -> Result<Vec<u8>, ExportError> {
    let label = attestation_type_label(&attestation.attestation_type);
    let rows = [
        ("Type d'attestation", Some(label)),
        ("Status", Some(attestation.status.as_str())),
        ("Nom", Some(attestation.nom.as_str())),
        ("Prénom", Some(attestation.prenom.as_str())),
        ("CIN", Some(attestation.cin.as_str())),
        ("IF", Some(attestation.if_value.as_str())),
        ("Email", attestation.email.as_deref()),
        ("Téléphone", attestation.phone.as_deref()),
    ];

    render(Receipt {
        title: format!("Reçu d'Attestation - {label}"),
        date: Some(format_receipt_date(&attestation.created_at.date_naive())),
        rows: &rows,
        footer: ATTESTATION_FOOTER,
    })
}

struct Receipt<'a> {
    title: String,
    /// Already formatted `dd/MM/yyyy`.
    date: Option<String>,
    rows: &'a [(&'a str, Option<&'a str>)],
    footer: &'a str,
}

fn render(receipt: Receipt<'_>) -> Result<Vec<u8>, ExportError> {
    let (doc, page, layer) = PdfDocument::new(
        receipt.title.as_str(),
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Receipt",
    );
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
    let layer = doc.get_page(page).get_layer(layer);

    let full_width = PAGE_WIDTH - 2.0 * MARGIN;
    let mut cursor = Cursor {
        doc: &doc,
        layer,
        y: PAGE_HEIGHT - 30.0,
    };

    cursor.paragraph(&receipt.title, TITLE_SIZE, MARGIN, full_width, &bold);

    cursor.y -= 4.0;
    let date = receipt.date.as_deref().unwrap_or(MISSING);
    cursor.paragraph(&format!("Date: {date}"), BODY_SIZE, MARGIN, full_width, &regular);

    cursor.y -= 8.0;
    for (label, value) in receipt.rows {
        cursor.row(&bold, &regular, label, value.unwrap_or(MISSING));
        cursor.y -= ROW_GAP;
    }

    cursor.y -= 8.0;
    cursor.paragraph(receipt.footer, FOOTER_SIZE, MARGIN, full_width, &regular);

    Ok(doc.save_to_bytes()?)
}

/// Writing position on the current page. Moves to a fresh page when a line would cross
/// the bottom margin.
struct Cursor<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    /// Baseline of the next line, in millimetres from the bottom edge.
    y: f32,
}

impl Cursor<'_> {
    fn ensure_room(&mut self, height: f32) {
        if self.y - height < MARGIN {
            let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Receipt");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT - MARGIN;
        }
    }

    fn paragraph(&mut self, text: &str, size: f32, x: f32, width: f32, font: &IndirectFontRef) {
        let step = line_height(size);
        for line in wrap_text(text, size, width) {
            self.ensure_room(step);
            self.layer.use_text(line, size, Mm(x), Mm(self.y), font);
            self.y -= step;
        }
    }

    /// Label in the left column, value wrapped in the right column.
    fn row(
        &mut self,
        label_font: &IndirectFontRef,
        value_font: &IndirectFontRef,
        label: &str,
        value: &str,
    ) {
        let step = line_height(BODY_SIZE);
        let lines = wrap_text(value, BODY_SIZE, PAGE_WIDTH - MARGIN - VALUE_COLUMN);

        self.ensure_room(step);
        self.layer
            .use_text(label, BODY_SIZE, Mm(MARGIN), Mm(self.y), label_font);

        for (i, line) in lines.into_iter().enumerate() {
            if i > 0 {
                self.ensure_room(step);
            }
            self.layer
                .use_text(line, BODY_SIZE, Mm(VALUE_COLUMN), Mm(self.y), value_font);
            self.y -= step;
        }
    }
}

fn line_height(size: f32) -> f32 {
    size * PT_TO_MM * LINE_SPACING
}

/// Characters that fit in `width_mm` at `size` points.
fn chars_per_line(size: f32, width_mm: f32) -> usize {
    ((width_mm / (size * PT_TO_MM * GLYPH_WIDTH_EM)) as usize).max(1)
}

/// Breaks `text` into lines that fit `width_mm` at `size` points.
///
/// Breaks on whitespace; a word longer than a whole line is split across lines. Always
/// returns at least one line.
fn wrap_text(text: &str, size: f32, width_mm: f32) -> Vec<String> {
    let budget = chars_per_line(size, width_mm);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();

        while chars.len() > budget {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = chars.split_off(budget);
            lines.push(chars.into_iter().collect());
            chars = rest;
        }

        let needed = if current_len == 0 {
            chars.len()
        } else {
            current_len + 1 + chars.len()
        };
        if needed > budget {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current_len += chars.len();
        current.extend(chars);
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

//! Record snapshot selection and prompt assembly for the assistant.

use std::fmt::Write;

use crate::server::{
    model::{
        attestation::Attestation, request::Request, type_attestation::TypeAttestation, user::User,
    },
    service::chatbot::language::Language,
    util::{format::format_timestamp, parse::parse_id_reference},
};

const NULL: &str = "null";
const NOBODY: &str = "N/A";

/// Which tables a question touches and which record it targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotScope {
    /// First `id=N` reference in the question.
    pub target_id: Option<i32>,
    pub attestations: bool,
    pub requests: bool,
    pub types: bool,
    pub users: bool,
}

impl SnapshotScope {
    /// Derives the scope from keywords in the question.
    ///
    /// When no table keyword is present every table is in scope.
    pub fn from_question(question: &str) -> Self {
        let lower = question.to_lowercase();
        let attestations = lower.contains("attestation");
        let requests = lower.contains("request") || lower.contains("demande");
        let types = lower.contains("type");
        let users = lower.contains("user") || lower.contains("utilisateur");
        let none_mentioned = !(attestations || requests || types || users);

        Self {
            target_id: parse_id_reference(question),
            attestations: attestations || none_mentioned,
            requests: requests || none_mentioned,
            types: types || none_mentioned,
            users: users || none_mentioned,
        }
    }

    /// Whether types are listed in full rather than narrowed to the target record.
    ///
    /// Types are narrowed only when the question names no table but references an ID.
    pub fn lists_all_types(&self) -> bool {
        self.target_id.is_none() || !self.is_unscoped()
    }

    fn is_unscoped(&self) -> bool {
        self.attestations && self.requests && self.types && self.users
    }
}

/// Records handed to the model alongside the question.
#[derive(Debug, Default)]
pub struct Snapshot {
    pub types: Vec<TypeAttestation>,
    pub attestations: Vec<Attestation>,
    pub requests: Vec<Request>,
    pub users: Vec<User>,
}

/// Builds the full prompt: instructions, data sections, question, closing instructions.
pub fn build_prompt(question: &str, language: Language, snapshot: &Snapshot) -> String {
    let mut prompt = String::from(instructions(language));

    let french = language == Language::French;

    if !snapshot.types.is_empty() {
        prompt.push_str(if french {
            "Types d'attestations disponibles:\n"
        } else {
            "Available attestation types:\n"
        });
        for t in &snapshot.types {
            let _ = writeln!(
                prompt,
                "- ID: {}, Label: {}, Créé le: {}",
                t.id,
                t.label,
                format_timestamp(&t.created_at)
            );
        }
        prompt.push('\n');
    }

    if !snapshot.attestations.is_empty() {
        prompt.push_str("Attestations:\n");
        for a in &snapshot.attestations {
            let _ = writeln!(
                prompt,
                "- ID: {}, Type: {}, CIN: {}, IF: {}, Nom: {} {}, Email: {}, Téléphone: {}, \
                 Statut: {}, Créé le: {}, Mis à jour le: {}, Créé par: {}, Livré par: {}",
                a.id,
                a.attestation_type,
                a.cin,
                a.if_value,
                a.nom,
                a.prenom,
                or_null(&a.email),
                or_null(&a.phone),
                a.status,
                format_timestamp(&a.created_at),
                format_timestamp(&a.updated_at),
                a.creator_username.as_deref().unwrap_or(NOBODY),
                a.delivered_by_username.as_deref().unwrap_or(NOBODY),
            );
        }
        prompt.push('\n');
    }

    if !snapshot.requests.is_empty() {
        prompt.push_str(if french { "Demandes:\n" } else { "Requests:\n" });
        for r in &snapshot.requests {
            let _ = writeln!(
                prompt,
                "- ID: {}, Type: {}, CIN: {}, IF: {}, ICE: {}, Nom: {}, Email: {}, \
                 Téléphone: {}/{}, Secteur: {}, PM/PP: {}, TP: {}, État: {}, \
                 Date d'entrée: {}, Date de traitement: {}, Motif de rejet: {}, Remarque: {}, \
                 Créé le: {}, Mis à jour le: {}, Créé par: {}, Agent: {}",
                r.id,
                or_null(&r.objet),
                or_null(&r.cin),
                or_null(&r.if_value),
                or_null(&r.ice),
                r.raison_sociale_noms_prenom,
                or_null(&r.email),
                or_null(&r.gsm),
                or_null(&r.fix),
                or_null(&r.secteur),
                or_null(&r.pm_pp),
                or_null(&r.tp),
                or_null(&r.etat),
                date_or_null(r.date_entree),
                date_or_null(r.date_traitement),
                or_null(&r.motif_rejet),
                or_null(&r.remarque),
                format_timestamp(&r.created_at),
                format_timestamp(&r.updated_at),
                r.creator_username.as_deref().unwrap_or(NOBODY),
                r.agent_username.as_deref().unwrap_or(NOBODY),
            );
        }
        prompt.push('\n');
    }

    if !snapshot.users.is_empty() {
        prompt.push_str(if french { "Utilisateurs:\n" } else { "Users:\n" });
        for u in &snapshot.users {
            let _ = writeln!(
                prompt,
                "- ID: {}, Nom d'utilisateur: {}, Email: {}, Rôle: {}",
                u.id,
                u.username,
                u.email,
                u.role.as_str()
            );
        }
        prompt.push('\n');
    }

    let _ = writeln!(prompt, "Question: {question}");
    prompt.push_str(closing(language));

    prompt
}

fn instructions(language: Language) -> &'static str {
    match language {
        Language::French => concat!(
            "=== INSTRUCTIONS CRITIQUES ===\n",
            "RÉPONDEZ UNIQUEMENT EN FRANÇAIS. AUCUN MOT EN ANGLAIS N'EST AUTORISÉ.\n",
            "Vous êtes l'Assistant DGI, un chatbot amical et professionnel pour l'application ",
            "Direction Générale des Impôts (DGI).\n",
            "RÈGLES STRICTES:\n",
            "1. Répondez TOUJOURS en français\n",
            "2. N'utilisez AUCUN mot anglais\n",
            "3. Soyez naturel et conversationnel\n",
            "4. Soyez précis avec les données\n",
            "5. Soyez concis mais informatif\n",
            "6. Si vous ne trouvez pas l'information, dites-le poliment en français\n\n",
        ),
        Language::English => concat!(
            "=== CRITICAL INSTRUCTIONS ===\n",
            "RESPOND ONLY IN ENGLISH. NO FRENCH WORDS ARE ALLOWED.\n",
            "You are DGI Assistant, a friendly and professional chatbot for the ",
            "Direction Générale des Impôts (DGI) application.\n",
            "STRICT RULES:\n",
            "1. Always respond in English\n",
            "2. Do NOT use ANY French words\n",
            "3. Be natural and conversational\n",
            "4. Be accurate and precise with data\n",
            "5. Be concise but informative\n",
            "6. If you cannot find the information, say so politely in English\n\n",
        ),
    }
}

fn closing(language: Language) -> &'static str {
    match language {
        Language::French => concat!(
            "=== RÉPONSE REQUISE ===\n",
            "RÉPONDEZ MAINTENANT EN FRANÇAIS SEULEMENT. AUCUN MOT ANGLAIS.\n",
            "Utilisez les informations ci-dessus pour répondre de manière naturelle et précise.\n",
            "Si vous ne trouvez pas l'information demandée, dites-le poliment en français.\n",
            "RÉPONSE:",
        ),
        Language::English => concat!(
            "=== REQUIRED RESPONSE ===\n",
            "RESPOND NOW IN ENGLISH ONLY. NO FRENCH WORDS.\n",
            "Use the information above to respond naturally and precisely.\n",
            "If you cannot find the requested information, say so politely in English.\n",
            "RESPONSE:",
        ),
    }
}

fn or_null(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(NULL)
}

fn date_or_null(value: Option<chrono::NaiveDate>) -> String {
    value.map_or_else(|| NULL.to_string(), |d| d.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::model::user::Role;
    use chrono::{TimeZone, Utc};

    #[test]
    fn unscoped_question_covers_every_table() {
        let scope = SnapshotScope::from_question("Quoi de neuf ?");

        assert!(scope.attestations && scope.requests && scope.types && scope.users);
        assert_eq!(scope.target_id, None);
        assert!(scope.lists_all_types());
    }

    #[test]
    fn unscoped_question_with_id_narrows_types() {
        let scope = SnapshotScope::from_question("Tell me about id = 3");

        assert_eq!(scope.target_id, Some(3));
        assert!(!scope.lists_all_types());
    }

    #[test]
    fn keywords_limit_tables() {
        let scope = SnapshotScope::from_question("Show the demande with ID=12");

        assert!(scope.requests);
        assert!(!scope.attestations && !scope.types && !scope.users);
        assert_eq!(scope.target_id, Some(12));
        assert!(scope.lists_all_types());
    }

    #[test]
    fn english_prompt_sections_and_question() {
        let ts = Utc.with_ymd_and_hms(2025, 1, 15, 14, 0, 0).unwrap();
        let snapshot = Snapshot {
            users: vec![User {
                id: 4,
                username: "processing".to_string(),
                email: "processing@example.com".to_string(),
                password_hash: String::new(),
                role: Role::Processing,
            }],
            types: vec![TypeAttestation {
                id: 1,
                label: "Attestation TVA".to_string(),
                created_at: ts,
            }],
            ..Default::default()
        };

        let prompt = build_prompt("Who is user 4?", Language::English, &snapshot);

        assert!(prompt.starts_with("=== CRITICAL INSTRUCTIONS ===\n"));
        assert!(prompt.contains(
            "Available attestation types:\n- ID: 1, Label: Attestation TVA, Créé le: 2025-01-15 14:00:00\n\n"
        ));
        assert!(prompt.contains(
            "Users:\n- ID: 4, Nom d'utilisateur: processing, Email: processing@example.com, Rôle: ROLE_PROCESSING\n\n"
        ));
        assert!(!prompt.contains("Attestations:\n"));
        assert!(prompt.contains("Question: Who is user 4?\n=== REQUIRED RESPONSE ==="));
        assert!(prompt.ends_with("RESPONSE:"));
    }

    #[test]
    fn french_prompt_renders_missing_values() {
        let ts = Utc.with_ymd_and_hms(2025, 1, 15, 14, 0, 0).unwrap();
        let snapshot = Snapshot {
            attestations: vec![Attestation {
                id: 9,
                if_value: "40012345".to_string(),
                cin: "BE778899".to_string(),
                nom: "El Amrani".to_string(),
                prenom: "Salma".to_string(),
                email: None,
                phone: None,
                attestation_type: "revenu_globale".to_string(),
                status: "déposé".to_string(),
                creator_id: None,
                creator_username: None,
                delivered_by_id: None,
                delivered_by_username: None,
                created_at: ts,
                updated_at: ts,
            }],
            ..Default::default()
        };

        let prompt = build_prompt("Quelle attestation ?", Language::French, &snapshot);

        assert!(prompt.starts_with("=== INSTRUCTIONS CRITIQUES ===\n"));
        assert!(prompt.contains("Nom: El Amrani Salma, Email: null, Téléphone: null"));
        assert!(prompt.contains("Créé par: N/A, Livré par: N/A\n"));
        assert!(prompt.ends_with("RÉPONSE:"));
    }
}

//! French/English detection for questions and validation of generated answers.

const ACCENTED: [char; 14] = [
    'é', 'è', 'à', 'ç', 'ù', 'â', 'ê', 'î', 'ô', 'û', 'ë', 'ï', 'ü', 'ÿ',
];

const FRENCH_VOCABULARY: &[&str] = &[
    "bonjour", "salut", "merci", "oui", "non", "comment", "quoi", "où", "quand", "pourquoi",
    "attestation", "demande", "utilisateur", "type", "statut", "créé", "mis", "jour",
    "téléphone", "email", "nom", "prénom", "cin", "ice", "secteur", "état", "remarque", "motif",
    "rejet", "traitement", "entrée", "agent", "rôle", "créateur", "livré", "par", "avec", "pour",
    "dans", "sur", "sous", "entre", "depuis", "jusqu", "avant", "après", "maintenant", "aujourd",
    "hier", "demain", "semaine", "mois", "année", "premier", "dernier", "nouveau", "ancien",
    "grand", "petit", "bon", "mauvais", "tous", "toutes", "aucun", "aucune", "quelques",
    "plusieurs", "beaucoup", "peu", "combien", "quel", "quelle", "quels", "quelles", "montrez",
    "montre", "voir", "avez", "avez-vous", "sont", "sont-ils", "sont-elles", "est", "est-ce",
    "peux", "peux-tu", "pouvez", "pouvez-vous", "voulez", "voulez-vous", "allez", "allez-vous",
];

const ENGLISH_VOCABULARY: &[&str] = &[
    "hello", "hi", "thanks", "yes", "no", "how", "what", "where", "when", "why", "attestation",
    "request", "user", "type", "status", "created", "updated", "phone", "email", "name", "first",
    "last", "cin", "ice", "sector", "state", "remark", "reason", "rejection", "processing",
    "entry", "agent", "role", "creator", "delivered", "by", "with", "for", "in", "on", "under",
    "between", "since", "until", "before", "after", "now", "today", "yesterday", "tomorrow",
    "week", "month", "year", "new", "old", "big", "small", "good", "bad", "all", "none", "some",
    "several", "many", "few", "show", "tell", "give", "get", "have", "has", "are", "is", "can",
    "could", "would", "will", "do", "does", "did",
];

const FRENCH_QUESTION_WORDS: &[&str] = &[
    "comment", "pourquoi", "où", "quand", "quoi", "combien", "quel", "quelle",
];
const FRENCH_GREETINGS: &[&str] = &["bonjour", "salut", "bonsoir"];

const ENGLISH_QUESTION_WORDS: &[&str] = &[
    "how", "why", "where", "when", "what", "how many", "which", "who",
];
const ENGLISH_GREETINGS: &[&str] = &[
    "hello", "hi", "good morning", "good afternoon", "good evening",
];

/// Words whose presence marks an answer as French.
const FRENCH_INDICATORS: &[&str] = &[
    "bonjour", "salut", "merci", "oui", "non", "comment", "quoi", "où", "quand", "pourquoi",
    "je", "tu", "il", "elle", "nous", "vous", "ils", "elles", "suis", "es", "est", "sommes",
    "êtes", "sont", "avoir", "être", "faire", "aller", "venir", "voir", "savoir", "pouvoir",
    "vouloir", "avec", "pour", "dans", "sur", "sous", "entre", "depuis", "jusqu", "avant",
    "après", "maintenant", "aujourd", "hier", "demain", "semaine", "mois", "année",
    "attestation", "demande", "utilisateur", "statut", "créé", "mis", "jour", "téléphone",
    "email", "nom", "prénom", "cin", "ice", "secteur", "état", "remarque",
];

/// Words whose presence marks an answer as English.
const ENGLISH_INDICATORS: &[&str] = &[
    "hello", "hi", "thanks", "yes", "no", "how", "what", "where", "when", "why", "i", "you",
    "he", "she", "we", "they", "am", "is", "are", "was", "were", "have", "has", "had", "do",
    "does", "did", "can", "could", "would", "will", "with", "for", "in", "on", "under",
    "between", "since", "until", "before", "after", "now", "today", "yesterday", "tomorrow",
    "week", "month", "year", "attestation", "request", "user", "status", "created", "updated",
    "phone", "email", "name", "first", "last", "cin", "ice", "sector", "state", "remark",
];

/// Indicator words an answer needs before it is accepted.
const MIN_INDICATORS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    French,
    English,
}

impl Language {
    /// Scores `text` against both vocabularies. Ties go to French.
    ///
    /// Every vocabulary word found as a substring of the lowercased text scores one point.
    /// French earns +5 for any accented letter, +3 for any question word and +4 for any
    /// greeting; English earns +3 for a question word and +4 for a greeting.
    pub fn detect(text: &str) -> Self {
        let lower = text.to_lowercase();

        let mut french = count_contained(&lower, FRENCH_VOCABULARY);
        let mut english = count_contained(&lower, ENGLISH_VOCABULARY);

        if has_accent(&lower) {
            french += 5;
        }
        if contains_any(&lower, FRENCH_QUESTION_WORDS) {
            french += 3;
        }
        if contains_any(&lower, FRENCH_GREETINGS) {
            french += 4;
        }
        if contains_any(&lower, ENGLISH_QUESTION_WORDS) {
            english += 3;
        }
        if contains_any(&lower, ENGLISH_GREETINGS) {
            english += 4;
        }

        if english > french {
            Self::English
        } else {
            Self::French
        }
    }

    /// Whether a generated answer reads as this language.
    ///
    /// French answers pass with any accented letter or enough indicator words; English
    /// answers need enough indicator words.
    pub fn accepts(&self, answer: &str) -> bool {
        let lower = answer.to_lowercase();
        match self {
            Self::French => {
                has_accent(&lower) || count_contained(&lower, FRENCH_INDICATORS) >= MIN_INDICATORS
            }
            Self::English => count_contained(&lower, ENGLISH_INDICATORS) >= MIN_INDICATORS,
        }
    }

    /// Answer used when the model's reply does not read as this language.
    pub fn fallback_greeting(&self) -> &'static str {
        match self {
            Self::French => {
                "Bonjour ! Je suis l'assistant DGI. Comment puis-je vous aider aujourd'hui ?"
            }
            Self::English => "Hello! I am the DGI assistant. How can I help you today?",
        }
    }

    /// Answer used when the model replied without a `response` field.
    pub fn no_response_message(&self) -> &'static str {
        match self {
            Self::French => {
                "Je m'excuse, mais je n'ai pas pu générer une réponse à ce moment."
            }
            Self::English => "I apologize, but I couldn't generate a response at this time.",
        }
    }

    /// Answer used when the model endpoint returned a non-success status.
    pub fn upstream_error_message(&self) -> &'static str {
        match self {
            Self::French => {
                "Je m'excuse, mais je rencontre des difficultés à traiter votre demande."
            }
            Self::English => "I apologize, but I'm having difficulties processing your request.",
        }
    }

    /// Answer used when the model endpoint could not be reached.
    pub fn transport_error_message(&self) -> &'static str {
        match self {
            Self::French => {
                "Je m'excuse, mais je rencontre des difficultés techniques. \
                 Veuillez réessayer plus tard."
            }
            Self::English => {
                "I apologize, but I'm experiencing technical difficulties. \
                 Please try again later."
            }
        }
    }
}

fn has_accent(text: &str) -> bool {
    text.chars().any(|c| ACCENTED.contains(&c))
}

fn contains_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|w| text.contains(w))
}

fn count_contained(text: &str, words: &[&str]) -> usize {
    words.iter().filter(|w| text.contains(*w)).count()
}

//! Static scaffolding interpolated into detail documents

use super::document::{Article, Chapter, Step};

/// Shown when a procedure has no duration
pub const DEFAULT_DURATION: &str = "15-30 jours";

/// Shown when a procedure has no cost
pub const DEFAULT_COST: &str = "Variable selon dossier";

/// Shown for any other missing optional field
pub const NOT_PROVIDED: &str = "Non renseigné";

pub(super) const WHERE_TO_APPLY: &[(&str, &str)] = &[
    ("Service", "État Civil"),
    ("Adresse", "Mairie de la commune"),
    ("Horaires", "8h-16h30"),
    ("Tél", "021 XX XX XX"),
];

pub(super) const REQUIRED_DOCUMENTS: &[&str] = &[
    "Pièce d'identité originale",
    "Justificatif de domicile récent",
    "Formulaire de demande",
    "Timbre fiscal (si applicable)",
];

const PROCEDURE_STEPS: &[(&str, &str)] = &[
    (
        "Préparation du dossier",
        "Rassembler tous les documents nécessaires listés ci-contre",
    ),
    (
        "Dépôt de la demande",
        "Se présenter au guichet avec le dossier complet",
    ),
    (
        "Instruction du dossier",
        "Vérification et traitement par les services compétents",
    ),
    (
        "Retrait du document",
        "Récupération du document sur présentation du récépissé",
    ),
];

pub(super) fn procedure_steps() -> Vec<Step> {
    PROCEDURE_STEPS
        .iter()
        .zip(1..)
        .map(|(&(title, detail), number)| Step {
            number,
            title: title.to_string(),
            detail: detail.to_string(),
        })
        .collect()
}

/// Four chapters, seven articles; article 1 carries the description
pub(super) fn legal_chapters(description: &str) -> Vec<Chapter> {
    let chapter = |title: &str, articles: Vec<Article>| Chapter {
        title: title.to_string(),
        articles,
    };
    let article = |label: &str, paragraphs: &[&str]| Article {
        label: label.to_string(),
        paragraphs: paragraphs.iter().map(|p| p.to_string()).collect(),
    };

    vec![
        chapter(
            "CHAPITRE I - DISPOSITIONS GÉNÉRALES",
            vec![article(
                "Article 1er",
                &[
                    description,
                    "Le présent texte définit les règles et procédures applicables dans le cadre de la législation algérienne.",
                ],
            )],
        ),
        chapter(
            "CHAPITRE II - CHAMP D'APPLICATION",
            vec![
                article(
                    "Article 2",
                    &["Les dispositions du présent texte s'appliquent sur l'ensemble du territoire national."],
                ),
                article(
                    "Article 3",
                    &["Toute personne physique ou morale est tenue de respecter les dispositions du présent texte."],
                ),
            ],
        ),
        chapter(
            "CHAPITRE III - MODALITÉS D'APPLICATION",
            vec![
                article(
                    "Article 4",
                    &["Les modalités d'application du présent texte sont définies par voie réglementaire."],
                ),
                article(
                    "Article 5",
                    &["Le contrôle de l'application du présent texte est assuré par les autorités compétentes."],
                ),
            ],
        ),
        chapter(
            "CHAPITRE IV - DISPOSITIONS FINALES",
            vec![
                article(
                    "Article 6",
                    &["Le présent texte entre en vigueur à compter de sa publication au Journal Officiel."],
                ),
                article(
                    "Article 7",
                    &["Toutes dispositions antérieures contraires au présent texte sont abrogées."],
                ),
            ],
        ),
    ]
}

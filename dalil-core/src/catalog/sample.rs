//! Built-in reference procedures

use super::{CatalogRecord, Digitization, RecordKind};

struct SampleProcedure {
    id: u64,
    title: &'static str,
    description: &'static str,
    category: &'static str,
    record_type: &'static str,
    duration: &'static str,
    complexity: &'static str,
    popularity: u32,
    status: &'static str,
    digitization: Digitization,
}

const PROCEDURES: &[SampleProcedure] = &[
    SampleProcedure {
        id: 1,
        title: "Création d'entreprise SARL",
        description: "Procédure complète pour créer une société à responsabilité limitée",
        category: "Entreprise",
        record_type: "commercial",
        duration: "15-30 jours",
        complexity: "Moyenne",
        popularity: 95,
        status: "active",
        digitization: Digitization::Yes,
    },
    SampleProcedure {
        id: 2,
        title: "Permis de construire",
        description: "Demande d'autorisation de construction pour bâtiment résidentiel",
        category: "Urbanisme",
        record_type: "urbanisme",
        duration: "2-3 mois",
        complexity: "Élevée",
        popularity: 87,
        status: "active",
        digitization: Digitization::Partially,
    },
    SampleProcedure {
        id: 3,
        title: "Carte nationale d'identité",
        description: "Renouvellement ou première demande de CNI",
        category: "État Civil",
        record_type: "civil",
        duration: "7-14 jours",
        complexity: "Faible",
        popularity: 92,
        status: "active",
        digitization: Digitization::Yes,
    },
    SampleProcedure {
        id: 4,
        title: "Passeport biométrique",
        description: "Demande de passeport biométrique pour voyages internationaux",
        category: "État Civil",
        record_type: "civil",
        duration: "10-21 jours",
        complexity: "Moyenne",
        popularity: 89,
        status: "active",
        digitization: Digitization::Yes,
    },
    SampleProcedure {
        id: 5,
        title: "Licence d'importation",
        description: "Obtention d'une licence pour l'importation de marchandises",
        category: "Commerce",
        record_type: "commercial",
        duration: "30-45 jours",
        complexity: "Élevée",
        popularity: 76,
        status: "modified",
        digitization: Digitization::Partially,
    },
    SampleProcedure {
        id: 6,
        title: "Certificat de résidence",
        description: "Demande de certificat de résidence pour usage administratif",
        category: "État Civil",
        record_type: "civil",
        duration: "3-7 jours",
        complexity: "Faible",
        popularity: 85,
        status: "active",
        digitization: Digitization::No,
    },
    SampleProcedure {
        id: 7,
        title: "Agrément sanitaire",
        description: "Obtention d'agrément pour activités liées à l'alimentation",
        category: "Santé",
        record_type: "commercial",
        duration: "45-60 jours",
        complexity: "Élevée",
        popularity: 73,
        status: "suspended",
        digitization: Digitization::No,
    },
    SampleProcedure {
        id: 8,
        title: "Déclaration fiscale entreprise",
        description: "Procédure de déclaration fiscale annuelle pour entreprises",
        category: "Fiscalité",
        record_type: "fiscalite",
        duration: "5-15 jours",
        complexity: "Moyenne",
        popularity: 91,
        status: "active",
        digitization: Digitization::Yes,
    },
];

pub(super) fn procedure_records() -> Vec<CatalogRecord> {
    PROCEDURES
        .iter()
        .map(|sample| {
            let mut record = CatalogRecord::new(
                sample.id,
                RecordKind::Procedure,
                sample.title,
                sample.description,
                sample.category,
                sample.record_type,
                sample.status,
                sample.digitization,
            );
            record.duration = Some(sample.duration.to_string());
            record.complexity = Some(sample.complexity.to_string());
            record.popularity = Some(sample.popularity);
            record
        })
        .collect()
}
